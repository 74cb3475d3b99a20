//! Synthèse du contenu des parts de message
//!
//! Peuple le Body (ou le Header) à partir des parts du message WSDL, dans
//! l'ordre déclaré. Les défauts partiels — message manquant derrière un
//! canal, ancrage de schéma qui ne résout pas — sont journalisés et le
//! sous-arbre concerné reste vide : l'appelant obtient un message
//! majoritairement correct plutôt que pas de message du tout.

use soaputils::{QName, XmlCursor};
use soapschema::{SampleXmlGenerator, SchemaCatalog};
use soapwsdl::{BindingChannel, Definition, Part, is_attachment_part, soap_body_namespace};
use tracing::{error, warn};

use crate::version::SoapVersion;

/// Direction d'un échange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Request,
    Response,
}

/// Parts du message référencé par un canal, dans l'ordre déclaré
fn channel_parts<'a>(definition: &'a Definition, channel: &BindingChannel) -> &'a [Part] {
    match definition.get_message(&channel.message) {
        Some(message) => &message.parts,
        None => {
            error!(
                "Missing message [{}] referenced by binding channel",
                channel.message
            );
            &[]
        }
    }
}

/// Peuple le Body en style Document : une part = un enfant direct du Body
pub(crate) fn build_document_parts(
    definition: &Definition,
    catalog: &SchemaCatalog,
    channel: &BindingChannel,
    cursor: &mut XmlCursor,
    generator: &mut SampleXmlGenerator,
) {
    for part in channel_parts(definition, channel) {
        if is_attachment_part(&channel.extensibility, &part.name) {
            append_attachment_placeholder(cursor, part);
            continue;
        }
        if part.element.is_none() && part.type_name.is_none() {
            // Aucun contenu représentable
            continue;
        }
        cursor.scoped(|c| create_element_for_part(catalog, part, c, generator));
    }
}

/// Peuple le Body en style RPC : wrapper nommé d'après l'opération,
/// un enfant par part
#[allow(clippy::too_many_arguments)]
pub(crate) fn build_rpc_parts(
    definition: &Definition,
    catalog: &SchemaCatalog,
    operation_name: &str,
    channel: &BindingChannel,
    version: SoapVersion,
    direction: Direction,
    cursor: &mut XmlCursor,
    generator: &mut SampleXmlGenerator,
) {
    let namespace = match soap_body_namespace(&channel.extensibility) {
        Some(namespace) => namespace.to_string(),
        None => {
            warn!(
                "Missing namespace on soap:body for RPC {}, using targetNamespace instead (WS-I violation)",
                match direction {
                    Direction::Request => "request",
                    Direction::Response => "response",
                }
            );
            definition.target_namespace().to_string()
        }
    };

    let wrapper = match direction {
        Direction::Request => operation_name.to_string(),
        Direction::Response => format!("{}Response", operation_name),
    };
    cursor.begin_element(&QName::new(namespace, wrapper));

    if generator.is_soap_enc() {
        cursor.set_qualified_attribute(
            &QName::new(version.envelope_namespace(), "encodingStyle"),
            version.encoding_namespace(),
        );
    }

    for part in channel_parts(definition, channel) {
        if is_attachment_part(&channel.extensibility, &part.name) {
            append_attachment_placeholder(cursor, part);
        } else if let Some(type_name) = &part.type_name {
            if !catalog.has_schema_types() {
                continue;
            }
            match catalog.find_type(type_name) {
                Some(ty) => cursor.scoped(|c| {
                    c.begin_local_element(&part.name);
                    generator.create_sample_for_type(ty, c);
                }),
                None => warn!("Failed to find type [{}] for part [{}]", type_name, part.name),
            }
        } else if let Some(element_name) = &part.element {
            if !catalog.has_schema_types() {
                continue;
            }
            match catalog
                .find_element(element_name)
                .and_then(|element| catalog.resolve(&element.ty))
            {
                Some(ty) => cursor.scoped(|c| {
                    c.begin_element(element_name);
                    generator.create_sample_for_type(ty, c);
                }),
                None => warn!(
                    "Failed to find element [{}] for part [{}]",
                    element_name, part.name
                ),
            }
        }
    }
}

/// Élément de part renvoyant vers le contenu hors bande (pièce jointe MIME)
fn append_attachment_placeholder(cursor: &mut XmlCursor, part: &Part) {
    cursor.scoped(|c| {
        c.begin_local_element(&part.name);
        c.set_attribute("href", &format!("{}Attachment", part.name));
    });
}

/// Ouvre l'élément d'une part et le remplit via le générateur.
///
/// L'ancrage élément est tenté d'abord, puis l'ancrage type ; un ancrage
/// qui ne résout pas contre le catalogue laisse le sous-arbre vide.
pub(crate) fn create_element_for_part(
    catalog: &SchemaCatalog,
    part: &Part,
    cursor: &mut XmlCursor,
    generator: &mut SampleXmlGenerator,
) {
    if let Some(element_name) = &part.element {
        cursor.begin_element(element_name);
        if catalog.has_schema_types() {
            match catalog
                .find_element(element_name)
                .and_then(|element| catalog.resolve(&element.ty))
            {
                Some(ty) => generator.create_sample_for_type(ty, cursor),
                None => error!(
                    "Could not find element [{}] specified in part [{}]",
                    element_name, part.name
                ),
            }
        }
        cursor.to_parent();
    } else {
        cursor.begin_local_element(&part.name);
        if let Some(type_name) = &part.type_name {
            if catalog.has_schema_types() {
                match catalog.find_type(type_name) {
                    Some(ty) => generator.create_sample_for_type(ty, cursor),
                    None => error!(
                        "Could not find type [{}] specified in part [{}]",
                        type_name, part.name
                    ),
                }
            }
        }
        cursor.to_parent();
    }
}
