//! Synthèse de faults SOAP autonomes
//!
//! Indépendante de toute opération : seul le squelette d'enveloppe de la
//! version est construit, puis un payload de fault généré contre le type de
//! fault de la version y est greffé.

use soaputils::{XmlCursor, xml};
use soapschema::SampleXmlGenerator;
use xmltree::{Element, XMLNode};

use crate::errors::SoapBuilderError;
use crate::version::SoapVersion;

/// Enveloppe vide (squelette Envelope/Body) pour une version
pub fn build_empty_message(version: SoapVersion) -> Result<String, SoapBuilderError> {
    let cursor = skeleton(version);
    let root = cursor.into_document().expect("envelope root was opened");
    Ok(xml::serialize_pretty(&root)?)
}

/// Fault vide : structure complète, contenu non renseigné
pub fn build_empty_fault(version: SoapVersion) -> Result<String, SoapBuilderError> {
    let root = empty_fault_tree(version)?;
    Ok(xml::serialize_pretty(&root)?)
}

/// Fault renseigné avec le code et le message fournis.
///
/// SOAP 1.1 : réécrit `faultcode`/`faultstring`. SOAP 1.2 : réécrit
/// `Value`/`Text` et pose `xml:lang="en"` sur `Text` (étiquette de langue
/// imposée par le protocole).
pub fn build_fault(
    code: &str,
    message: &str,
    version: SoapVersion,
) -> Result<String, SoapBuilderError> {
    let mut root = empty_fault_tree(version)?;

    match version {
        SoapVersion::Soap11 => {
            xml::set_descendant_text(&mut root, "faultcode", code);
            xml::set_descendant_text(&mut root, "faultstring", message);
        }
        SoapVersion::Soap12 => {
            xml::set_descendant_text(&mut root, "Value", code);
            xml::set_descendant_text(&mut root, "Text", message);
            if let Some(text) = xml::find_descendant_mut(&mut root, "Text") {
                text.attributes
                    .insert("xml:lang".to_string(), "en".to_string());
            }
        }
    }

    Ok(xml::serialize_pretty(&root)?)
}

/// Squelette Envelope/Body, curseur laissé sur le Body
fn skeleton(version: SoapVersion) -> XmlCursor {
    let mut cursor = XmlCursor::new();
    cursor.bind_prefix("s", version.envelope_namespace());
    cursor.begin_element(&version.envelope_qname());
    cursor.begin_element(&version.body_qname());
    cursor
}

fn empty_fault_tree(version: SoapVersion) -> Result<Element, SoapBuilderError> {
    let empty = build_empty_message(version)?;
    let mut cursor = XmlCursor::from_root(xml::parse(&empty)?);

    // Le payload est généré contre le type de fault de la version, parsé
    // comme fragment autonome puis greffé comme unique enfant du Body
    let mut generator = SampleXmlGenerator::new(false);
    let fragment = generator.create_sample(version.fault_type());
    let fault = xml::parse(&fragment)?;
    if cursor.to_child("Body") {
        cursor.append_node(XMLNode::Element(fault));
    }

    Ok(cursor.into_document().expect("parsed document has a root"))
}
