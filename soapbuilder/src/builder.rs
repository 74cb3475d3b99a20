//! Assemblage d'enveloppes SOAP d'exemple

use soaputils::{QName, XmlCursor, xml};
use soapschema::{SampleXmlGenerator, SchemaCatalog};
use soapwsdl::{Definition, SoapHeaderRef, SoapStyle, is_encoded, soap_headers};
use tracing::error;

use crate::config::SoapConfig;
use crate::errors::SoapBuilderError;
use crate::fault;
use crate::operation::OperationIdentity;
use crate::parts::{self, Direction};
use crate::resolver;
use crate::version::{SoapVersion, ns};

/// Assembleur de messages SOAP d'exemple pour un contrat chargé.
///
/// Détient le graphe WSDL et le catalogue de schéma en lecture seule ;
/// toutes les entrées prennent `&self` et une configuration par appel, ce
/// qui rend l'instance partageable entre appelants concurrents.
pub struct SoapMessageBuilder {
    definition: Definition,
    catalog: SchemaCatalog,
}

impl SoapMessageBuilder {
    pub fn new(definition: Definition, catalog: SchemaCatalog) -> Self {
        Self {
            definition,
            catalog,
        }
    }

    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    pub fn catalog(&self) -> &SchemaCatalog {
        &self.catalog
    }

    /// Synthétise le message de requête de l'opération
    pub fn build_request(
        &self,
        identity: &OperationIdentity,
        config: &SoapConfig,
    ) -> Result<String, SoapBuilderError> {
        self.build_message(identity, config, Direction::Request)
    }

    /// Synthétise le message de réponse de l'opération
    pub fn build_response(
        &self,
        identity: &OperationIdentity,
        config: &SoapConfig,
    ) -> Result<String, SoapBuilderError> {
        self.build_message(identity, config, Direction::Response)
    }

    fn build_message(
        &self,
        identity: &OperationIdentity,
        config: &SoapConfig,
        direction: Direction,
    ) -> Result<String, SoapBuilderError> {
        let resolved = resolver::resolve(&self.definition, identity)?;
        let version = resolved.version;

        let channel = match direction {
            Direction::Request => resolved.operation.input.as_ref(),
            Direction::Response => resolved.operation.output.as_ref(),
        };

        // L'encodage est déclaré par le canal input, pour les deux directions
        let soap_enc = resolved
            .operation
            .input
            .as_ref()
            .map(|c| is_encoded(&c.extensibility))
            .unwrap_or(false);

        let mut generator = SampleXmlGenerator::new(soap_enc)
            .with_catalog(&self.catalog)
            .with_ignore_optional(!config.build_optional)
            .with_multi_values(config.multi_values.clone())
            .with_type_comments(config.type_comments)
            .with_max_depth(config.max_depth);

        let mut cursor = XmlCursor::new();
        cursor.bind_prefix("s", version.envelope_namespace());
        cursor.begin_element(&version.envelope_qname());
        if soap_enc {
            // Requis par les annotations de type des valeurs encodées
            cursor.bind_prefix("xsi", ns::XSI);
            cursor.bind_prefix("xsd", ns::XSD);
        }
        cursor.begin_element(&version.body_qname());

        if let Some(channel) = channel {
            match resolved.style {
                SoapStyle::Rpc => parts::build_rpc_parts(
                    &self.definition,
                    &self.catalog,
                    &resolved.operation.name,
                    channel,
                    version,
                    direction,
                    &mut cursor,
                    &mut generator,
                ),
                SoapStyle::Document => parts::build_document_parts(
                    &self.definition,
                    &self.catalog,
                    channel,
                    &mut cursor,
                    &mut generator,
                ),
            }

            if config.always_build_headers {
                let headers = soap_headers(&channel.extensibility);
                if !headers.is_empty() {
                    self.add_headers(&headers, version, &mut cursor, &mut generator);
                }
            }
        }

        let root = cursor.into_document().expect("envelope root was opened");
        Ok(xml::serialize_pretty(&root)?)
    }

    /// Insère le Header avant le Body déjà construit et le peuple.
    ///
    /// Une référence pendante (message ou part absent) est journalisée et
    /// ignorée : elle n'invalide pas la synthèse.
    fn add_headers(
        &self,
        headers: &[SoapHeaderRef],
        version: SoapVersion,
        cursor: &mut XmlCursor,
        generator: &mut SampleXmlGenerator,
    ) {
        cursor.to_root();
        cursor.begin_first_element(&version.header_qname());

        for header in headers {
            let Some(message) = self.definition.get_message(&header.message) else {
                error!("Missing message for header: {}", header.message);
                continue;
            };
            let Some(part) = message.get_part(&header.part) else {
                error!("Missing part for header: {}", header.part);
                continue;
            };
            parts::create_element_for_part(&self.catalog, part, cursor, generator);
        }
    }

    /// Enveloppe vide pour la version du binding
    pub fn build_empty_message_for_binding(
        &self,
        binding: &QName,
    ) -> Result<String, SoapBuilderError> {
        let version = self.binding_version(binding)?;
        fault::build_empty_message(version)
    }

    /// Fault renseigné pour la version du binding
    pub fn build_fault_for_binding(
        &self,
        code: &str,
        message: &str,
        binding: &QName,
    ) -> Result<String, SoapBuilderError> {
        let version = self.binding_version(binding)?;
        fault::build_fault(code, message, version)
    }

    /// Fault vide pour la version du binding
    pub fn build_empty_fault_for_binding(
        &self,
        binding: &QName,
    ) -> Result<String, SoapBuilderError> {
        let version = self.binding_version(binding)?;
        fault::build_empty_fault(version)
    }

    fn binding_version(&self, binding: &QName) -> Result<SoapVersion, SoapBuilderError> {
        let binding = self
            .definition
            .get_binding(binding)
            .ok_or_else(|| SoapBuilderError::BindingNotFound(binding.clone()))?;
        resolver::soap_version(binding)
    }
}
