//! Résolution binding/opération/version/style
//!
//! Traduit une [`OperationIdentity`] en références concrètes dans le graphe
//! WSDL, et fixe une fois pour toutes la version de protocole et le style
//! d'échange de l'appel. Tout le reste du moteur branche sur ces variantes
//! sans jamais réinspecter les métadonnées brutes.

use soapwsdl::{Binding, BindingOperation, Definition, ExtensibilityElement, SoapStyle};

use crate::errors::SoapBuilderError;
use crate::operation::OperationIdentity;
use crate::version::{SoapVersion, transport};

/// Résultat de la résolution d'une identité d'opération
#[derive(Debug)]
pub struct ResolvedOperation<'a> {
    pub binding: &'a Binding,
    pub operation: &'a BindingOperation,
    pub version: SoapVersion,
    pub style: SoapStyle,
}

/// Résout une identité vers l'opération concrète, la version et le style
pub fn resolve<'a>(
    definition: &'a Definition,
    identity: &OperationIdentity,
) -> Result<ResolvedOperation<'a>, SoapBuilderError> {
    let binding = definition
        .get_binding(&identity.binding)
        .ok_or_else(|| SoapBuilderError::BindingNotFound(identity.binding.clone()))?;

    let operation = binding
        .operation(
            &identity.operation,
            identity.input_name.as_deref(),
            identity.output_name.as_deref(),
        )
        .ok_or_else(|| SoapBuilderError::OperationNotFound(identity.operation.clone()))?;

    let version = soap_version(binding)?;
    let style = exchange_style(binding, operation);

    Ok(ResolvedOperation {
        binding,
        operation,
        version,
        style,
    })
}

/// Détermine la version SOAP d'un binding via son URI de transport.
///
/// Un binding sans extension soap:binding/soap12:binding reconnue est un
/// défaut de contrat : fatal, jamais retenté.
pub fn soap_version(binding: &Binding) -> Result<SoapVersion, SoapBuilderError> {
    for extension in &binding.extensibility {
        match extension {
            ExtensibilityElement::SoapBinding { transport: uri, .. } => {
                if uri.starts_with(transport::SOAP_HTTP)
                    || uri.starts_with(transport::MICROSOFT_TCP)
                {
                    return Ok(SoapVersion::Soap11);
                }
            }
            ExtensibilityElement::Soap12Binding { transport: uri, .. } => {
                if uri.starts_with(transport::SOAP_HTTP)
                    || uri.starts_with(transport::SOAP12_HTTP_BINDING)
                    || uri.starts_with(transport::MICROSOFT_TCP)
                {
                    return Ok(SoapVersion::Soap12);
                }
            }
            _ => {}
        }
    }
    Err(SoapBuilderError::UnrecognizedSoapBinding(
        binding.name.clone(),
    ))
}

/// Style d'échange : attribut de l'opération, sinon du binding, sinon Document
pub fn exchange_style(binding: &Binding, operation: &BindingOperation) -> SoapStyle {
    operation
        .style()
        .or_else(|| binding.style())
        .unwrap_or(SoapStyle::Document)
}
