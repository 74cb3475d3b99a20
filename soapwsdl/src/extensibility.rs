//! Métadonnées d'extensibilité SOAP et MIME
//!
//! Chaque binding, opération ou canal WSDL porte une liste d'éléments
//! d'extensibilité. La variation est fermée et bornée : elle est modélisée
//! par une énumération taguée plutôt que par inspection de types bruts.

use serde::{Deserialize, Serialize};
use soaputils::QName;

/// Style d'échange SOAP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoapStyle {
    /// Les parts sont enveloppées dans un élément nommé d'après l'opération
    Rpc,
    /// Les parts sont des enfants directs du Body
    Document,
}

/// Mode de sérialisation du corps SOAP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoapUse {
    Literal,
    /// Encodage SOAP historique (annotations xsi/xsd explicites)
    Encoded,
}

/// Référence d'en-tête SOAP vers une part d'un message WSDL.
///
/// Résolue tardivement : le message ou la part peuvent manquer sans que
/// l'opération entière soit invalide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapHeaderRef {
    pub message: QName,
    pub part: String,
}

/// Élément d'extensibilité WSDL
#[derive(Debug, Clone, PartialEq)]
pub enum ExtensibilityElement {
    /// `soap:binding` (SOAP 1.1)
    SoapBinding {
        transport: String,
        style: Option<SoapStyle>,
    },

    /// `soap12:binding`
    Soap12Binding {
        transport: String,
        style: Option<SoapStyle>,
    },

    /// `soap:operation` / `soap12:operation`
    SoapOperation {
        soap_action: Option<String>,
        style: Option<SoapStyle>,
    },

    /// `soap:body` porté par un canal input/output
    SoapBody {
        namespace: Option<String>,
        use_kind: SoapUse,
        encoding_style: Option<String>,
    },

    /// `soap:header` porté par un canal input/output
    SoapHeader { message: QName, part: String },

    /// `mime:content` déclarant une part véhiculée hors bande
    MimeContent {
        part: String,
        content_type: String,
    },
}

/// Extrait les références d'en-têtes d'une liste d'extensions
pub fn soap_headers(extensibility: &[ExtensibilityElement]) -> Vec<SoapHeaderRef> {
    extensibility
        .iter()
        .filter_map(|e| match e {
            ExtensibilityElement::SoapHeader { message, part } => Some(SoapHeaderRef {
                message: message.clone(),
                part: part.clone(),
            }),
            _ => None,
        })
        .collect()
}

/// Namespace déclaré par `soap:body`, s'il existe
pub fn soap_body_namespace(extensibility: &[ExtensibilityElement]) -> Option<&str> {
    extensibility.iter().find_map(|e| match e {
        ExtensibilityElement::SoapBody { namespace, .. } => namespace.as_deref(),
        _ => None,
    })
}

/// Vrai si `soap:body` déclare `use="encoded"`
pub fn is_encoded(extensibility: &[ExtensibilityElement]) -> bool {
    extensibility.iter().any(|e| {
        matches!(
            e,
            ExtensibilityElement::SoapBody {
                use_kind: SoapUse::Encoded,
                ..
            }
        )
    })
}

/// URI SOAPAction déclarée par `soap:operation`
pub fn soap_action(extensibility: &[ExtensibilityElement]) -> Option<&str> {
    extensibility.iter().find_map(|e| match e {
        ExtensibilityElement::SoapOperation { soap_action, .. } => soap_action.as_deref(),
        _ => None,
    })
}

/// Style déclaré par `soap:operation`, `soap:binding` ou `soap12:binding`
pub fn style(extensibility: &[ExtensibilityElement]) -> Option<SoapStyle> {
    extensibility.iter().find_map(|e| match e {
        ExtensibilityElement::SoapOperation { style, .. }
        | ExtensibilityElement::SoapBinding { style, .. }
        | ExtensibilityElement::Soap12Binding { style, .. } => *style,
        _ => None,
    })
}

/// Vrai si la part est déclarée comme pièce jointe MIME par le canal
pub fn is_attachment_part(extensibility: &[ExtensibilityElement], part_name: &str) -> bool {
    extensibility.iter().any(|e| {
        matches!(e, ExtensibilityElement::MimeContent { part, .. } if part == part_name)
    })
}
