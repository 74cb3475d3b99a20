//! Identité d'opération découplée du graphe WSDL

use serde::{Deserialize, Serialize};
use soaputils::QName;
use soapwsdl::{Binding, BindingOperation};

/// Identité d'une opération de binding.
///
/// Objet valeur immuable : un appelant peut désigner une opération sans
/// retenir le contrat parsé. Les noms de messages input/output lèvent
/// l'ambiguïté entre opérations homonymes ; `output_name` est absent pour
/// une opération one-way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationIdentity {
    pub binding: QName,
    pub operation: String,
    pub input_name: Option<String>,
    pub output_name: Option<String>,
    pub soap_action: Option<String>,
}

impl OperationIdentity {
    pub fn new(binding: QName, operation: impl Into<String>) -> Self {
        Self {
            binding,
            operation: operation.into(),
            input_name: None,
            output_name: None,
            soap_action: None,
        }
    }

    pub fn with_input_name(mut self, name: impl Into<String>) -> Self {
        self.input_name = Some(name.into());
        self
    }

    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = Some(name.into());
        self
    }

    pub fn with_soap_action(mut self, uri: impl Into<String>) -> Self {
        self.soap_action = Some(uri.into());
        self
    }

    /// Dérive l'identité (SOAPAction comprise) d'un noeud vivant du graphe
    pub fn from_binding_operation(binding: &Binding, operation: &BindingOperation) -> Self {
        Self {
            binding: binding.name.clone(),
            operation: operation.name.clone(),
            input_name: operation.input_name().map(str::to_string),
            output_name: operation.output_name().map(str::to_string),
            soap_action: operation.soap_action().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soapwsdl::{BindingChannel, ExtensibilityElement};

    #[test]
    fn test_from_binding_operation() {
        let binding = Binding::new(QName::new("urn:b", "StockBinding")).with_operation(
            BindingOperation::new("GetPrice")
                .with_extension(ExtensibilityElement::SoapOperation {
                    soap_action: Some("urn:b:GetPrice".to_string()),
                    style: None,
                })
                .with_input(BindingChannel::new(QName::new("urn:b", "In")).with_name("in"))
                .with_output(BindingChannel::new(QName::new("urn:b", "Out")).with_name("out")),
        );

        let identity =
            OperationIdentity::from_binding_operation(&binding, &binding.operations[0]);
        assert_eq!(identity.operation, "GetPrice");
        assert_eq!(identity.input_name.as_deref(), Some("in"));
        assert_eq!(identity.output_name.as_deref(), Some("out"));
        assert_eq!(identity.soap_action.as_deref(), Some("urn:b:GetPrice"));
    }
}
