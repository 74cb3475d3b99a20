//! Bindings concrets et leurs opérations

use soaputils::QName;

use crate::extensibility::{ExtensibilityElement, SoapStyle, soap_action, style};

/// Canal input ou output d'une opération de binding.
///
/// Le nom est optionnel (l'attribut `name` l'est dans WSDL) ; le message
/// est référencé par QName et résolu via [`crate::Definition::get_message`].
#[derive(Debug, Clone)]
pub struct BindingChannel {
    pub name: Option<String>,
    pub message: QName,
    pub extensibility: Vec<ExtensibilityElement>,
}

impl BindingChannel {
    pub fn new(message: QName) -> Self {
        Self {
            name: None,
            message,
            extensibility: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_extension(mut self, extension: ExtensibilityElement) -> Self {
        self.extensibility.push(extension);
        self
    }
}

/// Opération concrète d'un binding
#[derive(Debug, Clone)]
pub struct BindingOperation {
    pub name: String,
    pub input: Option<BindingChannel>,
    pub output: Option<BindingChannel>,
    pub extensibility: Vec<ExtensibilityElement>,
}

impl BindingOperation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input: None,
            output: None,
            extensibility: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: BindingChannel) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_output(mut self, output: BindingChannel) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_extension(mut self, extension: ExtensibilityElement) -> Self {
        self.extensibility.push(extension);
        self
    }

    /// URI SOAPAction déclarée par l'opération
    pub fn soap_action(&self) -> Option<&str> {
        soap_action(&self.extensibility)
    }

    /// Style déclaré au niveau de l'opération
    pub fn style(&self) -> Option<SoapStyle> {
        style(&self.extensibility)
    }

    pub fn input_name(&self) -> Option<&str> {
        self.input.as_ref().and_then(|c| c.name.as_deref())
    }

    pub fn output_name(&self) -> Option<&str> {
        self.output.as_ref().and_then(|c| c.name.as_deref())
    }
}

/// Binding WSDL : appariement d'un port type abstrait avec un protocole
#[derive(Debug, Clone)]
pub struct Binding {
    pub name: QName,
    pub extensibility: Vec<ExtensibilityElement>,
    pub operations: Vec<BindingOperation>,
}

impl Binding {
    pub fn new(name: QName) -> Self {
        Self {
            name,
            extensibility: Vec::new(),
            operations: Vec::new(),
        }
    }

    pub fn with_extension(mut self, extension: ExtensibilityElement) -> Self {
        self.extensibility.push(extension);
        self
    }

    pub fn with_operation(mut self, operation: BindingOperation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Recherche une opération par correspondance exacte.
    ///
    /// WSDL autorise des opérations homonymes désambiguïsées par les noms
    /// de leurs messages input/output : les trois composantes doivent
    /// correspondre, `None` ne s'appariant qu'à un canal absent ou anonyme.
    pub fn operation(
        &self,
        name: &str,
        input_name: Option<&str>,
        output_name: Option<&str>,
    ) -> Option<&BindingOperation> {
        self.operations.iter().find(|op| {
            op.name == name && op.input_name() == input_name && op.output_name() == output_name
        })
    }

    /// Style déclaré au niveau du binding
    pub fn style(&self) -> Option<SoapStyle> {
        style(&self.extensibility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overloaded_binding() -> Binding {
        Binding::new(QName::new("urn:b", "StockBinding"))
            .with_operation(
                BindingOperation::new("GetPrice").with_input(
                    BindingChannel::new(QName::new("urn:b", "GetPriceByTicker"))
                        .with_name("byTicker"),
                ),
            )
            .with_operation(
                BindingOperation::new("GetPrice").with_input(
                    BindingChannel::new(QName::new("urn:b", "GetPriceByIsin")).with_name("byIsin"),
                ),
            )
    }

    #[test]
    fn test_overload_exact_match() {
        let binding = overloaded_binding();

        let op = binding.operation("GetPrice", Some("byIsin"), None).unwrap();
        assert_eq!(op.input.as_ref().unwrap().message.local, "GetPriceByIsin");

        // Un nom de message qui ne correspond à aucune surcharge ne doit
        // jamais en sélectionner une autre silencieusement
        assert!(binding.operation("GetPrice", Some("byName"), None).is_none());
        assert!(binding.operation("GetPrice", None, None).is_none());
    }

    #[test]
    fn test_one_way_operation_match() {
        let binding = Binding::new(QName::new("urn:b", "B")).with_operation(
            BindingOperation::new("Notify")
                .with_input(BindingChannel::new(QName::new("urn:b", "NotifyMsg"))),
        );

        assert!(binding.operation("Notify", None, None).is_some());
        assert!(binding.operation("Notify", None, Some("out")).is_none());
    }
}
