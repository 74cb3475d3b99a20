//! Racine du contrat WSDL

use std::collections::HashMap;

use soaputils::QName;

use crate::binding::Binding;
use crate::message::Message;

/// Contrat WSDL chargé : bindings et messages indexés par nom qualifié.
///
/// Le graphe est en lecture seule après construction ; il se partage sans
/// verrou entre appels de synthèse concurrents.
#[derive(Debug, Clone)]
pub struct Definition {
    target_namespace: String,
    bindings: HashMap<QName, Binding>,
    messages: HashMap<QName, Message>,
}

impl Definition {
    pub fn new(target_namespace: impl Into<String>) -> Self {
        Self {
            target_namespace: target_namespace.into(),
            bindings: HashMap::new(),
            messages: HashMap::new(),
        }
    }

    /// Namespace cible du contrat
    pub fn target_namespace(&self) -> &str {
        &self.target_namespace
    }

    pub fn with_binding(mut self, binding: Binding) -> Self {
        self.bindings.insert(binding.name.clone(), binding);
        self
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.insert(message.name.clone(), message);
        self
    }

    /// Recherche un binding par nom qualifié
    pub fn get_binding(&self, name: &QName) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Recherche un message par nom qualifié
    pub fn get_message(&self, name: &QName) -> Option<&Message> {
        self.messages.get(name)
    }
}
