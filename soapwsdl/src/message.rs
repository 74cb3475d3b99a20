//! Messages abstraits et leurs parts

use soaputils::QName;

/// Part d'un message WSDL.
///
/// Un contrat bien formé renseigne exactement un des deux ancrages de
/// schéma (`element` ou `type_name`) ; les deux peuvent manquer, auquel cas
/// la part ne porte aucun contenu représentable.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    /// Nom de la part
    pub name: String,

    /// Élément global XSD référencé (`element="..."`)
    pub element: Option<QName>,

    /// Type XSD référencé (`type="..."`)
    pub type_name: Option<QName>,
}

impl Part {
    /// Part ancrée sur un élément global
    pub fn element(name: impl Into<String>, element: QName) -> Self {
        Self {
            name: name.into(),
            element: Some(element),
            type_name: None,
        }
    }

    /// Part ancrée sur un type
    pub fn typed(name: impl Into<String>, type_name: QName) -> Self {
        Self {
            name: name.into(),
            element: None,
            type_name: Some(type_name),
        }
    }

    /// Part sans ancrage de schéma
    pub fn opaque(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            element: None,
            type_name: None,
        }
    }
}

/// Message WSDL : une suite ordonnée de parts.
///
/// L'ordre de déclaration est l'ordre de séquence du schéma ; il est
/// préservé tel quel dans les corps synthétisés.
#[derive(Debug, Clone)]
pub struct Message {
    pub name: QName,
    pub parts: Vec<Part>,
}

impl Message {
    pub fn new(name: QName) -> Self {
        Self {
            name,
            parts: Vec::new(),
        }
    }

    pub fn with_part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    /// Recherche une part par nom
    pub fn get_part(&self, name: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.name == name)
    }
}
