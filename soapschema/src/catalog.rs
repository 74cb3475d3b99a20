//! Index des définitions de schéma globales

use std::collections::HashMap;

use soaputils::QName;

use crate::types::{SchemaElement, SchemaType, SchemaTypeRef};

/// Catalogue des éléments et types XSD globaux d'un contrat.
///
/// Lecture seule après construction, partageable entre appels concurrents.
#[derive(Debug, Clone, Default)]
pub struct SchemaCatalog {
    elements: HashMap<QName, SchemaElement>,
    types: HashMap<QName, SchemaType>,
}

impl SchemaCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(mut self, element: SchemaElement) -> Self {
        self.elements.insert(element.name.clone(), element);
        self
    }

    /// Enregistre un type global sous le nom donné
    pub fn with_type(mut self, name: QName, ty: SchemaType) -> Self {
        self.types.insert(name.clone(), ty.named(name));
        self
    }

    /// Vrai si le catalogue contient au moins une définition
    pub fn has_schema_types(&self) -> bool {
        !self.elements.is_empty() || !self.types.is_empty()
    }

    /// Recherche un élément global par nom qualifié
    pub fn find_element(&self, name: &QName) -> Option<&SchemaElement> {
        self.elements.get(name)
    }

    /// Recherche un type global par nom qualifié
    pub fn find_type(&self, name: &QName) -> Option<&SchemaType> {
        self.types.get(name)
    }

    /// Résout une référence de type contre le catalogue
    pub fn resolve<'s: 'b, 'b>(&'s self, type_ref: &'b SchemaTypeRef) -> Option<&'b SchemaType> {
        match type_ref {
            SchemaTypeRef::Inline(ty) => Some(ty),
            SchemaTypeRef::Named(name) => self.find_type(name),
        }
    }
}
