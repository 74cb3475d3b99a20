//! Configuration d'un appel de synthèse

use std::collections::HashMap;

use soaputils::QName;

/// Configuration immuable d'un appel de synthèse.
///
/// Passée explicitement à chaque entrée du builder, jamais stockée sur une
/// instance longue durée : plusieurs appelants peuvent partager un même
/// contrat chargé avec des configurations différentes.
#[derive(Debug, Clone)]
pub struct SoapConfig {
    /// Génère aussi les éléments optionnels du schéma
    pub build_optional: bool,

    /// Génère les en-têtes SOAP déclarés par le binding
    pub always_build_headers: bool,

    /// Émet un commentaire de type dans chaque élément généré
    pub type_comments: bool,

    /// Profondeur de récursion maximale du générateur
    pub max_depth: usize,

    /// Valeurs littérales imposées, par nom qualifié d'élément.
    ///
    /// Un nom associé à N valeurs produit N occurrences de l'élément dans
    /// un même appel, consommant les valeurs dans l'ordre.
    pub multi_values: HashMap<QName, Vec<String>>,
}

impl Default for SoapConfig {
    fn default() -> Self {
        Self {
            build_optional: false,
            always_build_headers: true,
            type_comments: false,
            max_depth: 8,
            multi_values: HashMap::new(),
        }
    }
}

impl SoapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_build_optional(mut self, build_optional: bool) -> Self {
        self.build_optional = build_optional;
        self
    }

    pub fn with_always_build_headers(mut self, always_build_headers: bool) -> Self {
        self.always_build_headers = always_build_headers;
        self
    }

    pub fn with_type_comments(mut self, type_comments: bool) -> Self {
        self.type_comments = type_comments;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Impose une suite de valeurs littérales pour un élément
    pub fn with_multi_value(mut self, name: QName, values: Vec<String>) -> Self {
        self.multi_values.insert(name, values);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SoapConfig::default();
        assert!(!config.build_optional);
        assert!(config.always_build_headers);
        assert!(config.multi_values.is_empty());
    }

    #[test]
    fn test_builders() {
        let config = SoapConfig::new()
            .with_build_optional(true)
            .with_always_build_headers(false)
            .with_multi_value(QName::local("ticker"), vec!["GOOG".to_string()]);
        assert!(config.build_optional);
        assert!(!config.always_build_headers);
        assert_eq!(config.multi_values.len(), 1);
    }
}
