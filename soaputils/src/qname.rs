//! Noms qualifiés XML

use serde::{Deserialize, Serialize};
use std::fmt;

/// Nom qualifié XML : namespace + partie locale.
///
/// Un namespace vide désigne un nom non qualifié (ex: `faultcode` dans un
/// fault SOAP 1.1).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QName {
    /// URI du namespace (vide si non qualifié)
    pub namespace: String,

    /// Partie locale du nom
    pub local: String,
}

impl QName {
    /// Crée un nom qualifié par un namespace
    pub fn new(namespace: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            local: local.into(),
        }
    }

    /// Crée un nom sans namespace
    pub fn local(local: impl Into<String>) -> Self {
        Self {
            namespace: String::new(),
            local: local.into(),
        }
    }

    /// Vrai si le nom est qualifié par un namespace
    pub fn is_qualified(&self) -> bool {
        !self.namespace.is_empty()
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.local)
        } else {
            // Notation de Clark: {namespace}local
            write!(f, "{{{}}}{}", self.namespace, self.local)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_display_qualified() {
        let q = QName::new("http://example.com/ns", "GetPrice");
        assert_eq!(q.to_string(), "{http://example.com/ns}GetPrice");
    }

    #[test]
    fn test_display_unqualified() {
        let q = QName::local("faultcode");
        assert_eq!(q.to_string(), "faultcode");
        assert!(!q.is_qualified());
    }

    #[test]
    fn test_map_key() {
        let mut map = HashMap::new();
        map.insert(QName::new("urn:a", "x"), 1);
        assert_eq!(map.get(&QName::new("urn:a", "x")), Some(&1));
        assert_eq!(map.get(&QName::new("urn:b", "x")), None);
    }
}
