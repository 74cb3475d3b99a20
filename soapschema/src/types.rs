//! Modèle simplifié de types XSD

use serde::{Deserialize, Serialize};
use soaputils::QName;

/// Type simple XSD, avec sa valeur d'exemple déterministe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimpleKind {
    String,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Decimal,
    Date,
    DateTime,
    AnyUri,
    QNameRef,
    Language,
    Base64,
    /// Restriction par énumération : l'exemple est le premier membre
    Enumeration(Vec<String>),
}

impl SimpleKind {
    /// Valeur d'exemple émise pour ce type
    pub fn sample_value(&self) -> &str {
        match self {
            SimpleKind::String => "?",
            SimpleKind::Boolean => "true",
            SimpleKind::Int => "3",
            SimpleKind::Long => "10",
            SimpleKind::Float => "1.5",
            SimpleKind::Double => "1.051732",
            SimpleKind::Decimal => "5.2",
            SimpleKind::Date => "2008-09-29",
            SimpleKind::DateTime => "2008-09-29T03:49:45",
            SimpleKind::AnyUri => "http://example.com/",
            SimpleKind::QNameRef => "?",
            SimpleKind::Language => "en",
            SimpleKind::Base64 => "?",
            SimpleKind::Enumeration(values) => {
                values.first().map(String::as_str).unwrap_or("?")
            }
        }
    }

    /// Nom du type dans le namespace XML Schema (pour `xsi:type`)
    pub fn xsd_name(&self) -> &'static str {
        match self {
            SimpleKind::String => "string",
            SimpleKind::Boolean => "boolean",
            SimpleKind::Int => "int",
            SimpleKind::Long => "long",
            SimpleKind::Float => "float",
            SimpleKind::Double => "double",
            SimpleKind::Decimal => "decimal",
            SimpleKind::Date => "date",
            SimpleKind::DateTime => "dateTime",
            SimpleKind::AnyUri => "anyURI",
            SimpleKind::QNameRef => "QName",
            SimpleKind::Language => "language",
            SimpleKind::Base64 => "base64Binary",
            SimpleKind::Enumeration(_) => "string",
        }
    }
}

/// Contenu d'un type
#[derive(Debug, Clone, PartialEq)]
pub enum TypeContent {
    /// Valeur simple
    Simple(SimpleKind),

    /// Séquence ordonnée d'éléments enfants
    Sequence(Vec<ElementDecl>),

    /// Contenu vide (ex: `detail` d'un fault)
    Empty,
}

/// Type XSD, éventuellement anonyme
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaType {
    pub name: Option<QName>,
    pub content: TypeContent,
}

impl SchemaType {
    /// Type simple anonyme
    pub fn simple(kind: SimpleKind) -> Self {
        Self {
            name: None,
            content: TypeContent::Simple(kind),
        }
    }

    /// Séquence anonyme
    pub fn sequence(elements: Vec<ElementDecl>) -> Self {
        Self {
            name: None,
            content: TypeContent::Sequence(elements),
        }
    }

    /// Type à contenu vide
    pub fn empty() -> Self {
        Self {
            name: None,
            content: TypeContent::Empty,
        }
    }

    /// Nomme le type
    pub fn named(mut self, name: QName) -> Self {
        self.name = Some(name);
        self
    }
}

/// Référence vers un type : globale (par QName) ou anonyme en ligne
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaTypeRef {
    Named(QName),
    Inline(Box<SchemaType>),
}

impl From<SchemaType> for SchemaTypeRef {
    fn from(ty: SchemaType) -> Self {
        SchemaTypeRef::Inline(Box::new(ty))
    }
}

impl From<QName> for SchemaTypeRef {
    fn from(name: QName) -> Self {
        SchemaTypeRef::Named(name)
    }
}

impl From<SimpleKind> for SchemaTypeRef {
    fn from(kind: SimpleKind) -> Self {
        SchemaType::simple(kind).into()
    }
}

/// Déclaration d'un élément dans une séquence.
///
/// `max_occurs == 0` signifie non borné.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementDecl {
    pub name: QName,
    pub ty: SchemaTypeRef,
    pub min_occurs: u32,
    pub max_occurs: u32,
}

impl ElementDecl {
    /// Élément obligatoire (1..1)
    pub fn required(name: QName, ty: impl Into<SchemaTypeRef>) -> Self {
        Self {
            name,
            ty: ty.into(),
            min_occurs: 1,
            max_occurs: 1,
        }
    }

    /// Élément optionnel (0..1)
    pub fn optional(name: QName, ty: impl Into<SchemaTypeRef>) -> Self {
        Self {
            name,
            ty: ty.into(),
            min_occurs: 0,
            max_occurs: 1,
        }
    }

    /// Élément répétable
    pub fn repeated(name: QName, ty: impl Into<SchemaTypeRef>, min: u32, max: u32) -> Self {
        Self {
            name,
            ty: ty.into(),
            min_occurs: min,
            max_occurs: max,
        }
    }

    pub fn is_optional(&self) -> bool {
        self.min_occurs == 0
    }
}

/// Élément global XSD référençable par une part WSDL
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaElement {
    pub name: QName,
    pub ty: SchemaTypeRef,
}

impl SchemaElement {
    pub fn new(name: QName, ty: impl Into<SchemaTypeRef>) -> Self {
        Self {
            name,
            ty: ty.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumeration_samples_first_member() {
        let kind = SimpleKind::Enumeration(vec!["EUR".to_string(), "USD".to_string()]);
        assert_eq!(kind.sample_value(), "EUR");
        assert_eq!(kind.xsd_name(), "string");
    }

    #[test]
    fn test_optionality() {
        let decl = ElementDecl::optional(QName::local("note"), SimpleKind::String);
        assert!(decl.is_optional());
        let decl = ElementDecl::required(QName::local("id"), SimpleKind::Int);
        assert!(!decl.is_optional());
    }
}
