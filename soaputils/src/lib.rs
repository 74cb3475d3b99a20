//! # soaputils - Utilitaires XML partagés
//!
//! Briques de bas niveau utilisées par les autres crates du workspace :
//!
//! - [`QName`] : nom qualifié XML (namespace + partie locale)
//! - [`XmlCursor`] : curseur de construction d'arbre XML en place
//! - [`xml`] : sérialisation, parsing et réécriture de texte

pub mod cursor;
pub mod qname;
pub mod xml;

pub use cursor::XmlCursor;
pub use qname::QName;
