//! # soapschema - Catalogue de types et génération d'instances
//!
//! Modèle simplifié des définitions XSD globales référencées par un contrat
//! WSDL, et générateur d'instances d'exemple structurellement valides.
//!
//! ## Architecture
//!
//! - [`SchemaType`] / [`ElementDecl`] / [`SimpleKind`] : modèle de types
//! - [`SchemaCatalog`] : index des éléments et types globaux par QName
//! - [`SampleXmlGenerator`] : synthèse de fragments XML d'exemple
//!
//! Le catalogue se construit programmatiquement (le catalogage de schémas
//! XSD complets n'est pas couvert) et se partage en lecture entre appels.

mod catalog;
mod sample;
mod types;

pub use catalog::SchemaCatalog;
pub use sample::SampleXmlGenerator;
pub use types::{ElementDecl, SchemaElement, SchemaType, SchemaTypeRef, SimpleKind, TypeContent};
