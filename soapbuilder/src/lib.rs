//! # Module soapbuilder - Synthèse de messages SOAP d'exemple
//!
//! Ce crate synthétise des messages SOAP d'exemple (requête, réponse, fault,
//! enveloppe vide) pour une opération décrite par un contrat WSDL, sans
//! aucun appel réseau.
//!
//! ## Fonctionnalités
//!
//! - ✅ Résolution binding/opération (surcharges désambiguïsées par messages)
//! - ✅ SOAP 1.1 et SOAP 1.2 (détection par URI de transport)
//! - ✅ Styles RPC et Document, y compris RPC-encoded
//! - ✅ En-têtes SOAP (références pendantes tolérées)
//! - ✅ Parts en pièce jointe MIME (placeholder `href`)
//! - ✅ Faults autonomes avec substitution code/message
//!
//! ## Architecture
//!
//! - [`SoapMessageBuilder`] : assemblage d'enveloppes requête/réponse
//! - [`OperationIdentity`] : identité d'opération découplée du graphe
//! - [`SoapVersion`] : table des namespaces et types de fault par version
//! - [`SoapConfig`] : configuration immuable passée à chaque appel
//! - [`build_fault`] / [`build_empty_fault`] / [`build_empty_message`] :
//!   messages autonomes, indépendants de toute opération
//!
//! ## Example
//!
//! ```ignore
//! use soapbuilder::{OperationIdentity, SoapConfig, SoapMessageBuilder};
//! use soaputils::QName;
//!
//! let builder = SoapMessageBuilder::new(definition, catalog);
//! let identity = OperationIdentity::new(
//!     QName::new("urn:stock", "StockBinding"),
//!     "GetPrice",
//! );
//!
//! let request = builder.build_request(&identity, &SoapConfig::default())?;
//! println!("{}", request);
//! ```

mod builder;
mod config;
mod errors;
mod fault;
mod operation;
mod parts;
mod resolver;
mod version;

pub use builder::SoapMessageBuilder;
pub use config::SoapConfig;
pub use errors::SoapBuilderError;
pub use fault::{build_empty_fault, build_empty_message, build_fault};
pub use operation::OperationIdentity;
pub use resolver::{ResolvedOperation, exchange_style, resolve, soap_version};
pub use version::{SoapVersion, ns, transport};
