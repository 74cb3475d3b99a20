//! # soapwsdl - Modèle objet WSDL
//!
//! Graphe navigable en lecture seule d'un contrat WSDL :
//! bindings → opérations → canaux (input/output) → messages → parts,
//! plus les métadonnées d'extensibilité SOAP/MIME portées par chaque niveau.
//!
//! Le parsing du texte WSDL n'est pas couvert ici : le graphe se construit
//! programmatiquement via les constructeurs `with_*`, puis se partage en
//! lecture entre appels concurrents.
//!
//! ## Architecture
//!
//! - [`Definition`] : racine du contrat (bindings et messages indexés par QName)
//! - [`Binding`] / [`BindingOperation`] / [`BindingChannel`] : partie concrète
//! - [`Message`] / [`Part`] : partie abstraite
//! - [`ExtensibilityElement`] : métadonnées soap:binding, soap:body, soap:header, mime:content

mod binding;
mod definition;
mod extensibility;
mod message;

pub use binding::{Binding, BindingChannel, BindingOperation};
pub use definition::Definition;
pub use extensibility::{
    ExtensibilityElement, SoapHeaderRef, SoapStyle, SoapUse, is_attachment_part, is_encoded,
    soap_action, soap_body_namespace, soap_headers, style,
};
pub use message::{Message, Part};
