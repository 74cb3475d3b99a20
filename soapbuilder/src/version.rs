//! Versions du protocole SOAP
//!
//! La version est déterminée une fois par binding et reste constante pour
//! toutes les parts d'un même appel de synthèse. Chaque variante fournit
//! les noms qualifiés de l'enveloppe et le type de schéma de son fault.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use soaputils::QName;
use soapschema::{ElementDecl, SchemaType, SimpleKind};

/// Namespaces standards
pub mod ns {
    pub const SOAP11_ENVELOPE: &str = "http://schemas.xmlsoap.org/soap/envelope/";
    pub const SOAP11_ENCODING: &str = "http://schemas.xmlsoap.org/soap/encoding/";
    pub const SOAP12_ENVELOPE: &str = "http://www.w3.org/2003/05/soap-envelope";
    pub const SOAP12_ENCODING: &str = "http://www.w3.org/2003/05/soap-encoding";
    pub const XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema";
}

/// URIs de transport reconnues dans les bindings SOAP
pub mod transport {
    pub const SOAP_HTTP: &str = "http://schemas.xmlsoap.org/soap/http";
    pub const SOAP12_HTTP_BINDING: &str = "http://www.w3.org/2003/05/soap/bindings/HTTP/";
    pub const MICROSOFT_TCP: &str =
        "http://schemas.microsoft.com/wse/2003/06/soap/transport/tcp";
}

/// Version du protocole SOAP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoapVersion {
    Soap11,
    Soap12,
}

impl SoapVersion {
    /// Namespace de l'enveloppe
    pub fn envelope_namespace(&self) -> &'static str {
        match self {
            SoapVersion::Soap11 => ns::SOAP11_ENVELOPE,
            SoapVersion::Soap12 => ns::SOAP12_ENVELOPE,
        }
    }

    /// Namespace d'encodage SOAP
    pub fn encoding_namespace(&self) -> &'static str {
        match self {
            SoapVersion::Soap11 => ns::SOAP11_ENCODING,
            SoapVersion::Soap12 => ns::SOAP12_ENCODING,
        }
    }

    pub fn envelope_qname(&self) -> QName {
        QName::new(self.envelope_namespace(), "Envelope")
    }

    pub fn header_qname(&self) -> QName {
        QName::new(self.envelope_namespace(), "Header")
    }

    pub fn body_qname(&self) -> QName {
        QName::new(self.envelope_namespace(), "Body")
    }

    /// Type de schéma du payload de fault pour cette version
    pub fn fault_type(&self) -> &'static SchemaType {
        match self {
            SoapVersion::Soap11 => &SOAP11_FAULT,
            SoapVersion::Soap12 => &SOAP12_FAULT,
        }
    }
}

// Les enfants du fault 1.1 sont non qualifiés ; ceux du fault 1.2 vivent
// dans le namespace de l'enveloppe.
static SOAP11_FAULT: Lazy<SchemaType> = Lazy::new(|| {
    SchemaType::sequence(vec![
        ElementDecl::required(QName::local("faultcode"), SimpleKind::QNameRef),
        ElementDecl::required(QName::local("faultstring"), SimpleKind::String),
        ElementDecl::optional(QName::local("faultactor"), SimpleKind::AnyUri),
        ElementDecl::optional(QName::local("detail"), SchemaType::empty()),
    ])
    .named(QName::new(ns::SOAP11_ENVELOPE, "Fault"))
});

static SOAP12_FAULT: Lazy<SchemaType> = Lazy::new(|| {
    let env = ns::SOAP12_ENVELOPE;
    SchemaType::sequence(vec![
        ElementDecl::required(
            QName::new(env, "Code"),
            SchemaType::sequence(vec![ElementDecl::required(
                QName::new(env, "Value"),
                SimpleKind::QNameRef,
            )]),
        ),
        ElementDecl::required(
            QName::new(env, "Reason"),
            SchemaType::sequence(vec![ElementDecl::required(
                QName::new(env, "Text"),
                SimpleKind::String,
            )]),
        ),
        ElementDecl::optional(QName::new(env, "Node"), SimpleKind::AnyUri),
        ElementDecl::optional(QName::new(env, "Role"), SimpleKind::AnyUri),
        ElementDecl::optional(QName::new(env, "Detail"), SchemaType::empty()),
    ])
    .named(QName::new(env, "Fault"))
});
