use soaputils::QName;
use thiserror::Error;

/// Erreurs fatales de la synthèse de messages.
///
/// Toutes signalent une requête ou un contrat défectueux : aucune n'est
/// transitoire, aucune ne doit être retentée. Les défauts partiels de
/// métadonnées (en-tête pendant, ancrage de schéma introuvable) ne passent
/// pas par ici : ils sont journalisés et la synthèse continue.
#[derive(Error, Debug)]
pub enum SoapBuilderError {
    #[error("Binding not found: {0}")]
    BindingNotFound(QName),

    #[error("Operation not found: {0}")]
    OperationNotFound(String),

    #[error("SOAP binding not recognized: {0}")]
    UnrecognizedSoapBinding(QName),

    #[error("XML write error: {0}")]
    Xml(#[from] xmltree::Error),

    #[error("XML parse error: {0}")]
    Parse(#[from] xmltree::ParseError),
}
