//! Démo : synthèse de messages d'exemple pour un petit contrat
//!
//! ```bash
//! cargo run --example generate_sample -p soapbuilder
//! ```

use soapbuilder::{
    OperationIdentity, SoapConfig, SoapMessageBuilder, SoapVersion, build_fault, transport,
};
use soaputils::QName;
use soapschema::{ElementDecl, SchemaCatalog, SchemaElement, SchemaType, SimpleKind};
use soapwsdl::{
    Binding, BindingChannel, BindingOperation, Definition, ExtensibilityElement, Message, Part,
    SoapStyle, SoapUse,
};

const TNS: &str = "urn:weather";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let catalog = SchemaCatalog::new().with_element(SchemaElement::new(
        QName::new(TNS, "GetForecastRequest"),
        SchemaType::sequence(vec![
            ElementDecl::required(QName::local("city"), SimpleKind::String),
            ElementDecl::optional(QName::local("days"), SimpleKind::Int),
        ]),
    ));

    let definition = Definition::new(TNS)
        .with_message(
            Message::new(QName::new(TNS, "GetForecastInput")).with_part(Part::element(
                "body",
                QName::new(TNS, "GetForecastRequest"),
            )),
        )
        .with_binding(
            Binding::new(QName::new(TNS, "WeatherBinding"))
                .with_extension(ExtensibilityElement::SoapBinding {
                    transport: transport::SOAP_HTTP.to_string(),
                    style: Some(SoapStyle::Document),
                })
                .with_operation(
                    BindingOperation::new("GetForecast").with_input(
                        BindingChannel::new(QName::new(TNS, "GetForecastInput")).with_extension(
                            ExtensibilityElement::SoapBody {
                                namespace: None,
                                use_kind: SoapUse::Literal,
                                encoding_style: None,
                            },
                        ),
                    ),
                ),
        );

    let builder = SoapMessageBuilder::new(definition, catalog);
    let identity = OperationIdentity::new(QName::new(TNS, "WeatherBinding"), "GetForecast");

    let config = SoapConfig::new().with_build_optional(true);
    println!("=== Requête ===");
    println!("{}", builder.build_request(&identity, &config)?);

    println!("=== Fault ===");
    println!(
        "{}",
        build_fault("Server.Error", "forecast backend unavailable", SoapVersion::Soap11)?
    );

    Ok(())
}
