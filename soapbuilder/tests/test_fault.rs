//! Tests d'intégration des faults autonomes

use soapbuilder::{SoapVersion, build_empty_fault, build_empty_message, build_fault};

#[test]
fn test_fault_soap11() {
    let xml = build_fault("Server.Error", "failure", SoapVersion::Soap11).unwrap();

    assert!(xml.contains("xmlns:s=\"http://schemas.xmlsoap.org/soap/envelope/\""));
    assert!(xml.contains("<faultcode>Server.Error</faultcode>"));
    assert!(xml.contains("<faultstring>failure</faultstring>"));
}

#[test]
fn test_fault_soap12() {
    let xml = build_fault("s:Receiver", "failure", SoapVersion::Soap12).unwrap();

    assert!(xml.contains("xmlns:s=\"http://www.w3.org/2003/05/soap-envelope\""));
    assert!(xml.contains(">s:Receiver<"));
    assert!(xml.contains("xml:lang=\"en\""));
    assert!(xml.contains(">failure<"));

    // Value sous Code, Text sous Reason, dans le namespace de l'enveloppe
    let root = xmltree::Element::parse(xml.as_bytes()).unwrap();
    let body = root.get_child("Body").unwrap();
    let fault = body.get_child("Fault").unwrap();
    let code = fault.get_child("Code").unwrap();
    assert_eq!(
        code.get_child("Value").unwrap().get_text().unwrap(),
        "s:Receiver"
    );
    let reason = fault.get_child("Reason").unwrap();
    let text = reason.get_child("Text").unwrap();
    assert_eq!(text.get_text().unwrap(), "failure");
    assert_eq!(text.attributes.get("xml:lang").map(String::as_str), Some("en"));
}

#[test]
fn test_empty_fault_soap12_skips_optional_members() {
    let xml = build_empty_fault(SoapVersion::Soap12).unwrap();

    assert!(xml.contains("Code"));
    assert!(xml.contains("Reason"));
    // Node/Role/Detail sont optionnels : absents d'un fault vide
    assert!(!xml.contains("Node"));
    assert!(!xml.contains("Role"));
    assert!(!xml.contains("Detail"));
}

#[test]
fn test_empty_message_per_version() {
    let xml11 = build_empty_message(SoapVersion::Soap11).unwrap();
    assert!(xml11.contains("http://schemas.xmlsoap.org/soap/envelope/"));

    let xml12 = build_empty_message(SoapVersion::Soap12).unwrap();
    assert!(xml12.contains("http://www.w3.org/2003/05/soap-envelope"));

    let root = xmltree::Element::parse(xml12.as_bytes()).unwrap();
    assert_eq!(root.name, "Envelope");
    let children: Vec<&str> = root
        .children
        .iter()
        .filter_map(|n| n.as_element())
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(children, vec!["Body"]);
}

#[test]
fn test_fault_idempotence() {
    let first = build_fault("Client", "bad request", SoapVersion::Soap11).unwrap();
    let second = build_fault("Client", "bad request", SoapVersion::Soap11).unwrap();
    assert_eq!(first, second);
}
