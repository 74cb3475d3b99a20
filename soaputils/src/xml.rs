//! Sérialisation et manipulation de documents XML

use tracing::warn;
use xmltree::{Element, EmitterConfig, ParseError, XMLNode};

/// Partie locale d'un nom éventuellement préfixé (`s:Body` -> `Body`)
pub fn local_name(name: &str) -> &str {
    match name.rsplit_once(':') {
        Some((_, local)) => local,
        None => name,
    }
}

/// Parse un document XML complet
pub fn parse(xml: &str) -> Result<Element, ParseError> {
    Element::parse(xml.as_bytes())
}

/// Sérialise le document en XML indenté.
///
/// Si l'émission indentée échoue, retombe sur la forme compacte plutôt que
/// d'échouer l'appel : l'arbre lui-même est déjà valide.
pub fn serialize_pretty(root: &Element) -> Result<String, xmltree::Error> {
    let mut buf = Vec::new();
    let config = EmitterConfig::new()
        .write_document_declaration(true)
        .perform_indent(true)
        .indent_string("  ");

    match root.write_with_config(&mut buf, config) {
        Ok(()) => Ok(String::from_utf8(buf).unwrap()),
        Err(e) => {
            warn!("Pretty serialization failed, falling back to compact form: {}", e);
            let mut buf = Vec::new();
            root.write(&mut buf)?;
            Ok(String::from_utf8(buf).unwrap())
        }
    }
}

/// Cherche un descendant (ou l'élément lui-même) par nom local
pub fn find_descendant_mut<'a>(element: &'a mut Element, local: &str) -> Option<&'a mut Element> {
    if local_name(&element.name) == local {
        return Some(element);
    }
    for child in element.children.iter_mut() {
        if let XMLNode::Element(e) = child {
            if let Some(found) = find_descendant_mut(e, local) {
                return Some(found);
            }
        }
    }
    None
}

/// Remplace le contenu texte du premier descendant portant ce nom local.
///
/// Retourne `false` si aucun descendant ne correspond.
pub fn set_descendant_text(element: &mut Element, local: &str, value: &str) -> bool {
    match find_descendant_mut(element, local) {
        Some(target) => {
            target
                .children
                .retain(|node| !matches!(node, XMLNode::Text(_)));
            target.children.push(XMLNode::Text(value.to_string()));
            true
        }
        None => false,
    }
}
