//! Curseur de construction d'arbre XML
//!
//! Construit un document XML en place, élément par élément, avec gestion
//! des préfixes de namespace. Les noms qualifiés sont rendus sous forme
//! `prefixe:local` et les déclarations `xmlns:*` sont posées sur la racine
//! du document, comme dans le reste du workspace.

use std::collections::HashMap;
use tracing::warn;
use xmltree::{Element, XMLNode};

use crate::qname::QName;
use crate::xml::local_name;

/// Curseur positionné dans un document XML possédé.
///
/// Le chemin courant est une suite d'indices dans les listes d'enfants ;
/// un chemin vide désigne la racine. Le document commence vide : le premier
/// [`XmlCursor::begin_element`] crée la racine.
pub struct XmlCursor {
    root: Option<Element>,
    path: Vec<usize>,

    /// namespace -> préfixe
    prefixes: HashMap<String, String>,

    /// Déclarations en attente de la création de la racine
    pending: Vec<(String, String)>,

    next_prefix: usize,
}

impl Default for XmlCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlCursor {
    /// Crée un curseur sur un document vide
    pub fn new() -> Self {
        Self {
            root: None,
            path: Vec::new(),
            prefixes: HashMap::new(),
            pending: Vec::new(),
            next_prefix: 1,
        }
    }

    /// Crée un curseur positionné sur la racine d'un document existant
    pub fn from_root(root: Element) -> Self {
        Self {
            root: Some(root),
            path: Vec::new(),
            prefixes: HashMap::new(),
            pending: Vec::new(),
            next_prefix: 1,
        }
    }

    /// Associe un préfixe fixe à un namespace (ex: `s`, `xsi`, `xsd`).
    ///
    /// La déclaration `xmlns:prefixe` est posée sur la racine, ou différée
    /// jusqu'à sa création.
    pub fn bind_prefix(&mut self, prefix: &str, namespace: &str) {
        self.prefixes
            .insert(namespace.to_string(), prefix.to_string());
        match self.root.as_mut() {
            Some(root) => {
                root.attributes
                    .insert(format!("xmlns:{}", prefix), namespace.to_string());
            }
            None => self.pending.push((prefix.to_string(), namespace.to_string())),
        }
    }

    /// Retourne le préfixe du namespace, en l'allouant au besoin
    fn prefix_for(&mut self, namespace: &str) -> String {
        if let Some(prefix) = self.prefixes.get(namespace) {
            return prefix.clone();
        }
        let prefix = format!("ns{}", self.next_prefix);
        self.next_prefix += 1;
        self.prefixes
            .insert(namespace.to_string(), prefix.clone());
        match self.root.as_mut() {
            Some(root) => {
                root.attributes
                    .insert(format!("xmlns:{}", prefix), namespace.to_string());
            }
            None => self.pending.push((prefix.clone(), namespace.to_string())),
        }
        prefix
    }

    /// Nom sérialisable (`prefixe:local` ou `local`) d'un QName
    fn qualified(&mut self, name: &QName) -> String {
        if name.namespace.is_empty() {
            name.local.clone()
        } else {
            let prefix = self.prefix_for(&name.namespace);
            format!("{}:{}", prefix, name.local)
        }
    }

    /// Ouvre un élément enfant et positionne le curseur dessus
    pub fn begin_element(&mut self, name: &QName) {
        let qualified = self.qualified(name);
        self.open(qualified, false);
    }

    /// Ouvre un élément enfant non qualifié et positionne le curseur dessus
    pub fn begin_local_element(&mut self, name: &str) {
        self.open(name.to_string(), false);
    }

    /// Ouvre un élément comme PREMIER enfant de l'élément courant.
    ///
    /// Utilisé pour insérer le Header avant le Body déjà construit.
    pub fn begin_first_element(&mut self, name: &QName) {
        let qualified = self.qualified(name);
        self.open(qualified, true);
    }

    fn open(&mut self, qualified: String, first: bool) {
        let mut element = Element::new(&qualified);

        if self.root.is_none() {
            for (prefix, namespace) in self.pending.drain(..) {
                element
                    .attributes
                    .insert(format!("xmlns:{}", prefix), namespace);
            }
            self.root = Some(element);
            self.path.clear();
            return;
        }

        let Some(parent) = self.current_mut() else {
            warn!("Cursor position is invalid, element '{}' dropped", qualified);
            return;
        };
        if first {
            parent.children.insert(0, XMLNode::Element(element));
            self.path.push(0);
        } else {
            parent.children.push(XMLNode::Element(element));
            let index = parent.children.len() - 1;
            self.path.push(index);
        }
    }

    /// Remonte d'un niveau. Retourne `false` si le curseur est sur la racine.
    pub fn to_parent(&mut self) -> bool {
        self.path.pop().is_some()
    }

    /// Repositionne le curseur sur la racine du document
    pub fn to_root(&mut self) {
        self.path.clear();
    }

    /// Descend vers le premier enfant dont le nom local correspond.
    ///
    /// Le préfixe est ignoré, comme pour la localisation d'Envelope/Body
    /// lors du parsing.
    pub fn to_child(&mut self, local: &str) -> bool {
        let Some(current) = self.current() else {
            return false;
        };
        let found = current.children.iter().position(|node| {
            matches!(node, XMLNode::Element(e) if local_name(&e.name) == local)
        });
        match found {
            Some(index) => {
                self.path.push(index);
                true
            }
            None => false,
        }
    }

    /// Pose un attribut sur l'élément courant
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        if let Some(current) = self.current_mut() {
            current
                .attributes
                .insert(name.to_string(), value.to_string());
        }
    }

    /// Pose un attribut qualifié sur l'élément courant
    pub fn set_qualified_attribute(&mut self, name: &QName, value: &str) {
        let qualified = self.qualified(name);
        self.set_attribute(&qualified, value);
    }

    /// Remplace le contenu texte de l'élément courant
    pub fn set_text(&mut self, text: &str) {
        if let Some(current) = self.current_mut() {
            current
                .children
                .retain(|node| !matches!(node, XMLNode::Text(_)));
            current.children.push(XMLNode::Text(text.to_string()));
        }
    }

    /// Ajoute un commentaire comme enfant de l'élément courant
    pub fn append_comment(&mut self, text: &str) {
        if let Some(current) = self.current_mut() {
            current.children.push(XMLNode::Comment(text.to_string()));
        }
    }

    /// Greffe un noeud déjà construit comme enfant de l'élément courant
    pub fn append_node(&mut self, node: XMLNode) {
        if let Some(current) = self.current_mut() {
            current.children.push(node);
        }
    }

    /// Exécute `f` avec un sous-curseur borné à la position courante.
    ///
    /// Le chemin est restauré à la sortie, quel que soit le parcours
    /// effectué par `f`.
    pub fn scoped<F>(&mut self, f: F)
    where
        F: FnOnce(&mut XmlCursor),
    {
        let depth = self.path.len();
        f(self);
        self.path.truncate(depth);
    }

    /// Élément courant
    pub fn current(&self) -> Option<&Element> {
        let mut element = self.root.as_ref()?;
        for &index in &self.path {
            element = match element.children.get(index) {
                Some(XMLNode::Element(child)) => child,
                _ => return None,
            };
        }
        Some(element)
    }

    fn current_mut(&mut self) -> Option<&mut Element> {
        let path = &self.path;
        let mut element = self.root.as_mut()?;
        for &index in path {
            element = match element.children.get_mut(index) {
                Some(XMLNode::Element(child)) => child,
                _ => return None,
            };
        }
        Some(element)
    }

    /// Racine du document
    pub fn document(&self) -> Option<&Element> {
        self.root.as_ref()
    }

    /// Consomme le curseur et rend le document construit
    pub fn into_document(self) -> Option<Element> {
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

    #[test]
    fn test_build_skeleton() {
        let mut cursor = XmlCursor::new();
        cursor.bind_prefix("s", ENV_NS);
        cursor.begin_element(&QName::new(ENV_NS, "Envelope"));
        cursor.begin_element(&QName::new(ENV_NS, "Body"));

        let root = cursor.document().unwrap();
        assert_eq!(root.name, "s:Envelope");
        assert_eq!(root.attributes.get("xmlns:s").map(String::as_str), Some(ENV_NS));
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn test_prefix_allocation_on_root() {
        let mut cursor = XmlCursor::new();
        cursor.bind_prefix("s", ENV_NS);
        cursor.begin_element(&QName::new(ENV_NS, "Envelope"));
        cursor.begin_element(&QName::new(ENV_NS, "Body"));
        cursor.begin_element(&QName::new("urn:parts", "GetPrice"));

        let root = cursor.document().unwrap();
        // Le namespace du part est déclaré sur la racine
        assert_eq!(
            root.attributes.get("xmlns:ns1").map(String::as_str),
            Some("urn:parts")
        );
    }

    #[test]
    fn test_begin_first_element() {
        let mut cursor = XmlCursor::new();
        cursor.bind_prefix("s", ENV_NS);
        cursor.begin_element(&QName::new(ENV_NS, "Envelope"));
        cursor.begin_element(&QName::new(ENV_NS, "Body"));
        cursor.to_root();
        cursor.begin_first_element(&QName::new(ENV_NS, "Header"));

        let root = cursor.document().unwrap();
        let names: Vec<&str> = root
            .children
            .iter()
            .filter_map(|n| n.as_element())
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["s:Header", "s:Body"]);
    }

    #[test]
    fn test_scoped_restores_path() {
        let mut cursor = XmlCursor::new();
        cursor.begin_local_element("root");
        cursor.scoped(|c| {
            c.begin_local_element("a");
            c.begin_local_element("b");
        });
        assert_eq!(cursor.current().unwrap().name, "root");
    }

    #[test]
    fn test_to_child_ignores_prefix() {
        let mut cursor = XmlCursor::new();
        cursor.bind_prefix("s", ENV_NS);
        cursor.begin_element(&QName::new(ENV_NS, "Envelope"));
        cursor.begin_element(&QName::new(ENV_NS, "Body"));
        cursor.to_root();
        assert!(cursor.to_child("Body"));
        assert!(!cursor.to_child("Fault"));
    }

    #[test]
    fn test_set_text_replaces() {
        let mut cursor = XmlCursor::new();
        cursor.begin_local_element("faultcode");
        cursor.set_text("?");
        cursor.set_text("Server.Error");
        let el = cursor.current().unwrap();
        assert_eq!(el.get_text().unwrap(), "Server.Error");
    }
}
