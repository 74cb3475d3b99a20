//! Génération d'instances XML d'exemple
//!
//! Équivalent simplifié d'un générateur schéma-vers-instance : produit un
//! fragment structurellement valide pour un type donné, en respectant la
//! politique d'optionalité, la table de valeurs littérales et le style
//! d'encodage SOAP.
//!
//! Le générateur est local à un appel de synthèse : toute la configuration
//! passe par les constructeurs `with_*`, jamais par des setters partagés.

use std::collections::HashMap;

use soaputils::{QName, XmlCursor, xml};
use tracing::warn;

use crate::catalog::SchemaCatalog;
use crate::types::{ElementDecl, SchemaType, SchemaTypeRef, SimpleKind, TypeContent};

/// Générateur d'instances d'exemple pour des types de schéma
pub struct SampleXmlGenerator<'a> {
    catalog: Option<&'a SchemaCatalog>,
    soap_enc: bool,
    ignore_optional: bool,
    type_comments: bool,
    max_depth: usize,
    multi_values: HashMap<QName, Vec<String>>,

    /// Compteurs d'occurrences par nom, pour faire défiler les valeurs
    /// littérales au fil des répétitions d'un même élément
    occurrences: HashMap<QName, usize>,
}

impl<'a> SampleXmlGenerator<'a> {
    /// Crée un générateur ; `soap_enc` active les annotations `xsi:type`
    /// sur les feuilles (style RPC-encoded).
    pub fn new(soap_enc: bool) -> Self {
        Self {
            catalog: None,
            soap_enc,
            ignore_optional: true,
            type_comments: false,
            max_depth: 8,
            multi_values: HashMap::new(),
            occurrences: HashMap::new(),
        }
    }

    /// Catalogue utilisé pour résoudre les références de types nommées
    pub fn with_catalog(mut self, catalog: &'a SchemaCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// `false` pour générer aussi les éléments optionnels
    pub fn with_ignore_optional(mut self, ignore: bool) -> Self {
        self.ignore_optional = ignore;
        self
    }

    /// Table de valeurs littérales par nom qualifié d'élément
    pub fn with_multi_values(mut self, multi_values: HashMap<QName, Vec<String>>) -> Self {
        self.multi_values = multi_values;
        self
    }

    /// Émet un commentaire de type dans chaque élément généré
    pub fn with_type_comments(mut self, type_comments: bool) -> Self {
        self.type_comments = type_comments;
        self
    }

    /// Profondeur de récursion maximale
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Vrai si le style RPC-encoded est en vigueur
    pub fn is_soap_enc(&self) -> bool {
        self.soap_enc
    }

    /// Produit un fragment XML autonome pour un type.
    ///
    /// La racine porte le nom du type (ou `sample` s'il est anonyme).
    pub fn create_sample(&mut self, ty: &SchemaType) -> String {
        let root_name = ty
            .name
            .clone()
            .unwrap_or_else(|| QName::local("sample"));

        let mut cursor = XmlCursor::new();
        cursor.begin_element(&root_name);
        self.fill(Some(&root_name), ty, &mut cursor, 0);

        let Some(root) = cursor.document() else {
            return String::new();
        };
        match xml::serialize_pretty(root) {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to serialize sample fragment: {}", e);
                String::new()
            }
        }
    }

    /// Remplit l'élément courant du curseur avec un contenu d'exemple
    pub fn create_sample_for_type(&mut self, ty: &SchemaType, cursor: &mut XmlCursor) {
        self.fill(ty.name.as_ref(), ty, cursor, 0);
    }

    fn fill(&mut self, key: Option<&QName>, ty: &SchemaType, cursor: &mut XmlCursor, depth: usize) {
        if depth > self.max_depth {
            warn!(
                "Max recursion depth {} reached while generating sample content",
                self.max_depth
            );
            return;
        }

        match &ty.content {
            TypeContent::Empty => {}
            TypeContent::Simple(kind) => {
                let value = self.value_for(key, kind);
                cursor.set_text(&value);
                if self.soap_enc {
                    cursor.set_attribute("xsi:type", &format!("xsd:{}", kind.xsd_name()));
                }
            }
            TypeContent::Sequence(elements) => {
                for decl in elements {
                    if decl.is_optional() && self.ignore_optional {
                        continue;
                    }
                    let catalog = self.catalog;
                    let resolved = match &decl.ty {
                        SchemaTypeRef::Inline(child) => Some(child.as_ref()),
                        SchemaTypeRef::Named(name) => {
                            catalog.and_then(|c| c.find_type(name))
                        }
                    };
                    let Some(child_ty) = resolved else {
                        if let SchemaTypeRef::Named(name) = &decl.ty {
                            warn!(
                                "Failed to find type [{}] referenced by element [{}]",
                                name, decl.name
                            );
                        }
                        continue;
                    };

                    for _ in 0..self.occurs_for(decl) {
                        cursor.begin_element(&decl.name);
                        if self.type_comments {
                            cursor.append_comment(&format!(" type: {} ", type_label(child_ty)));
                        }
                        self.fill(Some(&decl.name), child_ty, cursor, depth + 1);
                        cursor.to_parent();
                    }
                }
            }
        }
    }

    /// Nombre d'occurrences à émettre pour une déclaration.
    ///
    /// Un nom couvert par la table de valeurs littérales émet une occurrence
    /// par valeur, dans la limite d'un `max_occurs` borné.
    fn occurs_for(&self, decl: &ElementDecl) -> usize {
        let base = match self.multi_values.get(&decl.name) {
            Some(values) if !values.is_empty() => values.len(),
            _ => decl.min_occurs.max(1) as usize,
        };
        if decl.max_occurs == 0 {
            base
        } else {
            base.min(decl.max_occurs as usize)
        }
    }

    fn value_for(&mut self, key: Option<&QName>, kind: &SimpleKind) -> String {
        if let Some(name) = key {
            if let Some(values) = self.multi_values.get(name) {
                if !values.is_empty() {
                    let counter = self.occurrences.entry(name.clone()).or_insert(0);
                    let value = values[*counter % values.len()].clone();
                    *counter += 1;
                    return value;
                }
            }
        }
        kind.sample_value().to_string()
    }
}

fn type_label(ty: &SchemaType) -> String {
    match &ty.content {
        TypeContent::Simple(kind) => format!("xsd:{}", kind.xsd_name()),
        _ => ty
            .name
            .as_ref()
            .map(|q| q.local.clone())
            .unwrap_or_else(|| "complex".to_string()),
    }
}
