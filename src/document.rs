//! In-memory document tree holding rendered proof markup.
//!
//! Elements live in an arena and are addressed by [`NodeId`]. The tree is
//! loaded from JSON, where every element is an object with optional `tag`,
//! `class`, `data`, `style`, `text` and `children` fields.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Index of an element in its [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// Serialized form of an element, children nested inline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementSpec {
    pub tag: Option<String>,
    /// Space-separated class list, as in HTML.
    pub class: String,
    pub data: BTreeMap<String, String>,
    pub style: BTreeMap<String, String>,
    pub text: String,
    pub children: Vec<ElementSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    classes: Vec<String>,
    pub data: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    pub text: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl Element {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Value of a `data-*` attribute, keyed without the `data-` prefix.
    pub fn dataset(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn style_property(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }
}

/// A rendered document: an arena of elements rooted at [`Document::root`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Element>,
    source: Option<PathBuf>,
}

impl Default for Document {
    fn default() -> Self {
        Self::from_spec(ElementSpec::default())
    }
}

impl Document {
    pub const fn root() -> NodeId {
        NodeId(0)
    }

    /// Flatten a nested element description into an arena.
    pub fn from_spec(spec: ElementSpec) -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            source: None,
        };
        doc.insert(spec, None);
        doc
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let spec: ElementSpec = serde_json::from_str(json)?;
        Ok(Self::from_spec(spec))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let mut doc = Self::from_json(&json)?;
        doc.source = Some(path.to_path_buf());
        tracing::info!("Loaded {} elements from {}", doc.len(), path.display());
        Ok(doc)
    }

    /// File the document was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    fn insert(&mut self, spec: ElementSpec, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Element {
            tag: spec.tag.unwrap_or_else(|| "div".to_string()),
            classes: spec.class.split_whitespace().map(str::to_string).collect(),
            data: spec.data,
            style: spec.style,
            text: spec.text,
            parent,
            children: Vec::new(),
        });
        let children: Vec<NodeId> = spec
            .children
            .into_iter()
            .map(|child| self.insert(child, Some(id)))
            .collect();
        self.nodes[id.0].children = children;
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id.0)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(id.0)
    }

    /// Descendants of `scope` (excluding `scope` itself) carrying `class`, in
    /// document order.
    pub fn descendants_with_class(&self, scope: NodeId, class: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self
            .get(scope)
            .map(|e| e.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(id) = stack.pop() {
            let Some(element) = self.get(id) else {
                continue;
            };
            if element.has_class(class) {
                found.push(id);
            }
            stack.extend(element.children.iter().rev().copied());
        }
        found
    }

    /// Nearest strict ancestor of `id` carrying `class`.
    pub fn closest_ancestor(&self, id: NodeId, class: &str) -> Option<NodeId> {
        let mut current = self.get(id)?.parent;
        while let Some(ancestor) = current {
            let element = self.get(ancestor)?;
            if element.has_class(class) {
                return Some(ancestor);
            }
            current = element.parent;
        }
        None
    }

    /// Concatenated text of `id` and its descendants, pieces joined by a space.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut pieces = Vec::new();
        self.collect_text(id, &mut pieces);
        pieces.join(" ")
    }

    fn collect_text<'a>(&'a self, id: NodeId, pieces: &mut Vec<&'a str>) {
        let Some(element) = self.get(id) else {
            return;
        };
        let own = element.text.trim();
        if !own.is_empty() {
            pieces.push(own);
        }
        for &child in &element.children {
            self.collect_text(child, pieces);
        }
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(element) = self.get_mut(id) {
            if !element.has_class(class) {
                element.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(element) = self.get_mut(id) {
            element.classes.retain(|c| c != class);
        }
    }

    pub fn set_style(&mut self, id: NodeId, property: &str, value: &str) {
        if let Some(element) = self.get_mut(id) {
            element.style.insert(property.to_string(), value.to_string());
        }
    }

    pub fn remove_style(&mut self, id: NodeId, property: &str) {
        if let Some(element) = self.get_mut(id) {
            element.style.remove(property);
        }
    }

    pub fn set_data(&mut self, id: NodeId, key: &str, value: &str) {
        if let Some(element) = self.get_mut(id) {
            element.data.insert(key.to_string(), value.to_string());
        }
    }

    /// Remove a `data-*` attribute, returning its old value.
    pub fn remove_data(&mut self, id: NodeId, key: &str) -> Option<String> {
        self.get_mut(id).and_then(|element| element.data.remove(key))
    }
}
