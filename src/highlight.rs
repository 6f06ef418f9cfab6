//! Ways of marking a line element as highlighted.

use crate::document::{Document, NodeId};

/// Strength of a highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    /// The line under the pointer.
    Primary,
    /// A line cited by the line under the pointer.
    Secondary,
}

/// Highlight state of a single element as the presentation layer sees it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightState {
    pub primary: bool,
    pub secondary: bool,
}

impl HighlightState {
    pub const fn is_clear(self) -> bool {
        !self.primary && !self.secondary
    }

    /// Strongest emphasis present.
    pub const fn emphasis(self) -> Option<Emphasis> {
        if self.primary {
            Some(Emphasis::Primary)
        } else if self.secondary {
            Some(Emphasis::Secondary)
        } else {
            None
        }
    }
}

/// Highlight strategy selectable from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum HighlightMode {
    /// Set `background-color` on the line element.
    #[default]
    Inline,
    /// Add `lproof-highlight-*` classes to the line element.
    Marker,
}

impl HighlightMode {
    pub fn strategy(self) -> Box<dyn HighlightStrategy> {
        match self {
            Self::Inline => Box::new(InlineStyle::default()),
            Self::Marker => Box::new(MarkerClass),
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Inline => Self::Marker,
            Self::Marker => Self::Inline,
        }
    }
}

/// Applies and removes highlight state on document elements.
pub trait HighlightStrategy {
    /// Short name shown in the viewer.
    fn name(&self) -> &'static str;

    fn apply(&self, doc: &mut Document, node: NodeId, emphasis: Emphasis);

    fn clear(&self, doc: &mut Document, node: NodeId);

    fn state(&self, doc: &Document, node: NodeId) -> HighlightState;
}

pub const BACKGROUND: &str = "background-color";
pub const TRANSITION: &str = "transition";

/// Present on an element while [`InlineStyle`] has a highlight on it.
pub const INLINE_SAVED_KEY: &str = "lproof-saved";

/// Data key holding the authored value of `property` while highlighted.
fn saved_key(property: &str) -> String {
    format!("lproof-prev-{property}")
}

/// Writes the highlight straight into the element's inline style. The
/// element's own `background-color` and `transition` are kept aside in data
/// attributes and put back on clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineStyle {
    pub primary: String,
    pub secondary: String,
    pub transition: String,
}

impl Default for InlineStyle {
    fn default() -> Self {
        Self {
            primary: "#d3d3d3".to_string(),
            secondary: "#f5f5f5".to_string(),
            transition: "background-color 0.1s linear".to_string(),
        }
    }
}

impl InlineStyle {
    fn save_authored(doc: &mut Document, node: NodeId) {
        let Some(element) = doc.get(node) else {
            return;
        };
        if element.dataset(INLINE_SAVED_KEY).is_some() {
            return;
        }
        let authored: Vec<(&str, String)> = [BACKGROUND, TRANSITION]
            .into_iter()
            .filter_map(|p| element.style_property(p).map(|v| (p, v.to_string())))
            .collect();
        for (property, value) in authored {
            doc.set_data(node, &saved_key(property), &value);
        }
        doc.set_data(node, INLINE_SAVED_KEY, "");
    }
}

impl HighlightStrategy for InlineStyle {
    fn name(&self) -> &'static str {
        "inline"
    }

    fn apply(&self, doc: &mut Document, node: NodeId, emphasis: Emphasis) {
        let colour = match emphasis {
            Emphasis::Primary => &self.primary,
            Emphasis::Secondary => &self.secondary,
        };
        Self::save_authored(doc, node);
        doc.set_style(node, BACKGROUND, colour);
        doc.set_style(node, TRANSITION, &self.transition);
    }

    fn clear(&self, doc: &mut Document, node: NodeId) {
        if doc.remove_data(node, INLINE_SAVED_KEY).is_none() {
            return;
        }
        for property in [BACKGROUND, TRANSITION] {
            match doc.remove_data(node, &saved_key(property)) {
                Some(value) => doc.set_style(node, property, &value),
                None => doc.remove_style(node, property),
            }
        }
    }

    fn state(&self, doc: &Document, node: NodeId) -> HighlightState {
        let background = doc
            .get(node)
            .filter(|e| e.dataset(INLINE_SAVED_KEY).is_some())
            .and_then(|e| e.style_property(BACKGROUND));
        HighlightState {
            primary: background == Some(self.primary.as_str()),
            secondary: background == Some(self.secondary.as_str()),
        }
    }
}

pub const PRIMARY_CLASS: &str = "lproof-highlight-primary";
pub const SECONDARY_CLASS: &str = "lproof-highlight-secondary";

/// Toggles marker classes and leaves the look to the stylesheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkerClass;

impl HighlightStrategy for MarkerClass {
    fn name(&self) -> &'static str {
        "marker"
    }

    fn apply(&self, doc: &mut Document, node: NodeId, emphasis: Emphasis) {
        let class = match emphasis {
            Emphasis::Primary => PRIMARY_CLASS,
            Emphasis::Secondary => SECONDARY_CLASS,
        };
        doc.add_class(node, class);
    }

    fn clear(&self, doc: &mut Document, node: NodeId) {
        doc.remove_class(node, PRIMARY_CLASS);
        doc.remove_class(node, SECONDARY_CLASS);
    }

    fn state(&self, doc: &Document, node: NodeId) -> HighlightState {
        doc.get(node).map_or_else(HighlightState::default, |e| HighlightState {
            primary: e.has_class(PRIMARY_CLASS),
            secondary: e.has_class(SECONDARY_CLASS),
        })
    }
}
