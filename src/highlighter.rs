//! Pointer-driven cross-reference highlighting over the proofs of a document.

use std::collections::HashMap;

use crate::{
    document::{Document, NodeId},
    highlight::{Emphasis, HighlightState, HighlightStrategy},
    proof::{Line, LineId, ProofIndex},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Enter,
    Leave,
}

/// A pointer crossing the boundary of a document element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub target: NodeId,
}

impl PointerEvent {
    pub const fn enter(target: NodeId) -> Self {
        Self {
            kind: PointerKind::Enter,
            target,
        }
    }

    pub const fn leave(target: NodeId) -> Self {
        Self {
            kind: PointerKind::Leave,
            target,
        }
    }
}

/// Highlights the hovered proof line together with the lines it cites.
///
/// Created once the document content is ready. Every non-ellipsis line gets an
/// entry in the handler table; pointer events on any other element are
/// ignored.
pub struct ProofHighlighter {
    strategy: Box<dyn HighlightStrategy>,
    index: ProofIndex,
    handlers: HashMap<NodeId, LineId>,
    hovered: Option<LineId>,
}

impl ProofHighlighter {
    pub fn initialize(doc: &Document, strategy: Box<dyn HighlightStrategy>) -> Self {
        let mut highlighter = Self {
            strategy,
            index: ProofIndex::default(),
            handlers: HashMap::new(),
            hovered: None,
        };
        highlighter.register(doc);
        highlighter
    }

    fn register(&mut self, doc: &Document) {
        self.index = ProofIndex::build(doc);
        self.handlers = self
            .index
            .lines()
            .filter(|(_, line)| !line.is_ellipsis)
            .map(|(id, line)| (line.node, id))
            .collect();
        tracing::info!(
            "Registered {} interactive line(s) across {} proof(s)",
            self.handlers.len(),
            self.index.proofs().len()
        );
    }

    /// Clear every highlight and drop the handler table.
    pub fn teardown(&mut self, doc: &mut Document) {
        if let Some(line) = self.hovered {
            self.on_pointer_leave(doc, line);
        }
        self.handlers.clear();
        self.index = ProofIndex::default();
    }

    /// Tear down and register again against new document content.
    pub fn reinitialize(&mut self, old: &mut Document, new: &Document) {
        self.teardown(old);
        self.register(new);
    }

    /// Swap the way highlights are drawn, carrying the current hover over.
    pub fn set_strategy(&mut self, doc: &mut Document, strategy: Box<dyn HighlightStrategy>) {
        let hovered = self.hovered;
        if let Some(line) = hovered {
            self.on_pointer_leave(doc, line);
        }
        self.strategy = strategy;
        if let Some(line) = hovered {
            self.on_pointer_enter(doc, line);
        }
    }

    pub fn strategy(&self) -> &dyn HighlightStrategy {
        self.strategy.as_ref()
    }

    pub const fn index(&self) -> &ProofIndex {
        &self.index
    }

    pub const fn hovered(&self) -> Option<LineId> {
        self.hovered
    }

    /// Line whose handlers are attached to `node`.
    pub fn handler_for(&self, node: NodeId) -> Option<LineId> {
        self.handlers.get(&node).copied()
    }

    pub fn is_registered(&self, node: NodeId) -> bool {
        self.handlers.contains_key(&node)
    }

    /// Route an event to the handlers of its target. Returns whether any
    /// handler ran.
    pub fn dispatch(&mut self, doc: &mut Document, event: PointerEvent) -> bool {
        let Some(line) = self.handler_for(event.target) else {
            return false;
        };
        match event.kind {
            PointerKind::Enter => self.on_pointer_enter(doc, line),
            PointerKind::Leave => self.on_pointer_leave(doc, line),
        }
        true
    }

    /// Lines cited by `line`, in citation order, within its own proof.
    pub fn resolve_crossrefs(&self, line: LineId) -> Vec<&Line> {
        self.index
            .resolve_crossrefs(line)
            .into_iter()
            .filter_map(|id| self.index.line(id))
            .collect()
    }

    pub fn on_pointer_enter(&mut self, doc: &mut Document, line: LineId) {
        // A missing leave for the previous line would leave its targets lit.
        if let Some(previous) = self.hovered.filter(|&p| p != line) {
            self.on_pointer_leave(doc, previous);
        }
        let Some(entry) = self.index.line(line) else {
            return;
        };
        tracing::trace!("enter line {:?} of proof {}", entry.number, entry.proof.0);

        if !entry.crossrefs.is_empty() {
            for target in self.resolve_crossrefs(line) {
                self.strategy.apply(doc, target.node, Emphasis::Secondary);
            }
        }
        // Last, so a line citing itself stays primary.
        self.strategy.apply(doc, entry.node, Emphasis::Primary);
        self.hovered = Some(line);
    }

    pub fn on_pointer_leave(&mut self, doc: &mut Document, line: LineId) {
        let Some(entry) = self.index.line(line) else {
            return;
        };
        tracing::trace!("leave line {:?} of proof {}", entry.number, entry.proof.0);

        self.strategy.clear(doc, entry.node);
        if !entry.crossrefs.is_empty() {
            for target in self.resolve_crossrefs(line) {
                self.strategy.clear(doc, target.node);
            }
        }
        if self.hovered == Some(line) {
            self.hovered = None;
        }
    }

    pub fn state(&self, doc: &Document, node: NodeId) -> HighlightState {
        self.strategy.state(doc, node)
    }

    /// Every line currently carrying some highlight, in document order.
    pub fn highlighted(&self, doc: &Document) -> Vec<(LineId, HighlightState)> {
        self.index
            .lines()
            .map(|(id, line)| (id, self.state(doc, line.node)))
            .filter(|(_, state)| !state.is_clear())
            .collect()
    }
}
