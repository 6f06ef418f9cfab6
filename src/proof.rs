//! Proofs and proof lines read out of a rendered document.

use std::collections::HashMap;

use serde::Serialize;

use crate::document::{Document, NodeId};

/// Marker class of a proof container.
pub const PROOF_CLASS: &str = "lproof";
/// Marker class of a proof line.
pub const LINE_CLASS: &str = "proof-line";

const NUMBER_KEY: &str = "number";
const ELLIPSIS_KEY: &str = "ellipses";
const CROSSREFS_KEY: &str = "crossrefs";

/// Label of a line, unique within its proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LineNumber(pub i64);

impl LineNumber {
    fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse().ok().map(Self)
    }
}

/// Position of a proof in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProofId(pub usize);

/// Position of a line in the flat line table of a [`ProofIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub node: NodeId,
    pub proof: ProofId,
    pub number: Option<LineNumber>,
    pub is_ellipsis: bool,
    /// Cited line numbers, in the order they were written. Labels that are not
    /// integers are dropped.
    pub crossrefs: Vec<LineNumber>,
}

impl Line {
    fn read(doc: &Document, node: NodeId, proof: ProofId) -> Self {
        let element = doc.get(node);
        let dataset = |key: &str| element.and_then(|e| e.dataset(key));

        Self {
            node,
            proof,
            number: dataset(NUMBER_KEY).and_then(LineNumber::parse),
            is_ellipsis: dataset(ELLIPSIS_KEY).is_some_and(|v| !v.is_empty()),
            crossrefs: dataset(CROSSREFS_KEY)
                .map(parse_crossrefs)
                .unwrap_or_default(),
        }
    }
}

fn parse_crossrefs(raw: &str) -> Vec<LineNumber> {
    raw.split(',').filter_map(LineNumber::parse).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    pub node: NodeId,
    pub lines: Vec<LineId>,
}

/// Every proof of a document with a `(proof, number) -> line` lookup table.
#[derive(Debug, Clone, Default)]
pub struct ProofIndex {
    proofs: Vec<Proof>,
    lines: Vec<Line>,
    by_number: HashMap<(ProofId, LineNumber), LineId>,
}

impl ProofIndex {
    /// Scan `doc` for proofs. A line belongs to its nearest enclosing proof.
    pub fn build(doc: &Document) -> Self {
        let mut index = Self::default();
        let proof_nodes = doc.descendants_with_class(Document::root(), PROOF_CLASS);
        let proof_of: HashMap<NodeId, ProofId> = proof_nodes
            .iter()
            .enumerate()
            .map(|(i, &node)| (node, ProofId(i)))
            .collect();

        index.proofs = proof_nodes
            .iter()
            .map(|&node| Proof {
                node,
                lines: Vec::new(),
            })
            .collect();

        for (i, &proof_node) in proof_nodes.iter().enumerate() {
            let proof = ProofId(i);
            let owned = doc
                .descendants_with_class(proof_node, LINE_CLASS)
                .into_iter()
                .filter(|&line| {
                    doc.closest_ancestor(line, PROOF_CLASS)
                        .and_then(|p| proof_of.get(&p))
                        == Some(&proof)
                });
            for node in owned {
                index.push_line(Line::read(doc, node, proof));
            }
        }

        index
    }

    fn push_line(&mut self, line: Line) {
        let id = LineId(self.lines.len());
        if let Some(number) = line.number {
            let existing = *self.by_number.entry((line.proof, number)).or_insert(id);
            if existing != id {
                tracing::debug!(
                    "Proof {} repeats line number {}; keeping the first",
                    line.proof.0,
                    number.0
                );
            }
        }
        self.proofs[line.proof.0].lines.push(id);
        self.lines.push(line);
    }

    pub fn proofs(&self) -> &[Proof] {
        &self.proofs
    }

    pub fn proof(&self, id: ProofId) -> Option<&Proof> {
        self.proofs.get(id.0)
    }

    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(id.0)
    }

    pub fn lines(&self) -> impl Iterator<Item = (LineId, &Line)> {
        self.lines.iter().enumerate().map(|(i, l)| (LineId(i), l))
    }

    pub fn lookup(&self, proof: ProofId, number: LineNumber) -> Option<LineId> {
        self.by_number.get(&(proof, number)).copied()
    }

    /// Lines cited by `id`, in citation order, looked up within its own proof.
    /// Citations naming no line are left out.
    pub fn resolve_crossrefs(&self, id: LineId) -> Vec<LineId> {
        let Some(line) = self.line(id) else {
            return Vec::new();
        };
        line.crossrefs
            .iter()
            .filter_map(|&number| self.lookup(line.proof, number))
            .collect()
    }
}
