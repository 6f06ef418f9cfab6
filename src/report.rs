//! Plain-data description of a line and the lines it cites.

use serde::Serialize;

use crate::{
    document::Document,
    error::{LookupError, Result},
    proof::{LineId, LineNumber, ProofId, ProofIndex},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CitedLine {
    pub number: Option<LineNumber>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossrefReport {
    /// 1-based position of the proof in the document.
    pub proof: usize,
    pub line: LineNumber,
    pub text: String,
    /// Citations as written, including those that resolve to nothing.
    pub written: Vec<LineNumber>,
    /// Resolved targets in citation order.
    pub cites: Vec<CitedLine>,
}

/// Resolve the citations of line `number` in the `proof`-th proof (1-based).
pub fn crossref_report(doc: &Document, proof: usize, number: i64) -> Result<CrossrefReport> {
    let index = ProofIndex::build(doc);
    let available = index.proofs().len();
    let proof_id = proof
        .checked_sub(1)
        .map(ProofId)
        .filter(|id| index.proof(*id).is_some())
        .ok_or(LookupError::NoSuchProof { index: proof, available })?;

    let line_id = index
        .lookup(proof_id, LineNumber(number))
        .ok_or(LookupError::NoSuchLine { proof, number })?;
    let line = index
        .line(line_id)
        .ok_or(LookupError::NoSuchLine { proof, number })?;
    if line.is_ellipsis {
        return Err(LookupError::NotALine { proof, number }.into());
    }

    let describe = |id: LineId| {
        index.line(id).map(|target| CitedLine {
            number: target.number,
            text: doc.text_content(target.node),
        })
    };

    Ok(CrossrefReport {
        proof,
        line: LineNumber(number),
        text: doc.text_content(line.node),
        written: line.crossrefs.clone(),
        cites: index
            .resolve_crossrefs(line_id)
            .into_iter()
            .filter_map(describe)
            .collect(),
    })
}
