#![allow(dead_code)]

use lproof::{Document, HighlightState, LineId, LineNumber, ProofHighlighter, ProofId};
use serde_json::{json, Value};

/// One proof line: number, cited numbers, ellipsis flag.
pub struct Row(pub Option<i64>, pub &'static str, pub bool);

pub const fn line(number: i64, crossrefs: &'static str) -> Row {
    Row(Some(number), crossrefs, false)
}

pub const fn ellipsis() -> Row {
    Row(None, "", true)
}

fn row_json(row: &Row) -> Value {
    let mut data = serde_json::Map::new();
    if let Some(n) = row.0 {
        data.insert("number".into(), json!(n.to_string()));
    }
    if !row.1.is_empty() {
        data.insert("crossrefs".into(), json!(row.1));
    }
    if row.2 {
        data.insert("ellipses".into(), json!("true"));
    }
    let text = row.0.map_or_else(|| "...".to_string(), |n| format!("step {n}"));
    json!({"class": "proof-line", "data": data, "text": text})
}

/// Document JSON with one `lproof` container per slice.
pub fn proofs_json(proofs: &[&[Row]]) -> String {
    let children: Vec<Value> = proofs
        .iter()
        .map(|rows| {
            let lines: Vec<Value> = rows.iter().map(row_json).collect();
            json!({"class": "lproof", "children": lines})
        })
        .collect();
    json!({"tag": "body", "children": children}).to_string()
}

pub fn document(proofs: &[&[Row]]) -> Document {
    Document::from_json(&proofs_json(proofs)).expect("fixture should parse")
}

/// Line id of the line numbered `number` in the `proof`-th proof (0-based).
pub fn line_id(hl: &ProofHighlighter, proof: usize, number: i64) -> LineId {
    hl.index()
        .lookup(ProofId(proof), LineNumber(number))
        .expect("fixture line should exist")
}

/// Highlighted lines as `(proof, number, state)`, in document order.
pub fn lit(hl: &ProofHighlighter, doc: &Document) -> Vec<(usize, Option<i64>, HighlightState)> {
    hl.highlighted(doc)
        .into_iter()
        .filter_map(|(id, state)| {
            let line = hl.index().line(id)?;
            Some((line.proof.0, line.number.map(|n| n.0), state))
        })
        .collect()
}

pub const PRIMARY: HighlightState = HighlightState {
    primary: true,
    secondary: false,
};

pub const SECONDARY: HighlightState = HighlightState {
    primary: false,
    secondary: true,
};
