//! Cross-reference highlighting for rendered logical proofs.
//!
//! A [`ProofHighlighter`] is attached to a [`Document`] once its content is
//! ready. Pointing at a proof line highlights it together with the lines it
//! cites; pointing away clears that highlight again.

pub mod document;
pub mod error;
pub mod highlight;
pub mod highlighter;
pub mod proof;
pub mod report;
pub mod tui;

pub use document::{Document, NodeId};
pub use error::{Error, Result};
pub use highlight::{Emphasis, HighlightMode, HighlightState, HighlightStrategy, InlineStyle, MarkerClass};
pub use highlighter::{PointerEvent, PointerKind, ProofHighlighter};
pub use proof::{Line, LineId, LineNumber, ProofId, ProofIndex};
