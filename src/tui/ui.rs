//! UI rendering for the viewer.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::{
    app::{App, LineRegion},
    status_bar,
    theme::{self, Theme},
};
use crate::{
    document::Document,
    proof::{Line as ProofLine, Proof, ProofIndex},
};

/// Render the UI.
pub fn render(frame: &mut Frame, app: &mut App) {
    let [main_area, status_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());

    render_main(frame, app, main_area);
    status_bar::render(
        frame,
        status_area,
        app.highlighter.strategy().name(),
        app.status.as_deref(),
    );
}

/// Render every proof stacked top to bottom and record where each line landed.
fn render_main(frame: &mut Frame, app: &mut App, area: Rect) {
    let title = app
        .document
        .source()
        .and_then(|path| path.file_name())
        .map_or_else(
            || " lproof ".to_string(),
            |name| format!(" lproof: {} ", name.to_string_lossy()),
        );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Theme::BORDER_FOCUSED));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let index = app.highlighter.index();
    if index.proofs().is_empty() {
        let text = Paragraph::new("No proofs in this document").style(Theme::DIM);
        frame.render_widget(text, inner);
        app.regions.clear();
        return;
    }

    let mut regions = Vec::new();
    let bottom = inner.y + inner.height;
    let mut y = inner.y;
    for (i, proof) in index.proofs().iter().enumerate() {
        if y >= bottom {
            break;
        }
        let height = u16::try_from(proof.lines.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(bottom - y);
        let proof_area = Rect::new(inner.x, y, inner.width, height);
        render_proof(frame, &app.document, index, (i, proof), proof_area, &mut regions);
        y += height;
    }
    app.regions = regions;
}

fn render_proof(
    frame: &mut Frame,
    doc: &Document,
    index: &ProofIndex,
    (position, proof): (usize, &Proof),
    area: Rect,
    regions: &mut Vec<LineRegion>,
) {
    let block = Block::default()
        .title(format!(" Proof {} ", position + 1))
        .title_style(Style::new().fg(Theme::TITLE_PROOF))
        .borders(Borders::ALL)
        .border_style(Style::new().fg(Theme::BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<&ProofLine> = proof.lines.iter().filter_map(|&id| index.line(id)).collect();
    for (row, line) in lines.iter().enumerate() {
        let Ok(row) = u16::try_from(row) else {
            break;
        };
        if row >= inner.height {
            break;
        }
        regions.push(LineRegion {
            area: Rect::new(inner.x, inner.y + row, inner.width, 1),
            node: line.node,
        });
    }

    let rows: Vec<Line> = lines.iter().map(|line| line_row(doc, line)).collect();
    frame.render_widget(Paragraph::new(Text::from(rows)), inner);
}

fn line_row(doc: &Document, line: &ProofLine) -> Line<'static> {
    let Some(element) = doc.get(line.node) else {
        return Line::default();
    };
    if line.is_ellipsis {
        return Line::styled("       ⋮", Theme::DIM);
    }

    let number = line
        .number
        .map_or_else(|| "   ".to_string(), |n| format!("{:>3}", n.0));
    let mut spans = vec![
        Span::styled(format!("{number}  "), Theme::LINE_NUMBER),
        Span::raw(doc.text_content(line.node)),
    ];
    if !line.crossrefs.is_empty() {
        let cites: Vec<String> = line.crossrefs.iter().map(|n| n.0.to_string()).collect();
        spans.push(Span::styled(format!("   [{}]", cites.join(", ")), Theme::CITATION));
    }
    Line::from(spans).style(theme::line_style(element))
}
