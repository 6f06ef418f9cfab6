//! Application state for the viewer.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};

use crate::{
    document::{Document, NodeId},
    highlight::HighlightMode,
    highlighter::{PointerEvent, ProofHighlighter},
};

/// Screen rows occupied by a proof line during the last render.
#[derive(Debug, Clone, Copy)]
pub struct LineRegion {
    pub area: Rect,
    pub node: NodeId,
}

impl LineRegion {
    const fn contains(&self, x: u16, y: u16) -> bool {
        self.area.x <= x
            && x < self.area.x + self.area.width
            && self.area.y <= y
            && y < self.area.y + self.area.height
    }
}

pub struct App {
    pub document: Document,
    pub highlighter: ProofHighlighter,
    pub mode: HighlightMode,
    /// Element the pointer is currently over.
    pub pointer: Option<NodeId>,
    /// Message shown in the status bar, e.g. a failed reload.
    pub status: Option<String>,
    pub should_exit: bool,
    pub(super) regions: Vec<LineRegion>,
}

impl App {
    pub fn new(document: Document, mode: HighlightMode) -> Self {
        let highlighter = ProofHighlighter::initialize(&document, mode.strategy());
        Self {
            document,
            highlighter,
            mode,
            pointer: None,
            status: None,
            should_exit: false,
            regions: Vec::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        super::ui::render(frame, self);
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_exit = true,
            KeyCode::Char('j') | KeyCode::Down => self.step_pointer(true),
            KeyCode::Char('k') | KeyCode::Up => self.step_pointer(false),
            KeyCode::Esc => self.point_at(None),
            KeyCode::Char('s') => self.toggle_mode(),
            KeyCode::Char('r') => self.reload(),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if matches!(
            mouse.kind,
            MouseEventKind::Moved | MouseEventKind::Drag(_) | MouseEventKind::Down(_)
        ) {
            let target = self.region_at(mouse.column, mouse.row).map(|r| r.node);
            self.point_at(target);
        }
    }

    fn region_at(&self, x: u16, y: u16) -> Option<&LineRegion> {
        self.regions.iter().find(|region| region.contains(x, y))
    }

    /// Move the pointer onto `target`, leaving the old element first.
    pub fn point_at(&mut self, target: Option<NodeId>) {
        if self.pointer == target {
            return;
        }
        if let Some(previous) = self.pointer.take() {
            self.highlighter
                .dispatch(&mut self.document, PointerEvent::leave(previous));
        }
        if let Some(node) = target {
            self.highlighter
                .dispatch(&mut self.document, PointerEvent::enter(node));
        }
        self.pointer = target;
    }

    /// Keyboard stand-in for the mouse: walk over interactive lines only.
    fn step_pointer(&mut self, forward: bool) {
        let lines: Vec<NodeId> = self
            .highlighter
            .index()
            .lines()
            .filter(|(_, line)| self.highlighter.is_registered(line.node))
            .map(|(_, line)| line.node)
            .collect();
        if lines.is_empty() {
            return;
        }
        let current = self
            .pointer
            .and_then(|node| lines.iter().position(|&n| n == node));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => lines.len() - 1,
            (Some(i), true) => (i + 1).min(lines.len() - 1),
            (Some(i), false) => i.saturating_sub(1),
        };
        self.point_at(Some(lines[next]));
    }

    fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.highlighter
            .set_strategy(&mut self.document, self.mode.strategy());
        tracing::info!("Switched to {} highlighting", self.highlighter.strategy().name());
    }

    /// Read the document again from disk and re-register every line.
    fn reload(&mut self) {
        let Some(path) = self.document.source().map(ToOwned::to_owned) else {
            self.status = Some("Nothing to reload: document was not read from a file".into());
            return;
        };
        match Document::load(&path) {
            Ok(fresh) => {
                self.highlighter.reinitialize(&mut self.document, &fresh);
                self.document = fresh;
                self.pointer = None;
                self.status = Some(format!("Reloaded {}", path.display()));
            }
            Err(e) => {
                tracing::warn!("Reload of {} failed: {e}", path.display());
                self.status = Some(format!("Reload failed: {e}"));
            }
        }
    }
}
