//! Status bar with keybindings and the active highlight strategy.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const KEYBINDINGS: &[(&str, &str)] = &[
    ("j/k", "move"),
    ("Esc", "leave"),
    ("s", "strategy"),
    ("r", "reload"),
    ("q", "quit"),
];

pub fn render(frame: &mut Frame, area: Rect, strategy: &str, message: Option<&str>) {
    let separator = Span::raw(" │ ");

    let keybind_spans = KEYBINDINGS.iter().enumerate().flat_map(|(i, (key, desc))| {
        let prefix = (i > 0).then(|| separator.clone());
        prefix.into_iter().chain([
            Span::styled(*key, Style::new().fg(Color::Cyan)),
            Span::raw(format!(": {desc}")),
        ])
    });

    let strategy_span = Span::styled(format!(" [{strategy}]"), Style::new().fg(Color::Green));
    let message_span =
        message.map(|m| Span::styled(format!("  {m}"), Style::new().fg(Color::Yellow)));

    let spans: Vec<Span> = keybind_spans
        .chain([strategy_span])
        .chain(message_span)
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
