//! Centralized theme and styling constants.

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

use crate::{
    document::Element,
    highlight::{BACKGROUND, INLINE_SAVED_KEY, PRIMARY_CLASS, SECONDARY_CLASS},
};

/// Theme constants for consistent styling across components.
pub struct Theme;

impl Theme {
    // Base text colors
    pub const DIM: Style = Style::new().fg(Color::DarkGray);
    pub const NORMAL: Style = Style::new().fg(Color::White);
    pub const LINE_NUMBER: Style = Style::new().fg(Color::Yellow);
    pub const CITATION: Style = Style::new().fg(Color::Magenta).add_modifier(Modifier::DIM);

    // Stylesheet for the marker classes
    pub const PRIMARY: Style = Style::new()
        .bg(Color::Rgb(211, 211, 211))
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD);
    pub const SECONDARY: Style = Style::new().bg(Color::Rgb(245, 245, 245)).fg(Color::Black);

    // UI chrome colors
    pub const BORDER: Color = Color::DarkGray;
    pub const BORDER_FOCUSED: Color = Color::Cyan;
    pub const TITLE_PROOF: Color = Color::Cyan;
}

/// Row style for a proof line, read back from whatever highlight the element
/// carries.
pub fn line_style(element: &Element) -> Style {
    if element.has_class(PRIMARY_CLASS) {
        return Theme::PRIMARY;
    }
    if element.has_class(SECONDARY_CLASS) {
        return Theme::SECONDARY;
    }
    // Authored backgrounds are not highlights.
    if element.dataset(INLINE_SAVED_KEY).is_none() {
        return Theme::NORMAL;
    }
    element
        .style_property(BACKGROUND)
        .and_then(|value| Color::from_str(value).ok())
        .map_or(Theme::NORMAL, |bg| Style::new().bg(bg).fg(Color::Black))
}
