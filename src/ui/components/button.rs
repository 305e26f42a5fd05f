//! Bordered buttons for call-to-actions, the send row and the section sidebar

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Idle,
    Focused,
    /// Shown but not actionable, e.g. while a message is sending
    Disabled,
}

impl ButtonState {
    pub fn from_flags(is_focused: bool, is_enabled: bool) -> Self {
        match (is_enabled, is_focused) {
            (false, _) => Self::Disabled,
            (true, true) => Self::Focused,
            (true, false) => Self::Idle,
        }
    }

    fn border(self) -> Style {
        match self {
            Self::Focused => Style::default().fg(Color::Magenta),
            Self::Idle | Self::Disabled => Style::default().fg(Color::DarkGray),
        }
    }

    fn text(self) -> Style {
        match self {
            Self::Focused => Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            Self::Idle => Style::default(),
            Self::Disabled => Style::default().fg(Color::DarkGray),
        }
    }
}

/// Centered label in a bordered box
pub fn render_button(frame: &mut Frame, area: Rect, content: &str, state: ButtonState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(state.border());
    let paragraph = Paragraph::new(format!(" {content} "))
        .style(state.text())
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, area);
}

/// Sidebar entry: dim jump key followed by the section label
pub fn render_sidebar_button(
    frame: &mut Frame,
    area: Rect,
    key: &str,
    label: &str,
    is_selected: bool,
) {
    let state = ButtonState::from_flags(is_selected, true);
    let line = Line::from(vec![
        Span::styled(format!(" {key} "), Style::default().fg(Color::DarkGray)),
        Span::styled(label.to_string(), state.text()),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(state.border());

    frame.render_widget(Paragraph::new(line).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_wins_over_focus() {
        assert_eq!(ButtonState::from_flags(true, false), ButtonState::Disabled);
        assert_eq!(ButtonState::from_flags(true, true), ButtonState::Focused);
        assert_eq!(ButtonState::from_flags(false, true), ButtonState::Idle);
    }
}
