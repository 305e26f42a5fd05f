//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::contact::PipelineState;
use crate::platform::SEND_SHORTCUT;
use crate::state::{Focus, Section};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the section sidebar
pub const SIDEBAR_WIDTH: u16 = 20;

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Draw the section sidebar, one button per section stacked from the top
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints: Vec<Constraint> = Section::ALL
        .iter()
        .map(|_| Constraint::Length(BUTTON_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, section) in Section::ALL.iter().enumerate() {
        let key = (idx + 1).to_string();
        render_sidebar_button(
            frame,
            chunks[idx],
            &key,
            section.label(),
            *section == app.state.current_section,
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.current_section.label()),
        Style::default().fg(Color::Magenta),
    )];

    spans.push(Span::styled(
        get_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = " ^C:quit ";
    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current focus and section
fn get_hints(app: &App) -> String {
    if app.state.focus == Focus::ContactForm {
        return match app.contact.state() {
            PipelineState::Submitted(_) => "Enter/r:send another  Esc:back".to_string(),
            PipelineState::Submitting => "Sending...  Esc:back".to_string(),
            _ => format!("Tab:next  {SEND_SHORTCUT}:send  Esc:back"),
        };
    }

    match app.state.current_section {
        Section::Home => "j/k:sections  1-6:jump  Enter/g:get in touch".to_string(),
        Section::About | Section::Services => "j/k:sections  1-6:jump  g:contact".to_string(),
        Section::Work => "j/k:sections  h/l:project  y:copy link".to_string(),
        Section::Testimonials => "j/k:sections  h/l:review".to_string(),
        Section::Contact => "Enter:write message  h/l:link  y:copy link".to_string(),
    }
}
