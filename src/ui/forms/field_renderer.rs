//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Everything needed to draw one input field
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub is_active: bool,
    pub is_multiline: bool,
    pub error: Option<&'a str>,
}

/// Rows a field needs: its box plus one line for an error message
pub fn field_height(is_multiline: bool) -> u16 {
    if is_multiline {
        7
    } else {
        4
    }
}

/// Draw a bordered input with its error line underneath
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldView) {
    let border_style = if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if field.is_active {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = Span::styled(
        if field.is_active { "▌" } else { "" },
        Style::default().fg(Color::Magenta),
    );

    let mut lines: Vec<Line> = if field.value.is_empty() {
        vec![Line::from(Span::styled(
            field.placeholder,
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        // split keeps the empty line after a trailing newline
        field
            .value
            .split('\n')
            .map(|l| Line::from(l.to_string()))
            .collect()
    };

    if field.value.is_empty() {
        lines[0].spans.insert(0, cursor);
    } else if let Some(last) = lines.last_mut() {
        last.spans.push(cursor);
    }

    let box_height = area.height.saturating_sub(1);
    let input_area = Rect {
        height: box_height,
        ..area
    };

    // Keep the end of long messages in view
    let inner_rows = box_height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_rows.max(1)) as u16;

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((if field.is_multiline { scroll } else { 0 }, 0))
        .block(block);
    frame.render_widget(content, input_area);

    if let Some(error) = field.error {
        let error_area = Rect {
            y: area.y + box_height,
            height: 1,
            ..area
        };
        let line = Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), error_area);
    }
}

/// Draw a one-line dimmed help text
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(help, area);
}
