//! Contact section: info panel, form and footer

use super::components::{render_button, ButtonState, BUTTON_HEIGHT};
use super::forms::{draw_field, draw_help_text, field_height, FieldView};
use super::sections::{heading_lines, reveal_style, revealed_area};
use crate::app::App;
use crate::contact::PipelineState;
use crate::platform::SEND_SHORTCUT;
use crate::state::content::{
    copyright, BRAND, CONTACT_HEADING, CONTACT_INFO, CONTACT_INTRO, SOCIAL_LINKS,
    SUBMITTED_FALLBACK,
};
use crate::state::{ContactField, Section};
use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the Contact section
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let progress = app.state.reveal.progress(Section::Contact);

    let block = Block::default()
        .title(" Contact ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = revealed_area(block.inner(area), progress);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Heading
            Constraint::Min(0),    // Info + form
            Constraint::Length(2), // Footer
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(heading_lines(&CONTACT_HEADING))
            .style(reveal_style(progress))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    draw_info_panel(frame, columns[0], app);
    if app.contact.state().is_submitted() {
        draw_submitted_panel(frame, columns[1], app);
    } else {
        draw_form(frame, columns[1], app);
    }
    draw_footer(frame, rows[2]);
}

fn draw_info_panel(frame: &mut Frame, area: Rect, app: &App) {
    let selecting = !app.state.in_contact_form();
    let selected = app.state.selected_index;
    let marker = |index: usize| {
        if selecting && index == selected {
            Span::styled("▸ ", Style::default().fg(Color::Magenta))
        } else {
            Span::raw("  ")
        }
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "Get in Touch",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(CONTACT_INTRO),
        Line::from(""),
    ];

    for (idx, info) in CONTACT_INFO.iter().enumerate() {
        lines.push(Line::from(vec![
            marker(idx),
            Span::styled(
                format!("{}: ", info.title),
                Style::default().fg(Color::Gray),
            ),
            Span::raw(info.content),
        ]));
    }

    lines.push(Line::from(""));
    for (idx, social) in SOCIAL_LINKS.iter().enumerate() {
        lines.push(Line::from(vec![
            marker(CONTACT_INFO.len() + idx),
            Span::styled(social.label, Style::default().fg(Color::Blue)),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let in_form = app.state.in_contact_form();
    let border = if in_form { Color::Magenta } else { Color::DarkGray };
    let block = Block::default()
        .title(" Send us a message ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let banner = app.contact.banner();
    let unknown: Vec<String> = app
        .contact
        .errors()
        .unknown_entries()
        .map(|(key, message)| format!("{key}: {message}"))
        .collect();
    let notice_rows = u16::from(banner.is_some()) + unknown.len() as u16;

    let mut constraints: Vec<Constraint> = ContactField::ALL
        .iter()
        .map(|f| Constraint::Length(field_height(f.is_multiline())))
        .collect();
    constraints.extend([
        Constraint::Length(notice_rows),   // Banner
        Constraint::Length(BUTTON_HEIGHT), // Send button
        Constraint::Length(1),             // Help
        Constraint::Min(0),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let snapshot = app.contact.snapshot();
    for (idx, field) in ContactField::ALL.iter().enumerate() {
        let view = FieldView {
            label: field.label(),
            value: snapshot.get(*field),
            placeholder: field.placeholder(),
            is_active: in_form && app.state.active_form_field == idx,
            is_multiline: field.is_multiline(),
            error: app.contact.error_for(*field),
        };
        draw_field(frame, chunks[idx], &view);
    }

    let fields = ContactField::ALL.len();
    let mut notices: Vec<Line> = banner
        .map(|b| Line::from(Span::styled(b, Style::default().fg(Color::Red))))
        .into_iter()
        .collect();
    notices.extend(
        unknown
            .into_iter()
            .map(|u| Line::from(Span::styled(u, Style::default().fg(Color::Red)))),
    );
    frame.render_widget(Paragraph::new(notices), chunks[fields]);

    let submitting = matches!(app.contact.state(), PipelineState::Submitting);
    let label = if submitting { "Sending..." } else { "Send Message" };
    let state = ButtonState::from_flags(in_form && app.state.on_submit_row(), !submitting);
    render_button(frame, chunks[fields + 1], label, state);

    let help = if in_form {
        format!("Tab: next field  Enter: newline in message  {SEND_SHORTCUT}: send")
    } else {
        "Press Enter to start writing".to_string()
    };
    draw_help_text(frame, chunks[fields + 2], &help);
}

fn draw_submitted_panel(frame: &mut Frame, area: Rect, app: &App) {
    let message = match app.contact.state() {
        PipelineState::Submitted(message) if !message.is_empty() => message.as_str(),
        _ => SUBMITTED_FALLBACK,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(5),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    let lines = vec![
        Line::from(Span::styled("✓", Style::default().fg(Color::Green))),
        Line::from(Span::styled(
            "Message Sent!",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::Gray))),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[1],
    );

    let width = 28u16.min(chunks[2].width);
    let button_area = Rect {
        x: chunks[2].x + (chunks[2].width - width) / 2,
        width,
        ..chunks[2]
    };
    let state = ButtonState::from_flags(app.state.in_contact_form(), true);
    render_button(frame, button_area, "Send Another Message", state);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let year = chrono::Local::now().year();
    let socials = SOCIAL_LINKS
        .iter()
        .map(|s| s.label)
        .collect::<Vec<_>>()
        .join("  ");

    let lines = vec![
        Line::from(vec![
            Span::styled(
                BRAND,
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(socials, Style::default().fg(Color::Blue)),
        ]),
        Line::from(Span::styled(
            copyright(year),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
