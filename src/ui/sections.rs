//! Content sections (Home, About, Services, Our Work, Testimonials)

use super::components::{render_button, ButtonState, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::content::{
    Heading, ABOUT, ABOUT_PARAGRAPHS, HERO, HERO_BADGE, HERO_CALL_TO_ACTION, SERVICES,
    SERVICES_HEADING, TESTIMONIALS, TESTIMONIALS_HEADING, WORKS, WORKS_HEADING,
};
use crate::state::Section;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a section slides up by while revealing
const REVEAL_ROWS: f32 = 4.0;

/// Shift `area` down while the section is still revealing
pub fn revealed_area(area: Rect, progress: f32) -> Rect {
    let offset = ((1.0 - progress.clamp(0.0, 1.0)) * REVEAL_ROWS).round() as u16;
    let offset = offset.min(area.height);
    Rect {
        y: area.y + offset,
        height: area.height - offset,
        ..area
    }
}

/// Text style for a revealing section; dim until halfway in
pub fn reveal_style(progress: f32) -> Style {
    if progress < 0.5 {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    }
}

pub fn heading_lines(heading: &Heading) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(heading.plain, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            heading.highlight,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    if !heading.blurb.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            heading.blurb,
            Style::default().fg(Color::Gray),
        )));
    }
    lines
}

/// Draw the current non-Contact section
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let section = app.state.current_section;
    let progress = app.state.reveal.progress(section);

    let block = Block::default()
        .title(format!(" {} ", section.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content = revealed_area(inner, progress);
    let style = reveal_style(progress);

    match section {
        Section::Home => draw_home(frame, content, style),
        Section::About => draw_about(frame, content, style),
        Section::Services => draw_services(frame, content, style, app.state.selected_index),
        Section::Work => draw_work(frame, content, style, app.state.selected_index),
        Section::Testimonials => {
            draw_testimonials(frame, content, style, app.state.selected_index)
        }
        Section::Contact => {}
    }
}

fn draw_home(frame: &mut Frame, area: Rect, style: Style) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(7),             // Badge + heading + blurb
            Constraint::Length(BUTTON_HEIGHT), // Call to action
            Constraint::Min(0),
        ])
        .split(area);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("✦ {HERO_BADGE}"),
            Style::default().fg(Color::Magenta),
        )),
        Line::from(""),
    ];
    lines.extend(heading_lines(&HERO));

    let text = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(text, chunks[1]);

    let width = (HERO_CALL_TO_ACTION.len() as u16 + 8).min(chunks[2].width);
    let button_area = Rect {
        x: chunks[2].x + (chunks[2].width - width) / 2,
        width,
        ..chunks[2]
    };
    render_button(
        frame,
        button_area,
        HERO_CALL_TO_ACTION,
        ButtonState::Focused,
    );
}

fn draw_about(frame: &mut Frame, area: Rect, style: Style) {
    let mut lines = heading_lines(&ABOUT);
    for paragraph in ABOUT_PARAGRAPHS {
        lines.push(Line::from(""));
        lines.push(Line::from(paragraph));
    }
    let text = Paragraph::new(lines).style(style).wrap(Wrap { trim: true });
    frame.render_widget(text, area.inner(Margin::new(2, 1)));
}

/// Heading on top, the rest for the section body
fn split_heading(area: Rect, heading: &Heading) -> (Rect, Rect) {
    let height = if heading.blurb.is_empty() { 1 } else { 4 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(height), Constraint::Min(0)])
        .margin(1)
        .split(area);
    (chunks[0], chunks[1])
}

fn card_border(is_selected: bool) -> Style {
    if is_selected {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_services(frame: &mut Frame, area: Rect, style: Style, selected: usize) {
    let (heading_area, body) = split_heading(area, &SERVICES_HEADING);
    frame.render_widget(
        Paragraph::new(heading_lines(&SERVICES_HEADING))
            .style(style)
            .wrap(Wrap { trim: true }),
        heading_area,
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(body);

    for (idx, service) in SERVICES.iter().enumerate() {
        let mut lines = vec![Line::from(service.description), Line::from("")];
        lines.extend(service.features.iter().map(|feature| {
            Line::from(vec![
                Span::styled("✓ ", Style::default().fg(Color::Green)),
                Span::raw(*feature),
            ])
        }));

        let block = Block::default()
            .title(format!(" {} ", service.title))
            .borders(Borders::ALL)
            .border_style(card_border(idx == selected));
        frame.render_widget(
            Paragraph::new(lines)
                .style(style)
                .wrap(Wrap { trim: true })
                .block(block),
            columns[idx],
        );
    }
}

fn draw_work(frame: &mut Frame, area: Rect, style: Style, selected: usize) {
    let (heading_area, body) = split_heading(area, &WORKS_HEADING);
    frame.render_widget(
        Paragraph::new(heading_lines(&WORKS_HEADING))
            .style(style)
            .wrap(Wrap { trim: true }),
        heading_area,
    );

    let constraints: Vec<Constraint> = WORKS.iter().map(|_| Constraint::Length(5)).collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(body);

    for (idx, work) in WORKS.iter().enumerate() {
        let lines = vec![
            Line::from(work.description),
            Line::from(Span::styled(
                work.technologies.join(" · "),
                Style::default().fg(Color::Cyan),
            )),
            Line::from(Span::styled(
                work.live_url,
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            )),
        ];
        let block = Block::default()
            .title(format!(" {} ", work.name))
            .borders(Borders::ALL)
            .border_style(card_border(idx == selected));
        frame.render_widget(Paragraph::new(lines).style(style).block(block), rows[idx]);
    }
}

fn draw_testimonials(frame: &mut Frame, area: Rect, style: Style, selected: usize) {
    let (heading_area, body) = split_heading(area, &TESTIMONIALS_HEADING);
    frame.render_widget(
        Paragraph::new(heading_lines(&TESTIMONIALS_HEADING))
            .style(style)
            .wrap(Wrap { trim: true }),
        heading_area,
    );

    let Some(testimonial) = TESTIMONIALS.get(selected) else {
        return;
    };

    let stars = "★".repeat(testimonial.rating as usize);
    let dots: String = (0..TESTIMONIALS.len())
        .map(|i| if i == selected { "● " } else { "○ " })
        .collect();

    let lines = vec![
        Line::from(Span::styled(stars, Style::default().fg(Color::Yellow))),
        Line::from(""),
        Line::from(format!("\"{}\"", testimonial.review)),
        Line::from(""),
        Line::from(Span::styled(
            testimonial.name,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            testimonial.role,
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(dots, Style::default().fg(Color::Magenta))),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(card_border(true));
    frame.render_widget(
        Paragraph::new(lines)
            .style(style)
            .wrap(Wrap { trim: true })
            .block(block),
        body,
    );
}
