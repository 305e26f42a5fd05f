//! UI module for rendering the TUI

mod components;
mod contact;
mod forms;
mod layout;
mod sections;
mod splash;

pub use components::BUTTON_HEIGHT;
pub use layout::SIDEBAR_WIDTH;

use crate::app::App;
use crate::state::Section;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if let Some(splash_state) = &app.splash_state {
        splash::draw(frame, area, splash_state);
        return;
    }

    let (sidebar_area, main_area) = layout::create_layout(area);
    layout::draw_sidebar(frame, sidebar_area, app);

    match app.state.current_section {
        Section::Contact => contact::draw(frame, main_area, app),
        _ => sections::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{MockContactClientTrait, SubmitError};
    use crate::state::ContactField;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn render(app: &App) -> String {
        let backend = TestBackend::new(120, 48);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app() -> App {
        App::with_client(Arc::new(MockContactClientTrait::new()), false)
    }

    #[test]
    fn test_splash_renders_skip_hint() {
        let app = App::with_client(Arc::new(MockContactClientTrait::new()), true);
        assert!(render(&app).contains("Press any key to skip"));
    }

    #[test]
    fn test_sidebar_lists_every_section() {
        let screen = render(&app());
        for section in Section::ALL {
            assert!(
                screen.contains(section.label()),
                "missing {}",
                section.label()
            );
        }
    }

    #[test]
    fn test_every_section_renders() {
        let mut app = app();
        for section in Section::ALL {
            app.state.go_to_section(section);
            render(&app);
        }
    }

    #[test]
    fn test_contact_form_shows_field_errors() {
        let mut app = app();
        app.state.enter_contact_form();
        app.contact.on_field_change(ContactField::Name, "Ada");
        app.contact.on_submit();

        let screen = render(&app);
        assert!(screen.contains("Ada"));
        assert!(screen.contains("Email is required"));
        assert!(screen.contains("Send Message"));
    }

    #[tokio::test]
    async fn test_button_reads_sending_while_submitting() {
        let mut mock = MockContactClientTrait::new();
        mock.expect_submit().returning(|_| Err(SubmitError::Timeout));
        let mut app = App::with_client(Arc::new(mock), false);
        app.state.enter_contact_form();
        app.contact.on_field_change(ContactField::Name, "Ada Lovelace");
        app.contact.on_field_change(ContactField::Email, "ada@example.com");
        app.contact.on_field_change(ContactField::Subject, "Website");
        app.contact.on_field_change(ContactField::Message, "Please build one.");
        app.contact.on_submit();
        assert!(render(&app).contains("Sending..."));

        app.contact.wait_for_outcome().await;
        let screen = render(&app);
        assert!(screen.contains("Request timed out."));
        assert!(screen.contains("Send Message"));
    }

    #[tokio::test]
    async fn test_sent_panel_replaces_form() {
        let mut mock = MockContactClientTrait::new();
        mock.expect_submit().returning(|_| Ok("We'll be in touch".to_string()));
        let mut app = App::with_client(Arc::new(mock), false);
        app.state.enter_contact_form();
        app.contact.on_field_change(ContactField::Name, "Ada Lovelace");
        app.contact.on_field_change(ContactField::Email, "ada@example.com");
        app.contact.on_field_change(ContactField::Subject, "Website");
        app.contact.on_field_change(ContactField::Message, "Please build one.");
        app.contact.on_submit();
        app.contact.wait_for_outcome().await;

        let screen = render(&app);
        assert!(screen.contains("Message Sent!"));
        assert!(screen.contains("We'll be in touch"));
        assert!(screen.contains("Send Another Message"));
        assert!(!screen.contains("Send us a message"));
    }

    #[test]
    fn test_footer_has_copyright() {
        let mut app = app();
        app.state.go_to_section(Section::Contact);
        assert!(render(&app).contains("Apexweb Agency. All rights reserved."));
    }
}
