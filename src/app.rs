//! Application state and core logic

use crate::config::TuiConfig;
use crate::contact::{
    ContactClient, ContactClientTrait, ContactPipeline, PipelineState, SubmitAttempt,
};
use crate::platform::is_send_modifier;
use crate::state::content::{contact_link, WORKS};
use crate::state::{AppState, ContactField, Section, SplashState, View};
use crate::ui::{BUTTON_HEIGHT, SIDEBAR_WIDTH};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Contact form controller
    pub contact: ContactPipeline,
    /// Whether the app should quit
    quit: bool,
    /// Status bar feedback message
    pub status_message: Option<String>,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
}

impl App {
    /// Create a new App talking to the configured contact endpoint
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let client = ContactClient::from_config(config)?;
        tracing::info!(
            "Contact endpoint {} (timeout {}s)",
            client.endpoint(),
            client.timeout().as_secs()
        );
        Ok(Self::with_client(Arc::new(client), config.splash_enabled()))
    }

    /// Create an App around any contact client
    pub fn with_client(client: Arc<dyn ContactClientTrait>, show_splash: bool) -> Self {
        let mut state = AppState::default();
        let splash_state = if show_splash {
            state.current_view = View::Splash;
            Some(SplashState::new())
        } else {
            state.go_to_section(Section::Home);
            None
        };

        Self {
            state,
            contact: ContactPipeline::new(client),
            quit: false,
            status_message: None,
            splash_state,
        }
    }

    /// Update splash animation state
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.finish_splash();
                return true;
            }
        }
        false
    }

    fn finish_splash(&mut self) {
        self.splash_state = None;
        self.state.current_view = View::Site;
        self.state.go_to_section(self.state.current_section);
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Whether the next frame should come quickly
    pub fn is_animating(&self) -> bool {
        self.in_splash() || self.state.reveal.is_animating() || self.contact.is_submitting()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply any submission outcomes that have arrived
    pub fn poll_submissions(&mut self) {
        if self.contact.poll_outcomes() {
            self.on_submission_settled();
        }
    }

    fn on_submission_settled(&mut self) {
        match self.contact.state() {
            PipelineState::Submitted(_) => {
                self.status_message = Some("Message sent".to_string());
            }
            PipelineState::Editing => {
                if let Some(field) = self.contact.errors().first_invalid() {
                    self.state.focus_form_field(field);
                }
            }
            PipelineState::EditingWithError(_) | PipelineState::Submitting => {}
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_view {
            View::Splash => self.handle_splash_key(key),
            View::Site if self.state.in_contact_form() => self.handle_form_key(key),
            View::Site => self.handle_navigation_key(key),
        }
    }

    /// Handle keys in Splash screen
    fn handle_splash_key(&mut self, _key: KeyEvent) -> Result<()> {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
        }
        self.finish_splash();
        Ok(())
    }

    fn handle_navigation_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.state.next_section(),
            KeyCode::Char('k') | KeyCode::Up => self.state.prev_section(),
            KeyCode::Char('l') | KeyCode::Right => self.state.move_selection_down(),
            KeyCode::Char('h') | KeyCode::Left => self.state.move_selection_up(),
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                if let Some(section) = Section::from_index(index) {
                    self.state.go_to_section(section);
                }
            }
            KeyCode::Char('g') => self.state.enter_contact_form(),
            KeyCode::Enter | KeyCode::Char('i') => match self.state.current_section {
                Section::Home | Section::Contact => self.state.enter_contact_form(),
                _ => {}
            },
            KeyCode::Char('y') => self.copy_selected_link()?,
            _ => {}
        }
        Ok(())
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Esc {
            self.state.leave_contact_form();
            return Ok(());
        }

        if self.contact.state().is_submitted() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char('r')) {
                self.contact.reset();
                self.state.focus_form_field(ContactField::Name);
            }
            return Ok(());
        }

        if key.code == KeyCode::Char('s') && is_send_modifier(key.modifiers) {
            self.submit_contact_form();
            return Ok(());
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            KeyCode::Enter => match self.state.active_contact_field() {
                None => self.submit_contact_form(),
                Some(field) if field.is_multiline() => self.push_char(field, '\n'),
                Some(_) => self.state.next_form_field(),
            },
            KeyCode::Backspace => {
                if let Some(field) = self.state.active_contact_field() {
                    let mut value = self.contact.snapshot().get(field).to_string();
                    value.pop();
                    self.contact.on_field_change(field, &value);
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = self.state.active_contact_field() {
                    self.push_char(field, c);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn push_char(&mut self, field: ContactField, c: char) {
        let mut value = self.contact.snapshot().get(field).to_string();
        value.push(c);
        self.contact.on_field_change(field, &value);
    }

    fn submit_contact_form(&mut self) {
        match self.contact.on_submit() {
            SubmitAttempt::Started(ticket) => {
                tracing::debug!("Submit {ticket} dispatched from form");
            }
            SubmitAttempt::Invalid { focus } => {
                self.state.focus_form_field(focus);
                self.status_message = Some("Please fix the highlighted fields".to_string());
            }
            SubmitAttempt::AlreadySubmitting => {}
        }
    }

    /// Link of the selected item in the current section, with its label
    pub fn selected_link(&self) -> Option<(&'static str, &'static str)> {
        let index = self.state.selected_index;
        match self.state.current_section {
            Section::Work => WORKS.get(index).map(|w| (w.name, w.live_url)),
            Section::Contact => {
                contact_link(index).and_then(|(label, href)| href.map(|href| (label, href)))
            }
            _ => None,
        }
    }

    fn copy_selected_link(&mut self) -> Result<()> {
        let Some((label, href)) = self.selected_link() else {
            return Ok(());
        };
        let href = href.strip_prefix("mailto:").unwrap_or(href);
        match self.copy_to_clipboard(href) {
            Ok(()) => self.status_message = Some(format!("Copied {label} link")),
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {e}");
                self.status_message = Some("Clipboard unavailable".to_string());
            }
        }
        Ok(())
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }

    /// Sidebar section under `mouse_row`, if any
    fn section_from_click(&self, mouse_row: u16) -> Option<Section> {
        Section::from_index((mouse_row / BUTTON_HEIGHT) as usize)
    }

    /// Handle mouse events
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.in_splash() {
            if matches!(mouse.kind, MouseEventKind::Down(_)) {
                self.handle_splash_key(KeyEvent::from(KeyCode::Enter))?;
            }
            return Ok(());
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if mouse.column < SIDEBAR_WIDTH => {
                if let Some(section) = self.section_from_click(mouse.row) {
                    self.status_message = None;
                    self.state.go_to_section(section);
                }
            }
            MouseEventKind::ScrollDown if !self.state.in_contact_form() => {
                self.state.next_section();
            }
            MouseEventKind::ScrollUp if !self.state.in_contact_form() => {
                self.state.prev_section();
            }
            _ => {}
        }
        Ok(())
    }
}
