//! Application state definitions

use super::content::{contact_link_count, SERVICES, TESTIMONIALS, WORKS};
use super::forms::ContactField;
use super::RevealTracker;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Splash screen with logo animation
    Splash,
    #[default]
    Site,
}

/// Page sections in scroll order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Services,
    Work,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Self::Home,
        Self::About,
        Self::Services,
        Self::Work,
        Self::Testimonials,
        Self::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Services => "Services",
            Self::Work => "Our Work",
            Self::Testimonials => "Testimonials",
            Self::Contact => "Contact",
        }
    }

    /// Anchor id the section is known by on the site
    pub fn id(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Services => "services",
            Self::Work => "previous-works",
            Self::Testimonials => "testimonials",
            Self::Contact => "contact",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(*self)
    }

    pub fn prev(&self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(*self)
    }

    /// Number of selectable items (cards, reviews or links)
    pub fn item_count(&self) -> usize {
        match self {
            Self::Home | Self::About => 0,
            Self::Services => SERVICES.len(),
            Self::Work => WORKS.len(),
            Self::Testimonials => TESTIMONIALS.len(),
            Self::Contact => contact_link_count(),
        }
    }
}

/// Where keystrokes go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Navigation,
    ContactForm,
}

/// Rows of the contact form: the four fields and the send button
pub const FORM_ROW_COUNT: usize = ContactField::ALL.len() + 1;
pub const SUBMIT_ROW: usize = ContactField::ALL.len();

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub current_section: Section,
    pub focus: Focus,

    // Selection inside the current section
    pub selected_index: usize,

    // Contact form row with the cursor
    pub active_form_field: usize,

    pub reveal: RevealTracker,
}

impl AppState {
    /// Make `section` current and start its reveal if it has never been shown
    pub fn go_to_section(&mut self, section: Section) {
        if self.current_section != section {
            tracing::debug!("Section {} -> {}", self.current_section.id(), section.id());
            self.current_section = section;
            self.selected_index = 0;
            self.focus = Focus::Navigation;
        }
        self.reveal.mark_in_view(section);
    }

    pub fn next_section(&mut self) {
        self.go_to_section(self.current_section.next());
    }

    pub fn prev_section(&mut self) {
        self.go_to_section(self.current_section.prev());
    }

    /// Move selection to the next item of the current section
    pub fn move_selection_down(&mut self) {
        let max = self.current_section.item_count();
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection to the previous item
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Jump to Contact with the cursor in the form
    pub fn enter_contact_form(&mut self) {
        self.go_to_section(Section::Contact);
        self.focus = Focus::ContactForm;
    }

    pub fn leave_contact_form(&mut self) {
        self.focus = Focus::Navigation;
    }

    pub fn in_contact_form(&self) -> bool {
        self.focus == Focus::ContactForm && self.current_section == Section::Contact
    }

    /// Move to next form row
    pub fn next_form_field(&mut self) {
        self.active_form_field = (self.active_form_field + 1) % FORM_ROW_COUNT;
    }

    /// Move to previous form row
    pub fn prev_form_field(&mut self) {
        if self.active_form_field == 0 {
            self.active_form_field = FORM_ROW_COUNT - 1;
        } else {
            self.active_form_field -= 1;
        }
    }

    pub fn focus_form_field(&mut self, field: ContactField) {
        self.active_form_field = field.index();
    }

    /// Field under the cursor, or None on the send button row
    pub fn active_contact_field(&self) -> Option<ContactField> {
        ContactField::from_index(self.active_form_field)
    }

    pub fn on_submit_row(&self) -> bool {
        self.active_form_field == SUBMIT_ROW
    }
}
