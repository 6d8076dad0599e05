//! View-model state for the interactive sections. Everything here is pure
//! and target-independent so it can be unit tested off the wasm target; the
//! components in `frontend/` own instances of these types and feed them DOM
//! events.

use crate::content::{Category, Project, PROJECTS};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send the message. Please try again.";

/// Filter plus modal selection for the Projects section. The selection is
/// always a member of [`PROJECTS`] by construction since `open` only ever
/// receives borrows of that list.
#[derive(Clone, PartialEq)]
pub struct ProjectsState {
    filter: Category,
    selected: Option<&'static Project>,
}

impl Default for ProjectsState {
    fn default() -> Self {
        Self {
            filter: Category::All,
            selected: None,
        }
    }
}

impl ProjectsState {
    pub fn filter(&self) -> Category {
        self.filter
    }

    pub fn selected(&self) -> Option<&'static Project> {
        self.selected
    }

    /// Filters are keyed by tag; unknown tags degrade to `All` rather than
    /// emptying the grid.
    pub fn set_filter_tag(&mut self, tag: &str) {
        self.filter = Category::from_tag(tag);
    }

    /// Stable filter over the author-ordered project list.
    pub fn visible(&self) -> Vec<&'static Project> {
        PROJECTS
            .iter()
            .filter(|project| self.filter == Category::All || project.category == self.filter)
            .collect()
    }

    /// Opening with a selection already present replaces it; overlays never
    /// stack.
    pub fn open(&mut self, project: &'static Project) {
        self.selected = Some(project);
    }

    /// Idempotent.
    pub fn close(&mut self) {
        self.selected = None;
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ValidationError {
    MissingName,
    MissingEmail,
    InvalidEmail,
    MissingSubject,
    MissingMessage,
}

impl ValidationError {
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingName => "Name is required.",
            Self::MissingEmail => "Email is required.",
            Self::InvalidEmail => "Email address is invalid.",
            Self::MissingSubject => "Subject is required.",
            Self::MissingMessage => "Message is required.",
        }
    }
}

/// Basic `local@domain.tld` shape: exactly one `@`, a non-empty local part,
/// and a dotted domain whose labels are all non-empty.
pub fn email_shape_is_valid(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }

    let mut labels = domain.split('.');
    let Some(first) = labels.next() else {
        return false;
    };
    let mut rest = labels.peekable();

    if rest.peek().is_none() {
        // "foo@bar" has no TLD.
        return false;
    }

    std::iter::once(first)
        .chain(rest)
        .all(|label| !label.is_empty() && !label.chars().any(char::is_whitespace))
}

#[derive(Clone, Default, PartialEq, Debug)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// First applicable error in field order; never aggregates. All fields
    /// are trimmed before checks.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if !email_shape_is_valid(email) {
            return Err(ValidationError::InvalidEmail);
        }

        if self.subject.trim().is_empty() {
            return Err(ValidationError::MissingSubject);
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::MissingMessage);
        }

        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum SubmissionStatus {
    Idle,
    Pending,
    Success,
    Error(String),
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        Self::Idle
    }
}

impl SubmissionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn banner(&self) -> Option<(&'static str, &str)> {
        match self {
            Self::Idle | Self::Pending => None,
            Self::Success => Some(("success", SUCCESS_MESSAGE)),
            Self::Error(message) => Some(("error", message)),
        }
    }
}

/// Contact section view-model: the controlled fields plus the submit
/// lifecycle status.
#[derive(Clone, Default, PartialEq)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: SubmissionStatus,
}

impl ContactState {
    /// Starts a submit attempt. Any previous banner is dropped first; a
    /// validation failure surfaces as an error status and the attempt stops
    /// there. Returns whether delivery should be scheduled.
    pub fn begin_submit(&mut self) -> bool {
        self.status = SubmissionStatus::Idle;

        match self.form.validate() {
            Ok(()) => {
                self.status = SubmissionStatus::Pending;
                true
            }
            Err(error) => {
                self.status = SubmissionStatus::Error(error.message().to_string());
                false
            }
        }
    }

    /// Applies the delivery outcome. Success clears every field; failure
    /// keeps the user's input in place for correction.
    pub fn finish_submit(&mut self, outcome: Result<(), String>) {
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.form.clear();
            }
            Err(message) => {
                self.status = SubmissionStatus::Error(message);
            }
        }
    }
}

/// Measured layout of one page section, in document coordinates.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SectionBounds {
    pub id: &'static str,
    pub top: f64,
    pub height: f64,
}

pub fn past_threshold(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Scroll-spy: the first section (top-to-bottom) whose bounding box contains
/// the lookahead-adjusted offset wins. `None` means the caller should keep
/// its previous answer.
pub fn active_section(
    scroll_y: f64,
    lookahead: f64,
    sections: &[SectionBounds],
) -> Option<&'static str> {
    let probe = scroll_y + lookahead;

    sections
        .iter()
        .find(|section| probe >= section.top && probe < section.top + section.height)
        .map(|section| section.id)
}

/// Char-boundary-safe prefix for the hero typing effect.
pub fn revealed_prefix(full: &str, chars: usize) -> &str {
    match full.char_indices().nth(chars) {
        Some((byte_offset, _)) => &full[..byte_offset],
        None => full,
    }
}

pub fn reveal_finished(full: &str, chars: usize) -> bool {
    chars >= full.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::HERO_NAME;

    #[test]
    fn every_category_filter_returns_only_matching_projects_in_order() {
        for filter in Category::FILTERS {
            if filter == Category::All {
                continue;
            }

            let mut state = ProjectsState::default();
            state.set_filter_tag(filter.as_str());
            let visible = state.visible();

            assert!(
                visible.iter().all(|project| project.category == filter),
                "filter {filter:?} leaked a foreign category"
            );

            let expected: Vec<&Project> = PROJECTS
                .iter()
                .filter(|project| project.category == filter)
                .collect();
            let visible_ids: Vec<&str> = visible.iter().map(|project| project.id).collect();
            let expected_ids: Vec<&str> = expected.iter().map(|project| project.id).collect();
            assert_eq!(visible_ids, expected_ids, "relative order must be preserved");
        }
    }

    #[test]
    fn all_filter_returns_full_list_in_author_order() {
        let state = ProjectsState::default();
        let visible = state.visible();

        assert_eq!(visible.len(), PROJECTS.len());
        for (shown, original) in visible.iter().zip(PROJECTS.iter()) {
            assert_eq!(shown.id, original.id);
        }
    }

    #[test]
    fn unknown_filter_tag_defaults_to_all() {
        let mut state = ProjectsState::default();
        state.set_filter_tag("fullstack");

        assert_eq!(state.filter(), Category::All);
        assert_eq!(state.visible().len(), PROJECTS.len());
    }

    #[test]
    fn opening_a_project_replaces_existing_selection() {
        let mut state = ProjectsState::default();
        state.open(&PROJECTS[0]);
        assert_eq!(state.selected().map(|p| p.id), Some(PROJECTS[0].id));

        state.open(&PROJECTS[2]);
        assert_eq!(
            state.selected().map(|p| p.id),
            Some(PROJECTS[2].id),
            "re-opening must replace, not stack"
        );
    }

    #[test]
    fn closing_clears_selection_and_is_idempotent() {
        let mut state = ProjectsState::default();
        state.open(&PROJECTS[1]);
        state.close();
        assert!(state.selected().is_none());

        state.close();
        assert!(state.selected().is_none());
    }

    #[test]
    fn react_filter_then_card_click_shows_that_project_detail() {
        let mut state = ProjectsState::default();
        state.set_filter_tag("react");

        let visible = state.visible();
        let card = visible[0];
        assert_eq!(card.category, Category::React);

        state.open(card);
        let detail = state.selected().expect("modal should be open");
        assert_eq!(detail.full_description, card.full_description);
        assert_eq!(detail.technologies, card.technologies);
    }

    #[test]
    fn validation_reports_first_error_in_field_order() {
        let mut form = ContactForm::default();
        assert_eq!(form.validate(), Err(ValidationError::MissingName));

        form.name = "Ana".to_string();
        assert_eq!(form.validate(), Err(ValidationError::MissingEmail));

        form.email = "foo@bar".to_string();
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));

        form.email = "ana@example.com".to_string();
        assert_eq!(form.validate(), Err(ValidationError::MissingSubject));

        form.subject = "Hello".to_string();
        assert_eq!(form.validate(), Err(ValidationError::MissingMessage));

        form.message = "Hi there".to_string();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn whitespace_only_fields_fail_validation() {
        let form = ContactForm {
            name: "   ".to_string(),
            email: "ana@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Hi".to_string(),
        };

        assert_eq!(form.validate(), Err(ValidationError::MissingName));
    }

    #[test]
    fn email_shape_rejects_missing_at_and_missing_tld() {
        assert!(!email_shape_is_valid("foo.bar"));
        assert!(!email_shape_is_valid("foo@bar"));
        assert!(!email_shape_is_valid("@example.com"));
        assert!(!email_shape_is_valid("foo@bar."));
        assert!(!email_shape_is_valid("foo@@bar.com"));
        assert!(!email_shape_is_valid("foo bar@example.com"));

        assert!(email_shape_is_valid("foo@bar.com"));
        assert!(email_shape_is_valid("first.last@sub.example.co"));
    }

    #[test]
    fn invalid_submit_sets_error_and_keeps_fields() {
        let mut state = ContactState::default();
        state.form.name = "Ana".to_string();
        state.form.email = "not-an-email".to_string();

        let scheduled = state.begin_submit();

        assert!(!scheduled);
        assert_eq!(
            state.status,
            SubmissionStatus::Error(ValidationError::InvalidEmail.message().to_string())
        );
        assert_eq!(state.form.name, "Ana");
        assert_eq!(state.form.email, "not-an-email");
    }

    #[test]
    fn valid_submit_goes_pending_then_success_clears_form() {
        let mut state = ContactState::default();
        state.form = ContactForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Hi there".to_string(),
        };

        assert!(state.begin_submit());
        assert!(state.status.is_pending());

        state.finish_submit(Ok(()));
        assert_eq!(state.status, SubmissionStatus::Success);
        assert_eq!(state.form, ContactForm::default());
    }

    #[test]
    fn failed_delivery_keeps_input_for_correction() {
        let mut state = ContactState::default();
        state.form = ContactForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Hi there".to_string(),
        };

        assert!(state.begin_submit());
        state.finish_submit(Err(DELIVERY_FAILED_MESSAGE.to_string()));

        assert_eq!(
            state.status,
            SubmissionStatus::Error(DELIVERY_FAILED_MESSAGE.to_string())
        );
        assert_eq!(state.form.name, "Ana");
    }

    #[test]
    fn begin_submit_drops_previous_banner() {
        let mut state = ContactState::default();
        state.status = SubmissionStatus::Success;

        state.begin_submit();

        assert_ne!(state.status, SubmissionStatus::Success);
    }

    #[test]
    fn banner_surfaces_only_terminal_statuses() {
        assert_eq!(SubmissionStatus::Idle.banner(), None);
        assert_eq!(SubmissionStatus::Pending.banner(), None);
        assert_eq!(
            SubmissionStatus::Success.banner(),
            Some(("success", SUCCESS_MESSAGE))
        );

        let failed = SubmissionStatus::Error(DELIVERY_FAILED_MESSAGE.to_string());
        assert_eq!(failed.banner(), Some(("error", DELIVERY_FAILED_MESSAGE)));
    }

    fn page_sections() -> [SectionBounds; 4] {
        [
            SectionBounds { id: "home", top: 0.0, height: 800.0 },
            SectionBounds { id: "about", top: 800.0, height: 700.0 },
            SectionBounds { id: "projects", top: 1500.0, height: 900.0 },
            SectionBounds { id: "contact", top: 2400.0, height: 600.0 },
        ]
    }

    #[test]
    fn scroll_within_projects_bounds_activates_projects() {
        let sections = page_sections();

        // 1500..2400 contains the probe (scroll + 100 lookahead).
        assert_eq!(active_section(1450.0, 100.0, &sections), Some("projects"));
        assert_eq!(active_section(2250.0, 100.0, &sections), Some("projects"));
    }

    #[test]
    fn first_matching_section_wins_top_to_bottom() {
        let mut sections = page_sections();
        // Force an overlap between about and projects.
        sections[2].top = 1400.0;

        assert_eq!(active_section(1350.0, 100.0, &sections), Some("about"));
    }

    #[test]
    fn out_of_range_scroll_yields_none_so_previous_answer_sticks() {
        let sections = page_sections();

        assert_eq!(active_section(5000.0, 100.0, &sections), None);
    }

    #[test]
    fn threshold_comparison_is_strict() {
        assert!(!past_threshold(50.0, 50.0));
        assert!(past_threshold(50.5, 50.0));
    }

    #[test]
    fn typing_reveal_respects_char_boundaries() {
        // "Luís" has a multi-byte char at index 2.
        assert_eq!(revealed_prefix(HERO_NAME, 0), "");
        assert_eq!(revealed_prefix(HERO_NAME, 3), "Luí");
        assert_eq!(revealed_prefix(HERO_NAME, 1000), HERO_NAME);
    }

    #[test]
    fn typing_reveal_finishes_at_char_count() {
        let total = HERO_NAME.chars().count();

        assert!(!reveal_finished(HERO_NAME, total - 1));
        assert!(reveal_finished(HERO_NAME, total));
    }
}
