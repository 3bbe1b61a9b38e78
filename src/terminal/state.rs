use log::warn;
use ratatui::widgets::ListState;

use crate::domain::email::Email;
use crate::summary::local_summary;
use crate::webhook::MailWebhook;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Pane,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// The single active status line; overwritten on every new action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub severity: Severity,
}

/// Projection of what the right-hand pane shows. `show_summary` and
/// `opened` are independent flags in the model; this is the only place
/// that arbitrates between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane<'a> {
    Summary(&'a str),
    Detail(&'a Email),
    Empty,
}

pub const MSG_FETCH_FAILED: &str = "Failed to fetch unread emails.";
pub const MSG_SUMMARIZING: &str = "Summarizing unread emails...";
pub const MSG_SUMMARY_DONE: &str = "Summary complete.";
pub const MSG_SUMMARY_FALLBACK: &str =
    "Remote summarizer unavailable; showing local digest.";
pub const MSG_SUMMARY_FAILED: &str = "Failed to summarize: no unread emails loaded.";

pub struct BoardState {
    pub emails: Vec<Email>,
    pub summary: Option<String>,

    pub loading_emails: bool,
    pub loading_summary: bool,
    pub status: Option<StatusLine>,

    pub list_state: ListState,
    /// The email opened in the right panel (index into `emails`).
    pub opened: Option<usize>,
    pub show_summary: bool,

    pub focus: Focus,
    pub pane_scroll: u16,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            emails: vec![],
            summary: None,
            loading_emails: false,
            loading_summary: false,
            status: None,
            list_state: ListState::default(),
            opened: None,
            show_summary: false,
            focus: Focus::List,
            pane_scroll: 0,
        }
    }

    fn set_status(&mut self, text: &str, severity: Severity) {
        self.status = Some(StatusLine {
            text: text.to_string(),
            severity,
        });
    }

    // ----- Remote operations -----

    /// First half of the load operation: flip the loading flag and clear
    /// per-load state, so a frame can show the in-progress state before
    /// the blocking fetch. `load_unread` calls this itself; calling it
    /// twice is harmless.
    pub fn begin_load(&mut self) {
        self.loading_emails = true;
        self.status = None;
        self.summary = None;
    }

    /// Fetch the unread batch and replace the email list wholesale. On
    /// failure the list is emptied; no partial list survives from a prior
    /// successful load.
    pub fn load_unread(&mut self, webhook: &dyn MailWebhook) {
        self.begin_load();

        match webhook.fetch_unread() {
            Ok(batch) => {
                self.emails = batch.into_iter().map(Email::from_raw).collect();
            }
            Err(e) => {
                warn!("fetch unread failed: {e:#}");
                self.emails.clear();
                self.set_status(MSG_FETCH_FAILED, Severity::Error);
            }
        }

        // Wholesale replacement: a stale cursor or opened index must not
        // survive into the new list.
        self.opened = None;
        self.pane_scroll = 0;
        if self.emails.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }

        self.loading_emails = false;
    }

    /// First half of the summarize operation, same deal as `begin_load`.
    pub fn begin_summarize(&mut self) {
        self.loading_summary = true;
        self.summary = None;
        self.set_status(MSG_SUMMARIZING, Severity::Success);
    }

    /// Ask the remote summarizer for a digest. When it fails and emails
    /// are loaded, degrade to the local digest; with nothing to summarize
    /// locally, fail hard. Either way the board stays interactive.
    pub fn summarize_unread(&mut self, webhook: &dyn MailWebhook) {
        self.begin_summarize();

        match webhook.summarize_unread() {
            Ok(text) => {
                self.summary = Some(text);
                self.show_summary = true;
                self.pane_scroll = 0;
                self.set_status(MSG_SUMMARY_DONE, Severity::Success);
            }
            Err(e) => {
                warn!("remote summarize failed: {e:#}");
                if self.emails.is_empty() {
                    self.set_status(MSG_SUMMARY_FAILED, Severity::Error);
                } else {
                    self.summary = Some(local_summary(&self.emails));
                    self.show_summary = true;
                    self.pane_scroll = 0;
                    self.set_status(MSG_SUMMARY_FALLBACK, Severity::Error);
                }
            }
        }

        self.loading_summary = false;
    }

    // ----- Selection / view state (no I/O) -----

    pub fn move_selection(&mut self, delta: i32) {
        if self.emails.is_empty() {
            self.list_state.select(None);
            return;
        }
        let cur = self.list_state.selected().unwrap_or(0) as i32;
        let len = self.emails.len() as i32;
        let next = (cur + delta).clamp(0, len - 1) as usize;
        self.list_state.select(Some(next));
        // Moving the cursor never opens anything (only Enter does).
    }

    /// Open the email under the cursor. Forces the detail view even when
    /// the summary view was showing; the summary text itself is kept.
    pub fn open_selected(&mut self) {
        let Some(idx) = self.list_state.selected() else {
            return;
        };
        if idx >= self.emails.len() {
            return;
        }
        self.opened = Some(idx);
        self.show_summary = false;
        self.pane_scroll = 0;
        self.focus = Focus::Pane;
    }

    /// Show the summary view. Independent of the opened email, which is
    /// left alone for later redisplay.
    pub fn open_summary(&mut self) {
        self.show_summary = true;
        self.pane_scroll = 0;
        self.focus = Focus::Pane;
    }

    /// Close whichever right-pane view is showing. The other pane's state
    /// survives: closing the summary keeps the opened email, closing the
    /// detail keeps the summary flag.
    pub fn close_pane(&mut self) {
        if self.pane() == Pane::Empty {
            return;
        }
        if self.show_summary {
            self.show_summary = false;
        } else {
            self.opened = None;
        }
        self.focus = Focus::List;
        self.pane_scroll = 0;
    }

    pub fn opened_email(&self) -> Option<&Email> {
        self.opened.and_then(|idx| self.emails.get(idx))
    }

    /// Rendering rule: summary view if requested and available, else the
    /// opened email's detail.
    pub fn pane(&self) -> Pane<'_> {
        if self.show_summary
            && let Some(text) = self.summary.as_deref()
        {
            return Pane::Summary(text);
        }
        match self.opened_email() {
            Some(email) => Pane::Detail(email),
            None => Pane::Empty,
        }
    }

    pub fn toggle_focus(&mut self) {
        if self.pane() == Pane::Empty {
            self.focus = Focus::List;
            return;
        }
        self.focus = match self.focus {
            Focus::List => Focus::Pane,
            Focus::Pane => Focus::List,
        };
    }

    pub fn scroll_pane(&mut self, delta: i32) {
        if self.pane() == Pane::Empty {
            return;
        }
        if delta < 0 {
            self.pane_scroll = self.pane_scroll.saturating_sub((-delta) as u16);
        } else {
            self.pane_scroll = self.pane_scroll.saturating_add(delta as u16);
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
