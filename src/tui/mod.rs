//! Application shell: a two-screen terminal interface over a [`Session`].
//!
//! Everything runs on the single interaction thread. The summarize action
//! blocks until the pipeline completes and then surfaces its result as a
//! modal notice; there is no cancellation and no background work.

pub mod input;
pub mod picker;
pub mod view;

use std::path::PathBuf;

use ratatui::Frame;
use tracing::warn;

use crate::session::{RunOutcome, Session};
use crate::summarizer::{Precision, MODEL_CHOICES};
use picker::FilePickerState;

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    FilePicker,
}

/// User intent, decoupled from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveDown,
    MoveUp,
    GoTop,
    GoBottom,
    /// Enter: open a directory / select a PDF / trigger summarize.
    Confirm,
    /// Esc: dismiss a notice or cancel the picker.
    NavigateBack,
    OpenPicker,
    Summarize,
    CyclePrecision,
    SetPrecision(Precision),
    CycleModel,
    Resize(u16, u16),
    None,
}

/// Severity of a modal notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A blocking modal message; input other than dismissal is ignored while
/// one is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

impl Notice {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Error".to_string(),
            text: text.into(),
        }
    }

    pub fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Top-level application state.
pub struct App {
    pub screen: Screen,
    pub session: Session,
    pub picker: FilePickerState,
    pub notice: Option<Notice>,
    /// Text shown in the summary output area, if a run has completed.
    pub summary: Option<String>,
    pub summary_scroll: u16,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: Session) -> Self {
        let start_dir = session
            .pdf_path
            .as_deref()
            .and_then(|p| p.parent())
            .map(|p| p.to_path_buf());
        let picker = match start_dir {
            Some(dir) => FilePickerState::at(dir),
            None => FilePickerState::new(),
        };
        Self {
            screen: Screen::Main,
            session,
            picker,
            notice: None,
            summary: None,
            summary_scroll: 0,
            should_quit: false,
        }
    }

    /// Apply one action to the application state.
    pub fn update(&mut self, action: Action) {
        if action == Action::Quit {
            self.should_quit = true;
            return;
        }

        // A notice is modal: only dismissal gets through
        if self.notice.is_some() {
            if matches!(action, Action::NavigateBack | Action::Confirm) {
                self.notice = None;
            }
            return;
        }

        match self.screen {
            Screen::Main => self.handle_main_action(action),
            Screen::FilePicker => self.handle_picker_action(action),
        }
    }

    fn handle_main_action(&mut self, action: Action) {
        match action {
            Action::OpenPicker => {
                self.picker.refresh_entries();
                self.screen = Screen::FilePicker;
            }
            Action::Confirm | Action::Summarize => self.run_summarize(),
            Action::CyclePrecision => {
                self.session.precision = self.session.precision.cycle();
            }
            Action::SetPrecision(precision) => {
                self.session.precision = precision;
            }
            Action::CycleModel => {
                let current = MODEL_CHOICES
                    .iter()
                    .position(|m| *m == self.session.model)
                    .unwrap_or(0);
                let next = MODEL_CHOICES[(current + 1) % MODEL_CHOICES.len()];
                self.session.model = next.to_string();
            }
            Action::MoveDown => {
                self.summary_scroll = self.summary_scroll.saturating_add(1);
            }
            Action::MoveUp => {
                self.summary_scroll = self.summary_scroll.saturating_sub(1);
            }
            Action::GoTop => {
                self.summary_scroll = 0;
            }
            _ => {}
        }
    }

    fn handle_picker_action(&mut self, action: Action) {
        match action {
            Action::MoveDown => self.picker.move_down(),
            Action::MoveUp => self.picker.move_up(),
            Action::GoTop => self.picker.go_top(),
            Action::GoBottom => self.picker.go_bottom(),
            Action::Confirm => {
                // Enter on a directory opens it; on a PDF selects it and
                // returns to the main screen
                if self.picker.enter_directory() {
                    return;
                }
                let selected = self
                    .picker
                    .current_entry()
                    .filter(|entry| entry.is_pdf)
                    .map(|entry| entry.path.clone());
                if let Some(path) = selected {
                    self.select_pdf(path);
                }
            }
            Action::NavigateBack => {
                self.screen = Screen::Main;
            }
            _ => {}
        }
    }

    fn select_pdf(&mut self, path: PathBuf) {
        self.session.pdf_path = Some(path);
        self.screen = Screen::Main;
    }

    /// Run the pipeline and surface the outcome as a modal notice.
    fn run_summarize(&mut self) {
        if self.session.pdf_path.is_none() {
            self.notice = Some(Notice::error("Please select a PDF file."));
            return;
        }

        match self.session.run() {
            Ok(RunOutcome::Saved { summary, path }) => {
                self.summary = Some(summary);
                self.summary_scroll = 0;
                self.notice = Some(Notice::info(
                    "Saved",
                    format!("Summary file saved to:\n{}", path.display()),
                ));
            }
            Ok(RunOutcome::NoReadableText) => {
                self.notice = Some(Notice::error("No text found in the PDF."));
            }
            Err(e) => {
                warn!("Summarize run failed: {e:#}");
                self.notice = Some(Notice::error(format!("{e:#}")));
            }
        }
    }

    /// Render the current screen.
    pub fn view(&self, f: &mut Frame) {
        view::render(f, self);
    }
}
