use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use crate::extractor;
use crate::output;
use crate::summarizer::{self, Precision, SummaryOutcome, DEFAULT_MODEL};

/// Interactive session state: the selected PDF, the chosen precision and
/// model label, and the path of the last summary written. Owned by the shell
/// and passed explicitly to handlers; there is no module-level state.
#[derive(Debug, Clone)]
pub struct Session {
    pub pdf_path: Option<PathBuf>,
    pub precision: Precision,
    pub model: String,
    pub output_path: Option<PathBuf>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a summarize run that did not fail outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Summary produced, displayed text and saved file path.
    Saved { summary: String, path: PathBuf },
    /// The PDF parsed but contained no sentence-like text; nothing written.
    NoReadableText,
}

impl Session {
    pub fn new() -> Self {
        Self {
            pdf_path: None,
            precision: Precision::default(),
            model: DEFAULT_MODEL.to_string(),
            output_path: None,
        }
    }

    /// Normalize a model label against the fixed chooser list, falling back
    /// to the default label for anything unrecognized.
    pub fn set_model(&mut self, label: &str) {
        self.model = summarizer::MODEL_CHOICES
            .iter()
            .find(|choice| **choice == label)
            .unwrap_or(&DEFAULT_MODEL)
            .to_string();
    }

    /// Run the whole pipeline synchronously: extract text from the selected
    /// PDF, summarize it, and persist the summary beside the source file.
    ///
    /// Extraction and write failures propagate as `Err` for the shell to
    /// report; an empty or sentence-free document returns
    /// `RunOutcome::NoReadableText` and writes nothing.
    pub fn run(&mut self) -> Result<RunOutcome> {
        let pdf_path = self
            .pdf_path
            .clone()
            .context("No PDF file selected")?;

        info!(
            pdf = %pdf_path.display(),
            precision = self.precision.label(),
            model = %self.model,
            "Starting summarize run"
        );

        let text = extractor::extract_text(&pdf_path)?;
        if text.is_empty() {
            return Ok(RunOutcome::NoReadableText);
        }

        match summarizer::summarize(&text, self.precision, &self.model) {
            SummaryOutcome::Summary(summary) => {
                let path = output::write_summary(&pdf_path, &summary)?;
                self.output_path = Some(path.clone());
                Ok(RunOutcome::Saved { summary, path })
            }
            SummaryOutcome::NoReadableText => Ok(RunOutcome::NoReadableText),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let session = Session::new();
        assert!(session.pdf_path.is_none());
        assert_eq!(session.precision, Precision::Medium);
        assert_eq!(session.model, DEFAULT_MODEL);
        assert!(session.output_path.is_none());
    }

    #[test]
    fn test_set_model_accepts_known_labels() {
        let mut session = Session::new();
        session.set_model("Gemma 7B Instruct");
        assert_eq!(session.model, "Gemma 7B Instruct");
    }

    #[test]
    fn test_set_model_normalizes_unknown_labels() {
        let mut session = Session::new();
        session.set_model("GPT-99 Ultra");
        assert_eq!(session.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_run_without_path_is_an_error() {
        let mut session = Session::new();
        let result = session.run();
        assert!(result.is_err());
    }

    #[test]
    fn test_run_with_missing_file_is_an_error() {
        let mut session = Session::new();
        session.pdf_path = Some(PathBuf::from("/nonexistent/file.pdf"));
        assert!(session.run().is_err());
        assert!(session.output_path.is_none(), "No file should be recorded");
    }
}
