pub mod extractor;
pub mod output;
pub mod session;
pub mod summarizer;
pub mod tui;

// Re-export main types for convenient access
pub use session::{RunOutcome, Session};
pub use summarizer::{
    split_sentences, summarize, Precision, SummaryOutcome, DEFAULT_MODEL, MODEL_CHOICES,
    NO_READABLE_TEXT,
};

// Re-export output helpers used by integration tests and external callers
pub use output::{summary_file_path, write_summary};
