use tracing::debug;

/// Message shown when a document yields no sentence-like text.
pub const NO_READABLE_TEXT: &str = "No readable text found in the PDF.";

/// Model labels offered by the shell. Display-only: the label never affects
/// which sentences are selected.
pub const MODEL_CHOICES: &[&str] = &[
    "Meta-Llama 38B Instruct",
    "Mistral 7B Instruct",
    "Gemma 7B Instruct",
];

/// Default model label for new sessions.
pub const DEFAULT_MODEL: &str = MODEL_CHOICES[0];

/// How much of the document survives summarization.
///
/// Each level maps to a fixed fraction of the sentence count. Unrecognized
/// input normalizes silently to `Medium`; that lookup-with-default behavior
/// is load-bearing and must not become an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    Low,
    #[default]
    Medium,
    High,
}

impl Precision {
    /// All levels, in the order the shell renders them.
    pub const ALL: [Precision; 3] = [Precision::Low, Precision::Medium, Precision::High];

    /// Fraction of total sentences retained at this level.
    pub fn fraction(self) -> f64 {
        match self {
            Precision::Low => 0.05,
            Precision::Medium => 0.15,
            Precision::High => 0.30,
        }
    }

    /// Title-cased single-token label used in the summary header.
    pub fn label(self) -> &'static str {
        match self {
            Precision::Low => "Low",
            Precision::Medium => "Medium",
            Precision::High => "High",
        }
    }

    /// Parse a level name, falling back to `Medium` for anything unrecognized.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Precision::Low,
            "high" => Precision::High,
            _ => Precision::Medium,
        }
    }

    /// Next level in display order, wrapping around.
    pub fn cycle(self) -> Self {
        match self {
            Precision::Low => Precision::Medium,
            Precision::Medium => Precision::High,
            Precision::High => Precision::Low,
        }
    }
}

/// Result of summarization: either a formatted summary or the explicit
/// no-text case, so callers branch on the variant instead of comparing
/// against a sentinel string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    Summary(String),
    NoReadableText,
}

impl SummaryOutcome {
    /// Text to put in front of the user for either variant.
    pub fn display_text(&self) -> &str {
        match self {
            SummaryOutcome::Summary(text) => text,
            SummaryOutcome::NoReadableText => NO_READABLE_TEXT,
        }
    }
}

/// Split text into trimmed sentence fragments.
///
/// A boundary is any `.`, `!`, or `?` immediately followed by one or more
/// whitespace characters; the whitespace run is consumed. The rule is a
/// heuristic: it mis-splits abbreviations, decimal numbers, and ellipses,
/// and that is accepted behavior — downstream output depends on this exact
/// boundary, so it must not be made grammar-aware.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, ch)) = chars.next() {
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }
        match chars.peek() {
            Some(&(after, next)) if next.is_whitespace() => {
                let fragment = text[start..after].trim();
                if !fragment.is_empty() {
                    sentences.push(fragment);
                }
                // Consume the whitespace run; the next sentence starts after it
                while matches!(chars.peek(), Some(&(_, c)) if c.is_whitespace()) {
                    chars.next();
                }
                start = chars.peek().map_or(text.len(), |&(idx, _)| idx);
            }
            _ => {}
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}

/// Produce an extractive summary by spread-out sampling.
///
/// Deterministically selects evenly spaced sentences from the document:
/// `count = min(total, max(2, floor(total * fraction)))`, stride
/// `max(1, total / count)`, walking indices `0, step, 2*step, ...` and
/// truncating to `count`. Selected sentences keep their document order and
/// are joined by single spaces under a header naming the model label and
/// precision. Pure function of its inputs.
pub fn summarize(text: &str, precision: Precision, model: &str) -> SummaryOutcome {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return SummaryOutcome::NoReadableText;
    }

    let total = sentences.len();
    let count = ((total as f64 * precision.fraction()) as usize)
        .max(2)
        .min(total);
    let step = (total / count).max(1);

    let selected: Vec<&str> = (0..total)
        .step_by(step)
        .map(|i| sentences[i])
        .take(count)
        .collect();

    debug!(
        total,
        count,
        step,
        precision = precision.label(),
        "Selected sentences for summary"
    );

    let body = selected.join(" ");
    SummaryOutcome::Summary(format!(
        "Summary using {model} ({} Precision):\n\n{body}",
        precision.label()
    ))
}
