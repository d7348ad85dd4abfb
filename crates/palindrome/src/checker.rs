use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task;
use tracing::{debug, warn};
use unicode_general_category::{get_general_category, GeneralCategory};

/// Minimum number of characters (before normalization) a checkable input must carry.
pub const MIN_INPUT_CHARS: usize = 2;

/// Reasons a raw input is rejected before any palindrome work is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum InvalidInput {
    #[error("Введений рядок не може бути порожнім або складатися лише з пробілів.")]
    Empty,
    #[error("Рядок повинен містити щонайменше два символи.")]
    TooShort,
}

impl InvalidInput {
    /// Stable machine-readable reason, suitable for API payloads.
    pub const fn reason(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::TooShort => "tooShort",
        }
    }
}

/// Lowercased letters and digits of a raw input, in their original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NormalizedText(String);

impl NormalizedText {
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    /// Two-pointer scan: walks inwards from both ends and stops at the first mismatch
    /// or once the cursors meet.
    pub(crate) fn is_symmetric(&self) -> bool {
        let mut chars = self.0.chars();
        while let (Some(front), Some(back)) = (chars.next(), chars.next_back()) {
            if front != back {
                return false;
            }
        }
        true
    }
}

/// Letters of any kind (`L*`) and decimal digits (`Nd`). Other numerics such as `½`,
/// `²` or `Ⅻ` and combining marks are not kept.
fn is_letter_or_digit(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

/// Strips everything that is not a Unicode letter or decimal digit and lowercases the
/// rest.
///
/// Case mapping is applied per character, so it never depends on the surrounding word
/// (no final-sigma handling) and never on a locale. Filtering runs after lowercasing so
/// the output is already in normalized form.
pub(crate) fn normalize(text: &str) -> NormalizedText {
    let cleaned = text
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|&c| is_letter_or_digit(c))
        .collect();
    NormalizedText(cleaned)
}

/// Stateless palindrome checker shared by every front end.
#[derive(Debug, Clone, Copy, Default)]
pub struct PalindromeChecker;

impl PalindromeChecker {
    pub const fn new() -> Self {
        Self
    }

    /// Rejects degenerate input. Front ends pass a missing value as `""`.
    pub fn validate(&self, text: &str) -> Result<(), InvalidInput> {
        if text.trim().is_empty() {
            return Err(InvalidInput::Empty);
        }

        if text.chars().count() < MIN_INPUT_CHARS {
            return Err(InvalidInput::TooShort);
        }

        Ok(())
    }

    /// Never fails: input that would not pass [`validate`](Self::validate) simply
    /// normalizes to a short string, which is trivially symmetric.
    pub fn is_palindrome(&self, text: &str) -> bool {
        let normalized = normalize(text);
        let verdict = normalized.is_symmetric();
        debug!(
            normalized_chars = normalized.as_str().chars().count(),
            verdict,
            "palindrome scan finished"
        );
        verdict
    }

    /// Runs [`is_palindrome`](Self::is_palindrome) on the blocking worker pool and
    /// resolves once the scan is done. Polled outside a tokio runtime it scans inline.
    pub async fn is_palindrome_async(&self, text: impl Into<String>) -> bool {
        let text: Arc<str> = Arc::from(text.into());
        if Handle::try_current().is_err() {
            debug!("no tokio runtime, checking inline");
            return self.is_palindrome(&text);
        }
        let checker = *self;
        let worker_text = Arc::clone(&text);

        match task::spawn_blocking(move || checker.is_palindrome(&worker_text)).await {
            Ok(verdict) => verdict,
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(err) => {
                warn!(error = %err, "worker pool unavailable, checking inline");
                self.is_palindrome(&text)
            }
        }
    }
}
