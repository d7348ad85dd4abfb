//! The "check" action every front end performs.
//!
//! A front end (console prompt, HTTP form, desktop window) implements [`CheckView`] and
//! hands it to [`run_check_action`], which owns the busy indicator, validation, the
//! background scan, and which message ends up in front of the user.

use serde::Serialize;
use tracing::debug;

use crate::checker::{InvalidInput, PalindromeChecker};

pub const PALINDROME_MESSAGE: &str = "Це паліндром!";
pub const NOT_PALINDROME_MESSAGE: &str = "Це не паліндром!";
pub const ERROR_TITLE: &str = "Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckVerdict {
    Palindrome,
    NotPalindrome,
}

impl CheckVerdict {
    pub const fn is_palindrome(self) -> bool {
        matches!(self, Self::Palindrome)
    }

    /// The fixed result message shown to the user.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Palindrome => PALINDROME_MESSAGE,
            Self::NotPalindrome => NOT_PALINDROME_MESSAGE,
        }
    }
}

impl From<bool> for CheckVerdict {
    fn from(is_palindrome: bool) -> Self {
        if is_palindrome {
            Self::Palindrome
        } else {
            Self::NotPalindrome
        }
    }
}

/// Presentation hooks a front end exposes to the check action.
pub trait CheckView: Send + Sync {
    fn show_busy(&self);
    fn hide_busy(&self);
    fn show_result(&self, message: &str);
    fn show_error(&self, title: &str, message: &str);
}

/// Keeps the busy indicator up for as long as the guard lives.
pub struct BusyIndicator<'a, V: CheckView + ?Sized> {
    view: &'a V,
}

impl<'a, V: CheckView + ?Sized> BusyIndicator<'a, V> {
    pub fn show(view: &'a V) -> Self {
        view.show_busy();
        Self { view }
    }
}

impl<V: CheckView + ?Sized> Drop for BusyIndicator<'_, V> {
    fn drop(&mut self) {
        self.view.hide_busy();
    }
}

/// Validates `input`, checks it on the background worker, and presents the outcome.
///
/// The busy indicator is hidden before any message is shown, including when the
/// returned future is dropped mid-check. On invalid input the error is shown and no
/// result message is presented.
pub async fn run_check_action<V>(
    checker: &PalindromeChecker,
    view: &V,
    input: &str,
) -> Result<CheckVerdict, InvalidInput>
where
    V: CheckView + ?Sized,
{
    let outcome = {
        let _busy = BusyIndicator::show(view);
        match checker.validate(input) {
            Ok(()) => Ok(CheckVerdict::from(checker.is_palindrome_async(input).await)),
            Err(err) => Err(err),
        }
    };

    match outcome {
        Ok(verdict) => {
            debug!(?verdict, input_chars = input.chars().count(), "check completed");
            view.show_result(verdict.message());
        }
        Err(err) => {
            debug!(reason = err.reason(), "check rejected");
            view.show_error(ERROR_TITLE, &err.to_string());
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum ViewEvent {
        Busy,
        Idle,
        Result(String),
        Error(String, String),
    }

    #[derive(Default)]
    struct RecordingView {
        events: Mutex<Vec<ViewEvent>>,
    }

    impl RecordingView {
        fn events(&self) -> Vec<ViewEvent> {
            self.events.lock().expect("view mutex poisoned").clone()
        }

        fn push(&self, event: ViewEvent) {
            self.events.lock().expect("view mutex poisoned").push(event);
        }
    }

    impl CheckView for RecordingView {
        fn show_busy(&self) {
            self.push(ViewEvent::Busy);
        }

        fn hide_busy(&self) {
            self.push(ViewEvent::Idle);
        }

        fn show_result(&self, message: &str) {
            self.push(ViewEvent::Result(message.to_string()));
        }

        fn show_error(&self, title: &str, message: &str) {
            self.push(ViewEvent::Error(title.to_string(), message.to_string()));
        }
    }

    #[tokio::test]
    async fn palindrome_shows_positive_message_after_busy_cycle() {
        let view = RecordingView::default();
        let verdict = run_check_action(&PalindromeChecker::new(), &view, "Я несу гусеня")
            .await
            .expect("valid input");

        assert_eq!(verdict, CheckVerdict::Palindrome);
        assert_eq!(
            view.events(),
            vec![
                ViewEvent::Busy,
                ViewEvent::Idle,
                ViewEvent::Result("Це паліндром!".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn non_palindrome_shows_negative_message() {
        let view = RecordingView::default();
        let verdict = run_check_action(&PalindromeChecker::new(), &view, "hello")
            .await
            .expect("valid input");

        assert_eq!(verdict, CheckVerdict::NotPalindrome);
        assert_eq!(
            view.events().last(),
            Some(&ViewEvent::Result("Це не паліндром!".to_string()))
        );
    }

    #[tokio::test]
    async fn invalid_input_shows_error_and_still_hides_busy() {
        let view = RecordingView::default();
        let err = run_check_action(&PalindromeChecker::new(), &view, "x")
            .await
            .expect_err("single character rejected");

        assert_eq!(err, InvalidInput::TooShort);
        assert_eq!(
            view.events(),
            vec![
                ViewEvent::Busy,
                ViewEvent::Idle,
                ViewEvent::Error(
                    "Error".to_string(),
                    "Рядок повинен містити щонайменше два символи.".to_string()
                ),
            ]
        );
    }

    #[test]
    fn busy_indicator_hides_on_drop() {
        let view = RecordingView::default();
        {
            let _busy = BusyIndicator::show(&view);
            assert_eq!(view.events(), vec![ViewEvent::Busy]);
        }
        assert_eq!(view.events(), vec![ViewEvent::Busy, ViewEvent::Idle]);
    }

    #[test]
    fn verdict_serializes_as_snake_case() {
        let value = serde_json::to_value(CheckVerdict::NotPalindrome).expect("serializes");
        assert_eq!(value, serde_json::json!("not_palindrome"));
        assert!(CheckVerdict::from(true).is_palindrome());
    }
}
