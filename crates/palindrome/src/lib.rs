//! Palindrome validation and checking.
//!
//! [`PalindromeChecker`] is the whole core: it validates raw input and tests it for
//! symmetry after normalization, synchronously or on a background worker. The
//! [`frontend`] module turns the check action every front end performs into one shared
//! routine.

pub mod checker;
pub mod config;
pub mod error;
pub mod frontend;
pub mod telemetry;

pub use checker::{InvalidInput, PalindromeChecker};
pub use frontend::{run_check_action, BusyIndicator, CheckVerdict, CheckView};
