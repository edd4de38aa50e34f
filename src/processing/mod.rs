//! Configuration checking logic.
//!
//! - [`validator`] - the ordered rule sequence
//! - [`problem`] - problems and the report that collects them
//! - [`messages`] - message text per rule and language

mod messages;
mod problem;
mod validator;

// Re-export public types and functions
pub use messages::{message, ping_line, success_text, Lang, SuccessText};
pub use problem::{Problem, ProblemKind, Rule, Severity, ValidationReport};
pub use validator::{validate_configuration, validate_configuration_in};
