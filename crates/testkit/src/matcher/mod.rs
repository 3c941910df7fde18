//! Assertion matchers.
//!
//! A [`Matcher`] answers three questions about an actual value: does it
//! match, and how to explain a failed positive or negated assertion.
//! `Err(MatchError)` is reserved for input a matcher cannot evaluate; a plain
//! mismatch is `Ok(false)`.

pub mod basic;
pub mod dns;
pub mod record;

use crate::MatchError;
use std::fmt::Debug;

pub use basic::{
    be_empty, custom, equal, not, with_transform, BeEmpty, Custom, Equal, Not, WithTransform,
};

pub trait Matcher<T: ?Sized> {
    fn matches(&self, actual: &T) -> Result<bool, MatchError>;

    fn failure_message(&self, actual: &T) -> String;

    fn negated_failure_message(&self, actual: &T) -> String;
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for &M {
    fn matches(&self, actual: &T) -> Result<bool, MatchError> {
        (**self).matches(actual)
    }

    fn failure_message(&self, actual: &T) -> String {
        (**self).failure_message(actual)
    }

    fn negated_failure_message(&self, actual: &T) -> String {
        (**self).negated_failure_message(actual)
    }
}

/// Panics with the matcher's failure message unless `actual` matches.
#[track_caller]
pub fn assert_that<T: ?Sized, M: Matcher<T>>(actual: &T, matcher: M) {
    match matcher.matches(actual) {
        Ok(true) => {}
        Ok(false) => panic!("{}", matcher.failure_message(actual)),
        Err(e) => panic!("matcher error: {}", e),
    }
}

/// Panics with the matcher's negated failure message if `actual` matches.
#[track_caller]
pub fn assert_not<T: ?Sized, M: Matcher<T>>(actual: &T, matcher: M) {
    match matcher.matches(actual) {
        Ok(false) => {}
        Ok(true) => panic!("{}", matcher.negated_failure_message(actual)),
        Err(e) => panic!("matcher error: {}", e),
    }
}

/// Pretty debug output, every line indented by `indent` levels of four spaces.
pub(crate) fn format_object<T: Debug + ?Sized>(value: &T, indent: usize) -> String {
    indent_lines(&format!("{:#?}", value), indent)
}

pub(crate) fn indent_lines(text: &str, indent: usize) -> String {
    let pad = "    ".repeat(indent);
    text.lines()
        .map(|line| format!("{}{}", pad, line))
        .collect::<Vec<_>>()
        .join("\n")
}
