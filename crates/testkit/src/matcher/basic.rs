use super::{format_object, indent_lines, Matcher};
use crate::MatchError;
use std::fmt::{Debug, Display};

pub struct Equal<V> {
    expected: V,
}

pub fn equal<V>(expected: V) -> Equal<V> {
    Equal { expected }
}

impl<V: PartialEq + Debug> Matcher<V> for Equal<V> {
    fn matches(&self, actual: &V) -> Result<bool, MatchError> {
        Ok(*actual == self.expected)
    }

    fn failure_message(&self, actual: &V) -> String {
        format!(
            "Expected\n{}\nto equal\n{}",
            format_object(actual, 1),
            format_object(&self.expected, 1)
        )
    }

    fn negated_failure_message(&self, actual: &V) -> String {
        format!(
            "Expected\n{}\nnot to equal\n{}",
            format_object(actual, 1),
            format_object(&self.expected, 1)
        )
    }
}

pub struct BeEmpty;

pub fn be_empty() -> BeEmpty {
    BeEmpty
}

impl BeEmpty {
    fn failure<T: Debug + ?Sized>(actual: &T, to: &str) -> String {
        format!("Expected\n{}\n{} be empty", format_object(actual, 1), to)
    }
}

impl<X: Debug> Matcher<[X]> for BeEmpty {
    fn matches(&self, actual: &[X]) -> Result<bool, MatchError> {
        Ok(actual.is_empty())
    }

    fn failure_message(&self, actual: &[X]) -> String {
        Self::failure(actual, "to")
    }

    fn negated_failure_message(&self, actual: &[X]) -> String {
        Self::failure(actual, "not to")
    }
}

impl<X: Debug> Matcher<Vec<X>> for BeEmpty {
    fn matches(&self, actual: &Vec<X>) -> Result<bool, MatchError> {
        Ok(actual.is_empty())
    }

    fn failure_message(&self, actual: &Vec<X>) -> String {
        Self::failure(actual, "to")
    }

    fn negated_failure_message(&self, actual: &Vec<X>) -> String {
        Self::failure(actual, "not to")
    }
}

impl Matcher<str> for BeEmpty {
    fn matches(&self, actual: &str) -> Result<bool, MatchError> {
        Ok(actual.is_empty())
    }

    fn failure_message(&self, actual: &str) -> String {
        Self::failure(actual, "to")
    }

    fn negated_failure_message(&self, actual: &str) -> String {
        Self::failure(actual, "not to")
    }
}

/// Inverts a matcher. Errors from the inner matcher are passed through.
pub struct Not<M>(M);

pub fn not<M>(matcher: M) -> Not<M> {
    Not(matcher)
}

impl<T: ?Sized, M: Matcher<T>> Matcher<T> for Not<M> {
    fn matches(&self, actual: &T) -> Result<bool, MatchError> {
        self.0.matches(actual).map(|matched| !matched)
    }

    fn failure_message(&self, actual: &T) -> String {
        self.0.negated_failure_message(actual)
    }

    fn negated_failure_message(&self, actual: &T) -> String {
        self.0.failure_message(actual)
    }
}

/// Applies `matcher` to a value derived from the actual one.
pub struct WithTransform<F, M> {
    transform: F,
    matcher: M,
}

pub fn with_transform<T, U, F, M>(transform: F, matcher: M) -> WithTransform<F, M>
where
    T: ?Sized,
    F: Fn(&T) -> U,
    M: Matcher<U>,
{
    WithTransform { transform, matcher }
}

impl<T, U, F, M> Matcher<T> for WithTransform<F, M>
where
    T: ?Sized,
    F: Fn(&T) -> U,
    M: Matcher<U>,
{
    fn matches(&self, actual: &T) -> Result<bool, MatchError> {
        self.matcher.matches(&(self.transform)(actual))
    }

    fn failure_message(&self, actual: &T) -> String {
        self.matcher.failure_message(&(self.transform)(actual))
    }

    fn negated_failure_message(&self, actual: &T) -> String {
        self.matcher.negated_failure_message(&(self.transform)(actual))
    }
}

/// Predicate matcher with a fixed message template:
///
/// ```text
/// Expected:
/// <actual>
/// to <description>:
///     <data>
/// ```
pub struct Custom<F> {
    predicate: F,
    description: &'static str,
    data: String,
}

pub fn custom<T, F>(predicate: F, description: &'static str, data: impl Display) -> Custom<F>
where
    T: ?Sized,
    F: Fn(&T) -> Result<bool, MatchError>,
{
    Custom {
        predicate,
        description,
        data: data.to_string(),
    }
}

impl<F> Custom<F> {
    fn render<T: Debug + ?Sized>(&self, actual: &T, to: &str) -> String {
        format!(
            "Expected:\n{}\n{} {}:\n{}",
            format_object(actual, 1),
            to,
            self.description,
            indent_lines(&self.data, 1)
        )
    }
}

impl<T, F> Matcher<T> for Custom<F>
where
    T: Debug + ?Sized,
    F: Fn(&T) -> Result<bool, MatchError>,
{
    fn matches(&self, actual: &T) -> Result<bool, MatchError> {
        (self.predicate)(actual)
    }

    fn failure_message(&self, actual: &T) -> String {
        self.render(actual, "to")
    }

    fn negated_failure_message(&self, actual: &T) -> String {
        self.render(actual, "not to")
    }
}
