use thiserror::Error;

/// A matcher was used on input it cannot evaluate.
///
/// Distinct from a non-match, which is reported as `Ok(false)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("unsupported type for {context}: {type_name}")]
    UnsupportedType {
        context: &'static str,
        type_name: &'static str,
    },

    #[error("answer must not be empty")]
    EmptyAnswer,
}
