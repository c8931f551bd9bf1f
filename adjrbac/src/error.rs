use thiserror::Error;

/// Catalog misconfiguration surfaced while answering a request or
/// linting; never a transient failure.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("template permission {0} must carry exactly one condition")]
    TemplateShape(i64),
    #[error("no comparison value for {0}")]
    NoComparisonValue(String),
    #[error("ambiguous comparison value for {0}")]
    AmbiguousComparison(String),
    #[error("permission id {0} assigned more than once")]
    DuplicateId(i64),
}
