use serde::{Deserialize, Serialize};

/// The closed set of comparison operators a condition may use.
///
/// Anything outside this set is rejected when the catalog is read, so
/// evaluation never encounters an operator it cannot dispatch.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Equals,
    NotEquals,
    In,
    NotIn,
}

/// Comparison value as declared in the catalog.
///
/// The placeholder (`"?"`) defers the value to a template permission
/// held by one of the principal's roles; it is resolved away before a
/// condition ever reaches evaluation.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(from = "ValueRepr", into = "ValueRepr")]
pub enum ValueSpec {
    Placeholder,
    Scalar(String),
    List(Vec<String>),
}

/// Wire shape of [`ValueSpec`]: a bare string or a string list.
#[derive(Deserialize, Serialize)]
#[serde(untagged)]
pub(crate) enum ValueRepr {
    Scalar(String),
    List(Vec<String>),
}

/// A single attribute test attached to a permission.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Condition {
    pub attribute: String,
    pub operator: Operator,
    pub value: ValueSpec,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Conditions(Vec<Condition>);

mod impls;
