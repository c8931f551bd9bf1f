//! Decision Output
//!
//! The structs provided by this module represent the outcome of an
//! authorization request as produced by the decision engine for
//! consumption by the caller, and are not meant to be persisted in
//! some datastore.

use serde::{Deserialize, Serialize};
use crate::condition::Operator;

/// A comparison value with every placeholder resolved away.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(String),
    List(Vec<String>),
}

/// A condition whose comparison value is fully materialized, together
/// with the ids of the permissions that contributed to it.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ResolvedCondition {
    pub attribute: String,
    pub operator: Operator,
    pub value: Value,
    #[serde(default)]
    pub matching_permissions: Vec<i64>,
}

/// The resolved conditions of a single conditional grant; holds when
/// every member holds.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Clause(Vec<ResolvedCondition>);

/// The condition formula of a decision, in disjunctive normal form;
/// holds when any clause holds.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ConditionAlternatives(Vec<Clause>);

/// The outcome of an authorization request.
///
/// `matching_permissions` lists the ids of every catalog permission
/// applicable to the request, in catalog order, for audit purposes.
/// `condition_alternatives` is present only when the grant is
/// conditional; an authorized decision without it is unconditional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Decision {
    pub authorized: bool,
    pub matching_permissions: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_alternatives: Option<ConditionAlternatives>,
}

mod impls;
