use serde::{Deserialize, Serialize};
use crate::condition::Conditions;

/// The effect a matched permission has on the decision.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    Allow,
    Deny,
}

/// Resource selector for a permission.
///
/// `Any` (`"*"`) matches every resource, `Named` matches exactly one.
/// `Placeholder` (`"?"`) marks a template permission and matches no
/// concrete resource.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ResourceSpec {
    Any,
    Placeholder,
    Named(String),
}

/// Scope selector for a permission.
///
/// `Any` (`"*"`) covers every scope, `Scoped` covers the listed ones.
/// `Placeholder` (`"?"`) marks a template permission and covers no
/// concrete scope.  A bare string other than the two tokens is not a
/// valid wire form.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "ScopesRepr", into = "ScopesRepr")]
pub enum ScopeSpec {
    Any,
    Placeholder,
    Scoped(Vec<String>),
}

/// Wire shape of [`ScopeSpec`]: a bare token or a string list.
#[derive(Deserialize, Serialize)]
#[serde(untagged)]
pub(crate) enum ScopesRepr {
    One(String),
    Many(Vec<String>),
}

/// A single statement of the permission catalog.
///
/// The `id` identifies the permission in decision provenance and must be
/// unique across the catalog; it is the caller's to assign.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Permission {
    #[serde(default)]
    pub id: i64,
    pub role: String,
    pub resource: ResourceSpec,
    pub scopes: ScopeSpec,
    pub effect: Effect,
    #[serde(default)]
    pub conditions: Conditions,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Permissions(Vec<Permission>);

mod impls;
