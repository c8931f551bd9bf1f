use std::{
    fmt,
    ops::{Deref, DerefMut},
    str::FromStr,
};
use crate::{
    error::ValueError,
    role::Roles,
};
use super::{
    Effect,
    Permission,
    Permissions,
    ResourceSpec,
    ScopeSpec,
    ScopesRepr,
};

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

impl From<Effect> for String {
    fn from(effect: Effect) -> String {
        format!("{effect}")
    }
}

impl From<Effect> for &'static str {
    fn from(effect: Effect) -> &'static str {
        match effect {
            Effect::Allow => "allow",
            Effect::Deny => "deny",
        }
    }
}

impl FromStr for Effect {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "allow" => Ok(Effect::Allow),
            "deny" => Ok(Effect::Deny),
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

impl From<String> for ResourceSpec {
    fn from(value: String) -> Self {
        match value.as_str() {
            "*" => ResourceSpec::Any,
            "?" => ResourceSpec::Placeholder,
            _ => ResourceSpec::Named(value),
        }
    }
}

impl From<&str> for ResourceSpec {
    fn from(value: &str) -> Self {
        value.to_string().into()
    }
}

impl From<ResourceSpec> for String {
    fn from(resource: ResourceSpec) -> String {
        match resource {
            ResourceSpec::Any => "*".to_string(),
            ResourceSpec::Placeholder => "?".to_string(),
            ResourceSpec::Named(name) => name,
        }
    }
}

impl TryFrom<ScopesRepr> for ScopeSpec {
    type Error = ValueError;

    fn try_from(repr: ScopesRepr) -> Result<Self, Self::Error> {
        match repr {
            ScopesRepr::One(s) if s == "*" => Ok(ScopeSpec::Any),
            ScopesRepr::One(s) if s == "?" => Ok(ScopeSpec::Placeholder),
            ScopesRepr::One(s) => Err(ValueError::Unsupported(s)),
            ScopesRepr::Many(scopes) => Ok(ScopeSpec::Scoped(scopes)),
        }
    }
}

impl From<ScopeSpec> for ScopesRepr {
    fn from(scopes: ScopeSpec) -> Self {
        match scopes {
            ScopeSpec::Any => ScopesRepr::One("*".to_string()),
            ScopeSpec::Placeholder => ScopesRepr::One("?".to_string()),
            ScopeSpec::Scoped(scopes) => ScopesRepr::Many(scopes),
        }
    }
}

impl<const N: usize> From<[&str; N]> for ScopeSpec {
    fn from(scopes: [&str; N]) -> Self {
        ScopeSpec::Scoped(scopes
            .into_iter()
            .map(str::to_string)
            .collect()
        )
    }
}

impl Permission {
    /// Whether this permission applies to the request at hand, i.e. its
    /// role is granted, its resource selector covers `resource` and its
    /// scope selector covers `scope`.
    pub fn matches(&self, granted: &Roles, resource: &str, scope: &str) -> bool {
        granted.contains(&self.role)
            && match &self.resource {
                ResourceSpec::Any => true,
                ResourceSpec::Placeholder => false,
                ResourceSpec::Named(name) => name == resource,
            }
            && match &self.scopes {
                ScopeSpec::Any => true,
                ScopeSpec::Placeholder => false,
                ScopeSpec::Scoped(scopes) => scopes.iter().any(|s| s == scope),
            }
    }

    /// Whether this permission is a template, i.e. it supplies comparison
    /// values to placeholder conditions rather than granting anything by
    /// itself.
    pub fn is_template(&self) -> bool {
        self.resource == ResourceSpec::Placeholder &&
            self.scopes == ScopeSpec::Placeholder
    }
}

impl From<Vec<Permission>> for Permissions {
    fn from(permissions: Vec<Permission>) -> Self {
        Self(permissions)
    }
}

impl<const N: usize> From<[Permission; N]> for Permissions {
    fn from(permissions: [Permission; N]) -> Self {
        Self(permissions.into())
    }
}

impl From<Permissions> for Vec<Permission> {
    fn from(permissions: Permissions) -> Self {
        permissions.0
    }
}

impl FromIterator<Permission> for Permissions {
    fn from_iter<I: IntoIterator<Item=Permission>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for Permissions {
    type Target = Vec<Permission>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Permissions {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
