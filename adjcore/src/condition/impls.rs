use std::{
    fmt,
    ops::{Deref, DerefMut},
    str::FromStr,
};
use crate::error::ValueError;
use super::{
    Condition,
    Conditions,
    Operator,
    ValueRepr,
    ValueSpec,
};

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

impl From<Operator> for String {
    fn from(operator: Operator) -> String {
        format!("{operator}")
    }
}

impl From<Operator> for &'static str {
    fn from(operator: Operator) -> &'static str {
        match operator {
            Operator::Equals => "equals",
            Operator::NotEquals => "not_equals",
            Operator::In => "in",
            Operator::NotIn => "not_in",
        }
    }
}

impl FromStr for Operator {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equals" => Ok(Operator::Equals),
            "not_equals" => Ok(Operator::NotEquals),
            "in" => Ok(Operator::In),
            "not_in" => Ok(Operator::NotIn),
            s => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

impl From<ValueRepr> for ValueSpec {
    fn from(repr: ValueRepr) -> Self {
        match repr {
            ValueRepr::Scalar(s) if s == "?" => ValueSpec::Placeholder,
            ValueRepr::Scalar(s) => ValueSpec::Scalar(s),
            ValueRepr::List(items) => ValueSpec::List(items),
        }
    }
}

impl From<ValueSpec> for ValueRepr {
    fn from(value: ValueSpec) -> Self {
        match value {
            ValueSpec::Placeholder => ValueRepr::Scalar("?".to_string()),
            ValueSpec::Scalar(s) => ValueRepr::Scalar(s),
            ValueSpec::List(items) => ValueRepr::List(items),
        }
    }
}

impl ValueSpec {
    pub fn is_placeholder(&self) -> bool {
        self == &ValueSpec::Placeholder
    }
}

impl Condition {
    pub fn new(
        attribute: impl Into<String>,
        operator: Operator,
        value: ValueSpec,
    ) -> Self {
        Self {
            attribute: attribute.into(),
            operator,
            value,
        }
    }
}

impl From<Vec<Condition>> for Conditions {
    fn from(conditions: Vec<Condition>) -> Self {
        Self(conditions)
    }
}

impl<const N: usize> From<[Condition; N]> for Conditions {
    fn from(conditions: [Condition; N]) -> Self {
        Self(conditions.into())
    }
}

impl FromIterator<Condition> for Conditions {
    fn from_iter<I: IntoIterator<Item=Condition>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for Conditions {
    type Target = Vec<Condition>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Conditions {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
