use std::ops::{Deref, DerefMut};
use crate::{
    condition::Operator,
    instance::ResourceInstance,
};
use super::{
    Clause,
    ConditionAlternatives,
    Decision,
    ResolvedCondition,
    Value,
};

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(value.to_string())
    }
}

impl From<Vec<String>> for Value {
    fn from(values: Vec<String>) -> Self {
        Value::List(values)
    }
}

impl<const N: usize> From<[&str; N]> for Value {
    fn from(values: [&str; N]) -> Self {
        Value::List(values
            .into_iter()
            .map(str::to_string)
            .collect()
        )
    }
}

impl ResolvedCondition {
    /// Whether the instance's attribute value satisfies this condition.
    ///
    /// An absent attribute fails the positive operators and satisfies
    /// the negated ones.  Shape mismatches stay total: a scalar under a
    /// membership operator acts as a single entry list, while a list
    /// under `equals` compares equal to no attribute value.
    pub fn satisfied_by(&self, instance: &ResourceInstance) -> bool {
        let actual = instance.get(&self.attribute);
        match (self.operator, &self.value) {
            (Operator::Equals, Value::Scalar(value)) =>
                actual == Some(value.as_str()),
            (Operator::NotEquals, Value::Scalar(value)) =>
                actual != Some(value.as_str()),
            (Operator::In, Value::List(values)) => actual
                .map(|actual| values.iter().any(|value| value == actual))
                .unwrap_or(false),
            (Operator::NotIn, Value::List(values)) => actual
                .map(|actual| values.iter().all(|value| value != actual))
                .unwrap_or(true),
            (Operator::In, Value::Scalar(value)) =>
                actual == Some(value.as_str()),
            (Operator::NotIn, Value::Scalar(value)) =>
                actual != Some(value.as_str()),
            (Operator::Equals, Value::List(_)) => false,
            (Operator::NotEquals, Value::List(_)) => true,
        }
    }
}

impl Clause {
    /// Whether every condition of this clause holds for the instance.
    /// An empty clause holds vacuously.
    pub fn satisfied_by(&self, instance: &ResourceInstance) -> bool {
        self.0.iter().all(|condition| condition.satisfied_by(instance))
    }
}

impl ConditionAlternatives {
    /// Whether any clause of this formula holds for the instance.
    pub fn satisfied_by(&self, instance: &ResourceInstance) -> bool {
        self.0.iter().any(|clause| clause.satisfied_by(instance))
    }
}

impl Decision {
    /// The end to end verdict: authorized, and the condition formula
    /// (when one is present) holds for the given instance.
    pub fn permits(&self, instance: &ResourceInstance) -> bool {
        log::trace!("{self:?} against {instance:?}");
        self.authorized && self.condition_alternatives
            .as_ref()
            .map(|alternatives| alternatives.satisfied_by(instance))
            .unwrap_or(true)
    }
}

impl From<Vec<ResolvedCondition>> for Clause {
    fn from(conditions: Vec<ResolvedCondition>) -> Self {
        Self(conditions)
    }
}

impl<const N: usize> From<[ResolvedCondition; N]> for Clause {
    fn from(conditions: [ResolvedCondition; N]) -> Self {
        Self(conditions.into())
    }
}

impl FromIterator<ResolvedCondition> for Clause {
    fn from_iter<I: IntoIterator<Item=ResolvedCondition>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for Clause {
    type Target = Vec<ResolvedCondition>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Clause {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Clause>> for ConditionAlternatives {
    fn from(clauses: Vec<Clause>) -> Self {
        Self(clauses)
    }
}

impl<const N: usize> From<[Clause; N]> for ConditionAlternatives {
    fn from(clauses: [Clause; N]) -> Self {
        Self(clauses.into())
    }
}

impl FromIterator<Clause> for ConditionAlternatives {
    fn from_iter<I: IntoIterator<Item=Clause>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for ConditionAlternatives {
    type Target = Vec<Clause>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ConditionAlternatives {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
