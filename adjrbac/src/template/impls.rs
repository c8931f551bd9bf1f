use adjcore::{
    condition::{
        Condition,
        Operator,
        ValueSpec,
    },
    decision::{
        ResolvedCondition,
        Value,
    },
    permission::Permissions,
    role::Roles,
};
use crate::error::Error;
use super::{
    TemplateIndex,
    ValueTemplate,
};

impl TemplateIndex {
    /// Record every template permission held by one of the granted
    /// roles, in catalog order.
    ///
    /// A template permission must carry exactly one condition.  A
    /// template whose own condition value is the placeholder supplies
    /// nothing and is left out of the index.
    pub fn build(
        granted: &Roles,
        catalog: &Permissions,
    ) -> Result<Self, Error> {
        let mut templates = Vec::new();
        for permission in catalog.iter() {
            if !(permission.is_template() && granted.contains(&permission.role)) {
                continue;
            }
            let condition = match permission.conditions.as_slice() {
                [condition] => condition,
                _ => return Err(Error::TemplateShape(permission.id)),
            };
            let value = match &condition.value {
                ValueSpec::Placeholder => {
                    log::debug!(
                        "template permission {} supplies no concrete value",
                        permission.id,
                    );
                    continue;
                }
                ValueSpec::Scalar(value) => Value::Scalar(value.clone()),
                ValueSpec::List(values) => Value::List(values.clone()),
            };
            templates.push(ValueTemplate {
                attribute: condition.attribute.clone(),
                operator: condition.operator,
                value,
                provider: permission.id,
            });
        }
        log::trace!("indexed {} value templates", templates.len());
        Ok(Self(templates))
    }

    pub(crate) fn candidates(
        &self,
        attribute: &str,
        operator: Operator,
    ) -> Vec<&ValueTemplate> {
        self.0.iter()
            .filter(|template| {
                template.attribute == attribute &&
                    template.operator == operator
            })
            .collect()
    }

    /// Materialize the comparison value of `condition` on behalf of the
    /// matched permission identified by `permission_id`.
    ///
    /// A concrete value passes through with the consuming permission as
    /// its sole provenance.  A placeholder is served by the templates
    /// recorded for its `(attribute, operator)`: the scalar operators
    /// demand exactly one candidate and list the provider ahead of the
    /// consumer, while the membership operators union every candidate's
    /// values in index order without deduplication and list the consumer
    /// ahead of its providers.
    pub fn resolve(
        &self,
        permission_id: i64,
        condition: &Condition,
    ) -> Result<ResolvedCondition, Error> {
        match &condition.value {
            ValueSpec::Scalar(value) => Ok(ResolvedCondition {
                attribute: condition.attribute.clone(),
                operator: condition.operator,
                value: Value::Scalar(value.clone()),
                matching_permissions: vec![permission_id],
            }),
            ValueSpec::List(values) => Ok(ResolvedCondition {
                attribute: condition.attribute.clone(),
                operator: condition.operator,
                value: Value::List(values.clone()),
                matching_permissions: vec![permission_id],
            }),
            ValueSpec::Placeholder => {
                let candidates = self.candidates(
                    &condition.attribute,
                    condition.operator,
                );
                if candidates.is_empty() {
                    return Err(Error::NoComparisonValue(
                        condition.attribute.clone(),
                    ));
                }
                match condition.operator {
                    Operator::Equals | Operator::NotEquals => {
                        if candidates.len() > 1 {
                            return Err(Error::AmbiguousComparison(
                                condition.attribute.clone(),
                            ));
                        }
                        Ok(ResolvedCondition {
                            attribute: condition.attribute.clone(),
                            operator: condition.operator,
                            value: candidates[0].value.clone(),
                            matching_permissions: vec![
                                candidates[0].provider,
                                permission_id,
                            ],
                        })
                    }
                    Operator::In | Operator::NotIn => {
                        let mut values = Vec::new();
                        let mut matching_permissions = vec![permission_id];
                        for template in candidates {
                            // a scalar valued candidate joins as a
                            // single entry
                            match &template.value {
                                Value::Scalar(value) =>
                                    values.push(value.clone()),
                                Value::List(list) =>
                                    values.extend(list.iter().cloned()),
                            }
                            matching_permissions.push(template.provider);
                        }
                        Ok(ResolvedCondition {
                            attribute: condition.attribute.clone(),
                            operator: condition.operator,
                            value: Value::List(values),
                            matching_permissions,
                        })
                    }
                }
            }
        }
    }
}
