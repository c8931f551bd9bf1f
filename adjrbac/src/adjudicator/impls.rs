use adjcore::{
    decision::{
        Clause,
        Decision,
    },
    permission::{
        Effect,
        Permissions,
    },
    role::Roles,
};
use crate::{
    error::Error,
    template::TemplateIndex,
};
use super::Adjudicator;

impl From<Permissions> for Adjudicator {
    fn from(catalog: Permissions) -> Self {
        Self { catalog }
    }
}

impl Adjudicator {
    /// Decide whether the granted roles may act within `scope` on
    /// `resource`.
    ///
    /// The decision reports every applicable permission id in catalog
    /// order, and a matched deny makes it unauthorized no matter what
    /// else matched.  A purely conditional grant carries the resolved
    /// condition formula for the caller to evaluate against the
    /// resource instance.  Catalog misconfiguration aborts the whole
    /// call.
    pub fn authorize(
        &self,
        granted: &Roles,
        resource: &str,
        scope: &str,
    ) -> Result<Decision, Error> {
        log::trace!("authorize {granted:?} for {scope} on {resource}");
        let matched = self.catalog.iter()
            .filter(|permission| permission.matches(granted, resource, scope))
            .collect::<Vec<_>>();
        log::debug!(
            "{} of {} catalog permissions matched",
            matched.len(),
            self.catalog.len(),
        );
        let matching_permissions = matched.iter()
            .map(|permission| permission.id)
            .collect::<Vec<_>>();

        // template shape problems surface regardless of what matched
        let index = TemplateIndex::build(granted, &self.catalog)?;

        let mut authorized = !matched.is_empty();
        let mut unconditional = false;
        let mut clauses = Vec::new();
        for permission in matched {
            match permission.effect {
                Effect::Deny => {
                    log::debug!("permission {} denies, stopping", permission.id);
                    authorized = false;
                    break;
                }
                Effect::Allow if permission.conditions.is_empty() =>
                    unconditional = true,
                Effect::Allow => clauses.push(
                    permission.conditions.iter()
                        .map(|condition| index.resolve(permission.id, condition))
                        .collect::<Result<Clause, _>>()?,
                ),
            }
        }

        // an unconditional grant subsumes every collected clause, and a
        // denied or unmatched request has no formula to report
        let condition_alternatives = (
            authorized && !unconditional && !clauses.is_empty()
        ).then(|| clauses.into());

        Ok(Decision {
            authorized,
            matching_permissions,
            condition_alternatives,
        })
    }
}
