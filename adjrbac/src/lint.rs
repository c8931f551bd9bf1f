use std::collections::HashSet;
use adjcore::{
    permission::Permissions,
    role::Roles,
};
use crate::{
    error::Error,
    template::TemplateIndex,
};

/// Validate the catalog preconditions that `authorize` assumes rather
/// than checks: permission ids assigned once, template permissions
/// carrying exactly one condition, and some template somewhere in the
/// catalog serving every placeholder condition.
///
/// The coverage check is role blind.  Multiple candidate templates are
/// not flagged: ambiguity only exists relative to the roles a principal
/// actually holds, which a catalog-wide check cannot anticipate.
pub fn lint(catalog: &Permissions) -> Result<(), Error> {
    let mut seen = HashSet::new();
    for permission in catalog.iter() {
        if !seen.insert(permission.id) {
            return Err(Error::DuplicateId(permission.id));
        }
    }

    // with every role granted, the index spans the whole catalog and
    // checks every template's shape on the way
    let granted = catalog.iter()
        .map(|permission| permission.role.clone())
        .collect::<Roles>();
    let index = TemplateIndex::build(&granted, catalog)?;

    for permission in catalog.iter() {
        if permission.is_template() {
            continue;
        }
        for condition in permission.conditions.iter() {
            if !condition.value.is_placeholder() {
                continue;
            }
            if index.candidates(&condition.attribute, condition.operator)
                .is_empty()
            {
                return Err(Error::NoComparisonValue(
                    condition.attribute.clone(),
                ));
            }
        }
    }
    log::debug!("linted {} catalog permissions", catalog.len());
    Ok(())
}

#[cfg(test)]
mod test {
    use adjcore::permission::Permissions;
    use crate::error::Error;
    use super::lint;

    #[test]
    fn clean() -> anyhow::Result<()> {
        let catalog: Permissions = serde_json::from_str(r#"[
            {
                "id": 1,
                "role": "account.executive",
                "resource": "?",
                "scopes": "?",
                "effect": "allow",
                "conditions": [
                    {"attribute": "company", "operator": "equals", "value": "acme"}
                ]
            },
            {
                "id": 2,
                "role": "account.executive",
                "resource": "account",
                "scopes": ["view"],
                "effect": "allow",
                "conditions": [
                    {"attribute": "company", "operator": "equals", "value": "?"}
                ]
            }
        ]"#)?;
        lint(&catalog)?;
        Ok(())
    }

    #[test]
    fn duplicate_id() -> anyhow::Result<()> {
        let catalog: Permissions = serde_json::from_str(r#"[
            {
                "id": 1,
                "role": "account.executive",
                "resource": "account",
                "scopes": ["view"],
                "effect": "allow"
            },
            {
                "id": 1,
                "role": "account.auditor",
                "resource": "invoice",
                "scopes": ["view"],
                "effect": "allow"
            }
        ]"#)?;
        assert_eq!(
            lint(&catalog).expect_err("should be an error"),
            Error::DuplicateId(1),
        );
        Ok(())
    }

    #[test]
    fn malformed_template() -> anyhow::Result<()> {
        // no role holds this template, lint still reports its shape
        let catalog: Permissions = serde_json::from_str(r#"[
            {
                "id": 3,
                "role": "regional.manager",
                "resource": "?",
                "scopes": "?",
                "effect": "allow"
            }
        ]"#)?;
        assert_eq!(
            lint(&catalog).expect_err("should be an error"),
            Error::TemplateShape(3),
        );
        Ok(())
    }

    #[test]
    fn unserved_placeholder() -> anyhow::Result<()> {
        let catalog: Permissions = serde_json::from_str(r#"[
            {
                "id": 1,
                "role": "account.executive",
                "resource": "account",
                "scopes": ["view"],
                "effect": "allow",
                "conditions": [
                    {"attribute": "company", "operator": "equals", "value": "?"}
                ]
            }
        ]"#)?;
        assert_eq!(
            lint(&catalog).expect_err("should be an error"),
            Error::NoComparisonValue("company".to_string()),
        );
        Ok(())
    }

    #[test]
    fn cross_role_coverage() -> anyhow::Result<()> {
        // the serving template hangs off another role; lint accepts
        // this even though a principal holding only account.executive
        // would fail to resolve at request time
        let catalog: Permissions = serde_json::from_str(r#"[
            {
                "id": 1,
                "role": "regional.manager",
                "resource": "?",
                "scopes": "?",
                "effect": "allow",
                "conditions": [
                    {"attribute": "company", "operator": "equals", "value": "acme"}
                ]
            },
            {
                "id": 2,
                "role": "account.executive",
                "resource": "account",
                "scopes": ["view"],
                "effect": "allow",
                "conditions": [
                    {"attribute": "company", "operator": "equals", "value": "?"}
                ]
            }
        ]"#)?;
        lint(&catalog)?;
        Ok(())
    }

    #[test]
    fn ambiguity_tolerated() -> anyhow::Result<()> {
        // two templates for the same comparison under different roles
        // is a valid catalog; it only turns ambiguous for a principal
        // granted both
        let catalog: Permissions = serde_json::from_str(r#"[
            {
                "id": 1,
                "role": "account.executive",
                "resource": "?",
                "scopes": "?",
                "effect": "allow",
                "conditions": [
                    {"attribute": "company", "operator": "equals", "value": "acme"}
                ]
            },
            {
                "id": 2,
                "role": "account.auditor",
                "resource": "?",
                "scopes": "?",
                "effect": "allow",
                "conditions": [
                    {"attribute": "company", "operator": "equals", "value": "globex"}
                ]
            },
            {
                "id": 3,
                "role": "account.executive",
                "resource": "account",
                "scopes": ["view"],
                "effect": "allow",
                "conditions": [
                    {"attribute": "company", "operator": "equals", "value": "?"}
                ]
            }
        ]"#)?;
        lint(&catalog)?;
        Ok(())
    }
}
