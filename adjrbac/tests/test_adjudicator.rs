use adjcore::{
    decision::Decision,
    instance::ResourceInstance,
    role::Roles,
};
use adjrbac::{
    lint::lint,
    Adjudicator,
};

use test_adj::catalog::{
    account_catalog,
    acme_north_account,
};

#[test]
fn catalog_lints_clean() -> anyhow::Result<()> {
    lint(&account_catalog()?)?;
    Ok(())
}

#[test]
fn executive_conditional_view() -> anyhow::Result<()> {
    let adjudicator = Adjudicator::from(account_catalog()?);
    let decision = adjudicator.authorize(
        &Roles::from(["account.executive"]),
        "account",
        "view",
    )?;

    // the template supplying the comparison value never matches the
    // request itself
    assert_eq!(
        decision,
        serde_json::from_str(r#"{
            "authorized": true,
            "matching_permissions": [4],
            "condition_alternatives": [[
                {
                    "attribute": "company",
                    "operator": "equals",
                    "value": "acme",
                    "matching_permissions": [1, 4]
                }
            ]]
        }"#)?,
    );
    Ok(())
}

#[test]
fn cross_role_formula() -> anyhow::Result<()> {
    let adjudicator = Adjudicator::from(account_catalog()?);
    let decision = adjudicator.authorize(
        &Roles::from(["account.executive", "regional.manager"]),
        "account",
        "view",
    )?;

    // one clause per conditional grant; the manager's membership values
    // union both regional templates in catalog order
    assert_eq!(
        decision,
        serde_json::from_str(r#"{
            "authorized": true,
            "matching_permissions": [4, 5],
            "condition_alternatives": [
                [
                    {
                        "attribute": "company",
                        "operator": "equals",
                        "value": "acme",
                        "matching_permissions": [1, 4]
                    }
                ],
                [
                    {
                        "attribute": "region",
                        "operator": "in",
                        "value": ["north", "east", "south"],
                        "matching_permissions": [5, 2, 3]
                    }
                ]
            ]
        }"#)?,
    );
    Ok(())
}

#[test]
fn auditor_unconditional() -> anyhow::Result<()> {
    let adjudicator = Adjudicator::from(account_catalog()?);
    let decision = adjudicator.authorize(
        &Roles::from(["account.auditor"]),
        "account",
        "view",
    )?;

    assert!(decision.authorized);
    assert_eq!(decision.matching_permissions, vec![6]);
    assert_eq!(decision.condition_alternatives, None);

    // and authorized means permitted outright, whatever the instance
    assert!(decision.permits(&ResourceInstance::default()));
    Ok(())
}

#[test]
fn deny_overrides_invoice_view() -> anyhow::Result<()> {
    let adjudicator = Adjudicator::from(account_catalog()?);
    let granted = Roles::from(["account.auditor"]);

    let decision = adjudicator.authorize(&granted, "invoice", "view")?;
    assert!(!decision.authorized);
    // both the deny and the allow it overrides stay on record
    assert_eq!(decision.matching_permissions, vec![7, 8]);
    assert_eq!(decision.condition_alternatives, None);
    assert!(!decision.permits(&acme_north_account()));

    // the wildcard deny also covers scopes nothing allows
    let decision = adjudicator.authorize(&granted, "invoice", "export")?;
    assert!(!decision.authorized);
    assert_eq!(decision.matching_permissions, vec![7]);
    Ok(())
}

#[test]
fn unconditional_subsumes_conditional() -> anyhow::Result<()> {
    let adjudicator = Adjudicator::from(account_catalog()?);
    let decision = adjudicator.authorize(
        &Roles::from(["account.executive", "account.auditor"]),
        "account",
        "view",
    )?;

    assert!(decision.authorized);
    assert_eq!(decision.matching_permissions, vec![4, 6]);
    // the auditor grant is unconditional, so no formula is reported
    assert_eq!(decision.condition_alternatives, None);
    Ok(())
}

#[test]
fn unmatched_roles() -> anyhow::Result<()> {
    let adjudicator = Adjudicator::from(account_catalog()?);

    let decision = adjudicator.authorize(
        &Roles::from(["account.executive"]),
        "invoice",
        "view",
    )?;
    assert!(!decision.authorized);
    assert!(decision.matching_permissions.is_empty());

    let decision = adjudicator.authorize(
        &Roles::from(["regional.manager"]),
        "account",
        "edit",
    )?;
    assert!(!decision.authorized);
    Ok(())
}

#[test]
fn permits_end_to_end() -> anyhow::Result<()> {
    let adjudicator = Adjudicator::from(account_catalog()?);

    let decision = adjudicator.authorize(
        &Roles::from(["account.executive"]),
        "account",
        "edit",
    )?;
    assert!(decision.permits(&acme_north_account()));
    assert!(!decision.permits(&ResourceInstance::from([
        ("company", "globex"),
        ("region", "north"),
    ])));

    // the manager reaches the same account through the region clause
    let decision = adjudicator.authorize(
        &Roles::from(["regional.manager"]),
        "account",
        "view",
    )?;
    assert!(decision.permits(&acme_north_account()));
    assert!(!decision.permits(&ResourceInstance::from([
        ("company", "acme"),
        ("region", "west"),
    ])));

    // either role's clause suffices when both are granted
    let decision = adjudicator.authorize(
        &Roles::from(["account.executive", "regional.manager"]),
        "account",
        "view",
    )?;
    assert!(decision.permits(&ResourceInstance::from([
        ("company", "globex"),
        ("region", "east"),
    ])));
    assert!(!decision.permits(&ResourceInstance::from([
        ("company", "globex"),
        ("region", "west"),
    ])));
    Ok(())
}

#[test]
fn formula_round_trips() -> anyhow::Result<()> {
    let adjudicator = Adjudicator::from(account_catalog()?);
    let decision = adjudicator.authorize(
        &Roles::from(["account.executive"]),
        "account",
        "view",
    )?;

    // a decision handed over the wire evaluates the same
    let decision: Decision = serde_json::from_str(
        &serde_json::to_string(&decision)?,
    )?;
    assert!(decision.permits(&acme_north_account()));
    Ok(())
}

#[test]
fn test_send_sync_adjudicator() {
    fn is_send_sync<T: Send + Sync>() { }
    is_send_sync::<Adjudicator>();
}
