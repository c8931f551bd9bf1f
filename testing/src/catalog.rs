use adjcore::{
    instance::ResourceInstance,
    permission::Permissions,
};

/// The canned catalog for the account management scenarios.
///
/// Executives may work on accounts of the company their role is
/// templated to, regional managers may view accounts within their
/// regions, and auditors view accounts unconditionally while being
/// barred from invoices outright.
pub fn account_catalog() -> anyhow::Result<Permissions> {
    Ok(serde_json::from_str(r#"[
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
            "role": "regional.manager",
            "resource": "?",
            "scopes": "?",
            "effect": "allow",
            "conditions": [
                {"attribute": "region", "operator": "in", "value": ["north", "east"]}
            ]
        },
        {
            "id": 3,
            "role": "regional.manager",
            "resource": "?",
            "scopes": "?",
            "effect": "allow",
            "conditions": [
                {"attribute": "region", "operator": "in", "value": ["south"]}
            ]
        },
        {
            "id": 4,
            "role": "account.executive",
            "resource": "account",
            "scopes": ["view", "edit"],
            "effect": "allow",
            "conditions": [
                {"attribute": "company", "operator": "equals", "value": "?"}
            ]
        },
        {
            "id": 5,
            "role": "regional.manager",
            "resource": "account",
            "scopes": ["view"],
            "effect": "allow",
            "conditions": [
                {"attribute": "region", "operator": "in", "value": "?"}
            ]
        },
        {
            "id": 6,
            "role": "account.auditor",
            "resource": "account",
            "scopes": ["view"],
            "effect": "allow"
        },
        {
            "id": 7,
            "role": "account.auditor",
            "resource": "invoice",
            "scopes": "*",
            "effect": "deny"
        },
        {
            "id": 8,
            "role": "account.auditor",
            "resource": "invoice",
            "scopes": ["view"],
            "effect": "allow"
        }
    ]"#)?)
}

/// An account instance within the reach of the canned executive and
/// northern manager grants.
pub fn acme_north_account() -> ResourceInstance {
    ResourceInstance::from([
        ("company", "acme"),
        ("region", "north"),
    ])
}
