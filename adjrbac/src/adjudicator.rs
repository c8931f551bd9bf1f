use adjcore::permission::Permissions;

/// Answers authorization requests against a digested permission
/// catalog.
///
/// Construction is `From<Permissions>`; the catalog is immutable from
/// then on, so a single `Adjudicator` may serve concurrent requests.
#[derive(Clone, Debug, Default)]
pub struct Adjudicator {
    catalog: Permissions,
}

mod impls;
