use serde::{Deserialize, Serialize};

/// The set of role names granted to the principal making a request.
///
/// Role names are open strings assigned by the catalog maintainer; the
/// decision engine only ever tests membership.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Roles(Vec<String>);

mod impls;
