use std::ops::Deref;
use super::Roles;

impl Roles {
    pub fn contains(&self, role: &str) -> bool {
        self.0.iter().any(|granted| granted == role)
    }
}

impl From<Vec<String>> for Roles {
    fn from(roles: Vec<String>) -> Self {
        Self(roles)
    }
}

impl<const N: usize> From<[&str; N]> for Roles {
    fn from(roles: [&str; N]) -> Self {
        roles.iter()
            .map(|role| role.to_string())
            .collect()
    }
}

impl FromIterator<String> for Roles {
    fn from_iter<I: IntoIterator<Item=String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for Roles {
    type Target = Vec<String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
