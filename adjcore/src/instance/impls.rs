use std::collections::HashMap;
use super::ResourceInstance;

impl ResourceInstance {
    /// The value of the named attribute, or `None` when the instance
    /// does not carry it.
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.0.get(attribute)
            .map(|value| value.as_str())
    }
}

impl From<HashMap<String, String>> for ResourceInstance {
    fn from(attributes: HashMap<String, String>) -> Self {
        Self(attributes)
    }
}

impl FromIterator<(String, String)> for ResourceInstance {
    fn from_iter<I: IntoIterator<Item=(String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for ResourceInstance {
    fn from(attributes: [(&str, &str); N]) -> Self {
        attributes.into_iter()
            .map(|(attribute, value)| (attribute.to_string(), value.to_string()))
            .collect()
    }
}
