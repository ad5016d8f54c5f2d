/// Represents a user in the roster.
///
/// Users are created by the add-user form and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Uppercased first character of the name, used as the grouping key.
    ///
    /// An empty name yields an empty key rather than failing.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect::<String>())
            .unwrap_or_default()
    }

    /// Case-insensitive substring match against `needle`.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}
