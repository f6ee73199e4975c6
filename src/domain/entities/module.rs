//! Hub module summary entity.

/// One module enabled for the current user, as listed on the hub dashboard.
///
/// Fetched fresh on every token change and never cached across sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSummary {
    /// Stable machine identifier.
    pub slug: String,
    /// Display name for the dashboard entry.
    pub name: String,
    /// Optional short description.
    pub description: Option<String>,
    /// Optional URL of the module's own admin surface.
    pub url: Option<String>,
}

impl ModuleSummary {
    /// Creates a module summary with only the required fields.
    #[must_use]
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            description: None,
            url: None,
        }
    }
}
