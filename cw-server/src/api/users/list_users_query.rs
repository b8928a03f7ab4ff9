use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    /// Optional name/email substring filter
    #[serde(default)]
    pub q: Option<String>,
}
