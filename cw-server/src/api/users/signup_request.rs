use serde::Deserialize;

/// Signup body. Required fields are modelled as options so that presence
/// is checked by the business logic and reported as a field-level
/// validation error rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    /// Display name (required)
    #[serde(default)]
    pub name: Option<String>,

    /// Login key, unique across all users (required)
    #[serde(default)]
    pub email: Option<String>,

    /// Plaintext password; hashed before anything is stored (required)
    #[serde(default)]
    pub password: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    /// Document kind, e.g. "CPF" or "CNPJ"
    #[serde(default)]
    pub document_type: Option<String>,

    /// Unique when present
    #[serde(default)]
    pub document_number: Option<String>,

    /// Defaults to false when unset
    #[serde(default)]
    pub is_admin: bool,
}
