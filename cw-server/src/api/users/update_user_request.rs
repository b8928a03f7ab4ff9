use serde::Deserialize;

/// Partial update for a user. All fields optional; unknown keys are
/// rejected rather than silently dropped.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpdateUserRequest {
    pub name: Option<String>,

    pub email: Option<String>,

    /// Re-hashed before storage when supplied
    pub password: Option<String>,

    pub phone: Option<String>,

    pub document_type: Option<String>,

    pub document_number: Option<String>,

    pub is_admin: Option<bool>,
}

impl UpdateUserRequest {
    /// True when the request names no field at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.phone.is_none()
            && self.document_type.is_none()
            && self.document_number.is_none()
            && self.is_admin.is_none()
    }
}
