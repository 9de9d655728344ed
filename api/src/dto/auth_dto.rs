use serde::Deserialize;

/// Query parameters for `POST /auth`
#[derive(Debug, Clone, Deserialize)]
pub struct AuthQuery {
    /// Only the literal value `"true"` selects the forced-expired path
    pub expired: Option<String>,
}

impl AuthQuery {
    pub fn wants_expired(&self) -> bool {
        self.expired.as_deref() == Some("true")
    }
}

/// Optional JSON body for `POST /auth`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthRequest {
    pub username: Option<String>,
}
