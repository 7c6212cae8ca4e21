/// Teacher account. Keyed by username; read-only for this service.
///
/// Not serializable: responses go through `TeacherResponse`, which omits the hash.
#[derive(Debug, Clone)]
pub struct Teacher {
    /// Primary key. Always equal to `username`.
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub role: String,
    /// Argon2 PHC string.
    pub password_hash: String,
}

impl Teacher {
    pub fn new(
        username: impl Into<String>,
        display_name: impl Into<String>,
        role: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        let username = username.into();
        Self {
            id: username.clone(),
            username,
            display_name: display_name.into(),
            role: role.into(),
            password_hash: password_hash.into(),
        }
    }
}
