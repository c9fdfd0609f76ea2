/// Server-wide settings shared with the request handlers.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// External identity that gets promoted to admin on login.
    pub admin_open_id: Option<String>,
}
