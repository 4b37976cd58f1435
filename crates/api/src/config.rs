//! Backend configuration for the persistence boundary.

/// Base URL of the hosted database's REST interface.
pub const ENV_BASE_URL: &str = "VELOGO_SUPABASE_URL";

/// Privileged service-role key. Server-side only; never shipped to clients.
pub const ENV_SERVICE_ROLE: &str = "VELOGO_SERVICE_ROLE";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub service_role: String,
}

impl ApiConfig {
    /// Read the configuration from the environment.
    ///
    /// `None` when either variable is absent or empty; callers degrade to
    /// the config-error response instead of crashing.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var(ENV_BASE_URL).ok().filter(|v| !v.is_empty())?;
        let service_role = std::env::var(ENV_SERVICE_ROLE)
            .ok()
            .filter(|v| !v.is_empty())?;
        Some(Self {
            base_url,
            service_role,
        })
    }
}
