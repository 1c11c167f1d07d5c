use anyhow::{Result, ensure};
use platform_upstream::UpstreamSettings;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub cors_allowed_origins: Vec<String>,
    pub upstream: UpstreamSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .filter_map(|raw| {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect::<Vec<_>>();

        let upstream = UpstreamSettings::from_env();
        ensure!(
            !upstream.base_url.is_empty(),
            "UPSTREAM_BASE_URL must not be blank"
        );

        Ok(Self {
            cors_allowed_origins,
            upstream,
        })
    }
}
