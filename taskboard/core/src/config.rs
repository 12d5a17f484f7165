use serde::Deserialize;

/// Where the remote listing lives.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Endpoint returning the JSON array of listing elements.
    #[serde(default)]
    pub api_url: String,
}

/// Both names the endpoint is known by; `api_url` wins when both are set.
#[derive(Debug, Default, Deserialize)]
struct RawApiConfig {
    #[serde(default)]
    api_url: Option<String>,
    #[serde(default)]
    vite_api_url: Option<String>,
}

impl From<RawApiConfig> for ApiConfig {
    fn from(raw: RawApiConfig) -> Self {
        let api_url = [raw.api_url, raw.vite_api_url]
            .into_iter()
            .flatten()
            .find(|url| !url.is_empty())
            .unwrap_or_default();
        ApiConfig { api_url }
    }
}

/// Value baked into the bundle at build time, for targets without a process environment.
const BUILD_TIME_API_URL: Option<&str> = match option_env!("API_URL") {
    Some(url) => Some(url),
    None => option_env!("VITE_API_URL"),
};

impl ApiConfig {
    /// Load configuration from environment variables (`API_URL`, or `VITE_API_URL`).
    pub fn from_env() -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        Self::from_settings(settings)
    }

    fn from_settings(settings: config::Config) -> anyhow::Result<Self> {
        let raw: RawApiConfig = settings.try_deserialize()?;
        Ok(raw.into())
    }

    /// Runtime environment, then the build-time value, then an empty URL.
    pub fn resolve() -> Self {
        let runtime = Self::from_env().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "could not read API configuration from environment");
            Self::default()
        });
        runtime.or_build_time(BUILD_TIME_API_URL)
    }

    fn or_build_time(self, build_time: Option<&str>) -> Self {
        if !self.api_url.is_empty() {
            return self;
        }
        ApiConfig {
            api_url: build_time.unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_api_url_setting() {
        let settings = config::Config::builder()
            .set_override("api_url", "https://example.com/elements")
            .unwrap()
            .build()
            .unwrap();

        let config = ApiConfig::from_settings(settings).unwrap();

        assert_eq!(config.api_url, "https://example.com/elements");
    }

    #[test]
    fn accepts_vite_api_url_alias() {
        let settings = config::Config::builder()
            .set_override("vite_api_url", "https://example.com/vite")
            .unwrap()
            .build()
            .unwrap();

        let config = ApiConfig::from_settings(settings).unwrap();

        assert_eq!(config.api_url, "https://example.com/vite");
    }

    #[test]
    fn api_url_wins_over_vite_alias() {
        let settings = config::Config::builder()
            .set_override("api_url", "https://example.com/elements")
            .unwrap()
            .set_override("vite_api_url", "https://example.com/vite")
            .unwrap()
            .build()
            .unwrap();

        let config = ApiConfig::from_settings(settings).unwrap();

        assert_eq!(config.api_url, "https://example.com/elements");
    }

    #[test]
    fn missing_setting_defaults_to_empty() {
        let settings = config::Config::builder().build().unwrap();

        let config = ApiConfig::from_settings(settings).unwrap();

        assert_eq!(config.api_url, "");
    }

    #[test]
    fn runtime_value_wins_over_build_time() {
        let config = ApiConfig {
            api_url: "https://runtime".to_string(),
        };

        assert_eq!(
            config.or_build_time(Some("https://baked")).api_url,
            "https://runtime"
        );
    }

    #[test]
    fn falls_back_to_build_time_then_empty() {
        assert_eq!(
            ApiConfig::default().or_build_time(Some("https://baked")).api_url,
            "https://baked"
        );
        assert_eq!(ApiConfig::default().or_build_time(None).api_url, "");
    }
}
