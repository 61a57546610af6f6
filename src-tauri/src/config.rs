//! Data Source Configuration

/// Where the photo list comes from
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/photos";

/// Developer override for the endpoint
pub const ENDPOINT_ENV: &str = "PHOTO_SWIPE_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub endpoint: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl SourceConfig {
    /// Defaults, with `PHOTO_SWIPE_ENDPOINT` taking precedence when set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(ENDPOINT_ENV) {
            Some(endpoint) if !endpoint.trim().is_empty() => Self {
                endpoint: endpoint.trim().to_string(),
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = SourceConfig::from_lookup(|_| None);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_env_override() {
        let config = SourceConfig::from_lookup(|key| {
            assert_eq!(key, ENDPOINT_ENV);
            Some(" http://localhost:8080/photos ".to_string())
        });
        assert_eq!(config.endpoint, "http://localhost:8080/photos");
    }

    #[test]
    fn test_blank_override_ignored() {
        let config = SourceConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config, SourceConfig::default());
    }
}
