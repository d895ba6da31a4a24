use std::time::Duration;

/// Default request timeout for the general-purpose client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client-wide configuration shared by every entity service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base address of the REST backend, without a trailing slash.
    pub base_url: String,
    /// Bearer token attached to every outgoing request when present.
    pub bearer_token: Option<String>,
    pub timeout: Duration,
    /// When set, an unrecognized list envelope is an error instead of
    /// an empty page.
    pub strict_envelopes: bool,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            bearer_token: None,
            timeout: DEFAULT_TIMEOUT,
            strict_envelopes: false,
        }
    }

    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_strict_envelopes(mut self, strict: bool) -> Self {
        self.strict_envelopes = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = ClientConfig::new("http://localhost:3000/");
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("http://localhost:3000");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.bearer_token.is_none());
        assert!(!config.strict_envelopes);
    }
}
