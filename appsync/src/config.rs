use crate::errors::{Error, Result};
use url::Url;

/// Region used when the caller does not configure one.
pub const DEFAULT_REGION: &str = "ap-northeast-1";

/// AWS credential material used to sign outgoing requests.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl Credentials {
    /// Builds credentials from optionally present values, so callers that
    /// collect them from their environment can surface a structured error
    /// instead of panicking.
    pub fn from_parts(
        access_key_id: Option<String>,
        secret_access_key: Option<String>,
        session_token: Option<String>,
    ) -> Result<Self> {
        match (access_key_id, secret_access_key) {
            (Some(access_key_id), Some(secret_access_key)) => Ok(Self {
                access_key_id,
                secret_access_key,
                session_token,
            }),
            _ => Err(Error::Config("AWS credentials are not set".to_string())),
        }
    }
}

/// Connection settings for one AppSync GraphQL API. Always constructed by
/// the caller and passed in; core logic never reads ambient configuration.
#[derive(Debug, Clone)]
pub struct AppSyncConfig {
    pub endpoint: Url,
    pub region: String,
    pub credentials: Credentials,
}

impl AppSyncConfig {
    pub fn new(
        endpoint: &str,
        region: impl Into<String>,
        credentials: Credentials,
    ) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;
        Ok(Self {
            endpoint,
            region: region.into(),
            credentials,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_require_both_keys() {
        assert!(Credentials::from_parts(Some("AKID".to_string()), None, None).is_err());
        assert!(Credentials::from_parts(None, Some("secret".to_string()), None).is_err());
        assert!(
            Credentials::from_parts(Some("AKID".to_string()), Some("secret".to_string()), None)
                .is_ok()
        );
    }

    #[test]
    fn test_config_rejects_malformed_endpoint() {
        let credentials =
            Credentials::from_parts(Some("AKID".to_string()), Some("secret".to_string()), None)
                .unwrap();
        assert!(AppSyncConfig::new("not a url", DEFAULT_REGION, credentials).is_err());
    }
}
