use serde::Deserialize;
use std::env;
use url::Url;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,
    pub environment: String,

    // Form defaults
    pub channel: String,
    pub chaincode: String,
    pub chaincode_version: String,

    // Chaincode backend
    pub url_invocation: String,
    pub url_query: String,
    pub backend_timeout_secs: Option<u64>,

    // CORS
    pub cors_allowed_origins: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            channel: env::var("CHANNEL").unwrap_or_default(),
            chaincode: env::var("CHAINCODE").unwrap_or_default(),
            chaincode_version: env::var("CHAINCODE_VERSION").unwrap_or_default(),

            url_invocation: required_var("URL_INVOCATION")?,
            url_query: required_var("URL_QUERY")?,
            backend_timeout_secs: parse_timeout_secs(env::var("BACKEND_TIMEOUT_SECS").ok()),

            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string()),
        })
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure_backend_url("URL_INVOCATION", &self.url_invocation)?;
        ensure_backend_url("URL_QUERY", &self.url_query)?;

        if self.channel.trim().is_empty() {
            tracing::warn!("CHANNEL is empty; forms will start without a channel");
        }
        if self.chaincode.trim().is_empty() || self.chaincode_version.trim().is_empty() {
            tracing::warn!("CHAINCODE or CHAINCODE_VERSION is empty; forms will start blank");
        }
        if self.cors_allowed_origins.trim().is_empty() {
            tracing::warn!("CORS_ALLOWED_ORIGINS is empty; requests may be blocked");
        }

        Ok(())
    }
}

fn required_var(name: &str) -> anyhow::Result<String> {
    env::var(name).map_err(|_| anyhow::anyhow!("{} is not set", name))
}

// Zero or unparsable values leave the client without a timeout.
fn parse_timeout_secs(raw: Option<String>) -> Option<u64> {
    raw.and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|value| *value > 0)
}

fn ensure_backend_url(name: &str, raw: &str) -> anyhow::Result<()> {
    if raw.trim().is_empty() {
        anyhow::bail!("{} is empty", name);
    }
    let parsed = Url::parse(raw.trim())
        .map_err(|e| anyhow::anyhow!("{} is not a valid URL: {}", name, e))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        anyhow::bail!("{} must use http or https", name);
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn test_config(url_invocation: &str, url_query: &str) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 3000,
        environment: "development".to_string(),
        channel: "mychannel".to_string(),
        chaincode: "monopoly".to_string(),
        chaincode_version: "v1".to_string(),
        url_invocation: url_invocation.to_string(),
        url_query: url_query.to_string(),
        backend_timeout_secs: None,
        cors_allowed_origins: "*".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_http_backends() {
        let config = test_config("http://localhost:8080/invoke", "https://ledger.local/query");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_invocation_url() {
        let config = test_config("  ", "http://localhost:8080/query");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("URL_INVOCATION"));
    }

    #[test]
    fn validate_rejects_non_http_scheme() {
        let config = test_config("http://localhost:8080/invoke", "ftp://localhost/query");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("URL_QUERY"));
    }

    #[test]
    fn validate_rejects_relative_url() {
        let config = test_config("/invoke", "http://localhost:8080/query");
        assert!(config.validate().is_err());
    }

    #[test]
    fn parse_timeout_secs_ignores_zero_and_garbage() {
        assert_eq!(parse_timeout_secs(None), None);
        assert_eq!(parse_timeout_secs(Some("0".to_string())), None);
        assert_eq!(parse_timeout_secs(Some("soon".to_string())), None);
        assert_eq!(parse_timeout_secs(Some(" 15 ".to_string())), Some(15));
    }

    #[test]
    fn from_env_names_missing_backend_url_and_reads_timeout() {
        // Only test in the crate that touches these variables.
        env::remove_var("URL_INVOCATION");
        env::set_var("URL_QUERY", "http://localhost:8080/query");
        let err = Config::from_env().unwrap_err();
        assert_eq!(err.to_string(), "URL_INVOCATION is not set");

        env::set_var("URL_INVOCATION", "http://localhost:8080/invoke");
        env::set_var("BACKEND_TIMEOUT_SECS", "0");
        let config = Config::from_env().unwrap();
        assert_eq!(config.url_invocation, "http://localhost:8080/invoke");
        assert_eq!(config.backend_timeout_secs, None);

        env::set_var("BACKEND_TIMEOUT_SECS", "20");
        assert_eq!(Config::from_env().unwrap().backend_timeout_secs, Some(20));

        env::remove_var("BACKEND_TIMEOUT_SECS");
        env::remove_var("URL_INVOCATION");
        env::remove_var("URL_QUERY");
    }
}
