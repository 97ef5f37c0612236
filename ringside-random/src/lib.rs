//! RINGSIDE Random - random.org draw client
//!
//! `RandomSource` implementation backed by a random.org-style endpoint
//! returning one decimal fraction in plain text per request.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error};

use ringside_core::{RandomError, RandomSource};

/// Default endpoint: one decimal fraction, two decimal places, plain text
pub const DEFAULT_URL: &str =
    "https://www.random.org/decimal-fractions/?num=1&dec=2&col=1&format=plain&rnd=new";

/// Environment variable overriding the draw endpoint
pub const URL_ENV_VAR: &str = "RANDOM_ORG_URL";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP-backed random draw source with a 5-second request deadline.
pub struct RandomOrgSource {
    client: reqwest::Client,
    url: String,
}

impl RandomOrgSource {
    /// Client against the env-configured endpoint, falling back to
    /// [`DEFAULT_URL`].
    pub fn from_env() -> Result<Self, RandomError> {
        let url = std::env::var(URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_URL.to_string());
        Self::with_url(url)
    }

    pub fn with_url(url: impl Into<String>) -> Result<Self, RandomError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| RandomError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RandomSource for RandomOrgSource {
    async fn draw(&mut self) -> Result<f64, RandomError> {
        debug!(url = %self.url, "fetching random fraction");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(map_reqwest)?
            .error_for_status()
            .map_err(map_reqwest)?;

        let body = response.text().await.map_err(map_reqwest)?;
        let value = parse_fraction(&body);
        if let Err(ref err) = value {
            error!(%err, "random.org draw failed");
        }
        value
    }
}

fn map_reqwest(err: reqwest::Error) -> RandomError {
    if err.is_timeout() {
        RandomError::Timeout
    } else {
        RandomError::Transport(err.to_string())
    }
}

/// Parse the plain-text body of a decimal-fraction response.
fn parse_fraction(body: &str) -> Result<f64, RandomError> {
    let trimmed = body.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| RandomError::MalformedResponse(trimmed.to_string()))
}
