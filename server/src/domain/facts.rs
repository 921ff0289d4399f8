//! Fun-fact lookup against an external number facts provider

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;

use crate::core::constants::{FACT_FALLBACK_NONE, FACT_FALLBACK_UNAVAILABLE};
use crate::domain::number::NumberValue;

/// Source of auxiliary fact text for a number.
///
/// Lookups are best-effort and never fail: every implementation resolves to
/// some string, substituting a fallback when the real text cannot be had.
#[async_trait]
pub trait FactProvider: Send + Sync {
    async fn fun_fact(&self, value: &NumberValue) -> String;
}

/// Client for a numbersapi.com-style provider.
///
/// One request per lookup at `<base_url>/<number>/math`, bounded by the
/// configured timeout. No retries, no caching.
pub struct NumbersApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl NumbersApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(format!("Numlens/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build fact client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl FactProvider for NumbersApiClient {
    async fn fun_fact(&self, value: &NumberValue) -> String {
        let url = format!("{}/{}/math", self.base_url, value);

        let resp = match self.client.get(&url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "Fact request failed");
                return FACT_FALLBACK_UNAVAILABLE.to_string();
            }
        };

        if resp.status() != StatusCode::OK {
            tracing::debug!(url = %url, status = %resp.status(), "Fact provider returned non-200");
            return FACT_FALLBACK_NONE.to_string();
        }

        match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "Failed to read fact body");
                FACT_FALLBACK_UNAVAILABLE.to_string()
            }
        }
    }
}

/// Provider used when outbound lookups are disabled. Always answers with
/// the unavailable fallback, without touching the network.
pub struct DisabledFacts;

#[async_trait]
impl FactProvider for DisabledFacts {
    async fn fun_fact(&self, _value: &NumberValue) -> String {
        FACT_FALLBACK_UNAVAILABLE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::Router;
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::routing::get;

    /// Bind a stub provider on an ephemeral port and return its base URL.
    async fn spawn_stub(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn fact(Path(number): Path<String>) -> String {
        format!("{} is a fine number.", number)
    }

    #[tokio::test]
    async fn returns_body_verbatim_on_200() {
        let base = spawn_stub(Router::new().route("/{number}/math", get(fact))).await;
        let client = NumbersApiClient::new(base, Duration::from_secs(2)).unwrap();

        let text = client.fun_fact(&NumberValue::Int(42)).await;
        assert_eq!(text, "42 is a fine number.");
    }

    #[tokio::test]
    async fn float_is_keyed_by_its_rendered_form() {
        let base = spawn_stub(Router::new().route("/{number}/math", get(fact))).await;
        let client = NumbersApiClient::new(base, Duration::from_secs(2)).unwrap();

        let text = client.fun_fact(&NumberValue::Float(4.5)).await;
        assert_eq!(text, "4.5 is a fine number.");
    }

    #[tokio::test]
    async fn non_200_falls_back_to_no_fact() {
        let router = Router::new().route(
            "/{number}/math",
            get(|| async { (StatusCode::NOT_FOUND, "missing") }),
        );
        let base = spawn_stub(router).await;
        let client = NumbersApiClient::new(base, Duration::from_secs(2)).unwrap();

        let text = client.fun_fact(&NumberValue::Int(7)).await;
        assert_eq!(text, FACT_FALLBACK_NONE);
    }

    #[tokio::test]
    async fn connection_error_falls_back_to_unavailable() {
        // Grab an ephemeral port, then free it so the connect is refused
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            NumbersApiClient::new(format!("http://{}", addr), Duration::from_millis(500)).unwrap();

        let text = client.fun_fact(&NumberValue::Int(7)).await;
        assert_eq!(text, FACT_FALLBACK_UNAVAILABLE);
    }

    #[tokio::test]
    async fn timeout_falls_back_to_unavailable() {
        let router = Router::new().route(
            "/{number}/math",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "too late"
            }),
        );
        let base = spawn_stub(router).await;
        let client = NumbersApiClient::new(base, Duration::from_millis(100)).unwrap();

        let text = client.fun_fact(&NumberValue::Int(7)).await;
        assert_eq!(text, FACT_FALLBACK_UNAVAILABLE);
    }

    #[tokio::test]
    async fn disabled_provider_never_dials_out() {
        let text = DisabledFacts.fun_fact(&NumberValue::Int(7)).await;
        assert_eq!(text, FACT_FALLBACK_UNAVAILABLE);
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let client =
            NumbersApiClient::new("http://example.com/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url, "http://example.com");
    }
}
