use anyhow::Context;
use lazy_static::lazy_static;
use reqwest::Response;
use reqwest_tracing::TracingMiddleware;
use url::Url;

use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};

pub use reqwest::StatusCode;

lazy_static! {
    static ref CLIENT: ClientWithMiddleware = ClientBuilder::new(reqwest::Client::new())
        .with(TracingMiddleware::default())
        .build();
}

pub struct HttpClient;

impl HttpClient {
    async fn get(url: Url) -> anyhow::Result<Response> {
        CLIENT
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to fetch request from {url}"))
    }

    /// Returns the status code alongside the body so the caller can decide
    /// what a non-success response means.
    pub async fn get_text_with_status(url: Url) -> anyhow::Result<(StatusCode, String)> {
        let response = Self::get(url).await?;
        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to get text response")?;
        Ok((status, body))
    }
}
