pub mod forecast;
pub mod location;

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, Response, header::CONTENT_TYPE};
use serde::Serialize;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

pub(crate) fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .context("building http client failed")
}

pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// POSTs `body` as UTF-8 JSON and fails on any non-success status.
pub(crate) async fn post_json<B: Serialize>(
    client: &Client,
    url: &str,
    body: &B,
    what: &str,
) -> Result<Response> {
    let payload = serde_json::to_vec(body).with_context(|| format!("encoding {what} body failed"))?;
    client
        .post(url)
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        .body(payload)
        .send()
        .await
        .with_context(|| format!("{what} request failed"))?
        .error_for_status()
        .with_context(|| format!("{what} request returned non-success status"))
}
