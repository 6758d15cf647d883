//! Outbound POSTs to forward-chain targets.

use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use thiserror::Error;
use tracing::debug;

/// Why a single target did not accept a forwarded action.
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("target responded with {0}")]
    Status(StatusCode),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Outcome of one fan-out job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForwardReport {
    pub delivered: usize,
    pub failed: usize,
}

/// POST `json` to `url` as `application/json`.
///
/// Only a 200 counts as delivered. The response body is never read.
pub async fn forward_one(client: &Client, url: &str, json: &str) -> Result<(), ForwardError> {
    let resp = client
        .post(url)
        .header(CONTENT_TYPE, "application/json")
        .body(json.to_owned())
        .send()
        .await?;

    match resp.status() {
        StatusCode::OK => Ok(()),
        status => Err(ForwardError::Status(status)),
    }
}

/// Forward `json` to every target in order.
///
/// A failing target is logged and skipped; the remaining targets are still tried.
pub async fn forward_all(client: &Client, targets: &[String], json: &str) -> ForwardReport {
    let mut report = ForwardReport::default();

    for url in targets {
        match forward_one(client, url, json).await {
            Ok(()) => {
                debug!(url = %url, "forward_delivered");
                report.delivered += 1;
            }
            Err(ForwardError::Status(status)) => {
                debug!(
                    url = %url,
                    status_code = status.as_u16(),
                    payload = %json,
                    "forward_rejected"
                );
                report.failed += 1;
            }
            Err(e) => {
                debug!(
                    url = %url,
                    timeout = is_timeout(&e),
                    error = %e,
                    payload = %json,
                    "forward_failed"
                );
                report.failed += 1;
            }
        }
    }

    debug!(
        targets = targets.len(),
        delivered = report.delivered,
        failed = report.failed,
        "forward_job_complete"
    );

    report
}

fn is_timeout(e: &ForwardError) -> bool {
    matches!(e, ForwardError::Transport(err) if err.is_timeout())
}
