//! Batch submission over HTTP.
//!
//! A node accepts an encoded `BatchList` as the raw body of a POST to its
//! scabbard batches endpoint. The response body (usually a status link) is
//! handed back unchanged.

use anyhow::{bail, Context, Result};
use reqwest::header::CONTENT_TYPE;

/// The batches endpoint of scabbard service `service` on `circuit`.
///
/// `host` may be a bare `host:port` (HTTP is assumed) or a full URL.
pub fn batches_url(host: &str, circuit: &str, service: &str) -> String {
    let host = host.trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        format!("{host}/scabbard/{circuit}/{service}/batches")
    } else {
        format!("http://{host}/scabbard/{circuit}/{service}/batches")
    }
}

/// POSTs `batch_list` to `url` and returns the response body.
///
/// A non-success status is an error carrying the status and body.
pub async fn submit_batch_list(
    client: &reqwest::Client,
    url: &str,
    batch_list: Vec<u8>,
) -> Result<String> {
    let size = batch_list.len();
    let response = client
        .post(url)
        .header(CONTENT_TYPE, "application/octet-stream")
        .body(batch_list)
        .send()
        .await
        .with_context(|| format!("failed to POST batch list to {url}"))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .context("failed to read node response")?;

    if !status.is_success() {
        bail!("node rejected batch list ({status}): {body}");
    }

    tracing::info!(%url, %status, bytes = size, "batch list submitted");
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Bytes,
        extract::Path,
        http::{HeaderMap, StatusCode},
        routing::post,
        Router,
    };
    use std::net::SocketAddr;

    use transact_sdk::crypto::{Ed25519PrivateKey, Ed25519Signer};
    use transact_sdk::protos::Transaction;
    use transact_sdk::transaction::{
        verify_batch_list, BatchBuilder, BuildTransaction, TransactionBuilder,
    };

    /// A stand-in node: verifies the batch list and answers with a link.
    async fn batches(
        Path((circuit, service)): Path<(String, String)>,
        headers: HeaderMap,
        body: Bytes,
    ) -> (StatusCode, String) {
        if headers.get("content-type").and_then(|v| v.to_str().ok())
            != Some("application/octet-stream")
        {
            return (StatusCode::UNSUPPORTED_MEDIA_TYPE, "bad content type".into());
        }
        match verify_batch_list(&body) {
            Ok(headers) => (
                StatusCode::ACCEPTED,
                format!(
                    "/scabbard/{circuit}/{service}/batch_statuses?ids={}",
                    headers.len()
                ),
            ),
            Err(e) => (StatusCode::BAD_REQUEST, e.to_string()),
        }
    }

    async fn serve() -> (String, tokio::task::JoinHandle<()>) {
        let router = Router::new().route("/scabbard/:circuit/:service/batches", post(batches));
        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        (addr.to_string(), handle)
    }

    fn batch_list_bytes() -> Vec<u8> {
        let signer = Ed25519Signer::new(Ed25519PrivateKey::from_seed(&[1u8; 32]));
        let txn: Transaction = TransactionBuilder::new()
            .with_family_name("intkey")
            .with_family_version("1.0")
            .with_inputs(["1cf126"])
            .with_outputs(["1cf126"])
            .with_payload(b"set a 1".to_vec())
            .build(&signer)
            .unwrap();
        BatchBuilder::new()
            .with_transactions(vec![txn])
            .build(&signer)
            .unwrap()
    }

    #[test]
    fn url_from_host_and_port() {
        assert_eq!(
            batches_url("localhost:8088", "abcDE-12345", "a000"),
            "http://localhost:8088/scabbard/abcDE-12345/a000/batches"
        );
    }

    #[test]
    fn url_from_full_base() {
        assert_eq!(
            batches_url("https://node.example:8443/", "c", "s"),
            "https://node.example:8443/scabbard/c/s/batches"
        );
    }

    #[tokio::test]
    async fn submits_verifiable_batch_list() {
        let (host, handle) = serve().await;
        let url = batches_url(&host, "circ", "svc");

        let body = submit_batch_list(&reqwest::Client::new(), &url, batch_list_bytes())
            .await
            .unwrap();
        assert_eq!(body, "/scabbard/circ/svc/batch_statuses?ids=1");

        handle.abort();
    }

    #[tokio::test]
    async fn rejection_reports_status_and_body() {
        let (host, handle) = serve().await;
        let url = batches_url(&host, "circ", "svc");

        let err = submit_batch_list(&reqwest::Client::new(), &url, vec![0xff, 0x00])
            .await
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("400"), "{message}");

        handle.abort();
    }
}
