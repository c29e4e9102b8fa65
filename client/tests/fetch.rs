/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use fluentbit_client::{
    Config, Error, FluentBitClient, Snapshot, StorageApi,
};

/// Serve a fixed response on /api/v1/storage from an ephemeral port.
async fn fake_fluentbit(
    status: StatusCode,
    body: &'static str,
) -> SocketAddr {
    let app = Router::new()
        .route("/api/v1/storage", get(move || async move { (status, body) }));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> FluentBitClient {
    FluentBitClient::new(Config::new(addr.ip().to_string(), addr.port()))
}

#[tokio::test]
async fn fetch_decodes_snapshot() {
    let addr = fake_fluentbit(
        StatusCode::OK,
        r#"{"storage_layer":{"chunks":{"total_chunks":2,"mem_chunks":20}}}"#,
    )
    .await;

    let snapshot = client_for(addr).fetch().await.unwrap();
    let expected: Snapshot = serde_json::from_str(
        r#"{"storage_layer":{"chunks":{"total_chunks":2,"mem_chunks":20}}}"#,
    )
    .unwrap();
    assert_eq!(snapshot, expected);
    assert!(snapshot.input_chunks.is_empty());
}

#[tokio::test]
async fn fetch_rejects_non_200() {
    let addr =
        fake_fluentbit(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL SERVER ERROR")
            .await;

    match client_for(addr).fetch().await {
        Err(Error::UnexpectedStatus(500, _)) => (),
        other => panic!("expected UnexpectedStatus(500), got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_rejects_invalid_body() {
    let addr = fake_fluentbit(
        StatusCode::OK,
        r#"{"storage_layer":{"chunks":{"total_chunks":2}}}}"#,
    )
    .await;

    match client_for(addr).fetch().await {
        Err(Error::DeserializeResponse(_)) => (),
        other => panic!("expected DeserializeResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_reports_unreachable_upstream() {
    // Bind and immediately drop a listener to get a port nothing serves.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    match client_for(addr).fetch().await {
        Err(Error::SendRequest(_)) => (),
        other => panic!("expected SendRequest, got {other:?}"),
    }
}
