//! Exercises the mutation client against a served instance, including the
//! failure paths where no reload must happen.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use ipam_platform::client::{AllocationClient, ClientError};
use ipam_platform::routes::{create_router, AppState};
use ipam_platform::store::AllocationStore;

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn serve_platform() -> (AllocationStore, String) {
    let store = AllocationStore::in_memory().await.unwrap();
    let app = create_router(Arc::new(AppState {
        store: store.clone(),
    }));
    let url = serve(app).await;
    (store, url)
}

#[tokio::test]
async fn delete_roundtrip_reloads_the_list() {
    let (store, url) = serve_platform().await;
    store.insert("10.0.0.1", 50).await.unwrap();
    store.insert("10.0.0.2", 20).await.unwrap();

    let client = AllocationClient::new(url.as_str()).unwrap();
    let entries = client.delete("10.0.0.1").await.unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].address, "10.0.0.2");
}

#[tokio::test]
async fn fetch_allocations_reads_the_live_list() {
    let (store, url) = serve_platform().await;
    store.insert("192.168.1.1", 50).await.unwrap();

    let client = AllocationClient::new(url.as_str()).unwrap();
    let entries = client.fetch_allocations().await.unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].address, "192.168.1.1");
    assert_eq!(entries[0].host_count, 50);
}

#[tokio::test]
async fn failed_delete_reports_the_status_and_skips_the_reload() {
    // A backend whose delete endpoint always falls over.
    let app = Router::new().route(
        "/supprimer/:adresse",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let url = serve(app).await;

    let client = AllocationClient::new(url.as_str()).unwrap();
    match client.delete("10.0.0.1").await {
        Err(ClientError::Status(status)) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    // Grab a port, then free it so nothing is listening there.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = AllocationClient::new(format!("http://{addr}")).unwrap();
    match client.delete("10.0.0.1").await {
        Err(ClientError::Transport(_)) => {}
        other => panic!("expected a transport error, got {other:?}"),
    }
}
