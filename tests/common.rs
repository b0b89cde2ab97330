// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Quiet logging, inventory fixtures, and a one-shot local HTTP responder
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `pantry_tracker`

use pantry_tracker::models::{FoodRecord, Macros};
use pantry_tracker::store::InventoryStore;
use std::sync::Once;
use std::time::Duration;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Store in a fresh temporary directory; keep the `TempDir` alive for the test
pub fn temp_store() -> (TempDir, InventoryStore) {
    init_test_logging();
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = InventoryStore::new(dir.path().join("inventory.json"));
    (dir, store)
}

/// Three distinct records
pub fn sample_inventory() -> Vec<FoodRecord> {
    vec![
        FoodRecord::with_details(
            "Egg, whole, raw, fresh",
            171_287,
            Macros::new(12.6, 9.51, 0.72, 143.0),
            "2026-11-01",
            12,
        ),
        FoodRecord::new(
            "Apples, fuji, with skin, raw",
            1_750_340,
            Macros::new(0.148, 0.162, 15.7, 63.0),
        ),
        FoodRecord::with_details(
            "Milk, whole, 3.25% milkfat, with added vitamin D",
            746_782,
            Macros::new(3.27, 3.2, 4.63, 60.0),
            "next friday",
            -1,
        ),
    ]
}

/// Serve exactly one HTTP response on a local port
///
/// Returns the base URL and a handle resolving to the raw request head.
/// With `delay` set, the response is held back that long.
pub async fn serve_once(
    status_line: &'static str,
    body: String,
    delay: Option<Duration>,
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0_u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;

        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{addr}"), handle)
}
