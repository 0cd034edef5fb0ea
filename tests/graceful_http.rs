//! End-to-end graceful shutdown tests against a live HTTP server.

use std::time::Duration;

use axum::{routing::get, Router};
use tokio::time::sleep;

use graceful_serve::{serve_until_shutdown, HttpServer, ServeError, Shutdown};

#[tokio::test]
async fn in_flight_request_completes_across_shutdown() {
    let shutdown = Shutdown::new();
    let listener = shutdown.listener();

    let app = Router::new().route(
        "/slow",
        get(|| async {
            sleep(Duration::from_millis(300)).await;
            "slow done"
        }),
    );
    let server = HttpServer::new("127.0.0.1:0".parse().unwrap(), app);
    let handle = server.handle();

    let coordinator = tokio::spawn(serve_until_shutdown(
        server,
        Duration::from_secs(2),
        listener,
    ));

    let addr = handle
        .listening()
        .await
        .expect("server should bind successfully");

    let request = tokio::spawn(async move {
        reqwest::get(format!("http://{addr}/slow"))
            .await
            .expect("request should succeed")
            .text()
            .await
            .expect("body should be readable")
    });

    // Let the request reach the handler, then ask for shutdown mid-flight.
    sleep(Duration::from_millis(100)).await;
    shutdown.trigger();

    let outcome = coordinator.await.unwrap();
    assert!(outcome.is_ok(), "drain should succeed: {outcome:?}");

    let body = request.await.unwrap();
    assert_eq!(body, "slow done");
}

#[tokio::test]
async fn slow_handler_past_deadline_reports_drain_failure() {
    let shutdown = Shutdown::new();
    let listener = shutdown.listener();

    let app = Router::new().route(
        "/stuck",
        get(|| async {
            sleep(Duration::from_secs(30)).await;
            "never"
        }),
    );
    let server = HttpServer::new("127.0.0.1:0".parse().unwrap(), app);
    let handle = server.handle();

    let coordinator = tokio::spawn(serve_until_shutdown(
        server,
        Duration::from_millis(300),
        listener,
    ));

    let addr = handle
        .listening()
        .await
        .expect("server should bind successfully");

    let _request = tokio::spawn(async move {
        let _ = reqwest::get(format!("http://{addr}/stuck")).await;
    });

    sleep(Duration::from_millis(100)).await;
    shutdown.trigger();

    let outcome = coordinator.await.unwrap();
    assert!(
        matches!(outcome, Err(ServeError::Drain(_))),
        "expected a drain failure, got: {outcome:?}"
    );
}

#[tokio::test]
async fn bind_failure_is_a_run_loop_error() {
    let shutdown = Shutdown::new();
    let listener = shutdown.listener();

    // Occupy a port, then ask the server to bind it.
    let occupied = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = occupied.local_addr().unwrap();

    let server = HttpServer::new(addr, Router::new());
    let outcome = serve_until_shutdown(server, Duration::from_secs(1), listener).await;

    assert!(
        matches!(outcome, Err(ServeError::RunLoop(_))),
        "expected a run-loop failure, got: {outcome:?}"
    );
    drop(shutdown);
}
