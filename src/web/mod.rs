//! HTTP boundary: routes, error rendering and the server loop.

pub mod error;
pub mod handlers;

use axum::http::header::{HeaderValue, CACHE_CONTROL};
use axum::response::Redirect;
use axum::routing::{delete, get, get_service, post};
use axum::Router;
use std::io;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::core::roster::RosterService;
use crate::core::CatalogStore;
use crate::utils::error::{Result, RosterError};

/// Builds the API router around a shared roster service.
///
/// When `static_dir` is set it is served under `/static` and `/` redirects to
/// its `index.html`.
pub fn router<S: CatalogStore + 'static>(
    service: Arc<RosterService<S>>,
    static_dir: Option<&Path>,
) -> Router {
    let mut app = Router::new()
        .route("/activities", get(handlers::list_activities_handler::<S>))
        .route(
            "/activities/:activity_name/signup",
            post(handlers::signup_handler::<S>),
        )
        .route(
            "/activities/:activity_name/participants",
            delete(handlers::unregister_handler::<S>),
        );

    if let Some(dir) = static_dir {
        app = app
            .route("/", get(|| async { Redirect::to("/static/index.html") }))
            .nest_service("/static", get_service(ServeDir::new(dir)));
    }

    app.layer(SetResponseHeaderLayer::if_not_present(
        CACHE_CONTROL,
        HeaderValue::from_static("no-store"),
    ))
    .with_state(service)
}

/// Binds `host:port`. When the port is already in use and `allow_fallback`
/// is set, retries once on `port + 1`.
pub async fn bind_with_fallback(
    host: &str,
    port: u16,
    allow_fallback: bool,
) -> Result<TcpListener> {
    let addr = parse_addr(host, port)?;

    match TcpListener::bind(addr).await {
        Ok(listener) => Ok(listener),
        Err(e) if allow_fallback && should_retry_on_next_port(e.kind(), port) => {
            let fallback = parse_addr(host, port + 1)?;
            tracing::warn!("⚠️  Could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            Ok(TcpListener::bind(fallback).await?)
        }
        Err(e) => Err(e.into()),
    }
}

fn should_retry_on_next_port(kind: io::ErrorKind, port: u16) -> bool {
    kind == io::ErrorKind::AddrInUse && port != 0 && port < u16::MAX
}

fn parse_addr(host: &str, port: u16) -> Result<SocketAddr> {
    format!("{}:{}", host, port)
        .parse()
        .map_err(|e| RosterError::InvalidConfigValueError {
            field: "server.host".to_string(),
            value: host.to_string(),
            reason: format!("cannot parse socket address: {}", e),
        })
}

/// Serves `app` until ctrl-c is received.
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_addr() {
        assert!(parse_addr("127.0.0.1", 8000).is_ok());
        let err = parse_addr("not a host", 8000).unwrap_err();
        assert!(matches!(err, RosterError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_only_addr_in_use_is_retried() {
        assert!(should_retry_on_next_port(io::ErrorKind::AddrInUse, 8000));
        assert!(!should_retry_on_next_port(io::ErrorKind::PermissionDenied, 80));
        assert!(!should_retry_on_next_port(io::ErrorKind::AddrNotAvailable, 8000));
        assert!(!should_retry_on_next_port(io::ErrorKind::AddrInUse, 0));
        assert!(!should_retry_on_next_port(io::ErrorKind::AddrInUse, u16::MAX));
    }

    #[tokio::test]
    async fn test_bind_falls_back_to_next_port() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        // 下一個埠也可能被占用，只在成功時檢查
        if let Ok(listener) = bind_with_fallback("127.0.0.1", port, true).await {
            assert_eq!(listener.local_addr().unwrap().port(), port + 1);
        }
    }

    #[tokio::test]
    async fn test_explicit_port_does_not_fall_back() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let err = bind_with_fallback("127.0.0.1", port, false)
            .await
            .unwrap_err();
        match err {
            RosterError::IoError(e) => assert_eq!(e.kind(), io::ErrorKind::AddrInUse),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
