//! Static file service
//!
//! A thin composition over `tower_http`'s `ServeDir`: the generic static
//! file handler is configured with the serving root directly rather than
//! specialized through a wrapper type. `ServeDir` supplies path resolution
//! under the root, MIME inference, 404 on miss, and traversal protection.

use anyhow::{Context, Result};
use axum::Router;
use localpage_core::Config;
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

/// Build the router serving `config.serve_dir` at the URL root.
pub fn router(config: &Config) -> Router {
    let middleware_stack = ServiceBuilder::new().layer(TraceLayer::new_for_http());

    Router::new()
        .fallback_service(ServeDir::new(&config.serve_dir))
        .layer(middleware_stack)
}

/// Bind the listener and serve until the owning task is aborted.
///
/// A bind failure (port taken, permission denied) returns `Err`; the caller
/// observes it through the task's join handle instead of it dying silently
/// in the background.
pub async fn run(config: Config) -> Result<()> {
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Local server started on {}", addr);
    info!("Access URL: {}", config.target_url());
    info!("Press Ctrl+C to stop the server");

    axum::serve(listener, router(&config)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::fs;
    use tempfile::tempdir;
    use tower::ServiceExt;

    fn config_for(dir: &std::path::Path) -> Config {
        Config {
            serve_dir: dir.to_path_buf(),
            ..Config::default()
        }
    }

    async fn get(app: Router, path: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn serves_target_file_with_html_content_type() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Me.html"), "<h1>hi</h1>").unwrap();

        let app = router(&config_for(dir.path()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/Me.html")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.starts_with("text/html"));

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"<h1>hi</h1>");
    }

    #[tokio::test]
    async fn returns_not_found_for_missing_path() {
        let dir = tempdir().unwrap();

        let app = router(&config_for(dir.path()));
        let (status, _) = get(app, "/nothing-here.html").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn denies_path_traversal_outside_root() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("site");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("safe.html"), "OK").unwrap();
        fs::write(dir.path().join("secret.txt"), "NOPE").unwrap();

        let app = router(&config_for(&root));

        let (status, body) = get(app.clone(), "/safe.html").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"OK");

        let (status, body) = get(app, "/../secret.txt").await;
        assert_ne!(status, StatusCode::OK);
        assert_ne!(&body[..], b"NOPE");
    }

    #[tokio::test]
    async fn repeated_requests_return_identical_content() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Me.html"), "<h1>hi</h1>").unwrap();

        let app = router(&config_for(dir.path()));

        let (first_status, first_body) = get(app.clone(), "/Me.html").await;
        let (second_status, second_body) = get(app, "/Me.html").await;

        assert_eq!(first_status, StatusCode::OK);
        assert_eq!(second_status, StatusCode::OK);
        assert_eq!(first_body, second_body);
    }

    #[tokio::test]
    async fn infers_content_type_from_extension() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("style.css"), "body { margin: 0; }").unwrap();

        let app = router(&config_for(dir.path()));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/style.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.starts_with("text/css"));
    }
}
