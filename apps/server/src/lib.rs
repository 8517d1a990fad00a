//! Static host for the built console bundle.

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use axum::extract::Request;
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderValue;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use thiserror::Error;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_DIST_DIR: &str = "dist";
const INDEX_FILE: &str = "index.html";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error("server stopped unexpectedly: {0}")]
    Serve(#[source] io::Error),
    #[error("entry document not found at {0}")]
    MissingIndex(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub dist_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT").and_then(|value| value.trim().parse::<u16>().ok()) {
            config.port = port;
        }

        if let Some(host) = lookup("RIKOL_HOST").filter(|value| !value.trim().is_empty()) {
            config.host = host.trim().to_string();
        }

        if let Some(dir) = lookup("RIKOL_DIST_DIR").filter(|value| !value.trim().is_empty()) {
            config.dist_dir = PathBuf::from(dir.trim());
        }

        config
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join(INDEX_FILE)
    }
}

/// MIME type forced for bundle assets, keyed by extension.
pub fn asset_content_type(path: &str) -> Option<&'static str> {
    let extension = path.rsplit_once('.')?.1;
    match extension.to_ascii_lowercase().as_str() {
        "js" | "mjs" => Some("text/javascript"),
        "wasm" => Some("application/wasm"),
        "css" => Some("text/css"),
        _ => None,
    }
}

/// Rewrites Content-Type of successfully served assets; the `index.html` fallback stays HTML.
async fn asset_content_types(request: Request, next: Next) -> Response {
    let forced = asset_content_type(request.uri().path());
    let mut response = next.run(request).await;

    let Some(mime) = forced else {
        return response;
    };
    let is_html = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map_or(false, |value| value.starts_with("text/html"));
    if response.status().is_success() && !is_html {
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(mime));
    }
    response
}

async fn healthz() -> &'static str {
    "ok"
}

pub fn build_router(config: &ServerConfig) -> Router {
    let assets = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(config.index_path()));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(assets)
        .layer(middleware::from_fn(asset_content_types))
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let index = config.index_path();
    if !index.is_file() {
        return Err(ServerError::MissingIndex(index));
    }

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    let local: Option<SocketAddr> = listener.local_addr().ok();
    info!(addr = ?local, dist = %config.dist_dir.display(), "serving console bundle");

    axum::serve(listener, build_router(&config))
        .await
        .map_err(ServerError::Serve)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::*;

    fn bundle() -> (TempDir, ServerConfig) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<!doctype html><div id=\"main\"></div>").unwrap();
        fs::write(dir.path().join("app.js"), "console.log('rikol')").unwrap();
        fs::write(dir.path().join("app.mjs"), "export {}").unwrap();
        fs::write(dir.path().join("app_bg.wasm"), [0u8, 97, 115, 109]).unwrap();
        fs::write(dir.path().join("style.css"), "body{}").unwrap();
        let config = ServerConfig {
            dist_dir: dir.path().to_path_buf(),
            ..ServerConfig::default()
        };
        (dir, config)
    }

    async fn get_path(config: &ServerConfig, path: &str) -> (StatusCode, String, String) {
        let response = build_router(config)
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .map(|value| value.to_str().unwrap().to_string())
            .unwrap_or_default();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8_lossy(&body).into_owned())
    }

    #[test]
    fn content_types_by_extension() {
        assert_eq!(asset_content_type("/app.js"), Some("text/javascript"));
        assert_eq!(asset_content_type("/pkg/app.MJS"), Some("text/javascript"));
        assert_eq!(asset_content_type("/app_bg.wasm"), Some("application/wasm"));
        assert_eq!(asset_content_type("/style.css"), Some("text/css"));
        assert_eq!(asset_content_type("/leads"), None);
        assert_eq!(asset_content_type("/logo.png"), None);
    }

    #[test]
    fn config_reads_lookup() {
        let config = ServerConfig::from_lookup(|key| match key {
            "PORT" => Some("8080".into()),
            "RIKOL_DIST_DIR" => Some("public".into()),
            _ => None,
        });
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.dist_dir, PathBuf::from("public"));
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn bad_port_keeps_default() {
        let config = ServerConfig::from_lookup(|key| (key == "PORT").then(|| "http".to_string()));
        assert_eq!(config.port, 3000);
    }

    #[tokio::test]
    async fn serves_assets_with_expected_types() {
        let (_dir, config) = bundle();

        let (status, content_type, body) = get_path(&config, "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "text/javascript");
        assert!(body.contains("rikol"));

        let (_, content_type, _) = get_path(&config, "/app.mjs").await;
        assert_eq!(content_type, "text/javascript");

        let (status, content_type, _) = get_path(&config, "/app_bg.wasm").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "application/wasm");

        let (_, content_type, _) = get_path(&config, "/style.css").await;
        assert_eq!(content_type, "text/css");
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index() {
        let (_dir, config) = bundle();

        for path in ["/leads/CUST-0001", "/simulation?leads=CUST-0001", "/missing.js"] {
            let (status, content_type, body) = get_path(&config, path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert!(content_type.starts_with("text/html"), "{path}: {content_type}");
            assert!(body.contains("id=\"main\""));
        }
    }

    #[tokio::test]
    async fn healthz_answers_ok() {
        let (_dir, config) = bundle();
        let (status, _, body) = get_path(&config, "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn serve_requires_an_index() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            dist_dir: dir.path().to_path_buf(),
            port: 0,
            ..ServerConfig::default()
        };
        let err = serve(config).await.unwrap_err();
        assert!(matches!(err, ServerError::MissingIndex(_)));
    }
}
