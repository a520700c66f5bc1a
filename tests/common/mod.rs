//! Shared doubles for router tests.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use bytes::Bytes;
use futures_util::{stream, StreamExt};
use http_body_util::BodyExt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use video_agent::app::create_app;
use video_agent::config::settings::AppConfig;
use video_agent::infrastructure::fetch::{FetchError, FetchedVideo, VideoFetcher};
use video_agent::infrastructure::llm::{LlmError, TextGenerator};
use video_agent::infrastructure::youtube::{VideoHost, VideoResource, YouTubeError};
use video_agent::modules::schedule::repository::JobRegistry;
use video_agent::state::AppState;

pub struct FixedGenerator {
    pub reply: Option<String>,
    pub calls: AtomicUsize,
}

#[async_trait]
impl TextGenerator for FixedGenerator {
    async fn complete(&self, _: &str, _: &str, _: &str) -> Result<Option<String>, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.clone())
    }
}

pub struct SlowFetcher;

#[async_trait]
impl VideoFetcher for SlowFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedVideo, FetchError> {
        Err(FetchError::Timeout {
            url: url.to_string(),
            after: Duration::from_secs(30),
        })
    }
}

pub struct OkFetcher;

#[async_trait]
impl VideoFetcher for OkFetcher {
    async fn fetch(&self, _url: &str) -> Result<FetchedVideo, FetchError> {
        Ok(FetchedVideo {
            content_type: "video/mp4".to_string(),
            content_length: Some(3),
            body: stream::iter(vec![Ok(Bytes::from_static(b"mp4"))]).boxed(),
        })
    }
}

pub struct AcceptingHost;

#[async_trait]
impl VideoHost for AcceptingHost {
    async fn insert(&self, _: &str, _: &VideoResource, _: FetchedVideo) -> Result<String, YouTubeError> {
        Ok("abc123".to_string())
    }
}

pub struct TestApp {
    pub router: Router,
    pub generator: Arc<FixedGenerator>,
    pub registry: JobRegistry,
}

impl TestApp {
    pub fn new(reply: Option<&str>) -> Self {
        Self::with_fetcher(reply, Arc::new(OkFetcher))
    }

    pub fn with_fetcher(reply: Option<&str>, fetcher: Arc<dyn VideoFetcher>) -> Self {
        let generator = Arc::new(FixedGenerator {
            reply: reply.map(str::to_string),
            calls: AtomicUsize::new(0),
        });
        let registry = JobRegistry::new();
        let state = AppState::new(
            AppConfig::default(),
            generator.clone(),
            fetcher,
            Arc::new(AcceptingHost),
            registry.clone(),
        );

        Self {
            router: create_app(state),
            generator,
            registry,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post(&self, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let request = Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }
}
