//! YouTube Data API v3 `videos.insert` over the resumable upload protocol.
//!
//! The insert is two requests: a POST carrying the JSON resource opens an
//! upload session (returned in `Location`), then a PUT streams the bytes to
//! that session and receives the created resource.

use super::{VideoHost, VideoResource, YouTubeError};
use crate::infrastructure::fetch::FetchedVideo;
use async_trait::async_trait;
use reqwest::{
    header::{CONTENT_TYPE, LOCATION},
    Body, Client, Response,
};
use serde::Deserialize;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
struct InsertedVideo {
    id: String,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorEnvelope {
    error: GoogleError,
}

#[derive(Debug, Deserialize)]
struct GoogleError {
    message: String,
}

#[derive(Clone)]
pub struct YouTubeClient {
    client: Client,
    upload_url: String,
}

impl YouTubeClient {
    pub fn new(upload_url: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            upload_url: upload_url.to_string(),
        })
    }

    async fn ensure_success(response: Response) -> Result<Response, YouTubeError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let raw = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<GoogleErrorEnvelope>(&raw)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| format!("YouTube API returned status {}", status));

        warn!(status = status.as_u16(), "YouTube rejected request: {}", message);
        Err(YouTubeError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl VideoHost for YouTubeClient {
    async fn insert(
        &self,
        api_key: &str,
        resource: &VideoResource,
        media: FetchedVideo,
    ) -> Result<String, YouTubeError> {
        let mut session = self
            .client
            .post(&self.upload_url)
            .query(&[
                ("uploadType", "resumable"),
                ("part", "snippet,status"),
                ("key", api_key),
            ])
            .header("X-Upload-Content-Type", &media.content_type)
            .json(resource);

        if let Some(length) = media.content_length {
            session = session.header("X-Upload-Content-Length", length);
        }

        let response = Self::ensure_success(session.send().await?).await?;
        let session_url = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(YouTubeError::MissingSession)?
            .to_string();

        debug!("Opened resumable upload session");

        let response = self
            .client
            .put(&session_url)
            .header(CONTENT_TYPE, &media.content_type)
            .body(Body::wrap_stream(media.body))
            .send()
            .await?;

        let video: InsertedVideo = Self::ensure_success(response).await?.json().await?;

        info!("YouTube accepted upload as {}", video.id);
        Ok(video.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use futures_util::{stream, StreamExt};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, body_string, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn media(bytes: &'static [u8]) -> FetchedVideo {
        FetchedVideo {
            content_type: "video/mp4".to_string(),
            content_length: Some(bytes.len() as u64),
            body: stream::iter(vec![Ok(Bytes::from_static(bytes))]).boxed(),
        }
    }

    fn resource() -> VideoResource {
        VideoResource::private(
            "Cats".to_string(),
            "A cat video".to_string(),
            vec!["cats".to_string()],
        )
    }

    #[tokio::test]
    async fn inserts_through_a_resumable_session() {
        let server = MockServer::start().await;
        let session_url = format!("{}/upload/session/abc", server.uri());

        Mock::given(method("POST"))
            .and(path("/upload/youtube/v3/videos"))
            .and(query_param("uploadType", "resumable"))
            .and(query_param("part", "snippet,status"))
            .and(query_param("key", "yt-key"))
            .and(body_partial_json(json!({
                "snippet": { "title": "Cats", "categoryId": "22", "tags": ["cats"] },
                "status": { "privacyStatus": "private" }
            })))
            .respond_with(ResponseTemplate::new(200).insert_header("location", session_url.as_str()))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/upload/session/abc"))
            .and(body_string("video-bytes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "dQw4w9WgXcQ" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = YouTubeClient::new(&format!("{}/upload/youtube/v3/videos", server.uri())).unwrap();
        let id = client
            .insert("yt-key", &resource(), media(b"video-bytes"))
            .await
            .unwrap();

        assert_eq!(id, "dQw4w9WgXcQ");
    }

    #[tokio::test]
    async fn rejected_session_surfaces_google_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload/youtube/v3/videos"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {
                    "code": 401,
                    "message": "API keys are not supported by this API. Expected OAuth2 access token."
                }
            })))
            .mount(&server)
            .await;

        let client = YouTubeClient::new(&format!("{}/upload/youtube/v3/videos", server.uri())).unwrap();
        let err = client
            .insert("yt-key", &resource(), media(b"video-bytes"))
            .await
            .unwrap_err();

        match err {
            YouTubeError::Api { status, message } => {
                assert_eq!(status, 401);
                assert!(message.contains("Expected OAuth2 access token"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_location_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload/youtube/v3/videos"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = YouTubeClient::new(&format!("{}/upload/youtube/v3/videos", server.uri())).unwrap();
        let err = client
            .insert("yt-key", &resource(), media(b"video-bytes"))
            .await
            .unwrap_err();

        assert!(matches!(err, YouTubeError::MissingSession));
    }
}
