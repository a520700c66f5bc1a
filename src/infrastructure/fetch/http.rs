use super::{ByteStream, FetchError, FetchedVideo, VideoFetcher, FETCH_TIMEOUT};
use async_trait::async_trait;
use futures_util::{stream, StreamExt};
use reqwest::{header::CONTENT_TYPE, Client, Response};
use std::io;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Clone)]
pub struct HttpVideoFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpVideoFetcher {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_timeout(FETCH_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().connect_timeout(timeout).build()?;
        Ok(Self { client, timeout })
    }
}

#[async_trait]
impl VideoFetcher for HttpVideoFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedVideo, FetchError> {
        info!("Fetching source video {}", url);

        // The pending request future owns the connection; dropping it on
        // timeout closes the socket.
        let response = match tokio::time::timeout(self.timeout, self.client.get(url).send()).await {
            Ok(result) => result?,
            Err(_) => {
                warn!("Fetching {} timed out after {:?}", url, self.timeout);
                return Err(FetchError::Timeout {
                    url: url.to_string(),
                    after: self.timeout,
                });
            }
        };

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(mime::APPLICATION_OCTET_STREAM.as_ref())
            .to_string();
        let content_length = response.content_length();

        let body = bounded_body(response, url.to_string(), self.timeout);

        Ok(FetchedVideo {
            content_type,
            content_length,
            body,
        })
    }
}

/// Streams the response body, failing with `FetchError::Timeout` when the
/// source goes quiet for longer than `idle` between chunks. The inner stream
/// is dropped on the first error, which closes the connection.
fn bounded_body(response: Response, url: String, idle: Duration) -> ByteStream {
    let chunks = response.bytes_stream().boxed();

    stream::unfold(Some(chunks), move |state| {
        let url = url.clone();
        async move {
            let mut chunks = state?;
            match tokio::time::timeout(idle, chunks.next()).await {
                Ok(Some(Ok(bytes))) => Some((Ok(bytes), Some(chunks))),
                Ok(Some(Err(e))) => Some((Err(io::Error::other(FetchError::Request(e))), None)),
                Ok(None) => None,
                Err(_) => {
                    warn!("Source body for {} stalled for {:?}", url, idle);
                    let err = FetchError::Timeout { url, after: idle };
                    Some((Err(io::Error::other(err)), None))
                }
            }
        }
    })
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::TryStreamExt;
    use std::time::Instant;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn streams_the_remote_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v.mp4"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "video/mp4")
                    .set_body_bytes(b"fake-mp4-bytes".to_vec()),
            )
            .mount(&server)
            .await;

        let fetcher = HttpVideoFetcher::new().unwrap();
        let video = fetcher
            .fetch(&format!("{}/v.mp4", server.uri()))
            .await
            .unwrap();

        assert_eq!(video.content_type, "video/mp4");
        assert_eq!(video.content_length, Some(14));

        let chunks: Vec<_> = video.body.try_collect().await.unwrap();
        assert_eq!(chunks.concat(), b"fake-mp4-bytes");
    }

    #[tokio::test]
    async fn slow_source_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow.mp4"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let fetcher = HttpVideoFetcher::with_timeout(Duration::from_millis(200)).unwrap();
        let started = Instant::now();
        let err = fetcher
            .fetch(&format!("{}/slow.mp4", server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Timeout { .. }));
        assert!(started.elapsed() < Duration::from_secs(3));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing.mp4"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = HttpVideoFetcher::new().unwrap();
        let err = fetcher
            .fetch(&format!("{}/missing.mp4", server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn stalled_body_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            socket
                .write_all(b"HTTP/1.1 200 OK\r\ncontent-type: video/mp4\r\ncontent-length: 1000\r\n\r\nhello")
                .await
                .unwrap();
            socket.flush().await.unwrap();
            tokio::time::sleep(Duration::from_secs(10)).await;
        });

        let fetcher = HttpVideoFetcher::with_timeout(Duration::from_millis(200)).unwrap();
        let video = fetcher
            .fetch(&format!("http://{}/stalled.mp4", addr))
            .await
            .unwrap();

        let collected = tokio::time::timeout(
            Duration::from_secs(3),
            video.body.try_collect::<Vec<_>>(),
        )
        .await
        .expect("body read should be bounded");

        let err = collected.unwrap_err();
        let cause = err
            .get_ref()
            .and_then(|inner| inner.downcast_ref::<FetchError>());
        assert!(matches!(cause, Some(FetchError::Timeout { .. })));
    }
}
