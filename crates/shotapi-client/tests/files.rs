use shotapi_client::ShotClient;
use shotapi_core::ScreenshotOptions;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

async fn mount_capture(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v1/screenshot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "url": format!("{}/files/shot.png", server.uri()),
            "thumbnailUrl": format!("{}/files/missing.png", server.uri()),
            "metadata": {"width": 1280, "height": 720, "format": "png", "size": 8},
            "creditsUsed": 1,
            "creditsRemaining": 9
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/files/shot.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PNG_MAGIC))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/files/missing.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(server)
        .await;
}

fn client(server: &MockServer) -> ShotClient {
    ShotClient::builder("file_key")
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_screenshot_bytes() {
    let server = MockServer::start().await;
    mount_capture(&server).await;

    let bytes = client(&server)
        .screenshot_bytes(&ScreenshotOptions::new("https://example.com"))
        .await
        .unwrap();

    assert_eq!(bytes, PNG_MAGIC);
}

#[tokio::test]
async fn test_image_fetch_error() {
    let server = MockServer::start().await;
    mount_capture(&server).await;

    let client = client(&server);
    let response = client
        .screenshot(&ScreenshotOptions::new("https://example.com").thumbnail_width(200))
        .await
        .unwrap();

    let thumbnail = response.thumbnail_url.unwrap();
    let err = client.fetch_image(&thumbnail).await.unwrap_err();
    assert_eq!(err.code(), Some("IMAGE_FETCH_ERROR"));
    assert_eq!(err.status_code(), Some(404));
}

#[tokio::test]
async fn test_screenshot_to_file_creates_directories() {
    let server = MockServer::start().await;
    mount_capture(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("nested").join("deeper").join("shot.png");

    let response = client(&server)
        .screenshot_to_file(&ScreenshotOptions::new("https://example.com"), &target)
        .await
        .unwrap();

    assert_eq!(response.credits_remaining, 9);
    assert_eq!(std::fs::read(&target).unwrap(), PNG_MAGIC);
}

#[tokio::test]
async fn test_write_failure_is_io_error() {
    let server = MockServer::start().await;
    mount_capture(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let err = client(&server)
        .save_image(&format!("{}/files/shot.png", server.uri()), blocker.join("shot.png"))
        .await
        .unwrap_err();

    assert!(matches!(err, shotapi_client::ShotError::Io(_)));
    assert!(err.code().is_none());
}
