use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use camino::Utf8PathBuf as PathBuf;
use claims::assert_ok;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use vidqueue::{
    app_state::{AppState, SharedState},
    routes,
};
use vidqueue_core::{model::repository::db, queue::MembershipCache};

struct TestApp {
    app: Router,
    video_dir: PathBuf,
    _dirs: (tempfile::TempDir, tempfile::TempDir),
}

async fn test_app() -> TestApp {
    let data_dir = tempfile::tempdir().unwrap();
    let video_dir = tempfile::tempdir().unwrap();
    let data_path = PathBuf::from_path_buf(data_dir.path().to_owned()).unwrap();
    let video_path = PathBuf::from_path_buf(video_dir.path().to_owned()).unwrap();
    let pool = assert_ok!(db::open_data_dir_db(&data_path).await);
    let cache = MembershipCache::new();
    cache.rebuild(&pool).await;
    let state: SharedState = Arc::new(AppState {
        pool,
        cache,
        video_dir: video_path.clone(),
    });
    let app = Router::new()
        .nest("/api", routes::api_router())
        .with_state(state);
    TestApp {
        app,
        video_dir: video_path,
        _dirs: (data_dir, video_dir),
    }
}

impl TestApp {
    fn write_video(&self, name: &str, len: usize) -> PathBuf {
        let path = self.video_dir.join(name);
        std::fs::write(&path, vec![0u8; len]).unwrap();
        path
    }

    async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    async fn enqueue(&self, id: &str, path: &str) -> (StatusCode, Value) {
        self.request(
            Method::POST,
            "/api/videos/process",
            Some(json!({
                "id": id,
                "path": path,
                "resolution": "1920x1080",
                "bitrate": "5M",
                "status": "completed",
                "originalSize": 100,
            })),
        )
        .await
    }
}

fn ids(videos: &Value) -> Vec<String> {
    videos
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap().to_owned())
        .collect()
}

#[tokio::test]
async fn discovered_videos_disappear_once_queued() {
    let app = test_app().await;
    let a = app.write_video("a.mp4", 3);
    app.write_video("b.mp4", 5);

    let (status, body) = app.request(Method::GET, "/api/videos/unprocessed", None).await;
    assert_eq!(status, StatusCode::OK);
    let mut found = ids(&body);
    found.sort();
    assert_eq!(found, vec!["a.mp4", "b.mp4"]);
    assert!(body
        .as_array()
        .unwrap()
        .iter()
        .all(|v| v["status"] == "unprocessed"));

    let (status, body) = app.enqueue("a.mp4", a.as_str()).await;
    assert_eq!(status, StatusCode::OK);
    // the status from the request body is ignored
    assert_eq!(body["status"], "pending");
    assert_eq!(body["originalSize"], 100);

    let (status, body) = app.request(Method::GET, "/api/videos/unprocessed", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["b.mp4"]);
    assert_eq!(body[0]["originalSize"], 5);
}

#[tokio::test]
async fn enqueueing_twice_is_a_conflict() {
    let app = test_app().await;
    let (status, _) = app.enqueue("a.mp4", "videos/a.mp4").await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = app.enqueue("a.mp4", "videos/a.mp4").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn status_updates() {
    let app = test_app().await;
    app.enqueue("a.mp4", "videos/a.mp4").await;

    let (status, body) = app
        .request(
            Method::PATCH,
            "/api/videos/a.mp4/status",
            Some(json!({ "status": "processing" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "updated" }));

    let (status, _) = app
        .request(
            Method::PATCH,
            "/api/videos/a.mp4/status",
            Some(json!({ "status": "bogus" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .request(
            Method::PATCH,
            "/api/videos/missing.mp4/status",
            Some(json!({ "status": "completed" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = app.request(Method::GET, "/api/queue", None).await;
    assert_eq!(ids(&body["queue"]["processing"]), vec!["a.mp4"]);
}

#[tokio::test]
async fn queue_pagination_and_filter() {
    let app = test_app().await;
    for name in ["a.mp4", "b.mp4", "c.mp4"] {
        app.enqueue(name, &format!("videos/{}", name)).await;
    }
    app.request(
        Method::PATCH,
        "/api/videos/c.mp4/status",
        Some(json!({ "status": "completed" })),
    )
    .await;

    let (status, body) = app
        .request(Method::GET, "/api/queue?page=1&pageSize=2&status=", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["queue"]["pending"]), vec!["a.mp4", "b.mp4"]);
    assert_eq!(body["queue"]["total"], 3);
    assert_eq!(
        body["pagination"],
        json!({ "page": 1, "pageSize": 2, "total": 3, "pages": 2 })
    );

    let (status, body) = app
        .request(Method::GET, "/api/queue?status=completed", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["queue"]["completed"]), vec!["c.mp4"]);
    assert_eq!(body["pagination"]["total"], 1);

    let (status, body) = app
        .request(Method::GET, "/api/queue?page=0&pageSize=1000", None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["pageSize"], 100);
}

#[tokio::test]
async fn malformed_queue_requests_are_rejected() {
    let app = test_app().await;
    let (status, _) = app.request(Method::GET, "/api/queue?page=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, body) = app
        .request(Method::GET, "/api/queue?status=unprocessed", None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("unprocessed"));
}
