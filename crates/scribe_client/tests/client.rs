use std::time::Duration;

use pretty_assertions::assert_eq;
use scribe_client::{ApiErrorKind, ApiSettings, PipelineApi, ReqwestPipelineApi};
use scribe_core::StageEndpoint;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> ApiSettings {
    ApiSettings {
        base_url: server.uri(),
        ..ApiSettings::default()
    }
}

fn snapshot_body(status: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "id": "a1",
        "name": "interview.wav",
        "status": status,
        "url": "http://127.0.0.1:5000/media/a1",
        "createdAt": "2026-08-30T10:00:00Z",
    })
}

#[tokio::test]
async fn fetch_snapshot_decodes_job_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(snapshot_body(4.into())))
        .mount(&server)
        .await;

    let api = ReqwestPipelineApi::new(&settings_for(&server)).expect("client");
    let snapshot = api.fetch_snapshot("a1").await.expect("fetch ok");

    assert_eq!(snapshot.id, "a1");
    assert_eq!(snapshot.name, "interview.wav");
    assert_eq!(snapshot.status, 4);
    assert_eq!(snapshot.created_at, "2026-08-30T10:00:00Z");
}

#[tokio::test]
async fn fetch_snapshot_accepts_string_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(snapshot_body("6".into())))
        .mount(&server)
        .await;

    let api = ReqwestPipelineApi::new(&settings_for(&server)).expect("client");
    let snapshot = api.fetch_snapshot("a1").await.expect("fetch ok");
    assert_eq!(snapshot.status, 6);
}

#[tokio::test]
async fn fetch_snapshot_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let api = ReqwestPipelineApi::new(&settings_for(&server)).expect("client");
    let err = api.fetch_snapshot("missing").await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::HttpStatus(404));
}

#[tokio::test]
async fn error_field_in_ok_body_is_a_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/a1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"error": "file not processed yet"})),
        )
        .mount(&server)
        .await;

    let api = ReqwestPipelineApi::new(&settings_for(&server)).expect("client");
    let err = api.fetch_snapshot("a1").await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Application);
    assert_eq!(err.message, "file not processed yet");
}

#[tokio::test]
async fn fetch_snapshot_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/a1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(snapshot_body(0.into())),
        )
        .mount(&server)
        .await;

    let settings = ApiSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let api = ReqwestPipelineApi::new(&settings).expect("client");
    let err = api.fetch_snapshot("a1").await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Timeout);
}

#[tokio::test]
async fn upload_posts_multipart_and_returns_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(snapshot_body(0.into())))
        .expect(1)
        .mount(&server)
        .await;

    let api = ReqwestPipelineApi::new(&settings_for(&server)).expect("client");
    let snapshot = api
        .upload("Interview", "interview.wav", b"RIFF....".to_vec())
        .await
        .expect("upload ok");
    assert_eq!(snapshot.id, "a1");
    assert_eq!(snapshot.status, 0);
}

#[tokio::test]
async fn advance_targets_selected_stage_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/files/speaker-diarization/a1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let api = ReqwestPipelineApi::new(&settings_for(&server)).expect("client");
    api.advance(StageEndpoint::SpeakerDiarization, "a1")
        .await
        .expect("advance ok");
}

#[tokio::test]
async fn advance_rejects_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/files/speech-recognition/a1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"error": "previous stage incomplete"})),
        )
        .mount(&server)
        .await;

    let api = ReqwestPipelineApi::new(&settings_for(&server)).expect("client");
    let err = api
        .advance(StageEndpoint::SpeechRecognition, "a1")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Application);
    assert_eq!(err.message, "previous stage incomplete");
}

#[tokio::test]
async fn fetch_result_decodes_segments() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/results/a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "a1",
            "totalSpeakers": 2,
            "segment": [
                {
                    "speaker": "Speaker 1",
                    "start": 0,
                    "end": 4200,
                    "transcript": "bonjour tout le monde",
                    "language": "fr",
                    "translate": "hello everyone",
                },
                {
                    "speaker": "Speaker 2",
                    "start": 4200,
                    "end": 9000,
                    "transcript": "hello back",
                    "language": "en",
                    "translate": "hello back",
                },
            ],
        })))
        .mount(&server)
        .await;

    let api = ReqwestPipelineApi::new(&settings_for(&server)).expect("client");
    let result = api.fetch_result("a1").await.expect("result ok");

    assert_eq!(result.total_speakers, 2);
    assert_eq!(result.segment.len(), 2);
    assert_eq!(result.segment[0].language, "fr");
    assert_eq!(result.segment[1].start, 4200);
}
