use std::fs;
use std::time::Duration;

use pretty_assertions::assert_eq;
use resumizer_engine::{
    AnalysisReply, ClientSettings, DownloadReply, FailureKind, JobMatchRequest, ReqwestClient,
    ResumeFile, ResumizerApi, UploadReply,
};
use tempfile::TempDir;
use wiremock::matchers::{body_json, body_string_contains, header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, download_dir: &TempDir) -> ReqwestClient {
    ReqwestClient::new(ClientSettings {
        base_url: server.uri(),
        download_dir: download_dir.path().to_path_buf(),
        ..ClientSettings::default()
    })
    .expect("client")
}

fn resume_on_disk(dir: &TempDir) -> ResumeFile {
    let path = dir.path().join("cv.pdf");
    fs::write(&path, b"%PDF-1.4 fake resume").unwrap();
    ResumeFile {
        name: "cv.pdf".to_string(),
        path,
    }
}

#[tokio::test]
async fn upload_sends_multipart_file_field_and_decodes_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .and(body_string_contains("name=\"file\""))
        .and(body_string_contains("filename=\"cv.pdf\""))
        .and(body_string_contains("%PDF-1.4 fake resume"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "enhanced_resume": "R",
            "download_url": "/download/enhanced_cv.pdf",
            "original_text": "O",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let client = client_for(&server, &temp);

    let reply = client.upload(&resume_on_disk(&temp)).await.expect("upload ok");
    assert_eq!(
        reply,
        UploadReply::Enhanced {
            enhanced_resume: "R".to_string(),
            download_url: "/download/enhanced_cv.pdf".to_string(),
            original_text: Some("O".to_string()),
        }
    );
}

#[tokio::test]
async fn upload_error_body_is_rejection_even_with_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "Invalid file format. Only PDF is allowed."
        })))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let client = client_for(&server, &temp);

    let reply = client.upload(&resume_on_disk(&temp)).await.expect("reply");
    assert_eq!(
        reply,
        UploadReply::Rejected {
            error: "Invalid file format. Only PDF is allowed.".to_string()
        }
    );
}

#[tokio::test]
async fn upload_with_non_json_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let client = client_for(&server, &temp);

    let err = client.upload(&resume_on_disk(&temp)).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedResponse);
}

#[tokio::test]
async fn upload_of_missing_file_fails_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let client = client_for(&server, &temp);
    let missing = ResumeFile {
        name: "gone.pdf".to_string(),
        path: temp.path().join("gone.pdf"),
    };

    let err = client.upload(&missing).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::FileRead);
}

#[tokio::test]
async fn analysis_posts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze_job_match"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "job_description": "Senior Rust engineer",
            "resume_text": "R",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "analysis": "line1\nline2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let client = client_for(&server, &temp);
    let request = JobMatchRequest {
        job_description: "Senior Rust engineer".to_string(),
        resume_text: "R".to_string(),
    };

    let reply = client.analyze_job_match(&request).await.expect("reply");
    assert_eq!(
        reply,
        AnalysisReply::Analysis {
            analysis: "line1\nline2".to_string()
        }
    );
}

#[tokio::test]
async fn analysis_error_body_is_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze_job_match"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "Both resume and job description are required"
        })))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let client = client_for(&server, &temp);
    let request = JobMatchRequest {
        job_description: "x".to_string(),
        resume_text: "R".to_string(),
    };

    let reply = client.analyze_job_match(&request).await.expect("reply");
    assert_eq!(
        reply,
        AnalysisReply::Rejected {
            error: "Both resume and job description are required".to_string()
        }
    );
}

#[tokio::test]
async fn endpoints_resolve_below_base_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/resumizer/analyze_job_match"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "analysis": "ok"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let client = ReqwestClient::new(ClientSettings {
        base_url: format!("{}/resumizer", server.uri()),
        download_dir: temp.path().to_path_buf(),
        ..ClientSettings::default()
    })
    .unwrap();
    let request = JobMatchRequest {
        job_description: "x".to_string(),
        resume_text: "R".to_string(),
    };

    client.analyze_job_match(&request).await.expect("reply");
}

#[tokio::test]
async fn request_timeout_applies_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze_job_match"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(serde_json::json!({ "analysis": "slow" })),
        )
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let client = ReqwestClient::new(ClientSettings {
        base_url: server.uri(),
        request_timeout: Some(Duration::from_millis(50)),
        download_dir: temp.path().to_path_buf(),
        ..ClientSettings::default()
    })
    .unwrap();
    let request = JobMatchRequest {
        job_description: "x".to_string(),
        resume_text: "R".to_string(),
    };

    let err = client.analyze_job_match(&request).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn download_saves_artifact_into_download_dir() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/download/enhanced_cv.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            b"%PDF-1.4 enhanced".to_vec(),
            "application/pdf",
        ))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let client = client_for(&server, &temp);

    let reply = client
        .download("/download/enhanced_cv.pdf")
        .await
        .expect("download ok");
    let expected = temp.path().join("enhanced_cv.pdf");
    assert_eq!(reply, DownloadReply::Saved(expected.clone()));
    assert_eq!(fs::read(expected).unwrap(), b"%PDF-1.4 enhanced");
}

#[tokio::test]
async fn download_not_found_reports_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/download/missing.pdf"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": "File not found"
        })))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let client = client_for(&server, &temp);

    let reply = client.download("/download/missing.pdf").await.expect("reply");
    assert_eq!(
        reply,
        DownloadReply::Rejected {
            error: "File not found".to_string()
        }
    );
}

#[tokio::test]
async fn download_with_plain_error_status_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/download/broken.pdf"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let client = client_for(&server, &temp);

    let err = client.download("/download/broken.pdf").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn download_rejects_oversized_artifact() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/download/large.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_string("01234567890"))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let client = ReqwestClient::new(ClientSettings {
        base_url: server.uri(),
        max_download_bytes: 10,
        download_dir: temp.path().to_path_buf(),
        ..ClientSettings::default()
    })
    .unwrap();

    let err = client.download("/download/large.pdf").await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
    assert!(!temp.path().join("large.pdf").exists());
}

#[tokio::test]
async fn download_error_body_is_capped_too() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/download/missing.pdf"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": "File not found, and a long explanation follows"
        })))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let client = ReqwestClient::new(ClientSettings {
        base_url: server.uri(),
        max_download_bytes: 16,
        download_dir: temp.path().to_path_buf(),
        ..ClientSettings::default()
    })
    .unwrap();

    let err = client.download("/download/missing.pdf").await.unwrap_err();
    assert!(matches!(
        err.kind,
        FailureKind::TooLarge { max_bytes: 16, .. }
    ));
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = ReqwestClient::new(ClientSettings {
        base_url: "not a url".to_string(),
        ..ClientSettings::default()
    })
    .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
