use std::sync::{Arc, Mutex};
use std::time::Duration;

use resumizer_engine::{
    AnalysisReply, ClientError, DownloadReply, EngineEvent, EngineHandle, FailureKind,
    JobMatchRequest, ResumeFile, ResumizerApi, UploadReply,
};

/// Records calls and answers from canned replies.
#[derive(Default)]
struct FakeApi {
    calls: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl ResumizerApi for FakeApi {
    async fn upload(&self, file: &ResumeFile) -> Result<UploadReply, ClientError> {
        self.calls.lock().unwrap().push(format!("upload {}", file.name));
        Ok(UploadReply::Enhanced {
            enhanced_resume: format!("enhanced {}", file.name),
            download_url: format!("/download/enhanced_{}", file.name),
            original_text: None,
        })
    }

    async fn analyze_job_match(
        &self,
        request: &JobMatchRequest,
    ) -> Result<AnalysisReply, ClientError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("analyze {}", request.job_description));
        Ok(AnalysisReply::Rejected {
            error: "quota".to_string(),
        })
    }

    async fn download(&self, download_url: &str) -> Result<DownloadReply, ClientError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("download {download_url}"));
        Err(ClientError {
            kind: FailureKind::Network,
            message: "connection refused".to_string(),
        })
    }
}

fn recv(events: &std::sync::mpsc::Receiver<EngineEvent>) -> EngineEvent {
    events
        .recv_timeout(Duration::from_secs(5))
        .expect("engine event")
}

#[test]
fn engine_runs_each_command_and_reports_completion() {
    let api = Arc::new(FakeApi::default());
    let (engine, events) = EngineHandle::spawn(api.clone()).expect("engine");

    engine.upload(
        1,
        ResumeFile {
            name: "cv.pdf".to_string(),
            path: "cv.pdf".into(),
        },
    );
    assert_eq!(
        recv(&events),
        EngineEvent::UploadCompleted {
            request_id: 1,
            result: Ok(UploadReply::Enhanced {
                enhanced_resume: "enhanced cv.pdf".to_string(),
                download_url: "/download/enhanced_cv.pdf".to_string(),
                original_text: None,
            }),
        }
    );

    engine.analyze(
        2,
        JobMatchRequest {
            job_description: "Rust".to_string(),
            resume_text: "enhanced cv.pdf".to_string(),
        },
    );
    assert_eq!(
        recv(&events),
        EngineEvent::AnalysisCompleted {
            request_id: 2,
            result: Ok(AnalysisReply::Rejected {
                error: "quota".to_string()
            }),
        }
    );

    engine.download(3, "/download/enhanced_cv.pdf");
    match recv(&events) {
        EngineEvent::DownloadCompleted { request_id, result } => {
            assert_eq!(request_id, 3);
            assert_eq!(result.unwrap_err().kind, FailureKind::Network);
        }
        other => panic!("unexpected event {other:?}"),
    }

    assert_eq!(
        *api.calls.lock().unwrap(),
        vec![
            "upload cv.pdf".to_string(),
            "analyze Rust".to_string(),
            "download /download/enhanced_cv.pdf".to_string(),
        ]
    );
}
