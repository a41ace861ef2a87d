use std::sync::mpsc;
use std::thread;

use resumizer_core::{
    AnalysisOutcome, DownloadOutcome, Effect, EnhancedResume, Msg, UploadOutcome,
};
use resumizer_engine::{
    AnalysisReply, DownloadReply, EngineEvent, EngineHandle, JobMatchRequest, ResumeFile,
    UploadReply,
};
use resumizer_logging::{log_error, log_info, log_warn};

use super::app::AppEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        events: mpsc::Receiver<EngineEvent>,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        spawn_event_loop(events, event_tx);
        Self { engine }
    }

    /// Starts the request behind a request effect. Alerts belong to the page.
    pub fn enqueue(&self, effect: Effect) {
        match effect {
            Effect::UploadResume { request_id, file } => {
                log_info!(
                    "UploadResume request_id={} file={} path={:?}",
                    request_id,
                    file.name,
                    file.path
                );
                self.engine.upload(
                    request_id,
                    ResumeFile {
                        name: file.name,
                        path: file.path,
                    },
                );
            }
            Effect::AnalyzeJobMatch {
                request_id,
                request,
            } => {
                log_info!(
                    "AnalyzeJobMatch request_id={} job_description_len={}",
                    request_id,
                    request.job_description.len()
                );
                self.engine.analyze(
                    request_id,
                    JobMatchRequest {
                        job_description: request.job_description,
                        resume_text: request.resume_text,
                    },
                );
            }
            Effect::DownloadResume { request_id, url } => {
                log_info!("DownloadResume request_id={} url={}", request_id, url);
                self.engine.download(request_id, url);
            }
            Effect::Alert { message } => {
                log_warn!("Alert reached the effect runner: {}", message);
            }
        }
    }
}

fn spawn_event_loop(events: mpsc::Receiver<EngineEvent>, event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        for event in events {
            if event_tx.send(AppEvent::Engine(map_event(event))).is_err() {
                break;
            }
        }
    });
}

/// Converts an engine completion into a page message, logging failure detail.
pub(crate) fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::UploadCompleted { request_id, result } => {
            let outcome = match result {
                Ok(UploadReply::Enhanced {
                    enhanced_resume,
                    download_url,
                    original_text,
                }) => {
                    log_info!(
                        "Upload {} enhanced resume_len={} download_url={}",
                        request_id,
                        enhanced_resume.len(),
                        download_url
                    );
                    UploadOutcome::Enhanced(EnhancedResume {
                        text: enhanced_resume,
                        download_url,
                        original_text,
                    })
                }
                Ok(UploadReply::Rejected { error }) => {
                    log_warn!("Upload {} rejected by server: {}", request_id, error);
                    UploadOutcome::Rejected(error)
                }
                Err(err) => {
                    log_error!("Upload error: request_id={} {}", request_id, err);
                    UploadOutcome::Failed
                }
            };
            Msg::UploadFinished {
                request_id,
                outcome,
            }
        }
        EngineEvent::AnalysisCompleted { request_id, result } => {
            let outcome = match result {
                Ok(AnalysisReply::Analysis { analysis }) => {
                    log_info!("Analysis {} returned {} bytes", request_id, analysis.len());
                    AnalysisOutcome::Analysis(analysis)
                }
                Ok(AnalysisReply::Rejected { error }) => {
                    log_warn!("Analysis {} rejected by server: {}", request_id, error);
                    AnalysisOutcome::Rejected(error)
                }
                Err(err) => {
                    log_error!("Analysis error: request_id={} {}", request_id, err);
                    AnalysisOutcome::Failed
                }
            };
            Msg::AnalysisFinished {
                request_id,
                outcome,
            }
        }
        EngineEvent::DownloadCompleted { request_id, result } => {
            let outcome = match result {
                Ok(DownloadReply::Saved(path)) => {
                    log_info!("Download {} saved to {:?}", request_id, path);
                    DownloadOutcome::Saved(path)
                }
                Ok(DownloadReply::Rejected { error }) => {
                    log_warn!("Download {} rejected by server: {}", request_id, error);
                    DownloadOutcome::Rejected(error)
                }
                Err(err) => {
                    log_error!("Download error: request_id={} {}", request_id, err);
                    DownloadOutcome::Failed
                }
            };
            Msg::DownloadFinished {
                request_id,
                outcome,
            }
        }
    }
}
