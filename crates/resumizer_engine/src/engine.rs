use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use resumizer_logging::log_debug;

use crate::client::ResumizerApi;
use crate::{EngineEvent, JobMatchRequest, RequestId, ResumeFile};

enum EngineCommand {
    Upload {
        request_id: RequestId,
        file: ResumeFile,
    },
    Analyze {
        request_id: RequestId,
        request: JobMatchRequest,
    },
    Download {
        request_id: RequestId,
        url: String,
    },
}

/// Sends requests to a worker thread that runs them on a tokio runtime.
///
/// Each request runs as its own task, so overlapping requests are not
/// serialized; completions arrive on the receiver returned by [`spawn`](Self::spawn)
/// in the order they finish.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn spawn(api: Arc<dyn ResumizerApi>) -> io::Result<(Self, mpsc::Receiver<EngineEvent>)> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("resumizer-engine")
            .build()?;

        thread::Builder::new()
            .name("resumizer-engine-commands".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let api = api.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        let event = handle_command(api.as_ref(), command).await;
                        let _ = event_tx.send(event);
                    });
                }
                log_debug!("engine command channel closed");
            })?;

        Ok((Self { cmd_tx }, event_rx))
    }

    pub fn upload(&self, request_id: RequestId, file: ResumeFile) {
        let _ = self.cmd_tx.send(EngineCommand::Upload { request_id, file });
    }

    pub fn analyze(&self, request_id: RequestId, request: JobMatchRequest) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::Analyze { request_id, request });
    }

    pub fn download(&self, request_id: RequestId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Download {
            request_id,
            url: url.into(),
        });
    }
}

async fn handle_command(api: &dyn ResumizerApi, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::Upload { request_id, file } => EngineEvent::UploadCompleted {
            request_id,
            result: api.upload(&file).await,
        },
        EngineCommand::Analyze {
            request_id,
            request,
        } => EngineEvent::AnalysisCompleted {
            request_id,
            result: api.analyze_job_match(&request).await,
        },
        EngineCommand::Download { request_id, url } => EngineEvent::DownloadCompleted {
            request_id,
            result: api.download(&url).await,
        },
    }
}
