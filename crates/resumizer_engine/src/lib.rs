//! Resumizer engine: HTTP client for the resume service and effect execution.
mod client;
mod engine;
mod filename;
mod persist;
mod reply;
mod types;

pub use client::{
    ClientSettings, ReqwestClient, ResumizerApi, ANALYZE_PATH, FILE_FIELD, UPLOAD_PATH,
};
pub use engine::EngineHandle;
pub use filename::download_filename;
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use reply::{parse_analysis_reply, parse_error_reply, parse_upload_reply};
pub use types::{
    AnalysisReply, ClientError, DownloadReply, EngineEvent, FailureKind, JobMatchRequest,
    RequestId, ResumeFile, UploadReply,
};
