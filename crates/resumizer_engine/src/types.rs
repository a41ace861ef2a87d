use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

pub type RequestId = u64;

/// Resume file to upload; read from disk when the request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobMatchRequest {
    pub job_description: String,
    pub resume_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadReply {
    Enhanced {
        enhanced_resume: String,
        download_url: String,
        original_text: Option<String>,
    },
    Rejected {
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisReply {
    Analysis { analysis: String },
    Rejected { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadReply {
    Saved(PathBuf),
    Rejected { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    UploadCompleted {
        request_id: RequestId,
        result: Result<UploadReply, ClientError>,
    },
    AnalysisCompleted {
        request_id: RequestId,
        result: Result<AnalysisReply, ClientError>,
    },
    DownloadCompleted {
        request_id: RequestId,
        result: Result<DownloadReply, ClientError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ClientError {
    pub kind: FailureKind,
    pub message: String,
}

impl ClientError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    FileRead,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    MalformedResponse,
    Persist,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::FileRead => write!(f, "file read error"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::Persist => write!(f, "persist error"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
