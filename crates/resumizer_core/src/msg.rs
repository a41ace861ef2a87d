use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// File-selection widget changed; holds every selected file in order.
    FilesSelected(Vec<crate::FileSelection>),
    /// User clicked Upload.
    UploadClicked,
    /// Engine completion for an upload.
    UploadFinished {
        request_id: crate::RequestId,
        outcome: UploadOutcome,
    },
    /// User edited the job description field.
    JobDescriptionChanged(String),
    /// User clicked Analyze.
    AnalyzeClicked,
    /// Engine completion for an analysis.
    AnalysisFinished {
        request_id: crate::RequestId,
        outcome: AnalysisOutcome,
    },
    /// User followed the download link.
    DownloadClicked,
    /// Engine completion for a download.
    DownloadFinished {
        request_id: crate::RequestId,
        outcome: DownloadOutcome,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Enhanced(crate::EnhancedResume),
    /// The server answered with an `error` field.
    Rejected(String),
    /// Transport, read or decode failure.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Analysis(String),
    Rejected(String),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved(PathBuf),
    Rejected(String),
    Failed,
}
