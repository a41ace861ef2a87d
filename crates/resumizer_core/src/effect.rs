#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Blocking prompt; no request is made.
    Alert { message: String },
    UploadResume {
        request_id: crate::RequestId,
        file: crate::FileSelection,
    },
    AnalyzeJobMatch {
        request_id: crate::RequestId,
        request: crate::AnalysisRequest,
    },
    DownloadResume {
        request_id: crate::RequestId,
        url: String,
    },
}

impl Effect {
    pub(crate) fn alert(message: &str) -> Self {
        Effect::Alert {
            message: message.to_string(),
        }
    }
}
