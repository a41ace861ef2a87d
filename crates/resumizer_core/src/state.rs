use std::path::PathBuf;

use crate::messages::{
    server_error, ANALYSIS_IN_PROGRESS, DOWNLOAD_IN_PROGRESS, GENERIC_FAILURE, UPLOAD_COMPLETE,
    UPLOAD_IN_PROGRESS,
};
use crate::msg::{AnalysisOutcome, DownloadOutcome, UploadOutcome};
use crate::view_model::{AppViewModel, DownloadLinkView, OutputContent};
use crate::{render_analysis, SessionContext};

pub type RequestId = u64;

/// A file chosen in the file-selection widget. Contents are read at upload time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelection {
    pub name: String,
    pub path: PathBuf,
}

/// Lifecycle of one user action, reset at the start of each attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Phase {
    #[default]
    Idle,
    InProgress(RequestId),
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    selected_file: Option<FileSelection>,
    job_description: String,
    session: SessionContext,
    next_request_id: RequestId,
    upload: Phase,
    analysis: Phase,
    download: Phase,
    output: String,
    download_href: Option<String>,
    download_link_visible: bool,
    analysis_section_visible: bool,
    analysis_output: OutputContent,
    download_status: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            selected_file_name: self
                .selected_file
                .as_ref()
                .map(|file| file.name.clone())
                .unwrap_or_default(),
            output: self.output.clone(),
            download_link: DownloadLinkView {
                href: self.download_href.clone(),
                visible: self.download_link_visible,
            },
            analysis_section_visible: self.analysis_section_visible,
            job_description: self.job_description.clone(),
            analysis_output: self.analysis_output.clone(),
            download_status: self.download_status.clone(),
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn selected_file(&self) -> Option<&FileSelection> {
        self.selected_file.as_ref()
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn select_file(&mut self, file: Option<FileSelection>) {
        self.selected_file = file;
        self.mark_dirty();
    }

    pub(crate) fn set_job_description(&mut self, text: String) {
        self.job_description = text;
    }

    pub(crate) fn visible_download_url(&self) -> Option<&str> {
        if self.download_link_visible {
            self.download_href.as_deref()
        } else {
            None
        }
    }

    fn issue_request_id(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.next_request_id
    }

    pub(crate) fn begin_upload(&mut self) -> RequestId {
        let request_id = self.issue_request_id();
        self.upload = Phase::InProgress(request_id);
        self.output = UPLOAD_IN_PROGRESS.to_string();
        self.download_link_visible = false;
        self.analysis_section_visible = false;
        self.mark_dirty();
        request_id
    }

    /// Applies an upload completion. Ignored unless `request_id` is the upload
    /// currently in flight.
    pub(crate) fn finish_upload(&mut self, request_id: RequestId, outcome: UploadOutcome) {
        if self.upload != Phase::InProgress(request_id) {
            return;
        }
        match outcome {
            UploadOutcome::Enhanced(resume) => {
                self.download_href = Some(resume.download_url.clone());
                self.download_link_visible = true;
                self.analysis_section_visible = true;
                self.output = UPLOAD_COMPLETE.to_string();
                self.session.store(resume);
                self.upload = Phase::Succeeded;
            }
            UploadOutcome::Rejected(error) => {
                self.output = server_error(&error);
                self.upload = Phase::Failed;
            }
            UploadOutcome::Failed => {
                self.output = GENERIC_FAILURE.to_string();
                self.upload = Phase::Failed;
            }
        }
        self.mark_dirty();
    }

    pub(crate) fn begin_analysis(&mut self) -> RequestId {
        let request_id = self.issue_request_id();
        self.analysis = Phase::InProgress(request_id);
        self.analysis_output = OutputContent::Text(ANALYSIS_IN_PROGRESS.to_string());
        self.mark_dirty();
        request_id
    }

    pub(crate) fn finish_analysis(&mut self, request_id: RequestId, outcome: AnalysisOutcome) {
        if self.analysis != Phase::InProgress(request_id) {
            return;
        }
        let (content, phase) = match outcome {
            AnalysisOutcome::Analysis(text) => {
                (OutputContent::Markup(render_analysis(&text)), Phase::Succeeded)
            }
            AnalysisOutcome::Rejected(error) => {
                (OutputContent::Text(server_error(&error)), Phase::Failed)
            }
            AnalysisOutcome::Failed => (
                OutputContent::Text(GENERIC_FAILURE.to_string()),
                Phase::Failed,
            ),
        };
        self.analysis_output = content;
        self.analysis = phase;
        self.mark_dirty();
    }

    pub(crate) fn begin_download(&mut self) -> RequestId {
        let request_id = self.issue_request_id();
        self.download = Phase::InProgress(request_id);
        self.download_status = Some(DOWNLOAD_IN_PROGRESS.to_string());
        self.mark_dirty();
        request_id
    }

    pub(crate) fn finish_download(&mut self, request_id: RequestId, outcome: DownloadOutcome) {
        if self.download != Phase::InProgress(request_id) {
            return;
        }
        let (status, phase) = match outcome {
            DownloadOutcome::Saved(path) => {
                (format!("Saved to {}", path.display()), Phase::Succeeded)
            }
            DownloadOutcome::Rejected(error) => (server_error(&error), Phase::Failed),
            DownloadOutcome::Failed => (GENERIC_FAILURE.to_string(), Phase::Failed),
        };
        self.download_status = Some(status);
        self.download = phase;
        self.mark_dirty();
    }
}
