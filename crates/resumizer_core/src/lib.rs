//! Resumizer core: pure state machine and view-model helpers.
mod effect;
mod markup;
mod messages;
mod msg;
mod session;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use markup::{render_analysis, BREAK_MARKER};
pub use messages::{
    ALERT_NO_FILE, ALERT_NO_JOB_DESCRIPTION, ALERT_NO_RESUME, ANALYSIS_IN_PROGRESS,
    DOWNLOAD_IN_PROGRESS, GENERIC_FAILURE, UPLOAD_COMPLETE, UPLOAD_IN_PROGRESS,
};
pub use msg::{AnalysisOutcome, DownloadOutcome, Msg, UploadOutcome};
pub use session::{AnalysisPrecondition, AnalysisRequest, EnhancedResume, SessionContext};
pub use state::{AppState, FileSelection, RequestId};
pub use update::update;
pub use view_model::{AppViewModel, DownloadLinkView, OutputContent};
