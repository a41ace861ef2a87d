//! User-facing texts shown by the page.

pub const ALERT_NO_FILE: &str = "Please upload a PDF file!";
pub const ALERT_NO_JOB_DESCRIPTION: &str = "Please enter a job description!";
pub const ALERT_NO_RESUME: &str = "Please upload and enhance a resume first!";

pub const UPLOAD_IN_PROGRESS: &str = "Enhancing... Please wait.";
pub const UPLOAD_COMPLETE: &str = "Enhancement Complete! You can now download your resume.";
pub const ANALYSIS_IN_PROGRESS: &str = "Analyzing... Please wait.";
pub const DOWNLOAD_IN_PROGRESS: &str = "Downloading... Please wait.";

/// Shown for transport and decoding failures in any flow.
pub const GENERIC_FAILURE: &str = "Error processing your request. Please try again.";

pub(crate) fn server_error(message: &str) -> String {
    format!("Error: {message}")
}
