use super::commands::ElementId;

pub const RESUME_FILE: ElementId = ElementId::new("resume-file");
pub const SELECTED_FILE_NAME: ElementId = ElementId::new("selected-file-name");
pub const OUTPUT: ElementId = ElementId::new("output");
pub const DOWNLOAD_LINK: ElementId = ElementId::new("download-link");
pub const DOWNLOAD_STATUS: ElementId = ElementId::new("download-status");
pub const ANALYSIS_SECTION: ElementId = ElementId::new("analysis-section");
pub const JOB_DESCRIPTION: ElementId = ElementId::new("job-description");
pub const ANALYSIS_OUTPUT: ElementId = ElementId::new("analysis-output");
