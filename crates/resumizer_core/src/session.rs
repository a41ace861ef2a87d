use crate::messages::{ALERT_NO_JOB_DESCRIPTION, ALERT_NO_RESUME};

/// Resume text returned by a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhancedResume {
    pub text: String,
    pub download_url: String,
    /// Plain text the server extracted from the PDF, when it sends it.
    pub original_text: Option<String>,
}

/// State retained for the lifetime of one page session.
///
/// Only a successful upload writes here; every later upload overwrites it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionContext {
    enhanced: Option<EnhancedResume>,
}

/// Body of a job-match analysis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub job_description: String,
    pub resume_text: String,
}

/// Why an analysis request could not be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPrecondition {
    BlankJobDescription,
    MissingResume,
}

impl AnalysisPrecondition {
    pub fn alert_message(self) -> &'static str {
        match self {
            AnalysisPrecondition::BlankJobDescription => ALERT_NO_JOB_DESCRIPTION,
            AnalysisPrecondition::MissingResume => ALERT_NO_RESUME,
        }
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enhanced_resume(&self) -> Option<&EnhancedResume> {
        self.enhanced
            .as_ref()
            .filter(|resume| !resume.text.is_empty())
    }

    pub fn resume_text(&self) -> Option<&str> {
        self.enhanced_resume().map(|resume| resume.text.as_str())
    }

    /// Builds the analysis request, checking the job description first and the
    /// stored resume second. The description is sent as entered, untrimmed.
    pub fn analysis_request(
        &self,
        job_description: &str,
    ) -> Result<AnalysisRequest, AnalysisPrecondition> {
        if job_description.trim().is_empty() {
            return Err(AnalysisPrecondition::BlankJobDescription);
        }
        let resume_text = self
            .resume_text()
            .ok_or(AnalysisPrecondition::MissingResume)?;
        Ok(AnalysisRequest {
            job_description: job_description.to_string(),
            resume_text: resume_text.to_string(),
        })
    }

    pub(crate) fn store(&mut self, resume: EnhancedResume) {
        self.enhanced = Some(resume);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(text: &str) -> SessionContext {
        let mut session = SessionContext::new();
        session.store(EnhancedResume {
            text: text.to_string(),
            download_url: "/download/enhanced_cv.pdf".to_string(),
            original_text: None,
        });
        session
    }

    #[test]
    fn blank_description_is_reported_before_missing_resume() {
        let session = SessionContext::new();
        assert_eq!(
            session.analysis_request(" \t\n"),
            Err(AnalysisPrecondition::BlankJobDescription)
        );
        assert_eq!(
            session.analysis_request("Rust engineer"),
            Err(AnalysisPrecondition::MissingResume)
        );
    }

    #[test]
    fn empty_resume_text_counts_as_missing() {
        let session = session_with("");
        assert_eq!(session.resume_text(), None);
        assert_eq!(
            session.analysis_request("Rust engineer"),
            Err(AnalysisPrecondition::MissingResume)
        );
    }

    #[test]
    fn request_keeps_description_untrimmed() {
        let session = session_with("R");
        let request = session.analysis_request("  Rust engineer \n").unwrap();
        assert_eq!(request.job_description, "  Rust engineer \n");
        assert_eq!(request.resume_text, "R");
    }
}
