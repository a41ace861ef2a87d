/// Content of an output element: escaped plain text or formatted markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputContent {
    Text(String),
    Markup(String),
}

impl Default for OutputContent {
    fn default() -> Self {
        OutputContent::Text(String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DownloadLinkView {
    pub href: Option<String>,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub selected_file_name: String,
    pub output: String,
    pub download_link: DownloadLinkView,
    pub analysis_section_visible: bool,
    pub job_description: String,
    pub analysis_output: OutputContent,
    pub download_status: Option<String>,
}
