use std::path::PathBuf;

use resumizer_core::{FileSelection, Msg};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Dispatch(Msg),
    Show,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Parses one input line. `job+` needs the current description to append to.
pub(crate) fn parse_command(line: &str, job_description: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Command::Empty,
        "file" => Command::Dispatch(Msg::FilesSelected(selection(rest.trim()))),
        "upload" => Command::Dispatch(Msg::UploadClicked),
        "download" => Command::Dispatch(Msg::DownloadClicked),
        "job" => Command::Dispatch(Msg::JobDescriptionChanged(rest.to_string())),
        "job+" => {
            let text = if job_description.is_empty() {
                rest.to_string()
            } else {
                format!("{job_description}\n{rest}")
            };
            Command::Dispatch(Msg::JobDescriptionChanged(text))
        }
        "analyze" => Command::Dispatch(Msg::AnalyzeClicked),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

/// The whole argument is one path, so names with spaces work unquoted.
fn selection(arg: &str) -> Vec<FileSelection> {
    if arg.is_empty() {
        return Vec::new();
    }
    let path = PathBuf::from(arg);
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| arg.to_string());
    vec![FileSelection { name, path }]
}
