use super::commands::{ElementKind, UiCommand};
use super::constants::*;

#[allow(clippy::vec_init_then_push)]
pub fn initial_commands() -> Vec<UiCommand> {
    let mut commands = Vec::new();

    commands.push(UiCommand::CreateElement {
        id: RESUME_FILE,
        parent: None,
        kind: ElementKind::FileInput,
        caption: "Resume (PDF)",
    });
    commands.push(UiCommand::CreateElement {
        id: SELECTED_FILE_NAME,
        parent: None,
        kind: ElementKind::Label,
        caption: "Selected file",
    });
    commands.push(UiCommand::CreateElement {
        id: OUTPUT,
        parent: None,
        kind: ElementKind::Label,
        caption: "Status",
    });
    commands.push(UiCommand::CreateElement {
        id: DOWNLOAD_LINK,
        parent: None,
        kind: ElementKind::Link,
        caption: "Download enhanced resume",
    });
    commands.push(UiCommand::CreateElement {
        id: DOWNLOAD_STATUS,
        parent: None,
        kind: ElementKind::Label,
        caption: "Download",
    });
    commands.push(UiCommand::CreateElement {
        id: ANALYSIS_SECTION,
        parent: None,
        kind: ElementKind::Section,
        caption: "Job match analysis",
    });
    commands.push(UiCommand::CreateElement {
        id: JOB_DESCRIPTION,
        parent: Some(ANALYSIS_SECTION),
        kind: ElementKind::TextInput,
        caption: "Job description",
    });
    commands.push(UiCommand::CreateElement {
        id: ANALYSIS_OUTPUT,
        parent: Some(ANALYSIS_SECTION),
        kind: ElementKind::Output,
        caption: "Analysis",
    });

    // Hidden until the first successful upload.
    commands.push(UiCommand::SetVisible {
        id: DOWNLOAD_LINK,
        visible: false,
    });
    commands.push(UiCommand::SetVisible {
        id: ANALYSIS_SECTION,
        visible: false,
    });

    commands
}
