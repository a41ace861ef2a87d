use resumizer_core::{AppViewModel, OutputContent};

use super::commands::UiCommand;
use super::constants::*;

/// Job description is user-owned input and is never written back.
#[allow(clippy::vec_init_then_push)]
pub fn render(view: &AppViewModel) -> Vec<UiCommand> {
    let mut cmds = Vec::new();

    cmds.push(UiCommand::SetText {
        id: SELECTED_FILE_NAME,
        text: view.selected_file_name.clone(),
    });

    cmds.push(UiCommand::SetText {
        id: OUTPUT,
        text: view.output.clone(),
    });

    if let Some(href) = &view.download_link.href {
        cmds.push(UiCommand::SetHref {
            id: DOWNLOAD_LINK,
            href: href.clone(),
        });
    }
    cmds.push(UiCommand::SetVisible {
        id: DOWNLOAD_LINK,
        visible: view.download_link.visible,
    });

    cmds.push(UiCommand::SetText {
        id: DOWNLOAD_STATUS,
        text: view.download_status.clone().unwrap_or_default(),
    });

    cmds.push(UiCommand::SetVisible {
        id: ANALYSIS_SECTION,
        visible: view.analysis_section_visible,
    });

    cmds.push(match &view.analysis_output {
        OutputContent::Text(text) => UiCommand::SetText {
            id: ANALYSIS_OUTPUT,
            text: text.clone(),
        },
        OutputContent::Markup(markup) => UiCommand::SetMarkup {
            id: ANALYSIS_OUTPUT,
            markup: markup.clone(),
        },
    });

    cmds
}
