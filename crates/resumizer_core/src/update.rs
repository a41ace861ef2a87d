use crate::messages::{ALERT_NO_FILE, ALERT_NO_RESUME};
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// Completions carrying a request id other than the one in flight for that
/// action are dropped, so the most recently issued attempt always wins.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FilesSelected(files) => {
            state.select_file(files.into_iter().next());
            Vec::new()
        }
        Msg::UploadClicked => match state.selected_file().cloned() {
            None => vec![Effect::alert(ALERT_NO_FILE)],
            Some(file) => {
                let request_id = state.begin_upload();
                vec![Effect::UploadResume { request_id, file }]
            }
        },
        Msg::UploadFinished {
            request_id,
            outcome,
        } => {
            state.finish_upload(request_id, outcome);
            Vec::new()
        }
        Msg::JobDescriptionChanged(text) => {
            state.set_job_description(text);
            Vec::new()
        }
        Msg::AnalyzeClicked => {
            match state.session().analysis_request(state.job_description()) {
                Err(precondition) => vec![Effect::alert(precondition.alert_message())],
                Ok(request) => {
                    let request_id = state.begin_analysis();
                    vec![Effect::AnalyzeJobMatch {
                        request_id,
                        request,
                    }]
                }
            }
        }
        Msg::AnalysisFinished {
            request_id,
            outcome,
        } => {
            state.finish_analysis(request_id, outcome);
            Vec::new()
        }
        Msg::DownloadClicked => match state.visible_download_url().map(ToOwned::to_owned) {
            None => vec![Effect::alert(ALERT_NO_RESUME)],
            Some(url) => {
                let request_id = state.begin_download();
                vec![Effect::DownloadResume { request_id, url }]
            }
        },
        Msg::DownloadFinished {
            request_id,
            outcome,
        } => {
            state.finish_download(request_id, outcome);
            Vec::new()
        }
    };

    (state, effects)
}
