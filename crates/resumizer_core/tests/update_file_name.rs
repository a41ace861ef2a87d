use std::path::PathBuf;

use resumizer_core::{update, AppState, FileSelection, Msg};

fn file(name: &str) -> FileSelection {
    FileSelection {
        name: name.to_string(),
        path: PathBuf::from("/tmp").join(name),
    }
}

#[test]
fn selected_file_name_mirrors_first_file() {
    let (mut state, effects) = update(
        AppState::new(),
        Msg::FilesSelected(vec![file("cv.pdf"), file("other.pdf")]),
    );

    assert!(effects.is_empty());
    assert_eq!(state.view().selected_file_name, "cv.pdf");
    assert_eq!(state.selected_file(), Some(&file("cv.pdf")));
    assert!(state.consume_dirty());
}

#[test]
fn cleared_selection_clears_label() {
    let (state, _) = update(AppState::new(), Msg::FilesSelected(vec![file("cv.pdf")]));
    let (mut state, effects) = update(state, Msg::FilesSelected(Vec::new()));

    assert!(effects.is_empty());
    assert_eq!(state.view().selected_file_name, "");
    assert_eq!(state.selected_file(), None);
    assert!(state.consume_dirty());
}

#[test]
fn reselecting_replaces_label() {
    let (state, _) = update(AppState::new(), Msg::FilesSelected(vec![file("a.pdf")]));
    let (state, _) = update(state, Msg::FilesSelected(vec![file("b.pdf")]));

    assert_eq!(state.view().selected_file_name, "b.pdf");
}
