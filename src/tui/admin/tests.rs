//! Tests for the admin TUI, exercising the pure functions that underpin the
//! screens: key mapping, the reducer, filter application, and form
//! validation.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::tui::components::confirm_modal::ConfirmTarget;
use crate::tui::components::toast::ToastLevel;
use crate::types::{MediaFile, MediaKind, Project};

use super::model::{
    AdminAction, AdminState, ModalSnapshot, TabData, TabDataEnvelope, delete_target,
    key_to_action, prepare_media_submit, project_categories, reduce_admin_state, toggle_target,
    visible_media, visible_projects,
};
use super::state::{AdminTab, MediaForm, MediaFormField};

// ============================================================================
// Helpers
// ============================================================================

fn mock_project(id: &str, title: &str, data_cat: &str, published: bool) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        client: "Acme".to_string(),
        data_cat: data_cat.to_string(),
        is_published: published,
        ..Default::default()
    }
}

fn mock_media(id: &str, name: &str) -> MediaFile {
    MediaFile {
        id: id.to_string(),
        file_name: name.to_string(),
        file_url: format!("https://cdn.example.com/{name}"),
        file_type: MediaKind::Image,
        ..Default::default()
    }
}

fn loaded_state() -> AdminState {
    AdminState {
        projects: vec![
            mock_project("p1", "Moving Forward", "commercial", true),
            mock_project("p2", "Desert Lines", "documentary", false),
            mock_project("p3", "Skyline", "commercial", false),
        ],
        media: vec![mock_media("m1", "poster.jpg"), mock_media("m2", "reel.mp4")],
        ..Default::default()
    }
}

fn reduce(state: AdminState, action: AdminAction) -> AdminState {
    reduce_admin_state(state, action, 20)
}

// === Key mapping ===

/// Press 'j' with no modal open. Verify it maps to MoveDown.
#[test]
fn test_j_maps_to_move_down() {
    let snapshot = ModalSnapshot::default();
    assert_eq!(
        key_to_action(KeyCode::Char('j'), KeyModifiers::NONE, &snapshot),
        Some(AdminAction::MoveDown)
    );
}

/// Press 'p' on the projects tab vs the media tab. The shortcut only exists
/// where a publish flag exists.
#[test]
fn test_publish_key_is_tab_scoped() {
    let projects = ModalSnapshot {
        active_tab: AdminTab::Projects,
        ..Default::default()
    };
    assert_eq!(
        key_to_action(KeyCode::Char('p'), KeyModifiers::NONE, &projects),
        Some(AdminAction::TogglePublish)
    );

    let media = ModalSnapshot {
        active_tab: AdminTab::Media,
        ..Default::default()
    };
    assert_eq!(
        key_to_action(KeyCode::Char('p'), KeyModifiers::NONE, &media),
        None
    );
}

/// With the confirm dialog open, only y/n/Esc do anything; 'q' must not quit
/// out from under a pending delete.
#[test]
fn test_confirm_dialog_captures_keys() {
    let snapshot = ModalSnapshot {
        confirm_open: true,
        ..Default::default()
    };
    assert_eq!(
        key_to_action(KeyCode::Char('y'), KeyModifiers::NONE, &snapshot),
        Some(AdminAction::ConfirmAccepted)
    );
    assert_eq!(
        key_to_action(KeyCode::Esc, KeyModifiers::NONE, &snapshot),
        Some(AdminAction::CancelConfirm)
    );
    assert_eq!(
        key_to_action(KeyCode::Char('q'), KeyModifiers::NONE, &snapshot),
        None
    );
}

/// With the form open, characters go into the form, not the list shortcuts.
#[test]
fn test_form_captures_character_input() {
    let snapshot = ModalSnapshot {
        form_open: true,
        active_tab: AdminTab::Media,
        ..Default::default()
    };
    assert_eq!(
        key_to_action(KeyCode::Char('d'), KeyModifiers::NONE, &snapshot),
        Some(AdminAction::FormInput('d'))
    );
    assert_eq!(
        key_to_action(KeyCode::Enter, KeyModifiers::NONE, &snapshot),
        Some(AdminAction::SubmitMediaForm)
    );
}

// === Navigation ===

/// Press 'j' twice in a 3-project list. Selection advances and stops at the
/// last item without overflow.
#[test]
fn test_move_down_stops_at_bottom() {
    let mut state = loaded_state();
    state = reduce(state, AdminAction::MoveDown);
    state = reduce(state, AdminAction::MoveDown);
    assert_eq!(state.projects_nav.selected_index, 2);
    state = reduce(state, AdminAction::MoveDown);
    assert_eq!(state.projects_nav.selected_index, 2);
}

/// Press 'k' at the top. Selection stays at 0 (no underflow).
#[test]
fn test_move_up_at_top_stays() {
    let mut state = loaded_state();
    state = reduce(state, AdminAction::MoveUp);
    assert_eq!(state.projects_nav.selected_index, 0);
}

// === Filters ===

/// Cycle the category filter: All → commercial → documentary → All. The
/// options come from the loaded records, not a fixed enumeration.
#[test]
fn test_cycle_category_walks_derived_options() {
    let mut state = loaded_state();
    assert_eq!(project_categories(&state), ["commercial", "documentary"]);

    state = reduce(state, AdminAction::CycleCategory);
    assert_eq!(state.category_filter.as_deref(), Some("commercial"));
    assert_eq!(visible_projects(&state).len(), 2);

    state = reduce(state, AdminAction::CycleCategory);
    assert_eq!(state.category_filter.as_deref(), Some("documentary"));
    assert_eq!(visible_projects(&state).len(), 1);

    state = reduce(state, AdminAction::CycleCategory);
    assert_eq!(state.category_filter, None);
    assert_eq!(visible_projects(&state).len(), 3);
}

/// Type into search. The visible list narrows locally and the cursor resets;
/// the loaded list itself is untouched.
#[test]
fn test_search_narrows_without_touching_source() {
    let mut state = loaded_state();
    state.projects_nav.selected_index = 2;

    state = reduce(state, AdminAction::FocusSearch);
    for c in "sky".chars() {
        state = reduce(state, AdminAction::SearchInput(c));
    }

    assert_eq!(visible_projects(&state).len(), 1);
    assert_eq!(visible_projects(&state)[0].id, "p3");
    assert_eq!(state.projects.len(), 3);
    assert_eq!(state.projects_nav.selected_index, 0);
}

/// Kind filter on the media tab cycles all → image → video → all.
#[test]
fn test_cycle_kind_filter() {
    let mut state = loaded_state();
    state.active_tab = AdminTab::Media;
    state.media[1].file_type = MediaKind::Video;

    state = reduce(state, AdminAction::CycleKind);
    assert_eq!(state.kind_filter, Some(MediaKind::Image));
    assert_eq!(visible_media(&state).len(), 1);

    state = reduce(state, AdminAction::CycleKind);
    assert_eq!(state.kind_filter, Some(MediaKind::Video));

    state = reduce(state, AdminAction::CycleKind);
    assert_eq!(state.kind_filter, None);
    assert_eq!(visible_media(&state).len(), 2);
}

// === Load/Mutate/Reload ===

/// A load replaces the cached list wholesale and clamps the cursor to the
/// new bounds.
#[test]
fn test_loaded_replaces_wholesale_and_clamps() {
    let mut state = loaded_state();
    state.loading = true;
    state.projects_nav.selected_index = 2;

    let fresh = vec![mock_project("p9", "Only One", "commercial", true)];
    state = reduce(
        state,
        AdminAction::Loaded(TabDataEnvelope(TabData::Projects(fresh))),
    );

    assert!(!state.loading);
    assert_eq!(state.projects.len(), 1);
    assert_eq!(state.projects[0].id, "p9");
    assert_eq!(state.projects_nav.selected_index, 0);
}

/// A failed load flips the loading flag off and keeps the previous data.
#[test]
fn test_load_failed_keeps_previous_data() {
    let mut state = loaded_state();
    state.loading = true;
    state = reduce(state, AdminAction::LoadFailed(AdminTab::Projects));
    assert!(!state.loading);
    assert_eq!(state.projects.len(), 3);
}

/// A failed mutation shows exactly one error toast and leaves the list, the
/// open form, and the selection untouched.
#[test]
fn test_mutation_failed_leaves_state_intact() {
    let mut state = loaded_state();
    state.active_tab = AdminTab::Media;
    state.media_form = Some(MediaForm {
        file_name: "a.jpg".to_string(),
        file_url: "https://x/a.jpg".to_string(),
        ..Default::default()
    });
    state.media_nav.selected_ids.insert("m1".to_string());
    let before_media = state.media.clone();

    state = reduce(
        state,
        AdminAction::MutationFailed("Failed to add media".to_string()),
    );

    let toast = state.toast.as_ref().expect("one failure toast");
    assert_eq!(toast.level, ToastLevel::Error);
    assert_eq!(toast.message, "Failed to add media");
    assert_eq!(state.media.len(), before_media.len());
    assert!(state.media_form.is_some(), "form survives a failure");
    assert!(state.media_nav.selected_ids.contains("m1"));
}

/// A successful mutation closes the form, resets it to empty defaults, and
/// clears the bulk selection.
#[test]
fn test_mutation_succeeded_resets_form_and_selection() {
    let mut state = loaded_state();
    state.active_tab = AdminTab::Media;
    state.media_form = Some(MediaForm {
        file_name: "a.jpg".to_string(),
        file_url: "https://x/a.jpg".to_string(),
        file_type: MediaKind::Video,
        focused: MediaFormField::Url,
    });
    state.media_nav.selected_ids.insert("m1".to_string());

    state = reduce(
        state,
        AdminAction::MutationSucceeded("Media added successfully!".to_string()),
    );

    assert!(state.media_form.is_none());
    assert!(state.media_nav.selected_ids.is_empty());
    let toast = state.toast.as_ref().unwrap();
    assert_eq!(toast.level, ToastLevel::Success);
}

// === Confirmation ===

/// 'd' on a project opens a confirm dialog naming the record; declining
/// closes it with no other change.
#[test]
fn test_delete_request_and_decline_is_noop() {
    let mut state = loaded_state();
    state = reduce(state, AdminAction::RequestDelete);

    match state.confirm.as_ref().expect("confirm dialog open") {
        ConfirmTarget::Project { id, title } => {
            assert_eq!(id, "p1");
            assert_eq!(title, "Moving Forward");
        }
        other => panic!("unexpected target: {other:?}"),
    }

    let before = state.projects.clone();
    state = reduce(state, AdminAction::CancelConfirm);
    assert!(state.confirm.is_none());
    assert_eq!(state.projects.len(), before.len());
    assert!(state.toast.is_none());
}

/// With media rows multi-selected, a delete request targets the whole
/// selection rather than the cursor row.
#[test]
fn test_delete_request_prefers_multi_selection() {
    let mut state = loaded_state();
    state.active_tab = AdminTab::Media;
    state.media_nav.selected_ids.insert("m1".to_string());
    state.media_nav.selected_ids.insert("m2".to_string());

    match delete_target(&state).expect("target") {
        ConfirmTarget::Media { ids } => assert_eq!(ids, ["m1", "m2"]),
        other => panic!("unexpected target: {other:?}"),
    }
}

// === Toggle publish ===

/// Toggle-publish reads the loaded value: a draft project yields a request
/// to set `true`, without re-fetching first.
#[test]
fn test_toggle_target_negates_loaded_value() {
    let mut state = loaded_state();
    state.projects_nav.selected_index = 1; // p2, is_published = false

    let (id, current) = toggle_target(&state).expect("target");
    assert_eq!(id, "p2");
    assert!(!current, "loaded value is the draft state");
}

// === Form validation ===

/// An empty file_name fails validation; the caller must not issue a write.
#[test]
fn test_prepare_media_submit_rejects_empty_fields() {
    let mut state = loaded_state();
    state.media_form = Some(MediaForm {
        file_name: String::new(),
        file_url: "x".to_string(),
        ..Default::default()
    });

    let err = prepare_media_submit(&state).unwrap_err();
    assert_eq!(err, "Please fill in all fields");
}

/// A complete form validates into the insert payload with trimmed fields.
#[test]
fn test_prepare_media_submit_accepts_valid_form() {
    let mut state = loaded_state();
    state.media_form = Some(MediaForm {
        file_name: " a.jpg ".to_string(),
        file_url: "https://x/a.jpg".to_string(),
        file_type: MediaKind::Image,
        focused: MediaFormField::Name,
    });

    let row = prepare_media_submit(&state).unwrap();
    assert_eq!(row.file_name, "a.jpg");
    assert_eq!(row.file_url, "https://x/a.jpg");
    assert_eq!(row.file_type, MediaKind::Image);
}
