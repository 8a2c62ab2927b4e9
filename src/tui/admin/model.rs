//! Admin TUI model types for testable state management
//!
//! Separates state (`AdminState`) from the iocraft view: key mapping, the
//! reducer, and visible-list computation are pure functions exercised by unit
//! tests without the framework. Async operations (load and mutate) are
//! declared here as actions but executed by the view's handlers.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::query::{ListFilter, category_options, filter_media, filter_projects};
use crate::tui::components::confirm_modal::ConfirmTarget;
use crate::tui::components::toast::Toast;
use crate::tui::navigation;
use crate::types::{ContentPage, MediaFile, MediaKind, NewMediaFile, Project, SiteSetting};

use super::state::{AdminTab, MediaForm, NavigationData};

// ============================================================================
// State
// ============================================================================

/// Raw state that changes during user interaction.
///
/// Each tab owns a replaceable cached list; a load overwrites it wholesale.
#[derive(Debug, Clone, Default)]
pub struct AdminState {
    pub active_tab: AdminTab,

    // Data (full lists as last loaded)
    pub projects: Vec<Project>,
    pub media: Vec<MediaFile>,
    pub pages: Vec<ContentPage>,
    pub settings: Vec<SiteSetting>,

    // Per-tab navigation
    pub projects_nav: NavigationData,
    pub media_nav: NavigationData,
    pub content_nav: NavigationData,

    // Local filters (pure, never re-query)
    pub search: String,
    pub search_focused: bool,
    pub category_filter: Option<String>,
    pub kind_filter: Option<MediaKind>,

    // Modals and notifications
    pub toast: Option<Toast>,
    pub confirm: Option<ConfirmTarget>,
    pub media_form: Option<MediaForm>,

    // Loading/app state
    pub loading: bool,
    pub should_exit: bool,
}

/// Freshly loaded data for one tab, replacing the cached list wholesale.
#[derive(Debug, Clone)]
pub enum TabData {
    Projects(Vec<Project>),
    Media(Vec<MediaFile>),
    Content(Vec<ContentPage>, Vec<SiteSetting>),
}

impl TabData {
    pub fn tab(&self) -> AdminTab {
        match self {
            TabData::Projects(_) => AdminTab::Projects,
            TabData::Media(_) => AdminTab::Media,
            TabData::Content(..) => AdminTab::Content,
        }
    }
}

/// One row of the content tab (pages and settings interleaved).
#[derive(Debug, Clone)]
pub enum ContentRow {
    Page(ContentPage),
    Setting(SiteSetting),
}

// ============================================================================
// Actions
// ============================================================================

/// All possible actions on the admin TUI.
///
/// Most are pure state transitions handled by [`reduce_admin_state`]. The
/// async ones (`Fetch`, `ConfirmAccepted`, `SubmitMediaForm`,
/// `TogglePublish`) also trigger an operation in the view; the reducer only
/// applies their synchronous part.
#[derive(Debug, Clone, PartialEq)]
pub enum AdminAction {
    // Navigation
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    NextTab,
    PrevTab,
    SelectTab(AdminTab),

    // Filters (pure local recompute)
    CycleCategory,
    CycleKind,
    FocusSearch,
    SearchInput(char),
    SearchBackspace,
    ExitSearch,
    ClearSearch,

    // Multi-select (media tab)
    ToggleSelection,
    ClearSelection,

    // Add-media form
    OpenMediaForm,
    CancelMediaForm,
    FormInput(char),
    FormBackspace,
    FormNextField,

    // Confirm dialog
    RequestDelete,
    CancelConfirm,

    // Toasts
    ShowToast(Toast),
    DismissToast,

    // Async operations (reducer applies the synchronous part only)
    Fetch,
    ConfirmAccepted,
    SubmitMediaForm,
    TogglePublish,

    // Results delivered by async handlers
    Loaded(TabDataEnvelope),
    LoadFailed(AdminTab),
    MutationSucceeded(String),
    MutationFailed(String),

    // App
    Quit,
}

/// Wrapper so `AdminAction` can stay `PartialEq` for test assertions while
/// carrying non-comparable payloads.
#[derive(Debug, Clone)]
pub struct TabDataEnvelope(pub TabData);

impl PartialEq for TabDataEnvelope {
    fn eq(&self, other: &Self) -> bool {
        self.0.tab() == other.0.tab()
    }
}

// ============================================================================
// Visible lists (pure filter application)
// ============================================================================

/// The project list as filtered by the active category and search.
pub fn visible_projects(state: &AdminState) -> Vec<Project> {
    let mut filter = match &state.category_filter {
        Some(cat) => ListFilter::with_category(cat),
        None => ListFilter::new(),
    };
    filter = filter.with_search(&state.search);
    filter_projects(&state.projects, &filter)
}

/// The media list as filtered by the active kind and search.
pub fn visible_media(state: &AdminState) -> Vec<MediaFile> {
    filter_media(&state.media, state.kind_filter.as_ref(), &state.search)
}

/// The content tab rows (pages then settings) as filtered by search.
pub fn visible_content(state: &AdminState) -> Vec<ContentRow> {
    let mut rows: Vec<ContentRow> = crate::query::filter_pages(&state.pages, &state.search)
        .into_iter()
        .map(ContentRow::Page)
        .collect();
    rows.extend(
        crate::query::filter_settings(&state.settings, &state.search)
            .into_iter()
            .map(ContentRow::Setting),
    );
    rows
}

/// Count of visible rows on the given tab.
pub fn visible_count_for(state: &AdminState, tab: AdminTab) -> usize {
    match tab {
        AdminTab::Projects => visible_projects(state).len(),
        AdminTab::Media => visible_media(state).len(),
        AdminTab::Content => visible_content(state).len(),
    }
}

/// Count of visible rows on the active tab.
pub fn visible_count(state: &AdminState) -> usize {
    visible_count_for(state, state.active_tab)
}

/// Selectable categories for the projects tab, derived from loaded data.
pub fn project_categories(state: &AdminState) -> Vec<String> {
    category_options(&state.projects, |p| p.data_cat.as_str())
}

/// The project the cursor is on, if any.
pub fn selected_project(state: &AdminState) -> Option<Project> {
    visible_projects(state)
        .get(state.projects_nav.selected_index)
        .cloned()
}

/// The media file the cursor is on, if any.
pub fn selected_media(state: &AdminState) -> Option<MediaFile> {
    visible_media(state)
        .get(state.media_nav.selected_index)
        .cloned()
}

/// Target for a toggle-publish request: the id and the *loaded* value.
///
/// The negation is written without re-fetching first; concurrent operators
/// race and the last write wins.
pub fn toggle_target(state: &AdminState) -> Option<(String, bool)> {
    selected_project(state).map(|p| (p.id, p.is_published))
}

/// What a delete request on the current tab would remove.
pub fn delete_target(state: &AdminState) -> Option<ConfirmTarget> {
    match state.active_tab {
        AdminTab::Projects => selected_project(state).map(|p| ConfirmTarget::Project {
            id: p.id,
            title: p.title,
        }),
        AdminTab::Media => {
            if !state.media_nav.selected_ids.is_empty() {
                let mut ids: Vec<String> =
                    state.media_nav.selected_ids.iter().cloned().collect();
                ids.sort();
                return Some(ConfirmTarget::Media { ids });
            }
            selected_media(state).map(|m| ConfirmTarget::Media { ids: vec![m.id] })
        }
        AdminTab::Content => None,
    }
}

/// Validate the open add-media form into an insert payload.
///
/// Returns the user-visible validation error when a required field is empty;
/// no request may be issued in that case.
pub fn prepare_media_submit(state: &AdminState) -> Result<NewMediaFile, String> {
    let form = state
        .media_form
        .as_ref()
        .ok_or_else(|| "no open form".to_string())?;
    let row = NewMediaFile {
        file_name: form.file_name.trim().to_string(),
        file_url: form.file_url.trim().to_string(),
        file_type: form.file_type.clone(),
        file_size: None,
    };
    row.validate().map_err(|e| e.to_string())?;
    Ok(row)
}

// ============================================================================
// Key mapping
// ============================================================================

/// Snapshot of modal visibility for key routing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModalSnapshot {
    pub search_focused: bool,
    pub form_open: bool,
    pub confirm_open: bool,
    pub active_tab: AdminTab,
}

impl ModalSnapshot {
    pub fn of(state: &AdminState) -> Self {
        Self {
            search_focused: state.search_focused,
            form_open: state.media_form.is_some(),
            confirm_open: state.confirm.is_some(),
            active_tab: state.active_tab,
        }
    }
}

/// Pure function: map a key press to an action given modal visibility.
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    snapshot: &ModalSnapshot,
) -> Option<AdminAction> {
    // Confirm dialog captures everything
    if snapshot.confirm_open {
        return match code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(AdminAction::ConfirmAccepted),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                Some(AdminAction::CancelConfirm)
            }
            _ => None,
        };
    }

    // Add-media form captures everything
    if snapshot.form_open {
        return match code {
            KeyCode::Esc => Some(AdminAction::CancelMediaForm),
            KeyCode::Enter => Some(AdminAction::SubmitMediaForm),
            KeyCode::Tab | KeyCode::Down => Some(AdminAction::FormNextField),
            KeyCode::Backspace => Some(AdminAction::FormBackspace),
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AdminAction::FormInput(c))
            }
            _ => None,
        };
    }

    // Search box captures character input
    if snapshot.search_focused {
        return match code {
            KeyCode::Esc | KeyCode::Enter => Some(AdminAction::ExitSearch),
            KeyCode::Backspace => Some(AdminAction::SearchBackspace),
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AdminAction::SearchInput(c))
            }
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(AdminAction::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AdminAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AdminAction::MoveUp),
        KeyCode::Char('g') => Some(AdminAction::GoToTop),
        KeyCode::Char('G') => Some(AdminAction::GoToBottom),
        KeyCode::Tab => Some(AdminAction::NextTab),
        KeyCode::BackTab => Some(AdminAction::PrevTab),
        KeyCode::Char('1') => Some(AdminAction::SelectTab(AdminTab::Projects)),
        KeyCode::Char('2') => Some(AdminAction::SelectTab(AdminTab::Media)),
        KeyCode::Char('3') => Some(AdminAction::SelectTab(AdminTab::Content)),
        KeyCode::Char('/') => Some(AdminAction::FocusSearch),
        KeyCode::Char('c') => match snapshot.active_tab {
            AdminTab::Projects => Some(AdminAction::CycleCategory),
            AdminTab::Media => Some(AdminAction::CycleKind),
            AdminTab::Content => None,
        },
        KeyCode::Char('r') => Some(AdminAction::Fetch),
        KeyCode::Char('p') if snapshot.active_tab == AdminTab::Projects => {
            Some(AdminAction::TogglePublish)
        }
        KeyCode::Char('a') if snapshot.active_tab == AdminTab::Media => {
            Some(AdminAction::OpenMediaForm)
        }
        KeyCode::Char('d') => Some(AdminAction::RequestDelete),
        KeyCode::Char('x') | KeyCode::Char(' ') if snapshot.active_tab == AdminTab::Media => {
            Some(AdminAction::ToggleSelection)
        }
        KeyCode::Esc => Some(AdminAction::ClearSearch),
        _ => None,
    }
}

// ============================================================================
// Footer shortcuts
// ============================================================================

/// Compute the footer shortcuts for the current modal state.
pub fn compute_shortcuts(snapshot: &ModalSnapshot) -> Vec<crate::tui::components::Shortcut> {
    use crate::tui::components::Shortcut;

    if snapshot.confirm_open {
        return vec![Shortcut::new("y", "Confirm"), Shortcut::new("n", "Cancel")];
    }
    if snapshot.form_open {
        return vec![
            Shortcut::new("Tab", "Next field"),
            Shortcut::new("Enter", "Add"),
            Shortcut::new("Esc", "Cancel"),
        ];
    }
    if snapshot.search_focused {
        return vec![
            Shortcut::new("Enter", "Apply"),
            Shortcut::new("Esc", "Done"),
        ];
    }

    let mut shortcuts = vec![
        Shortcut::new("Tab", "Next tab"),
        Shortcut::new("j/k", "Move"),
        Shortcut::new("/", "Search"),
    ];
    match snapshot.active_tab {
        AdminTab::Projects => {
            shortcuts.push(Shortcut::new("c", "Category"));
            shortcuts.push(Shortcut::new("p", "Publish/unpublish"));
            shortcuts.push(Shortcut::new("d", "Delete"));
        }
        AdminTab::Media => {
            shortcuts.push(Shortcut::new("c", "Kind"));
            shortcuts.push(Shortcut::new("a", "Add media"));
            shortcuts.push(Shortcut::new("x", "Select"));
            shortcuts.push(Shortcut::new("d", "Delete"));
        }
        AdminTab::Content => {}
    }
    shortcuts.push(Shortcut::new("r", "Reload"));
    shortcuts.push(Shortcut::new("q", "Quit"));
    shortcuts
}

// ============================================================================
// Reducer
// ============================================================================

fn nav_for(state: &mut AdminState, tab: AdminTab) -> &mut NavigationData {
    match tab {
        AdminTab::Projects => &mut state.projects_nav,
        AdminTab::Media => &mut state.media_nav,
        AdminTab::Content => &mut state.content_nav,
    }
}

/// Pure function: apply an action to the state (reducer pattern).
///
/// Contains only synchronous transitions; network I/O lives in the view's
/// async handlers, which feed results back through `Loaded` /
/// `MutationSucceeded` / `MutationFailed`.
pub fn reduce_admin_state(
    mut state: AdminState,
    action: AdminAction,
    list_height: usize,
) -> AdminState {
    let count = visible_count(&state);
    let tab = state.active_tab;

    match action {
        // Navigation
        AdminAction::MoveUp => {
            navigation::scroll_up(nav_for(&mut state, tab));
        }
        AdminAction::MoveDown => {
            navigation::scroll_down(nav_for(&mut state, tab), count, list_height);
        }
        AdminAction::GoToTop => {
            navigation::scroll_to_top(nav_for(&mut state, tab));
        }
        AdminAction::GoToBottom => {
            navigation::scroll_to_bottom(nav_for(&mut state, tab), count, list_height);
        }
        AdminAction::NextTab => {
            state.active_tab = tab.next();
            state.toast = None;
        }
        AdminAction::PrevTab => {
            state.active_tab = tab.prev();
            state.toast = None;
        }
        AdminAction::SelectTab(target) => {
            state.active_tab = target;
            state.toast = None;
        }

        // Filters are pure local recompute; the cursor resets because the
        // visible sequence changed
        AdminAction::CycleCategory => {
            let options = project_categories(&state);
            state.category_filter = next_category(&state.category_filter, &options);
            state.projects_nav.reset();
        }
        AdminAction::CycleKind => {
            state.kind_filter = match state.kind_filter {
                None => Some(MediaKind::Image),
                Some(MediaKind::Image) => Some(MediaKind::Video),
                Some(_) => None,
            };
            state.media_nav.reset();
        }
        AdminAction::FocusSearch => {
            state.search_focused = true;
        }
        AdminAction::SearchInput(c) => {
            state.search.push(c);
            nav_for(&mut state, tab).reset();
        }
        AdminAction::SearchBackspace => {
            state.search.pop();
            nav_for(&mut state, tab).reset();
        }
        AdminAction::ExitSearch => {
            state.search_focused = false;
        }
        AdminAction::ClearSearch => {
            if state.toast.is_some() {
                state.toast = None;
            } else if !state.search.is_empty() {
                state.search.clear();
                nav_for(&mut state, tab).reset();
            } else {
                nav_for(&mut state, tab).selected_ids.clear();
            }
        }

        // Multi-select (media tab)
        AdminAction::ToggleSelection => {
            if let Some(media) = selected_media(&state) {
                let ids = &mut state.media_nav.selected_ids;
                if !ids.remove(&media.id) {
                    ids.insert(media.id);
                }
            }
        }
        AdminAction::ClearSelection => {
            state.media_nav.selected_ids.clear();
        }

        // Add-media form
        AdminAction::OpenMediaForm => {
            state.media_form = Some(MediaForm::default());
        }
        AdminAction::CancelMediaForm => {
            state.media_form = None;
        }
        AdminAction::FormInput(c) => {
            if let Some(form) = &mut state.media_form {
                form.input(c);
            }
        }
        AdminAction::FormBackspace => {
            if let Some(form) = &mut state.media_form {
                form.backspace();
            }
        }
        AdminAction::FormNextField => {
            if let Some(form) = &mut state.media_form {
                form.focused = form.focused.next();
            }
        }

        // Confirm dialog
        AdminAction::RequestDelete => {
            state.confirm = delete_target(&state);
        }
        AdminAction::CancelConfirm => {
            // Declining is a no-op beyond closing the dialog
            state.confirm = None;
        }
        AdminAction::ConfirmAccepted => {
            state.confirm = None;
        }

        // Toasts
        AdminAction::ShowToast(toast) => {
            state.toast = Some(toast);
        }
        AdminAction::DismissToast => {
            state.toast = None;
        }

        // Async operations: synchronous part only
        AdminAction::Fetch => {
            state.loading = true;
        }
        AdminAction::SubmitMediaForm | AdminAction::TogglePublish => {}

        // Results
        AdminAction::Loaded(TabDataEnvelope(data)) => {
            let target = data.tab();
            match data {
                TabData::Projects(rows) => state.projects = rows,
                TabData::Media(rows) => state.media = rows,
                TabData::Content(pages, settings) => {
                    state.pages = pages;
                    state.settings = settings;
                }
            }
            if target == state.active_tab {
                state.loading = false;
            }
            let new_count = visible_count_for(&state, target);
            let nav = nav_for(&mut state, target);
            nav.selected_ids.clear();
            navigation::clamp_selection(nav, new_count);
        }
        AdminAction::LoadFailed(target) => {
            // Previous data stays; only the loading flag flips off
            if target == state.active_tab {
                state.loading = false;
            }
        }
        AdminAction::MutationSucceeded(message) => {
            state.toast = Some(Toast::success(message));
            // Success closes and resets any open form; the reload is already
            // in flight
            state.media_form = None;
            state.media_nav.selected_ids.clear();
        }
        AdminAction::MutationFailed(message) => {
            // Local state untouched: list, form, and selection all survive
            state.toast = Some(Toast::error(message));
        }

        // App
        AdminAction::Quit => {
            state.should_exit = true;
        }
    }

    state
}

/// Advance the category filter: All → each derived option in order → All.
fn next_category(current: &Option<String>, options: &[String]) -> Option<String> {
    match current {
        None => options.first().cloned(),
        Some(cat) => {
            let idx = options.iter().position(|o| o == cat);
            match idx {
                Some(i) if i + 1 < options.len() => Some(options[i + 1].clone()),
                // Past the end, or the current category vanished on reload
                _ => None,
            }
        }
    }
}
