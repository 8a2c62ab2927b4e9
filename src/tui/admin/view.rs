//! Main admin TUI view component
//!
//! Wires the pure model (state, reducer, key mapping) to iocraft: async
//! handlers perform the backend calls, every key press routes through
//! `key_to_action` and `reduce_admin_state`, and successful mutations
//! trigger a full reload of the affected tab.

use iocraft::prelude::*;
use tracing::debug;

use crate::backend::RestBackend;
use crate::config::Config;
use crate::tui::components::confirm_modal::{ConfirmDialog, ConfirmTarget};
use crate::tui::components::toast::{Toast, render_toast};
use crate::tui::components::{Footer, Header};
use crate::tui::theme::theme;
use crate::types::format_date;

use super::model::{
    AdminAction, AdminState, ContentRow, ModalSnapshot, TabDataEnvelope, compute_shortcuts,
    key_to_action, prepare_media_submit, project_categories, reduce_admin_state, selected_project,
    toggle_target, visible_content, visible_media, visible_projects,
};
use super::operations::{Mutation, load_tab, run_mutation};
use super::state::{AdminTab, MediaForm, MediaFormField};

/// Fetch one tab from the configured backend.
///
/// Configuration problems surface the same way as request failures: one
/// generic message, previous data untouched.
async fn fetch_tab(tab: AdminTab) -> Result<super::model::TabData, String> {
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            debug!(error = %e, "load config");
            return Err(format!("Failed to load {}", tab.name().to_lowercase()));
        }
    };
    let backend = match RestBackend::from_config(&config) {
        Ok(b) => b,
        Err(e) => {
            debug!(error = %e, "construct backend");
            return Err(format!("Failed to load {}", tab.name().to_lowercase()));
        }
    };
    load_tab(&backend, tab).await
}

/// Run one mutation against the configured backend.
async fn mutate(mutation: Mutation) -> Result<String, String> {
    let failure = match &mutation {
        Mutation::TogglePublish { .. } => "Failed to update project",
        Mutation::DeleteProject { .. } => "Failed to delete project",
        Mutation::DeleteMedia { .. } => "Failed to delete media",
        Mutation::AddMedia(_) => "Failed to add media",
    };
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            debug!(error = %e, "load config");
            return Err(failure.to_string());
        }
    };
    let backend = match RestBackend::from_config(&config) {
        Ok(b) => b,
        Err(e) => {
            debug!(error = %e, "construct backend");
            return Err(failure.to_string());
        }
    };
    run_mutation(&backend, mutation).await
}

/// Props for the AdminTui component
#[derive(Default, Props)]
pub struct AdminTuiProps {
    /// Tab to open first ("projects", "media", or "content")
    pub initial_tab: Option<String>,
}

/// Main admin TUI component
#[component]
pub fn AdminTui<'a>(props: &AdminTuiProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let initial_tab = match props.initial_tab.as_deref() {
        Some("media") => AdminTab::Media,
        Some("content") => AdminTab::Content,
        _ => AdminTab::Projects,
    };

    let state: State<AdminState> = hooks.use_state(|| AdminState {
        active_tab: initial_tab,
        loading: true,
        ..Default::default()
    });

    // Async load handler: replaces one tab's list wholesale
    let load_handler: Handler<AdminTab> = hooks.use_async_handler({
        let state = state;
        move |tab: AdminTab| {
            let mut state = state;
            async move {
                let result = fetch_tab(tab).await;
                let current = state.read().clone();
                let next = match result {
                    Ok(data) => reduce_admin_state(
                        current,
                        AdminAction::Loaded(TabDataEnvelope(data)),
                        0,
                    ),
                    Err(message) => {
                        let next =
                            reduce_admin_state(current, AdminAction::LoadFailed(tab), 0);
                        reduce_admin_state(
                            next,
                            AdminAction::ShowToast(Toast::error(message)),
                            0,
                        )
                    }
                };
                state.set(next);
            }
        }
    });

    // Async mutation handler: one write, then reload on success only
    let mutate_handler: Handler<Mutation> = hooks.use_async_handler({
        let state = state;
        let load_handler = load_handler.clone();
        move |mutation: Mutation| {
            let mut state = state;
            let load_handler = load_handler.clone();
            async move {
                let tab = mutation.tab();
                let result = mutate(mutation).await;
                let current = state.read().clone();
                match result {
                    Ok(message) => {
                        let next = reduce_admin_state(
                            current,
                            AdminAction::MutationSucceeded(message),
                            0,
                        );
                        let next = reduce_admin_state(next, AdminAction::Fetch, 0);
                        state.set(next);
                        load_handler.clone()(tab);
                    }
                    Err(message) => {
                        state.set(reduce_admin_state(
                            current,
                            AdminAction::MutationFailed(message),
                            0,
                        ));
                    }
                }
            }
        }
    });

    // Trigger initial load once
    let mut load_started = hooks.use_state(|| false);
    if !load_started.get() {
        load_started.set(true);
        load_handler.clone()(initial_tab);
    }

    let list_height = (height as usize).saturating_sub(7).max(1);

    // Keyboard event handling
    hooks.use_terminal_events({
        let load_handler = load_handler.clone();
        let mutate_handler = mutate_handler.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let mut state = state;
                let snapshot = ModalSnapshot::of(&state.read());
                let Some(action) = key_to_action(code, modifiers, &snapshot) else {
                    return;
                };

                match action {
                    AdminAction::Fetch => {
                        let current = state.read().clone();
                        let tab = current.active_tab;
                        state.set(reduce_admin_state(current, AdminAction::Fetch, list_height));
                        load_handler.clone()(tab);
                    }
                    AdminAction::NextTab | AdminAction::PrevTab | AdminAction::SelectTab(_) => {
                        // Screens are stateless between mounts: entering a
                        // tab always re-runs its loader
                        let current = state.read().clone();
                        let next = reduce_admin_state(current, action, list_height);
                        let tab = next.active_tab;
                        let next = reduce_admin_state(next, AdminAction::Fetch, list_height);
                        state.set(next);
                        load_handler.clone()(tab);
                    }
                    AdminAction::TogglePublish => {
                        let target = toggle_target(&state.read());
                        if let Some((id, current)) = target {
                            mutate_handler.clone()(Mutation::TogglePublish { id, current });
                        }
                    }
                    AdminAction::ConfirmAccepted => {
                        let current = state.read().clone();
                        let target = current.confirm.clone();
                        state.set(reduce_admin_state(
                            current,
                            AdminAction::ConfirmAccepted,
                            list_height,
                        ));
                        if let Some(target) = target {
                            let mutation = match target {
                                ConfirmTarget::Project { id, .. } => {
                                    Mutation::DeleteProject { id }
                                }
                                ConfirmTarget::Media { ids } => Mutation::DeleteMedia { ids },
                            };
                            mutate_handler.clone()(mutation);
                        }
                    }
                    AdminAction::SubmitMediaForm => {
                        let current = state.read().clone();
                        match prepare_media_submit(&current) {
                            Ok(row) => {
                                mutate_handler.clone()(Mutation::AddMedia(row));
                            }
                            Err(message) => {
                                state.set(reduce_admin_state(
                                    current,
                                    AdminAction::ShowToast(Toast::error(message)),
                                    list_height,
                                ));
                            }
                        }
                    }
                    other => {
                        let current = state.read().clone();
                        state.set(reduce_admin_state(current, other, list_height));
                    }
                }
            }
            _ => {}
        }
    });

    // Snapshot for rendering
    let st = state.read().clone();

    if st.should_exit {
        system.exit();
    }

    let snapshot = ModalSnapshot::of(&st);
    let shortcuts = compute_shortcuts(&snapshot);

    let (visible_total, total) = match st.active_tab {
        AdminTab::Projects => (visible_projects(&st).len(), st.projects.len()),
        AdminTab::Media => (visible_media(&st).len(), st.media.len()),
        AdminTab::Content => (
            visible_content(&st).len(),
            st.pages.len() + st.settings.len(),
        ),
    };

    let filter_line = filter_summary(&st);
    let detail_line = selected_project(&st)
        .filter(|_| st.active_tab == AdminTab::Projects)
        .map(|p| format!("{} — {}", p.video_url, p.poster_image));

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(
                tab_name: st.active_tab.name().to_string(),
                visible_count: visible_total,
                total_count: total,
                loading: st.loading,
            )

            // Tab bar
            View(
                width: 100pct,
                height: 1,
                flex_direction: FlexDirection::Row,
                padding_left: 1,
                column_gap: 2,
            ) {
                #(AdminTab::ALL.iter().map(|tab| {
                    let active = *tab == st.active_tab;
                    element! {
                        Text(
                            content: tab.name(),
                            color: if active { theme.highlight } else { theme.text_dimmed },
                            weight: if active { Weight::Bold } else { Weight::Normal },
                        )
                    }
                }))
            }

            // Filter/search row
            View(width: 100pct, height: 1, padding_left: 1) {
                Text(
                    content: filter_line,
                    color: if st.search_focused { theme.text } else { theme.text_dimmed },
                )
            }

            // Main list
            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Column,
                border_edges: Edges::Top,
                border_style: BorderStyle::Single,
                border_color: theme.border,
                padding_left: 1,
            ) {
                #(render_rows(&st, list_height))
            }

            // Selected project detail line
            #(detail_line.map(|line| element! {
                View(width: 100pct, height: 1, padding_left: 1) {
                    Text(content: line, color: theme.text_dimmed)
                }
            }.into_any()))

            Footer(shortcuts: shortcuts)

            #(render_toast(&st.toast))

            #(st.confirm.as_ref().map(|c| element! {
                ConfirmDialog(message: c.message())
            }.into_any()))

            #(st.media_form.as_ref().map(|form| element! {
                MediaFormModal(form: form.clone())
            }.into_any()))
        }
    }
}

/// One-line summary of the active filters.
fn filter_summary(st: &AdminState) -> String {
    let mut parts = Vec::new();
    match st.active_tab {
        AdminTab::Projects => {
            let category = st.category_filter.as_deref().unwrap_or("All");
            let options = project_categories(st);
            parts.push(format!("category: {category} ({})", options.join(", ")));
        }
        AdminTab::Media => {
            let kind = st
                .kind_filter
                .as_ref()
                .map(|k| k.to_string())
                .unwrap_or_else(|| "all".to_string());
            parts.push(format!("kind: {kind}"));
        }
        AdminTab::Content => {}
    }
    if st.search_focused || !st.search.is_empty() {
        parts.push(format!("search: {}_", st.search));
    }
    if parts.is_empty() {
        "press / to search".to_string()
    } else {
        parts.join("  ")
    }
}

/// Render the visible rows of the active tab.
fn render_rows(st: &AdminState, list_height: usize) -> Vec<AnyElement<'static>> {
    let theme = theme();

    if st.loading {
        return vec![
            element! {
                Text(content: format!("Loading {}...", st.active_tab.name().to_lowercase()), color: theme.text_dimmed)
            }
            .into_any(),
        ];
    }

    let empty_message = match st.active_tab {
        AdminTab::Projects => "No projects found. Create your first project!",
        AdminTab::Media => "No media files found",
        AdminTab::Content => "No content found",
    };

    let rows: Vec<AnyElement<'static>> = match st.active_tab {
        AdminTab::Projects => {
            let visible = visible_projects(st);
            let nav = &st.projects_nav;
            visible
                .iter()
                .enumerate()
                .skip(nav.scroll_offset)
                .take(list_height)
                .map(|(idx, p)| {
                    let selected = idx == nav.selected_index;
                    let badge = if p.is_published { "published" } else { "draft" };
                    let featured = if p.featured { " ★" } else { "" };
                    let line = format!(
                        "[{badge:>9}] {}{featured} — {} ({})",
                        p.title, p.client, p.data_cat
                    );
                    element! {
                        View(width: 100pct, height: 1, background_color: row_bg(selected)) {
                            Text(content: line, color: theme.publish_color(p.is_published))
                        }
                    }
                    .into_any()
                })
                .collect()
        }
        AdminTab::Media => {
            let visible = visible_media(st);
            let nav = &st.media_nav;
            visible
                .iter()
                .enumerate()
                .skip(nav.scroll_offset)
                .take(list_height)
                .map(|(idx, m)| {
                    let selected = idx == nav.selected_index;
                    let marked = nav.selected_ids.contains(&m.id);
                    let mark = if marked { "✓" } else { " " };
                    let line = format!("{mark} [{:>5}] {} {}", m.file_type, m.file_name, m.file_url);
                    element! {
                        View(width: 100pct, height: 1, background_color: row_bg(selected)) {
                            Text(content: line, color: theme.kind_color(&m.file_type))
                        }
                    }
                    .into_any()
                })
                .collect()
        }
        AdminTab::Content => {
            let visible = visible_content(st);
            let nav = &st.content_nav;
            visible
                .iter()
                .enumerate()
                .skip(nav.scroll_offset)
                .take(list_height)
                .map(|(idx, row)| {
                    let selected = idx == nav.selected_index;
                    let line = match row {
                        ContentRow::Page(p) => format!(
                            "page    {:>12} {} (updated {})",
                            p.page_type,
                            p.title,
                            format_date(&p.updated_at)
                        ),
                        ContentRow::Setting(s) => format!(
                            "setting {:>12} = {}",
                            s.key,
                            serde_json::to_string(&s.value).unwrap_or_default()
                        ),
                    };
                    element! {
                        View(width: 100pct, height: 1, background_color: row_bg(selected)) {
                            Text(content: line, color: theme.text)
                        }
                    }
                    .into_any()
                })
                .collect()
        }
    };

    if rows.is_empty() {
        return vec![
            element! {
                Text(content: empty_message, color: theme.text_dimmed)
            }
            .into_any(),
        ];
    }
    rows
}

fn row_bg(selected: bool) -> Color {
    let theme = theme();
    if selected {
        theme.border_focused
    } else {
        theme.background
    }
}

/// Props for the add-media form modal
#[derive(Default, Props)]
pub struct MediaFormModalProps {
    pub form: MediaForm,
}

/// The add-media form: file name, URL, and kind
#[component]
pub fn MediaFormModal(props: &MediaFormModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let form = &props.form;

    let field_line = |label: &str, value: &str, focused: bool| {
        let cursor = if focused { "_" } else { "" };
        format!("{label:<10} {value}{cursor}")
    };

    let name_focused = form.focused == MediaFormField::Name;
    let url_focused = form.focused == MediaFormField::Url;
    let kind_focused = form.focused == MediaFormField::Kind;

    let name_line = field_line("File Name:", &form.file_name, name_focused);
    let url_line = field_line("File URL:", &form.file_url, url_focused);
    let kind_line = format!(
        "File Type: {} {}",
        form.file_type,
        if kind_focused { "(space to change)" } else { "" }
    );

    let field_color = |focused: bool| {
        if focused {
            theme.text
        } else {
            theme.text_dimmed
        }
    };

    element! {
        View(
            position: Position::Absolute,
            width: 100pct,
            height: 100pct,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
        ) {
            View(
                width: 64,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: theme.border_focused,
                padding: 1,
            ) {
                Text(content: "Add New Media", color: theme.highlight, weight: Weight::Bold)
                Text(content: name_line, color: field_color(name_focused))
                Text(content: url_line, color: field_color(url_focused))
                Text(content: kind_line, color: field_color(kind_focused))
                Text(content: "Enter to add, Esc to cancel", color: theme.text_dimmed)
            }
        }
    }
}
