//! Confirmation dialog for destructive operations
//!
//! Deletes go through this modal; declining leaves everything untouched.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// What a pending confirmation will delete when accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmTarget {
    /// Delete one project by id (display title kept for the message)
    Project { id: String, title: String },
    /// Delete one or more media files by id
    Media { ids: Vec<String> },
}

impl ConfirmTarget {
    /// Message shown in the dialog
    pub fn message(&self) -> String {
        match self {
            ConfirmTarget::Project { title, .. } => {
                format!("Are you sure you want to delete project '{title}'?")
            }
            ConfirmTarget::Media { ids } if ids.len() == 1 => {
                "Are you sure you want to delete this media file?".to_string()
            }
            ConfirmTarget::Media { ids } => {
                format!("Are you sure you want to delete {} media files?", ids.len())
            }
        }
    }
}

/// Props for the ConfirmDialog component
#[derive(Default, Props)]
pub struct ConfirmDialogProps {
    /// The message to display
    pub message: String,
}

/// Confirmation dialog overlay
#[component]
pub fn ConfirmDialog(props: &ConfirmDialogProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            position: Position::Absolute,
            width: 100pct,
            height: 100pct,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
        ) {
            View(
                width: 60,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: theme.warning,
                padding: 1,
            ) {
                Text(content: "Confirm", color: theme.warning, weight: Weight::Bold)
                Text(content: props.message.clone(), color: theme.text)
                Text(content: "[y]es / [n]o", color: theme.text_dimmed)
            }
        }
    }
}
