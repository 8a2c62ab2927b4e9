//! App header bar component
//!
//! Displays the console title, the active site, and the loaded record count.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    /// Active tab name
    pub tab_name: String,
    /// Visible record count after filtering
    pub visible_count: usize,
    /// Total loaded record count
    pub total_count: usize,
    /// Whether a load is in flight
    pub loading: bool,
}

/// Header bar showing title and record counts
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let counts = if props.loading {
        "loading…".to_string()
    } else if props.visible_count == props.total_count {
        format!("{} records", props.total_count)
    } else {
        format!("{} of {} records", props.visible_count, props.total_count)
    };

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.border,
        ) {
            Text(
                content: format!("slate admin — {}", props.tab_name),
                color: theme.text,
                weight: Weight::Bold,
            )
            Text(content: counts, color: theme.text_dimmed)
        }
    }
}
