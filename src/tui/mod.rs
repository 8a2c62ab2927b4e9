//! TUI module for the interactive admin screen
//!
//! `slate admin` opens a three-tab console (Projects / Media / Content)
//! implementing the same load → filter → mutate → reload cycle as the CLI
//! commands, with keyboard navigation and toast notifications.

pub mod admin;
pub mod components;
pub mod navigation;
pub mod theme;

pub use admin::{AdminTui, AdminTuiProps};
pub use theme::Theme;
