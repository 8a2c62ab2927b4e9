//! Admin TUI module: the three-tab console over projects, media, and content
//!
//! The model (state, actions, reducer) is pure and unit-tested; the view
//! wires it to iocraft and the backend client.

pub mod model;
pub mod operations;
pub mod state;
pub mod view;

#[cfg(test)]
mod tests;

pub use model::{AdminAction, AdminState, reduce_admin_state};
pub use state::AdminTab;
pub use view::{AdminTui, AdminTuiProps};
