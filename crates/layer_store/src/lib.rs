//! Layer Store - Interactive state for the layers panel
//!
//! This crate holds the state the layers panel reads and mutates: the loaded
//! pages, the current page, the selection and its focus anchor, sidebar and
//! zoom state, and the mapping from pointer/keyboard input to operations.
//! All tree edits go through the pure functions of `layer_model`.

mod error;
mod selection;
mod layers;
mod sidebar;
mod zoom;
mod outline;
mod interaction;
mod settings;

pub use error::*;
pub use selection::*;
pub use layers::*;
pub use sidebar::*;
pub use zoom::*;
pub use outline::*;
pub use interaction::*;
pub use settings::*;
