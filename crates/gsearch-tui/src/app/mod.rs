//! Application state and behaviour of the interactive search prompt.
//!
//! The [`App`] type wraps the headless search widget with terminal concerns.
//! Supporting modules split the implementation into input handling,
//! rendering, overlay selection and worker coordination.

mod actions;
mod overlay;
mod render;
mod search;
pub(crate) mod state;

pub(crate) use search::SearchRuntime;
pub use state::App;
