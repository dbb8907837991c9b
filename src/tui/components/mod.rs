//! # TUI Components
//!
//! All UI pieces of the terminal front-end.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: route, service URL and status
//! - `Preview`: the photo panel with the generation spinner
//! - `ActionBar`: the Generate and Share buttons
//! - `Alert`: modal notice
//! - `Home`: the root view listing shared posts
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `TextField`: labelled single-line input; owns its cursor, mirrors its
//!   value from the draft
//!
//! Components receive external data as props, never by reaching into `App`:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! Preview { photo: draft.photo.as_deref(), generating, .. }.render(frame, area);
//! ```

pub mod action_bar;
pub mod alert;
pub mod home;
pub mod preview;
pub mod text_field;
mod title_bar;

pub use action_bar::ActionBar;
pub use alert::{Alert, AlertEvent, AlertKeys};
pub use home::Home;
pub use preview::Preview;
pub use text_field::{FieldEvent, TextField};
pub use title_bar::TitleBar;
