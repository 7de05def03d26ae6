//! Portfolio UI Components
//!
//! Presentation-only Dioxus components shared by the portfolio pages.
//!
//! Components here never talk to the browser directly: they render props
//! and report user input through `EventHandler`s. Element ids and class
//! names follow the site stylesheet:
//! - `form-group` / `error-message` for labeled inputs and their error slot
//! - `btn btn-primary` / `btn btn-secondary` for buttons
//! - `form-message success|error` for the form-wide message

pub mod components;

pub use components::*;
