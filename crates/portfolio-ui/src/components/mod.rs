//! Reusable UI components

mod button;
mod form_message;
mod input;

pub use button::*;
pub use form_message::*;
pub use input::*;
