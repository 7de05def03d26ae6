//! Portfolio Site Core Library
//!
//! Everything the portfolio page does, minus the browser.
//!
//! ## Overview
//!
//! The page is a handful of independent behaviors: navbar styling on
//! scroll, a mobile menu, smooth in-page scrolling, reveal animations, a
//! scroll-to-top button and a contact form that posts to a form relay. This
//! crate holds the rules and state of each behavior as plain Rust so they
//! can be tested natively; the web crate only binds them to DOM events.
//!
//! ## Modules
//!
//! - [`contact`]: field validation, payload and the submission flow
//! - [`nav`]: navbar style, mobile menu state, active link matching
//! - [`scroll`]: scroll-to-top visibility and in-page anchor targets
//! - [`reveal`]: one-shot visibility triggers and their effects
//! - [`diagnostics`]: startup console banner
//! - [`config`]: every threshold, delay and address in one place
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_core::contact::{validate, ContactFields, Field};
//!
//! let mut fields = ContactFields::new();
//! fields.set(Field::Name, "A");
//!
//! let report = validate(&fields);
//! assert!(!report.is_valid());
//! assert_eq!(report.message(Field::Name), "Name must be at least 2 characters");
//! assert_eq!(report.message(Field::Email), "Email is required");
//! ```

pub mod config;
pub mod contact;
pub mod diagnostics;
pub mod error;
pub mod nav;
pub mod reveal;
pub mod scroll;

// Re-exports
pub use config::{RelayConfig, ResumeAsset, SiteConfig};
pub use contact::{ContactFields, ContactFlow, ContactView, FormRelay, RelayError, SubmitAttempt};
pub use error::{PortfolioError, PortfolioResult};
pub use nav::{MenuState, NavbarStyle};
pub use reveal::{Intersection, RevealEffect, RevealPhase, VisibilityTrigger};
pub use scroll::{Elevation, ScrollTopVisibility};
