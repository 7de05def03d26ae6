//! Page-level components

mod contact_form;
mod fragment_link;
mod nav_header;
mod resume_button;
mod reveal;
mod scroll_to_top;

pub use contact_form::ContactForm;
pub use fragment_link::FragmentLink;
pub use nav_header::NavHeader;
pub use resume_button::ResumeButton;
pub use reveal::{FadeIn, SkillBar};
pub use scroll_to_top::ScrollToTop;
