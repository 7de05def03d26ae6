//! Page components for the portfolio.

mod about;
mod contact;
mod home;
mod not_found;
mod projects;

pub use about::About;
pub use contact::Contact;
pub use home::Home;
pub use not_found::NotFound;
pub use projects::Projects;
