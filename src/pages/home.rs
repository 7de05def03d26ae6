//! Home page - hero, experience and education.

use dioxus::prelude::*;
use portfolio_ui::ButtonVariant;

use crate::app::Route;
use crate::components::{FadeIn, FragmentLink, ResumeButton};
use crate::content::{TimelineItem, EDUCATION, EXPERIENCE};
use crate::context::use_site_config;

#[component]
pub fn Home() -> Element {
    let config = use_site_config();

    rsx! {
        header { class: "hero", id: "home",
            div { class: "hero-content",
                h1 { class: "hero-title", "Hi, I'm "
                    span { class: "highlight", "{config.owner_name}" }
                }
                p { class: "hero-subtitle", "Python Developer & Data Enthusiast" }
                div { class: "hero-buttons",
                    ResumeButton {}
                    Link { class: "btn btn-secondary", to: Route::Contact {}, "Get in Touch" }
                }
                FragmentLink { class: "scroll-hint".to_string(), href: "#experience", "Explore \u{2193}" }
            }
        }

        section { class: "section", id: "experience",
            h2 { class: "section-title", "Experience" }
            div { class: "timeline",
                for item in EXPERIENCE {
                    FadeIn { key: "{item.title}", class: "experience-item",
                        TimelineEntry { item }
                    }
                }
            }
        }

        section { class: "section alt", id: "education",
            h2 { class: "section-title", "Education" }
            div { class: "education-grid",
                for item in EDUCATION {
                    FadeIn { key: "{item.title}", class: "education-card",
                        TimelineEntry { item }
                    }
                }
            }
            div { class: "section-cta",
                ResumeButton { variant: ButtonVariant::Secondary }
            }
        }
    }
}

#[component]
fn TimelineEntry(item: &'static TimelineItem) -> Element {
    rsx! {
        span { class: "timeline-period", "{item.period}" }
        h3 { "{item.title}" }
        h4 { "{item.place}" }
        p { "{item.summary}" }
    }
}
