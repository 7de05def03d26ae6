//! About page - skills with animated progress bars.

use dioxus::prelude::*;

use crate::components::{FadeIn, SkillBar};
use crate::content::SKILL_CATEGORIES;
use crate::context::use_site_config;

#[component]
pub fn About() -> Element {
    let config = use_site_config();

    rsx! {
        section { class: "section page-top", id: "about",
            h2 { class: "section-title", "About Me" }
            p { class: "about-text",
                "I'm {config.owner_name}, a developer who enjoys turning data into "
                "working software. I build Python services, analyse datasets and "
                "ship small tools end to end."
            }
        }

        section { class: "section alt", id: "skills",
            h2 { class: "section-title", "Skills" }
            div { class: "skills-grid",
                for category in SKILL_CATEGORIES {
                    FadeIn { key: "{category.title}", class: "skill-category",
                        h3 { "{category.title}" }
                        for (name, progress) in category.skills.iter().copied() {
                            SkillBar {
                                key: "{name}",
                                name: name.to_string(),
                                progress: progress.to_string(),
                            }
                        }
                    }
                }
            }
        }
    }
}
