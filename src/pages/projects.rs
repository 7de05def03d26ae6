//! Projects page - project cards.

use dioxus::prelude::*;

use crate::components::FadeIn;
use crate::content::PROJECTS;

#[component]
pub fn Projects() -> Element {
    rsx! {
        section { class: "section page-top", id: "projects",
            h2 { class: "section-title", "Projects" }
            div { class: "projects-grid",
                for project in PROJECTS {
                    FadeIn { key: "{project.title}", class: "project-card",
                        h3 { "{project.title}" }
                        p { "{project.description}" }
                        div { class: "project-tags",
                            for tag in project.tags {
                                span { key: "{tag}", class: "tag", "{tag}" }
                            }
                        }
                        if let Some(link) = project.link {
                            a { class: "project-link", href: "{link}", target: "_blank", rel: "noopener", "View Project" }
                        }
                    }
                }
            }
        }
    }
}
