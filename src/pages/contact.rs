//! Contact page - form plus certifications.

use dioxus::prelude::*;

use crate::components::{ContactForm, FadeIn};
use crate::content::CERTIFICATIONS;
use crate::context::use_site_config;

#[component]
pub fn Contact() -> Element {
    let config = use_site_config();

    rsx! {
        section { class: "section page-top", id: "contact",
            h2 { class: "section-title", "Get in Touch" }
            div { class: "contact-grid",
                div { class: "contact-info",
                    p { "Have a project in mind or just want to say hello? Send a message." }
                    p { class: "contact-email",
                        a { href: "mailto:{config.contact_email}", "{config.contact_email}" }
                    }
                }
                ContactForm {}
            }
        }

        section { class: "section alt", id: "certifications",
            h2 { class: "section-title", "Certifications" }
            div { class: "cert-grid",
                for cert in CERTIFICATIONS {
                    FadeIn { key: "{cert.name}", class: "cert-card",
                        h3 { "{cert.name}" }
                        p { "{cert.issuer}" }
                    }
                }
            }
        }
    }
}
