//! Elements that animate the first time they scroll into view.
//!
//! - [`FadeIn`]: cards fade and rise after a short delay
//! - [`SkillBar`]: progress bars fill to their `data-progress` width

use std::time::Duration;

use dioxus::prelude::*;
use dioxus::web::WebEventExt;
use gloo::timers::callback::Timeout;
use portfolio_core::{RevealEffect, RevealPhase};

use crate::context::{use_reveal_groups, use_site_config};
use crate::reveal::{RevealGroup, RevealGroups, RevealTicket};

/// Per-element reveal state
#[derive(Clone)]
struct Reveal {
    key: u32,
    group: RevealGroup,
    effect: RevealEffect,
    delay: Duration,
    phase: Signal<RevealPhase>,
    ticket: Signal<Option<RevealTicket>>,
    settle: Signal<Option<Timeout>>,
}

impl Reveal {
    fn style(&self) -> String {
        self.effect.style((self.phase)())
    }

    /// Register the mounted element with its group.
    ///
    /// The ticket and the settle timer live in this component's signals, so
    /// unmounting stops observation and cancels a pending settle.
    fn attach(&self, evt: MountedEvent) {
        let Some(element) = evt.data().try_as_web_event() else {
            tracing::debug!(key = self.key, "Reveal target is not a DOM element");
            return;
        };

        let effect = self.effect.clone();
        let delay = self.delay;
        let mut phase = self.phase;
        let mut settle = self.settle;
        let on_visible = move || {
            phase.set(effect.on_trigger());
            if effect.is_delayed() {
                let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
                settle.set(Some(Timeout::new(millis, move || {
                    phase.set(RevealPhase::Settled);
                })));
            }
        };

        let ticket = self.group.observe(self.key, &element, on_visible);
        let mut slot = self.ticket;
        slot.set(ticket);
    }
}

fn use_reveal(effect: RevealEffect, pick: fn(&RevealGroups) -> RevealGroup) -> Reveal {
    let config = use_site_config();
    let group = pick(&use_reveal_groups());
    let key = use_hook({
        let group = group.clone();
        move || group.allocate_key()
    });

    Reveal {
        key,
        group,
        effect,
        delay: config.fade_in_delay(),
        phase: use_signal(RevealPhase::default),
        ticket: use_signal(|| None),
        settle: use_signal(|| None),
    }
}

/// Wrapper that fades its children in once a tenth of it is visible.
#[component]
pub fn FadeIn(#[props(default)] class: String, children: Element) -> Element {
    let reveal = use_reveal(RevealEffect::FadeIn, |groups| groups.fades.clone());
    let style = reveal.style();
    let key = reveal.key;

    rsx! {
        div {
            class: "{class}",
            style: "{style}",
            "data-reveal": "{key}",
            onmounted: move |evt| reveal.attach(evt),
            {children}
        }
    }
}

/// Labeled skill bar that fills once half of it is visible.
///
/// `progress` is the target width as written in `data-progress`
/// (e.g. `"85%"`).
#[component]
pub fn SkillBar(name: String, progress: String) -> Element {
    let reveal = use_reveal(
        RevealEffect::SkillFill {
            progress: Some(progress.clone()),
        },
        |groups| groups.skills.clone(),
    );
    let style = reveal.style();
    let key = reveal.key;

    rsx! {
        div { class: "skill-item",
            div { class: "skill-info",
                span { class: "skill-name", "{name}" }
                span { class: "skill-percent", "{progress}" }
            }
            div { class: "skill-bar",
                div {
                    class: "skill-progress",
                    style: "{style}",
                    "data-progress": "{progress}",
                    "data-reveal": "{key}",
                    onmounted: move |evt| reveal.attach(evt),
                }
            }
        }
    }
}
