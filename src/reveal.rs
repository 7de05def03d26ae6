//! IntersectionObserver glue for one-shot reveal effects.
//!
//! A [`RevealGroup`] owns one observer with a fixed threshold. Components
//! register their element with [`RevealGroup::observe`] and get back a
//! [`RevealTicket`]; the group decides through a [`VisibilityTrigger`] when
//! each element's effect runs, runs it once and stops observing the
//! element. Dropping the ticket (component unmount) unobserves the element
//! and discards an effect that has not run yet.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use js_sys::Array;
use portfolio_core::{Intersection, SiteConfig, VisibilityTrigger};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Attribute carrying the reveal key on observed elements
pub const REVEAL_KEY_ATTR: &str = "data-reveal";

type Effect = Box<dyn FnOnce()>;

struct Registry {
    trigger: VisibilityTrigger<u32>,
    effects: HashMap<u32, Effect>,
}

impl Registry {
    /// Effect to run for this observation, if the target fires now
    fn take_fired(&mut self, key: u32, sample: Intersection) -> Option<Effect> {
        if self.trigger.observe(&key, sample) {
            self.effects.remove(&key)
        } else {
            None
        }
    }
}

struct Inner {
    observer: Option<IntersectionObserver>,
    registry: Rc<RefCell<Registry>>,
    next_key: Cell<u32>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

/// Shared observer for every element revealed at the same threshold
#[derive(Clone)]
pub struct RevealGroup {
    inner: Rc<Inner>,
}

impl PartialEq for RevealGroup {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl RevealGroup {
    pub fn new(threshold: f64) -> Self {
        let registry = Rc::new(RefCell::new(Registry {
            trigger: VisibilityTrigger::new(threshold),
            effects: HashMap::new(),
        }));

        let callback_registry = registry.clone();
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    let Some(key) = target
                        .get_attribute(REVEAL_KEY_ATTR)
                        .and_then(|k| k.parse::<u32>().ok())
                    else {
                        continue;
                    };

                    let sample = Intersection::new(entry.is_intersecting(), entry.intersection_ratio());
                    // release the borrow before running the effect
                    let fired = callback_registry.borrow_mut().take_fired(key, sample);
                    if let Some(effect) = fired {
                        observer.unobserve(&target);
                        effect();
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => Some(observer),
                Err(err) => {
                    tracing::warn!(?err, threshold, "IntersectionObserver unavailable, reveals disabled");
                    None
                }
            };

        Self {
            inner: Rc::new(Inner {
                observer,
                registry,
                next_key: Cell::new(0),
                _callback: callback,
            }),
        }
    }

    /// Reserve a key for a new target element
    pub fn allocate_key(&self) -> u32 {
        let key = self.inner.next_key.get();
        self.inner.next_key.set(key.wrapping_add(1));
        key
    }

    /// Watch `element` (which must carry `data-reveal="{key}"`) and run
    /// `effect` the first time it is visible enough.
    pub fn observe(
        &self,
        key: u32,
        element: &Element,
        effect: impl FnOnce() + 'static,
    ) -> Option<RevealTicket> {
        let observer = self.inner.observer.as_ref()?;

        {
            let mut registry = self.inner.registry.borrow_mut();
            if !registry.trigger.watch(key) {
                return None;
            }
            registry.effects.insert(key, Box::new(effect));
        }

        observer.observe(element);
        Some(RevealTicket {
            key,
            element: element.clone(),
            group: self.clone(),
        })
    }
}

/// Registration of one element with a [`RevealGroup`]
pub struct RevealTicket {
    key: u32,
    element: Element,
    group: RevealGroup,
}

impl Drop for RevealTicket {
    fn drop(&mut self) {
        let inner = &self.group.inner;
        {
            let mut registry = inner.registry.borrow_mut();
            registry.trigger.retire(&self.key);
            registry.effects.remove(&self.key);
        }
        if let Some(observer) = &inner.observer {
            observer.unobserve(&self.element);
        }
    }
}

/// The two reveal groups used across the site
#[derive(Clone, PartialEq)]
pub struct RevealGroups {
    /// Skill bars filling up
    pub skills: RevealGroup,
    /// Cards fading in
    pub fades: RevealGroup,
}

impl RevealGroups {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            skills: RevealGroup::new(config.skill_reveal_threshold),
            fades: RevealGroup::new(config.fade_reveal_threshold),
        }
    }
}
