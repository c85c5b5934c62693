//! Accordion widget - show/hide content panels behind triggers.
//!
//! An accordion binds to one container node holding an ordered list of
//! (trigger, panel) pairs. Activation (click, keyboard, or an external
//! command) toggles a panel, keeps the ARIA attributes and panel heights in
//! sync, and publishes opened/closed notifications into the injected queue.
//!
//! # Example
//!
//! ```
//! use accordion::{AccordionBuilder, AccordionConfig, EventQueue, MemoryDom};
//!
//! let mut dom = MemoryDom::new();
//! dom.insert("faq");
//! dom.insert_under("q1", "faq").data("role", "trigger");
//! dom.insert_under("a1", "faq").data("role", "panel").natural_height(4);
//!
//! let events = EventQueue::new();
//! let mut widget = AccordionBuilder::new("faq")
//!     .config(AccordionConfig::default())
//!     .mount(dom, events.clone())
//!     .unwrap();
//!
//! widget.activate(0);
//! assert!(widget.state().is_expanded(0));
//! assert_eq!(events.drain().len(), 1);
//! ```

mod events;
mod render;
pub mod state;

pub use state::{AccordionState, Item, Toggle};

use crate::config::AccordionConfig;
use crate::dom::Dom;
use crate::error::AccordionError;
use crate::queue::{AccordionEvent, EventQueue};
use crate::viewport::ViewportProbe;

/// Builder for [`Accordion`]. The container id is the only required input.
pub struct AccordionBuilder {
    container: String,
    config: AccordionConfig,
    viewport: Option<Box<dyn ViewportProbe>>,
}

impl AccordionBuilder {
    pub fn new(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            config: AccordionConfig::default(),
            viewport: None,
        }
    }

    /// Set the instance configuration.
    pub fn config(mut self, config: AccordionConfig) -> Self {
        self.config = config;
        self
    }

    /// Inject a viewport probe, enabling viewport-conditional auto-open.
    pub fn viewport(mut self, probe: impl ViewportProbe + 'static) -> Self {
        self.viewport = Some(Box::new(probe));
        self
    }

    /// Discover triggers and panels, build the item list, cache panel
    /// heights and render the initial state.
    ///
    /// Panels must be measurable at this point; a zero measured height is a
    /// logged warning, not an error.
    pub fn mount<D: Dom>(self, dom: D, events: EventQueue) -> Result<Accordion<D>, AccordionError> {
        Accordion::mount(self.container, self.config, dom, events, self.viewport)
    }
}

/// An accordion bound to a DOM subtree.
#[derive(Debug)]
pub struct Accordion<D: Dom> {
    id: String,
    config: AccordionConfig,
    dom: D,
    events: EventQueue,
    triggers: Vec<String>,
    panels: Vec<String>,
    state: AccordionState,
}

impl<D: Dom> Accordion<D> {
    fn mount(
        container: String,
        config: AccordionConfig,
        dom: D,
        events: EventQueue,
        viewport: Option<Box<dyn ViewportProbe>>,
    ) -> Result<Self, AccordionError> {
        if !dom.contains(&container) {
            return Err(AccordionError::ContainerNotFound(container));
        }

        let triggers = dom.descendants_matching(&container, &config.trigger_selector);
        if triggers.is_empty() {
            return Err(AccordionError::NoTriggers {
                container,
                selector: config.trigger_selector.clone(),
            });
        }

        let panels = dom.descendants_matching(&container, &config.panel_selector);
        if triggers.len() != panels.len() {
            return Err(AccordionError::PairMismatch {
                container,
                triggers: triggers.len(),
                panels: panels.len(),
            });
        }

        let defaults = resolve_defaults(&container, &config, viewport.as_deref(), &dom, &triggers);
        let state = AccordionState::new(triggers.len(), &defaults, config.multiselectable);

        let mut widget = Self {
            id: container,
            config,
            dom,
            events,
            triggers,
            panels,
            state,
        };

        widget.measure_heights();
        widget.render_all();
        Ok(widget)
    }

    /// The container node id.
    pub fn container(&self) -> &str {
        &self.id
    }

    /// The current expansion state.
    pub fn state(&self) -> &AccordionState {
        &self.state
    }

    /// Trigger node ids, in item order.
    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    /// Panel node ids, in item order.
    pub fn panels(&self) -> &[String] {
        &self.panels
    }

    /// The underlying DOM binding.
    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// Mutable access to the underlying DOM binding.
    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    /// Select and toggle the item at `index`, closing the previously open
    /// item on single-open accordions. Re-renders the affected items and
    /// publishes opened/closed notifications; a forced close is published
    /// before the activated item's own event.
    pub fn activate(&mut self, index: usize) {
        let Some(toggle) = self.state.activate(index) else {
            log::warn!(
                "accordion `{}`: activate index {} out of range ({} items)",
                self.id,
                index,
                self.state.len()
            );
            return;
        };

        if let Some(prev) = toggle.closed_previous {
            self.render(prev);
            self.publish(AccordionEvent::ItemClosed {
                accordion: self.id.clone(),
                index: prev,
            });
        }

        self.render(index);
        let event = if toggle.expanded {
            AccordionEvent::ItemOpened {
                accordion: self.id.clone(),
                index,
            }
        } else {
            AccordionEvent::ItemClosed {
                accordion: self.id.clone(),
                index,
            }
        };
        self.publish(event);
    }

    /// Toggle the item whose trigger has the given id.
    ///
    /// With `desired_open` set, the call aborts (with a logged warning) when
    /// the item is already in the desired state. Unknown ids abort the same
    /// way, leaving state and DOM untouched.
    pub fn toggle_by_id(&mut self, id: &str, desired_open: Option<bool>) {
        let Some(index) = self.triggers.iter().position(|t| t == id) else {
            log::warn!("accordion `{}`: no item with id `{}`", self.id, id);
            return;
        };

        if let Some(open) = desired_open {
            if open == self.state.is_expanded(index) {
                log::warn!(
                    "accordion `{}`: item `{}` is already {}",
                    self.id,
                    id,
                    if open { "open" } else { "closed" }
                );
                return;
            }
        }

        self.activate(index);
    }

    /// Expand every item. Aborts with a logged warning on single-open
    /// accordions, where more than one open panel would break the invariant.
    pub fn open_all(&mut self) {
        if !self.state.multiselectable() {
            log::warn!(
                "accordion `{}`: open_all ignored, accordion is not multiselectable",
                self.id
            );
            return;
        }

        let changed = self.state.open_all();
        self.render_all();
        for index in changed {
            self.publish(AccordionEvent::ItemOpened {
                accordion: self.id.clone(),
                index,
            });
        }
    }

    /// Collapse every item.
    pub fn close_all(&mut self) {
        let changed = self.state.close_all();
        self.render_all();
        for index in changed {
            self.publish(AccordionEvent::ItemClosed {
                accordion: self.id.clone(),
                index,
            });
        }
    }

    /// Remove every attribute, class and inline height the accordion wrote,
    /// returning the DOM binding.
    pub fn unmount(mut self) -> D {
        self.teardown();
        self.dom
    }

    fn publish(&self, event: AccordionEvent) {
        self.events.publish(event);
    }
}

/// Resolve the effective default-expanded flags.
///
/// Viewport-gated auto-open wins over everything; otherwise the configured
/// list applies, and with no configured list the initial state is read off
/// pre-set open classes on the triggers.
fn resolve_defaults<D: Dom>(
    container: &str,
    config: &AccordionConfig,
    viewport: Option<&dyn ViewportProbe>,
    dom: &D,
    triggers: &[String],
) -> Vec<bool> {
    if auto_open_applies(container, config, viewport) {
        // Everything on multiselectable accordions, otherwise just the
        // first item so the single-open invariant holds
        if config.multiselectable {
            return vec![true; triggers.len()];
        }
        let mut defaults = vec![false; triggers.len()];
        if let Some(first) = defaults.first_mut() {
            *first = true;
        }
        return defaults;
    }

    if config.default_expanded.is_empty() {
        return triggers
            .iter()
            .map(|t| dom.has_class(t, &config.classes.open))
            .collect();
    }

    config.default_expanded.clone()
}

fn auto_open_applies(
    container: &str,
    config: &AccordionConfig,
    viewport: Option<&dyn ViewportProbe>,
) -> bool {
    if config.auto_open_viewports.is_empty() {
        return false;
    }

    let Some(probe) = viewport else {
        log::warn!(
            "accordion `{}`: auto-open viewports configured but no viewport probe injected",
            container
        );
        return false;
    };

    let current = probe.current();
    config
        .auto_open_viewports
        .iter()
        .any(|name| name == current.name())
}
