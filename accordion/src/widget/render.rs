//! ARIA attribute and height rendering.

use crate::dom::Dom;

use super::Accordion;

impl<D: Dom> Accordion<D> {
    /// Render every item plus the container-level attributes.
    pub(super) fn render_all(&mut self) {
        let multiselectable = if self.state.multiselectable() {
            "true"
        } else {
            "false"
        };
        self.dom
            .set_attributes(&self.id, &[("aria-multiselectable", multiselectable)]);

        for index in 0..self.state.len() {
            self.render(index);
        }
    }

    /// Write one item's trigger/panel attributes, classes and height from its
    /// expansion state.
    pub(super) fn render(&mut self, index: usize) {
        let Some(item) = self.state.item(index).copied() else {
            return;
        };

        let expanded = item.is_expanded;
        let flag = if expanded { "true" } else { "false" };
        let hidden = if expanded { "false" } else { "true" };
        let max_height = item.panel_height.to_string();
        let height = if expanded { item.panel_height } else { 0 };

        self.dom.set_attributes(
            &self.triggers[index],
            &[("aria-selected", flag), ("aria-expanded", flag)],
        );
        self.dom.set_attributes(
            &self.panels[index],
            &[("aria-hidden", hidden), ("data-max-height", &max_height)],
        );
        self.dom.set_height(&self.panels[index], height);

        let (added, removed) = if expanded {
            (&self.config.classes.open, &self.config.classes.closed)
        } else {
            (&self.config.classes.closed, &self.config.classes.open)
        };
        self.dom.add_class(&self.triggers[index], added);
        self.dom.remove_class(&self.triggers[index], removed);
        self.dom.add_class(&self.panels[index], added);
        self.dom.remove_class(&self.panels[index], removed);

        if self.state.selected() == Some(index) {
            self.dom
                .add_class(&self.triggers[index], &self.config.classes.active);
        } else {
            self.dom
                .remove_class(&self.triggers[index], &self.config.classes.active);
        }
    }

    /// Shift the active marker class when the selection moves without a
    /// toggle (arrow-key navigation).
    pub(super) fn move_active_marker(&mut self, from: Option<usize>, to: usize) {
        if from == Some(to) {
            return;
        }
        if let Some(from) = from {
            self.dom
                .remove_class(&self.triggers[from], &self.config.classes.active);
        }
        self.dom
            .add_class(&self.triggers[to], &self.config.classes.active);
    }

    /// Re-measure all panel natural heights.
    ///
    /// Rendered state is torn down first so inline heights don't shadow the
    /// natural content height, then rebuilt from the refreshed cache. The
    /// container carries the calculating marker class for the duration.
    pub fn recompute_heights(&mut self) {
        if self.state.is_empty() {
            return;
        }

        self.dom
            .add_class(&self.id, &self.config.classes.calculating);
        self.teardown();
        self.measure_heights();
        self.render_all();
        self.dom
            .remove_class(&self.id, &self.config.classes.calculating);
    }

    /// Measure every panel and cache the result. Zero heights usually mean a
    /// stylesheet is hiding the panel; they are reported per item.
    pub(super) fn measure_heights(&mut self) {
        for index in 0..self.state.len() {
            let height = self.dom.measure_height(&self.panels[index]);
            if height == 0 {
                log::warn!(
                    "accordion `{}`: panel `{}` measured height 0, check that no style hides it",
                    self.id,
                    self.panels[index]
                );
            }
            self.state.set_height(index, height);
        }
    }

    /// Remove everything the accordion wrote to the subtree.
    pub(super) fn teardown(&mut self) {
        self.dom
            .remove_attributes(&self.id, &["aria-multiselectable"]);

        for index in 0..self.state.len() {
            self.dom.remove_attributes(
                &self.triggers[index],
                &["aria-selected", "aria-expanded"],
            );
            self.dom
                .remove_class(&self.triggers[index], &self.config.classes.open);
            self.dom
                .remove_class(&self.triggers[index], &self.config.classes.closed);
            self.dom
                .remove_class(&self.triggers[index], &self.config.classes.active);

            self.dom
                .remove_attributes(&self.panels[index], &["aria-hidden", "data-max-height"]);
            self.dom
                .remove_class(&self.panels[index], &self.config.classes.open);
            self.dom
                .remove_class(&self.panels[index], &self.config.classes.closed);
            self.dom.clear_height(&self.panels[index]);
        }
    }
}
