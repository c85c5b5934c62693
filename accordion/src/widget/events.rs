//! Input and command handling for the accordion.

use crate::dom::Dom;
use crate::event::{Key, Modifiers};
use crate::queue::Command;

use super::Accordion;

impl<D: Dom> Accordion<D> {
    /// Handle a key press while one of the accordion's triggers is focused.
    ///
    /// Enter/Space activate the selected item. Left/Up and Right/Down move
    /// the selection (and input focus) with wrap-around; moving never changes
    /// expansion state. Keys with modifiers are ignored.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) {
        if !modifiers.none() {
            return;
        }

        match key {
            Key::Enter | Key::Char(' ') => {
                let Some(index) = self.state.selected() else {
                    log::debug!("accordion `{}`: activation key with no selection", self.id);
                    return;
                };
                self.activate(index);
            }
            Key::Left | Key::Up => {
                let from = self.state.selected();
                if let Some(index) = self.state.select_previous() {
                    self.move_active_marker(from, index);
                    self.focus_trigger(index);
                }
            }
            Key::Right | Key::Down => {
                let from = self.state.selected();
                if let Some(index) = self.state.select_next() {
                    self.move_active_marker(from, index);
                    self.focus_trigger(index);
                }
            }
            _ => {}
        }
    }

    /// Handle a click on a node. Clicks on anything but a trigger are
    /// ignored.
    pub fn handle_click(&mut self, target: &str) {
        let Some(index) = self.triggers.iter().position(|t| t == target) else {
            log::debug!("accordion `{}`: click on `{}` ignored", self.id, target);
            return;
        };
        self.activate(index);
    }

    /// Dispatch an external command drained from the host's event source.
    pub fn handle_event(&mut self, command: &Command) {
        match command {
            Command::ToggleItem { id, open } => self.toggle_by_id(id, *open),
            Command::OpenAll => self.open_all(),
            Command::CloseAll => self.close_all(),
            Command::ViewportResized => self.recompute_heights(),
        }
    }

    fn focus_trigger(&mut self, index: usize) {
        // Selection always comes from the trigger list, so the index is valid
        self.dom.focus(&self.triggers[index]);
    }
}
