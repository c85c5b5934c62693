//! Accordion expansion state.
//!
//! Pure state machine, no DOM access: an ordered list of items, a selection
//! cursor, and the single-open rule. The widget layer turns the outcomes
//! reported here into attribute writes and published events.

/// One (trigger, panel) pair at a fixed index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Item {
    /// Whether the panel is currently shown.
    pub is_expanded: bool,
    /// Cached natural height of the panel.
    pub panel_height: u16,
}

/// Outcome of activating an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    /// The activated index.
    pub index: usize,
    /// The activated item's new expansion state.
    pub expanded: bool,
    /// Index of a previously open item that was forced closed, if any.
    pub closed_previous: Option<usize>,
}

/// Ordered item list plus selection cursor.
///
/// Invariant: when `multiselectable` is false, at most one item is expanded
/// at any time. The constructor establishes it and every mutation preserves
/// it.
#[derive(Debug, Clone)]
pub struct AccordionState {
    items: Vec<Item>,
    selected: Option<usize>,
    previous: Option<usize>,
    multiselectable: bool,
}

impl AccordionState {
    /// Build the item list from configured defaults.
    ///
    /// A default list whose length differs from the discovered item count is
    /// a logged warning; missing entries start collapsed, extra entries are
    /// dropped. The last default-expanded item becomes the initial selection.
    pub fn new(count: usize, defaults: &[bool], multiselectable: bool) -> Self {
        if !defaults.is_empty() && defaults.len() != count {
            log::warn!(
                "accordion: {} default states configured for {} discovered items",
                defaults.len(),
                count
            );
        }

        let mut items: Vec<Item> = (0..count)
            .map(|i| Item {
                is_expanded: defaults.get(i).copied().unwrap_or(false),
                panel_height: 0,
            })
            .collect();

        let mut selected = None;
        for (i, item) in items.iter().enumerate() {
            if item.is_expanded {
                selected = Some(i);
            }
        }

        // Single-open accordions keep only the last default-expanded item
        if !multiselectable {
            if let Some(keep) = selected {
                let mut collapsed = 0;
                for (i, item) in items.iter_mut().enumerate() {
                    if item.is_expanded && i != keep {
                        item.is_expanded = false;
                        collapsed += 1;
                    }
                }
                if collapsed > 0 {
                    log::warn!(
                        "accordion: collapsed {} extra default-expanded items (not multiselectable)",
                        collapsed
                    );
                }
            }
        }

        Self {
            items,
            selected,
            previous: selected,
            multiselectable,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    pub fn multiselectable(&self) -> bool {
        self.multiselectable
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.items.get(index).map(|i| i.is_expanded).unwrap_or(false)
    }

    pub fn height(&self, index: usize) -> u16 {
        self.items.get(index).map(|i| i.panel_height).unwrap_or(0)
    }

    pub fn set_height(&mut self, index: usize, height: u16) {
        if let Some(item) = self.items.get_mut(index) {
            item.panel_height = height;
        }
    }

    /// Indices of all currently expanded items.
    pub fn expanded_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_expanded)
            .map(|(i, _)| i)
            .collect()
    }

    /// Select and toggle an item, forcing the previously open item closed on
    /// single-open accordions. Returns `None` for out-of-range indices.
    pub fn activate(&mut self, index: usize) -> Option<Toggle> {
        if index >= self.items.len() {
            return None;
        }

        self.selected = Some(index);
        let expanded = !self.items[index].is_expanded;
        self.items[index].is_expanded = expanded;

        let mut closed_previous = None;
        if !self.multiselectable {
            if let Some(prev) = self.previous {
                if prev != index && self.items[prev].is_expanded {
                    self.items[prev].is_expanded = false;
                    closed_previous = Some(prev);
                }
            }
        }

        self.previous = Some(index);
        Some(Toggle {
            index,
            expanded,
            closed_previous,
        })
    }

    /// Move the selection to the next item, wrapping at the end. With no
    /// current selection the first item is selected.
    pub fn select_next(&mut self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        let index = match self.selected {
            Some(i) => (i + 1) % self.items.len(),
            None => 0,
        };
        self.selected = Some(index);
        Some(index)
    }

    /// Move the selection to the previous item, wrapping at the start. With
    /// no current selection the last item is selected.
    pub fn select_previous(&mut self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        let count = self.items.len();
        let index = match self.selected {
            Some(i) => (i + count - 1) % count,
            None => count - 1,
        };
        self.selected = Some(index);
        Some(index)
    }

    /// Expand every item, returning the indices that actually changed.
    pub fn open_all(&mut self) -> Vec<usize> {
        let mut changed = Vec::new();
        for (i, item) in self.items.iter_mut().enumerate() {
            if !item.is_expanded {
                item.is_expanded = true;
                changed.push(i);
            }
        }
        changed
    }

    /// Collapse every item, returning the indices that actually changed.
    pub fn close_all(&mut self) -> Vec<usize> {
        let mut changed = Vec::new();
        for (i, item) in self.items.iter_mut().enumerate() {
            if item.is_expanded {
                item.is_expanded = false;
                changed.push(i);
            }
        }
        changed
    }
}
