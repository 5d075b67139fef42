//! Container windows: bind one widget per slot while open.

use crate::layout::SlotGrid;
use crate::widget::{SharedWidget, SlotWidget, WidgetBinding};
use egui::{Align2, Color32, FontId, Painter, Pos2};
use satchel_core::SlotSet;
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use tracing::{info, warn};

/// A window showing the slots of one container.
///
/// `open` and `close` must be given the same [`SlotSet`]; the window only
/// holds widgets, never the slots themselves.
pub struct ContainerWindow {
    title: String,
    grid: SlotGrid,
    widgets: Vec<SharedWidget>,
    open: bool,
}

impl ContainerWindow {
    /// Create a closed window.
    pub fn new(title: impl Into<String>, grid: SlotGrid) -> Self {
        Self {
            title: title.into(),
            grid,
            widgets: Vec::new(),
            open: false,
        }
    }

    /// Title as displayed (upper-cased).
    pub fn title(&self) -> String {
        self.title.to_uppercase()
    }

    /// Grid the window lays its widgets out on.
    pub fn grid(&self) -> &SlotGrid {
        &self.grid
    }

    /// Whether the window is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Number of bound widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether no widgets are bound.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Widget for slot `index`.
    pub fn widget(&self, index: usize) -> Option<Ref<'_, SlotWidget>> {
        self.widgets.get(index).map(|widget| widget.borrow())
    }

    /// Open the window on `slots`, creating and attaching one widget per slot
    /// in order. An already-open window is closed first.
    pub fn open(&mut self, slots: &mut SlotSet) {
        if self.open {
            warn!(title = %self.title, "container already open; rebinding");
            self.close(slots);
        }

        for (index, slot) in slots.iter_mut().enumerate() {
            let widget = Rc::new(RefCell::new(SlotWidget::new(
                index.to_string(),
                self.grid.cell_size,
            )));
            slot.attach(Box::new(WidgetBinding::new(Rc::clone(&widget))));
            self.widgets.push(widget);
        }
        self.open = true;
        info!(title = %self.title, slots = self.widgets.len(), "opened container");
    }

    /// Detach every widget from `slots` and close the window. Slot data is
    /// left untouched.
    pub fn close(&mut self, slots: &mut SlotSet) {
        let detached = slots.detach_all();
        for widget in self.widgets.drain(..) {
            widget.borrow_mut().clear();
        }
        self.open = false;
        info!(title = %self.title, detached, "closed container");
    }

    /// Slot index under `pos`, if the window is open and a slot is hit.
    pub fn hit_test(&self, pos: Pos2) -> Option<usize> {
        if !self.open {
            return None;
        }
        self.grid.slot_at(pos, self.widgets.len())
    }

    /// Draw the title and every widget.
    pub fn paint(&self, painter: &Painter) {
        if !self.open {
            return;
        }
        painter.text(
            self.grid.origin,
            Align2::LEFT_BOTTOM,
            self.title(),
            FontId::proportional(14.0),
            Color32::WHITE,
        );
        for (index, widget) in self.widgets.iter().enumerate() {
            widget.borrow().paint(painter, self.grid.slot_rect(index));
        }
    }
}
