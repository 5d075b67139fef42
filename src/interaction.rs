//! Pointer clicks resolved into cursor transfers.

use egui::Pos2;
use satchel_core::{Slot, SlotSet, TransferError, TransferOutcome};
use satchel_ui::{ContainerWindow, SharedWidget, SlotWidget, WidgetBinding};
use serde::Serialize;
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use tracing::{debug, warn};

/// Result of one click, as written to the event log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClickRecord {
    /// Pointer x position.
    pub x: f32,
    /// Pointer y position.
    pub y: f32,
    /// Slot the click landed on, if any.
    pub slot: Option<usize>,
    /// Transfer result, or `None` when the click missed.
    pub outcome: Option<TransferOutcome>,
}

/// Holds the cursor slot and routes clicks on a container into transfers
/// from the cursor.
pub struct ClickHandler {
    cursor: Slot,
    cursor_widget: SharedWidget,
}

impl ClickHandler {
    /// Empty cursor with its own widget attached.
    pub fn new(cell_width: f32) -> Self {
        let cursor_widget = Rc::new(RefCell::new(SlotWidget::cursor(cell_width)));
        let mut cursor = Slot::empty();
        cursor.attach(Box::new(WidgetBinding::new(Rc::clone(&cursor_widget))));
        Self {
            cursor,
            cursor_widget,
        }
    }

    pub fn cursor(&self) -> &Slot {
        &self.cursor
    }

    pub fn cursor_widget(&self) -> Ref<'_, SlotWidget> {
        self.cursor_widget.borrow()
    }

    /// Resolve a click at `pos` on `window`. Clicks that miss every slot are
    /// ignored.
    pub fn click_at(
        &mut self,
        window: &ContainerWindow,
        slots: &mut SlotSet,
        pos: Pos2,
    ) -> Result<ClickRecord, TransferError> {
        let slot = window.hit_test(pos);
        let outcome = match slot {
            Some(index) => Some(self.click_slot(slots, index)?),
            None => {
                warn!(x = pos.x, y = pos.y, "click did not land on a slot");
                None
            }
        };
        Ok(ClickRecord {
            x: pos.x,
            y: pos.y,
            slot,
            outcome,
        })
    }

    /// Transfer the cursor onto slot `index`.
    pub fn click_slot(
        &mut self,
        slots: &mut SlotSet,
        index: usize,
    ) -> Result<TransferOutcome, TransferError> {
        let outcome = slots.transfer_from(&mut self.cursor, index)?;
        debug!(index, ?outcome, "cursor click resolved");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;
    use satchel_core::{SlotSpec, UnchangedReason};
    use satchel_testkit::fixture_registry;
    use satchel_ui::SlotGrid;

    fn setup() -> (ContainerWindow, SlotSet) {
        let registry = fixture_registry();
        let mut slots = SlotSet::from_specs(
            "chest",
            &registry,
            &[
                SlotSpec::new("coin", 30, 0),
                SlotSpec::new("coin", 40, 0),
                SlotSpec::new("sword", 1, 80),
            ],
        );
        let mut window = ContainerWindow::new("Chest", SlotGrid::default());
        window.open(&mut slots);
        (window, slots)
    }

    fn center(window: &ContainerWindow, index: usize) -> Pos2 {
        window.grid().slot_rect(index).center()
    }

    #[test]
    fn pick_up_then_merge_through_clicks() {
        let (window, mut slots) = setup();
        let mut handler = ClickHandler::new(40.0);

        let pick = handler
            .click_at(&window, &mut slots, center(&window, 0))
            .unwrap();
        assert_eq!(pick.slot, Some(0));
        assert_eq!(pick.outcome, Some(TransferOutcome::Swapped));
        assert_eq!(handler.cursor().amount(), 30);
        assert!(slots.get(0).unwrap().item().is_none());
        assert_eq!(handler.cursor_widget().amount_label(), Some("30"));

        let merge = handler
            .click_at(&window, &mut slots, center(&window, 1))
            .unwrap();
        assert_eq!(
            merge.outcome,
            Some(TransferOutcome::Split {
                moved: 10,
                remaining: 20
            })
        );
        assert_eq!(slots.get(1).unwrap().amount(), 50);
        assert_eq!(handler.cursor().amount(), 20);
        assert_eq!(window.widget(1).unwrap().amount_label(), Some("50"));
    }

    #[test]
    fn cursor_widget_hides_condition_bar() {
        let (window, mut slots) = setup();
        let mut handler = ClickHandler::new(40.0);

        handler
            .click_at(&window, &mut slots, center(&window, 2))
            .unwrap();

        assert_eq!(handler.cursor().condition(), 80);
        assert_eq!(handler.cursor_widget().icon(), Some("sword"));
        assert_eq!(handler.cursor_widget().condition_bar(), None);
    }

    #[test]
    fn missed_click_changes_nothing() {
        let (window, mut slots) = setup();
        let mut handler = ClickHandler::new(40.0);

        let record = handler
            .click_at(&window, &mut slots, pos2(-10.0, -10.0))
            .unwrap();

        assert_eq!(record.slot, None);
        assert_eq!(record.outcome, None);
        assert_eq!(slots.get(0).unwrap().amount(), 30);
        assert!(!handler.cursor().has_item());
    }

    #[test]
    fn far_away_click_misses() {
        let (window, mut slots) = setup();
        let mut handler = ClickHandler::new(40.0);

        let record = handler
            .click_at(&window, &mut slots, pos2(21.0, 1.0e30))
            .unwrap();

        assert_eq!(record.slot, None);
        assert_eq!(record.outcome, None);
    }

    #[test]
    fn empty_cursor_on_empty_slot_is_unchanged() {
        let mut slots = SlotSet::with_empty_slots("chest", 2);
        let mut handler = ClickHandler::new(40.0);

        let outcome = handler.click_slot(&mut slots, 1).unwrap();
        assert_eq!(outcome, TransferOutcome::Unchanged(UnchangedReason::Empty));
    }

    #[test]
    fn out_of_range_slot_is_rejected() {
        let mut slots = SlotSet::with_empty_slots("chest", 2);
        let mut handler = ClickHandler::new(40.0);

        let err = handler.click_slot(&mut slots, 5).unwrap_err();
        assert_eq!(err, TransferError::SlotOutOfRange { index: 5, len: 2 });
    }
}
