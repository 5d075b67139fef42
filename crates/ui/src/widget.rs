//! Slot widgets: the icon, quantity label and condition bar for one slot.

use egui::{pos2, vec2, Align2, Color32, FontId, Painter, Rect};
use satchel_core::{SlotContents, SlotObserver};
use std::cell::RefCell;
use std::rc::Rc;

/// Height of the condition bar in points.
const CONDITION_BAR_HEIGHT: f32 = 3.0;

/// Condition bar geometry and colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionBar {
    /// Condition as a fraction of the item's maximum, in `0.0..=1.0`.
    pub fraction: f32,
    /// Bar width in points.
    pub width: f32,
    /// Bar colour, red when broken through green when pristine.
    pub color: Color32,
}

/// Presentation state of one slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotWidget {
    name: String,
    is_cursor: bool,
    cell_width: f32,
    bound: bool,
    icon: Option<String>,
    amount_label: Option<String>,
    condition_bar: Option<ConditionBar>,
    refreshes: u32,
}

impl SlotWidget {
    /// Create a container widget.
    pub fn new(name: impl Into<String>, cell_width: f32) -> Self {
        Self {
            name: name.into(),
            is_cursor: false,
            cell_width,
            bound: false,
            icon: None,
            amount_label: None,
            condition_bar: None,
            refreshes: 0,
        }
    }

    /// Create the widget that follows the pointer. It never shows a
    /// condition bar.
    pub fn cursor(cell_width: f32) -> Self {
        Self {
            is_cursor: true,
            ..Self::new("cursor", cell_width)
        }
    }

    /// Widget name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the widget is the cursor widget.
    pub fn is_cursor(&self) -> bool {
        self.is_cursor
    }

    /// Whether a slot currently drives this widget.
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Icon to draw, if any.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Quantity label to draw, if any.
    pub fn amount_label(&self) -> Option<&str> {
        self.amount_label.as_deref()
    }

    /// Condition bar to draw, if any.
    pub fn condition_bar(&self) -> Option<ConditionBar> {
        self.condition_bar
    }

    /// How many times the widget has been refreshed.
    pub fn refreshes(&self) -> u32 {
        self.refreshes
    }

    /// Redraw from the slot's current contents.
    pub fn refresh(&mut self, contents: &SlotContents) {
        self.bound = true;
        self.apply(contents);
    }

    /// Unbind from the slot and hide everything.
    pub fn clear(&mut self) {
        self.bound = false;
        self.apply(&SlotContents::Empty);
    }

    fn apply(&mut self, contents: &SlotContents) {
        self.refreshes += 1;
        match contents {
            SlotContents::Empty => {
                self.icon = None;
                self.amount_label = None;
                self.condition_bar = None;
            }
            SlotContents::Occupied {
                item,
                amount,
                condition,
            } => {
                self.icon = Some(item.icon.clone());
                self.amount_label = (*amount >= 2).then(|| amount.to_string());
                self.condition_bar = match item.max_condition() {
                    Some(max) if !self.is_cursor => {
                        Some(self.bar_for(*condition, max))
                    }
                    _ => None,
                };
            }
        }
    }

    fn bar_for(&self, condition: u32, max_condition: u32) -> ConditionBar {
        let fraction = if max_condition == 0 {
            1.0
        } else {
            (condition as f32 / max_condition as f32).clamp(0.0, 1.0)
        };
        ConditionBar {
            fraction,
            width: self.cell_width * fraction,
            color: condition_color(fraction),
        }
    }

    /// Draw the widget into `rect`.
    pub fn paint(&self, painter: &Painter, rect: Rect) {
        painter.rect_filled(rect, 2.0, Color32::from_gray(40));

        if let Some(icon) = &self.icon {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                icon,
                FontId::proportional(12.0),
                Color32::WHITE,
            );
        }

        if let Some(label) = &self.amount_label {
            painter.text(
                rect.right_bottom() - vec2(2.0, 2.0),
                Align2::RIGHT_BOTTOM,
                label,
                FontId::monospace(11.0),
                Color32::WHITE,
            );
        }

        if let Some(bar) = self.condition_bar {
            let bar_rect = Rect::from_min_size(
                pos2(rect.left(), rect.bottom() - CONDITION_BAR_HEIGHT),
                vec2(bar.width, CONDITION_BAR_HEIGHT),
            );
            painter.rect_filled(bar_rect, 0.0, bar.color);
        }
    }
}

/// Linear red-to-green ramp for condition bars.
pub fn condition_color(fraction: f32) -> Color32 {
    let t = fraction.clamp(0.0, 1.0);
    let red = (255.0 * (1.0 - t)).round() as u8;
    let green = (255.0 * t).round() as u8;
    Color32::from_rgb(red, green, 0)
}

/// Widget shared between a container window and the slot bound to it.
pub type SharedWidget = Rc<RefCell<SlotWidget>>;

/// Forwards slot notifications to a widget.
pub struct WidgetBinding {
    widget: SharedWidget,
}

impl WidgetBinding {
    /// Bind to `widget`.
    pub fn new(widget: SharedWidget) -> Self {
        Self { widget }
    }
}

impl SlotObserver for WidgetBinding {
    fn slot_changed(&mut self, contents: &SlotContents) {
        self.widget.borrow_mut().refresh(contents);
    }

    fn detached(&mut self) {
        self.widget.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_core::{ItemDefinition, ItemKey};
    use std::sync::Arc;

    fn occupied(max_stack: u32, max_condition: i32, amount: u32, condition: u32) -> SlotContents {
        let item = ItemDefinition::new(ItemKey::parse("thing").unwrap(), max_stack)
            .with_max_condition(max_condition);
        SlotContents::Occupied {
            item: Arc::new(item),
            amount,
            condition,
        }
    }

    #[test]
    fn empty_contents_hide_everything() {
        let mut widget = SlotWidget::new("0", 40.0);
        widget.refresh(&SlotContents::Empty);
        assert!(widget.is_bound());
        assert_eq!(widget.icon(), None);
        assert_eq!(widget.amount_label(), None);
        assert_eq!(widget.condition_bar(), None);
    }

    #[test]
    fn amount_label_only_for_two_or_more() {
        let mut widget = SlotWidget::new("0", 40.0);
        widget.refresh(&occupied(50, -1, 1, 0));
        assert_eq!(widget.icon(), Some("thing"));
        assert_eq!(widget.amount_label(), None);

        widget.refresh(&occupied(50, -1, 2, 0));
        assert_eq!(widget.amount_label(), Some("2"));
    }

    #[test]
    fn condition_bar_scales_with_condition() {
        let mut widget = SlotWidget::new("0", 40.0);
        widget.refresh(&occupied(1, 100, 1, 25));

        let bar = widget.condition_bar().expect("degradable items show a bar");
        assert!((bar.fraction - 0.25).abs() < f32::EPSILON);
        assert!((bar.width - 10.0).abs() < 1e-4);
        assert_eq!(bar.color, Color32::from_rgb(191, 64, 0));
    }

    #[test]
    fn non_degradable_and_cursor_have_no_bar() {
        let mut widget = SlotWidget::new("0", 40.0);
        widget.refresh(&occupied(50, -1, 10, 0));
        assert_eq!(widget.condition_bar(), None);

        let mut cursor = SlotWidget::cursor(40.0);
        cursor.refresh(&occupied(1, 100, 1, 50));
        assert!(cursor.is_cursor());
        assert_eq!(cursor.icon(), Some("thing"));
        assert_eq!(cursor.condition_bar(), None);
    }

    #[test]
    fn condition_color_endpoints() {
        assert_eq!(condition_color(0.0), Color32::from_rgb(255, 0, 0));
        assert_eq!(condition_color(1.0), Color32::from_rgb(0, 255, 0));
        assert_eq!(condition_color(2.0), Color32::from_rgb(0, 255, 0));
    }

    #[test]
    fn clear_unbinds() {
        let mut widget = SlotWidget::new("3", 40.0);
        widget.refresh(&occupied(50, -1, 10, 0));
        widget.clear();
        assert!(!widget.is_bound());
        assert_eq!(widget.icon(), None);
        assert_eq!(widget.refreshes(), 2);
    }
}
