#![warn(missing_docs)]
//! Presentation for slots and containers using egui primitives.
//!
//! Widgets subscribe to slot notifications through [`WidgetBinding`]; the
//! slot model never calls into rendering directly.

mod container;
mod layout;
mod widget;

pub use container::ContainerWindow;
pub use layout::SlotGrid;
pub use widget::{condition_color, ConditionBar, SharedWidget, SlotWidget, WidgetBinding};
