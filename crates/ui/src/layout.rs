//! Grid placement and pointer hit-testing for container windows.

use egui::{pos2, vec2, Pos2, Rect};

/// Fixed grid of square cells laid out row-major from `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotGrid {
    /// Top-left corner of the first cell.
    pub origin: Pos2,
    /// Cells per row (at least 1).
    pub columns: usize,
    /// Cell edge length in points.
    pub cell_size: f32,
    /// Gap between neighbouring cells in points.
    pub spacing: f32,
}

impl Default for SlotGrid {
    fn default() -> Self {
        Self {
            origin: pos2(0.0, 0.0),
            columns: 7,
            cell_size: 40.0,
            spacing: 4.0,
        }
    }
}

impl SlotGrid {
    fn pitch(&self) -> f32 {
        self.cell_size + self.spacing
    }

    fn columns(&self) -> usize {
        self.columns.max(1)
    }

    /// Screen rectangle of the cell at `index`.
    pub fn slot_rect(&self, index: usize) -> Rect {
        let columns = self.columns();
        let col = (index % columns) as f32;
        let row = (index / columns) as f32;
        let min = self.origin + vec2(col * self.pitch(), row * self.pitch());
        Rect::from_min_size(min, vec2(self.cell_size, self.cell_size))
    }

    /// Index of the cell under `pos`, if it is one of the first `count` cells.
    ///
    /// Points in the gaps between cells hit nothing.
    pub fn slot_at(&self, pos: Pos2, count: usize) -> Option<usize> {
        let rel = pos - self.origin;
        if rel.x.is_nan() || rel.y.is_nan() || rel.x < 0.0 || rel.y < 0.0 {
            return None;
        }

        let pitch = self.pitch();
        if pitch <= 0.0 {
            return None;
        }
        let col = (rel.x / pitch).floor();
        let row = (rel.y / pitch).floor();
        if rel.x - col * pitch >= self.cell_size || rel.y - row * pitch >= self.cell_size {
            return None;
        }

        let columns = self.columns();
        let rows = count.div_ceil(columns);
        if col >= columns as f32 || row >= rows as f32 {
            return None;
        }
        let index = row as usize * columns + col as usize;
        (index < count).then_some(index)
    }
}
