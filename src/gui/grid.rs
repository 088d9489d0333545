//! Generic grid container
//!
//! N-column / M-row container with per-cell entries, fractional row/column
//! sizing, and a cursor over focusable cells. Rows or columns left at
//! fraction 0 share whatever fraction the explicit ones leave over.

use std::rc::Rc;

use macroquad::prelude::*;

use super::{ComponentRef, GuiComponent, HelpPrompt};

struct GridEntry {
    component: ComponentRef,
    col: usize,
    row: usize,
    focusable: bool,
    resizable: bool,
}

pub struct ComponentGrid {
    cols: usize,
    rows: usize,
    entries: Vec<GridEntry>,
    col_fracs: Vec<f32>,
    row_fracs: Vec<f32>,
    size: Vec2,
    cursor: Option<(usize, usize)>,
}

impl ComponentGrid {
    pub fn new(cols: usize, rows: usize) -> Self {
        assert!(cols > 0 && rows > 0, "grid dimensions must be non-zero");
        Self {
            cols,
            rows,
            entries: Vec::new(),
            col_fracs: vec![0.0; cols],
            row_fracs: vec![0.0; rows],
            size: Vec2::ZERO,
            cursor: None,
        }
    }

    /// Place a component in a cell, replacing any previous occupant.
    /// Resizable entries are stretched to the cell; others keep their own
    /// size and are centered in it.
    pub fn set_entry(
        &mut self,
        component: ComponentRef,
        col: usize,
        row: usize,
        focusable: bool,
        resizable: bool,
    ) {
        assert!(col < self.cols && row < self.rows, "cell out of bounds");
        self.entries.retain(|e| !(e.col == col && e.row == row));
        self.entries.push(GridEntry {
            component,
            col,
            row,
            focusable,
            resizable,
        });
        self.layout_entries();
    }

    /// Remove an entry by handle; clears the cursor if it pointed at it
    pub fn remove_entry(&mut self, component: &ComponentRef) {
        if let Some((c, r)) = self.cursor {
            let on_removed = self
                .entry_at(c, r)
                .map(|e| Rc::ptr_eq(&e.component, component))
                .unwrap_or(false);
            if on_removed {
                self.cursor = None;
            }
        }
        self.entries
            .retain(|e| !Rc::ptr_eq(&e.component, component));
    }

    /// Fraction of the total height assigned to one row (0 = share remainder)
    pub fn set_row_height_frac(&mut self, row: usize, frac: f32) {
        self.row_fracs[row] = frac;
        self.layout_entries();
    }

    /// Fraction of the total width assigned to one column (0 = share remainder)
    pub fn set_col_width_frac(&mut self, col: usize, frac: f32) {
        self.col_fracs[col] = frac;
        self.layout_entries();
    }

    pub fn row_height_frac(&self, row: usize) -> f32 {
        self.row_fracs[row]
    }

    pub fn col_width_frac(&self, col: usize) -> f32 {
        self.col_fracs[col]
    }

    pub fn cursor(&self) -> Option<(usize, usize)> {
        self.cursor
    }

    pub fn cursor_row(&self) -> Option<usize> {
        self.cursor.map(|(_, row)| row)
    }

    /// Move the cursor to the first focusable cell in row-major order
    pub fn reset_cursor(&mut self) {
        let mut first = None;
        'scan: for row in 0..self.rows {
            for col in 0..self.cols {
                if self.entry_at(col, row).map(|e| e.focusable).unwrap_or(false) {
                    first = Some((col, row));
                    break 'scan;
                }
            }
        }
        self.set_cursor_to(first);
    }

    /// Step the cursor by (dx, dy), skipping over empty or unfocusable cells.
    /// Returns false (cursor unchanged) when the edge is reached.
    pub fn move_cursor(&mut self, dx: i32, dy: i32) -> bool {
        if dx == 0 && dy == 0 {
            return false;
        }
        let Some((mut col, mut row)) = self.cursor else {
            return false;
        };
        loop {
            let next_col = col as i32 + dx;
            let next_row = row as i32 + dy;
            if next_col < 0
                || next_row < 0
                || next_col >= self.cols as i32
                || next_row >= self.rows as i32
            {
                return false;
            }
            col = next_col as usize;
            row = next_row as usize;
            if self.entry_at(col, row).map(|e| e.focusable).unwrap_or(false) {
                self.set_cursor_to(Some((col, row)));
                return true;
            }
        }
    }

    fn set_cursor_to(&mut self, cell: Option<(usize, usize)>) {
        if let Some((c, r)) = self.cursor {
            if let Some(entry) = self.entry_at(c, r) {
                entry.component.borrow_mut().set_focused(false);
            }
        }
        self.cursor = cell;
        if let Some((c, r)) = cell {
            if let Some(entry) = self.entry_at(c, r) {
                entry.component.borrow_mut().set_focused(true);
            }
        }
    }

    fn entry_at(&self, col: usize, row: usize) -> Option<&GridEntry> {
        self.entries.iter().find(|e| e.col == col && e.row == row)
    }

    /// Push cell sizes down to resizable entries
    fn layout_entries(&mut self) {
        let col_widths = spans(&self.col_fracs, self.size.x);
        let row_heights = spans(&self.row_fracs, self.size.y);
        for entry in &self.entries {
            if entry.resizable {
                entry
                    .component
                    .borrow_mut()
                    .set_size(vec2(col_widths[entry.col], row_heights[entry.row]));
            }
        }
    }

    fn cell_origin(&self, col: usize, row: usize) -> Vec2 {
        let col_widths = spans(&self.col_fracs, self.size.x);
        let row_heights = spans(&self.row_fracs, self.size.y);
        vec2(
            col_widths[..col].iter().sum(),
            row_heights[..row].iter().sum(),
        )
    }
}

impl GuiComponent for ComponentGrid {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn set_size(&mut self, size: Vec2) {
        self.size = size;
        self.layout_entries();
    }

    fn render(&self, origin: Vec2) {
        let col_widths = spans(&self.col_fracs, self.size.x);
        let row_heights = spans(&self.row_fracs, self.size.y);
        for entry in &self.entries {
            let cell = origin + self.cell_origin(entry.col, entry.row);
            let component = entry.component.borrow();
            let pos = if entry.resizable {
                cell
            } else {
                let cell_size = vec2(col_widths[entry.col], row_heights[entry.row]);
                cell + (cell_size - component.size()) * 0.5
            };
            component.render(pos);
        }
    }

    fn help_prompts(&self) -> Vec<HelpPrompt> {
        let mut prompts = Vec::new();
        for entry in &self.entries {
            prompts.extend(entry.component.borrow().help_prompts());
        }
        prompts
    }

    fn focusable(&self) -> bool {
        self.entries.iter().any(|e| e.focusable)
    }

    fn set_focused(&mut self, focused: bool) {
        if focused && self.cursor.is_none() {
            self.reset_cursor();
            return;
        }
        if let Some((c, r)) = self.cursor {
            if let Some(entry) = self.entry_at(c, r) {
                entry.component.borrow_mut().set_focused(focused);
            }
        }
    }
}

/// Turn per-slot fractions into absolute spans of `total`. Slots with an
/// explicit fraction get exactly their share; zero-fraction slots split the
/// leftover equally.
pub(crate) fn spans(fracs: &[f32], total: f32) -> Vec<f32> {
    let explicit: f32 = fracs.iter().filter(|f| **f > 0.0).sum();
    let implicit = fracs.iter().filter(|f| **f <= 0.0).count();
    let leftover = (1.0 - explicit).max(0.0);
    fracs
        .iter()
        .map(|f| {
            if *f > 0.0 {
                f * total
            } else if implicit > 0 {
                leftover / implicit as f32 * total
            } else {
                0.0
            }
        })
        .collect()
}
