//! Scrollable vertical list
//!
//! Text rows with a selection cursor. The list reports its total content
//! height so the menu can size itself, and scrolls to keep the cursor
//! visible within whatever height it was assigned.

use macroquad::prelude::*;

use super::{line_height, text_size, GuiComponent, HelpPrompt};
use crate::theme;

/// Vertical padding added to the font line height per row
const ROW_PADDING: f32 = 8.0;
/// Left inset for row text and the highlight bar
const ROW_INSET: f32 = 12.0;

pub struct ComponentList {
    rows: Vec<String>,
    cursor: usize,
    scroll: f32,
    size: Vec2,
    focused: bool,
}

impl ComponentList {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            cursor: 0,
            scroll: 0.0,
            size: Vec2::ZERO,
            focused: false,
        }
    }

    pub fn add_row(&mut self, text: impl Into<String>) {
        self.rows.push(text.into());
    }

    pub fn set_row(&mut self, index: usize, text: impl Into<String>) {
        if let Some(row) = self.rows.get_mut(index) {
            *row = text.into();
        }
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.reset_cursor();
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> Option<&str> {
        self.rows.get(self.cursor).map(|s| s.as_str())
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
        self.scroll = 0.0;
    }

    /// Move the selection by `delta` rows, clamped to the content.
    /// Returns false when already at the edge.
    pub fn move_cursor(&mut self, delta: i32) -> bool {
        if self.rows.is_empty() {
            return false;
        }
        let target = self.cursor as i32 + delta;
        if target < 0 || target >= self.rows.len() as i32 {
            return false;
        }
        self.cursor = target as usize;
        self.scroll_to_cursor();
        true
    }

    pub fn row_height(&self) -> f32 {
        line_height(theme::font::MEDIUM) + ROW_PADDING
    }

    /// Height of all rows laid end to end, independent of the assigned size
    pub fn total_row_height(&self) -> f32 {
        self.rows.len() as f32 * self.row_height()
    }

    fn scroll_to_cursor(&mut self) {
        let row_h = self.row_height();
        let top = self.cursor as f32 * row_h;
        let bottom = top + row_h;
        if top < self.scroll {
            self.scroll = top;
        } else if self.size.y > 0.0 && bottom > self.scroll + self.size.y {
            self.scroll = bottom - self.size.y;
        }
    }
}

impl Default for ComponentList {
    fn default() -> Self {
        Self::new()
    }
}

impl GuiComponent for ComponentList {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn set_size(&mut self, size: Vec2) {
        self.size = size;
        self.scroll_to_cursor();
    }

    fn render(&self, origin: Vec2) {
        let row_h = self.row_height();
        for (index, row) in self.rows.iter().enumerate() {
            let y = origin.y + index as f32 * row_h - self.scroll;
            // Skip rows outside the assigned bounds
            if y + row_h < origin.y {
                continue;
            }
            if y + row_h > origin.y + self.size.y + 0.5 {
                break;
            }

            let selected = index == self.cursor;
            if selected {
                let bar = if self.focused {
                    theme::palette::HIGHLIGHT
                } else {
                    Color::new(
                        theme::palette::HIGHLIGHT.r,
                        theme::palette::HIGHLIGHT.g,
                        theme::palette::HIGHLIGHT.b,
                        theme::palette::HIGHLIGHT.a * 0.4,
                    )
                };
                draw_rectangle(origin.x + 2.0, y.round(), self.size.x - 4.0, row_h, bar);
            }

            let color = if selected {
                theme::palette::ACCENT
            } else {
                theme::palette::TEXT
            };
            let measured = text_size(row, theme::font::MEDIUM);
            let text_y = (y + (row_h + measured.y) * 0.5).round();
            draw_text_ex(
                row,
                (origin.x + ROW_INSET).round(),
                text_y,
                TextParams {
                    font_size: theme::font::MEDIUM as u16,
                    color,
                    ..Default::default()
                },
            );
        }
    }

    fn help_prompts(&self) -> Vec<HelpPrompt> {
        vec![HelpPrompt::new("UP/DOWN", "choose")]
    }

    fn focusable(&self) -> bool {
        true
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_row_height() {
        let mut list = ComponentList::new();
        assert!(list.total_row_height().abs() < 0.001);
        list.add_row("one");
        list.add_row("two");
        list.add_row("three");
        assert!((list.total_row_height() - 3.0 * list.row_height()).abs() < 0.001);
    }

    #[test]
    fn test_cursor_clamped_at_edges() {
        let mut list = ComponentList::new();
        list.add_row("a");
        list.add_row("b");
        assert!(!list.move_cursor(-1));
        assert!(list.move_cursor(1));
        assert_eq!(list.cursor(), 1);
        assert!(!list.move_cursor(1));
        assert_eq!(list.cursor(), 1);
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut list = ComponentList::new();
        list.add_row("a");
        list.add_row("b");
        list.move_cursor(1);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.cursor(), 0);
    }

    #[test]
    fn test_empty_list_cursor_noop() {
        let mut list = ComponentList::new();
        assert!(!list.move_cursor(1));
        assert_eq!(list.cursor(), 0);
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let mut list = ComponentList::new();
        for i in 0..20 {
            list.add_row(format!("row {}", i));
        }
        let row_h = list.row_height();
        // Viewport fits 5 rows
        list.set_size(vec2(200.0, row_h * 5.0));
        for _ in 0..9 {
            list.move_cursor(1);
        }
        // Cursor row 9 must sit inside the viewport
        let top = 9.0 * row_h;
        assert!(list.scroll <= top + 0.001);
        assert!(top + row_h <= list.scroll + list.size().y + 0.001);

        // Scrolling back up pulls the viewport with it
        for _ in 0..9 {
            list.move_cursor(-1);
        }
        assert!(list.scroll.abs() < 0.001);
    }
}
