//! GUI component tree
//!
//! Retained scene-graph components for the frontend menus: parents own their
//! children as shared handles, children hold no back-pointers. Everything
//! renders through macroquad at an absolute origin passed down by the parent.

pub mod button;
pub mod frame;
pub mod grid;
pub mod help;
pub mod input;
pub mod list;
pub mod menu;
pub mod text;

pub use button::ButtonComponent;
pub use frame::BackgroundFrame;
pub use grid::ComponentGrid;
pub use help::{draw_help_bar, BAR_HEIGHT};
pub use input::{process_input, MenuInputResult};
pub use list::ComponentList;
pub use menu::{make_button_grid, MenuActivation, MenuComponent};
pub use text::{TextAlign, TextComponent};

use std::cell::RefCell;
use std::rc::Rc;

use macroquad::prelude::*;

/// Shared handle to a component owned by a parent in the tree
pub type ComponentRef = Rc<RefCell<dyn GuiComponent>>;

/// One entry in the help bar: an input glyph and what it does
#[derive(Debug, Clone, PartialEq)]
pub struct HelpPrompt {
    pub input: String,
    pub label: String,
}

impl HelpPrompt {
    pub fn new(input: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            label: label.into(),
        }
    }
}

/// Capability interface implemented by every node in the component tree
pub trait GuiComponent {
    /// Current size (intrinsic for leaves, assigned for containers)
    fn size(&self) -> Vec2;

    /// Assign a new size; containers re-layout their children here
    fn set_size(&mut self, size: Vec2);

    /// Draw at an absolute top-left origin
    fn render(&self, origin: Vec2);

    /// Help prompts contributed by this component (and its children)
    fn help_prompts(&self) -> Vec<HelpPrompt> {
        Vec::new()
    }

    /// Whether the cursor can land on this component
    fn focusable(&self) -> bool {
        false
    }

    /// Focus notification from the parent container
    fn set_focused(&mut self, _focused: bool) {}
}

/// Axis-aligned rectangle in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Measure a string rendered with the default font at the given size.
#[cfg(not(test))]
pub fn text_size(text: &str, font_size: f32) -> Vec2 {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    vec2(dims.width, dims.height)
}

/// Headless tests have no macroquad context, so measurement falls back to a
/// character-count width estimate with height equal to the font size.
#[cfg(test)]
pub fn text_size(text: &str, font_size: f32) -> Vec2 {
    vec2(text.chars().count() as f32 * font_size * 0.55, font_size)
}

/// Line height of the default font at a given size
pub fn line_height(font_size: f32) -> f32 {
    text_size("Ag", font_size).y
}

/// Current display size in logical pixels
#[cfg(not(test))]
pub fn display_size() -> Vec2 {
    vec2(screen_width(), screen_height())
}

/// Fixed display size for headless tests
#[cfg(test)]
pub fn display_size() -> Vec2 {
    vec2(1280.0, 720.0)
}

/// Draw a rounded rectangle (approximated with overlapping rects and circles)
pub fn draw_rounded_rect(x: f32, y: f32, w: f32, h: f32, r: f32, color: Color) {
    draw_rectangle(x + r, y, w - r * 2.0, h, color);
    draw_rectangle(x, y + r, w, h - r * 2.0, color);
    draw_circle(x + r, y + r, r, color);
    draw_circle(x + w - r, y + r, r, color);
    draw_circle(x + r, y + h - r, r, color);
    draw_circle(x + w - r, y + h - r, r, color);
}
