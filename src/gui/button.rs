//! Pressable labeled button

use macroquad::prelude::*;

use super::{draw_rounded_rect, text_size, GuiComponent, HelpPrompt};
use crate::theme;

/// Inner padding around the label
const LABEL_PADDING_H: f32 = 18.0;
const LABEL_PADDING_V: f32 = 10.0;

/// Button with an uppercase label, help text, and an activation callback.
/// Size is measured from the label at construction.
pub struct ButtonComponent {
    label: String,
    help_text: String,
    on_activate: Box<dyn FnMut()>,
    size: Vec2,
    focused: bool,
}

impl ButtonComponent {
    pub fn new(label: &str, help_text: &str, on_activate: Box<dyn FnMut()>) -> Self {
        let label = label.to_uppercase();
        let measured = text_size(&label, theme::font::MEDIUM);
        let size = vec2(
            measured.x + LABEL_PADDING_H * 2.0,
            measured.y + LABEL_PADDING_V * 2.0,
        );
        Self {
            label,
            help_text: help_text.to_string(),
            on_activate,
            size,
            focused: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Run the activation callback
    pub fn activate(&mut self) {
        (self.on_activate)();
    }
}

impl GuiComponent for ButtonComponent {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    fn render(&self, origin: Vec2) {
        let fill = if self.focused {
            theme::palette::ACCENT
        } else {
            theme::palette::BUTTON_BG
        };
        draw_rounded_rect(origin.x, origin.y, self.size.x, self.size.y, 4.0, fill);

        let measured = text_size(&self.label, theme::font::MEDIUM);
        let x = (origin.x + (self.size.x - measured.x) * 0.5).round();
        let y = (origin.y + (self.size.y + measured.y) * 0.5).round();
        draw_text_ex(
            &self.label,
            x,
            y,
            TextParams {
                font_size: theme::font::MEDIUM as u16,
                color: theme::palette::BUTTON_TEXT,
                ..Default::default()
            },
        );
    }

    fn help_prompts(&self) -> Vec<HelpPrompt> {
        vec![HelpPrompt::new("ENTER", &self.help_text)]
    }

    fn focusable(&self) -> bool {
        true
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}
