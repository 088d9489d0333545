//! Text label component

use macroquad::prelude::*;

use super::{text_size, GuiComponent};

/// Horizontal alignment of the label within its assigned width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Styled text label with an intrinsic measured size
pub struct TextComponent {
    text: String,
    font_size: f32,
    color: Color,
    align: TextAlign,
    size: Vec2,
}

impl TextComponent {
    pub fn new(text: impl Into<String>, font_size: f32, color: Color, align: TextAlign) -> Self {
        let text = text.into();
        let size = text_size(&text, font_size);
        Self {
            text,
            font_size,
            color,
            align,
            size,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text and re-measure the intrinsic size
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.size = text_size(&self.text, self.font_size);
    }
}

impl GuiComponent for TextComponent {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    fn render(&self, origin: Vec2) {
        let measured = text_size(&self.text, self.font_size);
        let x = match self.align {
            TextAlign::Left => origin.x,
            TextAlign::Center => origin.x + (self.size.x - measured.x) * 0.5,
            TextAlign::Right => origin.x + self.size.x - measured.x,
        };
        // Center vertically, rounded to integer pixels for crisp rendering
        let y = (origin.y + (self.size.y + measured.y) * 0.5).round();

        draw_text_ex(
            &self.text,
            x.round(),
            y,
            TextParams {
                font_size: self.font_size as u16,
                color: self.color,
                ..Default::default()
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    #[test]
    fn test_measures_on_construction() {
        let label = TextComponent::new(
            "Hello",
            theme::font::MEDIUM,
            theme::palette::TEXT,
            TextAlign::Left,
        );
        let expected = text_size("Hello", theme::font::MEDIUM);
        assert!((label.size().x - expected.x).abs() < 0.001);
        assert!((label.size().y - expected.y).abs() < 0.001);
    }

    #[test]
    fn test_set_text_remeasures() {
        let mut label = TextComponent::new(
            "Hi",
            theme::font::MEDIUM,
            theme::palette::TEXT,
            TextAlign::Center,
        );
        let before = label.size().x;
        label.set_text("A much longer label");
        assert!(label.size().x > before);
    }
}
