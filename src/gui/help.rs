//! Help-prompt bar
//!
//! Renders the prompts aggregated from the open menu along the bottom edge
//! of the screen as `[INPUT] label` pairs.

use macroquad::prelude::*;

use super::{text_size, HelpPrompt, Rect};
use crate::theme;

/// Height of the help bar strip
pub const BAR_HEIGHT: f32 = 26.0;

const BAR_INSET: f32 = 12.0;
const PROMPT_SPACING: f32 = 18.0;
const INPUT_LABEL_GAP: f32 = 6.0;

/// Width of one `[INPUT] label` pair
fn prompt_width(prompt: &HelpPrompt) -> f32 {
    let input = format!("[{}]", prompt.input);
    text_size(&input, theme::font::SMALL).x
        + INPUT_LABEL_GAP
        + text_size(&prompt.label, theme::font::SMALL).x
}

/// Number of leading prompts that fit within `width` without overflowing
fn prompts_that_fit(prompts: &[HelpPrompt], width: f32) -> usize {
    let mut x = BAR_INSET;
    for (index, prompt) in prompts.iter().enumerate() {
        if x + prompt_width(prompt) > width {
            return index;
        }
        x += prompt_width(prompt) + PROMPT_SPACING;
    }
    prompts.len()
}

pub fn draw_help_bar(rect: Rect, prompts: &[HelpPrompt]) {
    draw_rectangle(
        rect.x,
        rect.y,
        rect.w,
        rect.h,
        Color::new(0.0, 0.0, 0.0, 0.35),
    );

    let visible = prompts_that_fit(prompts, rect.w);
    let mut x = rect.x + BAR_INSET;
    for prompt in &prompts[..visible] {
        let input = format!("[{}]", prompt.input);
        let input_dims = text_size(&input, theme::font::SMALL);
        let label_dims = text_size(&prompt.label, theme::font::SMALL);
        let y = (rect.y + (rect.h + input_dims.y) * 0.5).round();

        draw_text_ex(
            &input,
            x.round(),
            y,
            TextParams {
                font_size: theme::font::SMALL as u16,
                color: theme::palette::ACCENT,
                ..Default::default()
            },
        );
        x += input_dims.x + INPUT_LABEL_GAP;

        draw_text_ex(
            &prompt.label,
            x.round(),
            y,
            TextParams {
                font_size: theme::font::SMALL as u16,
                color: theme::palette::MUTED,
                ..Default::default()
            },
        );
        x += label_dims.x + PROMPT_SPACING;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_clipped_before_drawing() {
        let prompts = vec![
            HelpPrompt::new("UP/DOWN", "choose"),
            HelpPrompt::new("ENTER", "launch selected game"),
            HelpPrompt::new("ESC", "back"),
        ];
        assert_eq!(prompts_that_fit(&prompts, 10_000.0), 3);
        assert_eq!(prompts_that_fit(&prompts, 1.0), 0);

        // Room for exactly the first prompt: the second must not overflow
        let width = BAR_INSET + prompt_width(&prompts[0]) + 1.0;
        assert_eq!(prompts_that_fit(&prompts, width), 1);
    }
}
