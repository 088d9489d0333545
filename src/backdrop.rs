//! Animated PS1-style backdrop behind the menus

use macroquad::prelude::*;

use crate::theme;

/// Background gradient top color (dark blue)
const BG_TOP: Color = Color::new(0.04, 0.04, 0.18, 1.0);
/// Wave ribbon color (dark cyan), alpha scaled per ribbon
const WAVE: Color = Color::new(0.0, 0.2, 0.3, 1.0);

const RIBBON_COUNT: usize = 5;
const RIBBON_SEGMENTS: usize = 32;
const RIBBON_THICKNESS: f32 = 3.0;

/// Draw the gradient plus animated wave ribbons covering the whole screen
pub fn draw_backdrop(time: f32, screen_w: f32, screen_h: f32) {
    draw_gradient(screen_w, screen_h);
    draw_ribbons(time, screen_w, screen_h);
}

/// Vertical gradient approximated with smoothstep-eased horizontal strips
fn draw_gradient(screen_w: f32, screen_h: f32) {
    let strips = 24;
    let strip_height = screen_h / strips as f32;
    let bottom = theme::palette::BG;

    for i in 0..strips {
        let t = i as f32 / (strips - 1) as f32;
        let eased = t * t * (3.0 - 2.0 * t);
        let color = Color::new(
            BG_TOP.r + (bottom.r - BG_TOP.r) * eased,
            BG_TOP.g + (bottom.g - BG_TOP.g) * eased,
            BG_TOP.b + (bottom.b - BG_TOP.b) * eased,
            1.0,
        );
        draw_rectangle(0.0, i as f32 * strip_height, screen_w, strip_height, color);
    }
}

/// Height of ribbon `n` at horizontal position `t` in 0..1. Two sine terms
/// moving against each other so the ribbons never settle into a loop.
fn ribbon_y(n: usize, t: f32, time: f32, screen_h: f32) -> f32 {
    let depth = (n + 1) as f32 / RIBBON_COUNT as f32;
    let base = screen_h * (0.25 + 0.6 * depth);
    let amp = 10.0 + 18.0 * depth;
    let phase = n as f32 * 1.7;

    base + amp * (t * 6.3 + time * 1.4 + phase).sin()
        + amp * 0.4 * (t * 11.0 - time * 0.9 + phase).sin()
}

/// Ribbons drawn as quads (two triangles per segment), faint in the
/// distance, stronger toward the bottom of the screen
fn draw_ribbons(time: f32, screen_w: f32, screen_h: f32) {
    for n in 0..RIBBON_COUNT {
        let depth = (n + 1) as f32 / RIBBON_COUNT as f32;
        let color = Color::new(WAVE.r, WAVE.g, WAVE.b, 0.1 + 0.25 * depth);

        for i in 0..RIBBON_SEGMENTS {
            let t1 = i as f32 / RIBBON_SEGMENTS as f32;
            let t2 = (i + 1) as f32 / RIBBON_SEGMENTS as f32;
            let x1 = t1 * screen_w;
            let x2 = t2 * screen_w;
            let y1 = ribbon_y(n, t1, time, screen_h);
            let y2 = ribbon_y(n, t2, time, screen_h);

            let a = vec2(x1, y1);
            let b = vec2(x2, y2);
            let a2 = vec2(x1, y1 + RIBBON_THICKNESS);
            let b2 = vec2(x2, y2 + RIBBON_THICKNESS);
            draw_triangle(a, b, a2, color);
            draw_triangle(b, b2, a2, color);
        }
    }
}
