//! Two-column skill bars inside a single card.
//!
//! The left column takes the first `ceil(n / 2)` skills and the right column
//! the rest, both in input order. Each bar is a light rounded track with a
//! gradient fill proportional to the percentage.

use crate::resume::canvas::{Align, Canvas, Next, Paint, CONTENT_WIDTH, LEFT_MARGIN};
use crate::resume::color::{self, band_colors, gradient_color_at};
use crate::resume::font_metrics::FontSpec;
use crate::resume::renderer::{draw_card, CARD_GAP};
use crate::resume::sanitize::sanitize;
use crate::resume::Skill;

const LABEL_WIDTH: f32 = 30.0;
const COLUMN_GAP: f32 = 10.0;
const ROW_HEIGHT: f32 = 5.5;
const SIDE_PADDING: f32 = 4.0;
/// Card height on top of the rows.
const CARD_PADDING: f32 = 5.0;
const FIRST_ROW_OFFSET: f32 = 2.5;
const LABEL_ROW_HEIGHT: f32 = 3.5;

/// Width of one bar track.
pub const TRACK_WIDTH: f32 =
    (CONTENT_WIDTH - 2.0 * SIDE_PADDING - 2.0 * LABEL_WIDTH - COLUMN_GAP) / 2.0;
const TRACK_HEIGHT: f32 = 2.8;
const TRACK_OFFSET: f32 = 0.3;
const CORNER_RADIUS: f32 = 1.4;
const BODY_BANDS: usize = 20;
const BAND_OVERDRAW: f32 = 0.3;

const LABEL_FONT: FontSpec = FontSpec::regular(7.5);

/// Splits skills into the left and right columns, preserving order.
pub fn split_columns(skills: &[Skill]) -> (&[Skill], &[Skill]) {
    skills.split_at(skills.len().div_ceil(2))
}

/// Height of the skills card: fixed padding plus one row per skill in the taller column.
pub fn card_height(skills: &[Skill]) -> f32 {
    let (left, right) = split_columns(skills);
    CARD_PADDING + left.len().max(right.len()) as f32 * ROW_HEIGHT
}

/// Filled width of a bar for `percentage`. Not clamped: callers validate the range.
pub fn fill_width(percentage: u8) -> f32 {
    TRACK_WIDTH * percentage as f32 / 100.0
}

pub fn draw_skills(canvas: &mut Canvas, skills: &[Skill]) {
    let card_h = card_height(skills);
    let card_y = canvas.y();
    draw_card(canvas, LEFT_MARGIN, card_y, CONTENT_WIDTH, card_h);

    let (left, right) = split_columns(skills);
    let column_span = LABEL_WIDTH + TRACK_WIDTH + COLUMN_GAP;

    for (col, column) in [left, right].into_iter().enumerate() {
        let col_x = LEFT_MARGIN + SIDE_PADDING + col as f32 * column_span;
        let mut row_y = card_y + FIRST_ROW_OFFSET;

        for skill in column {
            canvas.set_xy(col_x, row_y);
            canvas.set_font(LABEL_FONT);
            canvas.set_text_color(color::DARK);
            canvas.cell(
                LABEL_WIDTH,
                LABEL_ROW_HEIGHT,
                &sanitize(&skill.name),
                Align::Left,
                None,
                Next::Right,
            );

            draw_bar(canvas, col_x + LABEL_WIDTH, row_y + TRACK_OFFSET, skill.percentage);
            row_y += ROW_HEIGHT;
        }
    }

    canvas.set_y(card_y + card_h + CARD_GAP);
}

fn draw_bar(canvas: &mut Canvas, x: f32, y: f32, percentage: u8) {
    canvas.set_fill_color(color::BAR_TRACK);
    canvas.rounded_rect(x, y, TRACK_WIDTH, TRACK_HEIGHT, CORNER_RADIUS, Paint::Fill);

    let fill_w = fill_width(percentage);
    if fill_w <= 0.0 {
        return;
    }

    if fill_w <= TRACK_HEIGHT {
        // Too narrow for end caps: one rounded sliver in the mid colour.
        canvas.set_fill_color(gradient_color_at(0.5));
        canvas.rounded_rect(x, y, fill_w, TRACK_HEIGHT, CORNER_RADIUS, Paint::Fill);
        return;
    }

    canvas.set_fill_color(gradient_color_at(0.0));
    canvas.ellipse(x, y, TRACK_HEIGHT, TRACK_HEIGHT, Paint::Fill);
    canvas.set_fill_color(gradient_color_at(1.0));
    canvas.ellipse(x + fill_w - TRACK_HEIGHT, y, TRACK_HEIGHT, TRACK_HEIGHT, Paint::Fill);

    let body_x = x + CORNER_RADIUS;
    let body_w = fill_w - 2.0 * CORNER_RADIUS;
    let band_w = body_w / BODY_BANDS as f32;
    for (i, band) in band_colors(BODY_BANDS).enumerate() {
        let band_x = body_x + i as f32 * band_w;
        let w = (band_w + BAND_OVERDRAW).min(body_x + body_w - band_x);
        canvas.set_fill_color(band);
        canvas.rect(band_x, y, w, TRACK_HEIGHT, Paint::Fill);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(n: usize) -> Vec<Skill> {
        (0..n)
            .map(|i| Skill {
                name: format!("skill-{i}"),
                percentage: 50,
            })
            .collect()
    }

    #[test]
    fn test_split_columns_ceil_left() {
        for n in 0..=9 {
            let all = skills(n);
            let (left, right) = split_columns(&all);
            assert_eq!(left.len(), n.div_ceil(2), "n={n}");
            assert_eq!(right.len(), n - left.len(), "n={n}");
            let rejoined: Vec<Skill> = left.iter().chain(right).cloned().collect();
            assert_eq!(rejoined, all);
        }
    }

    #[test]
    fn test_card_height_follows_taller_column() {
        assert!((card_height(&skills(0)) - CARD_PADDING).abs() < 1e-5);
        assert!((card_height(&skills(5)) - (CARD_PADDING + 3.0 * ROW_HEIGHT)).abs() < 1e-5);
        assert!((card_height(&skills(6)) - (CARD_PADDING + 3.0 * ROW_HEIGHT)).abs() < 1e-5);
    }

    #[test]
    fn test_track_width() {
        assert!((TRACK_WIDTH - 54.0).abs() < 1e-4);
        assert!((fill_width(100) - TRACK_WIDTH).abs() < 1e-4);
        assert!((fill_width(50) - 27.0).abs() < 1e-4);
    }

    fn bar_ops(percentage: u8) -> (usize, usize, usize) {
        let mut canvas = Canvas::new();
        draw_bar(&mut canvas, 20.0, 20.0, percentage);
        (
            canvas.operator_count("re"),
            canvas.operator_count("c"),
            canvas.operator_count("f"),
        )
    }

    #[test]
    fn test_zero_percent_draws_only_track() {
        // Track: rounded path, four curves, one fill.
        assert_eq!(bar_ops(0), (0, 4, 1));
    }

    #[test]
    fn test_sliver_fill_is_single_rounded_shape() {
        // 5% of 54mm is 2.7mm, narrower than the track height.
        assert_eq!(bar_ops(5), (0, 8, 2));
    }

    #[test]
    fn test_wide_fill_has_caps_and_twenty_bands() {
        // Track + two end caps (4 curves each) + 20 band rectangles.
        assert_eq!(bar_ops(80), (BODY_BANDS, 12, 3 + BODY_BANDS));
    }

    #[test]
    fn test_labels_drawn_in_column_order() {
        let mut canvas = Canvas::new();
        canvas.set_y(100.0);
        draw_skills(&mut canvas, &skills(3));
        assert_eq!(
            canvas.texts(),
            vec!["skill-0".to_string(), "skill-1".to_string(), "skill-2".to_string()]
        );
        assert!((canvas.y() - (100.0 + card_height(&skills(3)) + CARD_GAP)).abs() < 1e-4);
    }
}
