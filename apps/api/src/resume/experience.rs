//! Experience cards: one measured-then-drawn card per entry, in input order.

use crate::models::content::ExperienceEntry;
use crate::resume::canvas::{wrapped_line_count, Align, Canvas, Next, CONTENT_WIDTH, LEFT_MARGIN};
use crate::resume::color;
use crate::resume::font_metrics::FontSpec;
use crate::resume::renderer::{draw_accent_strip, draw_card, CARD_GAP, CARD_INSET};
use crate::resume::sanitize::sanitize;

const PADDING_TOP: f32 = 2.0;
const PADDING_BOTTOM: f32 = 1.0;
const TITLE_ROW_HEIGHT: f32 = 4.5;
const BULLET_LINE_HEIGHT: f32 = 3.3;
/// Extra space under the last bullet when a card has bullets.
const BULLET_BLOCK_GAP: f32 = 0.5;
const BULLET_X: f32 = LEFT_MARGIN + CARD_INSET + 1.0;
const BULLET_WIDTH: f32 = CONTENT_WIDTH - 8.0;

const TITLE_FONT: FontSpec = FontSpec::bold(8.5);
const DATE_FONT: FontSpec = FontSpec::regular(7.5);
const BULLET_FONT: FontSpec = FontSpec::regular(7.5);

/// A single experience entry ready to draw: sanitised strings plus its measured height.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceCard {
    pub heading: String,
    pub dates: String,
    pub bullets: Vec<String>,
    pub height: f32,
}

impl ExperienceCard {
    pub fn from_entry(entry: &ExperienceEntry) -> Self {
        let bullets: Vec<String> = entry
            .cv_bullets
            .iter()
            .map(|b| sanitize(&format!("- {b}")))
            .collect();
        let height = card_height(&bullets);
        Self {
            heading: sanitize(&format!("{} @ {}", entry.title, entry.company)),
            dates: date_range(entry),
            bullets,
            height,
        }
    }
}

/// `"{start} - {end}"`, degrading to whichever side is present, or empty when neither is.
pub fn date_range(entry: &ExperienceEntry) -> String {
    let start = sanitize(&entry.start_date);
    let end = sanitize(&entry.end_date);
    match (start.is_empty(), end.is_empty()) {
        (false, false) => format!("{start} - {end}"),
        (false, true) => start,
        (true, false) => end,
        (true, true) => String::new(),
    }
}

/// Card height: paddings and title row, plus every wrapped bullet line when there are bullets.
pub fn card_height(bullets: &[String]) -> f32 {
    let mut height = PADDING_TOP + TITLE_ROW_HEIGHT;
    if !bullets.is_empty() {
        let lines: usize = bullets
            .iter()
            .map(|b| wrapped_line_count(&BULLET_FONT, BULLET_WIDTH, b))
            .sum();
        height += lines as f32 * BULLET_LINE_HEIGHT + BULLET_BLOCK_GAP;
    }
    height + PADDING_BOTTOM
}

pub fn draw_experience(canvas: &mut Canvas, entries: &[ExperienceEntry]) {
    for entry in entries {
        draw_experience_card(canvas, &ExperienceCard::from_entry(entry));
    }
}

fn draw_experience_card(canvas: &mut Canvas, card: &ExperienceCard) {
    let card_y = canvas.y();
    draw_card(canvas, LEFT_MARGIN, card_y, CONTENT_WIDTH, card.height);
    draw_accent_strip(canvas, LEFT_MARGIN, card_y, card.height);

    let row_y = card_y + 1.0;
    canvas.set_xy(LEFT_MARGIN + CARD_INSET, row_y);
    canvas.set_font(TITLE_FONT);
    canvas.set_text_color(color::DARK);
    let heading_w = canvas.string_width(&card.heading) + 1.0;
    canvas.cell(heading_w, TITLE_ROW_HEIGHT, &card.heading, Align::Left, None, Next::Right);

    if !card.dates.is_empty() {
        canvas.set_font(DATE_FONT);
        canvas.set_text_color(color::MUTED);
        let date_w = canvas.string_width(&card.dates);
        canvas.set_xy(LEFT_MARGIN + CONTENT_WIDTH - CARD_INSET - date_w, row_y);
        canvas.cell(date_w, TITLE_ROW_HEIGHT, &card.dates, Align::Left, None, Next::Right);
    }

    if !card.bullets.is_empty() {
        canvas.set_xy(BULLET_X, row_y + TITLE_ROW_HEIGHT);
        canvas.set_font(BULLET_FONT);
        canvas.set_text_color(color::BODY);
        for bullet in &card.bullets {
            canvas.set_x(BULLET_X);
            canvas.multi_cell(BULLET_WIDTH, BULLET_LINE_HEIGHT, bullet);
        }
    }

    canvas.set_y(card_y + card.height + CARD_GAP);
}
