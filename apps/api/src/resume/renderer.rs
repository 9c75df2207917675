//! Page assembly: runs the section passes top to bottom on one canvas and
//! serialises the result.
//!
//! Pass order is fixed: header, About, Experience, Skills, Projects (with the
//! "see more" footer card). Passes only share the canvas cursor and style state.

use tracing::{debug, warn};

use crate::resume::canvas::{
    Align, Canvas, Next, Paint, CONTENT_WIDTH, LEFT_MARGIN, PAGE_HEIGHT, PAGE_WIDTH, RIGHT_MARGIN,
};
use crate::resume::color;
use crate::resume::experience::draw_experience;
use crate::resume::font_metrics::FontSpec;
use crate::resume::header::draw_header;
use crate::resume::projects::{draw_projects, draw_see_more};
use crate::resume::sanitize::sanitize;
use crate::resume::skills::draw_skills;
use crate::resume::{RenderError, ResumeInput};

/// Horizontal offset of card content from the card's left edge.
pub const CARD_INSET: f32 = 5.0;
/// Vertical gap after every card.
pub const CARD_GAP: f32 = 1.5;
const CARD_RADIUS: f32 = 2.0;
const CARD_BORDER_WIDTH: f32 = 0.25;
const ACCENT_STRIP_WIDTH: f32 = 1.0;
const ACCENT_STRIP_RADIUS: f32 = 0.5;

const HEADING_GAP_ABOVE: f32 = 3.0;
const HEADING_GAP_BELOW: f32 = 1.5;
const HEADING_ROW_HEIGHT: f32 = 4.5;
const HEADING_DOT: f32 = 1.8;
const HEADING_FONT: FontSpec = FontSpec::bold(9.0);

const ABOUT_FONT: FontSpec = FontSpec::regular(8.0);
const ABOUT_LINE_HEIGHT: f32 = 3.5;

/// Renders the complete one-page CV and returns the PDF bytes.
pub fn render_resume(input: &ResumeInput) -> Result<Vec<u8>, RenderError> {
    let canvas = compose(input);
    if canvas.overflowed() {
        warn!(
            cursor_mm = canvas.y(),
            page_height_mm = PAGE_HEIGHT,
            "CV content runs past the bottom of the page"
        );
    }
    let links = canvas.links().len();
    let bytes = canvas.finish()?;
    debug!(bytes = bytes.len(), links, "CV rendered");
    Ok(bytes)
}

/// Draws every section onto a fresh canvas.
pub fn compose(input: &ResumeInput) -> Canvas {
    let mut canvas = Canvas::new();

    draw_header(&mut canvas, &input.profile, &input.contact, &input.branding);
    debug!(cursor_mm = canvas.y(), "header drawn");

    section_heading(&mut canvas, "About Me");
    canvas.set_font(ABOUT_FONT);
    canvas.set_text_color(color::BODY);
    canvas.set_x(LEFT_MARGIN);
    canvas.multi_cell(CONTENT_WIDTH, ABOUT_LINE_HEIGHT, &sanitize(&input.about));
    debug!(cursor_mm = canvas.y(), "about drawn");

    section_heading(&mut canvas, "Experience");
    draw_experience(&mut canvas, &input.experience);
    debug!(cursor_mm = canvas.y(), entries = input.experience.len(), "experience drawn");

    section_heading(&mut canvas, "Skills");
    draw_skills(&mut canvas, &input.skills);
    debug!(cursor_mm = canvas.y(), skills = input.skills.len(), "skills drawn");

    section_heading(&mut canvas, "Projects");
    draw_projects(&mut canvas, &input.projects);
    draw_see_more(&mut canvas, &input.contact, &input.branding);
    debug!(cursor_mm = canvas.y(), "projects drawn");

    canvas
}

/// Gold dot, uppercase bold title and a thin rule across the content width.
pub(crate) fn section_heading(canvas: &mut Canvas, title: &str) {
    canvas.ln(HEADING_GAP_ABOVE);
    let y = canvas.y();

    canvas.set_fill_color(color::HEADING_GOLD);
    canvas.ellipse(LEFT_MARGIN, y + 1.2, HEADING_DOT, HEADING_DOT, Paint::Fill);

    canvas.set_xy(LEFT_MARGIN + 3.5, y);
    canvas.set_font(HEADING_FONT);
    canvas.set_text_color(color::DARK);
    canvas.cell(0.0, HEADING_ROW_HEIGHT, &title.to_uppercase(), Align::Left, None, Next::NewLine);

    let rule_y = canvas.y() + 0.2;
    canvas.set_draw_color(color::RULE_SOFT);
    canvas.set_line_width(0.2);
    canvas.line(LEFT_MARGIN, rule_y, PAGE_WIDTH - RIGHT_MARGIN, rule_y);
    canvas.ln(HEADING_GAP_BELOW);
}

/// Card background: warm fill, soft border, rounded corners.
pub(crate) fn draw_card(canvas: &mut Canvas, x: f32, y: f32, w: f32, h: f32) {
    canvas.set_fill_color(color::CARD_BG);
    canvas.set_draw_color(color::RULE_SOFT);
    canvas.set_line_width(CARD_BORDER_WIDTH);
    canvas.rounded_rect(x, y, w, h, CARD_RADIUS, Paint::FillStroke);
}

/// Thin gold strip down a card's left edge.
pub(crate) fn draw_accent_strip(canvas: &mut Canvas, x: f32, y: f32, h: f32) {
    canvas.set_fill_color(color::HEADING_GOLD);
    canvas.rounded_rect(x, y, ACCENT_STRIP_WIDTH, h, ACCENT_STRIP_RADIUS, Paint::Fill);
}
