//! Header banner: dark band, gradient accent line, centred name and title,
//! and one centred line of clickable contact links.

use crate::models::content::{Contact, Profile};
use crate::resume::canvas::{Align, Canvas, Next, Paint, LEFT_MARGIN, PAGE_WIDTH};
use crate::resume::color::{self, band_colors};
use crate::resume::font_metrics::FontSpec;
use crate::resume::sanitize::sanitize;
use crate::resume::Branding;

pub const BANNER_HEIGHT: f32 = 28.0;
const ACCENT_HEIGHT: f32 = 0.8;
const ACCENT_BANDS: usize = 40;
/// Each band is widened by this much so neighbours overlap without hairline gaps.
const BAND_OVERDRAW: f32 = 0.2;

const NAME_TOP: f32 = 6.0;
const NAME_ROW_HEIGHT: f32 = 8.0;
const TITLE_ROW_HEIGHT: f32 = 4.0;
const CONTACT_ROW_HEIGHT: f32 = 4.5;
/// Gap between the banner and the first section.
const BANNER_GAP: f32 = 1.5;

pub const CONTACT_SEPARATOR: &str = "  |  ";

const NAME_FONT: FontSpec = FontSpec::bold(20.0);
const TITLE_FONT: FontSpec = FontSpec::regular(8.5);
const CONTACT_FONT: FontSpec = FontSpec::regular(7.5);

/// One visible entry of the contact line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactItem {
    pub label: String,
    pub url: String,
}

/// Builds the contact line in display order: email, site brand, GitHub, LinkedIn.
/// Entries whose value or label is blank once sanitised are left out entirely.
pub fn contact_items(contact: &Contact, branding: &Branding) -> Vec<ContactItem> {
    let email = contact.email.trim();
    let github = contact.github.trim();
    let linkedin = contact.linkedin.trim();

    let candidates = [
        (email, email, format!("mailto:{email}")),
        (
            branding.site_name.trim(),
            branding.site_name.trim(),
            branding.site_url.clone(),
        ),
        ("GitHub", github, format!("https://{github}")),
        ("LinkedIn", linkedin, format!("https://{linkedin}")),
    ];

    candidates
        .into_iter()
        .filter_map(|(label, value, url)| {
            let label = sanitize(label);
            (!sanitize(value).is_empty() && !label.is_empty()).then_some(ContactItem { label, url })
        })
        .collect()
}

/// Total rendered width of the contact line: every label plus one separator per gap.
pub fn contact_line_width(items: &[ContactItem]) -> f32 {
    let separator_w = CONTACT_FONT.string_width(CONTACT_SEPARATOR);
    let link_font = CONTACT_FONT.underlined();
    let labels: f32 = items
        .iter()
        .map(|item| link_font.string_width(&item.label))
        .sum();
    labels + separator_w * items.len().saturating_sub(1) as f32
}

pub fn draw_header(canvas: &mut Canvas, profile: &Profile, contact: &Contact, branding: &Branding) {
    canvas.set_fill_color(color::BANNER);
    canvas.rect(0.0, 0.0, PAGE_WIDTH, BANNER_HEIGHT, Paint::Fill);
    draw_gradient_line(canvas, BANNER_HEIGHT - ACCENT_HEIGHT, ACCENT_HEIGHT);

    canvas.set_xy(LEFT_MARGIN, NAME_TOP);
    canvas.set_font(NAME_FONT);
    canvas.set_text_color(color::HEADING_GOLD);
    let name = sanitize(&profile.full_name());
    canvas.cell(0.0, NAME_ROW_HEIGHT, &name, Align::Center, None, Next::NewLine);

    let title = sanitize(&profile.title);
    if !title.is_empty() {
        canvas.set_font(TITLE_FONT);
        canvas.set_text_color(color::SUBTITLE);
        canvas.cell(0.0, TITLE_ROW_HEIGHT, &title, Align::Center, None, Next::NewLine);
    }

    draw_contact_line(canvas, &contact_items(contact, branding));

    canvas.set_y(BANNER_HEIGHT + BANNER_GAP);
}

/// Full-width accent line approximated by solid bands sampled across the gradient.
fn draw_gradient_line(canvas: &mut Canvas, y: f32, h: f32) {
    let band_w = PAGE_WIDTH / ACCENT_BANDS as f32;
    for (i, band) in band_colors(ACCENT_BANDS).enumerate() {
        canvas.set_fill_color(band);
        canvas.rect(i as f32 * band_w, y, band_w + BAND_OVERDRAW, h, Paint::Fill);
    }
}

fn draw_contact_line(canvas: &mut Canvas, items: &[ContactItem]) {
    if items.is_empty() {
        return;
    }

    let start_x = (PAGE_WIDTH - contact_line_width(items)) / 2.0;
    let y = canvas.y();
    canvas.set_xy(start_x, y);

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            canvas.set_font(CONTACT_FONT);
            canvas.set_text_color(color::SEPARATOR);
            let w = canvas.string_width(CONTACT_SEPARATOR);
            canvas.cell(w, CONTACT_ROW_HEIGHT, CONTACT_SEPARATOR, Align::Left, None, Next::Right);
        }
        canvas.set_font(CONTACT_FONT.underlined());
        canvas.set_text_color(color::GOLD_SOFT);
        let w = canvas.string_width(&item.label);
        canvas.cell(
            w,
            CONTACT_ROW_HEIGHT,
            &item.label,
            Align::Left,
            Some(&item.url),
            Next::Right,
        );
    }
}
