//! Project cards (first three projects only) and the closing "see more" card.

use crate::models::content::{Contact, ProjectEntry};
use crate::resume::canvas::{wrapped_line_count, Align, Canvas, Next, CONTENT_WIDTH, LEFT_MARGIN};
use crate::resume::color;
use crate::resume::font_metrics::FontSpec;
use crate::resume::renderer::{draw_accent_strip, draw_card, CARD_GAP, CARD_INSET};
use crate::resume::sanitize::sanitize;
use crate::resume::Branding;

/// Projects beyond this many are left off the page.
pub const MAX_PROJECTS: usize = 3;
pub const NDA_NOTICE: &str = "Not publicly available due to NDA";

const CARD_PADDING: f32 = 3.0;
const TITLE_ROW_HEIGHT: f32 = 4.5;
const LINK_ROW_HEIGHT: f32 = 3.5;
const DESCRIPTION_LINE_HEIGHT: f32 = 3.3;
const DESCRIPTION_GAP: f32 = 0.5;
const DESCRIPTION_WIDTH: f32 = CONTENT_WIDTH - 12.0;
const INNER_X: f32 = LEFT_MARGIN + CARD_INSET;

const TITLE_FONT: FontSpec = FontSpec::bold(8.5);
const NDA_FONT: FontSpec = FontSpec::italic(7.0);
const LINK_FONT: FontSpec = FontSpec::regular(7.0).underlined();
const DESCRIPTION_FONT: FontSpec = FontSpec::regular(7.5);

const SEE_MORE_HEIGHT: f32 = 8.0;
const SEE_MORE_ROW_HEIGHT: f32 = 4.0;
const SEE_MORE_FONT: FontSpec = FontSpec::italic(7.5);
const SEE_MORE_LINK_FONT: FontSpec = FontSpec::bold(7.5).underlined();

/// What sits between a project's title and its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectNotice {
    /// The project is under NDA; any link is suppressed.
    Nda,
    /// Clickable link, shown as sanitised text pointing at the unsanitised URI.
    Link { label: String, uri: String },
    None,
}

impl ProjectNotice {
    pub fn for_project(project: &ProjectEntry) -> Self {
        if project.nda {
            return ProjectNotice::Nda;
        }
        match project.link.as_deref().map(str::trim) {
            Some(uri) if !uri.is_empty() => ProjectNotice::Link {
                label: sanitize(uri),
                uri: uri.to_string(),
            },
            _ => ProjectNotice::None,
        }
    }
}

/// A project card ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub title: String,
    pub notice: ProjectNotice,
    pub description: String,
    pub height: f32,
}

impl ProjectCard {
    pub fn from_entry(project: &ProjectEntry) -> Self {
        let notice = ProjectNotice::for_project(project);
        let description = sanitize(&project.description);

        let mut height = CARD_PADDING + TITLE_ROW_HEIGHT;
        if notice != ProjectNotice::None {
            height += LINK_ROW_HEIGHT;
        }
        if !description.is_empty() {
            let lines = wrapped_line_count(&DESCRIPTION_FONT, DESCRIPTION_WIDTH, &description);
            height += lines as f32 * DESCRIPTION_LINE_HEIGHT + DESCRIPTION_GAP;
        }

        Self {
            title: sanitize(&project.title),
            notice,
            description,
            height,
        }
    }
}

pub fn draw_projects(canvas: &mut Canvas, projects: &[ProjectEntry]) {
    for project in projects.iter().take(MAX_PROJECTS) {
        draw_project_card(canvas, &ProjectCard::from_entry(project));
    }
}

fn draw_project_card(canvas: &mut Canvas, card: &ProjectCard) {
    let card_y = canvas.y();
    draw_card(canvas, LEFT_MARGIN, card_y, CONTENT_WIDTH, card.height);
    draw_accent_strip(canvas, LEFT_MARGIN, card_y, card.height);

    canvas.set_xy(INNER_X, card_y + 1.0);
    canvas.set_font(TITLE_FONT);
    canvas.set_text_color(color::DARK);
    canvas.cell(0.0, TITLE_ROW_HEIGHT, &card.title, Align::Left, None, Next::NewLine);

    match &card.notice {
        ProjectNotice::Nda => {
            canvas.set_x(INNER_X);
            canvas.set_font(NDA_FONT);
            canvas.set_text_color(color::MUTED);
            canvas.cell(0.0, LINK_ROW_HEIGHT, NDA_NOTICE, Align::Left, None, Next::NewLine);
        }
        ProjectNotice::Link { label, uri } => {
            canvas.set_x(INNER_X);
            canvas.set_font(LINK_FONT);
            canvas.set_text_color(color::GOLD_MID);
            canvas.cell(0.0, LINK_ROW_HEIGHT, label, Align::Left, Some(uri), Next::NewLine);
        }
        ProjectNotice::None => {}
    }

    if !card.description.is_empty() {
        canvas.set_x(INNER_X);
        canvas.set_font(DESCRIPTION_FONT);
        canvas.set_text_color(color::BODY);
        canvas.multi_cell(DESCRIPTION_WIDTH, DESCRIPTION_LINE_HEIGHT, &card.description);
    }

    canvas.set_y(card_y + card.height + CARD_GAP);
}

/// GitHub target of the footer link: the contact's handle, or the branding fallback.
pub fn github_url(contact: &Contact, branding: &Branding) -> String {
    let github = contact.github.trim();
    let handle = if github.is_empty() {
        branding.fallback_github.trim()
    } else {
        github
    };
    format!("https://{handle}")
}

/// Website target of the footer link, anchored at the projects section.
pub fn website_url(branding: &Branding) -> String {
    format!("{}/#projects", branding.site_url.trim_end_matches('/'))
}

/// Closing card: "For more projects, see my website and GitHub", both linked.
pub fn draw_see_more(canvas: &mut Canvas, contact: &Contact, branding: &Branding) {
    let card_y = canvas.y();
    draw_card(canvas, LEFT_MARGIN, card_y, CONTENT_WIDTH, SEE_MORE_HEIGHT);
    canvas.set_xy(INNER_X, card_y + 2.0);

    let website = website_url(branding);
    let github = github_url(contact, branding);
    let runs: [(&str, Option<&str>); 4] = [
        ("For more projects, see my ", None),
        ("website", Some(website.as_str())),
        (" and ", None),
        ("GitHub", Some(github.as_str())),
    ];

    for (text, link) in runs {
        if link.is_some() {
            canvas.set_font(SEE_MORE_LINK_FONT);
            canvas.set_text_color(color::GOLD_MID);
        } else {
            canvas.set_font(SEE_MORE_FONT);
            canvas.set_text_color(color::MUTED);
        }
        let w = canvas.string_width(text);
        canvas.cell(w, SEE_MORE_ROW_HEIGHT, text, Align::Left, link, Next::Right);
    }

    canvas.set_y(card_y + SEE_MORE_HEIGHT + CARD_GAP);
}
