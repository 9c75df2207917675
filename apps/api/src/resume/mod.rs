// One-page CV renderer.
// Measures every variable-height block before drawing it, then emits the page
// with lopdf. Pure and synchronous: callers in async code use spawn_blocking.

pub mod canvas;
pub mod color;
pub mod experience;
pub mod font_metrics;
pub mod header;
pub mod projects;
pub mod renderer;
pub mod sanitize;
pub mod skills;
pub mod wrap;

use thiserror::Error;

use crate::models::content::{Contact, ExperienceEntry, Profile, ProjectEntry};

// Re-export the public API consumed by the HTTP layer.
pub use renderer::render_resume;

/// Failures while serialising the composed page. Layout itself cannot fail.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to encode page content: {0}")]
    Encode(String),

    #[error("failed to write PDF document: {0}")]
    Write(String),
}

/// One skill bar: label and fill percentage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    pub percentage: u8,
}

/// Site identity shown on the CV: the brand item in the contact line and the
/// targets of the "see more" footer links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    pub site_name: String,
    pub site_url: String,
    /// GitHub handle used by the footer link when the contact record has none.
    pub fallback_github: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            site_name: "freelanxur".to_string(),
            site_url: "https://freelanxur.com".to_string(),
            fallback_github: "github.com/rayleighxu7".to_string(),
        }
    }
}

/// Everything one render needs, already loaded and parsed.
#[derive(Debug, Clone, Default)]
pub struct ResumeInput {
    pub profile: Profile,
    pub about: String,
    pub skills: Vec<Skill>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub contact: Contact,
    pub branding: Branding,
}
