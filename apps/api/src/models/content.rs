use serde::{Deserialize, Serialize};

use crate::resume::Skill;

// ────────────────────────────────────────────────────────────────────────────
// Documents consumed by the CV renderer
// ────────────────────────────────────────────────────────────────────────────

/// `profile.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub tagline: String,
    pub status: String,
    pub status_available: bool,
    pub page_title: String,
    pub footer: String,
}

impl Profile {
    /// First and last name joined by a space, ignoring whichever is blank.
    pub fn full_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// `contact.json`. GitHub and LinkedIn values are host-relative (`github.com/...`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    pub github: String,
    pub linkedin: String,
}

/// One element of `experience.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    /// Long-form description for the website; the CV uses `cv_bullets` instead.
    pub description: String,
    pub cv_bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillItem {
    pub name: String,
    pub percentage: i64,
}

/// `skills.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsDocument {
    pub skills: Vec<SkillItem>,
    pub note: String,
}

impl SkillsDocument {
    /// Skill bars for the CV, in document order with percentages clamped to `0..=100`.
    ///
    /// A repeated name keeps its first position and takes the last value.
    pub fn skill_levels(&self) -> Vec<Skill> {
        let mut levels: Vec<Skill> = Vec::with_capacity(self.skills.len());
        for item in &self.skills {
            let percentage = item.percentage.clamp(0, 100) as u8;
            match levels.iter_mut().find(|s| s.name == item.name) {
                Some(existing) => existing.percentage = percentage,
                None => levels.push(Skill {
                    name: item.name.clone(),
                    percentage,
                }),
            }
        }
        levels
    }
}

/// One element of `projects.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub link: Option<String>,
    /// Under NDA: the link is withheld and a notice is shown instead.
    pub nda: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Website-only documents
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricItem {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceItem {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechCategory {
    pub name: String,
    pub tags: Vec<String>,
}

/// `tech_stack.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechStack {
    pub categories: Vec<TechCategory>,
}

/// Response of `GET /api/about`: both Markdown documents rendered to HTML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutResponse {
    pub about_me: String,
    pub about_logo: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let profile: Profile = serde_json::from_str(r#"{"first_name": "Ada"}"#).unwrap();
        assert_eq!(profile.first_name, "Ada");
        assert_eq!(profile.title, "");
        assert!(!profile.status_available);

        let project: ProjectEntry = serde_json::from_str(r#"{"title": "Tool"}"#).unwrap();
        assert_eq!(project.link, None);
        assert!(!project.nda);
        assert!(project.tags.is_empty());
    }

    #[test]
    fn test_full_name_skips_blank_parts() {
        let mut profile = Profile {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            ..Profile::default()
        };
        assert_eq!(profile.full_name(), "Ada Lovelace");
        profile.last_name.clear();
        assert_eq!(profile.full_name(), "Ada");
        assert_eq!(Profile::default().full_name(), "");
    }

    #[test]
    fn test_skill_levels_clamp_and_keep_order() {
        let doc: SkillsDocument = serde_json::from_str(
            r#"{"skills": [
                {"name": "Rust", "percentage": 140},
                {"name": "Go", "percentage": -5},
                {"name": "SQL", "percentage": 60}
            ]}"#,
        )
        .unwrap();
        let levels = doc.skill_levels();
        let pairs: Vec<(&str, u8)> = levels.iter().map(|s| (s.name.as_str(), s.percentage)).collect();
        assert_eq!(pairs, vec![("Rust", 100), ("Go", 0), ("SQL", 60)]);
    }

    #[test]
    fn test_skill_levels_repeated_name_takes_last_value() {
        let doc = SkillsDocument {
            skills: vec![
                SkillItem { name: "Rust".to_string(), percentage: 40 },
                SkillItem { name: "Go".to_string(), percentage: 50 },
                SkillItem { name: "Rust".to_string(), percentage: 90 },
            ],
            note: String::new(),
        };
        let levels = doc.skill_levels();
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[0], Skill { name: "Rust".to_string(), percentage: 90 });
    }
}
