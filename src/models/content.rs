//! Static site content: profile, status options, projects, and shelves.
//!
//! Content is authored as TOML (`assets/content/site.toml`), embedded at
//! compile time and validated once when the site starts. A document that
//! fails validation is an authoring mistake; the page refuses to render it
//! rather than showing a partial site.

use std::collections::HashSet;

use serde::Deserialize;

use crate::config::SITE_CONTENT;
use crate::core::ContentError;
use crate::utils::classify_link;

/// Icon slot referenced from content. Mapped to concrete icons by the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Glyph {
    Layout,
    Globe,
    Cpu,
    Sparkles,
    Coffee,
    Music,
    Book,
    Github,
    Twitter,
    Mail,
}

/// Colour accent referenced from content. Mapped to CSS classes by the UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Neutral,
    Blue,
    Purple,
    Indigo,
    Emerald,
    Orange,
    Red,
}

/// A showcased project on the works page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub tag: String,
    pub description: String,
    pub glyph: Glyph,
    #[serde(default)]
    pub accent: Accent,
    /// Case study link; projects without one are display-only.
    #[serde(default)]
    pub url: Option<String>,
}

/// One of the messages the home page status widget can show.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StatusOption {
    pub text: String,
    pub glyph: Glyph,
    #[serde(default)]
    pub accent: Accent,
}

impl StatusOption {
    /// Pick an option from a uniform `roll` in `[0, 1)`.
    ///
    /// Rolls outside the range are clamped, so `1.0` selects the last option.
    pub fn pick(options: &[StatusOption], roll: f64) -> Option<&StatusOption> {
        if options.is_empty() {
            return None;
        }
        let scaled = (roll.clamp(0.0, 1.0) * options.len() as f64).floor() as usize;
        options.get(scaled.min(options.len() - 1))
    }
}

/// A small "currently enjoying" card on the home page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Shelf {
    /// Small caps heading, e.g. "On Repeat".
    pub label: String,
    pub title: String,
    pub subtitle: String,
    pub glyph: Glyph,
    #[serde(default)]
    pub accent: Accent,
}

/// Contact link on the about page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
    pub glyph: Glyph,
}

/// Sentence with one highlighted phrase.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Emphasized {
    pub before: String,
    pub emphasis: String,
    #[serde(default)]
    pub after: String,
}

/// Who the site is about.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Profile {
    /// Display name, e.g. "Kite".
    pub owner: String,
    /// Monogram shown in the top bar.
    pub initial: String,
    /// Home page introduction.
    pub tagline: String,
    /// About page headline.
    pub headline: String,
    /// About page lead sentence.
    pub manifesto: Emphasized,
    pub story: String,
    pub passions: Vec<String>,
    pub links: Vec<ContactLink>,
}

/// Everything the site displays.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub statuses: Vec<StatusOption>,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub shelves: Vec<Shelf>,
}

impl SiteContent {
    /// Parse and validate a content document.
    pub fn parse(source: &str) -> Result<Self, ContentError> {
        let content: Self = toml::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    /// The content embedded in the binary.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::parse(SITE_CONTENT)
    }

    /// Check the invariants the views rely on.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.statuses.is_empty() {
            return Err(ContentError::EmptySection("statuses"));
        }
        if self.projects.is_empty() {
            return Err(ContentError::EmptySection("projects"));
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(ContentError::DuplicateProjectId(project.id));
            }
            if let Some(url) = &project.url {
                check_link(&project.title, url)?;
            }
        }

        for link in &self.profile.links {
            check_link(&link.label, &link.href)?;
        }

        Ok(())
    }

    /// Status option for a uniform `roll` in `[0, 1)`.
    pub fn status_for(&self, roll: f64) -> StatusOption {
        StatusOption::pick(&self.statuses, roll)
            .cloned()
            .unwrap_or_else(|| StatusOption {
                text: String::new(),
                glyph: Glyph::Sparkles,
                accent: Accent::Neutral,
            })
    }
}

fn check_link(label: &str, href: &str) -> Result<(), ContentError> {
    classify_link(href)
        .map(|_| ())
        .map_err(|source| ContentError::InvalidLink {
            label: label.to_string(),
            source,
        })
}
