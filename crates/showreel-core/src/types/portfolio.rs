//! Portfolio Document - the single root aggregate
//!
//! Everything the page shows lives in one `PortfolioDocument`, stored and
//! loaded as a unit. Display values (split name, split email, link targets)
//! are derived on every read and never stored.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::media::MediaRef;
use super::{ProjectId, VideoProject};

/// Shown in place of the surname when the name is a single word
pub const NAME_PLACEHOLDER: &str = "STUDIO";

const DEFAULT_PROFILE_IMAGE: &str = "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?q=80&w=1000&auto=format&fit=crop";

/// Editable portfolio content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDocument {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub email: String,
    /// Host + path, rendered behind `https://`
    pub linkedin: String,
    /// Host + path, rendered behind `https://`
    pub github: String,
    /// Display order = insertion order
    #[serde(default)]
    pub projects: Vec<VideoProject>,
    #[serde(default)]
    pub profile_image: Option<MediaRef>,
    #[serde(default)]
    pub logo_url: Option<MediaRef>,
}

impl Default for PortfolioDocument {
    fn default() -> Self {
        Self {
            name: "Alessandro Rossi".to_string(),
            role: "Filmmaker & Creative Director".to_string(),
            bio: "Sono un videomaker appassionato e creativo: racconto storie attraverso le immagini, trasmettendo emozioni autentiche. Il mio obiettivo è dare vita a contenuti che lascino il segno.".to_string(),
            email: "alessandro@redofilm.com".to_string(),
            linkedin: "instagram.com/alerossidirector".to_string(),
            github: "vimeo.com/alessandrorossi".to_string(),
            projects: Vec::new(),
            profile_image: Some(MediaRef::durable(DEFAULT_PROFILE_IMAGE)),
            logo_url: None,
        }
    }
}

/// Name split for the hero title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameDisplay {
    /// First word, upper-cased
    pub first: String,
    /// Remaining words, upper-cased; may be empty
    pub rest: String,
}

impl NameDisplay {
    /// Second line of the title, with the placeholder for single-word names
    pub fn rest_or_placeholder(&self) -> &str {
        if self.rest.is_empty() {
            NAME_PLACEHOLDER
        } else {
            &self.rest
        }
    }
}

/// Email split for independent styling of the two halves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailParts {
    pub local: String,
    /// `None` when the address has no `@`
    pub domain: Option<String>,
}

impl PortfolioDocument {
    pub fn display_name(&self) -> NameDisplay {
        let mut words = self.name.split_whitespace();
        let first = words.next().unwrap_or_default().to_uppercase();
        let rest = words.collect::<Vec<_>>().join(" ").to_uppercase();
        NameDisplay { first, rest }
    }

    pub fn email_parts(&self) -> EmailParts {
        match self.email.split_once('@') {
            Some((local, domain)) => EmailParts {
                local: local.to_string(),
                domain: Some(domain.to_string()),
            },
            None => EmailParts {
                local: self.email.clone(),
                domain: None,
            },
        }
    }

    pub fn linkedin_href(&self) -> String {
        format!("https://{}", self.linkedin)
    }

    pub fn github_href(&self) -> String {
        format!("https://{}", self.github)
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Footer line, e.g. `© 2026 Alessandro Rossi Studio`
    pub fn copyright_line(&self, year: i32) -> String {
        format!("© {} {} Studio", year, self.name)
    }

    /// Look up a project by id
    pub fn project(&self, id: &ProjectId) -> Option<&VideoProject> {
        self.projects.iter().find(|p| &p.id == id)
    }

    /// Ids carried by more than one project, each listed once
    pub fn duplicate_project_ids(&self) -> Vec<&ProjectId> {
        let mut seen = HashSet::new();
        let mut dupes: Vec<&ProjectId> = Vec::new();
        for project in &self.projects {
            if !seen.insert(&project.id) && !dupes.contains(&&project.id) {
                dupes.push(&project.id);
            }
        }
        dupes
    }

    /// Give every repeat of an id a fresh one, keeping the first holder.
    ///
    /// Returns how many projects were re-identified.
    pub fn dedupe_project_ids(&mut self) -> usize {
        let mut seen: HashSet<ProjectId> = HashSet::new();
        let mut changed = 0;
        for i in 0..self.projects.len() {
            if seen.contains(&self.projects[i].id) {
                let all_ids = self.projects.iter().map(|p| &p.id).chain(seen.iter());
                self.projects[i].id = ProjectId::unique_among(all_ids);
                changed += 1;
            }
            seen.insert(self.projects[i].id.clone());
        }
        changed
    }

    /// Every session-scoped media reference in the document
    pub fn transient_refs(&self) -> Vec<&MediaRef> {
        self.profile_image
            .iter()
            .chain(self.logo_url.iter())
            .chain(self.projects.iter().map(|p| &p.url))
            .filter(|m| m.is_transient())
            .collect()
    }

    /// Copy of the document with every transient reference removed.
    ///
    /// Optional images are cleared and projects whose video is transient are
    /// dropped.
    pub fn without_transient(&self) -> Self {
        let keep = |m: &Option<MediaRef>| m.clone().filter(|m| !m.is_transient());
        Self {
            profile_image: keep(&self.profile_image),
            logo_url: keep(&self.logo_url),
            projects: self
                .projects
                .iter()
                .filter(|p| !p.url.is_transient())
                .cloned()
                .collect(),
            ..self.clone()
        }
    }
}
