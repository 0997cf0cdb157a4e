//! Typed mutations on the portfolio document
//!
//! One variant per field or entity operation, so the value type always
//! matches the field it targets. Applying a mutation never touches the input
//! document; it returns the next document value.

use crate::types::{MediaRef, PortfolioDocument, ProjectId, VideoProject};

/// A single edit to the portfolio
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    SetName(String),
    SetRole(String),
    SetBio(String),
    SetEmail(String),
    SetLinkedin(String),
    SetGithub(String),
    SetProfileImage(Option<MediaRef>),
    SetLogo(Option<MediaRef>),
    /// Append a project with a fresh id and the default caption
    AddProject { url: MediaRef },
    /// Drop the project with this id (no-op if absent)
    RemoveProject { id: ProjectId },
    /// Change one project's caption (no-op if absent)
    RenameProject { id: ProjectId, title: String },
}

impl Mutation {
    /// Short name for logging
    pub fn label(&self) -> &'static str {
        match self {
            Mutation::SetName(_) => "set_name",
            Mutation::SetRole(_) => "set_role",
            Mutation::SetBio(_) => "set_bio",
            Mutation::SetEmail(_) => "set_email",
            Mutation::SetLinkedin(_) => "set_linkedin",
            Mutation::SetGithub(_) => "set_github",
            Mutation::SetProfileImage(_) => "set_profile_image",
            Mutation::SetLogo(_) => "set_logo",
            Mutation::AddProject { .. } => "add_project",
            Mutation::RemoveProject { .. } => "remove_project",
            Mutation::RenameProject { .. } => "rename_project",
        }
    }
}

impl PortfolioDocument {
    /// Produce the document that results from `mutation`
    pub fn apply(&self, mutation: Mutation) -> PortfolioDocument {
        let mut next = self.clone();
        match mutation {
            Mutation::SetName(v) => next.name = v,
            Mutation::SetRole(v) => next.role = v,
            Mutation::SetBio(v) => next.bio = v,
            Mutation::SetEmail(v) => next.email = v,
            Mutation::SetLinkedin(v) => next.linkedin = v,
            Mutation::SetGithub(v) => next.github = v,
            Mutation::SetProfileImage(v) => next.profile_image = v,
            Mutation::SetLogo(v) => next.logo_url = v,
            Mutation::AddProject { url } => {
                let id = ProjectId::unique_among(self.projects.iter().map(|p| &p.id));
                next.projects.push(VideoProject::new(id, url));
            }
            Mutation::RemoveProject { id } => {
                next.projects.retain(|p| p.id != id);
            }
            Mutation::RenameProject { id, title } => {
                if let Some(project) = next.projects.iter_mut().find(|p| p.id == id) {
                    project.title = title;
                }
            }
        }
        next
    }
}
