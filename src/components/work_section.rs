//! Work Section
//!
//! Horizontal strip of video projects in insertion order.

use dioxus::prelude::*;

use crate::components::{AddProjectCard, ProjectCard};
use crate::context::{use_document, use_gate};

#[component]
pub fn WorkSection() -> Element {
    let document = use_document();
    let editing = use_gate().read().is_editing();

    let projects = document.read().projects.clone();
    let empty = projects.is_empty();

    rsx! {
        section { id: "work", class: "work",
            div { class: "section-heading",
                p { class: "section-kicker", "Filmmaking" }
                h2 { class: "section-title", "I miei lavori" }
            }

            div { class: "work__strip",
                for project in projects {
                    ProjectCard { key: "{project.id}", project: project.clone(), editing }
                }

                if editing {
                    AddProjectCard {}
                }
            }

            if empty && !editing {
                div { class: "work__empty", "Nessun video caricato" }
            }
        }
    }
}
