//! Hero Section
//!
//! Full-height opening block: split name title and role line.

use dioxus::prelude::*;
use showreel_core::Mutation;

use crate::context::{apply_mutation, use_document, use_editor, use_gate};

#[component]
pub fn Hero() -> Element {
    let document = use_document();
    let editor = use_editor();
    let editing = use_gate().read().is_editing();

    let doc = document();
    let title = doc.display_name();
    let name = doc.name.clone();
    let role = doc.role.clone();

    rsx! {
        section { class: "hero",
            div { class: "hero__kicker",
                span { "Visual Storytelling" }
                div { class: "hero__rule" }
            }

            h1 { class: "hero__title",
                if editing {
                    input {
                        class: "hero__name-input",
                        value: "{name}",
                        placeholder: "NOME COGNOME",
                        oninput: move |e| apply_mutation(editor, Mutation::SetName(e.value())),
                    }
                } else {
                    span { "{title.first}" }
                    br {}
                    span { class: "hero__title-rest", "{title.rest_or_placeholder()}" }
                }
            }

            div { class: "hero__footer",
                div { class: "hero__role",
                    if editing {
                        input {
                            class: "hero__role-input",
                            value: "{role}",
                            oninput: move |e| apply_mutation(editor, Mutation::SetRole(e.value())),
                        }
                    } else {
                        "{role}"
                    }
                }
                a { class: "hero__explore", href: "#work", "Esplora Lavori →" }
            }
        }
    }
}
