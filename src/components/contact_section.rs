//! Contact Section
//!
//! Large mailto link, contact fields while editing, and the footer line.

use chrono::Datelike;
use dioxus::prelude::*;
use showreel_core::Mutation;

use crate::context::{apply_mutation, use_document, use_editor, use_gate};

#[component]
pub fn ContactSection() -> Element {
    let document = use_document();
    let editor = use_editor();
    let editing = use_gate().read().is_editing();

    let doc = document();
    let email = doc.email_parts();
    let mailto = doc.mailto_href();
    let footer = doc.copyright_line(chrono::Local::now().year());

    rsx! {
        section { id: "contact", class: "contact",
            h2 { class: "section-kicker", "Iniziamo un progetto" }

            a { class: "contact__email", href: "{mailto}",
                "{email.local}"
                if let Some(domain) = email.domain.as_deref() {
                    span { class: "contact__at", "@" }
                    "{domain}"
                }
            }

            if editing {
                div { class: "contact__fields",
                    label { "Email"
                        input {
                            value: "{doc.email}",
                            oninput: move |e| apply_mutation(editor, Mutation::SetEmail(e.value())),
                        }
                    }
                    label { "Instagram"
                        input {
                            value: "{doc.linkedin}",
                            placeholder: "instagram.com/...",
                            oninput: move |e| {
                                apply_mutation(editor, Mutation::SetLinkedin(e.value()))
                            },
                        }
                    }
                    label { "Vimeo"
                        input {
                            value: "{doc.github}",
                            placeholder: "vimeo.com/...",
                            oninput: move |e| {
                                apply_mutation(editor, Mutation::SetGithub(e.value()))
                            },
                        }
                    }
                }
            }

            footer { class: "contact__footer",
                p { "{footer}" }
                p { "Basato a Milano / Available Worldwide" }
                p { "{doc.email}" }
            }
        }
    }
}
