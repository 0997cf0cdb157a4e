//! About Section
//!
//! Portrait, bio (with AI rewrite while editing), services and social links.

use dioxus::prelude::*;
use showreel_core::{EnhanceOutcome, MediaKind, Mutation};

use crate::components::media_picker::pick_media;
use crate::context::{
    apply_mutation, use_document, use_editor, use_enhancing, use_gate, use_gateway, use_resolver,
};

const SERVICES: [&str; 4] = [
    "Direzione Creativa",
    "Produzione Video",
    "Cinematografia",
    "Color Grading",
];

#[component]
pub fn AboutSection() -> Element {
    let document = use_document();
    let editor = use_editor();
    let resolver = use_resolver();
    let gateway = use_gateway();
    let mut enhancing = use_enhancing();
    let editing = use_gate().read().is_editing();

    let doc = document();
    let portrait = doc.profile_image.as_ref().and_then(|m| resolver.source(m));
    let bio = doc.bio.clone();
    let instagram = doc.linkedin_href();
    let vimeo = doc.github_href();

    let on_change_image = move |_| {
        let resolver = resolver.clone();
        spawn(async move {
            if let Some(media) = pick_media(resolver.clone(), MediaKind::Image).await {
                let previous = document.peek().profile_image.clone();
                apply_mutation(editor, Mutation::SetProfileImage(Some(media.clone())));
                resolver.replace(previous.as_ref(), Some(&media));
            }
        });
    };

    let can_enhance = gateway.is_some();
    let on_enhance = move |_| {
        let Some(gateway) = gateway.clone() else {
            return;
        };
        if enhancing() {
            return;
        }
        enhancing.set(true);

        let doc = document();
        spawn(async move {
            match gateway.enhance(&doc.bio, &doc.role, &doc.name).await {
                EnhanceOutcome::Enhanced(bio) => apply_mutation(editor, Mutation::SetBio(bio)),
                EnhanceOutcome::Fallback(_) => tracing::info!("Bio left unchanged"),
                EnhanceOutcome::Busy => {}
            }
            enhancing.set(false);
        });
    };

    rsx! {
        section { id: "about", class: "about",
            div { class: "about__portrait",
                if let Some(src) = portrait {
                    img { class: "about__portrait-img", src: "{src}", alt: "Profile" }
                }
                if editing {
                    button {
                        class: "about__portrait-change",
                        onclick: on_change_image,
                        "Change Image"
                    }
                }
            }

            div { class: "about__body",
                div { class: "about__vision",
                    h2 { class: "section-kicker", "Vision" }
                    if editing {
                        textarea {
                            class: "about__bio-input",
                            value: "{bio}",
                            oninput: move |e| apply_mutation(editor, Mutation::SetBio(e.value())),
                        }
                        button {
                            class: "btn-solid",
                            onclick: on_enhance,
                            disabled: enhancing() || !can_enhance,
                            title: if can_enhance { "" } else { "GEMINI_API_KEY non configurata" },
                            if enhancing() { "Analisi IA..." } else { "Refina con AI" }
                        }
                    } else {
                        p { class: "about__bio", "{bio}" }
                    }
                }

                div { class: "about__meta",
                    div {
                        h4 { class: "about__meta-title", "Servizi" }
                        ul { class: "about__services",
                            for service in SERVICES {
                                li { "{service}" }
                            }
                        }
                    }
                    div {
                        h4 { class: "about__meta-title", "Connect" }
                        div { class: "about__links",
                            a { href: "{instagram}", "Instagram" }
                            a { href: "{vimeo}", "Vimeo" }
                        }
                    }
                }
            }
        }
    }
}
