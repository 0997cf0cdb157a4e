//! Navigation Bar Component
//!
//! Logo, section anchors and the edit-mode toggle. The logo doubles as the
//! hidden admin trigger.

use std::time::Instant;

use dioxus::prelude::*;
use showreel_core::{GestureOutcome, MediaKind, Mutation};

use crate::components::media_picker::pick_media;
use crate::context::{apply_mutation, use_document, use_editor, use_gate, use_resolver};

/// Navigation Bar
///
/// - Left: logo (click five times quickly to unlock editing)
/// - Right: `#work` / `#about` / `#contact` anchors, edit toggle when unlocked
///
/// While editing, clicking the logo opens the image picker instead of counting
/// toward the gesture.
#[component]
pub fn NavBar() -> Element {
    let document = use_document();
    let editor = use_editor();
    let mut gate = use_gate();
    let resolver = use_resolver();

    let logo_src = {
        let doc = document.read();
        doc.logo_url.as_ref().and_then(|logo| resolver.source(logo))
    };
    let unlocked = !gate.read().is_locked();
    let editing = gate.read().is_editing();

    let resolver_for_logo = resolver.clone();
    let on_logo = move |_| {
        if gate.read().is_editing() {
            let resolver = resolver_for_logo.clone();
            spawn(async move {
                if let Some(media) = pick_media(resolver.clone(), MediaKind::Image).await {
                    let previous = document.peek().logo_url.clone();
                    apply_mutation(editor, Mutation::SetLogo(Some(media.clone())));
                    resolver.replace(previous.as_ref(), Some(&media));
                }
            });
            return;
        }

        if let GestureOutcome::Counting { count } = gate.write().activate(Instant::now()) {
            tracing::trace!(count, "Admin gesture");
        }
    };

    let on_toggle_edit = move |_| {
        if let Err(e) = gate.write().toggle_editing() {
            tracing::warn!("Edit toggle ignored: {}", e);
        }
    };

    rsx! {
        nav { class: "nav-bar",
            div {
                class: "nav-logo",
                onclick: on_logo,
                if let Some(src) = logo_src {
                    img { class: "nav-logo__img", src: "{src}", alt: "Logo" }
                } else {
                    div { class: "nav-logo__ring" }
                }
            }

            div { class: "nav-right",
                div { class: "nav-links",
                    a { href: "#work", "Video" }
                    a { href: "#about", "About" }
                    a { href: "#contact", "Contact" }
                }

                if unlocked {
                    button {
                        class: "btn-pill",
                        onclick: on_toggle_edit,
                        if editing { "Esci da Modifica" } else { "Admin Mode" }
                    }
                }
            }
        }
    }
}
