//! Video Project Cards
//!
//! One card per project in the horizontal strip, plus the "add" card shown
//! while editing.

use dioxus::prelude::*;
use showreel_core::{MediaKind, MediaRef, Mutation, VideoProject};

use crate::components::media_picker::pick_media;
use crate::context::{apply_mutation, use_editor, use_resolver};

/// Looping muted preview with caption.
///
/// A session-only video from an earlier run has nothing to play; the card
/// shows a notice in its place.
#[component]
pub fn ProjectCard(project: VideoProject, #[props(default = false)] editing: bool) -> Element {
    let editor = use_editor();
    let resolver = use_resolver();

    let title = project.title.clone();

    let rename_id = project.id.clone();
    let on_rename = move |e: FormEvent| {
        apply_mutation(
            editor,
            Mutation::RenameProject {
                id: rename_id.clone(),
                title: e.value(),
            },
        );
    };

    let remove_id = project.id.clone();
    let remove_url = project.url.clone();
    let resolver_for_remove = resolver.clone();
    let on_remove = move |_| {
        apply_mutation(editor, Mutation::RemoveProject { id: remove_id.clone() });
        resolver_for_remove.release(&remove_url);
    };

    rsx! {
        div { class: "project-card",
            VideoFrame { media: project.url.clone() }

            div { class: "project-card__shade" }

            div { class: "project-card__caption",
                p { class: "project-card__label", "Project" }
                if editing {
                    input {
                        class: "project-card__title-input",
                        value: "{title}",
                        oninput: on_rename,
                    }
                } else {
                    h3 { class: "project-card__title", "{title}" }
                }
            }

            if editing {
                button { class: "project-card__remove", onclick: on_remove, "Rimuovi" }
            }
        }
    }
}

/// The video itself. Only re-renders when the reference changes, so title
/// edits do not rebuild the source.
#[component]
fn VideoFrame(media: MediaRef) -> Element {
    let resolver = use_resolver();

    match resolver.source(&media) {
        Some(src) => rsx! {
            video {
                class: "project-card__video",
                src: "{src}",
                autoplay: true,
                muted: true,
                r#loop: true,
                playsinline: true,
            }
        },
        None => rsx! {
            div { class: "project-card__missing", "Video non disponibile in questa sessione" }
        },
    }
}

/// Card that opens the video picker and appends the chosen file.
#[component]
pub fn AddProjectCard() -> Element {
    let editor = use_editor();
    let resolver = use_resolver();

    let on_add = move |_| {
        let resolver = resolver.clone();
        spawn(async move {
            if let Some(url) = pick_media(resolver, MediaKind::Video).await {
                apply_mutation(editor, Mutation::AddProject { url });
            }
        });
    };

    rsx! {
        div { class: "project-card project-card--add", onclick: on_add,
            div { class: "project-card__plus", "+" }
            span { class: "project-card__add-label", "Aggiungi Progetto" }
        }
    }
}
