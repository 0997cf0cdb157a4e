//! Full-screen indicator shown while the bio is being rewritten.

use dioxus::prelude::*;

use crate::context::use_enhancing;

#[component]
pub fn EnhanceOverlay() -> Element {
    let enhancing = use_enhancing();

    rsx! {
        if enhancing() {
            div { class: "enhance-overlay",
                div { class: "enhance-overlay__bar",
                    div { class: "enhance-overlay__shimmer" }
                }
                span { class: "enhance-overlay__label", "Evolvendo il tuo messaggio" }
            }
        }
    }
}
