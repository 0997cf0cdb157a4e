//! Portfolio page - the whole site on one scrolling page.
//!
//! Anchors: `#work`, `#about`, `#contact`.

use dioxus::prelude::*;

use crate::components::{AboutSection, ContactSection, EnhanceOverlay, Hero, NavBar, WorkSection};
use crate::context::use_gate;

#[component]
pub fn Portfolio() -> Element {
    let editing = use_gate().read().is_editing();

    rsx! {
        div { class: if editing { "portfolio portfolio--editing" } else { "portfolio" },
            NavBar {}
            main {
                Hero {}
                WorkSection {}
                AboutSection {}
                ContactSection {}
            }
            EnhanceOverlay {}
        }
    }
}
