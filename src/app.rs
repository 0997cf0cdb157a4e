use std::sync::Arc;

use dioxus::prelude::*;
use parking_lot::RwLock;
use showreel_core::{AdminGate, EnhancementGateway, MediaResolver, PortfolioDocument};

use crate::context::{get_data_dir, get_editor_config, SharedEditor};
use crate::pages::Portfolio;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, editor context and the portfolio page.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_editor_config);

    let editor: Signal<SharedEditor> = use_signal(|| Arc::new(RwLock::new(None)));
    let mut document: Signal<PortfolioDocument> = use_signal(PortfolioDocument::default);
    let gate: Signal<AdminGate> = use_signal(|| AdminGate::new(config.gate));
    let enhancing: Signal<bool> = use_signal(|| false);

    use_context_provider(|| editor);
    use_context_provider(|| document);
    use_context_provider(|| gate);
    use_context_provider(|| enhancing);
    use_context_provider(MediaResolver::new);
    use_context_provider(|| EnhancementGateway::gemini(&config.enhancement));

    // Open the store, then follow every document the editor publishes
    use_effect(move || {
        let config = get_editor_config();
        spawn(async move {
            let data_dir = get_data_dir();
            let mut updates = match showreel_core::open_editor(&data_dir, &config) {
                Ok(ed) => {
                    let updates = ed.subscribe();
                    document.set(ed.document());

                    let shared = editor();
                    *shared.write() = Some(ed);
                    tracing::info!("Portfolio editor ready");
                    updates
                }
                Err(e) => {
                    tracing::error!("Failed to open portfolio store: {}", e);
                    return;
                }
            };

            while updates.changed().await.is_ok() {
                let next = updates.borrow_and_update().clone();
                document.set(next);
            }
        });
    });

    // Write out anything a debounced store is still holding
    let shared_on_exit = use_hook(|| editor.peek().clone());
    use_drop(move || {
        if let Some(ed) = shared_on_exit.read().as_ref() {
            if let Err(e) = ed.flush() {
                tracing::error!("Failed to flush portfolio on exit: {}", e);
            }
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Portfolio {}
    }
}
