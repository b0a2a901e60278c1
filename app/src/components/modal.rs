//! This module defines the `modal` component, a dialog frame rendered over a
//! dimmed backdrop.
//!
//! Visibility is owned by the caller through an `RwSignal<bool>`. The modal
//! only ever closes itself (backdrop click or the close button); opening is
//! always the caller's job.

use leptos::prelude::*;
use tracing::debug;

use super::icons::{self, AppIcon};

/// Closes the modal bound to `open`. A no-op when it is already closed.
pub fn dismiss(open: RwSignal<bool>) {
    if open.get_untracked() {
        debug!("Dismissing modal");
        open.set(false);
    }
}

/// Renders `body` inside a dialog while `open` is true.
///
/// Clicks inside the dialog are stopped before they reach the backdrop, so
/// only clicks on the backdrop itself dismiss it.
pub fn component<B, V>(open: RwSignal<bool>, title: impl Into<String>, body: B) -> impl IntoView
where
    B: Fn() -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let title = title.into();

    view! {
        <Show when=move || open.get()>
            <div
                class="flex fixed inset-0 z-20 justify-center items-center px-4 bg-black/60 backdrop-blur-sm"
                on:click=move |_| dismiss(open)
            >
                <div
                    role="dialog"
                    aria-modal="true"
                    class="p-6 w-full max-w-lg text-white rounded-lg shadow-xl bg-[#2a2a2a]"
                    on:click=|ev| ev.stop_propagation()
                >
                    <div class="flex flex-row justify-between items-center mb-4">
                        <h2 class="text-2xl font-bold text-[#ffef5c]">{title.clone()}</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="transition-all duration-500 hover:text-[#ffef5c]"
                            on:click=move |_| dismiss(open)
                        >
                            {icons::component(AppIcon::Close, "size-6")}
                        </button>
                    </div>
                    {body()}
                </div>
            </div>
        </Show>
    }
}
