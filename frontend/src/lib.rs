//! WASM entry point of the business portal.
//!
//! The server renders every page; this crate hydrates that markup so the
//! header links, the business switcher and the modal respond in the browser.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates `app::component` over the server-rendered body.
///
/// Client-side logging goes to the browser console at debug level and panics
/// are reported there too.
pub fn hydrate() {
    use app::component;
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!("Hydrating business portal");
    leptos::mount::hydrate_body(component);
}

