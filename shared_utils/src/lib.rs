//! Framework-independent helpers shared by the portal crates.
//!
//! Nothing in here depends on Leptos, so the same code runs in the SSR server,
//! in the hydrated WASM bundle and in plain unit tests.

pub mod tenant;
pub mod url;

pub use tenant::TenantContext;
pub use url::{BUSINESS_PROFILE, base_path, resolve_url};
