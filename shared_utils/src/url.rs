//! Navigation path construction.
//!
//! Pages are addressed by a human-readable logical name ("Order History") and
//! turned into root-relative paths ("/order-history"). Non-primary tenants get
//! their business id as the first path segment.

use tracing::trace;

/// Logical name of the business profile page. Its path is fixed rather than
/// derived from the name.
pub const BUSINESS_PROFILE: &str = "BusinessProfile";

const BUSINESS_PROFILE_PATH: &str = "/businessprofile";

/// Returns the tenant-independent path of a page.
///
/// The name is lower-cased and every single space becomes a hyphen, so runs of
/// spaces are not collapsed. An empty name maps to `/`.
#[must_use]
pub fn base_path(page_name: &str) -> String {
    if page_name == BUSINESS_PROFILE {
        return BUSINESS_PROFILE_PATH.to_owned();
    }

    let mut path = String::with_capacity(page_name.len() + 1);
    path.push('/');
    path.extend(
        page_name
            .to_lowercase()
            .chars()
            .map(|c| if c == ' ' { '-' } else { c }),
    );
    path
}

/// Resolves a logical page name into the path the client-side router navigates to.
///
/// A primary tenant never carries a prefix, even when `business_id` is given.
/// Otherwise a non-empty `business_id` becomes the leading segment.
///
/// ```
/// use shared_utils::resolve_url;
///
/// assert_eq!(resolve_url("Order History", None, None), "/order-history");
/// assert_eq!(resolve_url("Settings", Some("biz1"), Some(false)), "/biz1/settings");
/// assert_eq!(resolve_url("Settings", Some("biz1"), Some(true)), "/settings");
/// ```
#[must_use]
pub fn resolve_url(page_name: &str, business_id: Option<&str>, is_primary: Option<bool>) -> String {
    let base = base_path(page_name);

    let resolved = match (is_primary, business_id) {
        (Some(true), _) => base,
        (_, Some(id)) if !id.is_empty() => format!("/{id}{base}"),
        _ => base,
    };

    trace!(page_name, ?business_id, ?is_primary, %resolved, "Resolved navigation path");
    resolved
}
