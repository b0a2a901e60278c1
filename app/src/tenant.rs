//! Derives the tenant a view belongs to from the current route.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use shared_utils::TenantContext;
use thiserror::Error;
use tracing::{debug, warn};

/// Name of the leading route parameter carrying the business id.
pub const BUSINESS_PARAM: &str = "business_id";

/// Characters that would end the id's path segment or start a query/fragment.
const RESERVED: [char; 3] = ['/', '?', '#'];

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BusinessIdError {
    #[error("business id may not contain whitespace")]
    Whitespace,
    #[error("business id may not contain '{0}'")]
    Reserved(char),
}

/// Checks that `business_id` fits in a single path segment.
///
/// The empty id is valid and stands for the primary business.
pub fn validate_business_id(business_id: &str) -> Result<&str, BusinessIdError> {
    if let Some(reserved) = business_id.chars().find(|c| RESERVED.contains(c)) {
        return Err(BusinessIdError::Reserved(reserved));
    }
    if business_id.chars().any(char::is_whitespace) {
        return Err(BusinessIdError::Whitespace);
    }
    Ok(business_id)
}

/// Maps the raw `business_id` route parameter to a tenant.
///
/// Routes without the parameter, with an empty one or with one that is not a
/// valid id belong to the primary business.
#[must_use]
pub fn from_param(business_id: Option<String>) -> TenantContext {
    match business_id.filter(|id| !id.is_empty()) {
        Some(id) => match validate_business_id(&id) {
            Ok(_) => TenantContext::for_business(id),
            Err(error) => {
                warn!(%error, business_id = %id, "Ignoring invalid business id in route");
                TenantContext::primary()
            }
        },
        None => TenantContext::primary(),
    }
}

/// Reactive tenant of the enclosing route. Must be called under a `Route`.
pub fn use_tenant() -> Memo<TenantContext> {
    let params = use_params_map();
    Memo::new(move |_| {
        let tenant = from_param(params.with(|params| params.get(BUSINESS_PARAM)));
        debug!(?tenant, "Tenant context for route");
        tenant
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_param_is_primary() {
        assert_eq!(from_param(None), TenantContext::primary());
    }

    #[test]
    fn empty_param_is_primary() {
        assert_eq!(from_param(Some(String::new())), TenantContext::primary());
    }

    #[test]
    fn param_selects_business() {
        let tenant = from_param(Some("biz1".to_owned()));
        assert_eq!(tenant, TenantContext::for_business("biz1"));
        assert_eq!(tenant.resolve("Settings"), "/biz1/settings");
    }

    #[test]
    fn reserved_characters_are_rejected() {
        assert_eq!(validate_business_id("acme/east"), Err(BusinessIdError::Reserved('/')));
        assert_eq!(validate_business_id("acme?x=1"), Err(BusinessIdError::Reserved('?')));
        assert_eq!(validate_business_id("acme#y"), Err(BusinessIdError::Reserved('#')));
        assert_eq!(validate_business_id("acme?x=1#y"), Err(BusinessIdError::Reserved('?')));
    }

    #[test]
    fn whitespace_is_rejected() {
        assert_eq!(validate_business_id("acme east"), Err(BusinessIdError::Whitespace));
        assert_eq!(validate_business_id("acme\t"), Err(BusinessIdError::Whitespace));
    }

    #[test]
    fn plain_ids_and_empty_are_valid() {
        assert_eq!(validate_business_id("acme-east_01"), Ok("acme-east_01"));
        assert_eq!(validate_business_id(""), Ok(""));
    }

    #[test]
    fn invalid_param_falls_back_to_primary() {
        assert_eq!(from_param(Some("acme east".to_owned())), TenantContext::primary());
        assert_eq!(from_param(Some("a?b".to_owned())), TenantContext::primary());
    }
}
