use serde::{Deserialize, Serialize};

use crate::url::resolve_url;

/// The business a view is rendered for.
///
/// Bundles the optional resolver inputs so they can travel through component
/// context as one value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenantContext {
    pub business_id: Option<String>,
    pub is_primary: bool,
}

impl TenantContext {
    #[must_use]
    pub fn new(business_id: Option<String>, is_primary: bool) -> Self {
        Self {
            business_id,
            is_primary,
        }
    }

    /// The acting user's default business. Its pages are never prefixed.
    #[must_use]
    pub fn primary() -> Self {
        Self::new(None, true)
    }

    #[must_use]
    pub fn for_business(business_id: impl Into<String>) -> Self {
        Self::new(Some(business_id.into()), false)
    }

    /// Path of `page_name` within this tenant.
    #[must_use]
    pub fn resolve(&self, page_name: &str) -> String {
        resolve_url(page_name, self.business_id.as_deref(), Some(self.is_primary))
    }

    /// The leading path segment `resolve` adds, if any.
    #[must_use]
    pub fn path_prefix(&self) -> Option<&str> {
        if self.is_primary {
            return None;
        }
        self.business_id.as_deref().filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_prefix() {
        let tenant = TenantContext::default();
        assert!(!tenant.is_primary);
        assert_eq!(tenant.path_prefix(), None);
        assert_eq!(tenant.resolve("Settings"), "/settings");
    }

    #[test]
    fn primary_ignores_business_id() {
        let tenant = TenantContext::new(Some("biz1".to_owned()), true);
        assert_eq!(tenant.path_prefix(), None);
        assert_eq!(tenant.resolve("Order History"), "/order-history");
    }

    #[test]
    fn business_tenant_prefixes_paths() {
        let tenant = TenantContext::for_business("biz1");
        assert_eq!(tenant.path_prefix(), Some("biz1"));
        assert_eq!(tenant.resolve("BusinessProfile"), "/biz1/businessprofile");
    }

    #[test]
    fn prefix_agrees_with_resolve() {
        for tenant in [
            TenantContext::primary(),
            TenantContext::default(),
            TenantContext::for_business(""),
            TenantContext::for_business("acme"),
        ] {
            let resolved = tenant.resolve("Settings");
            match tenant.path_prefix() {
                Some(prefix) => assert_eq!(resolved, format!("/{prefix}/settings")),
                None => assert_eq!(resolved, "/settings"),
            }
        }
    }

    #[test]
    fn serializes_as_plain_object() {
        let tenant = TenantContext::for_business("acme");
        let json = serde_json::to_value(&tenant).unwrap();
        assert_eq!(json, serde_json::json!({ "business_id": "acme", "is_primary": false }));

        let back: TenantContext = serde_json::from_value(json).unwrap();
        assert_eq!(back, tenant);
    }
}
