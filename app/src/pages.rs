//! Catalog of the portal's logical pages.
//!
//! Route segments are fixed strings so they can be handed to the router as
//! `&'static str`; the tests pin them to what the URL resolver produces.

use crate::components::icons::AppIcon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    BusinessProfile,
    Settings,
    OrderHistory,
}

impl Page {
    /// Every page, in navigation order.
    pub const ALL: [Self; 4] = [
        Self::Dashboard,
        Self::BusinessProfile,
        Self::OrderHistory,
        Self::Settings,
    ];

    /// The logical name handed to the URL resolver.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::BusinessProfile => shared_utils::BUSINESS_PROFILE,
            Self::Settings => "Settings",
            Self::OrderHistory => "Order History",
        }
    }

    /// Human-facing title shown in the header.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::BusinessProfile => "Business Profile",
            other => other.name(),
        }
    }

    /// Route segment, equal to the resolved base path without its leading `/`.
    /// Kept in step with the resolver by `segments_match_resolver`.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::BusinessProfile => "businessprofile",
            Self::Settings => "settings",
            Self::OrderHistory => "order-history",
        }
    }

    #[must_use]
    pub const fn icon(self) -> AppIcon {
        match self {
            Self::Dashboard => AppIcon::Home,
            Self::BusinessProfile => AppIcon::Business,
            Self::Settings => AppIcon::Settings,
            Self::OrderHistory => AppIcon::Orders,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_utils::base_path;

    #[test]
    fn segments_match_resolver() {
        for page in Page::ALL {
            assert_eq!(format!("/{}", page.segment()), base_path(page.name()));
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = Page::ALL.iter().map(|page| page.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Page::ALL.len());
    }

    #[test]
    fn business_profile_title_differs_from_name() {
        assert_eq!(Page::BusinessProfile.name(), "BusinessProfile");
        assert_eq!(Page::BusinessProfile.title(), "Business Profile");
        assert_eq!(Page::OrderHistory.title(), "Order History");
    }
}
