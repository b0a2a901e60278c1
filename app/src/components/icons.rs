//! Inline SVG icons backed by `icondata` glyphs.

use icondata::Icon;
use leptos::prelude::*;

const DEFAULT_VIEW_BOX: &str = "0 0 24 24";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppIcon {
    Close,
    Back,
    Loading,
    Settings,
    Home,
    Business,
    Orders,
}

impl AppIcon {
    #[must_use]
    pub fn glyph(self) -> Icon {
        match self {
            Self::Close => icondata::AiCloseOutlined,
            Self::Back => icondata::AiArrowLeftOutlined,
            Self::Loading => icondata::AiLoadingOutlined,
            Self::Settings => icondata::AiSettingOutlined,
            Self::Home => icondata::AiHomeOutlined,
            Self::Business => icondata::AiShopOutlined,
            Self::Orders => icondata::AiShoppingCartOutlined,
        }
    }
}

/// Renders `icon` as an inline `<svg>` sized by `class`.
///
/// The glyph's own fill and stroke are kept; when it has no fill the icon
/// inherits the surrounding text colour.
pub fn component(icon: AppIcon, class: &'static str) -> impl IntoView {
    let glyph = icon.glyph();

    view! {
        <svg
            class=class
            style=glyph.style
            x=glyph.x
            y=glyph.y
            viewBox=glyph.view_box.unwrap_or(DEFAULT_VIEW_BOX)
            stroke-linecap=glyph.stroke_linecap
            stroke-linejoin=glyph.stroke_linejoin
            stroke-width=glyph.stroke_width
            stroke=glyph.stroke
            fill=glyph.fill.unwrap_or("currentColor")
            aria-hidden="true"
            inner_html=glyph.data
        ></svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [AppIcon; 7] = [
        AppIcon::Close,
        AppIcon::Back,
        AppIcon::Loading,
        AppIcon::Settings,
        AppIcon::Home,
        AppIcon::Business,
        AppIcon::Orders,
    ];

    #[test]
    fn every_icon_has_path_data() {
        for icon in ALL {
            assert!(!icon.glyph().data.is_empty(), "{icon:?} has no svg data");
        }
    }

    #[test]
    fn icons_are_distinct() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.glyph().data, b.glyph().data, "{a:?} and {b:?} share a glyph");
            }
        }
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn renders_inline_svg() {
        let html = component(AppIcon::Close, "size-5").to_html();
        assert!(html.contains("<svg"));
        assert!(html.contains(r#"class="size-5""#));
        assert!(html.contains(r#"aria-hidden="true""#));
    }
}
