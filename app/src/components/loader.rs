//! This module defines the `loader` component, a centered loading indicator
//! with a short caption.
//!
//! Three spinner styles are available; pages pick whichever suits the space
//! they are filling.

use leptos::{
    html::{div, p, span},
    prelude::*,
};

use super::icons::{self, AppIcon};

/// Caption shown when the caller does not supply one.
pub const DEFAULT_MESSAGE: &str = "Loading...";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Spinner {
    /// A spinning ring drawn with borders.
    #[default]
    Ring,
    /// Three bouncing dots.
    Dots,
    /// The loading glyph from the icon set.
    Icon,
}

impl Spinner {
    /// Classes applied to the spinner element itself.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Ring => "rounded-full border-4 animate-spin size-8 border-white/20 border-t-[#ffef5c]",
            Self::Dots => "flex flex-row gap-1 items-center h-8",
            Self::Icon => "animate-spin size-8 text-[#ffef5c]",
        }
    }
}

fn dot(delay: &'static str) -> impl IntoView {
    span().class(format!("rounded-full animate-bounce size-2 bg-[#ffef5c] {delay}"))
}

/// Renders a loading indicator.
///
/// `message` replaces the default "Loading..." caption.
pub fn component(spinner: Spinner, message: Option<&'static str>) -> impl IntoView {
    let indicator = match spinner {
        Spinner::Ring => div().class(spinner.class()).into_any(),
        Spinner::Dots => div()
            .class(spinner.class())
            .child((
                dot("[animation-delay:-0.3s]"),
                dot("[animation-delay:-0.15s]"),
                dot(""),
            ))
            .into_any(),
        Spinner::Icon => icons::component(AppIcon::Loading, spinner.class()).into_any(),
    };

    div()
        .class("flex absolute inset-0 flex-col gap-1 justify-center items-center m-auto")
        .attr("role", "status")
        .child((
            indicator,
            p().class("text-sm italic text-muted-foreground")
                .child(message.unwrap_or(DEFAULT_MESSAGE)),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_is_default() {
        assert_eq!(Spinner::default(), Spinner::Ring);
    }

    #[test]
    fn animated_spinners_spin() {
        assert!(Spinner::Ring.class().contains("animate-spin"));
        assert!(Spinner::Icon.class().contains("animate-spin"));
        assert!(!Spinner::Dots.class().contains("animate-spin"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn default_caption_is_rendered() {
        let html = component(Spinner::Ring, None).to_html();
        assert!(html.contains(DEFAULT_MESSAGE));
        assert!(html.contains("animate-spin"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn dots_render_three_bouncing_spans() {
        let html = component(Spinner::Dots, Some("Fetching orders")).to_html();
        assert_eq!(html.matches("animate-bounce").count(), 3);
        assert!(html.contains("Fetching orders"));
        assert!(!html.contains(DEFAULT_MESSAGE));
    }
}
