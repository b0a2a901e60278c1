//! This module defines the `error_template` component, the page rendered when
//! routing fails.
//!
//! It includes an `AppError` enum for application-level errors and sets the
//! matching HTTP status code when rendered on the server.

use http::status::StatusCode;
use leptos::{
    html::{div, h1},
    prelude::*,
};
use leptos_router::components::{A, AProps};
use thiserror::Error;

use super::icons::{self, AppIcon};
use crate::pages::Page;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Extracts the `AppError`s from a Leptos error collection.
#[must_use]
pub fn app_errors(errors: &Errors) -> Vec<AppError> {
    errors
        .iter()
        .filter_map(|(_key, error)| error.downcast_ref::<AppError>().cloned())
        .collect()
}

/// Renders the error page for `outside_errors` (SSR) or `errors` (client).
///
/// On the server the response status is taken from the first `AppError`.
pub fn component(
    outside_errors: Option<Errors>,
    errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match (outside_errors, errors) {
        (Some(outside), _) => app_errors(&outside),
        (None, Some(signal)) => signal.with_untracked(app_errors),
        (None, None) => Vec::new(),
    };

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let (Some(response), Some(first)) = (use_context::<ResponseOptions>(), errors.first()) {
            response.set_status(first.status_code());
        }
    }

    let heading = if errors.len() > 1 { "Errors" } else { "Error" };

    div().class("grid place-content-center px-4 h-full antialiased").child((
        h1().class("mb-6 text-center").child(heading),
        errors
            .into_iter()
            .map(|error| {
                let error_code = error.status_code();
                div().class("flex flex-col gap-1 justify-center items-center").child((
                    h1().class("text-xl tracking-widest text-gray-400 uppercase")
                        .child(format!("{error_code}| {error}")),
                    div().class("flex gap-1 justify-center items-center mt-6 text-center duration-200 hover:text-[#68b5fc]").child(
                        A(AProps::builder()
                            .href(format!("/{}", Page::Dashboard.segment()))
                            .children(ToChildren::to_children(move || {
                                vec![
                                    icons::component(AppIcon::Back, "size-[1.1em]").into_any(),
                                    "Back to dashboard".into_any(),
                                ]
                            }))
                            .build()),
                    ),
                ))
            })
            .collect_view(),
    ))
}
