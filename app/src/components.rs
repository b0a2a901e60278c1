//! Reusable UI components shared by every page.
//!
//! Each sub-module defines one element: the page header, the modal dialog
//! wrapper, the icon set, the loading spinners and the error page.

pub mod error_template;
pub mod header;
pub mod icons;
pub mod loader;
pub mod modal;
