//! Card Court UI Components
//!
//! Domain-agnostic Dioxus widgets for the card board: buttons, labelled
//! form fields and images that survive broken links.
//!
//! ## Look
//!
//! Warm court palette, styled by the application's global stylesheet:
//! - **Amber (#FFB300)**: primary actions, borders
//! - **Orange (#FF7E00)**: labels, accents, close buttons
//! - **Cream (#FFF8E1)**: card faces
//! - **Coffee (#3E2723)**: headings and body text

pub mod components;

pub use components::*;
