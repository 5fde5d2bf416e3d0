//! Fallback Image
//!
//! `img` that swaps to a placeholder when its source fails to load.
//! A broken link is a visual degradation only, never an error.

use dioxus::prelude::*;

/// Shown in place of images that fail to load
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300?text=Cargando+Imagen";

/// Pick the URL to render: the fallback once `src` itself has failed.
///
/// Failure is remembered per source, so a new `src` gets a fresh attempt.
pub fn resolve_src<'a>(src: &'a str, failed: Option<&str>, fallback: &'a str) -> &'a str {
    if failed == Some(src) {
        fallback
    } else {
        src
    }
}

/// Image with a broken-link fallback
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     FallbackImage {
///         src: card.image.clone(),
///         alt: card.name.clone(),
///         class: "card-tile__img".to_string(),
///     }
/// }
/// ```
#[component]
pub fn FallbackImage(
    /// Image URL
    src: String,
    /// Alt text for accessibility
    alt: String,
    /// Optional CSS class
    #[props(default = None)]
    class: Option<String>,
) -> Element {
    let mut failed_src = use_signal(|| Option::<String>::None);

    let shown = resolve_src(&src, failed_src.read().as_deref(), PLACEHOLDER_IMAGE).to_string();
    let css_class = class.unwrap_or_else(|| "card-image".to_string());

    rsx! {
        img {
            class: "{css_class}",
            src: "{shown}",
            alt: "{alt}",
            onerror: move |_| {
                // A failing fallback would re-trigger this; only record once per source
                if failed_src.peek().as_deref() != Some(src.as_str()) {
                    tracing::debug!(src = %src, "Image failed to load, using placeholder");
                    failed_src.set(Some(src.clone()));
                }
            },
        }
    }
}
