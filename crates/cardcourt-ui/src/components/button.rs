//! Button Components
//!
//! Button styles used on the board:
//! - Primary: amber submit/edit actions
//! - Danger: destructive actions (delete)
//! - Pill: large rounded call to action ("Agregar Nueva Carta")

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Amber fill, dark text
    #[default]
    Primary,
    /// Red fill, white text
    Danger,
    /// White pill with orange border
    Pill,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Danger => "btn-danger",
            ButtonVariant::Pill => "btn-pill",
        }
    }
}

/// Join a base class with optional extra classes
fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Keep the click from reaching enclosing clickable elements
    #[props(default = false)]
    pub stop_propagation: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Danger,
///         stop_propagation: true,
///         onclick: move |_| on_delete.call(number),
///         "Borrar"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_class(props.variant.class(), props.class.as_deref());
    let stop = props.stop_propagation;

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            onclick: move |e| {
                if stop {
                    e.stop_propagation();
                }
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Tooltip and accessible label
    pub title: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_class("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            title: "{props.title}",
            "aria-label": "{props.title}",
            onclick: move |e| {
                e.stop_propagation();
                props.onclick.call(());
            },
            {props.children}
        }
    }
}

/// Close button with an X icon ("Cerrar")
#[component]
pub fn CloseButton(
    onclick: EventHandler<()>,
    /// Extra classes, e.g. to switch between the light and orange styles
    #[props(default)]
    class: Option<String>,
) -> Element {
    let full_class = join_class("close-btn", class.as_deref());

    rsx! {
        IconButton {
            onclick: onclick,
            title: "Cerrar".to_string(),
            class: full_class,
            CloseIcon {}
        }
    }
}

/// Stroke cross icon
#[component]
pub fn CloseIcon() -> Element {
    rsx! {
        svg {
            class: "icon",
            fill: "none",
            view_box: "0 0 24 24",
            stroke: "currentColor",
            stroke_width: "2",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                d: "M6 18L18 6M6 6l12 12",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Danger.class(), "btn-danger");
        assert_eq!(ButtonVariant::Pill.class(), "btn-pill");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn join_class_skips_empty_extra() {
        assert_eq!(join_class("icon-btn", None), "icon-btn");
        assert_eq!(join_class("icon-btn", Some("")), "icon-btn");
        assert_eq!(join_class("icon-btn", Some("close-btn")), "icon-btn close-btn");
    }
}
