//! Button Component

use leptos::prelude::*;
use web_sys::MouseEvent;

use super::cn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Secondary,
    Outline,
    Ghost,
    Danger,
}

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-blue-600 text-white hover:bg-blue-700 focus:ring-blue-500 shadow-sm",
            ButtonVariant::Secondary => "bg-gray-200 text-gray-900 hover:bg-gray-300 focus:ring-gray-500 shadow-sm",
            ButtonVariant::Outline => "border border-gray-300 bg-white text-gray-700 hover:bg-gray-50 focus:ring-blue-500",
            ButtonVariant::Ghost => "text-gray-700 hover:bg-gray-100 focus:ring-gray-500",
            ButtonVariant::Danger => "bg-red-600 text-white hover:bg-red-700 focus:ring-red-500 shadow-sm",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Default,
    Lg,
}

impl ButtonSize {
    fn classes(self) -> &'static str {
        match self {
            ButtonSize::Sm => "px-3 py-1.5 text-sm rounded-md",
            ButtonSize::Default => "px-4 py-2 text-sm rounded-md",
            ButtonSize::Lg => "px-6 py-3 text-base rounded-md",
        }
    }
}

const BASE: &str = "inline-flex items-center justify-center rounded-md font-medium transition-colors \
    focus:outline-none focus:ring-2 focus:ring-offset-2 \
    disabled:opacity-50 disabled:pointer-events-none";

pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    cn(&[BASE, variant.classes(), size.classes(), extra])
}

/// Button with variant and size styling
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] disabled: Signal<bool>,
    #[prop(into, optional)] title: Option<String>,
    #[prop(into, optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=button_class(variant, size, &class)
            title=title
            disabled=move || disabled.get()
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class_composition() {
        let class = button_class(ButtonVariant::Outline, ButtonSize::Sm, "bg-white");
        assert!(class.starts_with("inline-flex"));
        assert!(class.contains("border border-gray-300"));
        assert!(class.contains("px-3 py-1.5"));
        assert!(class.ends_with("bg-white"));
    }

    #[test]
    fn test_button_defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Default);
        assert_eq!(ButtonSize::default(), ButtonSize::Default);
        assert!(!button_class(ButtonVariant::Ghost, ButtonSize::Lg, "").ends_with(' '));
    }
}
