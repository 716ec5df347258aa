//! Input Component

use leptos::prelude::*;

use super::cn;

/// Text input with optional label and error message
#[component]
pub fn Input(
    #[prop(into, optional)] value: Signal<String>,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] label: Option<String>,
    #[prop(into, optional)] error: Option<String>,
    #[prop(into, optional)] aria_label: Option<String>,
    #[prop(into, optional)] class: String,
    /// Receives the new value on every keystroke
    #[prop(into, optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    let border = if error.is_some() {
        "border-red-300 focus:border-red-500 focus:ring-red-500"
    } else {
        "border-gray-300 focus:border-blue-500 focus:ring-blue-500"
    };
    let input_class = cn(&[
        "flex h-10 w-full rounded-md border px-3 py-2 text-sm",
        "placeholder:text-gray-400",
        "focus:outline-none focus:ring-2 focus:ring-offset-2",
        "disabled:cursor-not-allowed disabled:opacity-50",
        border,
        &class,
    ]);

    view! {
        <div class="w-full">
            {label.map(|label| view! {
                <label class="block text-sm font-medium text-gray-700 mb-1">{label}</label>
            })}
            <input
                type="text"
                class=input_class
                placeholder=placeholder
                aria-label=aria_label
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(on_input) = on_input {
                        on_input.run(event_target_value(&ev));
                    }
                }
            />
            {error.map(|error| view! {
                <p class="mt-1 text-sm text-red-600">{error}</p>
            })}
        </div>
    }
}
