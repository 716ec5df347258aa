//! Search Bar Component
//!
//! Debounced lead search with a clear button.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::components::icons::{Icon, IconSvg};
use crate::components::ui::{Button, ButtonVariant, Input};
use crate::config::AppConfig;
use crate::store::{use_leads_store, LeadsStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let store = use_leads_store();
    let search_query = store.state().search_query();

    let (input_value, set_input_value) = signal(String::new());
    // Pending debounce; replacing or dropping the Timeout cancels it
    let pending = StoredValue::new_local(None::<Timeout>);
    on_cleanup(move || {
        pending.try_update_value(|timer| timer.take());
    });

    // Keep the box in step with the store (e.g. after clear_filters)
    Effect::new(move |_| {
        set_input_value.set(search_query.get());
    });

    let debounce_ms = config.search_debounce_ms;
    let on_input = move |value: String| {
        set_input_value.set(value.clone());
        let timer = Timeout::new(debounce_ms, move || {
            log::debug!("Searching leads for {:?}", value);
            store.search_leads(value);
        });
        pending.set_value(Some(timer));
    };

    let on_clear = move |_: MouseEvent| {
        pending.set_value(None);
        set_input_value.set(String::new());
        store.clear_filters();
    };

    view! {
        <div class="flex items-center space-x-2 w-full max-w-md">
            <div class="relative flex-1">
                <Input
                    value=input_value
                    placeholder="Search leads..."
                    aria_label="Search leads by name, email, company"
                    class="pr-10 text-sm"
                    on_input=on_input
                />
                <div class="absolute inset-y-0 right-0 flex items-center pr-3 pointer-events-none">
                    <IconSvg icon=Icon::Search class="h-4 w-4 text-gray-400" />
                </div>
            </div>

            <Show when=move || !input_value.get().is_empty()>
                <Button variant=ButtonVariant::Outline class="px-3" title="Clear search" on_click=on_clear>
                    <IconSvg icon=Icon::Close class="h-4 w-4" />
                </Button>
            </Show>
        </div>
    }
}
