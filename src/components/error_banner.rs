//! Error Banner Component

use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::components::icons::{Icon, IconSvg};
use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::store::{use_leads_store, LeadsAction, LeadsStateStoreFields};

/// Shows the store's last error until dismissed
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_leads_store();
    let error = store.state().error();

    move || {
        error.get().map(|message| {
            view! {
                <div class="mb-6 bg-red-50 border border-red-200 rounded-md p-4" role="alert">
                    <div class="flex">
                        <div class="flex-shrink-0">
                            <IconSvg icon=Icon::Warning class="h-5 w-5 text-red-400" />
                        </div>
                        <div class="ml-3">
                            <h3 class="text-sm font-medium text-red-800">"Error"</h3>
                            <p class="text-sm text-red-700 mt-1">{message}</p>
                        </div>
                        <div class="ml-auto pl-3">
                            <Button
                                variant=ButtonVariant::Ghost
                                size=ButtonSize::Sm
                                class="text-red-800 hover:bg-red-100"
                                on_click=move |_: MouseEvent| store.dispatch(LeadsAction::ClearError)
                            >
                                "Dismiss"
                            </Button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
