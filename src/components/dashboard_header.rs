//! Dashboard Header Component

use leptos::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::components::sidebar::USER_NAME;

#[component]
pub fn DashboardHeader() -> impl IntoView {
    view! {
        <header class="bg-white shadow-sm border-b">
            <div class="px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16 py-2 lg:py-0">
                    <div class="flex items-center">
                        <div class="h-8 w-8 bg-purple-600 rounded-full flex items-center justify-center mr-3">
                            <span class="text-sm font-medium text-white">"SW"</span>
                        </div>
                        <div>
                            <p class="text-sm font-medium text-gray-900">{USER_NAME}</p>
                            <p class="text-xs text-gray-500 hidden sm:block">"Welcome back to Alignui"</p>
                        </div>
                    </div>

                    <div class="flex items-center space-x-2 sm:space-x-4">
                        <button
                            class="p-1 rounded-full text-gray-400 hover:text-gray-500"
                            aria-label="Notifications"
                            on:click=|_| log::info!("Notifications clicked")
                        >
                            <IconSvg icon=Icon::Bell class="h-5 w-5" />
                        </button>
                        <button
                            class="p-1 rounded-full text-gray-400 hover:text-gray-500"
                            aria-label="Settings"
                            on:click=|_| log::info!("Settings clicked")
                        >
                            <IconSvg icon=Icon::Settings class="h-5 w-5" />
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}
