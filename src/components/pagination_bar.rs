//! Pagination Bar Component
//!
//! Result range, Previous/Next and the truncated page list under the table.

use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::pagination::{page_numbers, PageItem};
use crate::store::{use_leads_store, LeadsStateStoreFields};

/// Hidden while everything fits on one page
#[component]
pub fn PaginationBar() -> impl IntoView {
    let store = use_leads_store();
    let pagination = store.state().pagination();

    let summary = move || {
        pagination.with(|p| {
            let (start, end) = p.display_range();
            format!("Showing {} to {} of {} results", start, end, p.total_items)
        })
    };
    let current_page = move || pagination.with_untracked(|p| p.current_page);

    view! {
        <Show when=move || pagination.with(|p| p.total_pages() > 1)>
            <div class="flex flex-col sm:flex-row items-center justify-between gap-4 bg-gray-50 p-4 rounded-lg shadow-sm border border-gray-200">
                <div class="text-sm text-gray-700 w-full sm:w-auto text-center sm:text-left font-medium">
                    {summary}
                </div>

                <div class="flex items-center space-x-2">
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        class="bg-white"
                        disabled=Signal::derive(move || !pagination.with(|p| p.has_previous()))
                        on_click=move |_: MouseEvent| store.set_page(current_page().saturating_sub(1))
                    >
                        "Previous"
                    </Button>

                    <div class="flex items-center space-x-1">
                        {move || {
                            let (total, current) = pagination.with(|p| (p.total_pages(), p.current_page));
                            page_numbers(total, current)
                                .into_iter()
                                .map(|item| match item {
                                    PageItem::Ellipsis => view! {
                                        <span class="px-2 text-gray-500">"..."</span>
                                    }
                                    .into_any(),
                                    PageItem::Page(page) => {
                                        let variant = if page == current {
                                            ButtonVariant::Default
                                        } else {
                                            ButtonVariant::Outline
                                        };
                                        view! {
                                            <Button
                                                variant=variant
                                                size=ButtonSize::Sm
                                                class="w-8 h-8 p-0"
                                                on_click=move |_: MouseEvent| store.set_page(page)
                                            >
                                                {page}
                                            </Button>
                                        }
                                        .into_any()
                                    }
                                })
                                .collect_view()
                        }}
                    </div>

                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        class="bg-white"
                        disabled=Signal::derive(move || !pagination.with(|p| p.has_next()))
                        on_click=move |_: MouseEvent| store.set_page(current_page() + 1)
                    >
                        "Next"
                    </Button>
                </div>
            </div>
        </Show>
    }
}
