//! Table Components

use leptos::prelude::*;
use web_sys::MouseEvent;

use super::cn;

/// Scrollable bordered table
#[component]
pub fn Table(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let class = cn(&["w-full caption-bottom text-sm border-collapse", &class]);
    view! {
        <div class="relative w-full overflow-auto rounded-lg border border-gray-200 shadow-sm">
            <div class="inline-block min-w-full align-middle">
                <table class=class>{children()}</table>
            </div>
        </div>
    }
}

#[component]
pub fn TableHeader(children: Children) -> impl IntoView {
    view! { <thead class="[&_tr]:border-b bg-gray-50">{children()}</thead> }
}

#[component]
pub fn TableBody(children: Children) -> impl IntoView {
    view! { <tbody class="[&_tr:last-child]:border-0">{children()}</tbody> }
}

/// Row; `class` is reactive so callers can reflect row state
#[component]
pub fn TableRow(
    #[prop(into, optional)] class: Signal<String>,
    #[prop(into, optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let row_class = move || {
        cn(&[
            "border-b transition-colors hover:bg-blue-50/50",
            &class.get(),
        ])
    };
    view! {
        <tr
            class=row_class
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.run(ev);
                }
            }
        >
            {children()}
        </tr>
    }
}

#[component]
pub fn TableHead(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let class = cn(&[
        "h-12 px-4 text-left align-middle font-semibold text-gray-700 whitespace-nowrap",
        &class,
    ]);
    view! { <th class=class>{children()}</th> }
}

#[component]
pub fn TableCell(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let class = cn(&["p-4 align-middle border-gray-100", &class]);
    view! { <td class=class>{children()}</td> }
}
