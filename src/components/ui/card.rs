//! Card Components
//!
//! Bordered content container with header, title and body slots.

use leptos::prelude::*;

use super::cn;

#[component]
pub fn Card(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let class = cn(&["rounded-lg border border-gray-200 bg-white shadow-sm", &class]);
    view! { <div class=class>{children()}</div> }
}

#[component]
pub fn CardHeader(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let class = cn(&["flex flex-col space-y-1.5 p-6", &class]);
    view! { <div class=class>{children()}</div> }
}

#[component]
pub fn CardTitle(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let class = cn(&["text-lg font-semibold leading-none tracking-tight", &class]);
    view! { <h3 class=class>{children()}</h3> }
}

#[component]
pub fn CardDescription(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let class = cn(&["text-sm text-gray-600", &class]);
    view! { <p class=class>{children()}</p> }
}

#[component]
pub fn CardContent(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let class = cn(&["p-6 pt-0", &class]);
    view! { <div class=class>{children()}</div> }
}
