//! Leads Table Component
//!
//! Current page of leads with row selection, plus the selection summary and
//! pagination bar.

use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::components::icons::{Icon, IconSvg};
use crate::components::ui::{
    cn, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Table, TableBody, TableCell,
    TableHead, TableHeader, TableRow,
};
use crate::components::PaginationBar;
use crate::format::{format_date, selection_label};
use crate::models::Lead;
use crate::store::{use_leads_store, LeadsAction, LeadsStateStoreFields};

/// Tags shown inline before collapsing into "+N"
const VISIBLE_TAGS: usize = 2;

#[component]
pub fn LeadsTable() -> impl IntoView {
    let store = use_leads_store();
    let state = store.state();

    let page_leads = Memo::new(move |_| state.with(|s| s.paginated_leads().to_vec()));
    let page_empty = Memo::new(move |_| page_leads.with(|leads| leads.is_empty()));
    let loading = state.loading();

    move || {
        if loading.get() {
            view! { <LoadingState /> }.into_any()
        } else if page_empty.get() {
            view! { <EmptyState /> }.into_any()
        } else {
            view! {
                <div class="space-y-4">
                    <div class="overflow-x-auto">
                        <Table class="min-w-full">
                            <TableHeader>
                                <TableRow>
                                    <TableHead class="w-[40px] pr-0">
                                        <div class="flex items-center justify-center">
                                            <input
                                                type="checkbox"
                                                class="h-4 w-4 rounded border-gray-300 text-blue-600 focus:ring-blue-500"
                                                prop:checked=move || state.with(|s| s.all_page_selected())
                                                on:change=move |ev| {
                                                    store.dispatch(LeadsAction::TogglePage(event_target_checked(&ev)))
                                                }
                                            />
                                        </div>
                                    </TableHead>
                                    <TableHead class="min-w-[200px]">"Lead"</TableHead>
                                    <TableHead class="min-w-[120px]">"Status"</TableHead>
                                    <TableHead class="min-w-[150px]">"Tags"</TableHead>
                                    <TableHead class="min-w-[200px]">"Connected with"</TableHead>
                                    <TableHead class="min-w-[120px]">"Date"</TableHead>
                                    <TableHead class="min-w-[100px]">"Export"</TableHead>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || page_leads.get()
                                    key=|lead| lead.id
                                    children=move |lead| view! { <LeadRow lead=lead /> }
                                />
                            </TableBody>
                        </Table>
                    </div>

                    <SelectionBar />
                    <PaginationBar />
                </div>
            }
            .into_any()
        }
    }
}

/// Tags rendered inline, and how many are folded into "+N"
fn tag_preview(tags: &[String]) -> (Vec<String>, usize) {
    let shown = tags.iter().take(VISIBLE_TAGS).cloned().collect();
    (shown, tags.len().saturating_sub(VISIBLE_TAGS))
}

#[component]
fn LeadRow(lead: Lead) -> impl IntoView {
    let store = use_leads_store();
    let selected_lead = store.state().selected_lead();
    let id = lead.id;

    let row_class = Signal::derive(move || {
        let active = selected_lead.with(|sel| sel.as_ref().map(|l| l.id) == Some(id));
        cn(&["cursor-pointer hover:bg-gray-50", if active { "bg-blue-50/30" } else { "" }])
    });
    let clicked = lead.clone();
    let on_row_click = move |_: MouseEvent| {
        store.dispatch(LeadsAction::SelectLead(Some(clicked.clone())));
    };
    let on_export = move |ev: MouseEvent| {
        ev.stop_propagation();
        log::info!("Export lead: {}", id);
    };

    let (shown_tags, hidden_tags) = tag_preview(&lead.tags);
    let tags = shown_tags
        .into_iter()
        .map(|tag| {
            view! {
                <Badge variant=BadgeVariant::Outline class="text-xs bg-gray-50 whitespace-nowrap">
                    {tag}
                </Badge>
            }
        })
        .collect_view();
    let status = lead.status;
    let initial = lead.initial();
    let created = format_date(&lead.created_at);
    let Lead { name, email, .. } = lead;
    let (contact_name, contact_email) = (name.clone(), email.clone());

    view! {
        <TableRow class=row_class on_click=on_row_click>
            <TableCell class="pr-0">
                <div class="flex items-center justify-center">
                    <input
                        type="checkbox"
                        class="h-4 w-4 rounded border-gray-300 text-blue-600 focus:ring-blue-500"
                        prop:checked=move || store.is_lead_selected(id)
                        on:click=|ev| ev.stop_propagation()
                        on:change=move |_| store.dispatch(LeadsAction::ToggleLead(id))
                    />
                </div>
            </TableCell>
            <TableCell>
                <div>
                    <div class="font-medium text-gray-900 whitespace-nowrap">{name}</div>
                    <div class="text-sm text-gray-500 whitespace-nowrap">{email}</div>
                </div>
            </TableCell>
            <TableCell>
                <Badge variant=BadgeVariant::for_status(status) class="whitespace-nowrap">
                    {status.label()}
                </Badge>
            </TableCell>
            <TableCell>
                <div class="flex flex-wrap gap-1.5">
                    {tags}
                    {(hidden_tags > 0).then(|| view! {
                        <Badge variant=BadgeVariant::Outline class="text-xs bg-blue-50 text-blue-700 whitespace-nowrap">
                            {format!("+{}", hidden_tags)}
                        </Badge>
                    })}
                </div>
            </TableCell>
            <TableCell>
                <div class="flex items-center">
                    <div class="w-8 h-8 bg-gray-300 rounded-full flex items-center justify-center mr-2 flex-shrink-0">
                        <span class="text-xs font-medium text-gray-600">{initial}</span>
                    </div>
                    <div class="min-w-0">
                        <div class="font-medium text-gray-900 whitespace-nowrap">{contact_name}</div>
                        <div class="text-sm text-gray-500 whitespace-nowrap">{contact_email}</div>
                    </div>
                </div>
            </TableCell>
            <TableCell>
                <span class="text-sm text-gray-600 whitespace-nowrap">{created}</span>
            </TableCell>
            <TableCell>
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Sm
                    class="text-blue-600 hover:text-blue-700 hover:bg-blue-50 whitespace-nowrap flex items-center"
                    on_click=on_export
                >
                    <IconSvg icon=Icon::Download class="h-4 w-4 mr-1" />
                    "Export"
                </Button>
            </TableCell>
        </TableRow>
    }
}

#[component]
fn SelectionBar() -> impl IntoView {
    let store = use_leads_store();
    let selected_ids = store.state().selected_ids();
    let count = move || selected_ids.with(|ids| ids.len());

    view! {
        <Show when=move || { count() > 0 }>
            <div class="bg-blue-50 p-3 rounded-lg mb-2 flex items-center justify-between border border-blue-200 shadow-sm">
                <div class="flex items-center">
                    <IconSvg icon=Icon::ClipboardList class="h-5 w-5 text-blue-600 mr-2" />
                    <span class="text-sm text-blue-700 font-medium">{move || selection_label(count())}</span>
                </div>
                <Button
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Sm
                    class="text-xs bg-white hover:bg-red-50 text-red-600 hover:text-red-700 border-red-200"
                    on_click=move |_: MouseEvent| store.dispatch(LeadsAction::ClearSelection)
                >
                    "Clear selection"
                </Button>
            </div>
        </Show>
    }
}

#[component]
fn LoadingState() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center h-64 bg-white rounded-lg border border-gray-200 shadow-sm p-6">
            <div class="animate-spin rounded-full h-10 w-10 border-b-2 border-blue-600 mb-3"></div>
            <span class="text-gray-700 font-medium">"Loading leads..."</span>
            <span class="text-sm text-gray-500 mt-1">"Please wait while we fetch your data"</span>
        </div>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="text-center py-12 bg-white rounded-lg border border-gray-200 shadow-sm p-8">
            <IconSvg icon=Icon::Document class="mx-auto h-16 w-16 text-gray-400" />
            <h3 class="mt-4 text-lg font-medium text-gray-900">"No leads found"</h3>
            <p class="mt-2 text-sm text-gray-500 max-w-md mx-auto">
                "Try adjusting your search or filter criteria to find what you're looking for."
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_tag_preview_folds_extra_tags() {
        let (shown, hidden) = tag_preview(&tags(&["Hot", "SMB", "Priority"]));
        assert_eq!(shown, tags(&["Hot", "SMB"]));
        assert_eq!(hidden, 1);
    }

    #[test]
    fn test_tag_preview_short_lists() {
        assert_eq!(tag_preview(&tags(&["Cold"])), (tags(&["Cold"]), 0));
        assert_eq!(tag_preview(&[]), (Vec::new(), 0));
    }
}
