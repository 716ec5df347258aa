//! Leads Dashboard App
//!
//! Sidebar plus the main dashboard: header, error banner, tabs and the leads card.

use std::rc::Rc;

use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::api::ApiClient;
use crate::components::icons::{Icon, IconSvg};
use crate::components::ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
};
use crate::components::{
    DashboardHeader, DashboardTab, ErrorBanner, LeadsTable, NavigationTabs, SearchBar, Sidebar,
};
use crate::config::AppConfig;
use crate::fixtures::LeadGenerator;
use crate::services::LeadsService;
use crate::store::{provide_leads_store, LeadsStateStoreFields};

#[component]
pub fn App(config: AppConfig, client: ApiClient) -> impl IntoView {
    let service = LeadsService::new(client, LeadGenerator::new(config.fixture_seed));
    let store = provide_leads_store(Rc::new(service), config.items_per_page);
    provide_context(config);

    let state = store.state();
    let loading = state.loading();
    let lead_count = move || state.leads().with(|leads| leads.len());
    let (active_tab, set_active_tab) = signal(DashboardTab::default());

    // Load leads on mount
    Effect::new(move |_| {
        store.fetch_leads();
    });

    let on_refresh = move |_: MouseEvent| {
        log::info!("Refreshing leads");
        store.fetch_leads();
    };
    let on_filter = |_: MouseEvent| log::info!("Filter button clicked");
    let on_export = |_: MouseEvent| log::info!("Export button clicked");

    view! {
        <div class="flex min-h-screen bg-gray-50">
            <Sidebar />

            <div class="flex-1 flex flex-col min-w-0">
                <DashboardHeader />

                <main class="flex-1 px-2 sm:px-4 md:px-6 lg:px-8 py-4 sm:py-6 lg:py-8">
                    <ErrorBanner />

                    <div class="mb-6">
                        <NavigationTabs active=active_tab on_change=set_active_tab />
                    </div>

                    <Card class="w-full">
                        <CardHeader>
                            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between space-y-4 sm:space-y-0">
                                <div class="space-y-1">
                                    <CardTitle>{move || format!("Leads ({})", lead_count())}</CardTitle>
                                    <CardDescription>
                                        {move || active_tab.get().label()}
                                    </CardDescription>
                                </div>
                                <div class="flex items-center space-x-2">
                                    <Button variant=ButtonVariant::Outline class="flex items-center space-x-2" on_click=on_filter>
                                        <IconSvg icon=Icon::Filter class="h-4 w-4" />
                                        <span>"Filter"</span>
                                    </Button>
                                    <Button variant=ButtonVariant::Outline class="flex items-center space-x-2" on_click=on_export>
                                        <IconSvg icon=Icon::Upload class="h-4 w-4" />
                                        <span>"Export"</span>
                                    </Button>
                                    <Button
                                        variant=ButtonVariant::Outline
                                        class="flex items-center space-x-2"
                                        disabled=Signal::derive(move || loading.get())
                                        on_click=on_refresh
                                    >
                                        <IconSvg
                                            icon=Icon::Refresh
                                            class="h-4 w-4"
                                            spinning=Signal::derive(move || loading.get())
                                        />
                                        <span>"Refresh"</span>
                                    </Button>
                                </div>
                            </div>
                            <div class="pt-4">
                                <SearchBar />
                            </div>
                        </CardHeader>
                        <CardContent>
                            <LeadsTable />
                        </CardContent>
                    </Card>
                </main>
            </div>
        </div>
    }
}
