//! Leads State Store
//!
//! `LeadsState` is a plain reducer: every change goes through
//! `LeadsState::apply` (or `begin_request` to start a load), which
//! keeps it testable without a reactive runtime. `LeadsStore` wraps it in a
//! `reactive_stores::Store` for field-level reactivity, owns the injected
//! data source and is handed to components through context.

use std::collections::BTreeSet;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::error::LeadsError;
use crate::models::Lead;
use crate::pagination::{Pagination, PaginationUpdate};
use crate::services::LeadProvider;

/// Lead list, fetch status, pagination and selection
#[derive(Clone, Debug, Store)]
pub struct LeadsState {
    /// Result of the latest completed fetch or search
    pub leads: Vec<Lead>,
    /// Row the user last clicked
    pub selected_lead: Option<Lead>,
    pub loading: bool,
    pub error: Option<String>,
    pub pagination: Pagination,
    /// Checked lead IDs, across all pages
    pub selected_ids: BTreeSet<u32>,
    pub search_query: String,
    /// Stamp of the newest request; older completions are dropped
    pub request_epoch: u64,
}

/// Kind of load the store can start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadsRequest {
    /// Reload everything, keeping the current page
    Fetch,
    /// Filter by a query; results open on page 1
    Search(String),
    /// Drop the query and reload everything
    ClearFilters,
}

/// A load that has been started but not yet completed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub epoch: u64,
    pub query: Option<String>,
    pub reset_page: bool,
}

impl PendingRequest {
    /// Run against `provider` and produce the completing action
    pub async fn run(self, provider: &dyn LeadProvider) -> LeadsAction {
        let result = load_leads(provider, self.query.as_deref()).await;
        LeadsAction::Loaded {
            epoch: self.epoch,
            result,
            reset_page: self.reset_page,
        }
    }
}

/// State transitions
#[derive(Debug, Clone)]
pub enum LeadsAction {
    /// Completion of the request started with `epoch`
    Loaded {
        epoch: u64,
        result: Result<Vec<Lead>, LeadsError>,
        /// Jump back to page 1 (new search results)
        reset_page: bool,
    },
    SelectLead(Option<Lead>),
    ClearError,
    SetPagination(PaginationUpdate),
    ToggleLead(u32),
    /// Check or uncheck every row on the current page
    TogglePage(bool),
    ClearSelection,
}

impl LeadsState {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            leads: Vec::new(),
            selected_lead: None,
            loading: false,
            error: None,
            pagination: Pagination::new(items_per_page),
            selected_ids: BTreeSet::new(),
            search_query: String::new(),
            request_epoch: 0,
        }
    }

    /// Mark a load as in flight and stamp it with a fresh epoch
    pub fn begin_request(&mut self, request: LeadsRequest) -> PendingRequest {
        let (query, reset_page) = match request {
            LeadsRequest::Fetch => (None, false),
            LeadsRequest::Search(query) => {
                self.search_query = query.clone();
                (Some(query), true)
            }
            LeadsRequest::ClearFilters => {
                self.search_query.clear();
                (None, false)
            }
        };
        self.request_epoch += 1;
        self.loading = true;
        self.error = None;
        PendingRequest {
            epoch: self.request_epoch,
            query,
            reset_page,
        }
    }

    pub fn apply(&mut self, action: LeadsAction) {
        match action {
            LeadsAction::Loaded { epoch, result, reset_page } => {
                self.finish_request(epoch, result, reset_page)
            }
            LeadsAction::SelectLead(lead) => self.selected_lead = lead,
            LeadsAction::ClearError => self.error = None,
            LeadsAction::SetPagination(update) => self.pagination.merge(update),
            LeadsAction::ToggleLead(id) => self.toggle_lead_selection(id),
            LeadsAction::TogglePage(selected) => self.toggle_all_leads_selection(selected),
            LeadsAction::ClearSelection => self.selected_ids.clear(),
        }
    }

    fn finish_request(&mut self, epoch: u64, result: Result<Vec<Lead>, LeadsError>, reset_page: bool) {
        if epoch != self.request_epoch {
            log::debug!("Dropping stale response (epoch {}, latest {})", epoch, self.request_epoch);
            return;
        }
        self.loading = false;
        match result {
            Ok(leads) => {
                log::info!("Loaded {} leads", leads.len());
                let mut update = PaginationUpdate {
                    total_items: Some(leads.len()),
                    ..Default::default()
                };
                if reset_page {
                    update.current_page = Some(1);
                }
                self.leads = leads;
                self.pagination.merge(update);
            }
            Err(err) => {
                log::warn!("Lead request failed: {}", err);
                self.error = Some(err.to_string());
            }
        }
    }

    /// Leads on the current page
    pub fn paginated_leads(&self) -> &[Lead] {
        &self.leads[self.pagination.range(self.leads.len())]
    }

    fn page_ids(&self) -> Vec<u32> {
        self.paginated_leads().iter().map(|lead| lead.id).collect()
    }

    pub fn toggle_lead_selection(&mut self, id: u32) {
        if !self.selected_ids.remove(&id) {
            self.selected_ids.insert(id);
        }
    }

    /// Selections on other pages are left alone
    pub fn toggle_all_leads_selection(&mut self, selected: bool) {
        for id in self.page_ids() {
            if selected {
                self.selected_ids.insert(id);
            } else {
                self.selected_ids.remove(&id);
            }
        }
    }

    pub fn is_lead_selected(&self, id: u32) -> bool {
        self.selected_ids.contains(&id)
    }

    /// True when the current page has rows and all of them are checked
    pub fn all_page_selected(&self) -> bool {
        let page = self.paginated_leads();
        !page.is_empty() && page.iter().all(|lead| self.is_lead_selected(lead.id))
    }

    pub fn selected_count(&self) -> usize {
        self.selected_ids.len()
    }
}

/// Run a fetch, or a search when `query` is set
pub async fn load_leads(
    source: &dyn LeadProvider,
    query: Option<&str>,
) -> Result<Vec<Lead>, LeadsError> {
    match query {
        Some(query) => source.search_leads(query).await,
        None => source.get_leads().await,
    }
}

/// Reactive handle to the leads state plus its data source
#[derive(Clone, Copy)]
pub struct LeadsStore {
    state: Store<LeadsState>,
    source: StoredValue<Rc<dyn LeadProvider>, LocalStorage>,
}

impl LeadsStore {
    pub fn new(source: Rc<dyn LeadProvider>, items_per_page: usize) -> Self {
        Self {
            state: Store::new(LeadsState::new(items_per_page)),
            source: StoredValue::new_local(source),
        }
    }

    pub fn state(&self) -> Store<LeadsState> {
        self.state
    }

    pub fn dispatch(&self, action: LeadsAction) {
        self.state.update(|state| state.apply(action));
    }

    pub fn fetch_leads(&self) {
        self.run_request(LeadsRequest::Fetch);
    }

    pub fn search_leads(&self, query: String) {
        self.run_request(LeadsRequest::Search(query));
    }

    /// Drop the search query and reload the full list
    pub fn clear_filters(&self) {
        self.run_request(LeadsRequest::ClearFilters);
    }

    fn run_request(&self, request: LeadsRequest) {
        let pending = self.state.write().begin_request(request);
        let source = self.source.get_value();
        let store = *self;
        spawn_local(async move {
            let action = pending.run(source.as_ref()).await;
            store.dispatch(action);
        });
    }

    pub fn set_page(&self, page: usize) {
        self.dispatch(LeadsAction::SetPagination(PaginationUpdate::page(page)));
    }

    pub fn is_lead_selected(&self, id: u32) -> bool {
        self.state.selected_ids().with(|ids| ids.contains(&id))
    }
}

/// Put a `LeadsStore` into context for the component tree below
pub fn provide_leads_store(source: Rc<dyn LeadProvider>, items_per_page: usize) -> LeadsStore {
    let store = LeadsStore::new(source, items_per_page);
    provide_context(store);
    store
}

/// Get the leads store from context
pub fn use_leads_store() -> LeadsStore {
    expect_context::<LeadsStore>()
}
