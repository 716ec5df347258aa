//! UI Components
//!
//! Dashboard components and the shared UI primitives.

pub mod icons;
pub mod ui;

mod dashboard_header;
mod error_banner;
mod leads_table;
mod navigation_tabs;
mod pagination_bar;
mod search_bar;
mod sidebar;

pub use dashboard_header::DashboardHeader;
pub use error_banner::ErrorBanner;
pub use leads_table::LeadsTable;
pub use navigation_tabs::{DashboardTab, NavigationTabs};
pub use pagination_bar::PaginationBar;
pub use search_bar::SearchBar;
pub use sidebar::Sidebar;
