//! Navigation Tabs Component

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Leads,
    LeadQualityScore,
    Leaderboard,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::Leads,
        DashboardTab::LeadQualityScore,
        DashboardTab::Leaderboard,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Leads => "Leads",
            DashboardTab::LeadQualityScore => "Lead Quality Score",
            DashboardTab::Leaderboard => "Leaderboard",
        }
    }
}

/// Tab strip above the dashboard card
#[component]
pub fn NavigationTabs(
    active: ReadSignal<DashboardTab>,
    on_change: WriteSignal<DashboardTab>,
) -> impl IntoView {
    let tabs = DashboardTab::ALL
        .into_iter()
        .map(|tab| {
            let tab_class = move || {
                let state = if active.get() == tab {
                    "bg-gray-100 text-gray-900"
                } else {
                    "text-gray-500 hover:text-gray-700 hover:bg-gray-50"
                };
                format!(
                    "whitespace-nowrap py-2 px-3 sm:px-4 rounded-md font-medium text-xs sm:text-sm transition-colors {}",
                    state
                )
            };
            view! {
                <button class=tab_class on:click=move |_| on_change.set(tab)>
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="mb-4 overflow-x-auto">
            <div class="flex space-x-2 bg-white rounded-md p-1 shadow-sm border border-gray-100 min-w-max">
                {tabs}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_labels() {
        let labels: Vec<_> = DashboardTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Leads", "Lead Quality Score", "Leaderboard"]);
        assert_eq!(DashboardTab::default(), DashboardTab::Leads);
    }
}
