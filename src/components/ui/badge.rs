//! Badge Component

use leptos::prelude::*;

use super::cn;
use crate::models::LeadStatus;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Primary,
    Success,
    Warning,
    Danger,
    Outline,
}

impl BadgeVariant {
    fn classes(self) -> &'static str {
        match self {
            BadgeVariant::Default => "bg-gray-100 text-gray-800 hover:bg-gray-200 border border-gray-200",
            BadgeVariant::Primary => "bg-blue-100 text-blue-800 hover:bg-blue-200 border border-blue-200",
            BadgeVariant::Success => "bg-green-100 text-green-800 hover:bg-green-200 border border-green-200",
            BadgeVariant::Warning => "bg-yellow-100 text-yellow-800 hover:bg-yellow-200 border border-yellow-200",
            BadgeVariant::Danger => "bg-red-100 text-red-800 hover:bg-red-200 border border-red-200",
            BadgeVariant::Outline => "border border-gray-300 text-gray-700 hover:bg-gray-50",
        }
    }

    pub fn for_status(status: LeadStatus) -> Self {
        match status {
            LeadStatus::New => BadgeVariant::Default,
            LeadStatus::Contacted => BadgeVariant::Primary,
            LeadStatus::Qualified | LeadStatus::ClosedWon => BadgeVariant::Success,
            LeadStatus::Proposal => BadgeVariant::Warning,
            LeadStatus::ClosedLost => BadgeVariant::Danger,
        }
    }
}

/// Small label pill
#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let class = cn(&[
        "inline-flex items-center px-2.5 py-0.5 rounded-md text-xs font-medium",
        "transition-colors cursor-default shadow-sm",
        variant.classes(),
        &class,
    ]);
    view! { <span class=class>{children()}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_variants() {
        assert_eq!(BadgeVariant::for_status(LeadStatus::New), BadgeVariant::Default);
        assert_eq!(BadgeVariant::for_status(LeadStatus::Contacted), BadgeVariant::Primary);
        assert_eq!(BadgeVariant::for_status(LeadStatus::Qualified), BadgeVariant::Success);
        assert_eq!(BadgeVariant::for_status(LeadStatus::Proposal), BadgeVariant::Warning);
        assert_eq!(BadgeVariant::for_status(LeadStatus::ClosedWon), BadgeVariant::Success);
        assert_eq!(BadgeVariant::for_status(LeadStatus::ClosedLost), BadgeVariant::Danger);
    }
}
