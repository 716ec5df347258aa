//! Sidebar Component
//!
//! Navigation sidebar with section links, team onboarding and user profile.
//! Collapses behind a toggle button below the `lg` breakpoint.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconSvg};
use crate::components::ui::cn;

struct NavLink {
    label: &'static str,
    icon: Icon,
}

struct NavSection {
    title: &'static str,
    links: &'static [NavLink],
}

const NAV_SECTIONS: &[NavSection] = &[
    NavSection {
        title: "Team Management",
        links: &[
            NavLink { label: "Members", icon: Icon::Users },
            NavLink { label: "Departments", icon: Icon::Building },
            NavLink { label: "Bulk Adjustments", icon: Icon::MenuList },
        ],
    },
    NavSection {
        title: "Leads Management",
        links: &[
            NavLink { label: "Leads", icon: Icon::Clipboard },
            NavLink { label: "Tags", icon: Icon::Tag },
        ],
    },
    NavSection {
        title: "Brand & Products",
        links: &[
            NavLink { label: "Customization", icon: Icon::Edit },
            NavLink { label: "Products", icon: Icon::ShoppingBag },
        ],
    },
    NavSection {
        title: "Configuration",
        links: &[
            NavLink { label: "Integrations", icon: Icon::Terminal },
            NavLink { label: "Settings", icon: Icon::Settings },
        ],
    },
    NavSection {
        title: "Support",
        links: &[NavLink { label: "FAQs", icon: Icon::Question }],
    },
];

/// Initials shown in the onboarding avatar stack
const TEAM_PREVIEW: [&str; 3] = ["SW", "JM", "AK"];
const TEAM_OVERFLOW: usize = 4;

pub const USER_NAME: &str = "Sophia Williams";
pub const USER_EMAIL: &str = "sophia@alignui.com";

#[component]
pub fn Sidebar() -> impl IntoView {
    let (mobile_open, set_mobile_open) = signal(false);

    let toggle_class = move || {
        let offset = if mobile_open.get() { "left-52" } else { "left-4" };
        format!("lg:hidden fixed top-4 z-50 {}", offset)
    };
    let panel_class = move || {
        cn(&[
            "bg-white border-r border-gray-200 flex flex-col overflow-hidden",
            "fixed inset-y-0 left-0 z-40 transform transition-transform duration-300 ease-in-out",
            "lg:relative lg:translate-x-0 lg:w-64",
            if mobile_open.get() { "translate-x-0 w-64" } else { "-translate-x-full w-64" },
        ])
    };

    let sections = NAV_SECTIONS
        .iter()
        .map(|section| {
            let links = section
                .links
                .iter()
                .map(|link| {
                    view! {
                        <a href="#" class="flex items-center px-4 py-2 text-gray-600 hover:bg-gray-100 rounded-md">
                            <IconSvg icon=link.icon class="mr-3 h-5 w-5 text-gray-500" />
                            {link.label}
                        </a>
                    }
                })
                .collect_view();
            view! {
                <div class="mt-2">
                    <h3 class="px-4 text-xs font-semibold text-gray-400 uppercase tracking-wider">
                        {section.title}
                    </h3>
                    <div class="mt-2 space-y-1">{links}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class=toggle_class>
            <button
                class="p-2 rounded-md bg-white shadow-md text-gray-600 hover:text-purple-600 focus:outline-none"
                aria-label="Toggle navigation"
                on:click=move |_| set_mobile_open.update(|open| *open = !*open)
            >
                {move || {
                    let icon = if mobile_open.get() { Icon::Close } else { Icon::Menu };
                    view! { <IconSvg icon=icon class="h-6 w-6" /> }
                }}
            </button>
        </div>

        <div class=panel_class>
            <div class="flex items-center justify-center h-16 border-b border-gray-200">
                <div class="h-8 w-8 bg-purple-600 rounded-full flex items-center justify-center">
                    <IconSvg icon=Icon::Lightning class="h-5 w-5 text-white" />
                </div>
            </div>

            <nav class="flex-1 py-4 px-3 overflow-hidden hover:overflow-y-auto">
                <div class="space-y-1">
                    <a href="#" class="flex items-center px-4 py-2 text-purple-600 bg-purple-50 rounded-md font-medium">
                        <IconSvg icon=Icon::Home class="mr-3 h-5 w-5" />
                        "Home"
                    </a>
                </div>
                {sections}
            </nav>

            <div class="p-4 border-t border-gray-200">
                <div class="flex -space-x-2 mb-2">
                    {TEAM_PREVIEW
                        .iter()
                        .map(|initials| view! {
                            <div class="h-8 w-8 rounded-full bg-purple-100 border-2 border-white flex items-center justify-center">
                                <span class="text-xs font-medium text-purple-700">{*initials}</span>
                            </div>
                        })
                        .collect_view()}
                    <div class="h-8 w-8 rounded-full bg-gray-200 border-2 border-white flex items-center justify-center">
                        <span class="text-xs font-medium text-gray-500">{format!("+{}", TEAM_OVERFLOW)}</span>
                    </div>
                </div>
                <div class="text-sm text-gray-600 font-medium">"Onboard your team members"</div>
                <div class="text-xs text-gray-500 mb-2">"Upload your team via CSV"</div>
                <button
                    class="text-sm text-purple-600 font-medium flex items-center"
                    on:click=|_| log::info!("Onboard team clicked")
                >
                    "Onboard your team"
                    <IconSvg icon=Icon::ChevronRight class="ml-1 h-4 w-4" />
                </button>
            </div>

            <div class="p-4 border-t border-gray-200">
                <div class="flex items-center">
                    <div class="h-8 w-8 rounded-full bg-purple-600 flex items-center justify-center">
                        <span class="text-xs font-medium text-white">"SW"</span>
                    </div>
                    <div class="ml-3">
                        <p class="text-sm font-medium text-gray-700">{USER_NAME}</p>
                        <p class="text-xs text-gray-500">{USER_EMAIL}</p>
                    </div>
                    <button class="ml-auto text-gray-400 hover:text-gray-500" aria-label="Open profile">
                        <IconSvg icon=Icon::ChevronRight class="h-5 w-5" />
                    </button>
                </div>
            </div>
        </div>
    }
}
