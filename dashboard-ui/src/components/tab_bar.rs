//! Tab Bar Component

use graduates_dashboard::Page;
use leptos::*;

use crate::state::DashboardState;

/// One button per tab; the active one is highlighted
#[component]
pub fn TabBar(page: Memo<Page>) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <nav class="flex flex-wrap gap-2 mb-8">
            {move || {
                page.with(|p| {
                    p.tabs
                        .iter()
                        .map(|button| {
                            let tab = button.tab;
                            let class = if button.active {
                                "px-4 py-2 rounded-lg font-medium transition-colors bg-blue-600 text-white"
                            } else {
                                "px-4 py-2 rounded-lg font-medium transition-colors bg-white dark:bg-gray-800 text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700"
                            };
                            view! {
                                <button class=class on:click=move |_| state.select_tab(tab)>
                                    {button.label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                })
            }}
        </nav>
    }
}
