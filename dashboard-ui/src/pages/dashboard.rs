//! Dashboard Page
//!
//! Card grid of the active tab.

use graduates_dashboard::Page;
use leptos::*;

use crate::components::CardView;

#[component]
pub fn Dashboard(page: Memo<Page>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            {move || {
                page.with(|p| {
                    let palette = p.palette;
                    p.cards
                        .iter()
                        .cloned()
                        .map(|card| view! { <CardView card=card palette=palette /> })
                        .collect::<Vec<_>>()
                })
            }}
        </div>
    }
}
