//! App Root Component
//!
//! Derives the page from the view state and lays out header, tabs, cards
//! and footer.

use graduates_dashboard::{Page, DATASET};
use leptos::*;

use crate::components::{Header, TabBar};
use crate::pages::Dashboard;
use crate::state::provide_dashboard_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = match provide_dashboard_state() {
        Ok(state) => state,
        Err(e) => {
            web_sys::console::error_1(&format!("Dashboard unavailable: {}", e).into());
            return view! { <Unavailable /> }.into_view();
        }
    };

    let page = create_memo(move |_| Page::build(&state.view.get(), &DATASET));
    let dark = move || state.view.with(|v| v.theme.is_dark());

    // Keep <html lang> in step with the locale
    create_effect(move |_| {
        let locale = state.view.with(|v| v.locale);
        if let Some(root) = document().document_element() {
            let _ = root.set_attribute("lang", locale.as_str());
        }
    });

    view! {
        <div class=move || if dark() { "dark" } else { "" }>
            <div class="min-h-screen bg-gray-50 dark:bg-gray-900 text-gray-900 dark:text-white flex flex-col transition-colors">
                <Header page=page />

                <main class="flex-1 container mx-auto px-4 py-8">
                    <TabBar page=page />
                    <Dashboard page=page />
                </main>

                <Footer page=page />
            </div>
        </div>
    }
    .into_view()
}

#[component]
fn Footer(page: Memo<Page>) -> impl IntoView {
    view! {
        <footer class="border-t border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 py-4">
            <div class="container mx-auto px-4 text-center text-sm text-gray-500 dark:text-gray-400">
                {move || {
                    page.with(|p| {
                        let footer = p.footer.clone();
                        view! {
                            {footer.before_link()}
                            <a
                                href=footer.source.href
                                target=footer.source.target
                                rel=footer.source.rel
                                class="hover:underline"
                            >
                                {footer.source.label}
                            </a>
                            {footer.after_link()}
                        }
                    })
                }}
            </div>
        </footer>
    }
}

/// Shown when the page has no usable window history
#[component]
fn Unavailable() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-screen text-center">
            <div class="text-6xl mb-4">"🎓"</div>
            <p class="text-gray-500">"Dashboard unavailable / Dashboard non disponibile"</p>
        </div>
    }
}
