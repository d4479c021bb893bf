//! Header Component
//!
//! Title, source link, cohort details and the theme and locale buttons.

use graduates_dashboard::Page;
use leptos::*;

use crate::state::DashboardState;

#[component]
pub fn Header(page: Memo<Page>) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <header class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700 shadow-sm">
            <div class="container mx-auto px-4 py-6 flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                <div>
                    <div class="flex items-center gap-2">
                        <span class="text-3xl">"🎓"</span>
                        <h1 class="text-2xl md:text-3xl font-bold">{move || page.with(|p| p.header.title)}</h1>
                        <CohortInfo page=page />
                    </div>
                    <p class="text-gray-600 dark:text-gray-400 mt-1">
                        {move || page.with(|p| p.header.subtitle)}
                        " "
                        {move || page.with(|p| {
                            let link = p.header.source.clone();
                            view! {
                                <a
                                    href=link.href
                                    target=link.target
                                    rel=link.rel
                                    class="text-blue-600 dark:text-blue-400 hover:underline"
                                >
                                    {link.label}" ↗"
                                </a>
                            }
                        })}
                    </p>
                </div>

                <div class="flex items-center gap-2">
                    <button
                        class="p-2 rounded-lg bg-gray-100 dark:bg-gray-700 hover:bg-gray-200 dark:hover:bg-gray-600 transition-colors"
                        title=move || page.with(|p| p.header.theme_toggle.title)
                        on:click=move |_| state.toggle_theme()
                    >
                        {move || page.with(|p| p.header.theme_toggle.icon)}
                    </button>
                    <button
                        class="flex items-center gap-1 px-3 py-2 rounded-lg bg-gray-100 dark:bg-gray-700 hover:bg-gray-200 dark:hover:bg-gray-600 transition-colors text-sm font-medium"
                        on:click=move |_| state.toggle_locale()
                    >
                        <span>{move || page.with(|p| p.header.locale_toggle.icon)}</span>
                        <span>{move || page.with(|p| p.header.locale_toggle.label)}</span>
                    </button>
                </div>
            </div>
        </header>
    }
}

/// Info button toggling the cohort popover on click
#[component]
fn CohortInfo(page: Memo<Page>) -> impl IntoView {
    let (open, set_open) = create_signal(false);

    view! {
        <div class="relative">
            <button
                class="text-gray-400 hover:text-blue-500"
                on:click=move |_| set_open.update(|open| *open = !*open)
            >
                "ℹ️"
            </button>
            <Show when=move || open.get()>
                <CohortPopover page=page />
            </Show>
        </div>
    }
}

#[component]
fn CohortPopover(page: Memo<Page>) -> impl IntoView {
    view! {
        <div class="absolute left-0 top-8 z-10 w-64 p-4 rounded-lg shadow-lg bg-white dark:bg-gray-700 border border-gray-200 dark:border-gray-600 text-sm">
            <h4 class="font-semibold mb-2">{move || page.with(|p| p.header.cohort.heading)}</h4>
            {move || {
                page.with(|p| {
                    p.header
                        .cohort
                        .rows
                        .iter()
                        .map(|row| view! {
                            <div class="flex justify-between py-0.5">
                                <span class="text-gray-600 dark:text-gray-300">{row.label.clone()}</span>
                                <span class="font-medium">{row.value.clone()}</span>
                            </div>
                        })
                        .collect::<Vec<_>>()
                })
            }}
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use graduates_dashboard::{ViewState, DATASET};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn popover_count(root: &web_sys::Element) -> u32 {
        root.query_selector_all(".absolute").map(|nodes| nodes.length()).unwrap_or(0)
    }

    #[wasm_bindgen_test]
    fn cohort_popover_toggles_on_click_only() {
        let root = document().create_element("div").unwrap();
        document().body().unwrap().append_child(&root).unwrap();
        let html_root = root.clone().unchecked_into::<web_sys::HtmlElement>();

        mount_to(html_root, || {
            let page = create_memo(|_| Page::build(&ViewState::default(), &DATASET));
            view! { <CohortInfo page=page /> }
        });

        let wrapper = root.first_element_child().unwrap();
        let button = root
            .query_selector("button")
            .unwrap()
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();

        wrapper
            .dispatch_event(&web_sys::Event::new("mouseenter").unwrap())
            .unwrap();
        assert_eq!(popover_count(&root), 0);

        button.click();
        assert_eq!(popover_count(&root), 1);
        assert!(root.text_content().unwrap_or_default().contains("4.171"));

        button.click();
        assert_eq!(popover_count(&root), 0);
    }
}
