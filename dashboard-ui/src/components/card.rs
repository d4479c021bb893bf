//! Card Component
//!
//! Renders one dashboard card and its blocks.

use graduates_dashboard::dashboard::cards::{Block, Card, FacilityPanel};
use graduates_dashboard::Palette;
use leptos::*;

use super::chart::ChartCanvas;

#[component]
pub fn CardView(card: Card, palette: Palette) -> impl IntoView {
    let blocks = card
        .blocks
        .into_iter()
        .map(|block| block_view(block, palette))
        .collect::<Vec<_>>();

    view! {
        <section class="bg-white dark:bg-gray-800 rounded-xl shadow-sm border border-gray-200 dark:border-gray-700 p-6">
            <h2 class="flex items-center gap-2 text-lg font-semibold mb-4">
                <span>{card.icon.glyph()}</span>
                <span>{card.title}</span>
            </h2>
            <div class="space-y-4">{blocks}</div>
        </section>
    }
}

fn block_view(block: Block, palette: Palette) -> View {
    match block {
        Block::Chart(spec) => view! { <ChartCanvas spec=spec palette=palette /> }.into_view(),

        Block::Banner { text } => view! {
            <p class="text-center text-sm font-medium text-blue-700 dark:text-blue-300 bg-blue-50 dark:bg-blue-900/30 rounded-lg py-2">
                {text}
            </p>
        }
        .into_view(),

        Block::Callout { heading, text } => view! {
            <div class="rounded-lg bg-gray-50 dark:bg-gray-700/50 p-3">
                <h4 class="text-sm font-semibold mb-1">{heading}</h4>
                <p class="text-sm text-gray-600 dark:text-gray-300">{text}</p>
            </div>
        }
        .into_view(),

        Block::Figures { figures } => view! {
            <div class="grid grid-cols-2 gap-4">
                {figures
                    .into_iter()
                    .map(|figure| view! {
                        <div class="text-center rounded-lg bg-gray-50 dark:bg-gray-700/50 p-4">
                            <div class="text-3xl font-bold text-blue-600 dark:text-blue-400">
                                {figure.value}
                                {figure.unit.map(|unit| view! { <span class="text-base font-normal ml-1">{unit}</span> })}
                            </div>
                            <div class="text-sm text-gray-500 dark:text-gray-400 mt-1">{figure.label}</div>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_view(),

        Block::Breakdown { heading, rows } => view! {
            <div>
                <h4 class="text-sm font-semibold mb-2">{heading}</h4>
                <ul class="space-y-1 text-sm">
                    {rows
                        .into_iter()
                        .map(|row| view! {
                            <li class="flex justify-between">
                                <span class="text-gray-600 dark:text-gray-300">{row.label}</span>
                                <span class="font-medium">{row.value}</span>
                            </li>
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        }
        .into_view(),

        Block::Headline { label, value, suffix } => view! {
            <div class="flex items-baseline justify-between border-t border-gray-200 dark:border-gray-700 pt-3">
                <span class="text-sm text-gray-600 dark:text-gray-300">{label}</span>
                <span class="text-xl font-bold">
                    {value}
                    {suffix.map(|s| view! { <span class="text-sm font-normal ml-1">{s}</span> })}
                </span>
            </div>
        }
        .into_view(),

        Block::Panel { heading, blocks } => view! {
            <div class="border-t border-gray-200 dark:border-gray-700 pt-4">
                <h4 class="text-sm font-semibold mb-2">{heading}</h4>
                <div class="space-y-3">
                    {blocks
                        .into_iter()
                        .map(|block| block_view(block, palette))
                        .collect::<Vec<_>>()}
                </div>
            </div>
        }
        .into_view(),

        Block::Legend { entries } => view! {
            <div class="flex flex-wrap justify-center gap-3 text-xs">
                {entries
                    .into_iter()
                    .map(|entry| view! {
                        <span class="flex items-center gap-1">
                            <span class="w-3 h-3 rounded-full" style=format!("background-color: {}", entry.color) />
                            <span>{entry.label}": "{entry.value}</span>
                        </span>
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_view(),

        Block::Progress { heading, rows } => view! {
            <div>
                <h4 class="text-sm font-semibold mb-2">{heading}</h4>
                <div class="space-y-2">
                    {rows
                        .into_iter()
                        .map(|row| {
                            let label_class = if row.emphasized { "font-semibold" } else { "text-gray-600 dark:text-gray-300" };
                            view! {
                                <div>
                                    <div class="flex justify-between text-sm">
                                        <span class=label_class>{row.label}</span>
                                        <span class="font-medium">{row.text}</span>
                                    </div>
                                    <div class="h-2 rounded-full bg-gray-200 dark:bg-gray-700 overflow-hidden">
                                        <div
                                            class="h-full rounded-full"
                                            style=format!("width: {}%; background-color: {}", row.value.clamp(0.0, 100.0), row.color)
                                        />
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        }
        .into_view(),

        Block::Facility(panel) => facility_view(panel).into_view(),
    }
}

fn facility_view(panel: FacilityPanel) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-gray-200 dark:border-gray-700 p-3">
            <div class="flex items-center justify-between mb-2">
                <span class="flex items-center gap-2 font-medium">
                    <span>{panel.icon.glyph()}</span>
                    <span>{panel.name}</span>
                </span>
                <span class="text-xs text-gray-500 dark:text-gray-400">{panel.usage}</span>
            </div>
            <div class="flex h-3 rounded-full overflow-hidden">
                {panel
                    .segments
                    .into_iter()
                    .map(|segment| view! {
                        <div style=format!("width: {}%; background-color: {}", segment.value, segment.color) />
                    })
                    .collect::<Vec<_>>()}
            </div>
            <ul class="mt-2 text-xs text-gray-500 dark:text-gray-400 space-y-0.5">
                {panel
                    .notes
                    .into_iter()
                    .map(|note| view! { <li>{note}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
