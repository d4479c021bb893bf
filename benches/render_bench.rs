//! Benchmarks for URL parsing and page building
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graduates_dashboard::dashboard::Page;
use graduates_dashboard::dataset::DATASET;
use graduates_dashboard::state::{Location, MemoryHistory, Tab, Theme, ViewController, ViewState};

const URLS: [&str; 3] = [
    "/visual-almalaurea-laureati-informatica-2024/",
    "/visual-almalaurea-laureati-informatica-2024/?lang=en#studies",
    "https://example.org/visual-almalaurea-laureati-informatica-2024/?utm_source=x&lang=it&x=%20y#future",
];

fn bench_location(c: &mut Criterion) {
    let mut group = c.benchmark_group("location");

    for (i, url) in URLS.iter().enumerate() {
        group.bench_function(format!("parse_{}", i), |b| {
            b.iter(|| Location::parse(black_box(url)))
        });
    }

    let location = Location::parse(URLS[2]);
    group.bench_function("with_query_param", |b| {
        b.iter(|| black_box(&location).with_query_param("lang", "en"))
    });

    group.finish();
}

fn bench_page(c: &mut Criterion) {
    let mut group = c.benchmark_group("page");

    for tab in Tab::ALL {
        let state = ViewState {
            tab,
            ..ViewState::default()
        };
        group.bench_function(format!("build_{}", tab), |b| {
            b.iter(|| Page::build(black_box(&state), &DATASET))
        });
    }

    let dark = ViewState {
        theme: Theme::Dark,
        ..ViewState::default()
    };
    group.bench_function("render_text", |b| {
        b.iter(|| Page::build(&dark, &DATASET).to_string())
    });

    group.finish();
}

fn bench_controller(c: &mut Criterion) {
    c.bench_function("controller_tab_cycle", |b| {
        b.iter(|| {
            let mut controller = ViewController::new(MemoryHistory::new(URLS[0]));
            for tab in Tab::ALL {
                controller.select_tab(black_box(tab)).unwrap();
            }
            controller.toggle_locale().unwrap();
            controller.history_mut().back();
            controller.on_navigation()
        })
    });
}

criterion_group!(benches, bench_location, bench_page, bench_controller);
criterion_main!(benches);
