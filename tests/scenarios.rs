//! End-to-end scenarios: URL in, page out, through the controller and an
//! in-memory history.

use graduates_dashboard::dashboard::{Block, CardId, ChartSpec, Page};
use graduates_dashboard::dataset::DATASET;
use graduates_dashboard::state::{
    History, Locale, Location, MemoryHistory, Tab, Theme, ViewController, ViewState,
};

const BASE: &str = "/visual-almalaurea-laureati-informatica-2024/";

fn load(url: &str) -> ViewController<MemoryHistory> {
    ViewController::new(MemoryHistory::new(url))
}

fn page_of(controller: &ViewController<MemoryHistory>) -> Page {
    Page::build(&controller.state(), &DATASET)
}

#[test]
fn recognized_values_are_taken_verbatim() {
    for locale in Locale::ALL {
        for tab in Tab::ALL {
            let url = format!("{}?lang={}#{}", BASE, locale, tab);
            let state = load(&url).state();
            assert_eq!((state.locale, state.tab), (locale, tab), "{}", url);
            assert_eq!(state.theme, Theme::Light);
        }
    }
}

#[test]
fn unrecognized_locale_defaults_to_italian() {
    for query in ["", "?lang=", "?lang=EN", "?lang=fr", "?lang=en-US", "?other=en", "?lang"] {
        let url = format!("{}{}#studies", BASE, query);
        assert_eq!(load(&url).state().locale, Locale::It, "{}", url);
    }
}

#[test]
fn unrecognized_fragment_defaults_to_overview() {
    for fragment in ["", "#", "#Studies", "#home", "#studies/", "#%20"] {
        let url = format!("{}?lang=en{}", BASE, fragment);
        assert_eq!(load(&url).state().tab, Tab::Overview, "{}", url);
    }
}

#[test]
fn selecting_a_tab_only_touches_the_fragment() {
    let mut controller = load(&format!("{}?lang=en&utm_source=mail", BASE));
    controller.select_tab(Tab::Experience).unwrap();

    let location = controller.history().location();
    assert_eq!(location.hash(), "#experience");
    assert_eq!(location.search(), "?lang=en&utm_source=mail");
    assert_eq!(location.path, BASE);
}

#[test]
fn toggling_locale_only_touches_lang() {
    let mut controller = load(&format!("{}#future", BASE));
    controller.toggle_locale().unwrap();

    let location = controller.history().location();
    assert_eq!(location.query.get("lang"), Some("en"));
    assert_eq!(location.hash(), "#future");
    assert_eq!(controller.state().locale, Locale::En);
}

#[test]
fn back_navigation_restores_each_visited_url() {
    let mut controller = load(BASE);
    controller.toggle_locale().unwrap();
    controller.select_tab(Tab::Studies).unwrap();
    controller.select_tab(Tab::Future).unwrap();
    controller.toggle_locale().unwrap();

    // Walk back through every entry and compare with a fresh load of it
    while controller.history_mut().back().is_some() {
        controller.on_navigation();
        let fresh = ViewState::from_location(&controller.history().location());
        assert_eq!(controller.state().locale, fresh.locale);
        assert_eq!(controller.state().tab, fresh.tab);
    }
    assert_eq!(controller.state().locale, Locale::It);
    assert_eq!(controller.state().tab, Tab::Overview);
}

#[test]
fn rederivation_is_idempotent() {
    let mut controller = load(BASE);
    controller.history_mut().visit(&format!("{}?lang=en#experience", BASE));

    assert!(controller.on_navigation());
    let entries = controller.history().len();
    let state = controller.state();

    assert!(!controller.on_navigation());
    assert_eq!(controller.state(), state);
    assert_eq!(controller.history().len(), entries);
}

#[test]
fn same_url_same_page_regardless_of_history() {
    let url = format!("{}?lang=en#experience", BASE);
    let fresh = page_of(&load(&url));

    let mut busy = load(BASE);
    busy.select_tab(Tab::Future).unwrap();
    busy.toggle_locale().unwrap();
    busy.select_tab(Tab::Studies).unwrap();
    busy.history_mut().visit(&url);
    busy.on_navigation();

    assert_eq!(page_of(&busy), fresh);
}

#[test]
fn english_studies_scenario() {
    let controller = load(&format!("{}?lang=en#studies", BASE));
    assert_eq!(controller.state().locale, Locale::En);
    assert_eq!(controller.state().tab, Tab::Studies);

    let page = page_of(&controller);
    assert_eq!(page.active_tab().map(|t| t.label), Some("Academic Performance"));

    let regularity = page.card(CardId::Regularity).expect("regularity card");
    let figures = regularity
        .blocks
        .iter()
        .find_map(|b| match b {
            Block::Figures { figures } => Some(figures),
            _ => None,
        })
        .expect("figures block");
    assert_eq!(figures[0].label, "Graduation Mark");
    assert_eq!(figures[0].value, "98.8");
    assert_eq!(figures[1].value, "4.5");
    assert_eq!(figures[1].unit, Some("years"));
    assert!(page.card(CardId::Enrolment).is_some());
    assert!(page.card(CardId::Gender).is_none());
}

#[test]
fn italian_overview_scenario() {
    let controller = load(BASE);
    assert_eq!(controller.state().locale, Locale::It);
    assert_eq!(controller.state().tab, Tab::Overview);

    let page = page_of(&controller);
    let gender = page.card(CardId::Gender).expect("gender card");
    let ChartSpec::Pie(pie) = gender.charts()[0] else {
        panic!("gender card should hold a pie");
    };
    let captions: Vec<_> = pie.rings[0]
        .slices
        .iter()
        .filter_map(|s| s.caption.as_deref())
        .collect();
    assert_eq!(captions, vec!["Uomini: 85.5%", "Donne: 14.5%"]);
}

#[test]
fn theme_round_trip_never_reaches_the_url() {
    let mut controller = load(&format!("{}?lang=en#future", BASE));
    let before = controller.history().location();

    controller.toggle_theme();
    assert_eq!(page_of(&controller).palette.grid, "#374151");
    controller.toggle_theme();

    assert_eq!(controller.state().theme, Theme::Light);
    assert_eq!(controller.history().len(), 1);
    assert_eq!(controller.history().location(), before);
    assert!(!controller.history().location().to_string().contains("dark"));
}

#[test]
fn browser_style_pieces_round_trip() {
    let location = Location::from_parts(BASE, "?lang=en", "#studies");
    assert_eq!(location.to_string(), format!("{}?lang=en#studies", BASE));
    assert_eq!(Location::parse(&location.to_string()), location);
}
