//! Presentation model
//!
//! `Page::build` turns a `ViewState` and the dataset into everything the
//! screen shows: header, tab bar, the active tab's cards and the footer.
//! It is a pure function, so the same state always yields the same page,
//! and the model serializes to JSON for the offline `render` command.
//!
//! ```
//! use graduates_dashboard::dashboard::Page;
//! use graduates_dashboard::dataset::DATASET;
//! use graduates_dashboard::state::{Location, ViewState};
//!
//! let state = ViewState::from_location(&Location::parse("/?lang=en#studies"));
//! let page = Page::build(&state, &DATASET);
//! assert_eq!(page.active_tab().map(|t| t.label), Some("Academic Performance"));
//! ```

pub mod cards;
pub mod chart;
pub mod format;
pub mod palette;
mod text;

use serde::Serialize;

use crate::dataset::{StatDataset, REPORT_YEAR, SOURCE_NAME, SOURCE_URL};
use crate::i18n::strings;
use crate::state::{Locale, Tab, Theme, ViewState};

pub use cards::{cards_for, Block, Card, CardId, Icon, Row};
pub use chart::{ChartSpec, Orientation};
pub use palette::Palette;

/// Link to the source report, opened in a new tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalLink {
    pub label: &'static str,
    pub href: &'static str,
    pub target: &'static str,
    pub rel: &'static str,
}

impl ExternalLink {
    pub fn source() -> Self {
        Self {
            label: SOURCE_NAME,
            href: SOURCE_URL,
            target: "_blank",
            rel: "noopener noreferrer",
        }
    }
}

/// Cohort details popover
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CohortPanel {
    pub heading: &'static str,
    pub rows: Vec<Row>,
}

/// Theme button: shows the icon of the *current* theme and offers the other
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeToggle {
    pub icon: &'static str,
    pub title: &'static str,
}

/// Locale button, labelled with the language it switches to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleToggle {
    pub icon: &'static str,
    pub label: &'static str,
    pub target: Locale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub source: ExternalLink,
    pub cohort: CohortPanel,
    pub theme_toggle: ThemeToggle,
    pub locale_toggle: LocaleToggle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabButton {
    pub tab: Tab,
    pub label: &'static str,
    pub active: bool,
    /// Fragment link, `#studies`
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub year: u16,
    pub source: ExternalLink,
    pub profile: &'static str,
}

impl Footer {
    /// `© 2024 AlmaLaurea - <profile>`
    pub fn text(&self) -> String {
        format!("{}{}{}", self.before_link(), self.source.label, self.after_link())
    }

    /// Text preceding the source link, `© 2024 `
    pub fn before_link(&self) -> String {
        format!("© {} ", self.year)
    }

    /// Text following the source link, ` - <profile>`
    pub fn after_link(&self) -> String {
        format!(" - {}", self.profile)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub state: ViewState,
    pub header: Header,
    pub tabs: Vec<TabButton>,
    pub cards: Vec<Card>,
    pub footer: Footer,
    pub palette: Palette,
}

impl Page {
    pub fn build(state: &ViewState, data: &StatDataset) -> Self {
        let t = strings(state.locale);

        let header = Header {
            title: t.title,
            subtitle: t.subtitle,
            source: ExternalLink::source(),
            cohort: CohortPanel {
                heading: t.cohort.heading,
                rows: vec![
                    Row {
                        label: t.cohort.graduates.to_string(),
                        value: format::grouped(data.cohort.graduates),
                    },
                    Row {
                        label: t.cohort.questionnaires.to_string(),
                        value: format::grouped(data.cohort.questionnaires),
                    },
                    Row {
                        label: t.cohort.response_rate.to_string(),
                        value: format::percent(data.cohort.response_rate),
                    },
                ],
            },
            theme_toggle: match state.theme {
                Theme::Light => ThemeToggle {
                    icon: "🌙",
                    title: t.controls.dark_theme,
                },
                Theme::Dark => ThemeToggle {
                    icon: "☀️",
                    title: t.controls.light_theme,
                },
            },
            locale_toggle: LocaleToggle {
                icon: Icon::Globe.glyph(),
                label: t.controls.switch_locale,
                target: state.locale.toggled(),
            },
        };

        let tabs = Tab::ALL
            .iter()
            .map(|&tab| TabButton {
                tab,
                label: t.tabs.label(tab),
                active: tab == state.tab,
                href: format!("#{}", tab),
            })
            .collect();

        Self {
            state: *state,
            header,
            tabs,
            cards: cards_for(state.tab, state.locale, data),
            footer: Footer {
                year: REPORT_YEAR,
                source: ExternalLink::source(),
                profile: t.footer_profile,
            },
            palette: Palette::for_theme(state.theme),
        }
    }

    pub fn active_tab(&self) -> Option<&TabButton> {
        self.tabs.iter().find(|t| t.active)
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DATASET;
    use crate::state::Location;

    fn page(url: &str) -> Page {
        Page::build(&ViewState::from_location(&Location::parse(url)), &DATASET)
    }

    #[test]
    fn test_default_page_is_italian_overview() {
        let page = page("/");
        assert_eq!(page.header.title, "Laureati in Informatica (L-31) - 2024");
        assert_eq!(page.active_tab().map(|t| t.tab), Some(Tab::Overview));
        assert_eq!(page.cards.len(), 4);
        assert_eq!(page.header.locale_toggle.label, "ENGLISH");
        assert_eq!(page.header.locale_toggle.target, Locale::En);
    }

    #[test]
    fn test_exactly_one_active_tab() {
        for tab in Tab::ALL {
            let page = page(&format!("/#{}", tab));
            assert_eq!(page.tabs.iter().filter(|t| t.active).count(), 1);
            assert_eq!(page.active_tab().map(|t| t.tab), Some(tab));
        }
    }

    #[test]
    fn test_tab_buttons_link_fragments() {
        let page = page("/");
        let hrefs: Vec<_> = page.tabs.iter().map(|t| t.href.as_str()).collect();
        assert_eq!(hrefs, vec!["#overview", "#studies", "#experience", "#future"]);
    }

    #[test]
    fn test_cohort_rows() {
        let page = page("/?lang=en");
        let values: Vec<_> = page.header.cohort.rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["4.171", "3.911", "93.8%"]);
        assert_eq!(page.header.cohort.rows[0].label, "Number of graduates");
    }

    #[test]
    fn test_theme_toggle_follows_theme() {
        let mut state = ViewState::default();
        let light = Page::build(&state, &DATASET);
        assert_eq!(light.header.theme_toggle.icon, "🌙");
        assert_eq!(light.header.theme_toggle.title, "Tema scuro");
        assert_eq!(light.palette, palette::LIGHT);

        state.theme = Theme::Dark;
        let dark = Page::build(&state, &DATASET);
        assert_eq!(dark.header.theme_toggle.icon, "☀️");
        assert_eq!(dark.header.theme_toggle.title, "Tema chiaro");
        assert_eq!(dark.palette, palette::DARK);
    }

    #[test]
    fn test_source_link_opens_safely() {
        let page = page("/");
        assert_eq!(page.header.source.target, "_blank");
        assert_eq!(page.header.source.rel, "noopener noreferrer");
        assert_eq!(page.header.source.href, SOURCE_URL);
    }

    #[test]
    fn test_footer_text() {
        assert_eq!(
            page("/").footer.text(),
            "© 2024 AlmaLaurea - Profilo dei Laureati in Informatica"
        );
        assert_eq!(
            page("/?lang=en").footer.text(),
            "© 2024 AlmaLaurea - Computer Science Graduates Profile"
        );
    }

    #[test]
    fn test_footer_links_the_source() {
        let footer = page("/?lang=en").footer;
        assert_eq!(footer.before_link(), "© 2024 ");
        assert_eq!(footer.source.label, "AlmaLaurea");
        assert_eq!(footer.source.target, "_blank");
        assert_eq!(footer.source.rel, "noopener noreferrer");
        assert_eq!(footer.after_link(), " - Computer Science Graduates Profile");
    }

    #[test]
    fn test_build_is_deterministic() {
        let state = ViewState::from_location(&Location::parse("/?lang=en#experience"));
        assert_eq!(Page::build(&state, &DATASET), Page::build(&state, &DATASET));
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(page("/?lang=en#future")).unwrap();
        assert_eq!(json["state"]["tab"], "future");
        assert_eq!(json["cards"][0]["id"], "skills");
        assert_eq!(json["cards"][0]["blocks"][0]["type"], "chart");
        assert_eq!(json["cards"][0]["blocks"][0]["kind"], "bar");
    }
}
