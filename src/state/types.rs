//! View state axes
//!
//! The three independent selectors the dashboard renders from:
//! - `Locale`: which language bundle is active (`it` or `en`)
//! - `Tab`: which card set is visible
//! - `Theme`: light or dark styling (never written to the URL)
//!
//! `ViewState` bundles them and knows how to derive itself from a `Location`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{ParseLocaleError, ParseTabError};
use super::location::Location;

/// Query-string parameter carrying the locale
pub const LANG_PARAM: &str = "lang";

/// Display language
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Italian (default)
    #[default]
    It,
    /// English
    En,
}

impl Locale {
    /// Both locales, in toggle order
    pub const ALL: [Locale; 2] = [Locale::It, Locale::En];

    /// Identifier used in the `lang` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::It => "it",
            Locale::En => "en",
        }
    }

    /// The other locale. Only two exist, so switching is a toggle.
    pub fn toggled(self) -> Self {
        match self {
            Locale::It => Locale::En,
            Locale::En => Locale::It,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    /// Exact, case-sensitive match on `it` / `en`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "it" => Ok(Locale::It),
            "en" => Ok(Locale::En),
            other => Err(ParseLocaleError(other.to_string())),
        }
    }
}

/// Card set selector, mirrored into the URL fragment
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Personal & social background
    #[default]
    Overview,
    /// Academic performance
    Studies,
    /// Experience & services
    Experience,
    /// Skills & prospects
    Future,
}

impl Tab {
    /// All tabs in navigation order
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Studies, Tab::Experience, Tab::Future];

    /// Identifier used as the URL fragment
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Studies => "studies",
            Tab::Experience => "experience",
            Tab::Future => "future",
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = ParseTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .iter()
            .copied()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| ParseTabError(s.to_string()))
    }
}

/// Visual theme. Purely in-memory; every page load starts light.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}', expected 'light' or 'dark'", other)),
        }
    }
}

/// Everything the presentation layer needs besides the dataset
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ViewState {
    pub locale: Locale,
    pub tab: Tab,
    pub theme: Theme,
}

impl ViewState {
    /// Initial state for a page load at `location`.
    ///
    /// Unrecognized or missing values fall back to the defaults; theme is
    /// always light. Same location, same result.
    pub fn from_location(location: &Location) -> Self {
        Self {
            locale: locale_of(location).unwrap_or_default(),
            tab: tab_of(location).unwrap_or_default(),
            theme: Theme::Light,
        }
    }

    /// Re-derive locale and tab after a navigation the controller did not
    /// initiate (back/forward, manual URL edit).
    ///
    /// A missing `lang` or fragment means the default, exactly as on first
    /// load, so returning to an entry restores what that URL encodes. A
    /// present but unrecognized value is ignored and leaves the current
    /// value in place. Returns `true` if the state changed, so applying the
    /// same location twice reports `false` the second time.
    pub fn sync_with(&mut self, location: &Location) -> bool {
        let before = *self;

        let tab = match location.fragment.as_deref() {
            None | Some("") => Some(Tab::default()),
            Some(_) => tab_of(location),
        };
        if let Some(tab) = tab {
            self.tab = tab;
        }

        let locale = match location.query.get(LANG_PARAM) {
            None => Some(Locale::default()),
            Some(_) => locale_of(location),
        };
        if let Some(locale) = locale {
            self.locale = locale;
        }

        *self != before
    }
}

/// Locale encoded in the `lang` parameter, if it is a known one
fn locale_of(location: &Location) -> Option<Locale> {
    location.query.get(LANG_PARAM)?.parse().ok()
}

/// Tab encoded in the fragment, if it is a known one
fn tab_of(location: &Location) -> Option<Tab> {
    location.fragment.as_deref()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_for(url: &str) -> ViewState {
        ViewState::from_location(&Location::parse(url))
    }

    #[test]
    fn test_locale_parsing_is_exact() {
        assert_eq!("it".parse::<Locale>().unwrap(), Locale::It);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert!("EN".parse::<Locale>().is_err());
        assert!("en-US".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn test_tab_round_trips_through_str() {
        for tab in Tab::ALL {
            assert_eq!(tab.as_str().parse::<Tab>().unwrap(), tab);
        }
        assert!("Overview".parse::<Tab>().is_err());
    }

    #[test]
    fn test_toggles() {
        assert_eq!(Locale::It.toggled(), Locale::En);
        assert_eq!(Locale::En.toggled().toggled(), Locale::En);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert!(Theme::Light.toggled().is_dark());
    }

    #[test]
    fn test_initial_state_from_known_values() {
        for locale in Locale::ALL {
            for tab in Tab::ALL {
                let state = state_for(&format!("/?lang={}#{}", locale, tab));
                assert_eq!(state.locale, locale);
                assert_eq!(state.tab, tab);
                assert_eq!(state.theme, Theme::Light);
            }
        }
    }

    #[test]
    fn test_initial_state_defaults() {
        for url in ["/", "/?lang=", "/?lang=fr", "/?lang=IT", "/?foo=en", "/?lang"] {
            assert_eq!(state_for(url).locale, Locale::It, "url: {}", url);
        }
        for url in ["/", "/#", "/#stats", "/#Studies", "/#studies/x", "/?lang=en"] {
            assert_eq!(state_for(url).tab, Tab::Overview, "url: {}", url);
        }
    }

    #[test]
    fn test_first_lang_parameter_wins() {
        assert_eq!(state_for("/?lang=en&lang=it").locale, Locale::En);
    }

    #[test]
    fn test_sync_ignores_unknown_values() {
        let mut state = state_for("/?lang=en#future");

        let changed = state.sync_with(&Location::parse("/?lang=de#nowhere"));
        assert!(!changed);
        assert_eq!(state.locale, Locale::En);
        assert_eq!(state.tab, Tab::Future);
    }

    #[test]
    fn test_sync_is_idempotent() {
        let mut state = ViewState::default();
        let location = Location::parse("/?lang=en#experience");

        assert!(state.sync_with(&location));
        assert!(!state.sync_with(&location));
        assert_eq!(state.locale, Locale::En);
        assert_eq!(state.tab, Tab::Experience);
    }

    #[test]
    fn test_sync_with_missing_values_restores_defaults() {
        let mut state = state_for("/?lang=en#future");

        assert!(state.sync_with(&Location::parse("/")));
        assert_eq!(state.locale, Locale::It);
        assert_eq!(state.tab, Tab::Overview);
    }

    #[test]
    fn test_sync_with_empty_lang_is_ignored() {
        let mut state = state_for("/?lang=en#future");

        assert!(!state.sync_with(&Location::parse("/?lang=#future")));
        assert_eq!(state.locale, Locale::En);
    }

    #[test]
    fn test_sync_keeps_theme() {
        let mut state = ViewState {
            theme: Theme::Dark,
            ..Default::default()
        };
        state.sync_with(&Location::parse("/?lang=en#studies"));
        assert_eq!(state.theme, Theme::Dark);
    }
}
