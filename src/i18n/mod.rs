//! Locale bundles
//!
//! Two static dictionaries of display strings, one per `Locale`. The
//! presentation layer looks up every label through `strings(locale)`;
//! labels that belong to a data series live with the series in
//! [`crate::dataset`].

use serde::Serialize;

use crate::state::Locale;

mod en;
mod it;

pub use en::EN;
pub use it::IT;

/// A string available in both locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Text {
    pub it: &'static str,
    pub en: &'static str,
}

impl Text {
    pub const fn new(it: &'static str, en: &'static str) -> Self {
        Self { it, en }
    }

    /// Same wording in both locales (proper nouns, acronyms)
    pub const fn same(text: &'static str) -> Self {
        Self { it: text, en: text }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::It => self.it,
            Locale::En => self.en,
        }
    }
}

/// Every display string of the dashboard chrome and card titles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Strings {
    pub title: &'static str,
    /// Sentence prefix before the source link
    pub subtitle: &'static str,
    pub cohort: CohortStrings,
    pub tabs: TabStrings,
    pub cards: CardStrings,
    pub reasons: ReasonStrings,
    pub stats: StatStrings,
    pub labels: LabelStrings,
    pub controls: ControlStrings,
    /// Profile name shown in the footer
    pub footer_profile: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CohortStrings {
    pub heading: &'static str,
    pub graduates: &'static str,
    pub questionnaires: &'static str,
    pub response_rate: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabStrings {
    pub overview: &'static str,
    pub studies: &'static str,
    pub experience: &'static str,
    pub future: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardStrings {
    pub gender: &'static str,
    pub age: &'static str,
    pub social: &'static str,
    pub regularity: &'static str,
    pub diploma: &'static str,
    pub satisfaction: &'static str,
    pub facilities: &'static str,
    pub skills: &'static str,
    pub prospects: &'static str,
    pub enrolment: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReasonStrings {
    pub title: &'static str,
    pub both: &'static str,
    pub cultural: &'static str,
    pub professional: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatStrings {
    pub graduation_mark: &'static str,
    pub average_duration: &'static str,
    pub years: &'static str,
    pub parent_graduate: &'static str,
    pub no_parent_graduate: &'static str,
    pub mobility: &'static str,
    pub mobility_text: &'static str,
    pub re_enrol: &'static str,
    pub average_age: &'static str,
    pub enrolled_within: &'static str,
    pub workload: &'static str,
    pub diploma_grade: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelStrings {
    pub male: &'static str,
    pub female: &'static str,
    pub in_course: &'static str,
    pub decidedly_yes: &'static str,
    pub more_yes: &'static str,
    pub more_no: &'static str,
    pub decidedly_no: &'static str,
    pub usage: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlStrings {
    /// Tooltip of the theme button while the light theme is active
    pub dark_theme: &'static str,
    /// Tooltip of the theme button while the dark theme is active
    pub light_theme: &'static str,
    /// Label of the locale button: the name of the *other* language
    pub switch_locale: &'static str,
}

impl TabStrings {
    pub fn label(&self, tab: crate::state::Tab) -> &'static str {
        use crate::state::Tab;
        match tab {
            Tab::Overview => self.overview,
            Tab::Studies => self.studies,
            Tab::Experience => self.experience,
            Tab::Future => self.future,
        }
    }
}

/// Dictionary for `locale`
pub fn strings(locale: Locale) -> &'static Strings {
    match locale {
        Locale::It => &IT,
        Locale::En => &EN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Tab;

    #[test]
    fn test_lookup_by_locale() {
        assert_eq!(strings(Locale::It).tabs.studies, "Riuscita negli Studi");
        assert_eq!(strings(Locale::En).tabs.studies, "Academic Performance");
        assert_eq!(strings(Locale::It).labels.male, "Uomini");
        assert_eq!(strings(Locale::En).labels.male, "Male");
    }

    #[test]
    fn test_locale_button_names_other_language() {
        assert_eq!(strings(Locale::It).controls.switch_locale, "ENGLISH");
        assert_eq!(strings(Locale::En).controls.switch_locale, "ITALIANO");
    }

    #[test]
    fn test_every_tab_has_a_label() {
        for locale in Locale::ALL {
            for tab in Tab::ALL {
                assert!(!strings(locale).tabs.label(tab).is_empty());
            }
        }
    }

    #[test]
    fn test_text_same() {
        let text = Text::same("Internet");
        assert_eq!(text.get(Locale::It), text.get(Locale::En));
    }
}
