//! Card sets per tab
//!
//! Each tab shows a fixed set of cards. A card is a title, an icon and an
//! ordered list of blocks; the builders below resolve every label for the
//! active locale and every value from the dataset.

use serde::Serialize;

use super::chart::{Bar, BarChart, ChartSpec, Orientation, PieChart, PieRing, Series, StackedBarChart};
use super::format;
use super::palette::{self, COLORS, COLUMN_COLOR, DIPLOMA_TRACK_COLORS, DIPLOMA_TYPE_COLORS, GENDER_COLORS, SKILL_COLOR, SOCIAL_COLORS};
use crate::dataset::{Agreement, AgreementRow, Facility, FacilityKind, Share, StatDataset};
use crate::i18n::{strings, Strings};
use crate::state::{Locale, Tab};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardId {
    Gender,
    Age,
    Social,
    Diploma,
    Regularity,
    Enrolment,
    Satisfaction,
    Facilities,
    Skills,
    Prospects,
}

impl CardId {
    /// Tab the card belongs to
    pub fn tab(self) -> Tab {
        match self {
            CardId::Gender | CardId::Age | CardId::Social | CardId::Diploma => Tab::Overview,
            CardId::Regularity | CardId::Enrolment => Tab::Studies,
            CardId::Satisfaction | CardId::Facilities => Tab::Experience,
            CardId::Skills | CardId::Prospects => Tab::Future,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Users,
    Clock,
    MapPin,
    Brain,
    GraduationCap,
    Info,
    Heart,
    Monitor,
    Microscope,
    BookOpen,
    Briefcase,
    Globe,
    ExternalLink,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Users => "👥",
            Icon::Clock => "🕒",
            Icon::MapPin => "📍",
            Icon::Brain => "🧠",
            Icon::GraduationCap => "🎓",
            Icon::Info => "ℹ️",
            Icon::Heart => "❤️",
            Icon::Monitor => "🖥️",
            Icon::Microscope => "🔬",
            Icon::BookOpen => "📖",
            Icon::Briefcase => "💼",
            Icon::Globe => "🌐",
            Icon::ExternalLink => "↗",
        }
    }
}

/// Label/value pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub label: String,
    pub value: String,
}

impl Row {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Big number with a small caption
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Figure {
    pub label: &'static str,
    pub value: String,
    pub unit: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub value: String,
    pub color: &'static str,
}

/// Thin progress bar with label and value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressRow {
    pub label: String,
    pub value: f64,
    pub text: String,
    pub color: &'static str,
    pub emphasized: bool,
}

/// One segment of a facility rating bar, width in percent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilityPanel {
    pub kind: FacilityKind,
    pub name: &'static str,
    pub icon: Icon,
    /// `"Usage: 97.5%"`
    pub usage: String,
    pub segments: Vec<Segment>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Chart(ChartSpec),
    /// Centered highlight line
    Banner { text: &'static str },
    Callout { heading: &'static str, text: &'static str },
    Figures { figures: Vec<Figure> },
    Breakdown { heading: &'static str, rows: Vec<Row> },
    Headline {
        label: &'static str,
        value: String,
        suffix: Option<&'static str>,
    },
    Panel { heading: &'static str, blocks: Vec<Block> },
    Legend { entries: Vec<LegendEntry> },
    Progress { heading: &'static str, rows: Vec<ProgressRow> },
    Facility(FacilityPanel),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub id: CardId,
    pub title: &'static str,
    pub icon: Icon,
    pub blocks: Vec<Block>,
}

impl Card {
    /// Every chart on the card, including the ones nested in panels
    pub fn charts(&self) -> Vec<&ChartSpec> {
        fn collect<'a>(blocks: &'a [Block], out: &mut Vec<&'a ChartSpec>) {
            for block in blocks {
                match block {
                    Block::Chart(chart) => out.push(chart),
                    Block::Panel { blocks, .. } => collect(blocks, out),
                    _ => {}
                }
            }
        }
        let mut out = Vec::new();
        collect(&self.blocks, &mut out);
        out
    }
}

/// Cards shown on `tab`, in display order
pub fn cards_for(tab: Tab, locale: Locale, data: &StatDataset) -> Vec<Card> {
    let t = strings(locale);
    match tab {
        Tab::Overview => vec![
            gender(t, data),
            age(t, data),
            social(t, data),
            diploma(t, locale, data),
        ],
        Tab::Studies => vec![regularity(t, data), enrolment(t, data)],
        Tab::Experience => vec![satisfaction(t, locale, data), facilities(t, locale, data)],
        Tab::Future => vec![skills(t, locale, data), prospects(t, locale, data)],
    }
}

fn ring(shares: &[Share], colors: &[&'static str], locale: Locale) -> Vec<(String, f64, &'static str)> {
    shares
        .iter()
        .enumerate()
        .map(|(i, s)| (s.label.get(locale).to_string(), s.value, colors[i % colors.len()]))
        .collect()
}

fn gender(t: &Strings, data: &StatDataset) -> Card {
    let slices = vec![
        (t.labels.male.to_string(), data.gender.male, GENDER_COLORS[0]),
        (t.labels.female.to_string(), data.gender.female, GENDER_COLORS[1]),
    ];
    Card {
        id: CardId::Gender,
        title: t.cards.gender,
        icon: Icon::Users,
        blocks: vec![Block::Chart(ChartSpec::Pie(PieChart {
            rings: vec![PieRing::labelled(slices, 50.0, 70.0).padding_angle(5.0)],
            height: 240,
        }))],
    }
}

fn age(t: &Strings, data: &StatDataset) -> Card {
    let items = data
        .age_at_graduation
        .iter()
        .map(|s| (s.label.it.to_string(), s.value))
        .collect();
    Card {
        id: CardId::Age,
        title: t.cards.age,
        icon: Icon::Clock,
        blocks: vec![
            Block::Chart(ChartSpec::Bar(BarChart::columns(items, COLUMN_COLOR, 200))),
            Block::Banner {
                text: t.stats.average_age,
            },
        ],
    }
}

fn social(t: &Strings, data: &StatDataset) -> Card {
    let parents = data.parental_education;
    let bars = vec![
        Bar {
            label: t.stats.parent_graduate.to_string(),
            value: parents.at_least_one_graduate,
            color: SOCIAL_COLORS[0],
        },
        Bar {
            label: t.stats.no_parent_graduate.to_string(),
            value: parents.no_graduate,
            color: SOCIAL_COLORS[1],
        },
    ];
    Card {
        id: CardId::Social,
        title: t.cards.social,
        icon: Icon::MapPin,
        blocks: vec![
            Block::Chart(ChartSpec::Bar(BarChart::labelled_rows(bars, 176))),
            Block::Callout {
                heading: t.stats.mobility,
                text: t.stats.mobility_text,
            },
        ],
    }
}

fn diploma(t: &Strings, locale: Locale, data: &StatDataset) -> Card {
    let background = data.diploma;
    Card {
        id: CardId::Diploma,
        title: t.cards.diploma,
        icon: Icon::Brain,
        blocks: vec![
            Block::Chart(ChartSpec::Pie(PieChart {
                rings: vec![
                    PieRing::labelled(ring(background.types, &DIPLOMA_TYPE_COLORS, locale), 50.0, 80.0),
                    PieRing::plain(ring(background.tracks, &DIPLOMA_TRACK_COLORS, locale), 0.0, 48.0),
                ],
                height: 256,
            })),
            Block::Headline {
                label: t.stats.diploma_grade,
                value: background.average_grade.to_string(),
                suffix: Some("/100"),
            },
        ],
    }
}

fn regularity(t: &Strings, data: &StatDataset) -> Card {
    let completion = data.completion;
    let mut items = vec![(t.labels.in_course.to_string(), completion.in_course)];
    items.extend(completion.late.iter().map(|s| (s.label.it.to_string(), s.value)));
    Card {
        id: CardId::Regularity,
        title: t.cards.regularity,
        icon: Icon::GraduationCap,
        blocks: vec![
            Block::Chart(ChartSpec::Bar(BarChart::columns(items, COLUMN_COLOR, 208))),
            Block::Figures {
                figures: vec![
                    Figure {
                        label: t.stats.graduation_mark,
                        value: format::number(data.graduation_mark),
                        unit: None,
                    },
                    Figure {
                        label: t.stats.average_duration,
                        value: format::number(data.average_duration_years),
                        unit: Some(t.stats.years),
                    },
                ],
            },
        ],
    }
}

fn enrolment(t: &Strings, data: &StatDataset) -> Card {
    let reasons = data.enrolment_reasons;
    Card {
        id: CardId::Enrolment,
        title: t.cards.enrolment,
        icon: Icon::Info,
        blocks: vec![
            Block::Breakdown {
                heading: t.reasons.title,
                rows: vec![
                    Row::new(t.reasons.both, format::percent(reasons.cultural_and_professional)),
                    Row::new(t.reasons.cultural, format::percent(reasons.mainly_cultural)),
                    Row::new(t.reasons.professional, format::percent(reasons.mainly_professional)),
                ],
            },
            Block::Headline {
                label: t.stats.enrolled_within,
                value: format::percent(data.enrolled_within_year),
                suffix: None,
            },
        ],
    }
}

fn agreement_label(t: &Strings, level: Agreement) -> &'static str {
    match level {
        Agreement::DecidedlyYes => t.labels.decidedly_yes,
        Agreement::MoreYes => t.labels.more_yes,
        Agreement::MoreNo => t.labels.more_no,
        Agreement::DecidedlyNo => t.labels.decidedly_no,
    }
}

fn stacked(t: &Strings, locale: Locale, rows: &[AgreementRow], decorated: bool, height: u32) -> StackedBarChart {
    StackedBarChart {
        categories: rows.iter().map(|r| r.category.get(locale).to_string()).collect(),
        series: Agreement::ALL
            .iter()
            .map(|&level| Series {
                name: agreement_label(t, level).to_string(),
                color: palette::agreement_color(level),
                values: rows.iter().map(|r| r.value(level)).collect(),
            })
            .collect(),
        orientation: Orientation::Horizontal,
        domain_max: 100.0,
        show_axes: decorated,
        show_legend: decorated,
        height,
    }
}

fn satisfaction(t: &Strings, locale: Locale, data: &StatDataset) -> Card {
    let workload = data.workload;
    let legend = Agreement::ALL
        .iter()
        .map(|&level| LegendEntry {
            label: agreement_label(t, level),
            value: format::percent(workload.value(level)),
            color: palette::agreement_color(level),
        })
        .collect();
    let re_enrol = data
        .re_enrolment
        .iter()
        .enumerate()
        .map(|(i, s)| ProgressRow {
            label: s.label.get(locale).to_string(),
            value: s.value,
            text: format::percent(s.value),
            color: palette::RE_ENROL_COLOR,
            emphasized: i == 0,
        })
        .collect();

    Card {
        id: CardId::Satisfaction,
        title: t.cards.satisfaction,
        icon: Icon::Heart,
        blocks: vec![
            Block::Chart(ChartSpec::StackedBar(stacked(t, locale, data.satisfaction, true, 224))),
            Block::Panel {
                heading: t.stats.workload,
                blocks: vec![
                    Block::Chart(ChartSpec::StackedBar(stacked(
                        t,
                        locale,
                        std::slice::from_ref(&data.workload),
                        false,
                        40,
                    ))),
                    Block::Legend { entries: legend },
                ],
            },
            Block::Progress {
                heading: t.stats.re_enrol,
                rows: re_enrol,
            },
        ],
    }
}

fn facility_icon(kind: FacilityKind) -> Icon {
    match kind {
        FacilityKind::Classrooms => Icon::Users,
        FacilityKind::Computers => Icon::Monitor,
        FacilityKind::Labs => Icon::Microscope,
        FacilityKind::Library => Icon::BookOpen,
    }
}

fn facility_panel(t: &Strings, locale: Locale, facility: &Facility) -> FacilityPanel {
    FacilityPanel {
        kind: facility.kind,
        name: facility.name.get(locale),
        icon: facility_icon(facility.kind),
        usage: format::labelled_percent(t.labels.usage, facility.usage),
        segments: facility
            .ratings
            .iter()
            .map(|r| Segment {
                value: r.value,
                color: palette::agreement_color(r.level),
            })
            .collect(),
        notes: facility
            .notes
            .iter()
            .map(|n| format::labelled_percent(n.label.get(locale), n.value))
            .collect(),
    }
}

fn facilities(t: &Strings, locale: Locale, data: &StatDataset) -> Card {
    Card {
        id: CardId::Facilities,
        title: t.cards.facilities,
        icon: Icon::Monitor,
        blocks: data
            .facilities
            .iter()
            .map(|f| Block::Facility(facility_panel(t, locale, f)))
            .collect(),
    }
}

fn skills(t: &Strings, locale: Locale, data: &StatDataset) -> Card {
    let items = data
        .it_skills
        .iter()
        .map(|s| (s.label.get(locale).to_string(), s.value))
        .collect();
    Card {
        id: CardId::Skills,
        title: t.cards.skills,
        icon: Icon::Monitor,
        blocks: vec![Block::Chart(ChartSpec::Bar(
            BarChart::columns(items, SKILL_COLOR, 256).label_angle(-45.0),
        ))],
    }
}

fn prospects(t: &Strings, locale: Locale, data: &StatDataset) -> Card {
    Card {
        id: CardId::Prospects,
        title: t.cards.prospects,
        icon: Icon::Briefcase,
        blocks: vec![Block::Chart(ChartSpec::Pie(PieChart {
            rings: vec![PieRing::labelled(ring(data.prospects, &COLORS, locale), 0.0, 65.0)],
            height: 192,
        }))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DATASET;

    fn ids(tab: Tab) -> Vec<CardId> {
        cards_for(tab, Locale::It, &DATASET).iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_card_sets_per_tab() {
        assert_eq!(
            ids(Tab::Overview),
            vec![CardId::Gender, CardId::Age, CardId::Social, CardId::Diploma]
        );
        assert_eq!(ids(Tab::Studies), vec![CardId::Regularity, CardId::Enrolment]);
        assert_eq!(ids(Tab::Experience), vec![CardId::Satisfaction, CardId::Facilities]);
        assert_eq!(ids(Tab::Future), vec![CardId::Skills, CardId::Prospects]);
    }

    #[test]
    fn test_cards_belong_to_their_tab() {
        for tab in Tab::ALL {
            for card in cards_for(tab, Locale::En, &DATASET) {
                assert_eq!(card.id.tab(), tab);
            }
        }
    }

    #[test]
    fn test_gender_slices_localized() {
        let card = &cards_for(Tab::Overview, Locale::It, &DATASET)[0];
        let ChartSpec::Pie(pie) = card.charts()[0] else {
            panic!("gender card should hold a pie");
        };
        let captions: Vec<_> = pie.rings[0]
            .slices
            .iter()
            .filter_map(|s| s.caption.as_deref())
            .collect();
        assert_eq!(captions, vec!["Uomini: 85.5%", "Donne: 14.5%"]);
        assert_eq!(pie.rings[0].padding_angle, 5.0);
    }

    #[test]
    fn test_diploma_rings() {
        let card = &cards_for(Tab::Overview, Locale::En, &DATASET)[3];
        let ChartSpec::Pie(pie) = card.charts()[0] else {
            panic!("diploma card should hold a pie");
        };
        assert_eq!(pie.rings.len(), 2);
        assert_eq!(pie.rings[0].slices[0].caption.as_deref(), Some("High School: 44.6%"));
        assert_eq!(pie.rings[1].slices.len(), 9);
        assert!(pie.rings[1].slices.iter().all(|s| s.caption.is_none()));
        assert!(card.blocks.contains(&Block::Headline {
            label: "📊 Average diploma grade",
            value: "85".to_string(),
            suffix: Some("/100"),
        }));
    }

    #[test]
    fn test_regularity_columns_and_figures() {
        let card = &cards_for(Tab::Studies, Locale::En, &DATASET)[0];
        let ChartSpec::Bar(bar) = card.charts()[0] else {
            panic!("regularity card should hold a bar chart");
        };
        let labels: Vec<_> = bar.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Within prescribed time", "1y+", "2y+", "3y+", "4y+", "5y++"]);
        assert_eq!(bar.bars[1].value, 23.0);

        let Block::Figures { figures } = &card.blocks[1] else {
            panic!("expected figures");
        };
        assert_eq!(figures[0].value, "98.8");
        assert_eq!(figures[1].value, "4.5");
        assert_eq!(figures[1].unit, Some("years"));
    }

    #[test]
    fn test_satisfaction_stack() {
        let card = &cards_for(Tab::Experience, Locale::It, &DATASET)[0];
        let charts = card.charts();
        assert_eq!(charts.len(), 2);
        let ChartSpec::StackedBar(main) = charts[0] else {
            panic!("expected stacked bars");
        };
        assert_eq!(main.categories, vec!["Corso", "Didattica", "Docenti", "Studenti"]);
        assert_eq!(main.series[0].name, "Decisamente sì");
        assert_eq!(main.series[0].values, vec![37.5, 27.0, 22.1, 51.3]);
        let ChartSpec::StackedBar(workload) = charts[1] else {
            panic!("expected workload bar");
        };
        assert!(!workload.show_axes);
        assert!((workload.stack_total(0) - 99.0).abs() < 1e-9);
    }

    #[test]
    fn test_re_enrol_first_row_emphasized() {
        let card = &cards_for(Tab::Experience, Locale::En, &DATASET)[0];
        let Some(Block::Progress { rows, .. }) = card.blocks.last() else {
            panic!("expected progress block");
        };
        assert_eq!(rows.len(), 5);
        assert!(rows[0].emphasized);
        assert!(rows[1..].iter().all(|r| !r.emphasized));
        assert_eq!(rows[3].text, "4%");
    }

    #[test]
    fn test_facility_panels() {
        let card = &cards_for(Tab::Experience, Locale::It, &DATASET)[1];
        let panels: Vec<_> = card
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Facility(p) => Some(p),
                _ => None,
            })
            .collect();
        assert_eq!(panels.len(), 4);
        assert_eq!(panels[0].name, "Aule");
        assert_eq!(panels[0].usage, "Utilizzo: 97.5%");
        assert_eq!(panels[0].notes, vec!["Adeguate: 79.3%", "Inadeguate: 20.8%"]);
        assert_eq!(panels[1].segments.len(), 2);
        assert_eq!(panels[1].segments[1].color, "#ef4444");
        assert_eq!(panels[3].icon, Icon::BookOpen);
    }

    #[test]
    fn test_future_cards() {
        let cards = cards_for(Tab::Future, Locale::En, &DATASET);
        let ChartSpec::Bar(skills) = cards[0].charts()[0] else {
            panic!("expected skills bars");
        };
        assert_eq!(skills.label_angle, -45.0);
        assert_eq!(skills.bars[1].label, "Internet");

        let ChartSpec::Pie(pie) = cards[1].charts()[0] else {
            panic!("expected prospects pie");
        };
        assert_eq!(pie.rings[0].slices[0].caption.as_deref(), Some("Master's degree: 57.4%"));
        assert!((pie.rings[0].total() - 100.0).abs() < 1e-9);
    }
}
