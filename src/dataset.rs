//! Report dataset
//!
//! The fixed statistics shown by the dashboard, copied from the AlmaLaurea
//! 2024 graduate profile for Computer Science (class L-31). Values are
//! literal report figures; nothing here is computed, and the presentation
//! layer receives the dataset as a read-only input.

use serde::Serialize;

use crate::i18n::Text;

/// Source report, linked from the header and the footer
pub const SOURCE_URL: &str = "https://www2.almalaurea.it/cgi-php/universita/statistiche/visualizza.php?anno=2024&corstipo=L&ateneo=tutti&facolta=tutti&gruppo=10&livello=1&area4=4&pa=tutti&classe=10026&postcorso=tutti&isstella=0&regione=tutti&dimensione=tutti&presiui=tutti&cs_univ=tutti&cs_facoa=tutti&cs_corsb=tutti&disaggregazione=&LANG=it&CONFIG=profilo";

/// Name of the report provider, used as link text
pub const SOURCE_NAME: &str = "AlmaLaurea";

/// Year of the report edition
pub const REPORT_YEAR: u16 = 2024;

/// A labelled percentage
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Share {
    pub label: Text,
    pub value: f64,
}

const fn share(it: &'static str, en: &'static str, value: f64) -> Share {
    Share {
        label: Text::new(it, en),
        value,
    }
}

const fn same(label: &'static str, value: f64) -> Share {
    Share {
        label: Text::same(label),
        value,
    }
}

/// Four-point agreement scale used by the satisfaction questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Agreement {
    DecidedlyYes,
    MoreYes,
    MoreNo,
    DecidedlyNo,
}

impl Agreement {
    pub const ALL: [Agreement; 4] = [
        Agreement::DecidedlyYes,
        Agreement::MoreYes,
        Agreement::MoreNo,
        Agreement::DecidedlyNo,
    ];
}

/// One satisfaction question broken down by agreement level
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgreementRow {
    pub category: Text,
    pub decidedly_yes: f64,
    pub more_yes: f64,
    pub more_no: f64,
    pub decidedly_no: f64,
}

impl AgreementRow {
    pub fn value(&self, level: Agreement) -> f64 {
        match level {
            Agreement::DecidedlyYes => self.decidedly_yes,
            Agreement::MoreYes => self.more_yes,
            Agreement::MoreNo => self.more_no,
            Agreement::DecidedlyNo => self.decidedly_no,
        }
    }
}

/// Facility evaluated in the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilityKind {
    Classrooms,
    Computers,
    Labs,
    Library,
}

/// A rating bar segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingSegment {
    pub level: Agreement,
    pub value: f64,
}

const fn segment(level: Agreement, value: f64) -> RatingSegment {
    RatingSegment { level, value }
}

/// Usage and rating of one facility
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Facility {
    pub kind: FacilityKind,
    pub name: Text,
    /// Share of graduates who used it
    pub usage: f64,
    pub ratings: &'static [RatingSegment],
    /// Summary figures printed under the rating bar
    pub notes: &'static [Share],
}

/// Cohort size and questionnaire coverage
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cohort {
    pub graduates: u32,
    pub questionnaires: u32,
    pub response_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenderSplit {
    pub male: f64,
    pub female: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParentalEducation {
    pub at_least_one_graduate: f64,
    pub no_graduate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnrolmentReasons {
    pub cultural_and_professional: f64,
    pub mainly_cultural: f64,
    pub mainly_professional: f64,
}

/// Degree completion time
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Completion {
    /// Graduated within the prescribed time
    pub in_course: f64,
    /// Years beyond the prescribed time
    pub late: &'static [Share],
}

/// Upper secondary school background
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiplomaBackground {
    /// School types (outer ring)
    pub types: &'static [Share],
    /// School tracks (inner ring)
    pub tracks: &'static [Share],
    /// Average diploma grade, out of 100
    pub average_grade: u32,
}

/// The whole report
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatDataset {
    pub cohort: Cohort,
    pub gender: GenderSplit,
    pub age_at_graduation: &'static [Share],
    pub parental_education: ParentalEducation,
    pub diploma: DiplomaBackground,
    pub completion: Completion,
    /// Average graduation mark, out of 110
    pub graduation_mark: f64,
    pub average_duration_years: f64,
    pub enrolment_reasons: EnrolmentReasons,
    pub enrolled_within_year: f64,
    pub satisfaction: &'static [AgreementRow],
    pub workload: AgreementRow,
    pub re_enrolment: &'static [Share],
    pub facilities: &'static [Facility],
    pub it_skills: &'static [Share],
    pub prospects: &'static [Share],
}

use Agreement::*;

/// AlmaLaurea 2024, Computer Science (L-31), all universities
pub static DATASET: StatDataset = StatDataset {
    cohort: Cohort {
        graduates: 4171,
        questionnaires: 3911,
        response_rate: 93.8,
    },
    gender: GenderSplit {
        male: 85.5,
        female: 14.5,
    },
    age_at_graduation: &[
        same("< 23", 41.3),
        same("23-24", 31.7),
        same("25-26", 14.3),
        same("27+", 12.7),
    ],
    parental_education: ParentalEducation {
        at_least_one_graduate: 28.9,
        no_graduate: 68.9,
    },
    diploma: DiplomaBackground {
        types: &[
            share("Liceale", "High School", 44.6),
            share("Tecnico", "Technical", 51.9),
            share("Professionale", "Vocational", 1.7),
            share("Estero", "Foreign", 1.7),
        ],
        tracks: &[
            share("Scientifico", "Scientific", 38.3),
            share("Classico", "Classical", 2.5),
            share("Linguistico", "Linguistic", 2.2),
            share("Scienze umane", "Human Sci.", 1.0),
            share("Artistico", "Arts", 0.6),
            share("Tec. Tecnologico", "Tech. Tech.", 40.5),
            share("Tec. Economico", "Tech. Econ.", 11.5),
            share("Professionale", "Vocational", 1.7),
            share("Estero", "Foreign", 1.7),
        ],
        average_grade: 85,
    },
    completion: Completion {
        in_course: 45.8,
        late: &[
            same("1y+", 23.0),
            same("2y+", 13.4),
            same("3y+", 7.2),
            same("4y+", 4.0),
            same("5y++", 6.5),
        ],
    },
    graduation_mark: 98.8,
    average_duration_years: 4.5,
    enrolment_reasons: EnrolmentReasons {
        cultural_and_professional: 51.1,
        mainly_cultural: 20.3,
        mainly_professional: 17.1,
    },
    enrolled_within_year: 86.8,
    satisfaction: &[
        AgreementRow {
            category: Text::new("Corso", "Program"),
            decidedly_yes: 37.5,
            more_yes: 51.4,
            more_no: 8.8,
            decidedly_no: 1.0,
        },
        AgreementRow {
            category: Text::new("Didattica", "Teaching"),
            decidedly_yes: 27.0,
            more_yes: 61.0,
            more_no: 9.4,
            decidedly_no: 1.0,
        },
        AgreementRow {
            category: Text::new("Docenti", "Teachers"),
            decidedly_yes: 22.1,
            more_yes: 63.5,
            more_no: 12.1,
            decidedly_no: 1.0,
        },
        AgreementRow {
            category: Text::new("Studenti", "Students"),
            decidedly_yes: 51.3,
            more_yes: 39.4,
            more_no: 6.4,
            decidedly_no: 1.5,
        },
    ],
    workload: AgreementRow {
        category: Text::new("Carico studio", "Workload"),
        decidedly_yes: 41.2,
        more_yes: 40.8,
        more_no: 14.2,
        decidedly_no: 2.8,
    },
    re_enrolment: &[
        share("Stesso corso/Ateneo", "Same course/University", 74.7),
        share("Altro corso/Ateneo", "Other course/University", 6.5),
        share("Stesso corso/Altro Ateneo", "Same course/Other University", 9.7),
        share("Altro corso/Altro Ateneo", "Other course/Other University", 4.0),
        share("Non si iscriverebbero", "No university", 3.8),
    ],
    facilities: &[
        Facility {
            kind: FacilityKind::Classrooms,
            name: Text::new("Aule", "Classrooms"),
            usage: 97.5,
            ratings: &[
                segment(DecidedlyYes, 27.3),
                segment(MoreYes, 52.0),
                segment(MoreNo, 18.0),
                segment(DecidedlyNo, 2.8),
            ],
            notes: &[
                share("Adeguate", "Adequate", 79.3),
                share("Inadeguate", "Inadequate", 20.8),
            ],
        },
        Facility {
            kind: FacilityKind::Computers,
            name: Text::same("PC"),
            usage: 86.4,
            ratings: &[segment(DecidedlyYes, 61.4), segment(DecidedlyNo, 38.6)],
            notes: &[
                share("In Numero Adeguato", "Adequate Number", 61.4),
                share("In Numero Inadeguato", "Inadequate Number", 38.6),
            ],
        },
        Facility {
            kind: FacilityKind::Labs,
            name: Text::same("Labs"),
            usage: 86.9,
            ratings: &[
                segment(DecidedlyYes, 28.9),
                segment(MoreYes, 48.9),
                segment(MoreNo, 19.3),
                segment(DecidedlyNo, 2.9),
            ],
            notes: &[share("Adeguati", "Adequate", 77.8)],
        },
        Facility {
            kind: FacilityKind::Library,
            name: Text::new("Biblioteca", "Library"),
            usage: 59.1,
            ratings: &[
                segment(DecidedlyYes, 44.3),
                segment(MoreYes, 49.8),
                segment(MoreNo, 4.4),
                segment(DecidedlyNo, 1.5),
            ],
            notes: &[share("Positivi", "Positive", 94.1)],
        },
    ],
    it_skills: &[
        share("Programmazione", "Programming", 92.6),
        same("Internet", 94.6),
        share("Sistemi Operativi", "Operating Systems", 85.7),
        share("Database", "Databases", 78.3),
        same("Web", 72.9),
        share("Reti", "Networks", 61.7),
    ],
    prospects: &[
        share("Magistrale", "Master's degree", 57.4),
        share("Lavoro", "Work", 33.8),
        share("Altro", "Other", 8.8),
    ],
};
