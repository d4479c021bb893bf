use super::*;

/// English bundle
pub const EN: Strings = Strings {
    title: "Computer Science Graduates (L-31) - 2024",
    subtitle: "Statistical analysis based on ",
    cohort: CohortStrings {
        heading: "Selected Cohort Details",
        graduates: "Number of graduates",
        questionnaires: "Completed questionnaires",
        response_rate: "Response rate",
    },
    tabs: TabStrings {
        overview: "Personal & Social",
        studies: "Academic Performance",
        experience: "Experience & Services",
        future: "Skills & Prospects",
    },
    cards: CardStrings {
        gender: "Gender",
        age: "Age at Graduation",
        social: "Social Background",
        regularity: "Degree Completion Time",
        diploma: "Upper Secondary Education",
        satisfaction: "Satisfaction (%)",
        facilities: "Facilities Assessment",
        skills: "IT Skills",
        prospects: "Prospects for Further Studies",
        enrolment: "Enrolment",
    },
    reasons: ReasonStrings {
        title: "Reason for choice",
        both: "Cultural & Professional",
        cultural: "Mainly Cultural",
        professional: "Mainly Professional",
    },
    stats: StatStrings {
        graduation_mark: "Graduation Mark",
        average_duration: "Average Duration",
        years: "years",
        parent_graduate: "At least one parent with a degree",
        no_parent_graduate: "No parent with a degree",
        mobility: "Geographical Mobility",
        mobility_text: "48.4% study in the same province, while 18.1% move from another region.",
        re_enrol: "Would enroll again?",
        average_age: "Average age: 24.5 years",
        enrolled_within: "Enrolled within 1y from diploma",
        workload: "Adequate workload",
        diploma_grade: "📊 Average diploma grade",
    },
    labels: LabelStrings {
        male: "Male",
        female: "Female",
        in_course: "Within prescribed time",
        decidedly_yes: "Definitely yes",
        more_yes: "More yes than no",
        more_no: "More no than yes",
        decidedly_no: "Definitely no",
        usage: "Usage",
    },
    controls: ControlStrings {
        dark_theme: "Dark theme",
        light_theme: "Light theme",
        switch_locale: "ITALIANO",
    },
    footer_profile: "Computer Science Graduates Profile",
};
