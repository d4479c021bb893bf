use super::*;

/// Italian bundle (default locale)
pub const IT: Strings = Strings {
    title: "Laureati in Informatica (L-31) - 2024",
    subtitle: "Analisi statistica basata sui dati ",
    cohort: CohortStrings {
        heading: "Dettagli Coorte Selezionata",
        graduates: "Numero di laureati",
        questionnaires: "Questionari compilati",
        response_rate: "Tasso di risposta",
    },
    tabs: TabStrings {
        overview: "Anagrafica & Sociale",
        studies: "Riuscita negli Studi",
        experience: "Esperienza & Servizi",
        future: "Skill & Prospettive",
    },
    cards: CardStrings {
        gender: "Genere",
        age: "Età alla laurea",
        social: "Origine Sociale",
        regularity: "Regolarità degli Studi",
        diploma: "Diploma di Provenienza",
        satisfaction: "Soddisfazione (%)",
        facilities: "Valutazione Strutture",
        skills: "Competenze Informatiche",
        prospects: "Prospettive Post-Laurea",
        enrolment: "Iscrizione",
    },
    reasons: ReasonStrings {
        title: "Motivazione scelta",
        both: "Culturale + Professionale",
        cultural: "Solo Culturale",
        professional: "Solo Professionale",
    },
    stats: StatStrings {
        graduation_mark: "Media Voto",
        average_duration: "Durata Media",
        years: "anni",
        parent_graduate: "Almeno un genitore laureato",
        no_parent_graduate: "Nessun genitore laureato",
        mobility: "Mobilità Geografica",
        mobility_text: "Il 48,4% studia nella propria provincia, mentre il 18,1% si sposta in un'altra regione.",
        re_enrol: "Si iscriverebbero di nuovo?",
        average_age: "Età media: 24,5 anni",
        enrolled_within: "Iscritti entro 1 anno dal diploma",
        workload: "Carico di studio adeguato",
        diploma_grade: "📊 Voto medio diploma",
    },
    labels: LabelStrings {
        male: "Uomini",
        female: "Donne",
        in_course: "In corso",
        decidedly_yes: "Decisamente sì",
        more_yes: "Più sì che no",
        more_no: "Più no che sì",
        decidedly_no: "Decisamente no",
        usage: "Utilizzo",
    },
    controls: ControlStrings {
        dark_theme: "Tema scuro",
        light_theme: "Tema chiaro",
        switch_locale: "ENGLISH",
    },
    footer_profile: "Profilo dei Laureati in Informatica",
};
