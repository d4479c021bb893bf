//! Plain-text rendering of a `Page`, used by the `render` command

use std::fmt;

use super::cards::{Block, Card};
use super::chart::ChartSpec;
use super::format;
use super::Page;

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = &self.header;
        writeln!(f, "{}", header.title)?;
        writeln!(f, "{}{} <{}>", header.subtitle, header.source.label, header.source.href)?;
        writeln!(
            f,
            "[{} {}] [{} {}]",
            header.theme_toggle.icon,
            header.theme_toggle.title,
            header.locale_toggle.icon,
            header.locale_toggle.label
        )?;
        writeln!(f)?;

        writeln!(f, "{}", header.cohort.heading)?;
        for row in &header.cohort.rows {
            writeln!(f, "  {}: {}", row.label, row.value)?;
        }
        writeln!(f)?;

        let tabs: Vec<String> = self
            .tabs
            .iter()
            .map(|t| {
                if t.active {
                    format!("[{}]", t.label)
                } else {
                    t.label.to_string()
                }
            })
            .collect();
        writeln!(f, "{}", tabs.join(" | "))?;

        for card in &self.cards {
            writeln!(f)?;
            write!(f, "{}", card)?;
        }

        writeln!(f)?;
        writeln!(f, "{}", self.footer.text())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.icon.glyph(), self.title.to_uppercase())?;
        for block in &self.blocks {
            write_block(f, block, 1)?;
        }
        Ok(())
    }
}

fn write_block(f: &mut fmt::Formatter<'_>, block: &Block, depth: usize) -> fmt::Result {
    let pad = "  ".repeat(depth);
    match block {
        Block::Chart(chart) => write_chart(f, chart, &pad),
        Block::Banner { text } => writeln!(f, "{}{}", pad, text),
        Block::Callout { heading, text } => {
            writeln!(f, "{}{}", pad, heading)?;
            writeln!(f, "{}  {}", pad, text)
        }
        Block::Figures { figures } => {
            for figure in figures {
                match figure.unit {
                    Some(unit) => writeln!(f, "{}{}: {} {}", pad, figure.label, figure.value, unit)?,
                    None => writeln!(f, "{}{}: {}", pad, figure.label, figure.value)?,
                }
            }
            Ok(())
        }
        Block::Breakdown { heading, rows } => {
            writeln!(f, "{}{}", pad, heading)?;
            for row in rows {
                writeln!(f, "{}  {}: {}", pad, row.label, row.value)?;
            }
            Ok(())
        }
        Block::Headline { label, value, suffix } => {
            writeln!(f, "{}{}: {}{}", pad, label, value, suffix.unwrap_or(""))
        }
        Block::Panel { heading, blocks } => {
            writeln!(f, "{}{}", pad, heading)?;
            for inner in blocks {
                write_block(f, inner, depth + 1)?;
            }
            Ok(())
        }
        Block::Legend { entries } => {
            for entry in entries {
                writeln!(f, "{}{}: {}", pad, entry.label, entry.value)?;
            }
            Ok(())
        }
        Block::Progress { heading, rows } => {
            writeln!(f, "{}{}", pad, heading)?;
            for row in rows {
                writeln!(f, "{}  {}: {}", pad, row.label, row.text)?;
            }
            Ok(())
        }
        Block::Facility(panel) => {
            writeln!(f, "{}{} {} ({})", pad, panel.icon.glyph(), panel.name, panel.usage)?;
            for note in &panel.notes {
                writeln!(f, "{}  {}", pad, note)?;
            }
            Ok(())
        }
    }
}

fn write_chart(f: &mut fmt::Formatter<'_>, chart: &ChartSpec, pad: &str) -> fmt::Result {
    match chart {
        ChartSpec::Pie(pie) => {
            for (depth, ring) in pie.rings.iter().enumerate() {
                let marker = if depth == 0 { "●" } else { "○" };
                for slice in &ring.slices {
                    writeln!(f, "{}{} {}", pad, marker, format::labelled_percent(&slice.label, slice.value))?;
                }
            }
            Ok(())
        }
        ChartSpec::Bar(bar) => {
            for item in &bar.bars {
                writeln!(f, "{}▇ {}", pad, format::labelled_percent(&item.label, item.value))?;
            }
            Ok(())
        }
        ChartSpec::StackedBar(stacked) => {
            for (i, category) in stacked.categories.iter().enumerate() {
                let parts: Vec<String> = stacked
                    .series
                    .iter()
                    .filter_map(|s| s.values.get(i).map(|v| format::percent(*v)))
                    .collect();
                writeln!(f, "{}▇ {}: {}", pad, category, parts.join(" / "))?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dashboard::Page;
    use crate::dataset::DATASET;
    use crate::state::{Location, ViewState};

    fn render(url: &str) -> String {
        Page::build(&ViewState::from_location(&Location::parse(url)), &DATASET).to_string()
    }

    #[test]
    fn test_default_text_page() {
        let text = render("/");
        assert!(text.starts_with("Laureati in Informatica (L-31) - 2024\n"));
        assert!(text.contains("[Anagrafica & Sociale] | Riuscita negli Studi"));
        assert!(text.contains("● Uomini: 85.5%"));
        assert!(text.contains("● Donne: 14.5%"));
        assert!(text.contains("Numero di laureati: 4.171"));
        assert!(text.trim_end().ends_with("© 2024 AlmaLaurea - Profilo dei Laureati in Informatica"));
    }

    #[test]
    fn test_studies_text_page() {
        let text = render("/?lang=en#studies");
        assert!(text.contains("[Academic Performance]"));
        assert!(text.contains("Graduation Mark: 98.8"));
        assert!(text.contains("Average Duration: 4.5 years"));
        assert!(text.contains("Enrolled within 1y from diploma: 86.8%"));
    }

    #[test]
    fn test_experience_text_page() {
        let text = render("/?lang=en#experience");
        assert!(text.contains("▇ Program: 37.5% / 51.4% / 8.8% / 1%"));
        assert!(text.contains("Classrooms (Usage: 97.5%)"));
    }
}
