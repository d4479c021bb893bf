//! Number formatting for labels

/// Shortest representation that round-trips: `23.0` → `23`, `85.5` → `85.5`
pub fn number(value: f64) -> String {
    format!("{}", value)
}

/// `85.5` → `85.5%`
pub fn percent(value: f64) -> String {
    format!("{}%", number(value))
}

/// `("Uomini", 85.5)` → `Uomini: 85.5%`
pub fn labelled_percent(label: &str, value: f64) -> String {
    format!("{}: {}", label, percent(value))
}

/// Thousands grouped with `.` as in the report: `4171` → `4.171`
pub fn grouped(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number() {
        assert_eq!(number(85.5), "85.5");
        assert_eq!(number(23.0), "23");
        assert_eq!(number(0.6), "0.6");
    }

    #[test]
    fn test_percent_labels() {
        assert_eq!(percent(4.0), "4%");
        assert_eq!(labelled_percent("Donne", 14.5), "Donne: 14.5%");
    }

    #[test]
    fn test_grouped() {
        assert_eq!(grouped(4171), "4.171");
        assert_eq!(grouped(3911), "3.911");
        assert_eq!(grouped(999), "999");
        assert_eq!(grouped(1234567), "1.234.567");
        assert_eq!(grouped(0), "0");
    }
}
