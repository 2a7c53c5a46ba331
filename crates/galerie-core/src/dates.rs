//! Date parsing and localized formatting
//!
//! The API is not consistent about date formats: plain ISO dates, RFC 3339
//! timestamps and naive timestamps all show up.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::i18n::Lang;

const MONTHS_FR: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const MONTHS_ES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
    "octubre", "noviembre", "diciembre",
];

/// Parse any of the date shapes the API emits
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%d/%m/%Y").ok()
}

fn month_name(lang: Lang, month0: u32) -> &'static str {
    let months = match lang {
        Lang::Fr => &MONTHS_FR,
        Lang::En => &MONTHS_EN,
        Lang::Es => &MONTHS_ES,
    };
    months[month0 as usize % 12]
}

/// Long date: `15 mars 2024`, `15 March 2024`, `15 de marzo de 2024`
pub fn format_date(date: NaiveDate, lang: Lang) -> String {
    let month = month_name(lang, date.month0());
    match lang {
        Lang::Fr => {
            if date.day() == 1 {
                format!("1er {} {}", month, date.year())
            } else {
                format!("{} {} {}", date.day(), month, date.year())
            }
        }
        Lang::En => format!("{} {} {}", date.day(), month, date.year()),
        Lang::Es => format!("{} de {} de {}", date.day(), month, date.year()),
    }
}

/// Format a raw API date, returning the raw string when it cannot be parsed
pub fn format_raw(raw: &str, lang: Lang) -> String {
    parse_date(raw)
        .map(|date| format_date(date, lang))
        .unwrap_or_else(|| raw.trim().to_string())
}

/// Format an optional date range
///
/// Same start and end collapse to a single date; a missing end yields only
/// the start. Returns `None` when neither bound is present.
pub fn format_range(start: Option<&str>, end: Option<&str>, lang: Lang) -> Option<String> {
    let start = start.map(str::trim).filter(|s| !s.is_empty());
    let end = end.map(str::trim).filter(|s| !s.is_empty());

    match (start, end) {
        (Some(start), Some(end)) => {
            if parse_date(start).is_some() && parse_date(start) == parse_date(end) {
                return Some(format_raw(start, lang));
            }
            let (from, to) = match lang {
                Lang::Fr => ("Du", "au"),
                Lang::En => ("From", "to"),
                Lang::Es => ("Del", "al"),
            };
            Some(format!(
                "{} {} {} {}",
                from,
                format_raw(start, lang),
                to,
                format_raw(end, lang)
            ))
        }
        (Some(start), None) => Some(format_raw(start, lang)),
        (None, Some(end)) => Some(format_raw(end, lang)),
        (None, None) => None,
    }
}

/// Birth and death years, e.g. `1881 – 1973`, or `1962 –` while alive
pub fn format_lifespan(birth: Option<&str>, death: Option<&str>) -> Option<String> {
    let year = |raw: Option<&str>| raw.and_then(parse_date).map(|date| date.year());
    match (year(birth), year(death)) {
        (Some(born), Some(died)) => Some(format!("{} – {}", born, died)),
        (Some(born), None) => Some(format!("{} –", born)),
        (None, Some(died)) => Some(format!("† {}", died)),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_shapes() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(parse_date("2024-03-15"), expected);
        assert_eq!(parse_date("2024-03-15T10:00:00Z"), expected);
        assert_eq!(parse_date("2024-03-15T10:00:00.123"), expected);
        assert_eq!(parse_date("2024-03-15 10:00:00"), expected);
        assert_eq!(parse_date("15/03/2024"), expected);
        assert_eq!(parse_date("soon"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_format_date_per_language() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(date, Lang::Fr), "15 mars 2024");
        assert_eq!(format_date(date, Lang::En), "15 March 2024");
        assert_eq!(format_date(date, Lang::Es), "15 de marzo de 2024");

        let first = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
        assert_eq!(format_date(first, Lang::Fr), "1er août 2024");
    }

    #[test]
    fn test_format_range() {
        assert_eq!(
            format_range(Some("2024-03-15"), Some("2024-04-02"), Lang::Fr).as_deref(),
            Some("Du 15 mars 2024 au 2 avril 2024")
        );
        assert_eq!(
            format_range(Some("2024-03-15"), Some("2024-03-15T18:00:00Z"), Lang::En).as_deref(),
            Some("15 March 2024")
        );
        assert_eq!(
            format_range(Some("2024-03-15"), None, Lang::En).as_deref(),
            Some("15 March 2024")
        );
        assert_eq!(format_range(None, Some(" "), Lang::Fr), None);
    }

    #[test]
    fn test_unparseable_dates_are_kept_verbatim() {
        assert_eq!(format_raw("printemps 2025", Lang::Fr), "printemps 2025");
    }

    #[test]
    fn test_lifespan() {
        assert_eq!(
            format_lifespan(Some("1881-10-25"), Some("1973-04-08")).as_deref(),
            Some("1881 – 1973")
        );
        assert_eq!(format_lifespan(Some("1962-01-01"), None).as_deref(), Some("1962 –"));
        assert_eq!(format_lifespan(None, None), None);
    }
}
