//! Publication date extraction.
//!
//! Runs over the raw HTML rather than the details blob: the date often
//! sits outside the detail containers.

use regex::Regex;
use std::sync::LazyLock;

const MONTH_NAMES: &str =
    "janeiro|fevereiro|março|abril|maio|junho|julho|agosto|setembro|outubro|novembro|dezembro";

/// Bare day-month-year first, then the "de ... de" long form.
static DATE_RES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(&format!(r"(?i)(\d{{1,2}})\s+({MONTH_NAMES})\s+(\d{{4}})")).unwrap(),
        Regex::new(&format!(
            r"(?i)(\d{{1,2}})\s+de\s+({MONTH_NAMES})\s+de\s+(\d{{4}})"
        ))
        .unwrap(),
    ]
});

const MONTHS: &[(&str, &str)] = &[
    ("janeiro", "01"),
    ("fevereiro", "02"),
    ("março", "03"),
    ("abril", "04"),
    ("maio", "05"),
    ("junho", "06"),
    ("julho", "07"),
    ("agosto", "08"),
    ("setembro", "09"),
    ("outubro", "10"),
    ("novembro", "11"),
    ("dezembro", "12"),
];

fn month_number(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    MONTHS.iter().find(|(n, _)| *n == lower).map(|(_, num)| *num)
}

/// Publication date normalized to `YYYY-MM-DD`, zero-padded day, month
/// mapped through the fixed 12-entry table. First matching pattern wins.
pub fn extract_published_date(html: &str) -> Option<String> {
    for re in DATE_RES.iter() {
        if let Some(caps) = re.captures(html) {
            let day = format!("{:0>2}", &caps[1]);
            let month = month_number(&caps[2])?;
            let year = &caps[3];
            return Some(format!("{}-{}-{}", year, month, day));
        }
    }

    None
}
