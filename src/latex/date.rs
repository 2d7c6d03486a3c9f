const MONTHS: [(&str, &str); 12] = [
    ("01", "Jan"),
    ("02", "Feb"),
    ("03", "Mar"),
    ("04", "Apr"),
    ("05", "May"),
    ("06", "Jun"),
    ("07", "Jul"),
    ("08", "Aug"),
    ("09", "Sep"),
    ("10", "Oct"),
    ("11", "Nov"),
    ("12", "Dec"),
];

/// Convert `YYYY-MM` into `Mon YYYY`.
///
/// Empty input stays empty and anything that is not exactly two dash
/// separated parts is returned unchanged. An unknown month code is kept as is.
pub fn format_date(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }

    let parts: Vec<&str> = date.split('-').collect();
    match parts.as_slice() {
        [year, month] => {
            let abbrev = MONTHS
                .iter()
                .find(|(code, _)| code == month)
                .map(|(_, name)| *name)
                .unwrap_or(*month);
            format!("{} {}", abbrev, year)
        }
        _ => date.to_string(),
    }
}
