/// Escape LaTeX special characters so `text` can be embedded verbatim.
///
/// Each input character is replaced at most once; replacement text is never
/// scanned again, so the braces in `\textasciitilde{}` stay as written.
pub fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str(r"\&"),
            '%' => escaped.push_str(r"\%"),
            '$' => escaped.push_str(r"\$"),
            '#' => escaped.push_str(r"\#"),
            '_' => escaped.push_str(r"\_"),
            '{' => escaped.push_str(r"\{"),
            '}' => escaped.push_str(r"\}"),
            '~' => escaped.push_str(r"\textasciitilde{}"),
            '^' => escaped.push_str(r"\^{}"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Inverse of [`escape_latex`] for text it produced.
#[cfg(test)]
pub(crate) fn unescape_latex(text: &str) -> String {
    const SEQUENCES: [(&str, char); 9] = [
        (r"\textasciitilde{}", '~'),
        (r"\^{}", '^'),
        (r"\&", '&'),
        (r"\%", '%'),
        (r"\$", '$'),
        (r"\#", '#'),
        (r"\_", '_'),
        (r"\{", '{'),
        (r"\}", '}'),
    ];

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    'outer: while let Some(ch) = rest.chars().next() {
        if ch == '\\' {
            for (sequence, original) in SEQUENCES {
                if let Some(tail) = rest.strip_prefix(sequence) {
                    out.push(original);
                    rest = tail;
                    continue 'outer;
                }
            }
        }
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    out
}
