/// One source line split into its parts. Borrowed from the input line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedLine<'a> {
    pub label: Option<&'a str>,
    pub command: Option<&'a str>,
    /// Raw operand tokens, separators still attached (`"R1,"`).
    pub arguments: Vec<&'a str>,
}

/// Parse one line of assembly.
///
/// Returns `None` for blank and comment-only lines. A label-only line
/// yields a result with `command: None`.
pub fn parse_line(line: &str) -> Option<ParsedLine<'_>> {
    let s = match line.find('#') {
        Some(p) => &line[..p],
        None => line,
    };
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let (label, rest) = match s.split_once(':') {
        Some((l, r)) => {
            let l = l.trim();
            ((!l.is_empty()).then_some(l), r.trim())
        }
        None => (None, s),
    };

    let mut parts = rest.split_whitespace();
    let Some(command) = parts.next() else {
        return Some(ParsedLine { label, command: None, arguments: Vec::new() });
    };

    Some(ParsedLine { label, command: Some(command), arguments: parts.collect() })
}
