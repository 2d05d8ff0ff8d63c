use snafu::Snafu;

/// Connector glyphs that introduce an entry name. The ASCII forms show up in
/// trees produced with `tree --charset=ascii` or typed by hand.
const CONNECTORS: [&str; 5] = ["├──", "└──", "|--", "`--", "+--"];

/// A line split into its inferred depth and the entry name that follows the
/// prefix. Depth 0 is a root entry with no prefix at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePrefix<'a> {
    pub depth: usize,
    pub name: &'a str,
}

#[derive(Debug, Snafu)]
#[snafu(display("Line prefix mixes box-drawing glyphs in an unrecognized way"))]
pub struct UnrecognizedPrefixError;

/// Infers the nesting depth of a line from its leading connector and indent
/// segments.
///
/// The prefix is scanned left to right as a sequence of units: a connector
/// (`├──`, `└──`, or an ASCII fallback) terminates the scan, a vertical
/// guide (`│` plus up to three spaces) or a four-space indent continues it.
/// A short run of spaces directly before a glyph is alignment slop and does
/// not count as a unit, which keeps two-space-indented trees parseable.
pub fn split_prefix(line: &str) -> Result<LinePrefix<'_>, UnrecognizedPrefixError> {
    let mut rest = line;
    let mut depth = 0;

    loop {
        if let Some(stripped) = strip_connector(rest) {
            depth += 1;
            return Ok(LinePrefix {
                depth,
                name: stripped.trim(),
            });
        }
        if let Some(stripped) = strip_guide(rest) {
            depth += 1;
            rest = stripped;
            continue;
        }
        if let Some(stripped) = rest.strip_prefix("    ") {
            depth += 1;
            rest = stripped;
            continue;
        }

        let trimmed = rest.trim_start_matches(' ');
        if trimmed.len() < rest.len() && starts_with_glyph_unit(trimmed) {
            rest = trimmed;
            continue;
        }
        if trimmed.starts_with(['├', '└', '│', '─']) {
            return Err(UnrecognizedPrefixError);
        }
        return Ok(LinePrefix {
            depth,
            name: trimmed.trim_end(),
        });
    }
}

fn strip_connector(rest: &str) -> Option<&str> {
    CONNECTORS
        .iter()
        .find_map(|connector| rest.strip_prefix(connector))
}

fn strip_guide(rest: &str) -> Option<&str> {
    let mut stripped = rest
        .strip_prefix('│')
        .or_else(|| rest.strip_prefix('|'))?;
    for _ in 0..3 {
        match stripped.strip_prefix(' ') {
            Some(inner) => stripped = inner,
            None => break,
        }
    }
    Some(stripped)
}

fn starts_with_glyph_unit(rest: &str) -> bool {
    strip_connector(rest).is_some() || rest.starts_with(['│', '|'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a/", 0, "a/")]
    #[case("plain name.txt", 0, "plain name.txt")]
    #[case("├── b.txt", 1, "b.txt")]
    #[case("└── c/", 1, "c/")]
    #[case("    └── d.txt", 2, "d.txt")]
    #[case("│   ├── x", 2, "x")]
    #[case("│   │   └── y", 3, "y")]
    #[case("        └── deep", 3, "deep")]
    #[case("|-- z", 1, "z")]
    #[case("`-- z", 1, "z")]
    #[case("+-- z", 1, "z")]
    #[case("|   `-- w", 2, "w")]
    fn infers_depth_and_name(#[case] line: &str, #[case] depth: usize, #[case] name: &str) {
        let prefix = split_prefix(line).unwrap();
        assert_eq!(prefix, LinePrefix { depth, name });
    }

    #[rstest]
    #[case("  └── squeezed", 1, "squeezed")]
    #[case("│  ├── narrow", 2, "narrow")]
    #[case("  │   └── shifted", 2, "shifted")]
    fn tolerates_narrow_indentation(#[case] line: &str, #[case] depth: usize, #[case] name: &str) {
        let prefix = split_prefix(line).unwrap();
        assert_eq!(prefix, LinePrefix { depth, name });
    }

    #[rstest]
    #[case("├─ broken")]
    #[case("─── dashes")]
    #[case("    ├─ nested broken")]
    fn rejects_malformed_glyph_runs(#[case] line: &str) {
        assert!(split_prefix(line).is_err());
    }

    #[test]
    fn connector_without_name_yields_empty_name() {
        let prefix = split_prefix("└──").unwrap();
        assert_eq!(prefix.depth, 1);
        assert_eq!(prefix.name, "");
    }

    #[test]
    fn trailing_spaces_are_not_part_of_the_name() {
        let prefix = split_prefix("├── file.txt   ").unwrap();
        assert_eq!(prefix.name, "file.txt");
    }
}
