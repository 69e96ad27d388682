//! Code snippet normalization.

/// Dedent a code snippet relative to its first line.
///
/// The first line is kept as is (it starts right after the comment). Every
/// other line loses the run of leading spaces shared by all non-blank lines
/// after the first; blank lines lose the same number of characters, or become
/// empty when shorter. Single-line input is returned unchanged.
pub fn format_code(code: &str) -> String {
    let lines: Vec<&str> = code.split('\n').collect();
    if lines.len() <= 1 {
        return code.to_string();
    }

    let rest = &lines[1..];
    let width = common_indent(rest);
    if width == 0 {
        return code.to_string();
    }

    let mut out = String::with_capacity(code.len());
    out.push_str(lines[0]);
    for line in rest {
        out.push('\n');
        out.push_str(skip_chars(line, width));
    }
    out
}

/// Widest column at which every non-blank line still has a space.
///
/// With only blank lines the width is capped at the longest of them so they
/// all end up empty.
fn common_indent(lines: &[&str]) -> usize {
    let limit = lines.iter().map(|l| l.len()).max().unwrap_or(0);
    let mut width = 0;
    while width < limit {
        let aligned = lines
            .iter()
            .filter(|l| !l.trim().is_empty())
            .all(|l| l.as_bytes().get(width) == Some(&b' '));
        if !aligned {
            break;
        }
        width += 1;
    }
    width
}

fn skip_chars(line: &str, n: usize) -> &str {
    match line.char_indices().nth(n) {
        Some((i, _)) => &line[i..],
        None => "",
    }
}
