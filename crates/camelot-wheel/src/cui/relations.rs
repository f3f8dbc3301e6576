use std::io::Write;

use anyhow::{Context, Result};
use unicode_width::UnicodeWidthStr;

use camelot::{Key, Relation, harmonic_mixing};

/// Pad `s` on the right to `width` display columns.
fn pad_to_width(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// One heading line, then one aligned line per relation.
pub(crate) fn relation_lines(key: Key) -> Vec<String> {
    let mixing = harmonic_mixing(key);
    let label_width = Relation::ALL
        .iter()
        .map(|r| UnicodeWidthStr::width(r.label()))
        .max()
        .unwrap_or(0);
    let key_width = Key::all()
        .map(|k| UnicodeWidthStr::width(k.to_string().as_str()))
        .max()
        .unwrap_or(0);

    let mut lines = vec![format!(
        "{}{}",
        pad_to_width(&key.to_string(), key_width + 2),
        key.long_name()
    )];
    for (relation, target) in mixing.iter() {
        lines.push(format!(
            "  {}  {}{}",
            pad_to_width(relation.label(), label_width),
            pad_to_width(&target.to_string(), key_width + 2),
            target.long_name()
        ));
    }
    lines
}

pub fn print_relations(key: Key) -> Result<()> {
    let mut stdout = std::io::stdout();
    for line in relation_lines(key) {
        writeln!(stdout, "{}", line).context("failed to write to stdout")?;
    }
    Ok(())
}
