use itertools::Itertools;
use std::io::Write;

use crate::labels::{LabelRequest, LabelResult};

pub fn format_label(label: &LabelResult) -> String {
    let mut line = format!("- {}: {:.2}%", label.name, label.confidence);
    if !label.parents.is_empty() {
        line.push_str(&format!(" (parents: {})", label.parents.iter().join(", ")));
    }
    line
}

/// Writes the report for `labels` in the order given.
pub fn write_report<W: Write>(
    out: &mut W,
    request: &LabelRequest,
    labels: &[LabelResult],
) -> std::io::Result<()> {
    if labels.is_empty() {
        return writeln!(out, "No labels found.");
    }

    writeln!(out, "Labels for {}:", request.location())?;
    for label in labels {
        writeln!(out, "{}", format_label(label))?;
    }
    Ok(())
}
