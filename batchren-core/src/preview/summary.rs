use super::{BatchPreview, PreviewStatus};
use nu_ansi_term::Color;
use std::fmt::Write;

/// Render the preview as one line per planned rename
pub fn render_summary(preview: &BatchPreview, use_color: bool) -> String {
    let mut output = String::new();

    writeln!(
        output,
        "[DRY RUN] {} in {}",
        preview.operation,
        preview.directory.display()
    )
    .unwrap();

    for row in &preview.rows {
        let line = match &row.status {
            PreviewStatus::Rename => format!("  {} → {}", row.from, row.to),
            PreviewStatus::Collision => format!(
                "  {} → {} (skip: '{}' already exists)",
                row.from, row.to, row.to
            ),
            PreviewStatus::Invalid { reason } => {
                format!("  {} → {} (skip: {})", row.from, row.to, reason)
            },
        };

        if use_color && row.status != PreviewStatus::Rename {
            writeln!(output, "{}", Color::Yellow.paint(&line)).unwrap();
        } else {
            writeln!(output, "{line}").unwrap();
        }
    }

    writeln!(
        output,
        "Would rename: {} files, skip: {}",
        preview.ready(),
        preview.collisions() + preview.invalid()
    )
    .unwrap();

    output
}
