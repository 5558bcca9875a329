use std::fmt::Write;

use super::OutputFormatter;
use crate::error::RenderResult;
use crate::theme::Theme;
use crate::types::Row;

const TITLE: &str = "PodVolumeBackup";
const RULE_WIDTH: usize = 72;

pub struct PrettyFormatter;

fn rule(theme: Theme) -> String {
    theme.secondary(&"─".repeat(RULE_WIDTH))
}

fn write_block(out: &mut String, row: &Row, theme: Theme) -> std::fmt::Result {
    let label = |s: &str| theme.label(&format!("{:<11}", s));

    writeln!(out, "{} {}", label("Backup:"), theme.strong(&row.backup_name))?;
    writeln!(out, "{} {}", label("Pod:"), theme.value(&row.pod_name))?;
    writeln!(out, "{} {}", label("Namespace:"), theme.value(&row.pod_namespace))?;
    writeln!(out, "{} {}", label("Volume:"), theme.value(&row.volume))?;
    write!(out, "{} {}", label("Size:"), theme.value(row.size_display()))?;
    if let Some(bytes) = row.size_bytes {
        write!(out, " {}", theme.secondary(&format!("({} bytes)", bytes)))?;
    }
    writeln!(out)?;
    writeln!(out, "{} {}", label("Created:"), theme.value(row.created_display()))?;
    writeln!(out, "{} {}", label("Resource:"), theme.secondary(&row.resource_name))
}

impl OutputFormatter for PrettyFormatter {
    fn format(rows: &[Row], theme: Theme) -> RenderResult<String> {
        let mut out = String::new();
        writeln!(
            out,
            "{} {}",
            theme.title(TITLE),
            theme.secondary(&format!("({} items)", rows.len()))
        )?;

        for (i, row) in rows.iter().enumerate() {
            if i == 0 {
                writeln!(out, "{}", rule(theme))?;
            }
            write_block(&mut out, row, theme)?;
            if i + 1 < rows.len() {
                writeln!(out, "{}", rule(theme))?;
            }
        }
        Ok(out)
    }
}
