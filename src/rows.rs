use std::collections::HashSet;

use chrono::DateTime;
use serde_json::Value;
use tracing::{debug, trace};

use crate::types::{Row, RowFilter};
use crate::utils::{coerce_i64, contains_any_fold, equals_any, human_bytes};

/// Label Velero puts on every PodVolumeBackup, naming the owning Backup.
pub const BACKUP_NAME_LABEL: &str = "velero.io/backup-name";

const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn string_at<'a>(record: &'a Value, path: &[&str]) -> &'a str {
    path.iter()
        .try_fold(record, |v, key| v.get(key))
        .and_then(Value::as_str)
        .unwrap_or_default()
}

fn size_from_progress(record: &Value) -> Option<i64> {
    let progress = record.pointer("/status/progress")?.as_object()?;
    debug!(
        name = string_at(record, &["metadata", "name"]),
        progress = ?progress,
        "status.progress"
    );
    progress
        .get("totalBytes")
        .and_then(coerce_i64)
        .or_else(|| progress.get("bytesDone").and_then(coerce_i64))
}

/// Build a row from one raw PodVolumeBackup document. Never fails.
pub fn extract_row(record: &Value) -> Row {
    let size_bytes = size_from_progress(record);
    let created_rfc3339 = string_at(record, &["metadata", "creationTimestamp"]).to_string();
    let created = match DateTime::parse_from_rfc3339(&created_rfc3339) {
        Ok(ts) => ts.format(CREATED_FORMAT).to_string(),
        Err(_) => created_rfc3339.clone(),
    };

    Row {
        pod_name: string_at(record, &["spec", "pod", "name"]).to_string(),
        pod_namespace: string_at(record, &["spec", "pod", "namespace"]).to_string(),
        volume: string_at(record, &["spec", "volume"]).to_string(),
        size_bytes,
        size_human: size_bytes.map(human_bytes).unwrap_or_default(),
        created,
        created_rfc3339,
        backup_name: string_at(record, &["metadata", "labels", BACKUP_NAME_LABEL]).to_string(),
        resource_name: string_at(record, &["metadata", "name"]).to_string(),
    }
}

impl RowFilter {
    /// All predicates must hold.
    pub fn matches(&self, row: &Row) -> bool {
        self.names.matches(&row.resource_name)
            && (self.pods.is_empty()
                || (!row.pod_name.is_empty() && contains_any_fold(&row.pod_name, &self.pods)))
            && equals_any(&row.pod_namespace, &self.namespaces)
            && equals_any(&row.volume, &self.volumes)
    }
}

/// Order by pod name, then volume. Stable for equal keys.
pub fn sort_rows(rows: &mut [Row]) {
    rows.sort_by(|a, b| {
        a.pod_name
            .cmp(&b.pod_name)
            .then_with(|| a.volume.cmp(&b.volume))
    });
}

/// Extract, filter and sort raw records into report rows.
pub fn build_rows(records: &[Value], filter: &RowFilter) -> Vec<Row> {
    let mut seen = HashSet::new();
    let mut rows = Vec::with_capacity(records.len());

    for record in records {
        let name = string_at(record, &["metadata", "name"]);
        if !filter.names.matches(name) {
            trace!(name, "Skipping, name not selected");
            continue;
        }
        let row = extract_row(record);
        if !filter.matches(&row) {
            trace!(name, "Skipping, filtered out");
            continue;
        }
        if !seen.insert(row.resource_name.clone()) {
            debug!(name, "Skipping duplicate resource");
            continue;
        }
        rows.push(row);
    }

    sort_rows(&mut rows);
    debug!(total = records.len(), kept = rows.len(), "Built rows");
    rows
}
