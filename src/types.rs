use serde::{Deserialize, Serialize};

/// One normalized PodVolumeBackup, as shown in every output format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Row {
    pub pod_name: String,
    pub pod_namespace: String,
    pub volume: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<i64>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub size_human: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created: String,
    #[serde(rename = "createdRFC3339", skip_serializing_if = "String::is_empty")]
    pub created_rfc3339: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub backup_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resource_name: String,
}

impl Row {
    /// Size column text, `-` when the size is unknown.
    pub fn size_display(&self) -> &str {
        match self.size_bytes {
            Some(_) => &self.size_human,
            None => "-",
        }
    }

    /// Created column text, falling back to the raw timestamp.
    pub fn created_display(&self) -> &str {
        if self.created.is_empty() {
            &self.created_rfc3339
        } else {
            &self.created
        }
    }
}

/// Which resources are considered by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSelector {
    Prefix(String),
    All,
}

impl NameSelector {
    pub fn matches(&self, resource_name: &str) -> bool {
        match self {
            NameSelector::Prefix(prefix) => resource_name.starts_with(prefix.as_str()),
            NameSelector::All => true,
        }
    }
}

/// Compound filter applied to every row. Empty lists impose no constraint.
#[derive(Debug, Clone)]
pub struct RowFilter {
    pub names: NameSelector,
    /// Case-insensitive substrings, any of which must occur in the pod name.
    pub pods: Vec<String>,
    /// Exact pod namespaces.
    pub namespaces: Vec<String>,
    /// Exact volume names.
    pub volumes: Vec<String>,
}

impl RowFilter {
    #[cfg(test)]
    pub fn new(names: NameSelector) -> Self {
        Self {
            names,
            pods: Vec::new(),
            namespaces: Vec::new(),
            volumes: Vec::new(),
        }
    }
}
