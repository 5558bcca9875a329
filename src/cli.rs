use clap::Parser;

use crate::output::OutputFormat;
use crate::theme::ColorMode;
use crate::types::{NameSelector, RowFilter};
use crate::utils::split_csv;

const AFTER_HELP: &str = "\
Notes:
  --pod            substring match (case-insensitive), ANY of comma-separated values
  --pod-namespace  exact match, ANY of comma-separated values
  --volume         exact match, ANY of comma-separated values

Examples:
  kubectl podvolumebackup-list --all --pod=nginx,redis --pod-namespace=dev,prod --volume=data,cache -o pretty
  kubectl podvolumebackup-list nightly- --pod=nginx --pod-namespace=prod --volume=myvol --velero-namespace=velero -o json";

#[derive(Parser, Debug)]
#[command(name = "kubectl-podvolumebackup-list")]
#[command(about = "List Velero PodVolumeBackups with their pods, volumes, sizes and creation times")]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Only include PodVolumeBackups whose name starts with this prefix
    #[arg(required_unless_present = "all")]
    pub prefix: Option<String>,

    /// List all PodVolumeBackups instead of filtering by name prefix
    #[arg(long)]
    pub all: bool,

    /// Namespace where the PodVolumeBackup resources live
    #[arg(long, default_value = "velero")]
    pub velero_namespace: String,

    /// Kubeconfig context (defaults to the current context)
    #[arg(long)]
    pub context: Option<String>,

    /// Comma-separated list. Include items whose pod name contains ANY of these substrings (case-insensitive)
    #[arg(long, default_value = "")]
    pub pod: String,

    /// Comma-separated list. Include items whose pod namespace equals ANY of these
    #[arg(long, default_value = "")]
    pub pod_namespace: String,

    /// Comma-separated list. Include items whose volume equals ANY of these
    #[arg(long, default_value = "")]
    pub volume: String,

    /// Output format
    #[arg(short, long, value_enum, ignore_case = true, default_value = "table")]
    pub output: OutputFormat,

    /// Color mode for pretty output
    #[arg(long, value_enum, ignore_case = true, default_value = "auto")]
    pub color: ColorMode,

    /// Print debug info to stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn name_selector(&self) -> NameSelector {
        match (&self.prefix, self.all) {
            (Some(prefix), false) => NameSelector::Prefix(prefix.clone()),
            _ => NameSelector::All,
        }
    }

    pub fn row_filter(&self) -> RowFilter {
        RowFilter {
            names: self.name_selector(),
            pods: split_csv(&self.pod),
            namespaces: split_csv(&self.pod_namespace),
            volumes: split_csv(&self.volume),
        }
    }
}
