use anyhow::Context;
use kube::api::ListParams;
use kube::core::{ApiResource, DynamicObject, GroupVersionKind};
use kube::{Api, Client, config};
use tracing::{debug, info};

/// Page size for list requests.
const PAGE_SIZE: u32 = 500;

/// Velero's PodVolumeBackup custom resource.
fn pod_volume_backup_resource() -> ApiResource {
    let gvk = GroupVersionKind::gvk("velero.io", "v1", "PodVolumeBackup");
    ApiResource::from_gvk_with_plural(&gvk, "podvolumebackups")
}

/// Build a client for the named kubeconfig context, or the current one.
pub async fn initialize_client(context: Option<&str>) -> anyhow::Result<Client> {
    let config = match context {
        Some(ctx) => config::Config::from_kubeconfig(&config::KubeConfigOptions {
            context: Some(ctx.to_string()),
            ..Default::default()
        })
        .await
        .map_err(|e| anyhow::anyhow!("Context '{}' not found in kubeconfig: {}", ctx, e))?,
        None => config::Config::infer()
            .await
            .context("Failed to get kubeconfig")?,
    };
    info!(
        "Using {} context",
        context.map_or_else(|| "current".to_string(), |c| format!("'{}'", c))
    );
    Client::try_from(config).context("Failed to create Kubernetes client")
}

/// List every PodVolumeBackup in `namespace` as loosely-typed JSON documents.
pub async fn list_pod_volume_backups(
    client: &Client,
    namespace: &str,
) -> anyhow::Result<Vec<serde_json::Value>> {
    let ar = pod_volume_backup_resource();
    let api: Api<DynamicObject> = Api::namespaced_with(client.clone(), namespace, &ar);

    let mut records = Vec::new();
    let mut continue_token: Option<String> = None;
    let mut page_count = 0u32;

    loop {
        let mut params = ListParams::default().limit(PAGE_SIZE);
        if let Some(ref token) = continue_token {
            params = params.continue_token(token);
        }

        let list = api
            .list(&params)
            .await
            .with_context(|| format!("Failed to list PodVolumeBackups in namespace '{}'", namespace))?;
        page_count += 1;

        for item in list.items {
            records.push(
                serde_json::to_value(item).context("Failed to convert PodVolumeBackup to JSON")?,
            );
        }

        match list.metadata.continue_ {
            Some(token) if !token.is_empty() => {
                debug!(
                    page = page_count,
                    total_so_far = records.len(),
                    "Fetched page, continuing"
                );
                continue_token = Some(token);
            }
            _ => break,
        }
    }

    debug!(
        namespace = %namespace,
        pages = page_count,
        total_items = records.len(),
        "Listed PodVolumeBackups"
    );
    Ok(records)
}
