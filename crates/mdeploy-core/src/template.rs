// ── Template binding ──

use tracing::{error, info};

use crate::dashboard::DashboardApi;
use crate::error::CoreError;
use crate::model::ConfigTemplate;

/// Bind `network_id` to the template named exactly `template_name`.
///
/// Failures are logged here and returned; the orchestrator decides whether
/// to carry on without the binding.
pub async fn bind_template<A: DashboardApi>(
    api: &A,
    network_id: &str,
    template_name: &str,
) -> Result<ConfigTemplate, CoreError> {
    let result = async {
        let templates = api.list_config_templates().await?;
        let template = templates
            .into_iter()
            .find(|t| t.name == template_name)
            .ok_or_else(|| CoreError::TemplateNotFound {
                name: template_name.into(),
            })?;
        api.bind_network(network_id, &template.id).await?;
        Ok::<_, CoreError>(template)
    }
    .await;

    match &result {
        Ok(template) => {
            info!(template_id = %template.id, "Network successfully bound to template '{template_name}'");
        }
        Err(CoreError::TemplateNotFound { .. }) => error!("Template '{template_name}' not found"),
        Err(e) => error!("Failed to bind network to template: {e}"),
    }
    result
}
