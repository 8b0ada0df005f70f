//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Every route delegates to [`ToolRegistry::dispatch`], so the STDIO
//! transport validates and executes tools exactly like the HTTP one.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
    model::CallToolResult,
};
use std::sync::Arc;

use super::definition::ToolDefinition;
use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: Arc<ToolRegistry>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .definitions()
        .fold(ToolRouter::new(), |router, definition| {
            router.with_route(create_route(registry.clone(), definition))
        })
}

/// Create a ToolRoute for a single definition.
fn create_route<S>(registry: Arc<ToolRegistry>, definition: &ToolDefinition) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    let name = definition.name().to_string();
    ToolRoute::new_dyn(definition.to_tool(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let registry = registry.clone();
        let name = name.clone();
        async move {
            registry
                .dispatch(&name, args)
                .await
                .map(CallToolResult::from)
                .map_err(McpError::from)
        }
        .boxed()
    })
}
