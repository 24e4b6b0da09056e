//! Caller-supplied tools and the bridge that resolves model tool calls.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::LlmError;
use crate::types::ToolCall;

/// A callable capability a model may invoke mid-generation.
///
/// Schema descriptors are opaque JSON values, structurally typed; they are
/// validated at the caller/provider boundary, not by this crate.
#[async_trait]
pub trait ModelTool: Send + Sync {
    /// Unique tool name; the model addresses the tool by this.
    fn name(&self) -> &str;

    /// What the tool does, for the model's tool-selection prompt.
    fn description(&self) -> &str;

    /// JSON schema of the input payload.
    fn input_schema(&self) -> serde_json::Value;

    /// JSON schema of the output payload.
    fn output_schema(&self) -> serde_json::Value;

    /// Human-readable guidance on when and how to use the tool.
    fn usage_guidance(&self) -> &str {
        ""
    }

    /// Execute the tool against a provider-decoded input.
    async fn run(&self, input: serde_json::Value) -> Result<serde_json::Value, LlmError>;
}

type ToolHandler = Arc<
    dyn Fn(serde_json::Value) -> Pin<Box<dyn Future<Output = Result<serde_json::Value, LlmError>> + Send>>
        + Send
        + Sync,
>;

/// A [`ModelTool`] backed by an async closure.
///
/// # Examples
///
/// ```rust,ignore
/// use unillm::tools::FunctionTool;
/// use serde_json::json;
///
/// let adder = FunctionTool::new("add", "Add two integers", |input| async move {
///     let a = input["a"].as_i64().unwrap_or(0);
///     let b = input["b"].as_i64().unwrap_or(0);
///     Ok(json!({ "sum": a + b }))
/// })
/// .with_input_schema(json!({
///     "type": "object",
///     "properties": { "a": { "type": "integer" }, "b": { "type": "integer" } }
/// }));
/// ```
#[derive(Clone)]
pub struct FunctionTool {
    name: String,
    description: String,
    input_schema: serde_json::Value,
    output_schema: serde_json::Value,
    usage_guidance: String,
    handler: ToolHandler,
}

impl FunctionTool {
    /// Create a tool from a name, a description, and an async handler.
    pub fn new<F, Fut>(name: impl Into<String>, description: impl Into<String>, handler: F) -> Self
    where
        F: Fn(serde_json::Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<serde_json::Value, LlmError>> + Send + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema: serde_json::Value::Null,
            output_schema: serde_json::Value::Null,
            usage_guidance: String::new(),
            handler: Arc::new(move |input| Box::pin(handler(input))),
        }
    }

    /// Set the input schema descriptor.
    pub fn with_input_schema(mut self, schema: serde_json::Value) -> Self {
        self.input_schema = schema;
        self
    }

    /// Set the output schema descriptor.
    pub fn with_output_schema(mut self, schema: serde_json::Value) -> Self {
        self.output_schema = schema;
        self
    }

    /// Set the usage guidance text.
    pub fn with_usage_guidance(mut self, guidance: impl Into<String>) -> Self {
        self.usage_guidance = guidance.into();
        self
    }
}

impl std::fmt::Debug for FunctionTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionTool")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ModelTool for FunctionTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn input_schema(&self) -> serde_json::Value {
        self.input_schema.clone()
    }

    fn output_schema(&self) -> serde_json::Value {
        self.output_schema.clone()
    }

    fn usage_guidance(&self) -> &str {
        &self.usage_guidance
    }

    async fn run(&self, input: serde_json::Value) -> Result<serde_json::Value, LlmError> {
        (self.handler)(input).await
    }
}

/// Look a tool up by name in a caller-supplied set.
pub fn find_tool<'a>(
    tools: &'a [Arc<dyn ModelTool>],
    name: &str,
) -> Option<&'a Arc<dyn ModelTool>> {
    tools.iter().find(|tool| tool.name() == name)
}

/// Resolve a pending tool call against the supplied tool set.
///
/// A missing tool or a failed `run` is recorded in the returned record's
/// error message rather than propagated, so the caller can decide whether to
/// continue the conversation. The record carries either an output or an
/// error, never both. Fold it back with [`ToolCall::into_message`] before
/// requesting the next model turn.
pub async fn resolve_tool_call(tools: &[Arc<dyn ModelTool>], call: ToolCall) -> ToolCall {
    let Some(tool) = find_tool(tools, &call.name) else {
        tracing::warn!(tool = %call.name, id = %call.id, "tool not found in supplied set");
        let message = format!("tool '{}' is not available", call.name);
        return call.with_error(message);
    };

    tracing::debug!(tool = %call.name, id = %call.id, "running tool");
    match tool.run(call.input.clone()).await {
        Ok(output) => call.with_output(output),
        Err(error) => {
            tracing::warn!(tool = %call.name, id = %call.id, %error, "tool run failed");
            let message = error.to_string();
            call.with_error(message)
        }
    }
}
