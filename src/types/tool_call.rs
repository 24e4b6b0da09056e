//! Tool invocation records.

use serde::{Deserialize, Serialize};

use super::message::ModelMessage;

/// One tool invocation requested by a model.
///
/// Created when a provider signals an intent to call a tool, resolved by the
/// tool bridge, and folded back into the conversation as a `Tool`-role
/// message before the next model turn. A resolved record carries either an
/// output or an error message, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCall {
    /// Provider-assigned call identifier.
    pub id: String,
    /// Name of the tool to invoke.
    pub name: String,
    /// Provider-decoded input payload.
    pub input: serde_json::Value,
    /// Output payload; absent until resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<serde_json::Value>,
    /// Failure description; absent unless resolution failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ToolCall {
    /// An unresolved call, as decoded from a provider.
    pub fn pending(
        id: impl Into<String>,
        name: impl Into<String>,
        input: serde_json::Value,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            input,
            output: None,
            error_message: None,
        }
    }

    /// An unresolved call with a freshly generated id, for callers
    /// synthesizing tool turns themselves.
    pub fn new(name: impl Into<String>, input: serde_json::Value) -> Self {
        Self::pending(uuid::Uuid::new_v4().to_string(), name, input)
    }

    /// Mark the call resolved with the given output. Clears any error.
    pub fn with_output(mut self, output: serde_json::Value) -> Self {
        self.output = Some(output);
        self.error_message = None;
        self
    }

    /// Mark the call failed. Clears any output.
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self.output = None;
        self
    }

    /// Whether the call carries an output or an error.
    pub const fn is_resolved(&self) -> bool {
        self.output.is_some() || self.error_message.is_some()
    }

    /// Fold the resolved call into a `Tool`-role conversation message.
    ///
    /// The message content is the output rendered as JSON, or the error
    /// message for failed calls; the record itself travels along so the
    /// provider adapter can reconstruct its wire shape.
    pub fn into_message(self) -> ModelMessage {
        let content = match (&self.output, &self.error_message) {
            (Some(output), _) => output.to_string(),
            (None, Some(error)) => error.clone(),
            (None, None) => String::new(),
        };
        ModelMessage::tool(content).with_tool_call(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageRole;
    use serde_json::json;

    #[test]
    fn output_and_error_are_mutually_exclusive() {
        let call = ToolCall::pending("call_1", "search", json!({"query": "rust"}));
        assert!(!call.is_resolved());

        let ok = call.clone().with_output(json!({"hits": 3}));
        assert!(ok.is_resolved());
        assert!(ok.error_message.is_none());

        let failed = ok.with_error("upstream timeout");
        assert!(failed.output.is_none());
        assert_eq!(failed.error_message.as_deref(), Some("upstream timeout"));
    }

    #[test]
    fn into_message_produces_tool_turn() {
        let message = ToolCall::pending("call_2", "weather", json!({"city": "Oslo"}))
            .with_output(json!({"celsius": -3}))
            .into_message();
        assert_eq!(message.role, MessageRole::Tool);
        assert!(message.content.contains("-3"));
        let call = message.tool_call.expect("record travels with the message");
        assert_eq!(call.name, "weather");
    }

    #[test]
    fn serde_uses_interop_field_names() {
        let call = ToolCall::pending("call_3", "search", json!({})).with_error("no such tool");
        let json = serde_json::to_value(&call).expect("serialize");
        assert_eq!(json["errorMessage"], "no such tool");
        assert!(json.get("output").is_none());
    }
}
