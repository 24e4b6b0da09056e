//! Conversation message types.

use serde::{Deserialize, Serialize};

use super::tool_call::ToolCall;

/// Role of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    Tool,
}

/// A binary attachment owned by a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// Optional file name or label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// MIME type of the payload (e.g. `"image/png"`).
    pub content_type: String,
    /// Raw payload bytes.
    pub data: Vec<u8>,
}

impl Artifact {
    /// Create an artifact from a MIME type and raw bytes.
    pub fn new(content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: None,
            content_type: content_type.into(),
            data,
        }
    }

    /// Attach a file name or label.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// One turn in a conversation.
///
/// Messages are immutable value objects; build them with the role
/// constructors and `with_*` methods, then hand ownership to a request.
///
/// # Examples
///
/// ```rust,ignore
/// use unillm::types::{Artifact, ModelMessage};
///
/// let msg = ModelMessage::user("Describe this chart")
///     .with_artifact(Artifact::new("image/png", png_bytes));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelMessage {
    /// Who produced this turn.
    pub role: MessageRole,
    /// Free-text content.
    pub content: String,
    /// Ordered attachments owned by this message.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<Artifact>,
    /// Tool invocation record attached to this turn, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call: Option<ToolCall>,
}

impl ModelMessage {
    fn with_role(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            artifacts: Vec::new(),
            tool_call: None,
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::with_role(MessageRole::User, content)
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::with_role(MessageRole::Assistant, content)
    }

    /// Create a tool-result message.
    pub fn tool(content: impl Into<String>) -> Self {
        Self::with_role(MessageRole::Tool, content)
    }

    /// Append an attachment.
    pub fn with_artifact(mut self, artifact: Artifact) -> Self {
        self.artifacts.push(artifact);
        self
    }

    /// Attach a tool invocation record.
    pub fn with_tool_call(mut self, call: ToolCall) -> Self {
        self.tool_call = Some(call);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_constructors() {
        assert_eq!(ModelMessage::user("hi").role, MessageRole::User);
        assert_eq!(ModelMessage::assistant("hello").role, MessageRole::Assistant);
        assert_eq!(ModelMessage::tool("{}").role, MessageRole::Tool);
    }

    #[test]
    fn artifacts_keep_insertion_order() {
        let msg = ModelMessage::user("two files")
            .with_artifact(Artifact::new("text/csv", vec![1]).with_name("a.csv"))
            .with_artifact(Artifact::new("text/csv", vec![2]).with_name("b.csv"));
        let names: Vec<_> = msg
            .artifacts
            .iter()
            .map(|a| a.name.as_deref().unwrap_or(""))
            .collect();
        assert_eq!(names, ["a.csv", "b.csv"]);
    }

    #[test]
    fn serde_round_trip_with_interop_names() {
        let msg = ModelMessage::user("look at this")
            .with_artifact(Artifact::new("image/png", vec![0, 1, 2]));
        let json = serde_json::to_value(&msg).expect("serialize");
        assert_eq!(json["role"], "user");
        assert_eq!(json["artifacts"][0]["contentType"], "image/png");
        assert!(json.get("toolCall").is_none());

        let back: ModelMessage = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, msg);
    }
}
