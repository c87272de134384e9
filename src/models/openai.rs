// OpenAI-compatible chat-completion type definitions
// The Pollinations text endpoint speaks this schema.

use serde::{Deserialize, Serialize};

/// Chat-completion request body.
///
/// `seed` and `temperature` are always sent; the upstream uses them to keep
/// descriptions reproducible across identical requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// Target provider model id (already resolved from its alias).
    pub model: String,

    /// Conversation turns. This service always sends a single user turn.
    pub messages: Vec<ChatMessage>,

    /// Fixed sampling seed.
    pub seed: u64,

    /// Sampling temperature.
    pub temperature: f32,
}

/// A single conversation turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// "user", "assistant" or "system".
    pub role: String,

    /// Multimodal content parts.
    pub content: Vec<ContentPart>,
}

/// One part of a multimodal message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Plain text part.
    Text { text: String },

    /// Image part; `url` is either a remote URL or a `data:` URL.
    ImageUrl { image_url: ImageUrl },
}

/// Image reference wrapper, as the schema nests it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

/// Chat-completion response envelope.
///
/// Only the path this service reads (`choices[0].message.content`) is
/// modeled; everything else the upstream sends is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

/// `content` stays optional so a missing field surfaces as a malformed
/// response instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_parts_serialize_with_type_tags() {
        let message = ChatMessage {
            role: "user".to_string(),
            content: vec![
                ContentPart::Text {
                    text: "What is in this image?".to_string(),
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: "https://example.com/cat.jpg".to_string(),
                    },
                },
            ],
        };

        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["content"][0]["type"], "text");
        assert_eq!(json["content"][0]["text"], "What is in this image?");
        assert_eq!(json["content"][1]["type"], "image_url");
        assert_eq!(
            json["content"][1]["image_url"]["url"],
            "https://example.com/cat.jpg"
        );
    }

    #[test]
    fn test_response_with_missing_content_deserializes() {
        let response: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{}}]}"#).unwrap();
        assert_eq!(response.choices.len(), 1);
        assert!(response.choices[0].message.content.is_none());
    }

    #[test]
    fn test_response_without_choices_deserializes() {
        let response: ChatCompletionResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(response.choices.is_empty());
    }
}
