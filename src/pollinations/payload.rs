// Chat-completion payload construction

use crate::config::SamplingConfig;
use crate::models::openai::{ChatCompletionRequest, ChatMessage, ContentPart, ImageUrl};

/// Build the upstream request body for one analysis.
///
/// Pure function: exactly one user message with exactly two content parts,
/// the text part first and the image part second, both carried verbatim.
/// Some upstream models reject other part orderings.
pub fn build_request(
    model_id: &str,
    prompt: &str,
    image_reference: &str,
    sampling: &SamplingConfig,
) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: model_id.to_string(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: vec![
                ContentPart::Text {
                    text: prompt.to_string(),
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: image_reference.to_string(),
                    },
                },
            ],
        }],
        seed: sampling.seed,
        temperature: sampling.temperature,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sampling() -> SamplingConfig {
        SamplingConfig::default()
    }

    #[test]
    fn test_single_user_message_with_two_ordered_parts() {
        let request = build_request(
            "gemini-2.5-flash-lite",
            "What is in this image?",
            "https://example.com/cat.jpg",
            &sampling(),
        );

        assert_eq!(request.model, "gemini-2.5-flash-lite");
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, "user");
        assert_eq!(request.messages[0].content.len(), 2);

        match &request.messages[0].content[0] {
            ContentPart::Text { text } => assert_eq!(text, "What is in this image?"),
            other => panic!("expected text part first, got {:?}", other),
        }
        match &request.messages[0].content[1] {
            ContentPart::ImageUrl { image_url } => {
                assert_eq!(image_url.url, "https://example.com/cat.jpg")
            }
            other => panic!("expected image part second, got {:?}", other),
        }
    }

    #[test]
    fn test_sampling_parameters_are_attached() {
        let custom = SamplingConfig {
            seed: 7,
            temperature: 0.2,
        };
        let request = build_request("gpt-5-mini", "p", "data:image/png;base64,AA==", &custom);
        assert_eq!(request.seed, 7);
        assert_eq!(request.temperature, 0.2);
    }

    #[test]
    fn test_serialized_shape_matches_the_wire_format() {
        let request = build_request("gpt-5-mini", "hi", "https://e.com/a.png", &sampling());
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "gpt-5-mini");
        assert_eq!(json["seed"], 101);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"][0]["type"], "text");
        assert_eq!(json["messages"][0]["content"][1]["type"], "image_url");
        assert_eq!(
            json["messages"][0]["content"][1]["image_url"]["url"],
            "https://e.com/a.png"
        );
    }

    proptest! {
        // The builder must never mangle caller input, whatever it looks like
        #[test]
        fn prop_prompt_and_reference_survive_verbatim(
            prompt in ".*",
            reference in ".*",
        ) {
            let request = build_request("m", &prompt, &reference, &sampling());
            prop_assert_eq!(request.messages.len(), 1);
            prop_assert_eq!(request.messages[0].content.len(), 2);
            match (&request.messages[0].content[0], &request.messages[0].content[1]) {
                (ContentPart::Text { text }, ContentPart::ImageUrl { image_url }) => {
                    prop_assert_eq!(text, &prompt);
                    prop_assert_eq!(&image_url.url, &reference);
                }
                _ => prop_assert!(false, "parts out of order"),
            }
        }
    }
}
