use crate::chat::{ChatApiResponse, ChatMessageRole, OpenAiChatRequestBody};
use crate::config::ImageInput;
use crate::constants::{RequestType, INLINE_IMAGE_PROMPT, SYSTEM_INSTRUCTIONS};
use crate::error::DescribeError;
use crate::images::UploadedImage;
use crate::vision::{
    ImageUrl, OpenAiVisionRequestBody, VisionContent, VisionMessageContent, VisionMessageRole,
};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client,
};

pub fn build_headers(api_key: &str) -> Result<HeaderMap, DescribeError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| DescribeError::InvalidCredential)?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

pub fn create_spinner(color: &str, message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template(&format!("{{spinner:.{}}} {{msg}}", color)),
    );
    spinner.enable_steady_tick(100);
    spinner.set_message(message);

    spinner
}

pub fn encode_image(bytes: &[u8]) -> String {
    base64::encode(bytes)
}

pub fn build_inline_request(image_base64: &str, model: &str) -> OpenAiChatRequestBody {
    OpenAiChatRequestBody {
        model: model.to_string(),
        messages: vec![
            ChatMessageRole {
                role: "system".to_string(),
                content: SYSTEM_INSTRUCTIONS.to_string(),
            },
            ChatMessageRole {
                role: "user".to_string(),
                content: format!("{} {}", INLINE_IMAGE_PROMPT, image_base64),
            },
        ],
    }
}

pub fn build_vision_request(
    image_base64: &str,
    mime_type: &str,
    model: &str,
) -> OpenAiVisionRequestBody {
    OpenAiVisionRequestBody {
        model: model.to_string(),
        messages: vec![
            VisionMessageRole {
                role: "system".to_string(),
                content: VisionMessageContent::Text(SYSTEM_INSTRUCTIONS.to_string()),
            },
            VisionMessageRole {
                role: "user".to_string(),
                content: VisionMessageContent::Parts(vec![
                    VisionContent::Text {
                        text: SYSTEM_INSTRUCTIONS.to_string(),
                    },
                    VisionContent::ImageUrl {
                        image_url: ImageUrl {
                            url: format!("data:{};base64,{}", mime_type, image_base64),
                        },
                    },
                ]),
            },
        ],
    }
}

pub fn create_request_type(image: &UploadedImage, model: &str, input: ImageInput) -> RequestType {
    let image_base64 = encode_image(&image.bytes);
    debug!(
        "Encoded {} ({} bytes) into {} base64 chars",
        image.name,
        image.bytes.len(),
        image_base64.len()
    );
    match input {
        ImageInput::InlineText => RequestType::Chat(build_inline_request(&image_base64, model)),
        ImageInput::ImageUrl => RequestType::Vision(build_vision_request(
            &image_base64,
            image.format.mime_type(),
            model,
        )),
    }
}

pub async fn process_description_response(
    response: reqwest::Response,
) -> Result<String, DescribeError> {
    let response_body = response.text().await?;
    let api_response: ChatApiResponse = serde_json::from_str(&response_body)
        .map_err(|e| DescribeError::MalformedResponse(e.to_string()))?;
    api_response.into_first_content().ok_or_else(|| {
        DescribeError::MalformedResponse("response has no message content".to_string())
    })
}

pub async fn make_openai_request(
    client: &Client,
    api_key: &str,
    request_type: &RequestType,
    api_url: &str,
) -> Result<String, DescribeError> {
    let headers = build_headers(api_key)?;

    info!("Requesting image description from {}", api_url);
    let response = match request_type {
        RequestType::Chat(request_body) => {
            client
                .post(api_url)
                .headers(headers)
                .json(request_body)
                .send()
                .await?
        }
        RequestType::Vision(request_body) => {
            client
                .post(api_url)
                .headers(headers)
                .json(request_body)
                .send()
                .await?
        }
    };

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!("Description request failed with status code: {}", status);
        return Err(DescribeError::Remote { status, body });
    }

    process_description_response(response).await
}
