use crate::config::{ImageInput, Settings};
use crate::error::DescribeError;
use crate::images::UploadedImage;
use crate::utils::{create_request_type, make_openai_request};
use reqwest::Client;

/// Sends one chat-completion request per call and returns the first choice.
#[derive(Debug, Clone)]
pub struct DescriptionGenerator {
    client: Client,
    api_url: String,
    model: String,
    image_input: ImageInput,
}

impl DescriptionGenerator {
    pub fn new(client: Client, settings: &Settings) -> Self {
        DescriptionGenerator {
            client,
            api_url: settings.api_url.clone(),
            model: settings.model.clone(),
            image_input: settings.image_input,
        }
    }

    pub async fn generate(
        &self,
        api_key: &str,
        image: &UploadedImage,
    ) -> Result<String, DescribeError> {
        let request_type = create_request_type(image, &self.model, self.image_input);
        make_openai_request(&self.client, api_key, &request_type, &self.api_url).await
    }
}
