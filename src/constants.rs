use crate::chat::OpenAiChatRequestBody;
use crate::vision::OpenAiVisionRequestBody;
use serde::Serialize;

pub const GPT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const SYSTEM_INSTRUCTIONS: &str = "Describe this image.";
pub const INLINE_IMAGE_PROMPT: &str = "Please describe the image with base64 code:";
pub const DEFAULT_SAVE_DIR: &str = "image_descriptions";
pub const ENV_FILE: &str = ".env";

pub const KEY_API_KEY: &str = "OPENAI_API_KEY";
pub const KEY_API_URL: &str = "OPENAI_API_URL";
pub const KEY_MODEL: &str = "IMGDESC_MODEL";
pub const KEY_SAVE_DIR: &str = "IMGDESC_SAVE_DIR";
pub const KEY_IMAGE_INPUT: &str = "IMGDESC_IMAGE_INPUT";

pub const CMD_OPEN: &str = "open";
pub const CMD_UPLOAD: &str = "upload";
pub const CMD_GENERATE: &str = "generate";
pub const CMD_GENERATE_SHORT: &str = "g";
pub const CMD_EDIT: &str = "edit";
pub const CMD_SHOW: &str = "show";
pub const CMD_DIR: &str = "dir";
pub const CMD_SAVE: &str = "save";
pub const CMD_KEY: &str = "key";
pub const CMD_HELP: &str = "help";
pub const CMD_QUIT: &str = "quit";
pub const CMD_EXIT: &str = "exit";

/// Terminates a multi-line `edit` block.
pub const EDIT_TERMINATOR: &str = ".";

#[derive(Serialize)]
pub enum RequestType {
    Chat(OpenAiChatRequestBody),
    Vision(OpenAiVisionRequestBody),
}
