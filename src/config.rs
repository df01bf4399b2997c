use crate::constants::{
    DEFAULT_MODEL, DEFAULT_SAVE_DIR, GPT_API_URL, KEY_API_KEY, KEY_API_URL, KEY_IMAGE_INPUT,
    KEY_MODEL, KEY_SAVE_DIR,
};
use log::{debug, warn};
use std::{collections::HashMap, env, path::Path, path::PathBuf};

/// How the image reaches the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageInput {
    /// Base64 text pasted into the user prompt.
    #[default]
    InlineText,
    /// Native `image_url` content part carrying a data URL.
    ImageUrl,
}

impl ImageInput {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "inline" => Some(ImageInput::InlineText),
            "image_url" | "url" => Some(ImageInput::ImageUrl),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub save_dir: PathBuf,
    pub image_input: ImageInput,
}

impl Settings {
    /// Reads the `.env` file at `path`, falling back to the process
    /// environment for keys the file does not set.
    pub fn load(path: &Path) -> Self {
        let file_values = read_env_file(path);
        Settings::from_lookup(|key| {
            file_values
                .get(key)
                .cloned()
                .or_else(|| env::var(key).ok())
        })
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let image_input = match non_empty(KEY_IMAGE_INPUT) {
            Some(value) => ImageInput::parse(&value).unwrap_or_else(|| {
                warn!("Ignoring unknown {}={}", KEY_IMAGE_INPUT, value);
                ImageInput::default()
            }),
            None => ImageInput::default(),
        };

        Settings {
            api_key: non_empty(KEY_API_KEY),
            api_url: non_empty(KEY_API_URL).unwrap_or_else(|| GPT_API_URL.to_string()),
            model: non_empty(KEY_MODEL).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            save_dir: non_empty(KEY_SAVE_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_DIR)),
            image_input,
        }
    }
}

/// Key-value pairs from a dotenv file. A missing or unreadable file yields
/// an empty map; malformed lines are skipped.
pub fn read_env_file(path: &Path) -> HashMap<String, String> {
    let iter = match dotenv::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) => {
            debug!("No env file at {}: {}", path.display(), e);
            return HashMap::new();
        }
    };

    let mut values = HashMap::new();
    for item in iter {
        match item {
            Ok((key, value)) => {
                values.insert(key, value);
            }
            Err(e) => warn!("Skipping line in {}: {}", path.display(), e),
        }
    }
    debug!("Loaded {} values from {}", values.len(), path.display());
    values
}
