use crate::config::Settings;
use crate::credential::CredentialHolder;
use crate::editor::DescriptionEditor;
use crate::error::DescribeError;
use crate::generator::DescriptionGenerator;
use crate::images::UploadedImage;
use crate::persister::save_description;
use log::warn;
use reqwest::Client;
use std::path::{Path, PathBuf};

/// User-facing outcome of a handled event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
    Info(String),
}

/// All state for one interactive session. Each handler runs to completion
/// and reports through a [`Notice`]; none of them fails the session.
pub struct Session {
    credential: CredentialHolder,
    generator: DescriptionGenerator,
    image: Option<UploadedImage>,
    editor: DescriptionEditor,
    save_dir: PathBuf,
    default_save_dir: PathBuf,
}

impl Session {
    pub fn new(client: Client, settings: &Settings) -> Self {
        Session {
            credential: CredentialHolder::new(settings.api_key.clone()),
            generator: DescriptionGenerator::new(client, settings),
            image: None,
            editor: DescriptionEditor::default(),
            save_dir: settings.save_dir.clone(),
            default_save_dir: settings.save_dir.clone(),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_set()
    }

    pub fn description(&self) -> &str {
        self.editor.current()
    }

    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    pub fn supply_credential(&mut self, key: &str) -> Notice {
        if self.credential.set(key) {
            Notice::Success("API key stored for this session".to_string())
        } else if self.credential.is_set() {
            Notice::Info("An API key is already set for this session".to_string())
        } else {
            Notice::Info("Add your OpenAI API key to use this application".to_string())
        }
    }

    pub fn upload(&mut self, path: &Path) -> Notice {
        self.accept_upload(UploadedImage::from_path(path))
    }

    #[cfg(test)]
    pub fn upload_bytes(&mut self, name: &str, bytes: Vec<u8>) -> Notice {
        self.accept_upload(UploadedImage::from_bytes(name, bytes))
    }

    fn accept_upload(&mut self, result: Result<UploadedImage, DescribeError>) -> Notice {
        match result {
            Ok(image) => {
                let notice = Notice::Success(format!(
                    "Loaded image {} ({}, {} bytes)",
                    image.name,
                    image.format,
                    image.bytes.len()
                ));
                self.image = Some(image);
                notice
            }
            Err(e) => Notice::Error(e.to_string()),
        }
    }

    /// Requests a fresh description for the current image. The previous
    /// description survives any failure.
    pub async fn generate(&mut self) -> Notice {
        let api_key = match self.credential.get() {
            Ok(key) => key,
            Err(_) => {
                return Notice::Info("Add your OpenAI API key to use this application".to_string())
            }
        };
        let image = match &self.image {
            Some(image) => image,
            None => return Notice::Info("Choose an image first".to_string()),
        };

        match self.generator.generate(api_key, image).await {
            Ok(description) => {
                self.editor.replace(description);
                Notice::Success("Description generated".to_string())
            }
            Err(e) => {
                warn!("Generation failed: {}", e);
                Notice::Error(format!("Failed to generate description: {}", e))
            }
        }
    }

    pub fn edit(&mut self, text: impl Into<String>) -> Notice {
        self.editor.replace(text);
        Notice::Info("Description updated".to_string())
    }

    /// A blank directory restores the configured default.
    pub fn set_directory(&mut self, directory: &str) -> Notice {
        let directory = directory.trim();
        self.save_dir = if directory.is_empty() {
            self.default_save_dir.clone()
        } else {
            PathBuf::from(directory)
        };
        Notice::Info(format!("Saving to {}", self.save_dir.display()))
    }

    pub fn save(&mut self, filename: Option<&str>) -> Notice {
        if self.editor.is_empty() {
            return Notice::Info("There is no description to save yet".to_string());
        }
        match save_description(self.editor.current(), &self.save_dir, filename) {
            Ok(path) => Notice::Success(format!("Description saved to {}", path.display())),
            Err(e) => Notice::Error(format!("Failed to save description: {}", e)),
        }
    }
}
