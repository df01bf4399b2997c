use crate::error::DescribeError;
use std::{fmt, fs, path::Path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpg,
    Jpeg,
}

impl ImageFormat {
    /// Recognises the upload formats by file extension, ignoring case.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" => Some(ImageFormat::Jpg),
            "jpeg" => Some(ImageFormat::Jpeg),
            _ => None,
        }
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpg | ImageFormat::Jpeg => "image/jpeg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ImageFormat::Png => "PNG",
            ImageFormat::Jpg => "JPG",
            ImageFormat::Jpeg => "JPEG",
        };
        f.write_str(label)
    }
}

/// An uploaded image, kept byte-for-byte as it was read.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub name: String,
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

impl UploadedImage {
    pub fn from_bytes(name: &str, bytes: Vec<u8>) -> Result<Self, DescribeError> {
        let format = ImageFormat::from_file_name(name)
            .ok_or_else(|| DescribeError::UnsupportedImage(name.to_string()))?;
        Ok(UploadedImage {
            name: name.to_string(),
            format,
            bytes,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, DescribeError> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        // Reject by extension before touching the file.
        ImageFormat::from_file_name(&name)
            .ok_or_else(|| DescribeError::UnsupportedImage(path.display().to_string()))?;
        let bytes = fs::read(path).map_err(|source| DescribeError::ReadImage {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&name, bytes)
    }
}
