use crate::error::CoreError;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Resolves the format from a file name's extension (`png`, `jpg`, `jpeg`).
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let extension = Path::new(file_name).extension()?.to_str()?;
        match extension.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
        }
    }
}

/// An optional pre-trade chart screenshot. The bytes are kept for display only
/// and are never decoded or inspected.
#[derive(Clone, PartialEq, Eq)]
pub struct Screenshot {
    pub file_name: String,
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

impl Screenshot {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, CoreError> {
        let file_name = file_name.into();
        let format = ImageFormat::from_file_name(&file_name)
            .ok_or_else(|| CoreError::UnsupportedAttachment(file_name.clone()))?;
        Ok(Self {
            file_name,
            format,
            bytes,
        })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Keeps debug output and logs free of raw image bytes.
impl fmt::Debug for Screenshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Screenshot")
            .field("file_name", &self.file_name)
            .field("format", &self.format)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_png_and_jpeg_extensions() {
        assert_eq!(ImageFormat::from_file_name("chart.PNG"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_file_name("a/b/setup.jpeg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_file_name("setup.jpg"), Some(ImageFormat::Jpeg));
    }

    #[test]
    fn rejects_other_files() {
        assert_eq!(ImageFormat::from_file_name("notes.txt"), None);
        assert_eq!(ImageFormat::from_file_name("png"), None);

        let err = Screenshot::new("chart.gif", vec![1, 2, 3]).unwrap_err();
        assert_eq!(err, CoreError::UnsupportedAttachment("chart.gif".to_string()));
    }

    #[test]
    fn debug_output_hides_bytes() {
        let shot = Screenshot::new("chart.png", vec![0x89, 0x50, 0x4e, 0x47]).unwrap();
        let rendered = format!("{shot:?}");
        assert!(rendered.contains("len: 4"));
        assert!(!rendered.contains("137"));
    }
}
