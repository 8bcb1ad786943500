//! Image preview: reads a selected file into a displayable `data:` URI

mod data_uri;
mod image_preview;
mod reader;

pub use image_preview::{ImagePreview, LoadedImage, PreviewUpdate};
pub use reader::{FileReader, TokioFileReader, DEFAULT_MAX_IMAGE_BYTES};

#[cfg(test)]
pub use reader::{MockFileReader, PreviewError};
