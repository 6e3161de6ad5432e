// SPDX-License-Identifier: MPL-2.0
//! Decoded tree visualization.

use crate::error::BuildError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use iced::widget::image::Handle;
use iced::Size;
use image_rs::ImageReader;
use std::io::Cursor;

/// A PNG tree image as received from the server.
///
/// Keeps the original bytes for download, a data URI for export and a
/// render handle created once so redraws reuse the same texture.
#[derive(Debug, Clone)]
pub struct TreeImage {
    data_uri: String,
    bytes: Vec<u8>,
    handle: Handle,
    width: u32,
    height: u32,
}

impl TreeImage {
    /// Decodes a base64 PNG and reads its dimensions.
    pub fn from_base64(encoded: &str) -> Result<Self, BuildError> {
        let encoded = encoded.trim();
        let bytes = STANDARD.decode(encoded)?;

        let (width, height) = ImageReader::new(Cursor::new(&bytes))
            .with_guessed_format()
            .map_err(|e| BuildError::Transport(format!("invalid visualization data: {e}")))?
            .into_dimensions()
            .map_err(|e| BuildError::Transport(format!("invalid visualization data: {e}")))?;

        Ok(Self {
            data_uri: format!("data:image/png;base64,{encoded}"),
            handle: Handle::from_bytes(bytes.clone()),
            bytes,
            width,
            height,
        })
    }

    /// `data:image/png;base64,...` form of the image.
    #[must_use]
    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }

    /// Raw PNG bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    /// Natural size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        #[allow(clippy::cast_precision_loss)]
        Size::new(self.width as f32, self.height as f32)
    }
}

impl PartialEq for TreeImage {
    fn eq(&self, other: &Self) -> bool {
        self.data_uri == other.data_uri
    }
}
