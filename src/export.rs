//! Export artifacts: the latest rendered scene serialized for download.
//!
//! An artifact is regenerated after every render so it always reflects the
//! chart state on screen; replacing it drops the previous serialization, so
//! repeated exports never accumulate.

use crate::error::ChartResult;
use crate::render::{SVG_MEDIA_TYPE, render_svg_document};
use crate::scene::SceneFrame;

/// A serialized vector image offered for download under a file name.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    file_name: String,
    media_type: &'static str,
    content: String,
}

impl ExportArtifact {
    pub(crate) fn from_frame(file_name: impl Into<String>, frame: &SceneFrame) -> ChartResult<Self> {
        Ok(Self {
            file_name: file_name.into(),
            media_type: SVG_MEDIA_TYPE,
            content: render_svg_document(frame)?,
        })
    }

    #[must_use]
    pub(crate) fn renamed(&self, file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: self.media_type,
            content: self.content.clone(),
        }
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn media_type(&self) -> &'static str {
        self.media_type
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn into_content(self) -> String {
        self.content
    }

    /// Writes the serialized document to any byte sink.
    pub fn write_to(&self, sink: &mut impl std::io::Write) -> std::io::Result<()> {
        sink.write_all(self.content.as_bytes())
    }
}
