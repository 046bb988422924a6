// Ports - Interface definitions (contracts)

use std::path::Path;

use crate::domain::model::*;
use crate::error::TrimResult;

/// Port for the external media toolchain
pub trait MediaPort: Send + Sync {
    /// Open a media file and return an exclusively owned handle to it.
    ///
    /// The handle is released when dropped, on success and error paths alike.
    fn open(&self, path: &Path) -> TrimResult<Box<dyn MediaHandle>>;
}

/// An opened media file
pub trait MediaHandle {
    /// Probed information about the opened file
    fn info(&self) -> &MediaInfo;

    /// Encode `range` of the opened file into `destination`
    fn export(&mut self, range: &TimeRange, destination: &Path, video_codec: &str)
        -> TrimResult<()>;
}

/// A sub-range of an opened media file, valid while its handle is alive
pub struct Subclip<'h> {
    handle: &'h mut dyn MediaHandle,
    range: TimeRange,
}

impl<'h> Subclip<'h> {
    /// Extract `range` from `handle`, checking it against the probed duration
    pub fn extract(handle: &'h mut dyn MediaHandle, range: TimeRange) -> TrimResult<Self> {
        range.validate_against_duration(&handle.info().duration)?;
        Ok(Self { handle, range })
    }

    pub fn range(&self) -> &TimeRange {
        &self.range
    }

    /// Write the subclip to `destination` with the given video codec
    pub fn export(self, destination: &Path, video_codec: &str) -> TrimResult<()> {
        self.handle.export(&self.range, destination, video_codec)
    }
}
