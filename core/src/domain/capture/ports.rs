use crate::domain::capture::entities::{Bitmap, CaptureError};

/// A camera that can be opened into a live stream.
#[cfg_attr(test, mockall::automock)]
pub trait CameraDevice: Send + Sync {
    fn open(&self) -> Result<Box<dyn CameraStream>, CaptureError>;
}

/// A live video stream; frames are grabbed as still bitmaps.
#[cfg_attr(test, mockall::automock)]
pub trait CameraStream: Send {
    fn grab_frame(&mut self) -> Result<Bitmap, CaptureError>;

    /// Stops every track of the stream. Called exactly once.
    fn release(&mut self);
}
