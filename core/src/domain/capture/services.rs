use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::task;
use tracing::instrument;

use crate::domain::{
    capture::{
        entities::{Bitmap, CaptureError},
        ports::{CameraDevice, CameraStream},
    },
    common::entities::app_errors::CoreError,
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    Camera,
    Upload,
}

/// Decodes an uploaded file into a bitmap.
#[instrument(skip(data), fields(size = data.len()))]
pub fn capture_from_file(data: &[u8], mime_type: &str) -> Result<Bitmap, CaptureError> {
    if !mime_type.starts_with("image/") {
        return Err(CaptureError::UnsupportedType(mime_type.to_string()));
    }

    if data.len() > MAX_IMAGE_SIZE {
        return Err(CaptureError::TooLarge {
            max: MAX_IMAGE_SIZE,
        });
    }

    let decoded = image::load_from_memory(data).map_err(|e| {
        tracing::warn!(error = %e, "Failed to decode uploaded image");
        CaptureError::Unreadable(e.to_string())
    })?;

    let bitmap = Bitmap::from(decoded.to_rgba8());
    tracing::debug!(
        width = bitmap.width(),
        height = bitmap.height(),
        "Decoded uploaded image"
    );

    Ok(bitmap)
}

/// [`capture_from_file`] on the blocking pool.
pub async fn decode_upload(data: Vec<u8>, mime_type: String) -> Result<Bitmap, CoreError> {
    let bitmap = task::spawn_blocking(move || capture_from_file(&data, &mime_type))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Image decode task failed");
            CoreError::InternalServerError
        })??;

    Ok(bitmap)
}

/// Owns at most one live camera stream.
pub struct CameraSession<D: CameraDevice> {
    device: D,
    active: Option<Box<dyn CameraStream>>,
}

impl<D: CameraDevice> CameraSession<D> {
    pub fn new(device: D) -> Self {
        Self {
            device,
            active: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Opens a fresh stream, releasing the previous one first.
    pub fn activate(&mut self) -> Result<(), CaptureError> {
        self.release();

        let stream = self.device.open().map_err(|e| {
            tracing::error!(error = %e, "Unable to access camera");
            e
        })?;
        self.active = Some(stream);

        Ok(())
    }

    pub fn capture(&mut self) -> Result<Bitmap, CaptureError> {
        self.active
            .as_mut()
            .ok_or(CaptureError::NoActiveStream)?
            .grab_frame()
    }

    pub fn release(&mut self) {
        if let Some(mut stream) = self.active.take() {
            stream.release();
            tracing::debug!("Camera stream released");
        }
    }

    pub fn switch_mode(&mut self, mode: CaptureMode) -> Result<(), CaptureError> {
        match mode {
            CaptureMode::Camera => self.activate(),
            CaptureMode::Upload => {
                self.release();
                Ok(())
            }
        }
    }
}

impl<D: CameraDevice> Drop for CameraSession<D> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Busy flag allowing a single classification in flight.
#[derive(Debug, Clone, Default)]
pub struct DetectionSession {
    busy: Arc<AtomicBool>,
}

impl DetectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn try_begin(&self) -> Result<BusyGuard, CoreError> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| CoreError::Busy)?;

        Ok(BusyGuard {
            busy: Arc::clone(&self.busy),
        })
    }
}

/// Clears the busy flag when dropped.
#[derive(Debug)]
pub struct BusyGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
