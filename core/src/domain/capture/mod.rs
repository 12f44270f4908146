pub mod entities;
pub mod ports;
pub mod services;

pub use entities::{Bitmap, CaptureError};
