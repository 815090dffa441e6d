//! Turning a linear color grid into 8-bit image files.

use crate::{camera::Float, error::OutputError, film::Image, interval::Interval, vec3::Color};
use image::{Rgb, RgbImage};
use log::{debug, info};
use std::{
    fs,
    path::PathBuf,
};

/// Accepts finished (or partial) renders
pub trait ImageSink {
    fn write(&mut self, image: &Image) -> Result<(), OutputError>;
}

/// Take a color value in linear space and convert it to gamma 2
pub fn linear_to_gamma(linear_color_value: Float) -> Float {
    if linear_color_value > 0.0 {
        linear_color_value.sqrt()
    } else {
        0.0
    }
}

/// Gamma-encode, clamp to [0, 0.999] and scale to a byte per channel
pub fn to_rgb8(color: Color) -> [u8; 3] {
    const INTENSITY: Interval = Interval::new(0.0, 0.999);
    let byte = |c: Float| (256.0 * INTENSITY.clamp(linear_to_gamma(c))) as u8;
    [byte(color.x), byte(color.y), byte(color.z)]
}

pub fn to_rgb_image(image: &Image) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        Rgb(to_rgb8(image.get(x, y)))
    })
}

/// Writes every image to the same path; the format follows the file extension
#[derive(Clone, Debug)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSink { path: path.into() }
    }
}

impl ImageSink for FileSink {
    fn write(&mut self, image: &Image) -> Result<(), OutputError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        to_rgb_image(image).save(&self.path)?;
        info!("Wrote {}", self.path.display());
        Ok(())
    }
}

/// Numbered progressive frames: `{prefix}_0001.png`, `{prefix}_0002.png`, ...
#[derive(Clone, Debug)]
pub struct SnapshotSink {
    dir: PathBuf,
    prefix: String,
    next_index: u32,
}

impl SnapshotSink {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        SnapshotSink {
            dir: dir.into(),
            prefix: prefix.into(),
            next_index: 1,
        }
    }

    pub fn frames_written(&self) -> u32 {
        self.next_index - 1
    }

    fn frame_path(&self, index: u32) -> PathBuf {
        self.dir.join(format!("{}_{:04}.png", self.prefix, index))
    }
}

impl ImageSink for SnapshotSink {
    fn write(&mut self, image: &Image) -> Result<(), OutputError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.frame_path(self.next_index);
        to_rgb_image(image).save(&path)?;
        debug!("Wrote snapshot {}", path.display());
        self.next_index += 1;
        Ok(())
    }
}
