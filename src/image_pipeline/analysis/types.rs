//! Background analysis types

use crate::image_pipeline::raster::{Pixel, RasterView};

/// Per-channel background ceiling: the brightest R, G and B seen at the four corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorThreshold {
    channels: [u8; 3],
}

impl ColorThreshold {
    pub const fn new(channels: [u8; 3]) -> Self {
        Self { channels }
    }

    /// Samples `(0, 0)`, `(w-1, 0)`, `(0, h-1)` and `(w-1, h-1)`.
    ///
    /// # Panics
    ///
    /// Panics if `view` has a zero width or height; `analyze` checks this first.
    pub fn from_corners<V: RasterView + ?Sized>(view: &V) -> Self {
        let (right, bottom) = (view.width() - 1, view.height() - 1);
        let corners = [
            view.pixel(0, 0),
            view.pixel(right, 0),
            view.pixel(0, bottom),
            view.pixel(right, bottom),
        ];

        let mut channels = [0u8; 3];
        for corner in corners {
            for (max, value) in channels.iter_mut().zip(corner.rgb()) {
                *max = (*max).max(value);
            }
        }
        Self { channels }
    }

    pub fn channels(&self) -> [u8; 3] {
        self.channels
    }
}

/// Classifies a pixel as subject or background.
///
/// A pixel is foreground when it is fully opaque and at least one of its
/// R, G, B values is strictly greater than the threshold plus the margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForegroundPredicate {
    threshold: ColorThreshold,
    margin: u8,
}

impl ForegroundPredicate {
    pub const fn new(threshold: ColorThreshold, margin: u8) -> Self {
        Self { threshold, margin }
    }

    pub fn threshold(&self) -> ColorThreshold {
        self.threshold
    }

    pub fn margin(&self) -> u8 {
        self.margin
    }

    pub fn is_foreground(&self, pixel: Pixel) -> bool {
        if !pixel.is_opaque() {
            return false;
        }
        // u16 so that threshold + margin cannot wrap above 255.
        pixel
            .rgb()
            .into_iter()
            .zip(self.threshold.channels)
            .any(|(value, max)| u16::from(value) > u16::from(max) + u16::from(self.margin))
    }
}

/// Inclusive pixel bounds of the foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingRect {
    pub fn width(&self) -> u32 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top + 1
    }

    /// True when the rectangle is well-formed and lies inside a `width` x `height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.left <= self.right && self.top <= self.bottom && self.right < width && self.bottom < height
    }
}
