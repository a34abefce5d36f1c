//! In-memory pixel raster owned by a single transcode call.

use image::DynamicImage;

/// Channel layout of a [`RasterImage`] buffer.
///
/// All rasters are 8 bits per sample, row-major, interleaved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    /// Three samples per pixel: red, green, blue.
    Rgb8,
    /// Four samples per pixel: red, green, blue, alpha.
    Rgba8,
}

impl ChannelLayout {
    /// Number of samples per pixel for this layout.
    #[inline]
    pub fn channels(self) -> u32 {
        match self {
            ChannelLayout::Rgb8 => 3,
            ChannelLayout::Rgba8 => 4,
        }
    }
}

/// A decoded image with 8-bit pixel data.
///
/// Invariant: `pixels.len() == width * height * layout.channels()`.
///
/// Rasters are created by the decoder, consumed and replaced (never mutated
/// in place) by the resampler, and read by the encoders. A raster never
/// outlives the transcode call that produced it.
#[derive(Debug, Clone)]
pub struct RasterImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Channel layout of the pixel buffer.
    pub layout: ChannelLayout,
    /// Pixel data in row-major order.
    pub pixels: Vec<u8>,
}

impl RasterImage {
    /// Create a new RasterImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, layout: ChannelLayout, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * layout.channels() as usize,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            layout,
            pixels,
        }
    }

    /// Create a RasterImage from a decoded `image::DynamicImage`.
    ///
    /// Sources carrying an alpha channel become `Rgba8` rasters; everything
    /// else is flattened to `Rgb8`.
    pub fn from_dynamic(img: DynamicImage) -> Self {
        if img.color().has_alpha() {
            let rgba = img.into_rgba8();
            let (width, height) = rgba.dimensions();
            Self {
                width,
                height,
                layout: ChannelLayout::Rgba8,
                pixels: rgba.into_raw(),
            }
        } else {
            let rgb = img.into_rgb8();
            let (width, height) = rgb.dimensions();
            Self {
                width,
                height,
                layout: ChannelLayout::Rgb8,
                pixels: rgb.into_raw(),
            }
        }
    }

    /// Convert to an `image::DynamicImage` for further processing.
    ///
    /// Returns `None` if the buffer length does not match the dimensions.
    pub fn to_dynamic(&self) -> Option<DynamicImage> {
        match self.layout {
            ChannelLayout::Rgb8 => {
                image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
                    .map(DynamicImage::ImageRgb8)
            }
            ChannelLayout::Rgba8 => {
                image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
                    .map(DynamicImage::ImageRgba8)
            }
        }
    }

    /// The larger of width and height.
    #[inline]
    pub fn max_dimension(&self) -> u32 {
        self.width.max(self.height)
    }

    /// Whether the raster carries an alpha channel.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.layout == ChannelLayout::Rgba8
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}
