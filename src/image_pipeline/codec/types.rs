//! Codec configuration types

use std::path::Path;

/// TIFF compression methods
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    #[default]
    None,
    /// LZW compression (slow, good compression)
    Lzw,
    /// Deflate compression - fast level (good speed/size balance)
    DeflateFast,
    /// Deflate compression - best compression (slower)
    DeflateBest,
    /// Deflate compression - balanced
    DeflateBalanced,
}

impl From<TiffCompression> for tiff::encoder::Compression {
    fn from(compression: TiffCompression) -> Self {
        use tiff::encoder::compression::DeflateLevel;

        match compression {
            TiffCompression::None => Self::Uncompressed,
            TiffCompression::Lzw => Self::Lzw,
            TiffCompression::DeflateFast => Self::Deflate(DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => Self::Deflate(DeflateLevel::Balanced),
            TiffCompression::DeflateBest => Self::Deflate(DeflateLevel::Best),
        }
    }
}

/// Encoded format of a trimmed image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Tiff(TiffCompression),
}

impl OutputFormat {
    /// Picks the format from a file extension, defaulting to PNG.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("tif" | "tiff") => OutputFormat::Tiff(TiffCompression::DeflateBalanced),
            _ => OutputFormat::Png,
        }
    }
}
