//! Trimming configuration types

/// Default tolerance added to the corner threshold before a channel counts as foreground.
pub const DEFAULT_COLOR_MARGIN: u8 = 7;

/// Scan-restriction margins for the reverse border sweeps.
///
/// The right-to-left sweep only runs on rows `0..=top` and `height - bottom..height`;
/// the bottom-to-top sweep only runs on columns `0..=left` and `width - right..width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraseMargins {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Default for EraseMargins {
    fn default() -> Self {
        Self {
            top: 16,
            bottom: 8,
            left: 10,
            right: 8,
        }
    }
}

/// Band margins for edge straightening.
///
/// The left edge uses rows `top..height - bottom`, the top edge uses columns
/// `left..width - right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightenMargins {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Default for StraightenMargins {
    fn default() -> Self {
        Self {
            top: 30,
            bottom: 12,
            left: 30,
            right: 12,
        }
    }
}

/// Configuration for background trimming
#[derive(Debug, Clone)]
pub struct TrimConfig {
    /// Tolerance margin for the foreground test
    pub color_margin: u8,
    /// Margins restricting the reverse border sweeps
    pub erase: EraseMargins,
    /// Margins of the straightening bands
    pub straighten: StraightenMargins,
    /// Whether to run the edge straightening stage after border erasure
    pub straighten_edges: bool,
    /// Whether to validate decoded image dimensions before trimming
    pub validate_dimensions: bool,
    /// Largest accepted width or height when validation is enabled
    pub max_dimension: Option<u32>,
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            color_margin: DEFAULT_COLOR_MARGIN,
            erase: EraseMargins::default(),
            straighten: StraightenMargins::default(),
            straighten_edges: true,
            validate_dimensions: true,
            max_dimension: None,
        }
    }
}

impl TrimConfig {
    pub fn builder() -> TrimConfigBuilder {
        TrimConfigBuilder::default()
    }
}

/// Builder for TrimConfig
#[derive(Default)]
pub struct TrimConfigBuilder {
    color_margin: Option<u8>,
    erase: Option<EraseMargins>,
    straighten: Option<StraightenMargins>,
    straighten_edges: Option<bool>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<u32>>,
}

impl TrimConfigBuilder {
    pub fn color_margin(mut self, margin: u8) -> Self {
        self.color_margin = Some(margin);
        self
    }

    pub fn erase_margins(mut self, margins: EraseMargins) -> Self {
        self.erase = Some(margins);
        self
    }

    pub fn straighten_margins(mut self, margins: StraightenMargins) -> Self {
        self.straighten = Some(margins);
        self
    }

    pub fn straighten_edges(mut self, enable: bool) -> Self {
        self.straighten_edges = Some(enable);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<u32>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> TrimConfig {
        let default = TrimConfig::default();
        TrimConfig {
            color_margin: self.color_margin.unwrap_or(default.color_margin),
            erase: self.erase.unwrap_or(default.erase),
            straighten: self.straighten.unwrap_or(default.straighten),
            straighten_edges: self.straighten_edges.unwrap_or(default.straighten_edges),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
