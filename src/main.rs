use std::path::PathBuf;

use anyhow::bail;
use bgtrim_rs::image_pipeline::{
    OutputFormat, PngRasterReader, Result as TrimResult, TiffCompression, TiffRasterWriter,
    TrimConfig, TrimPipeline,
};
use bgtrim_rs::logger::{self, error, info};
use clap::builder::PossibleValue;
use clap::{Parser, ValueEnum};

/// Crop images to their subject and make the surrounding background transparent.
#[derive(Parser, Debug)]
#[command(name = "bgtrim", version)]
struct Cli {
    /// Skip flattening of the left and top edges
    #[arg(long)]
    no_straighten: bool,

    /// Tolerance added to the corner color before a pixel counts as subject
    #[arg(long, default_value_t = TrimConfig::default().color_margin)]
    color_margin: u8,

    /// Compression for outputs ending in .tif or .tiff
    #[arg(long, value_enum, default_value_t = CompressionArg::DeflateBalanced)]
    tiff_compression: CompressionArg,

    /// Horizontal predictor for TIFF outputs
    #[arg(long)]
    tiff_predictor: bool,

    /// INPUT OUTPUT pairs
    #[arg(required = true, value_name = "INPUT OUTPUT")]
    paths: Vec<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum CompressionArg {
    None,
    Lzw,
    DeflateFast,
    DeflateBalanced,
    DeflateBest,
}

impl ValueEnum for CompressionArg {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::None, Self::Lzw, Self::DeflateFast, Self::DeflateBalanced, Self::DeflateBest]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::None => Some(PossibleValue::new("none")),
            Self::Lzw => Some(PossibleValue::new("lzw")),
            Self::DeflateFast => Some(PossibleValue::new("deflate-fast")),
            Self::DeflateBalanced => Some(PossibleValue::new("deflate")),
            Self::DeflateBest => Some(PossibleValue::new("deflate-best")),
        }
    }
}

impl From<CompressionArg> for TiffCompression {
    fn from(arg: CompressionArg) -> Self {
        match arg {
            CompressionArg::None => TiffCompression::None,
            CompressionArg::Lzw => TiffCompression::Lzw,
            CompressionArg::DeflateFast => TiffCompression::DeflateFast,
            CompressionArg::DeflateBalanced => TiffCompression::DeflateBalanced,
            CompressionArg::DeflateBest => TiffCompression::DeflateBest,
        }
    }
}

impl Cli {
    fn config(&self) -> TrimConfig {
        TrimConfig::builder()
            .color_margin(self.color_margin)
            .straighten_edges(!self.no_straighten)
            .build()
    }

    fn jobs(&self) -> anyhow::Result<Vec<(PathBuf, PathBuf)>> {
        if self.paths.len() % 2 != 0 {
            bail!("expected INPUT OUTPUT pairs, got {} path(s)", self.paths.len());
        }
        Ok(self
            .paths
            .chunks_exact(2)
            .map(|pair| (pair[0].clone(), pair[1].clone()))
            .collect())
    }
}

/// Logs each result and returns how many failed.
fn report(jobs: &[(PathBuf, PathBuf)], results: Vec<TrimResult<()>>) -> usize {
    let mut failed = 0;
    for ((input, output), result) in jobs.iter().zip(results) {
        match result {
            Ok(()) => info!("{} -> {}", input.display(), output.display()),
            Err(e) => {
                error!("{}: {}", input.display(), e);
                failed += 1;
            }
        }
    }
    failed
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = Cli::parse();
    let config = cli.config();
    let jobs = cli.jobs()?;

    info!("Starting bgtrim with {} image(s)", jobs.len());
    info!("Color margin: {}", config.color_margin);
    info!(
        "Straightening: {}",
        if config.straighten_edges {
            "enabled"
        } else {
            "disabled"
        }
    );

    let (tiff_jobs, png_jobs): (Vec<_>, Vec<_>) = jobs
        .into_iter()
        .partition(|(_, output)| matches!(OutputFormat::from_path(output), OutputFormat::Tiff(_)));

    let mut failed = 0;

    if !png_jobs.is_empty() {
        let pipeline = TrimPipeline::new(config.clone());
        failed += report(&png_jobs, pipeline.convert_batch(&png_jobs));
    }

    if !tiff_jobs.is_empty() {
        let writer = TiffRasterWriter::new(cli.tiff_compression.into())
            .with_horizontal_predictor(cli.tiff_predictor);
        let pipeline = TrimPipeline::with_custom(PngRasterReader, writer, config);
        failed += report(&tiff_jobs, pipeline.convert_batch(&tiff_jobs));
    }

    if failed > 0 {
        bail!("{failed} image(s) failed");
    }
    Ok(())
}
