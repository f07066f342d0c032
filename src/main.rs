//! cubepano CLI - stitch cubemap faces into an equirectangular panorama.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use cubepano::export::{
    export_faces, export_panorama, find_face_files, load_face, load_face_set, OutputFormat,
    DEFAULT_JPEG_QUALITY,
};
use cubepano::{split_equirect, synthesize_with, FaceSlot, SampleFilter, StitchConfig};

/// Cubemap to equirectangular panorama converter.
#[derive(Parser)]
#[command(name = "cubepano")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stitch six face images into one panorama.
    Stitch {
        #[command(flatten)]
        faces: FaceArgs,

        /// Output file.
        #[arg(short, long, default_value = "panorama.jpg")]
        output: PathBuf,

        /// Output format (inferred from the output extension if omitted).
        #[arg(short, long)]
        format: Option<FormatArg>,

        /// JPEG quality (1-100).
        #[arg(short, long)]
        quality: Option<u8>,

        /// Face sampling filter.
        #[arg(long)]
        filter: Option<FilterArg>,

        /// Worker threads (defaults to all cores).
        #[arg(long)]
        threads: Option<usize>,

        /// JSON config file; command-line flags take precedence.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Cut an equirectangular panorama into six face images.
    Split {
        /// Input panorama.
        input: PathBuf,

        /// Directory for the face images.
        #[arg(short, long, default_value = "./faces")]
        output_dir: PathBuf,

        /// Face edge in pixels (defaults to half the panorama height).
        #[arg(short = 's', long)]
        face_size: Option<u32>,

        /// Face image format.
        #[arg(short, long, default_value = "png")]
        format: FormatArg,

        /// JPEG quality (1-100).
        #[arg(short, long, default_value_t = DEFAULT_JPEG_QUALITY)]
        quality: u8,
    },

    /// Show the panorama a set of faces would produce.
    Info {
        #[command(flatten)]
        faces: FaceArgs,
    },
}

/// Face image sources: a directory or one path per face.
#[derive(Args)]
struct FaceArgs {
    /// Directory containing up/down/left/right/front/back images.
    #[arg(short, long)]
    dir: Option<PathBuf>,

    #[arg(long)]
    up: Option<PathBuf>,
    #[arg(long)]
    down: Option<PathBuf>,
    #[arg(long)]
    left: Option<PathBuf>,
    #[arg(long)]
    right: Option<PathBuf>,
    #[arg(long)]
    front: Option<PathBuf>,
    #[arg(long)]
    back: Option<PathBuf>,
}

impl FaceArgs {
    /// Resolves one file per face; explicit paths override directory lookups.
    fn resolve(&self) -> Result<Vec<(FaceSlot, PathBuf)>> {
        let explicit = [&self.up, &self.down, &self.left, &self.right, &self.front, &self.back];

        let mut files = match &self.dir {
            Some(dir) => find_face_files(dir)
                .with_context(|| format!("looking for faces in {}", dir.display()))?,
            None => Vec::new(),
        };

        for (slot, path) in FaceSlot::all().into_iter().zip(explicit) {
            if let Some(path) = path {
                files.retain(|(s, _)| *s != slot);
                files.push((slot, path.clone()));
            }
        }

        let missing: Vec<&str> = FaceSlot::all()
            .into_iter()
            .filter(|slot| !files.iter().any(|(s, _)| s == slot))
            .map(FaceSlot::name)
            .collect();
        if !missing.is_empty() {
            bail!("missing face images: {} (use --dir or --<face>)", missing.join(", "));
        }
        Ok(files)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    /// JPEG (alpha composited over black).
    Jpeg,
    /// 8-bit RGBA PNG.
    Png,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Jpeg => OutputFormat::Jpeg,
            FormatArg::Png => OutputFormat::Png,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FilterArg {
    /// Average of the floor and ceil texels.
    TwoTap,
    /// Four-texel bilinear interpolation.
    Bilinear,
}

impl From<FilterArg> for SampleFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::TwoTap => SampleFilter::TwoTap,
            FilterArg::Bilinear => SampleFilter::Bilinear,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    match cli.command {
        Commands::Stitch {
            faces,
            output,
            format,
            quality,
            filter,
            threads,
            config,
        } => {
            let mut config = match config {
                Some(path) => StitchConfig::load(&path)
                    .with_context(|| format!("reading config {}", path.display()))?,
                None => StitchConfig::default(),
            };
            if let Some(format) = format {
                config.encode.format = Some(format.into());
            }
            if let Some(quality) = quality {
                config.encode.jpeg_quality = quality;
            }
            if let Some(filter) = filter {
                config.synth.filter = filter.into();
            }
            if threads.is_some() {
                config.synth.threads = threads;
            }
            run_stitch(&faces, &output, &config)
        }
        Commands::Split {
            input,
            output_dir,
            face_size,
            format,
            quality,
        } => run_split(&input, &output_dir, face_size, format.into(), quality),
        Commands::Info { faces } => run_info(&faces),
    }
}

fn run_stitch(faces: &FaceArgs, output: &Path, config: &StitchConfig) -> Result<()> {
    let files = faces.resolve()?;
    let set = load_face_set(&files).context("loading face images")?;
    if !set.is_uniform() {
        tracing::warn!("Faces are not equal-sized squares; output is sized from the front face");
    }

    let (width, height) = set.panorama_dimensions();
    tracing::info!("Generating {}x{} panorama ({:?})", width, height, config.synth.filter);
    let start = Instant::now();
    let panorama = synthesize_with(&set, &config.synth).context("stitching panorama")?;
    tracing::info!("Generated in {:.2?}", start.elapsed());

    export_panorama(&panorama, output, &config.encode)
        .with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}

fn run_split(
    input: &Path,
    output_dir: &Path,
    face_size: Option<u32>,
    format: OutputFormat,
    quality: u8,
) -> Result<()> {
    let panorama = load_face(input).with_context(|| format!("reading {}", input.display()))?;
    let face_size = face_size.unwrap_or(panorama.height() / 2);
    if face_size == 0 {
        bail!("panorama {} is too small to split", input.display());
    }

    tracing::info!("Splitting into six {}x{} faces", face_size, face_size);
    let set = split_equirect(&panorama, face_size)?;
    export_faces(&set, output_dir, format, quality)
        .with_context(|| format!("writing faces to {}", output_dir.display()))?;
    Ok(())
}

fn run_info(faces: &FaceArgs) -> Result<()> {
    let files = faces.resolve()?;
    let set = load_face_set(&files)?;

    for (slot, face) in set.iter() {
        println!("{:>6}: {}x{}", slot.name(), face.width(), face.height());
    }
    let (width, height) = set.panorama_dimensions();
    println!("Panorama: {}x{}", width, height);
    if !set.is_uniform() {
        println!("Warning: faces are not equal-sized squares");
    }
    Ok(())
}
