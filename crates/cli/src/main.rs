mod prompt;
mod session;

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use blendimg_core::blending::domain::region_intersector::SizePolicy;
use blendimg_core::blending::infrastructure::linear_blender::LinearBlender;
use blendimg_core::catalog::infrastructure::directory_lister::DirectoryLister;
use blendimg_core::io::domain::image_viewer::{ImageViewer, NullViewer};
use blendimg_core::io::infrastructure::image_file_loader::ImageFileLoader;
use blendimg_core::io::infrastructure::image_file_writer::ImageFileWriter;
use blendimg_core::io::infrastructure::system_viewer::SystemViewer;
use blendimg_core::pipeline::blend_images_use_case::{BlendImagesError, BlendImagesUseCase};
use blendimg_core::shared::blend_config::BlendConfig;
use blendimg_core::shared::constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};

use crate::prompt::TokenPrompter;
use crate::session::run_session;

/// Exit status when either source image cannot be loaded.
const LOAD_FAILURE_EXIT: i32 = -1;

/// Interactive linear blender: mixes two images with a weighted average.
#[derive(Parser)]
#[command(name = "blendimg")]
struct Cli {
    /// Directory the source images are listed and read from.
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    input_dir: PathBuf,

    /// Directory the blended JPEG is written to.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Do not open the result in the default image viewer.
    #[arg(long)]
    no_preview: bool,

    /// Refuse to blend images whose dimensions differ instead of blending the overlap.
    #[arg(long)]
    strict_size: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(exit_code(e.as_ref()));
    }
}

/// Process status for a fatal error: `LOAD_FAILURE_EXIT` when a source
/// image could not be loaded, 1 otherwise.
fn exit_code(e: &(dyn std::error::Error + 'static)) -> i32 {
    match e.downcast_ref::<BlendImagesError>() {
        Some(BlendImagesError::Load { .. }) => LOAD_FAILURE_EXIT,
        _ => 1,
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let use_case = build_use_case(&cli);

    let stdin = io::stdin();
    let mut prompter = TokenPrompter::new(stdin.lock());
    let path = run_session(
        &use_case,
        &mut prompter,
        &mut io::stdout(),
        &mut io::stderr(),
    )?;
    log::info!("Done: {}", path.display());
    Ok(())
}

fn build_use_case(cli: &Cli) -> BlendImagesUseCase {
    let policy = if cli.strict_size {
        SizePolicy::RequireEqual
    } else {
        SizePolicy::Intersect
    };
    let config = BlendConfig::default()
        .with_input_dir(&cli.input_dir)
        .with_output_dir(&cli.output_dir)
        .with_size_policy(policy);

    let viewer: Box<dyn ImageViewer> = if cli.no_preview {
        Box::new(NullViewer)
    } else {
        Box::new(SystemViewer::new())
    };

    BlendImagesUseCase::new(
        config,
        Box::new(DirectoryLister::new(&cli.input_dir)),
        Box::new(ImageFileLoader::new()),
        Box::new(LinearBlender::new()),
        Box::new(ImageFileWriter::new()),
        viewer,
    )
}
