use std::io::Write;
use std::path::PathBuf;

use blendimg_core::blending::domain::ratio_validator;
use blendimg_core::pipeline::blend_images_use_case::BlendImagesUseCase;

use crate::prompt::Prompter;

/// Drives one interactive blend: ratio, listing, both sources, output name.
///
/// Prompts and the listing go to `out`; the listing failure goes to `err`
/// and the session carries on without it.
pub fn run_session(
    use_case: &BlendImagesUseCase,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    writeln!(out, "* Simple Linear Blender ")?;
    writeln!(out, "-----------------------")?;
    write!(out, "* Enter alpha [0.0-1.0]: ")?;
    out.flush()?;
    let weight = ratio_validator::parse_ratio(&prompter.read_answer()?);
    log::info!("Using {weight}");

    writeln!(out, "  Input first image name from selection below ")?;
    writeln!(out)?;
    writeln!(out, "  ------------------------------------------- ")?;
    match use_case.list_images() {
        Ok(names) => {
            for name in names {
                writeln!(out, "{name}")?;
            }
            writeln!(out)?;
        }
        Err(e) => {
            log::warn!("{e}");
            writeln!(err, "{e}")?;
        }
    }
    writeln!(out, "  -----------------------   ")?;
    out.flush()?;
    let first = prompter.read_answer()?;

    writeln!(out, "  Input second image name  ")?;
    writeln!(out, "  -----------------------   ")?;
    out.flush()?;
    let second = prompter.read_answer()?;

    let (a, b) = use_case.load_pair(&first, &second)?;
    let blended = use_case.blend(&a, &b, weight)?;

    writeln!(out, "  Input output image name WITHOUT file extension ")?;
    writeln!(out, "  ---------------------------------------------- ")?;
    out.flush()?;
    let output_name = prompter.read_answer()?;

    Ok(use_case.export(&blended, &output_name)?)
}
