//! `folio crop`: prepare an upload for a fixed-ratio slot.

use anyhow::{Context, Result};

use super::args::CropArgs;
use crate::image::{CropSpec, crop_file};
use crate::log;

/// Execute crop command
pub fn run_crop(args: &CropArgs) -> Result<()> {
    let spec = CropSpec::parse(&args.aspect)?.with_max_width(args.width);

    let (width, height) = crop_file(&args.input, &args.output, &spec)
        .with_context(|| format!("Failed to crop {}", args.input.display()))?;

    log!("crop"; "{} ({}×{})", args.output.display(), width, height);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_crop_to_avatar() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        RgbImage::from_pixel(800, 600, Rgb([10, 20, 30]))
            .save(&input)
            .unwrap();

        let args = CropArgs {
            input,
            output: dir.path().join("out/avatar.png"),
            aspect: "avatar".into(),
            width: Some(256),
        };
        run_crop(&args).unwrap();

        let out = image::open(&args.output).unwrap();
        assert_eq!((out.width(), out.height()), (256, 256));
    }

    #[test]
    fn test_unknown_aspect() {
        let dir = tempfile::tempdir().unwrap();
        let args = CropArgs {
            input: dir.path().join("in.png"),
            output: dir.path().join("out.png"),
            aspect: "widescreen".into(),
            width: None,
        };
        assert!(run_crop(&args).is_err());
    }
}
