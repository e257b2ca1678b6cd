//! Fixed-aspect crop and downscale for uploaded images.
//!
//! | Preset       | Ratio | Max width |
//! |--------------|-------|-----------|
//! | `blog-cover` | 16:9  | 1600      |
//! | `project`    | 16:9  | 1600      |
//! | `study`      | 4:3   | 1200      |
//! | `avatar`     | 1:1   | 512       |
//!
//! Any `W:H` ratio is accepted as well (no width limit).

use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, ImageError, ImageFormat};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CropError {
    #[error("unknown aspect '{0}', expected a preset or a ratio like 16:9")]
    UnknownAspect(String),

    #[error("'{}' has no supported image extension (png, jpg, webp)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("image has no pixels")]
    Empty,

    #[error("failed to create '{}'", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error(transparent)]
    Image(#[from] ImageError),
}

/// Named crop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectPreset {
    pub name: &'static str,
    pub ratio: (u32, u32),
    pub max_width: u32,
}

pub const PRESETS: &[AspectPreset] = &[
    AspectPreset {
        name: "blog-cover",
        ratio: (16, 9),
        max_width: 1600,
    },
    AspectPreset {
        name: "project",
        ratio: (16, 9),
        max_width: 1600,
    },
    AspectPreset {
        name: "study",
        ratio: (4, 3),
        max_width: 1200,
    },
    AspectPreset {
        name: "avatar",
        ratio: (1, 1),
        max_width: 512,
    },
];

/// Resolved crop parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropSpec {
    pub ratio: (u32, u32),
    pub max_width: Option<u32>,
}

impl CropSpec {
    /// Parse a preset name or a `W:H` ratio.
    pub fn parse(aspect: &str) -> Result<Self, CropError> {
        let aspect = aspect.trim();
        if let Some(preset) = PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(aspect)) {
            return Ok(Self {
                ratio: preset.ratio,
                max_width: Some(preset.max_width),
            });
        }

        let unknown = || CropError::UnknownAspect(aspect.to_string());
        let (w, h) = aspect.split_once(':').ok_or_else(unknown)?;
        let w: u32 = w.trim().parse().map_err(|_| unknown())?;
        let h: u32 = h.trim().parse().map_err(|_| unknown())?;
        if w == 0 || h == 0 {
            return Err(unknown());
        }

        Ok(Self {
            ratio: (w, h),
            max_width: None,
        })
    }

    pub fn with_max_width(mut self, max_width: Option<u32>) -> Self {
        if max_width.is_some() {
            self.max_width = max_width;
        }
        self
    }

    /// Largest centered `(x, y, width, height)` window with this ratio.
    pub fn window(&self, width: u32, height: u32) -> (u32, u32, u32, u32) {
        let (rw, rh) = (u64::from(self.ratio.0), u64::from(self.ratio.1));
        let (w, h) = (u64::from(width), u64::from(height));

        let (cw, ch) = if w * rh > h * rw {
            (h * rw / rh, h)
        } else {
            (w, w * rh / rw)
        };
        let (cw, ch) = (cw.max(1) as u32, ch.max(1) as u32);

        ((width - cw) / 2, (height - ch) / 2, cw, ch)
    }
}

/// Center-crop to the ratio, then downscale to `max_width`. Never upscales.
pub fn crop_image(img: &DynamicImage, spec: &CropSpec) -> Result<DynamicImage, CropError> {
    let (width, height) = (img.width(), img.height());
    if width == 0 || height == 0 {
        return Err(CropError::Empty);
    }

    let (x, y, cw, ch) = spec.window(width, height);
    let cropped = img.crop_imm(x, y, cw, ch);

    match spec.max_width {
        Some(max) if max > 0 && cw > max => {
            let scaled_h = (u64::from(ch) * u64::from(max) / u64::from(cw)).max(1) as u32;
            Ok(cropped.resize_exact(max, scaled_h, FilterType::Lanczos3))
        }
        _ => Ok(cropped),
    }
}

/// Crop `input` and write `output`, format chosen by extension.
/// Returns the output dimensions.
pub fn crop_file(input: &Path, output: &Path, spec: &CropSpec) -> Result<(u32, u32), CropError> {
    let format = output_format(output)?;
    let img = image::open(input)?;
    let cropped = crop_image(&img, spec)?;

    // JPEG has no alpha channel; the lossless WebP encoder wants 8-bit RGBA.
    let cropped = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(cropped.to_rgb8()),
        ImageFormat::WebP => DynamicImage::ImageRgba8(cropped.to_rgba8()),
        _ => cropped,
    };

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| CropError::Io(parent.to_path_buf(), e))?;
    }

    cropped.save_with_format(output, format)?;
    Ok((cropped.width(), cropped.height()))
}

fn output_format(path: &Path) -> Result<ImageFormat, CropError> {
    match ImageFormat::from_path(path) {
        Ok(format @ (ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::WebP)) => Ok(format),
        _ => Err(CropError::UnsupportedFormat(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn square(size: u32) -> DynamicImage {
        RgbImage::from_pixel(size, size, Rgb([200, 100, 50])).into()
    }

    #[test]
    fn test_parse_presets() {
        let spec = CropSpec::parse("blog-cover").unwrap();
        assert_eq!(spec.ratio, (16, 9));
        assert_eq!(spec.max_width, Some(1600));

        assert_eq!(CropSpec::parse("Avatar").unwrap().max_width, Some(512));
        assert_eq!(CropSpec::parse("study").unwrap().ratio, (4, 3));
    }

    #[test]
    fn test_parse_custom_ratio() {
        let spec = CropSpec::parse("3:2").unwrap();
        assert_eq!(spec.ratio, (3, 2));
        assert_eq!(spec.max_width, None);
        assert_eq!(spec.with_max_width(Some(900)).max_width, Some(900));

        for bad in ["wide", "0:1", "16:", "a:b"] {
            assert!(matches!(CropSpec::parse(bad), Err(CropError::UnknownAspect(_))));
        }
    }

    #[test]
    fn test_square_to_wide() {
        let spec = CropSpec::parse("16:9").unwrap();
        let out = crop_image(&square(1000), &spec).unwrap();
        assert_eq!((out.width(), out.height()), (1000, 562));
        assert_eq!(spec.window(1000, 1000), (0, 219, 1000, 562));
    }

    #[test]
    fn test_wide_to_square() {
        let spec = CropSpec::parse("1:1").unwrap();
        assert_eq!(spec.window(400, 100), (150, 0, 100, 100));
    }

    #[test]
    fn test_downscale_only() {
        let spec = CropSpec::parse("avatar").unwrap();
        let big = crop_image(&square(1024), &spec).unwrap();
        assert_eq!((big.width(), big.height()), (512, 512));

        let small = crop_image(&square(300), &spec).unwrap();
        assert_eq!((small.width(), small.height()), (300, 300));
    }

    #[test]
    fn test_crop_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        square(64).save(&input).unwrap();

        let output = dir.path().join("out/cover.jpg");
        let spec = CropSpec::parse("4:3").unwrap();
        let dims = crop_file(&input, &output, &spec).unwrap();
        assert_eq!(dims, (64, 48));

        let written = image::open(&output).unwrap();
        assert_eq!((written.width(), written.height()), (64, 48));
    }

    #[test]
    fn test_unsupported_output() {
        let spec = CropSpec::parse("1:1").unwrap();
        let err = crop_file(Path::new("in.png"), Path::new("out.bmp"), &spec).unwrap_err();
        assert!(matches!(err, CropError::UnsupportedFormat(_)));
    }
}
