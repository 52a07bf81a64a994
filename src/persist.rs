use crate::background::Canvas;
use crate::error::LogoError;
use image::{DynamicImage, ImageFormat};
use std::fs;
use std::io::Cursor;
use std::path::Path;

const METERS_PER_INCH: f64 = 0.0254;

/// Encodes `canvas` by file extension and writes it to `path`, replacing any
/// existing file. The image is fully encoded before the file is touched.
pub fn save_canvas<P: AsRef<Path>>(canvas: &Canvas, path: P, dpi: Option<u32>) -> Result<(), LogoError> {
    let path = path.as_ref();

    let format = ImageFormat::from_path(path)
        .map_err(|e| LogoError::Encoding(format!("{}: {}", path.display(), e)))?;

    let bytes = match format {
        ImageFormat::Png => encode_png(canvas, dpi)?,
        ImageFormat::Jpeg => {
            if dpi.is_some() {
                log::warn!("⚠ DPI metadata is only written for PNG output, ignoring for {}", path.display());
            }
            encode_jpeg(canvas)?
        }
        other => {
            return Err(LogoError::Encoding(format!(
                "Unsupported output format {:?} for {}",
                other,
                path.display()
            )))
        }
    };

    fs::write(path, &bytes).map_err(|source| LogoError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("💾 Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

pub fn dpi_to_pixels_per_meter(dpi: u32) -> u32 {
    (f64::from(dpi) / METERS_PER_INCH).round() as u32
}

fn encode_png(canvas: &Canvas, dpi: Option<u32>) -> Result<Vec<u8>, LogoError> {
    let mut bytes = Vec::new();

    let mut encoder = png::Encoder::new(&mut bytes, canvas.width(), canvas.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    if let Some(dpi) = dpi {
        let ppm = dpi_to_pixels_per_meter(dpi);
        encoder.set_pixel_dims(Some(png::PixelDimensions {
            xppu: ppm,
            yppu: ppm,
            unit: png::Unit::Meter,
        }));
    }

    let mut writer = encoder
        .write_header()
        .map_err(|e| LogoError::Encoding(e.to_string()))?;
    writer
        .write_image_data(canvas.as_raw())
        .map_err(|e| LogoError::Encoding(e.to_string()))?;
    writer.finish().map_err(|e| LogoError::Encoding(e.to_string()))?;

    Ok(bytes)
}

fn encode_jpeg(canvas: &Canvas) -> Result<Vec<u8>, LogoError> {
    // JPEG has no alpha channel
    let rgb = DynamicImage::ImageRgba8(canvas.clone()).into_rgb8();

    let mut cursor = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(rgb)
        .write_to(&mut cursor, ImageFormat::Jpeg)
        .map_err(|e| LogoError::Encoding(e.to_string()))?;

    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::background::{BackgroundGenerator, IridescentGenerator};
    use image::GenericImageView;
    use tempfile::tempdir;

    #[test]
    fn test_png_round_trip_keeps_dimensions() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logo.png");
        let canvas = IridescentGenerator::new(11).generate(96, 40, true).unwrap();

        save_canvas(&canvas, &path, Some(600)).unwrap();

        let reloaded = image::open(&path).unwrap();
        assert_eq!(reloaded.dimensions(), canvas.dimensions());
        assert_eq!(reloaded.to_rgba8(), canvas);
    }

    #[test]
    fn test_png_carries_dpi() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dpi.png");
        let canvas = Canvas::new(8, 8);

        save_canvas(&canvas, &path, Some(600)).unwrap();

        let decoder = png::Decoder::new(fs::File::open(&path).unwrap());
        let reader = decoder.read_info().unwrap();
        let dims = reader.info().pixel_dims.expect("pHYs chunk missing");
        assert_eq!(dims.xppu, 23622);
        assert_eq!(dims.yppu, 23622);
        assert_eq!(dims.unit, png::Unit::Meter);
    }

    #[test]
    fn test_png_without_dpi_has_no_phys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plain.png");

        save_canvas(&Canvas::new(4, 4), &path, None).unwrap();

        let reader = png::Decoder::new(fs::File::open(&path).unwrap()).read_info().unwrap();
        assert!(reader.info().pixel_dims.is_none());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logo.png");
        fs::write(&path, b"stale").unwrap();

        save_canvas(&Canvas::new(3, 2), &path, None).unwrap();
        assert_eq!(image::open(&path).unwrap().dimensions(), (3, 2));
    }

    #[test]
    fn test_jpeg_output() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logo.jpg");
        let canvas = IridescentGenerator::new(2).generate(20, 10, false).unwrap();

        save_canvas(&canvas, &path, Some(300)).unwrap();
        assert_eq!(image::open(&path).unwrap().dimensions(), (20, 10));
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("logo.png");

        match save_canvas(&Canvas::new(2, 2), &path, None) {
            Err(LogoError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Io error, got {:?}", other),
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logo.xyz");

        assert!(matches!(save_canvas(&Canvas::new(2, 2), &path, None), Err(LogoError::Encoding(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_dpi_conversion() {
        assert_eq!(dpi_to_pixels_per_meter(72), 2835);
        assert_eq!(dpi_to_pixels_per_meter(300), 11811);
        assert_eq!(dpi_to_pixels_per_meter(600), 23622);
    }
}
