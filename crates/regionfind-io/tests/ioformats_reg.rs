//! Image format regression test
//!
//! Writes a small image in each supported format, reads it back, and checks
//! what each format is expected to preserve.

use regionfind_core::{Color, ImageFormat, Pix};
use regionfind_io::{IoError, read_image, write_image};
use regionfind_test::RegParams;
use std::path::PathBuf;

fn make_quadrants() -> Pix {
    let (w, h) = (16u32, 12u32);
    let mut pm = Pix::new(w, h).unwrap().to_mut();
    for y in 0..h {
        for x in 0..w {
            let c = match (x < w / 2, y < h / 2) {
                (true, true) => Color::new(200, 80, 80),
                (false, true) => Color::new(80, 200, 80),
                (true, false) => Color::new(80, 80, 200),
                (false, false) => Color::new(200, 200, 80),
            };
            pm.set_color(x, y, c).unwrap();
        }
    }
    pm.into()
}

fn temp_path(name: &str, format: ImageFormat) -> PathBuf {
    std::env::temp_dir().join(format!(
        "regionfind_{}_{}.{}",
        name,
        std::process::id(),
        format.extension()
    ))
}

#[test]
fn ioformats_reg() {
    let mut rp = RegParams::new("ioformats");
    let pix = make_quadrants();

    // Test 1: Lossless formats round-trip exactly
    for format in [ImageFormat::Png, ImageFormat::Bmp, ImageFormat::Pnm] {
        let path = temp_path("lossless", format);
        write_image(&pix, &path, format).unwrap();
        let back = read_image(&path).unwrap();
        rp.compare_pix(&pix, &back);
        rp.compare_values(1.0, if back.informat() == format { 1.0 } else { 0.0 }, 0.0);
        let _ = std::fs::remove_file(&path);
    }

    // Test 2: JPEG keeps size and approximate color
    let path = temp_path("lossy", ImageFormat::Jpeg);
    write_image(&pix, &path, ImageFormat::Jpeg).unwrap();
    let back = read_image(&path).unwrap();
    rp.compare_values(16.0, back.width() as f64, 0.0);
    rp.compare_values(12.0, back.height() as f64, 0.0);
    let (r, g, b) = back.get_rgb(2, 2).unwrap();
    rp.compare_values(200.0, r as f64, 20.0);
    rp.compare_values(80.0, g as f64, 20.0);
    rp.compare_values(80.0, b as f64, 20.0);
    let _ = std::fs::remove_file(&path);

    assert!(rp.cleanup(), "ioformats regression test failed");
}

#[test]
fn test_write_unknown_format_fails() {
    let pix = make_quadrants();
    let path = temp_path("unknown", ImageFormat::Unknown);
    assert!(matches!(
        write_image(&pix, &path, ImageFormat::Unknown),
        Err(IoError::UnsupportedFormat(ImageFormat::Unknown))
    ));
}

#[test]
fn test_read_missing_file_fails() {
    let path = temp_path("missing", ImageFormat::Png);
    assert!(matches!(read_image(&path), Err(IoError::Io(_))));
}
