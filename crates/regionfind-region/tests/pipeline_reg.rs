//! File pipeline regression test
//!
//! Writes a synthetic image to disk, reads it back, finds regions in it,
//! and writes the recolored result.

use regionfind_core::{Color, ImageFormat, Pix};
use regionfind_io::{read_image, write_image};
use regionfind_region::RegionFinder;
use regionfind_test::RegParams;

fn bool_value(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

fn make_target_image() -> Pix {
    // 64x48 dark background, a 20x10 orange block and a 4x4 orange speck
    let orange = Color::new(250, 130, 20);
    let mut pm = Pix::new_filled(64, 48, Color::new(20, 20, 30))
        .unwrap()
        .to_mut();
    for y in 10..20 {
        for x in 8..28 {
            pm.set_color(x, y, orange).unwrap();
        }
    }
    for y in 40..44 {
        for x in 50..54 {
            pm.set_color(x, y, orange).unwrap();
        }
    }
    pm.into()
}

#[test]
fn pipeline_reg() {
    let mut rp = RegParams::new("pipeline");
    let dir = std::env::temp_dir();
    let input = dir.join(format!("regionfind_pipeline_{}.png", std::process::id()));
    let output = dir.join(format!("regionfind_pipeline_{}_out.png", std::process::id()));

    write_image(&make_target_image(), &input, ImageFormat::Png).unwrap();
    let pix = read_image(&input).unwrap();
    rp.compare_pix(&make_target_image(), &pix);
    rp.compare_values(1.0, bool_value(pix.informat() == ImageFormat::Png), 0.0);

    // Search with a slightly different shade of orange
    let mut finder = RegionFinder::with_image(pix);
    let regions = finder.find_regions(Color::new(240, 140, 30)).unwrap();
    rp.compare_values(1.0, regions.len() as f64, 0.0);
    rp.compare_values(200.0, regions[0].len() as f64, 0.0);

    let largest = finder.largest_region().unwrap().map(|r| r.bounding_box());
    rp.compare_values(1.0, bool_value(largest == Some(Some((8, 10, 27, 19)))), 0.0);

    let recolored = finder.recolor_image().unwrap().clone();
    write_image(&recolored, &output, ImageFormat::Png).unwrap();
    let reread = read_image(&output).unwrap();
    rp.compare_pix(&recolored, &reread);
    rp.write_pix(&recolored, ImageFormat::Png).unwrap();

    std::fs::remove_file(&input).ok();
    std::fs::remove_file(&output).ok();
    assert!(rp.cleanup(), "pipeline regression test failed");
}
