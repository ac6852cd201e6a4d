//! Pix regression test
//!
//! Tests creation, copying, and color access on the RGBA container.

use regionfind_core::{Color, Pix, PixelGrid, Point, Region};
use regionfind_test::RegParams;

fn make_stripes(w: u32, h: u32) -> Pix {
    let mut pm = Pix::new(w, h).unwrap().to_mut();
    for y in 0..h {
        for x in 0..w {
            let c = if x % 2 == 0 { Color::RED } else { Color::BLUE };
            pm.set_color(x, y, c).unwrap();
        }
    }
    pm.into()
}

#[test]
fn pix_reg() {
    let mut rp = RegParams::new("pix");

    // Test 1: Dimensions
    let pix = make_stripes(7, 5);
    rp.compare_values(7.0, pix.width() as f64, 0.0);
    rp.compare_values(5.0, pix.height() as f64, 0.0);
    rp.compare_values(35.0, pix.data().len() as f64, 0.0);

    // Test 2: Deep copy keeps pixels, drops sharing
    let copy = pix.deep_clone();
    rp.compare_pix(&pix, &copy);
    rp.compare_values(1.0, pix.ref_count() as f64, 0.0);

    // Test 3: Editing a mutable copy leaves the source alone
    let mut pm = pix.to_mut();
    pm.set_color(0, 0, Color::GREEN).unwrap();
    let edited: Pix = pm.into();
    rp.compare_values(
        1.0,
        if pix.get_color(0, 0) == Some(Color::RED) { 1.0 } else { 0.0 },
        0.0,
    );
    rp.compare_values(
        1.0,
        if edited.get_color(0, 0) == Some(Color::GREEN) { 1.0 } else { 0.0 },
        0.0,
    );

    // Test 4: Grid trait view agrees with direct access
    let mut mismatches = 0;
    for y in 0..pix.height() {
        for x in 0..pix.width() {
            if Some(pix.color_at(x, y)) != pix.get_color(x, y) {
                mismatches += 1;
            }
        }
    }
    rp.compare_values(0.0, mismatches as f64, 0.0);

    // Test 5: Region geometry over a stripe column
    let column: Region = (0..5).map(|y| Point::new(2, y)).collect();
    rp.compare_values(5.0, column.len() as f64, 0.0);
    let (cx, cy) = column.centroid().unwrap();
    rp.compare_values(2.0, cx as f64, 1e-6);
    rp.compare_values(2.0, cy as f64, 1e-6);

    assert!(rp.cleanup(), "pix regression test failed");
}

#[test]
fn test_create_template_is_blank_and_same_size() {
    let pix = make_stripes(4, 4);
    let blank = pix.create_template();
    assert!(pix.sizes_equal(&blank));
    assert!(blank.data().iter().all(|&p| p == 0));
}
