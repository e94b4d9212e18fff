//! Quantizing a small synthetic image at several palette sizes.

use quantree::{Quantizer, Rgb};
use std::collections::HashSet;

fn main() {
    // A 4x4 image with three "families" of colors: darks, mid grays, reds.
    let pixels = vec![
        Rgb::new(0, 0, 0),
        Rgb::new(5, 5, 5),
        Rgb::new(10, 10, 10),
        Rgb::new(0, 0, 0),
        Rgb::new(120, 120, 120),
        Rgb::new(125, 125, 125),
        Rgb::new(130, 130, 130),
        Rgb::new(120, 120, 120),
        Rgb::new(250, 10, 10),
        Rgb::new(245, 14, 8),
        Rgb::new(252, 8, 12),
        Rgb::new(250, 10, 10),
        Rgb::new(5, 5, 5),
        Rgb::new(125, 125, 125),
        Rgb::new(245, 14, 8),
        Rgb::new(0, 0, 0),
    ];

    for k in [1, 2, 3, 6] {
        let result = Quantizer::new(k).quantize(&pixels, 4, 4).unwrap();
        let palette: HashSet<Rgb> = result.pixels.iter().copied().collect();

        println!("=== k = {k} ===");
        println!("  distinct colors in : {}", result.distinct_colors);
        println!("  distinct colors out: {}", palette.len());
        println!("  MST weight         : {:.3}", result.mst_weight);
        for color in &palette {
            println!("  palette entry      : ({}, {}, {})", color.red, color.green, color.blue);
        }
        println!();
    }
}
