/**
 * Example: Using procedural-textures as a library
 *
 * This example renders patterns in memory with a caller-owned random
 * stream and composites them into a single preview sheet without going
 * through the catalog.
 *
 * Run with:
 *   cargo run --example library_integration
 */

use image::{imageops, RgbImage};
use procedural_textures::{default_catalog, PixelBuffer};
use rand::rngs::StdRng;
use rand::SeedableRng;

const TILE: u32 = 256;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Procedural Textures Library Integration Example\n");

    // Step 1: One random stream shared by every render, owned by us
    let mut rng = StdRng::seed_from_u64(12345);

    // Step 2: Render every catalog pattern in memory
    println!("1. Rendering catalog patterns in memory...");
    let catalog = default_catalog();
    let mut buffers: Vec<(&str, PixelBuffer)> = Vec::with_capacity(catalog.len());
    for asset in &catalog {
        let buffer = asset.pattern.render_with(&mut rng)?;
        println!("   ✓ {} ({})", asset.name, asset.pattern.kind());
        buffers.push((asset.name, buffer));
    }

    // Step 3: Lay them out side by side on a contact sheet
    println!("\n2. Compositing contact sheet...");
    let mut sheet = RgbImage::new(TILE * buffers.len() as u32, TILE);
    for (index, (_, buffer)) in buffers.iter().enumerate() {
        let tile = buffer.to_rgb_image();
        imageops::replace(&mut sheet, &tile, i64::from(TILE) * index as i64, 0);
    }

    sheet.save("example-contact-sheet.png")?;
    println!("   ✓ Saved example-contact-sheet.png");

    // Step 4: Brightness summary per texture
    println!("\n3. Average brightness:");
    for (name, buffer) in &buffers {
        let total: u64 = buffer.as_raw().iter().map(|&v| u64::from(v)).sum();
        let mean = total as f64 / buffer.as_raw().len() as f64;
        println!("   {:<22} {:>6.1}", name, mean);
    }

    println!("\n✓ Library integration example complete!");

    Ok(())
}
