/**
 * Example: Generate a single brick texture
 *
 * This example demonstrates how to render a brick wall with custom colors
 * and a fixed seed, then save it to a PNG file.
 *
 * Run with:
 *   cargo run --example generate_texture
 */

use procedural_textures::{
    save_texture_to_png, BrickConfig, Color, PatternConfig, TextureConfig, TextureGenerator,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Generating brick texture...\n");

    // Red bricks, light mortar, smaller courses than the catalog default
    let pattern = PatternConfig::Brick(BrickConfig {
        brick_color: Color::from_hex("#b22222")?,
        mortar_color: Color::from_hex("#c8c8c8")?,
        size: 128,
        brick_height: 16,
        brick_width: 32,
        mortar_size: 2,
        ..Default::default()
    });

    // Use a seed for reproducibility
    let config = TextureConfig::new(pattern).with_seed(42);

    let generator = TextureGenerator::new(config)?;
    let buffer = generator.generate()?;

    save_texture_to_png(&buffer, "example-brick-128.png")?;

    println!("Texture saved to example-brick-128.png");
    println!("Size: {}×{} pixels", buffer.size(), buffer.size());
    println!("Data bytes: {}", buffer.as_raw().len());

    Ok(())
}
