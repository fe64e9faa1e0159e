//! Procedural Textures Library
//!
//! Generates the small set of tiled textures a game loads at startup:
//! checkerboards, stripes, noisy metallic surfaces, brick walls and grass.
//! Every pattern is a per-pixel function of its coordinates (plus one random
//! draw for the noisy patterns), rendered into a square RGB `PixelBuffer`
//! and written out as PNG.
//!
//! # Quick Start
//!
//! ## Rendering a single texture
//!
//! ```no_run
//! use procedural_textures::{
//!     save_texture_to_png, BrickConfig, Color, PatternConfig, TextureConfig, TextureGenerator,
//! };
//!
//! let pattern = PatternConfig::Brick(BrickConfig {
//!     brick_color: Color::new(178, 34, 34),
//!     mortar_color: Color::new(200, 200, 200),
//!     ..Default::default()
//! });
//!
//! let generator = TextureGenerator::new(TextureConfig::new(pattern).with_seed(42)).unwrap();
//! let buffer = generator.generate().unwrap();
//! save_texture_to_png(&buffer, "brick.png").unwrap();
//! ```
//!
//! ## Generating the game's texture set
//!
//! ```no_run
//! use procedural_textures::{default_catalog, generate_catalog, CatalogOptions};
//!
//! let written = generate_catalog(&default_catalog(), &CatalogOptions::default()).unwrap();
//! for texture in written {
//!     println!("{} ({})", texture.path.display(), texture.description);
//! }
//! ```
//!
//! # Randomness
//!
//! Noisy patterns take their random stream explicitly. `TextureGenerator`
//! seeds a `StdRng` from `TextureConfig::seed` (or OS entropy), and
//! `PatternConfig::render_with` accepts any `rand::Rng`, so seeded renders
//! are reproducible byte for byte.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

/// Pixel buffer and PNG output
pub mod buffer;
/// Texture catalog and batch generation
pub mod catalog;
/// RGB color type
pub mod color;
/// Texture generator, pattern selection and errors
pub mod generator;
/// Per-pattern parameters and pixel rules
pub mod patterns;

// Re-export main types for convenience
pub use buffer::{save_texture_to_png, PixelBuffer};
pub use catalog::{
    default_catalog, generate_catalog, CatalogOptions, GeneratedTexture, TextureAsset,
};
pub use color::Color;
pub use generator::{
    generate_brick, generate_checker, generate_grass, generate_metallic, generate_stripes,
    render, PatternConfig, Result, TextureConfig, TextureError, TextureGenerator,
};
pub use patterns::{
    BrickConfig, CheckerConfig, GrassConfig, MetallicConfig, Pattern, StripeConfig, DEFAULT_SIZE,
    MAX_SIZE,
};
