/**
 * Procedural Texture Generator
 *
 * Renders one of the five pattern families into a `PixelBuffer`.
 *
 * RANDOMNESS
 * ==========
 * Noisy patterns never reach for a process-wide random source. The random
 * stream is passed in explicitly: `TextureGenerator` owns a `StdRng` seeded
 * from `TextureConfig::seed`, falling back to OS entropy when no seed is
 * given, and `render` accepts any caller-supplied `Rng`. Two generators
 * built from the same seed and pattern produce byte-identical buffers.
 *
 * VALIDATION
 * ==========
 * Parameters are checked once, before any pixel is produced. An invalid
 * configuration never yields a partial buffer.
 *
 * EVALUATION ORDER
 * ================
 * Pixels are visited row by row, left to right, drawing at most two random
 * values per pixel (grass draws the blade decision, then the offset). The
 * order only matters for reproducing a seeded buffer.
 */

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::patterns::{
    BrickConfig, CheckerConfig, GrassConfig, MetallicConfig, Pattern, StripeConfig,
};

/// Error types for texture generation
#[derive(Error, Debug)]
pub enum TextureError {
    /// A size, tile or noise parameter cannot be rendered
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending config field
        name: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Invalid hex color string format
    #[error("Invalid hex color: {0}")]
    InvalidHexColor(String),

    /// Failed to encode or write an image
    #[error("Failed to save image: {0}")]
    ImageSaveError(#[from] image::ImageError),

    /// Failed to prepare the output location
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for texture operations
pub type Result<T> = std::result::Result<T, TextureError>;

/// One of the five supported pattern families with its parameters
#[derive(Debug, Clone, PartialEq)]
pub enum PatternConfig {
    /// Two-color checkerboard
    Checker(CheckerConfig),
    /// Two-color horizontal stripes
    Stripe(StripeConfig),
    /// Base color with per-pixel brightness noise
    Metallic(MetallicConfig),
    /// Running-bond brick wall
    Brick(BrickConfig),
    /// Grass turf with random blades
    Grass(GrassConfig),
}

impl PatternConfig {
    /// Short lowercase name of the pattern family
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Checker(_) => "checker",
            Self::Stripe(_) => "stripe",
            Self::Metallic(_) => "metallic",
            Self::Brick(_) => "brick",
            Self::Grass(_) => "grass",
        }
    }

    /// Pixels per side of the rendered texture
    pub fn size(&self) -> usize {
        match self {
            Self::Checker(c) => c.size(),
            Self::Stripe(c) => c.size(),
            Self::Metallic(c) => c.size(),
            Self::Brick(c) => c.size(),
            Self::Grass(c) => c.size(),
        }
    }

    /// Whether rendering consumes random numbers
    pub fn is_stochastic(&self) -> bool {
        !matches!(self, Self::Checker(_) | Self::Stripe(_))
    }

    /// Check parameters without rendering
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Checker(c) => c.validate(),
            Self::Stripe(c) => c.validate(),
            Self::Metallic(c) => c.validate(),
            Self::Brick(c) => c.validate(),
            Self::Grass(c) => c.validate(),
        }
    }

    /// Render using the given random stream
    pub fn render_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<PixelBuffer> {
        match self {
            Self::Checker(c) => render(c, rng),
            Self::Stripe(c) => render(c, rng),
            Self::Metallic(c) => render(c, rng),
            Self::Brick(c) => render(c, rng),
            Self::Grass(c) => render(c, rng),
        }
    }
}

/// Configuration for a single texture render
#[derive(Debug, Clone, PartialEq)]
pub struct TextureConfig {
    /// Pattern family and its parameters
    pub pattern: PatternConfig,
    /// Optional random seed for reproducible results
    pub seed: Option<u64>,
}

impl TextureConfig {
    /// Unseeded configuration for `pattern`
    pub fn new(pattern: PatternConfig) -> Self {
        Self {
            pattern,
            seed: None,
        }
    }

    /// Same configuration with a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/**
 * Renders a validated pattern with its own random stream
 */
pub struct TextureGenerator {
    pattern: PatternConfig,
    rng: StdRng,
}

impl TextureGenerator {
    /// Create a new generator, validating the configuration
    pub fn new(config: TextureConfig) -> Result<Self> {
        config.pattern.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            pattern: config.pattern,
            rng,
        })
    }

    /// The pattern this generator renders
    pub fn pattern(&self) -> &PatternConfig {
        &self.pattern
    }

    /// Generate the texture
    pub fn generate(mut self) -> Result<PixelBuffer> {
        let start_time = std::time::Instant::now();
        let buffer = self.pattern.render_with(&mut self.rng)?;

        debug!(
            "Rendered {} texture {}×{} in {:.2}ms",
            self.pattern.kind(),
            buffer.size(),
            buffer.size(),
            start_time.elapsed().as_secs_f64() * 1000.0
        );

        Ok(buffer)
    }
}

/**
 * Validate `pattern` and evaluate it at every pixel
 */
pub fn render<P, R>(pattern: &P, rng: &mut R) -> Result<PixelBuffer>
where
    P: Pattern,
    R: Rng + ?Sized,
{
    pattern.validate()?;
    Ok(PixelBuffer::from_fn(pattern.size(), |row, col| {
        pattern.sample(row, col, &mut *rng)
    }))
}

/**
 * Convenience function to generate a checkerboard texture
 */
pub fn generate_checker(
    color1: Color,
    color2: Color,
    size: usize,
    checker_size: usize,
) -> Result<PixelBuffer> {
    let config = CheckerConfig {
        color1,
        color2,
        size,
        checker_size,
    };
    config.validate()?;
    Ok(PixelBuffer::from_fn(size, |row, col| config.color_at(row, col)))
}

/**
 * Convenience function to generate a horizontally striped texture
 */
pub fn generate_stripes(
    color1: Color,
    color2: Color,
    size: usize,
    stripe_size: usize,
) -> Result<PixelBuffer> {
    let config = StripeConfig {
        color1,
        color2,
        size,
        stripe_size,
    };
    config.validate()?;
    Ok(PixelBuffer::from_fn(size, |row, col| config.color_at(row, col)))
}

/**
 * Convenience function to generate an unseeded metallic texture
 */
pub fn generate_metallic(base_color: Color, size: usize) -> Result<PixelBuffer> {
    let pattern = PatternConfig::Metallic(MetallicConfig {
        base_color,
        size,
        ..Default::default()
    });
    TextureGenerator::new(TextureConfig::new(pattern))?.generate()
}

/**
 * Convenience function to generate an unseeded brick texture
 */
pub fn generate_brick(brick_color: Color, mortar_color: Color, size: usize) -> Result<PixelBuffer> {
    let pattern = PatternConfig::Brick(BrickConfig {
        brick_color,
        mortar_color,
        size,
        ..Default::default()
    });
    TextureGenerator::new(TextureConfig::new(pattern))?.generate()
}

/**
 * Convenience function to generate an unseeded grass texture
 */
pub fn generate_grass(size: usize) -> Result<PixelBuffer> {
    let pattern = PatternConfig::Grass(GrassConfig {
        size,
        ..Default::default()
    });
    TextureGenerator::new(TextureConfig::new(pattern))?.generate()
}
