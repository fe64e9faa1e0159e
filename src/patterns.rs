/**
 * Procedural Pattern Definitions
 *
 * Each pattern is a function from pixel coordinates (plus, for the noisy
 * ones, a single random draw) to a color. Nothing is carried between pixels
 * or between calls, so every pixel can be evaluated independently.
 *
 * DETERMINISTIC PATTERNS
 * ======================
 * Checker: tile parity `(row / tile + col / tile) % 2` picks color one or two.
 * Stripes: horizontal bands, `(row / thickness) % 2` picks the color.
 *
 * NOISY PATTERNS
 * ==============
 * Noise is always one integer offset per pixel, added to all three channels
 * and clamped. That perturbs brightness only; the hue of the base color is
 * kept.
 *
 * Metallic: base color ± U[-20, 20].
 * Brick:    running bond. Mortar is exact, brick faces get ± U[-15, 15].
 * Grass:    10% "blade" pixels get ± U[-30, 30], the turf ± U[-10, 10].
 *
 * All noise ranges are inclusive on both ends.
 */

use rand::Rng;

use crate::color::Color;
use crate::generator::{Result, TextureError};

/// Default side length of every texture in pixels
pub const DEFAULT_SIZE: usize = 256;

/// Largest side length a pattern will render
pub const MAX_SIZE: usize = 8192;

/// A per-pixel color rule over a square texture
pub trait Pattern {
    /// Pixels per side of the rendered texture
    fn size(&self) -> usize;

    /// Reject parameter combinations that cannot be rendered
    fn validate(&self) -> Result<()>;

    /// Color of the pixel at (row, col)
    ///
    /// Deterministic patterns never touch `rng`. Parameters are not
    /// validated here; out-of-range values produce clamped colors, never a
    /// panic.
    fn sample<R: Rng + ?Sized>(&self, row: usize, col: usize, rng: &mut R) -> Color;
}

fn require_positive(name: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(TextureError::InvalidParameter {
            name,
            reason: "must be positive",
        });
    }
    Ok(())
}

/// Texture side length must be positive and small enough to allocate
fn require_size(size: usize) -> Result<()> {
    require_positive("size", size)?;
    let bytes = size.checked_mul(size).and_then(|n| n.checked_mul(3));
    match bytes {
        Some(_) if size <= MAX_SIZE => Ok(()),
        _ => Err(TextureError::InvalidParameter {
            name: "size",
            reason: "too large",
        }),
    }
}

/// Uniform integer in [-amplitude, amplitude]
#[inline]
fn draw_offset<R: Rng + ?Sized>(rng: &mut R, amplitude: u8) -> i32 {
    let amplitude = i32::from(amplitude);
    rng.gen_range(-amplitude..=amplitude)
}

/// Checkerboard of two alternating colors
#[derive(Debug, Clone, PartialEq)]
pub struct CheckerConfig {
    /// Color of tiles whose parity is even, including the top-left tile
    pub color1: Color,
    /// Color of tiles whose parity is odd
    pub color2: Color,
    /// Texture size in pixels
    pub size: usize,
    /// Tile edge length in pixels
    pub checker_size: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            color1: Color::new(255, 140, 0),
            color2: Color::new(255, 100, 0),
            size: DEFAULT_SIZE,
            checker_size: 32,
        }
    }
}

impl CheckerConfig {
    /// Color at (row, col); tiles past the buffer edge are simply clipped
    #[inline]
    pub fn color_at(&self, row: usize, col: usize) -> Color {
        let tile_row = row / self.checker_size;
        let tile_col = col / self.checker_size;
        if (tile_row + tile_col) % 2 == 0 {
            self.color1
        } else {
            self.color2
        }
    }
}

impl Pattern for CheckerConfig {
    fn size(&self) -> usize {
        self.size
    }

    fn validate(&self) -> Result<()> {
        require_size(self.size)?;
        require_positive("checker_size", self.checker_size)
    }

    fn sample<R: Rng + ?Sized>(&self, row: usize, col: usize, _rng: &mut R) -> Color {
        self.color_at(row, col)
    }
}

/// Horizontal stripes of two alternating colors
#[derive(Debug, Clone, PartialEq)]
pub struct StripeConfig {
    /// Color of the first stripe (starting at row 0)
    pub color1: Color,
    /// Color of the second stripe
    pub color2: Color,
    /// Texture size in pixels
    pub size: usize,
    /// Stripe thickness in rows
    pub stripe_size: usize,
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self {
            color1: Color::new(80, 80, 80),
            color2: Color::new(70, 70, 70),
            size: DEFAULT_SIZE,
            stripe_size: 16,
        }
    }
}

impl StripeConfig {
    /// Color at (row, col); the column never matters
    #[inline]
    pub fn color_at(&self, row: usize, _col: usize) -> Color {
        if (row / self.stripe_size) % 2 == 0 {
            self.color1
        } else {
            self.color2
        }
    }
}

impl Pattern for StripeConfig {
    fn size(&self) -> usize {
        self.size
    }

    fn validate(&self) -> Result<()> {
        require_size(self.size)?;
        require_positive("stripe_size", self.stripe_size)
    }

    fn sample<R: Rng + ?Sized>(&self, row: usize, col: usize, _rng: &mut R) -> Color {
        self.color_at(row, col)
    }
}

/// Brushed-metal look: base color with per-pixel brightness noise
#[derive(Debug, Clone, PartialEq)]
pub struct MetallicConfig {
    /// Base color
    pub base_color: Color,
    /// Texture size in pixels
    pub size: usize,
    /// Noise is drawn from [-noise_amplitude, noise_amplitude]
    pub noise_amplitude: u8,
}

impl Default for MetallicConfig {
    fn default() -> Self {
        Self {
            base_color: Color::new(70, 130, 220),
            size: DEFAULT_SIZE,
            noise_amplitude: 20,
        }
    }
}

impl Pattern for MetallicConfig {
    fn size(&self) -> usize {
        self.size
    }

    fn validate(&self) -> Result<()> {
        require_size(self.size)
    }

    fn sample<R: Rng + ?Sized>(&self, _row: usize, _col: usize, rng: &mut R) -> Color {
        self.base_color.with_offset(draw_offset(rng, self.noise_amplitude))
    }
}

/// Running-bond brick wall with exact-colored mortar joints
#[derive(Debug, Clone, PartialEq)]
pub struct BrickConfig {
    /// Brick face color (noise is applied to it)
    pub brick_color: Color,
    /// Mortar color (used verbatim)
    pub mortar_color: Color,
    /// Texture size in pixels
    pub size: usize,
    /// Height of one course of bricks, including its mortar bed
    pub brick_height: usize,
    /// Width of one brick, excluding its mortar joint
    pub brick_width: usize,
    /// Mortar joint thickness
    pub mortar_size: usize,
    /// Brick face noise is drawn from [-noise_amplitude, noise_amplitude]
    pub noise_amplitude: u8,
}

impl Default for BrickConfig {
    fn default() -> Self {
        Self {
            brick_color: Color::new(128, 0, 128),
            mortar_color: Color::new(90, 0, 90),
            size: DEFAULT_SIZE,
            brick_height: 32,
            brick_width: 64,
            mortar_size: 4,
            noise_amplitude: 15,
        }
    }
}

impl BrickConfig {
    /// Whether (row, col) falls on a mortar joint
    ///
    /// Odd courses are shifted by half a brick so the vertical joints
    /// stagger from one course to the next.
    #[inline]
    pub fn is_mortar(&self, row: usize, col: usize) -> bool {
        let course = row / self.brick_height;
        let offset = (course % 2) * (self.brick_width / 2);
        let joint_col = (col + offset) % (self.brick_width + self.mortar_size);

        row % self.brick_height < self.mortar_size || joint_col < self.mortar_size
    }
}

impl Pattern for BrickConfig {
    fn size(&self) -> usize {
        self.size
    }

    fn validate(&self) -> Result<()> {
        require_size(self.size)?;
        require_positive("brick_height", self.brick_height)?;
        require_positive("brick_width", self.brick_width)?;
        require_positive("mortar_size", self.mortar_size)?;
        if self.brick_width.checked_add(self.mortar_size).is_none() {
            return Err(TextureError::InvalidParameter {
                name: "brick_width",
                reason: "too large",
            });
        }
        Ok(())
    }

    fn sample<R: Rng + ?Sized>(&self, row: usize, col: usize, rng: &mut R) -> Color {
        if self.is_mortar(row, col) {
            self.mortar_color
        } else {
            self.brick_color.with_offset(draw_offset(rng, self.noise_amplitude))
        }
    }
}

/// Grass: low-variance turf speckled with high-variance blades
#[derive(Debug, Clone, PartialEq)]
pub struct GrassConfig {
    /// Base turf color
    pub base_color: Color,
    /// Texture size in pixels
    pub size: usize,
    /// Probability that a pixel is a blade
    pub blade_probability: f64,
    /// Blade noise is drawn from [-blade_amplitude, blade_amplitude]
    pub blade_amplitude: u8,
    /// Turf noise is drawn from [-turf_amplitude, turf_amplitude]
    pub turf_amplitude: u8,
}

impl Default for GrassConfig {
    fn default() -> Self {
        Self {
            base_color: Color::new(50, 150, 50),
            size: DEFAULT_SIZE,
            blade_probability: 0.1,
            blade_amplitude: 30,
            turf_amplitude: 10,
        }
    }
}

impl Pattern for GrassConfig {
    fn size(&self) -> usize {
        self.size
    }

    fn validate(&self) -> Result<()> {
        require_size(self.size)?;
        if !(0.0..=1.0).contains(&self.blade_probability) {
            return Err(TextureError::InvalidParameter {
                name: "blade_probability",
                reason: "must be between 0 and 1",
            });
        }
        Ok(())
    }

    fn sample<R: Rng + ?Sized>(&self, _row: usize, _col: usize, rng: &mut R) -> Color {
        // A probability outside [0, 1] (or NaN) saturates instead of panicking
        let amplitude = if rng.gen::<f64>() < self.blade_probability {
            self.blade_amplitude
        } else {
            self.turf_amplitude
        };
        self.base_color.with_offset(draw_offset(rng, amplitude))
    }
}
