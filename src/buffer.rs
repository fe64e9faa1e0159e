/**
 * Pixel Buffer
 *
 * Square RGB pixel grid produced by every pattern generator. Pixels are
 * stored row-major as packed `[r, g, b]` bytes, the same layout `image`
 * uses for `RgbImage`, so handing a finished buffer to the PNG encoder is a
 * straight copy.
 */

use image::RgbImage;
use log::info;
use std::path::Path;

use crate::color::Color;
use crate::generator::Result;

const CHANNELS: usize = 3;

/// A `size × size` grid of RGB colors addressed by (row, column)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    size: usize,
}

impl PixelBuffer {
    /// Build a buffer by evaluating `f(row, col)` for every pixel, row by row
    ///
    /// # Panics
    ///
    /// Panics if `size × size` RGB pixels do not fit in `usize`. Pattern
    /// validation rejects such sizes before a buffer is ever built.
    pub fn from_fn<F>(size: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Color,
    {
        let len = size
            .checked_mul(size)
            .and_then(|n| n.checked_mul(CHANNELS))
            .unwrap_or_else(|| panic!("{}×{} pixel buffer is too large", size, size));
        let mut data = Vec::with_capacity(len);
        for row in 0..size {
            for col in 0..size {
                data.extend_from_slice(&f(row, col).to_array());
            }
        }
        Self { data, size }
    }

    /// Pixels per side
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Color at (row, col), or `None` outside the buffer
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        if row >= self.size || col >= self.size {
            return None;
        }
        let idx = (row * self.size + col) * CHANNELS;
        Some(Color::new(self.data[idx], self.data[idx + 1], self.data[idx + 2]))
    }

    /// Color at (row, col)
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the buffer.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> Color {
        match self.get(row, col) {
            Some(color) => color,
            None => panic!(
                "pixel ({}, {}) out of bounds for {}×{} buffer",
                row, col, self.size, self.size
            ),
        }
    }

    /// Iterate over all pixels in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = Color> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|px| Color::new(px[0], px[1], px[2]))
    }

    /// Raw packed RGB bytes, row-major
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning the packed RGB bytes
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Copy into an `image` RGB buffer (x = column, y = row)
    pub fn to_rgb_image(&self) -> RgbImage {
        let side = self.size as u32;
        RgbImage::from_raw(side, side, self.data.clone())
            .expect("pixel buffer holds exactly size × size RGB pixels")
    }
}

/**
 * Save a pixel buffer to an image file
 *
 * The encoding is chosen from the file extension; the catalog always writes
 * `.png`.
 */
pub fn save_texture_to_png<P: AsRef<Path>>(buffer: &PixelBuffer, filename: P) -> Result<()> {
    let img = buffer.to_rgb_image();
    img.save(&filename)?;
    info!("Created {}", filename.as_ref().display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(size: usize) -> PixelBuffer {
        PixelBuffer::from_fn(size, |row, col| Color::new(row as u8, col as u8, 7))
    }

    #[test]
    fn test_from_fn_is_row_major() {
        let buffer = gradient(4);
        assert_eq!(buffer.size(), 4);
        assert_eq!(buffer.as_raw().len(), 4 * 4 * 3);

        // Second pixel in memory is (row 0, col 1)
        assert_eq!(&buffer.as_raw()[3..6], &[0, 1, 7]);
        assert_eq!(buffer.pixel(2, 3), Color::new(2, 3, 7));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let buffer = gradient(4);
        assert!(buffer.get(3, 3).is_some());
        assert!(buffer.get(4, 0).is_none());
        assert!(buffer.get(0, 4).is_none());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_pixel_panics_out_of_bounds() {
        gradient(2).pixel(2, 0);
    }

    #[test]
    #[should_panic(expected = "too large")]
    fn test_from_fn_rejects_overflowing_size() {
        PixelBuffer::from_fn(usize::MAX, |_, _| Color::new(0, 0, 0));
    }

    #[test]
    fn test_pixels_iterator_covers_buffer() {
        let buffer = gradient(8);
        assert_eq!(buffer.pixels().count(), 64);
        assert_eq!(buffer.pixels().last(), Some(Color::new(7, 7, 7)));
    }

    #[test]
    fn test_to_rgb_image_maps_row_to_y() {
        let buffer = gradient(5);
        let img = buffer.to_rgb_image();
        assert_eq!(img.dimensions(), (5, 5));
        // x is the column, y is the row
        assert_eq!(img.get_pixel(3, 1).0, [1, 3, 7]);
        assert_eq!(img.into_raw(), buffer.into_raw());
    }

    #[test]
    fn test_save_and_reload_png() {
        let buffer = gradient(16);
        let path = std::env::temp_dir().join(format!(
            "procedural-textures-buffer-{}.png",
            std::process::id()
        ));

        save_texture_to_png(&buffer, &path).unwrap();
        let reloaded = image::open(&path).unwrap().to_rgb8();
        std::fs::remove_file(&path).ok();

        assert_eq!(reloaded.dimensions(), (16, 16));
        assert_eq!(reloaded.into_raw(), buffer.into_raw());
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let buffer = gradient(4);
        let path = std::env::temp_dir()
            .join(format!("procedural-textures-missing-{}", std::process::id()))
            .join("nested")
            .join("texture.png");

        assert!(save_texture_to_png(&buffer, &path).is_err());
    }
}
