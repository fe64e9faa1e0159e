/**
 * Texture Catalog
 *
 * The fixed set of game textures and the batch driver that renders them to
 * disk.
 *
 * Generation is fail-fast: the first texture that cannot be rendered or
 * written aborts the batch and its error is returned. Files written before
 * the failure are left in place.
 *
 * When a base seed is supplied, asset `i` is rendered with seed `base + i`
 * (wrapping), giving each texture its own reproducible random stream.
 */

use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::path::{Path, PathBuf};

use crate::buffer::save_texture_to_png;
use crate::color::Color;
use crate::generator::{PatternConfig, Result, TextureConfig, TextureGenerator};
use crate::patterns::{
    BrickConfig, CheckerConfig, GrassConfig, MetallicConfig, StripeConfig, DEFAULT_SIZE,
};

/// A named texture the game loads at startup
#[derive(Debug, Clone, PartialEq)]
pub struct TextureAsset {
    /// File stem, e.g. `player_texture`
    pub name: &'static str,
    /// Short human-readable description
    pub description: &'static str,
    /// Pattern and parameters used to render it
    pub pattern: PatternConfig,
}

impl TextureAsset {
    /// Output file name (`<name>.png`)
    pub fn file_name(&self) -> String {
        format!("{}.png", self.name)
    }
}

/// Options for a catalog run
#[derive(Debug, Clone)]
pub struct CatalogOptions {
    /// Directory the textures are written to (created if missing)
    pub output_dir: PathBuf,
    /// Optional base seed for reproducible noise
    pub seed: Option<u64>,
    /// Show a progress bar
    pub verbose: bool,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            seed: None,
            verbose: false,
        }
    }
}

/// A texture that was written to disk
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedTexture {
    /// Asset name
    pub name: &'static str,
    /// Asset description
    pub description: &'static str,
    /// Path of the written file
    pub path: PathBuf,
}

/**
 * The seven textures used by the game
 */
pub fn default_catalog() -> Vec<TextureAsset> {
    vec![
        TextureAsset {
            name: "player_texture",
            description: "blue metallic",
            pattern: PatternConfig::Metallic(MetallicConfig {
                base_color: Color::new(70, 130, 220),
                size: DEFAULT_SIZE,
                ..Default::default()
            }),
        },
        TextureAsset {
            name: "ground_texture",
            description: "gray striped",
            pattern: PatternConfig::Stripe(StripeConfig {
                color1: Color::new(80, 80, 80),
                color2: Color::new(70, 70, 70),
                size: DEFAULT_SIZE,
                stripe_size: 8,
            }),
        },
        TextureAsset {
            name: "obstacle_texture",
            description: "orange checkerboard",
            pattern: PatternConfig::Checker(CheckerConfig {
                color1: Color::new(255, 140, 0),
                color2: Color::new(255, 100, 0),
                size: DEFAULT_SIZE,
                checker_size: 16,
            }),
        },
        TextureAsset {
            name: "lane_divider_texture",
            description: "yellow striped",
            pattern: PatternConfig::Stripe(StripeConfig {
                color1: Color::new(255, 255, 0),
                color2: Color::new(240, 240, 0),
                size: DEFAULT_SIZE,
                stripe_size: 4,
            }),
        },
        TextureAsset {
            name: "tree_texture",
            description: "green grass-like",
            pattern: PatternConfig::Grass(GrassConfig {
                size: DEFAULT_SIZE,
                ..Default::default()
            }),
        },
        TextureAsset {
            name: "building_texture",
            description: "purple bricks",
            pattern: PatternConfig::Brick(BrickConfig {
                brick_color: Color::new(128, 0, 128),
                mortar_color: Color::new(90, 0, 90),
                size: DEFAULT_SIZE,
                ..Default::default()
            }),
        },
        TextureAsset {
            name: "tunnel_texture",
            description: "gray bricks",
            pattern: PatternConfig::Brick(BrickConfig {
                brick_color: Color::new(200, 200, 200),
                mortar_color: Color::new(150, 150, 150),
                size: DEFAULT_SIZE,
                ..Default::default()
            }),
        },
    ]
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let template = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}";
    if let Ok(style) = ProgressStyle::default_bar().template(template) {
        pb.set_style(style.progress_chars("##-"));
    }
    pb
}

fn generate_one(asset: &TextureAsset, seed: Option<u64>, output_dir: &Path) -> Result<PathBuf> {
    let config = TextureConfig {
        pattern: asset.pattern.clone(),
        seed,
    };
    let buffer = TextureGenerator::new(config)?.generate()?;

    let path = output_dir.join(asset.file_name());
    save_texture_to_png(&buffer, &path)?;
    Ok(path)
}

/**
 * Render every asset and write it to `options.output_dir`
 *
 * Returns the written textures in catalog order, or the first error.
 */
pub fn generate_catalog(
    assets: &[TextureAsset],
    options: &CatalogOptions,
) -> Result<Vec<GeneratedTexture>> {
    std::fs::create_dir_all(&options.output_dir)?;

    let progress = options.verbose.then(|| progress_bar(assets.len()));
    let mut generated = Vec::with_capacity(assets.len());

    for (index, asset) in assets.iter().enumerate() {
        if let Some(pb) = &progress {
            pb.set_message(asset.name);
        }

        let seed = options.seed.map(|base| base.wrapping_add(index as u64));
        debug!(
            "Generating {} ({}) with seed {:?}",
            asset.name,
            asset.pattern.kind(),
            seed
        );

        let path = match generate_one(asset, seed, &options.output_dir) {
            Ok(path) => path,
            Err(err) => {
                if let Some(pb) = &progress {
                    pb.abandon_with_message(format!("{} failed", asset.name));
                }
                return Err(err);
            }
        };

        generated.push(GeneratedTexture {
            name: asset.name,
            description: asset.description,
            path,
        });

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress {
        pb.finish_with_message("All textures created");
    }

    Ok(generated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::TextureError;

    fn scratch_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "procedural-textures-{}-{}",
            label,
            std::process::id()
        ));
        std::fs::remove_dir_all(&dir).ok();
        dir
    }

    #[test]
    fn test_default_catalog_contents() {
        let catalog = default_catalog();
        let names: Vec<_> = catalog.iter().map(|a| a.name).collect();
        assert_eq!(
            names,
            [
                "player_texture",
                "ground_texture",
                "obstacle_texture",
                "lane_divider_texture",
                "tree_texture",
                "building_texture",
                "tunnel_texture",
            ]
        );

        let kinds: Vec<_> = catalog.iter().map(|a| a.pattern.kind()).collect();
        assert_eq!(
            kinds,
            ["metallic", "stripe", "checker", "stripe", "grass", "brick", "brick"]
        );

        for asset in &catalog {
            assert_eq!(asset.pattern.size(), 256);
            assert!(asset.pattern.validate().is_ok());
        }
        assert_eq!(catalog[2].file_name(), "obstacle_texture.png");
    }

    #[test]
    fn test_catalog_brick_dimensions_are_fixed() {
        for asset in default_catalog() {
            if let PatternConfig::Brick(brick) = asset.pattern {
                assert_eq!(brick.brick_height, 32);
                assert_eq!(brick.brick_width, 64);
                assert_eq!(brick.mortar_size, 4);
            }
        }
    }

    #[test]
    fn test_generate_catalog_writes_all_files() {
        let dir = scratch_dir("catalog");
        let options = CatalogOptions {
            output_dir: dir.clone(),
            seed: Some(42),
            verbose: false,
        };

        let generated = generate_catalog(&default_catalog(), &options).unwrap();
        assert_eq!(generated.len(), 7);

        for texture in &generated {
            let img = image::open(&texture.path).unwrap().to_rgb8();
            assert_eq!(img.dimensions(), (256, 256));
        }

        // obstacle_texture: top-left tile is color1, the next tile is color2
        let obstacle = image::open(dir.join("obstacle_texture.png")).unwrap().to_rgb8();
        assert_eq!(obstacle.get_pixel(0, 0).0, [255, 140, 0]);
        assert_eq!(obstacle.get_pixel(16, 0).0, [255, 100, 0]);

        // tunnel_texture: first row is mortar
        let tunnel = image::open(dir.join("tunnel_texture.png")).unwrap().to_rgb8();
        assert_eq!(tunnel.get_pixel(100, 0).0, [150, 150, 150]);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_generate_catalog_is_reproducible_with_seed() {
        let dir_a = scratch_dir("seed-a");
        let dir_b = scratch_dir("seed-b");
        let assets: Vec<_> = default_catalog()
            .into_iter()
            .filter(|a| a.name == "tree_texture")
            .collect();

        for dir in [&dir_a, &dir_b] {
            let options = CatalogOptions {
                output_dir: dir.clone(),
                seed: Some(7),
                verbose: false,
            };
            generate_catalog(&assets, &options).unwrap();
        }

        let a = image::open(dir_a.join("tree_texture.png")).unwrap().to_rgb8();
        let b = image::open(dir_b.join("tree_texture.png")).unwrap().to_rgb8();
        assert_eq!(a.into_raw(), b.into_raw());

        std::fs::remove_dir_all(&dir_a).ok();
        std::fs::remove_dir_all(&dir_b).ok();
    }

    #[test]
    fn test_generate_catalog_fails_fast_on_invalid_asset() {
        let dir = scratch_dir("fail-fast");
        let mut assets = default_catalog();
        assets[1].pattern = PatternConfig::Stripe(StripeConfig {
            stripe_size: 0,
            ..Default::default()
        });

        let options = CatalogOptions {
            output_dir: dir.clone(),
            ..Default::default()
        };
        let result = generate_catalog(&assets, &options);
        assert!(matches!(
            result,
            Err(TextureError::InvalidParameter { name: "stripe_size", .. })
        ));

        // The asset before the failure was written, the ones after were not
        assert!(dir.join("player_texture.png").exists());
        assert!(!dir.join("ground_texture.png").exists());
        assert!(!dir.join("obstacle_texture.png").exists());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_generate_catalog_reports_unusable_output_dir() {
        let blocker = scratch_dir("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let options = CatalogOptions {
            output_dir: blocker.join("textures"),
            ..Default::default()
        };
        let result = generate_catalog(&default_catalog(), &options);
        assert!(matches!(result, Err(TextureError::Io(_))));

        std::fs::remove_file(&blocker).ok();
    }
}
