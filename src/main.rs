/**
 * Procedural Textures CLI - generates the game's texture set
 */

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use procedural_textures::{
    default_catalog, generate_catalog, save_texture_to_png, BrickConfig, CatalogOptions,
    CheckerConfig, GrassConfig, MetallicConfig, PatternConfig, StripeConfig, TextureConfig,
    TextureGenerator, DEFAULT_SIZE, MAX_SIZE,
};

/// Procedural texture generation for the game's assets
#[derive(Parser)]
#[command(name = "procedural-textures")]
#[command(version)]
#[command(about = "Generate procedural game textures", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate every texture in the catalog (the default)
    Generate {
        /// Directory to write the textures to
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Base random seed for reproducible noise
        #[arg(long)]
        seed: Option<u64>,

        /// Show detailed generation progress
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the textures in the catalog
    List,

    /// Render a single pattern with its default parameters
    Render {
        /// Pattern family
        #[arg(value_enum)]
        kind: Kind,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Texture size (width and height)
        #[arg(short, long, default_value_t = DEFAULT_SIZE)]
        size: usize,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Show debug output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Checker,
    Stripe,
    Metallic,
    Brick,
    Grass,
}

impl Kind {
    fn pattern(self, size: usize) -> PatternConfig {
        match self {
            Kind::Checker => PatternConfig::Checker(CheckerConfig {
                size,
                ..Default::default()
            }),
            Kind::Stripe => PatternConfig::Stripe(StripeConfig {
                size,
                ..Default::default()
            }),
            Kind::Metallic => PatternConfig::Metallic(MetallicConfig {
                size,
                ..Default::default()
            }),
            Kind::Brick => PatternConfig::Brick(BrickConfig {
                size,
                ..Default::default()
            }),
            Kind::Grass => PatternConfig::Grass(GrassConfig {
                size,
                ..Default::default()
            }),
        }
    }
}

fn init_logging(verbose: bool) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "info" }),
    )
    .format_timestamp(None)
    .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Generate {
        output_dir: PathBuf::from("."),
        seed: None,
        verbose: false,
    });

    match command {
        Commands::Generate {
            output_dir,
            seed,
            verbose,
        } => {
            init_logging(verbose);

            println!("Generating textures...");
            if let Some(s) = seed {
                println!("Seed: {}", s);
            }

            let options = CatalogOptions {
                output_dir,
                seed,
                verbose,
            };
            let generated = generate_catalog(&default_catalog(), &options)
                .context("Failed to generate textures")?;

            println!();
            println!("All textures created successfully!");
            println!("Texture files:");
            for texture in generated {
                println!("  - {} ({})", texture.path.display(), texture.description);
            }
        }

        Commands::List => {
            println!("{:<28} {:<10} {:<6} {}", "File", "Pattern", "Noise", "Description");
            println!("{}", "-".repeat(68));
            for asset in default_catalog() {
                println!(
                    "{:<28} {:<10} {:<6} {}",
                    asset.file_name(),
                    asset.pattern.kind(),
                    if asset.pattern.is_stochastic() { "yes" } else { "no" },
                    asset.description
                );
            }
        }

        Commands::Render {
            kind,
            output,
            size,
            seed,
            verbose,
        } => {
            init_logging(verbose);

            if size == 0 || size > MAX_SIZE {
                anyhow::bail!("Size must be between 1 and {}", MAX_SIZE);
            }

            // Create output directory if it doesn't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).context("Failed to create output directory")?;
            }

            let generator = TextureGenerator::new(TextureConfig {
                pattern: kind.pattern(size),
                seed,
            })
            .context("Failed to create generator")?;

            let pattern = generator.pattern();
            println!(
                "Rendering {}×{} {} texture to {}",
                size,
                size,
                pattern.kind(),
                output.display()
            );
            if pattern.is_stochastic() && seed.is_none() {
                println!("No seed given, output will differ between runs");
            }

            let buffer = generator.generate().context("Failed to render texture")?;

            save_texture_to_png(&buffer, &output).context("Failed to save texture")?;
            println!("Done!");
        }
    }

    Ok(())
}
