use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use nalgebra::Vector2;
use site_lattice::geometries::BoundingBox2D;
use site_lattice::lattice::{LatticeDefinition, LatticeGeometry};
use site_lattice::{Rgba, Space};

#[derive(Parser)]
#[command(name = "site-lattice")]
#[command(about = "Lattice coordinate engine: site lookup, region enclosure and tile rendering")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Lattice definition file (TOML). Defaults to the built-in Si(100)-2x1 lattice
    #[arg(short, long, global = true)]
    lattice: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the lattice definition and its derived quantities
    Info,
    /// Find the lattice site nearest to a point
    Nearest {
        #[arg(allow_hyphen_values = true)]
        x: f64,
        #[arg(allow_hyphen_values = true)]
        y: f64,
        /// Interpret the point in scene (pixel) units instead of physical units
        #[arg(long)]
        scene: bool,
    },
    /// List the lattice sites inside a rectangle given by two opposite corners
    Enclosed {
        #[arg(allow_hyphen_values = true)]
        x0: f64,
        #[arg(allow_hyphen_values = true)]
        y0: f64,
        #[arg(allow_hyphen_values = true)]
        x1: f64,
        #[arg(allow_hyphen_values = true)]
        y1: f64,
        /// Interpret the corners in scene (pixel) units instead of physical units
        #[arg(long)]
        scene: bool,
    },
    /// Rational approximation of a real number with the lattice's rationalize settings
    Rationalize {
        #[arg(allow_hyphen_values = true)]
        x: f64,
        /// Override the maximum number of continued-fraction terms
        #[arg(short, long)]
        iterations: Option<usize>,
    },
    /// Render a tileable lattice image as binary PPM
    Tile {
        /// Output file path
        #[arg(short, long, default_value = "lattice_tile.ppm")]
        output: PathBuf,
        /// Background color as RRGGBB or RRGGBBAA
        #[arg(short, long, default_value = "ffffff")]
        background: String,
        /// Publication style with anti-aliasing
        #[arg(long)]
        publish: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("Starting site-lattice v{}", site_lattice::VERSION);

    let definition = match &cli.lattice {
        Some(path) => LatticeDefinition::load(path)
            .with_context(|| format!("Failed to load lattice definition {}", path.display()))?,
        None => LatticeDefinition::default(),
    };
    let mut geometry = definition
        .build()
        .context("Lattice definition does not describe a valid lattice")?;

    match cli.command {
        Commands::Info => print_info(&definition, &geometry),
        Commands::Nearest { x, y, scene } => {
            let (coord, position) = geometry.nearest_site(Vector2::new(x, y), Space::from_scene_flag(scene));
            println!("{}  physical=({:.4}, {:.4})", coord, position.x, position.y);
            Ok(())
        }
        Commands::Enclosed { x0, y0, x1, y1, scene } => {
            let rect = BoundingBox2D::from_corners(Vector2::new(x0, y0), Vector2::new(x1, y1));
            let sites = geometry.enclosed_sites_in_rect(&rect, Space::from_scene_flag(scene));
            info!("{} site(s) enclosed", sites.len());
            for coord in sites {
                let position = geometry.lattice_to_physical(&coord)?;
                println!("{}  physical=({:.4}, {:.4})", coord, position.x, position.y);
            }
            Ok(())
        }
        Commands::Rationalize { x, iterations } => {
            if let Some(iterations) = iterations {
                let config = geometry.config().clone();
                let accuracy = config.rationalize_accuracy;
                geometry = geometry.with_config(config.with_rationalize(accuracy, iterations));
            }
            let rational = geometry.rationalize(x);
            println!(
                "{} ≈ {}/{} = {}  (error {:.3e})",
                x,
                rational.numerator,
                rational.denominator,
                rational.value(),
                rational.error
            );
            Ok(())
        }
        Commands::Tile {
            output,
            background,
            publish,
        } => {
            let background = Rgba::from_hex(&background)
                .ok_or_else(|| anyhow!("Invalid background color '{}'", background))?;
            let image = geometry.tileable_lattice_image(background, publish);
            let file = File::create(&output)
                .with_context(|| format!("Failed to create {}", output.display()))?;
            image
                .write_ppm(BufWriter::new(file))
                .with_context(|| format!("Failed to write {}", output.display()))?;
            info!(
                "Wrote {}x{} tile to {}",
                image.width(),
                image.height(),
                output.display()
            );
            Ok(())
        }
    }
}

fn print_info(definition: &LatticeDefinition, geometry: &LatticeGeometry) -> Result<()> {
    let [a1, a2] = geometry.lattice_vectors();
    let tile = geometry.tile_approx();
    let [tile_w, tile_h] = geometry.tile_pixel_size();
    println!("name:        {}", definition.name.as_deref().unwrap_or("unnamed"));
    println!("a1:          ({:.4}, {:.4})", a1.x, a1.y);
    println!("a2:          ({:.4}, {:.4})", a2.x, a2.y);
    println!("orthogonal:  {}", geometry.is_orthogonal());
    println!("cotangent:   {:.6}", geometry.cotangent());
    println!("cell area:   {:.4}", geometry.cell_area());
    println!("scale:       {}", geometry.scale_factor());
    for (l, b) in geometry.basis().iter().enumerate() {
        println!("basis[{}]:    ({:.4}, {:.4})", l, b.x, b.y);
    }
    println!("tile (scene): {:.2} x {:.2}", tile.width(), tile.height());
    println!("tile (px):    {} x {}", tile_w, tile_h);
    Ok(())
}
