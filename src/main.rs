//! # Loot Forge Command Line Entry Point
//!
//! Fills an inventory with generated items, prints it, describes a selected
//! slot and optionally writes every icon to disk.

use clap::Parser;
use log::{error, info, warn, LevelFilter};
use loot_forge::{
    config, write_png, GenerationConfig, Generator, Inventory, ItemGenerator, ItemType,
    LootResult,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Command line arguments for the item forge.
#[derive(Parser, Debug)]
#[command(name = "loot-forge")]
#[command(about = "Procedurally generate items with stats, descriptions and icons")]
#[command(version)]
struct Args {
    /// Random seed for item generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of inventory slots
    #[arg(short, long, default_value_t = config::SAMPLE_GRID_CAPACITY)]
    capacity: usize,

    /// Skip the sample loadout and start with an empty inventory
    #[arg(long)]
    no_sample: bool,

    /// Extra items to generate after the sample loadout
    #[arg(short = 'n', long, default_value_t = 0)]
    count: usize,

    /// Type of the extra items ("random" picks one per item)
    #[arg(short = 't', long, default_value = "random")]
    item_type: String,

    /// Slot to select and describe
    #[arg(long, allow_negative_numbers = true)]
    select: Option<isize>,

    /// Directory to write slot icons into as PNG files
    #[arg(long)]
    icon_dir: Option<PathBuf>,

    /// Icon width and height in pixels
    #[arg(long, default_value_t = config::DEFAULT_ICON_SIZE.0)]
    icon_size: u32,

    /// Print the inventory as JSON instead of a listing
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .init();
}

fn run(args: &Args) -> LootResult<()> {
    let seed = args.seed.unwrap_or(12345);
    info!("Starting Loot Forge v{} with seed {}", loot_forge::VERSION, seed);

    let generation_config = GenerationConfig {
        inventory_capacity: args.capacity,
        icon_size: (args.icon_size, args.icon_size),
        ..GenerationConfig::new(seed)
    };
    let mut inventory = Inventory::with_config(generation_config.clone())?;

    if !args.no_sample {
        let stored = inventory.populate_sample();
        info!("Stored {} sample items", stored);
    }

    let item_type = parse_item_type(&args.item_type)?;
    let validator = ItemGenerator::from_config(&generation_config);
    for _ in 0..args.count {
        let item = inventory.generate_random(item_type);
        validator.validate(&item, &generation_config)?;
        if !inventory.add(item) {
            warn!("No empty slots available");
            break;
        }
    }

    if let Some(index) = args.select {
        if !inventory.select(index) {
            warn!("Slot {} is outside 0..{}", index, inventory.capacity());
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&inventory.view())?);
    } else {
        print_listing(&inventory);
        if let Some(index) = inventory.selected_index() {
            println!();
            match inventory.selected_item() {
                Some(item) => println!("Slot {}: {}", index, item),
                None => println!("Slot {}: Empty Slot", index),
            }
            println!("{}", inventory.describe_selected());
        }
    }

    if let Some(dir) = &args.icon_dir {
        write_icons(&inventory, dir)?;
    }

    Ok(())
}

/// Maps the `--item-type` flag to an optional type.
fn parse_item_type(value: &str) -> LootResult<Option<ItemType>> {
    if value.eq_ignore_ascii_case("random") {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

fn print_listing(inventory: &Inventory) {
    for (index, slot) in inventory.slots().iter().enumerate() {
        match slot {
            Some(item) => {
                println!("[{:>2}] {}", index, item);
                for line in item.stat_lines() {
                    println!("       {}", line);
                }
            }
            None => println!("[{:>2}] Empty", index),
        }
    }
}

fn write_icons(inventory: &Inventory, dir: &Path) -> LootResult<()> {
    std::fs::create_dir_all(dir)?;

    let mut written = 0;
    for (index, slot) in inventory.slots().iter().enumerate() {
        if let Some(icon) = inventory.render_visual(slot.as_ref(), None) {
            write_png(&icon, dir.join(format!("slot_{:02}.png", index)))?;
            written += 1;
        }
    }

    info!("Wrote {} icons to {}", written, dir.display());
    Ok(())
}
