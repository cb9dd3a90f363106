//! `create-dish` CLI - Compose a fusion noodle dish by layering images.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dish_composer::{Dish, Error};

/// Create a fusion noodle dish by layering images.
#[derive(Parser, Debug)]
#[command(name = "create-dish")]
#[command(version, about, long_about = None)]
#[command(after_help = "Examples:
  create-dish broth-tomyum.png noodle-spaghetti.png topping-pancetta.png
  create-dish broth-pho.png noodle-ramen.png topping-egg.png topping-scallions.png topping-basil.png
  create-dish broth-marinara.png noodle-fettuccine.png topping-parmesan.png -o my_dish.png")]
struct Args {
    /// Path to bowl/broth image.
    #[arg(value_name = "BOWL")]
    bowl: PathBuf,

    /// Path to noodles image.
    #[arg(value_name = "NOODLES")]
    noodles: PathBuf,

    /// Path(s) to 1-3 topping images. Extra toppings are ignored.
    #[arg(value_name = "TOPPINGS", required = true, num_args = 1..)]
    toppings: Vec<PathBuf>,

    /// Output filename.
    #[arg(short, long, default_value = dish_composer::DEFAULT_OUTPUT, value_name = "PATH")]
    output: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("dish_composer={log_level},create_dish={log_level}").into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(err) = run(&args) {
        match err.downcast_ref::<Error>() {
            Some(Error::MissingFile { .. }) => {
                eprintln!("Error: could not find file - {err:#}");
            }
            _ => eprintln!("Error: {err:#}"),
        }
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let dish = Dish::new(&args.bowl, &args.noodles)
        .with_toppings(&args.toppings)
        .with_output(&args.output);

    let written = dish.compose().context("Failed to create dish")?;

    println!("Dish created successfully: {}", written.display());

    Ok(())
}
