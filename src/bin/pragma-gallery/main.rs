use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use spdlog::warn;

use pragma_tools::config::{read_config, Config};
use pragma_tools::gallery::build_gallery;
use pragma_tools::logger::configure_logger;

/// Generates thumbnails for the images in a directory and prints
/// GLightbox markup for them
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,

    /// Overrides the data-gallery name
    #[arg(short, long)]
    gallery_name: Option<String>,

    /// Directory holding the images
    directory: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut config = match args.config_path.map(PathBuf::from) {
        None => Config::default(),
        Some(path) => match read_config(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{}", err);
                return ExitCode::FAILURE;
            }
        },
    };

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    if let Some(name) = args.gallery_name {
        config.gallery.gallery_name = name;
    }

    if !Path::new(&args.directory).is_dir() {
        eprintln!("Error: '{}' is not a valid directory.", args.directory);
        return ExitCode::FAILURE;
    }

    match build_gallery(&args.directory, &config.gallery) {
        Ok(markup) => {
            println!("{}", markup);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error reading {}: {}", args.directory, err);
            ExitCode::FAILURE
        }
    }
}
