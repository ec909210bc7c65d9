use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use spdlog::warn;

use pragma_tools::clock::SystemClock;
use pragma_tools::launcher::{editor_needs_terminal, resolve_editor, resolve_viewer, CommandLauncher};
use pragma_tools::logger::configure_logger;
use pragma_tools::new_post::{NamingMode, NewPost, PostSettings};
use pragma_tools::prompt::StdinReader;
use pragma_tools::words::{default_sources, load_words};

use crate::config::open_config;

mod config;

/// Creates a new post template in the current directory, plus its image
/// directory, and opens both.
///
/// Posts dated in the future are drafts until their time arrives.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,

    /// How the post file is named
    #[arg(short, long)]
    naming: Option<NamingMode>,

    /// Post date as "Month DD YYYY HH:MM", e.g. January 1 2001 15:30. Defaults to now
    date: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match open_config(args.config_path.map(PathBuf::from)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{:#}", err);
            eprintln!("Please run pragma-new --help");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    let post_cfg = config.post;
    let settings = PostSettings {
        post_dir: PathBuf::from("."),
        img_dir: post_cfg.img_dir,
        naming: args.naming.unwrap_or(post_cfg.naming),
        editor: resolve_editor(&post_cfg.editor),
        viewer: resolve_viewer(&post_cfg.viewer),
    };

    let viewer_launcher = CommandLauncher::detached();
    let wait_for_editor = post_cfg.wait_for_editor
        .unwrap_or_else(|| editor_needs_terminal(&settings.editor));
    let editor_launcher = if wait_for_editor {
        CommandLauncher::waiting()
    } else {
        CommandLauncher::detached()
    };

    let mut reader = StdinReader;
    let mut new_post = NewPost {
        settings,
        words: load_words(&default_sources(&post_cfg.dictionaries)),
        clock: &SystemClock,
        rng: rand::thread_rng(),
        reader: &mut reader,
        viewer: &viewer_launcher,
        editor: &editor_launcher,
    };

    match new_post.run(&args.date) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}. Aborting!", err);
            ExitCode::FAILURE
        }
    }
}
