use std::fs;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use rand::Rng;
use serde::Deserialize;
use spdlog::{debug, warn};

use crate::clock::Clock;
use crate::error::{Result, ScaffoldError};
use crate::launcher::Launcher;
use crate::post_template::render_post;
use crate::prompt::LineReader;
use crate::text_utils::{format_epoch, join_date_args, parse_post_date};
use crate::words::generate_filename;

pub const POST_EXTENSION: &str = ".txt";

#[derive(Deserialize, ValueEnum, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum NamingMode {
    /// Three random dictionary words, confirmed interactively
    Words,
    /// The post date as a numeric epoch, no questions asked
    Timestamp,
}

pub struct PostSettings {
    /// Where post files are written
    pub post_dir: PathBuf,
    /// Parent of the per-post image directories, relative to `post_dir`
    pub img_dir: PathBuf,
    pub naming: NamingMode,
    pub editor: String,
    pub viewer: String,
}

#[derive(Debug, PartialEq)]
pub struct ConfirmedName {
    pub file_name: String,
    pub overwrite: bool,
}

#[derive(Debug)]
pub struct CreatedPost {
    pub post_path: PathBuf,
    pub img_dir: PathBuf,
    pub date: f64,
    /// Viewer/editor failures. The post and directory exist regardless.
    pub launch_errors: Vec<ScaffoldError>,
}

pub struct NewPost<'a, R: Rng> {
    pub settings: PostSettings,
    pub words: Vec<String>,
    pub clock: &'a dyn Clock,
    pub rng: R,
    pub reader: &'a mut dyn LineReader,
    pub viewer: &'a dyn Launcher,
    pub editor: &'a dyn Launcher,
}

impl<'a, R: Rng> NewPost<'a, R> {
    pub fn run(&mut self, date_args: &[String]) -> Result<CreatedPost> {
        let date = self.resolve_date(date_args)?;

        let name = match self.settings.naming {
            NamingMode::Words => {
                let post_dir = self.settings.post_dir.clone();
                let suggested = generate_filename(&self.words, &mut self.rng, date, |name| post_dir.join(name).exists());
                confirm_filename(&suggested, &mut *self.reader, |name| post_dir.join(name).exists())?
            }
            NamingMode::Timestamp => {
                let file_name = format!("{}{}", format_epoch(date), POST_EXTENSION);
                if self.settings.post_dir.join(&file_name).exists() {
                    return Err(ScaffoldError::NameCollision(PathBuf::from(file_name)));
                }
                ConfirmedName { file_name, overwrite: false }
            }
        };

        self.create_post(date, &name)
    }

    fn resolve_date(&self, date_args: &[String]) -> Result<f64> {
        let Some(argument) = join_date_args(date_args) else {
            return Ok(self.clock.now());
        };

        println!("{}", argument);
        let date = parse_post_date(&argument)?;
        println!("Got an argument => converted to {}", format_epoch(date));
        Ok(date)
    }

    fn create_post(&self, date: f64, name: &ConfirmedName) -> Result<CreatedPost> {
        let post_path = self.settings.post_dir.join(&name.file_name);
        write_post(&post_path, &render_post(date), name.overwrite)?;
        println!("Created {}.", name.file_name);

        let img_dir = self.settings.post_dir
            .join(&self.settings.img_dir)
            .join(image_dir_name(&name.file_name));
        create_image_dir(&img_dir, name.overwrite)?;

        let mut launch_errors = vec![];
        if let Err(e) = self.viewer.launch(&self.settings.viewer, &img_dir) {
            warn!("{}", e);
            launch_errors.push(e);
        }
        if let Err(e) = self.editor.launch(&self.settings.editor, &post_path) {
            warn!("{}", e);
            launch_errors.push(e);
        }

        Ok(CreatedPost {
            post_path,
            img_dir,
            date,
            launch_errors,
        })
    }
}

/// Lets the operator keep the suggested name (empty answer) or type another.
/// An existing file is only reused after an explicit `y`/`Y`.
pub fn confirm_filename<L, F>(suggested: &str, reader: &mut L, exists: F) -> Result<ConfirmedName>
where
    L: LineReader + ?Sized,
    F: Fn(&str) -> bool,
{
    let file_name = loop {
        let answer = reader.read_line(&format!("Filename [{}]: ", suggested))?;
        match file_name_from_answer(suggested, answer.trim()) {
            Some(file_name) => break file_name,
            None => println!("'{}' is not a usable file name.", answer.trim()),
        }
    };

    if !exists(&file_name) {
        return Ok(ConfirmedName { file_name, overwrite: false });
    }

    let answer = reader.read_line(&format!("{} already exists. Overwrite? [y/N]: ", file_name))?;
    match answer.trim() {
        "y" | "Y" => Ok(ConfirmedName { file_name, overwrite: true }),
        _ => Err(ScaffoldError::NameCollision(PathBuf::from(file_name))),
    }
}

/// Empty answer keeps the suggestion. Names need a stem and must stay in the
/// post directory.
fn file_name_from_answer(suggested: &str, answer: &str) -> Option<String> {
    if answer.is_empty() {
        return Some(suggested.to_string());
    }

    let stem = answer.strip_suffix(POST_EXTENSION).unwrap_or(answer);
    if stem.is_empty() || stem == "." || stem == ".." || stem.chars().any(std::path::is_separator) {
        return None;
    }

    Some(format!("{}{}", stem, POST_EXTENSION))
}

/// An existing directory is only acceptable when the post itself is being overwritten
fn create_image_dir(path: &Path, reuse_existing: bool) -> Result<()> {
    match fs::create_dir(path) {
        Ok(()) => {
            debug!("Created image directory {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists && reuse_existing && path.is_dir() => {
            debug!("Reusing image directory {}", path.display());
            Ok(())
        }
        Err(source) => Err(ScaffoldError::DirectoryCreate {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn image_dir_name(file_name: &str) -> &str {
    file_name.strip_suffix(POST_EXTENSION).unwrap_or(file_name)
}

fn write_post(path: &Path, content: &str, overwrite: bool) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let mut file = options.open(path).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => ScaffoldError::NameCollision(path.to_path_buf()),
        _ => ScaffoldError::Io(e),
    })?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
