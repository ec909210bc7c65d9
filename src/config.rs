use std::io::ErrorKind;
use std::path::PathBuf;
use std::{fs, io};

use serde::Deserialize;

use crate::new_post::NamingMode;
use crate::words::DEFAULT_DICTIONARIES;

pub const CFG_FILE_NAME: &str = "pragma.toml";

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Post {
    pub naming: NamingMode,
    pub img_dir: PathBuf,
    /// Falls back to $VISUAL, $EDITOR and then vim
    pub editor: Option<String>,
    /// Falls back to the platform's "open this" command
    pub viewer: Option<String>,
    /// Blocks until the editor exits. When unset, terminal editors such as
    /// the vim fallback are waited for and GUI editors are left detached.
    pub wait_for_editor: Option<bool>,
    pub dictionaries: Vec<PathBuf>,
}

impl Default for Post {
    fn default() -> Self {
        Self {
            naming: NamingMode::Words,
            img_dir: PathBuf::from("../img"),
            editor: None,
            viewer: None,
            wait_for_editor: None,
            dictionaries: DEFAULT_DICTIONARIES.iter().map(PathBuf::from).collect(),
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Gallery {
    pub thumb_size: u32,
    pub gallery_name: String,
    pub thumb_prefix: String,
}

impl Default for Gallery {
    fn default() -> Self {
        Self {
            thumb_size: 256,
            gallery_name: "mygallery".to_string(),
            thumb_prefix: "thumb".to_string(),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub post: Post,
    #[serde(default)]
    pub gallery: Gallery,
    pub log: Option<Log>,
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    toml::from_str::<Config>(cfg_content).map_err(|e| io::Error::new(
        ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e)))
}

pub fn read_config(cfg_path: &PathBuf) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.post.naming, NamingMode::Words);
        assert_eq!(cfg.post.img_dir, PathBuf::from("../img"));
        assert_eq!(cfg.post.dictionaries.len(), 3);
        assert!(cfg.post.wait_for_editor.is_none());
        assert_eq!(cfg.gallery.thumb_size, 256);
        assert_eq!(cfg.gallery.gallery_name, "mygallery");
        assert!(cfg.log.is_none());
    }

    #[test]
    fn test_full_config() {
        let toml_str = r##"
[post]
naming = "timestamp"
img_dir = "/srv/site/img"
editor = "hx"
wait_for_editor = true
dictionaries = ["/opt/words"]

[gallery]
thumb_size = 128
gallery_name = "trip"

[log]
level = "Debug"
log_to_console = false
location = "/tmp/pragma.log"
"##;
        let cfg = parse_config(toml_str).unwrap();
        assert_eq!(cfg.post.naming, NamingMode::Timestamp);
        assert_eq!(cfg.post.img_dir, PathBuf::from("/srv/site/img"));
        assert_eq!(cfg.post.editor.as_deref(), Some("hx"));
        assert!(cfg.post.viewer.is_none());
        assert_eq!(cfg.post.wait_for_editor, Some(true));
        assert_eq!(cfg.post.dictionaries, vec![PathBuf::from("/opt/words")]);
        assert_eq!(cfg.gallery.thumb_size, 128);
        assert_eq!(cfg.gallery.thumb_prefix, "thumb");

        let log = cfg.log.unwrap();
        assert_eq!(log.level, LogLevel::Debug);
        assert!(!log.log_to_console);
        assert_eq!(log.location, Some(PathBuf::from("/tmp/pragma.log")));
    }

    #[test]
    fn test_bad_config() {
        let err = parse_config("[post]\nnaming = \"dates\"\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_read_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_config(&dir.path().join(CFG_FILE_NAME)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
