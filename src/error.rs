use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    /// The date arguments did not match `Month DD YYYY HH:MM`
    #[error("can't convert the argument '{input}' to a timestamp: {reason}")]
    ArgumentParse { input: String, reason: String },

    /// The post file exists and overwriting was not confirmed
    #[error("{} already exists", .0.display())]
    NameCollision(PathBuf),

    #[error("can't create image directory {}: {source}", path.display())]
    DirectoryCreate { path: PathBuf, source: io::Error },

    #[error("can't launch {program} for {}: {source}", target.display())]
    Launch { program: String, target: PathBuf, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ScaffoldError {
    /// Fatal errors abort the run; launch failures only get reported.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ScaffoldError::Launch { .. })
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
