use std::env;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Result, ScaffoldError};

/// Starts an external program on a file or directory
pub trait Launcher {
    fn launch(&self, program: &str, target: &Path) -> Result<()>;
}

/// Spawns the program as a child process. When `wait` is false the child is
/// left running on its own; otherwise the call returns once it exits.
pub struct CommandLauncher {
    pub wait: bool,
}

impl CommandLauncher {
    pub fn detached() -> Self {
        Self { wait: false }
    }

    pub fn waiting() -> Self {
        Self { wait: true }
    }
}

impl Launcher for CommandLauncher {
    fn launch(&self, program: &str, target: &Path) -> Result<()> {
        let launch_err = |source: std::io::Error| ScaffoldError::Launch {
            program: program.to_string(),
            target: target.to_path_buf(),
            source,
        };

        let mut cmd = Command::new(program);
        cmd.arg(target);

        if !self.wait {
            cmd.stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null());
            cmd.spawn().map_err(launch_err)?;
            return Ok(());
        }

        let status = cmd.status().map_err(launch_err)?;
        if !status.success() {
            return Err(launch_err(std::io::Error::other(format!("exited with {}", status))));
        }
        Ok(())
    }
}

pub fn resolve_editor(editor: &Option<String>) -> String {
    editor.as_deref()
        .map(str::to_string)
        .or_else(|| env::var("VISUAL").ok().filter(|e| !e.is_empty()))
        .or_else(|| env::var("EDITOR").ok().filter(|e| !e.is_empty()))
        .unwrap_or_else(|| "vim".into())
}

const TERMINAL_EDITORS: [&str; 8] = ["vi", "vim", "nvim", "nano", "emacs", "hx", "micro", "kak"];

/// Editors that draw in the calling terminal and must be waited for
pub fn editor_needs_terminal(editor: &str) -> bool {
    let program = editor.split_whitespace().next().unwrap_or_default();
    let name = Path::new(program)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(program);
    TERMINAL_EDITORS.contains(&name)
}

pub fn resolve_viewer(viewer: &Option<String>) -> String {
    if let Some(viewer) = viewer {
        return viewer.clone();
    }

    if cfg!(target_os = "macos") {
        "open".to_string()
    } else {
        "xdg-open".to_string()
    }
}
