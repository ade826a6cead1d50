use std::path::{Path, PathBuf};

pub enum Binary {
    Python,
}

impl Binary {
    /// Location of the project-local copy, relative to the project root.
    pub fn local_path(&self) -> PathBuf {
        match self {
            Self::Python => {
                if cfg!(windows) {
                    Path::new(".venv").join("Scripts").join("python.exe")
                } else {
                    Path::new(".venv").join("bin").join("python")
                }
            }
        }
    }

    pub fn system_name(&self) -> &'static str {
        match self {
            Self::Python => "python",
        }
    }
}

/// Resolves the best executable to use for a given binary.
/// Checks for a project-local copy first, then falls back to the bare name,
/// which the OS looks up on PATH at spawn time.
pub fn resolve_bin(project_root: &Path, bin: Binary) -> PathBuf {
    let local = project_root.join(bin.local_path());

    if local.is_file() {
        local
    } else {
        PathBuf::from(bin.system_name())
    }
}
