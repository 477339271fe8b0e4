//! Hand the DOT export to external tools
//!
//! Writes the description to a file, runs `dot -Tpng -O <file>` (which
//! produces `<file>.png`) and optionally shows the image with a terminal
//! viewer such as `imgcat`. Both programs are opaque: only their exit status
//! is looked at.

use std::ffi::OsString;
use std::fmt::Display;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info, warn};

use super::{write_dot, RenderConfig, RenderError};
use crate::tree::BinaryTree;

/// Graphviz binary used unless overridden
pub const DEFAULT_DOT_BIN: &str = "dot";

/// External programs used by [`render_to_file`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphvizConfig {
    /// Graphviz `dot` executable
    pub dot_bin: PathBuf,

    /// Image viewer run on the produced PNG, if any
    pub viewer: Option<PathBuf>,
}

impl Default for GraphvizConfig {
    fn default() -> Self {
        Self {
            dot_bin: PathBuf::from(DEFAULT_DOT_BIN),
            viewer: None,
        }
    }
}

/// Path `dot -O` writes the PNG to for a given input file
pub fn png_path(dot_file: &Path) -> PathBuf {
    let mut name = OsString::from(dot_file.as_os_str());
    name.push(".png");
    PathBuf::from(name)
}

/// Write `tree` as DOT to `dot_file`, then render and optionally display it
///
/// Returns the path of the rendered PNG.
pub fn render_to_file<T: Display>(
    tree: &BinaryTree<T>,
    dot_file: &Path,
    render: &RenderConfig,
    tools: &GraphvizConfig,
) -> Result<PathBuf, RenderError> {
    info!(path = %dot_file.display(), "saving dot description");
    {
        let mut writer = BufWriter::new(File::create(dot_file)?);
        write_dot(&mut writer, tree, render)?;
    }

    let mut dot = Command::new(&tools.dot_bin);
    dot.arg("-Tpng").arg("-O").arg(dot_file);
    run(dot)?;

    let png = png_path(dot_file);
    if let Some(viewer) = &tools.viewer {
        let mut show = Command::new(viewer);
        show.arg(&png);
        run(show)?;
    }

    Ok(png)
}

fn run(mut command: Command) -> Result<(), RenderError> {
    let program = command.get_program().to_string_lossy().into_owned();
    debug!(?command, "running external renderer");

    let status = command.status()?;
    if status.success() {
        Ok(())
    } else {
        warn!(%program, %status, "external renderer failed");
        Err(RenderError::Renderer { program, status })
    }
}
