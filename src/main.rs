use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use arbor::render::graphviz::{self, GraphvizConfig};
use arbor::render::{self, RenderConfig, View};
use arbor::{BinaryTree, Direction, NodeIndex, SearchTree};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

const MAX_INDENT: u64 = 64;

#[derive(Parser, Debug)]
#[command(name = "arbor", about = "Index-addressed binary trees with Graphviz export")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a binary search tree from values inserted in order.
    Search {
        /// Root payload.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        root: i64,
        /// Values to insert; duplicates are ignored.
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Build a tree by explicit directional inserts.
    Build {
        /// Root payload.
        #[arg(long, allow_negative_numbers = true)]
        root: i64,
        /// Inserts as `PARENT:left|right:VALUE`; each new node gets the next index.
        ops: Vec<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// View printed to stdout.
    #[arg(long, value_enum, default_value_t = Format::Tree)]
    format: Format,
    /// Spaces per level in the tree view (at most 64).
    #[arg(
        long,
        default_value_t = render::DEFAULT_INDENT_WIDTH,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(0..=MAX_INDENT)
    )]
    indent: usize,
    /// Name of the DOT graph.
    #[arg(long, default_value = render::DEFAULT_GRAPH_NAME)]
    graph_name: String,
    /// Also write the DOT description here and render it with Graphviz.
    #[arg(long)]
    render: Option<PathBuf>,
    /// Graphviz executable.
    #[arg(long, default_value = graphviz::DEFAULT_DOT_BIN)]
    dot_bin: PathBuf,
    /// Image viewer to run on the rendered PNG (e.g. imgcat).
    #[arg(long)]
    viewer: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    /// One line per node in storage order.
    Flat,
    /// Indented pre-order listing.
    Tree,
    /// Graphviz description.
    Dot,
}

impl From<Format> for View {
    fn from(format: Format) -> Self {
        match format {
            Format::Flat => View::Flat,
            Format::Tree => View::Indented,
            Format::Dot => View::Dot,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            root,
            values,
            output,
        } => run_search(root, values, &output)?,
        Commands::Build { root, ops, output } => run_build(root, &ops, &output)?,
    }

    Ok(())
}

fn run_search(root: i64, values: Vec<i64>, output: &OutputArgs) -> Result<()> {
    let mut bst = SearchTree::new(root);
    bst.extend(values);
    info!(nodes = bst.len(), "built search tree");
    emit(bst.tree(), output)
}

fn run_build(root: i64, ops: &[String], output: &OutputArgs) -> Result<()> {
    let mut tree = BinaryTree::new(root);
    for (idx, op) in ops.iter().enumerate() {
        let (parent, direction, value) =
            parse_op(op).with_context(|| format!("invalid insert #{} '{}'", idx + 1, op))?;
        tree.insert(parent, direction, value)
            .with_context(|| format!("insert #{} '{}' failed", idx + 1, op))?;
    }
    info!(nodes = tree.len(), "built tree");
    emit(&tree, output)
}

fn parse_op(op: &str) -> Result<(NodeIndex, Direction, i64)> {
    let mut fields = op.splitn(3, ':');
    let parent = fields
        .next()
        .ok_or_else(|| anyhow!("missing parent index"))?;
    let side = fields
        .next()
        .ok_or_else(|| anyhow!("missing direction"))?;
    let value = fields.next().ok_or_else(|| anyhow!("missing value"))?;

    let parent: NodeIndex = parent
        .parse()
        .with_context(|| format!("invalid parent index '{}'", parent))?;
    let direction = match side.to_ascii_lowercase().as_str() {
        "l" | "left" => Direction::Left,
        "r" | "right" => Direction::Right,
        other => bail!("invalid direction '{}', expected left or right", other),
    };
    let value: i64 = value
        .parse()
        .with_context(|| format!("invalid value '{}'", value))?;

    Ok((parent, direction, value))
}

fn emit(tree: &BinaryTree<i64>, output: &OutputArgs) -> Result<()> {
    let config = RenderConfig::default()
        .with_indent_width(output.indent)
        .with_graph_name(output.graph_name.clone());

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    render::write_view(&mut handle, tree, output.format.into(), &config)
        .context("failed to print tree")?;
    handle.flush()?;

    if let Some(dot_file) = &output.render {
        let tools = GraphvizConfig {
            dot_bin: output.dot_bin.clone(),
            viewer: output.viewer.clone(),
        };
        let png = graphviz::render_to_file(tree, dot_file, &config, &tools)
            .with_context(|| format!("failed to render {}", dot_file.display()))?;
        eprintln!("# rendered {}", png.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_op() {
        assert_eq!(parse_op("0:right:4").unwrap(), (0, Direction::Right, 4));
        assert_eq!(parse_op("2:L:-3").unwrap(), (2, Direction::Left, -3));
        assert!(parse_op("0:up:4").is_err());
        assert!(parse_op("0:left").is_err());
        assert!(parse_op("x:left:1").is_err());
    }

    #[test]
    fn test_cli_parses_negative_values() {
        let cli = Cli::try_parse_from(["arbor", "search", "1", "-10", "--format", "flat"]).unwrap();
        match cli.command {
            Commands::Search { root, values, output } => {
                assert_eq!(root, 0);
                assert_eq!(values, vec![1, -10]);
                assert!(matches!(output.format, Format::Flat));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_cli_bounds_indent() {
        let cli = Cli::try_parse_from(["arbor", "search", "--indent", "64", "1"]).unwrap();
        match cli.command {
            Commands::Search { output, .. } => assert_eq!(output.indent, 64),
            other => panic!("unexpected command {:?}", other),
        }

        let too_wide = Cli::try_parse_from(["arbor", "search", "--indent", "65", "1"]);
        assert!(too_wide.is_err());
        let huge = Cli::try_parse_from(["arbor", "search", "--indent", "18446744073709551615"]);
        assert!(huge.is_err());
    }
}
