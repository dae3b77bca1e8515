use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "subframe", version)]
struct Cli {
    /// Print debug diagnostics to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Bake keyframe animations into static per-frame blocks.
    Expand(ExpandArgs),
    /// Drag one border of a layout by a pixel offset.
    Drag(DragArgs),
    /// Validate a project or layout JSON file.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct ExpandArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output project JSON.
    #[arg(long)]
    out: PathBuf,

    /// Export frame rate; defaults to the project's own fps.
    #[arg(long)]
    fps: Option<f64>,

    /// Decimal places used when comparing numeric style values between frames.
    #[arg(long, default_value_t = 2)]
    precision: u32,
}

#[derive(Parser, Debug)]
struct DragArgs {
    /// Input layout JSON (`{"areas": [...]}`).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Id of the area whose border is dragged.
    #[arg(long)]
    area: String,

    /// Which border of the area.
    #[arg(long, value_enum)]
    dir: DirChoice,

    /// Horizontal pointer movement in pixels.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    dx: f64,

    /// Vertical pointer movement in pixels.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    dy: f64,

    /// Container width in pixels.
    #[arg(long, default_value_t = 1000.0)]
    width: f64,

    /// Container height in pixels.
    #[arg(long, default_value_t = 1000.0)]
    height: f64,

    /// Disable snapping to nearby edges.
    #[arg(long)]
    no_snap: bool,

    /// Output layout JSON.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// What the file contains.
    #[arg(long, value_enum, default_value_t = CheckKind::Project)]
    kind: CheckKind,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DirChoice {
    Left,
    Right,
    Top,
    Bottom,
}

impl From<DirChoice> for subframe::Dir {
    fn from(d: DirChoice) -> Self {
        match d {
            DirChoice::Left => Self::Left,
            DirChoice::Right => Self::Right,
            DirChoice::Top => Self::Top,
            DirChoice::Bottom => Self::Bottom,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CheckKind {
    Project,
    Layout,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct LayoutFile {
    areas: Vec<subframe::Area>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Expand(args) => cmd_expand(args),
        Command::Drag(args) => cmd_drag(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    let r = BufReader::new(f);
    let v = serde_json::from_reader(r).with_context(|| format!("parse {what} JSON"))?;
    Ok(v)
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(f), value)
        .with_context(|| format!("write '{}'", path.display()))?;
    Ok(())
}

fn cmd_expand(args: ExpandArgs) -> anyhow::Result<()> {
    let project: subframe::Project = read_json(&args.in_path, "project")?;
    project.validate()?;

    let fps = args.fps.unwrap_or(project.fps);
    let config = subframe::ExpandConfig {
        style_precision: args.precision,
    };
    let out = subframe::expand_project_with(&project, fps, &config);
    write_json(&args.out, &out)?;

    eprintln!(
        "expanded {} blocks into {} at {fps} fps",
        project.blocks.len(),
        out.blocks.len()
    );
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_drag(args: DragArgs) -> anyhow::Result<()> {
    let file: LayoutFile = read_json(&args.in_path, "layout")?;
    let mut layout = subframe::LayoutState::new(file.areas)?;

    let config = subframe::DragConfig {
        snap_enabled: !args.no_snap,
        ..subframe::DragConfig::default()
    };
    let mut engine = subframe::DragEngine::new(config);
    let mut history = subframe::UndoHistory::new();
    let dir = subframe::Dir::from(args.dir);

    let mut session = engine
        .begin_drag(&layout, &args.area, dir, 0.0, 0.0, &mut history)
        .with_context(|| format!("border {dir:?} of area '{}' cannot be dragged", args.area))?;

    match engine.on_pointer_move(
        &mut session,
        layout.areas(),
        args.dx,
        args.dy,
        args.width,
        args.height,
    ) {
        Some(next) => {
            engine.end_drag(session, &next, &mut history);
            layout.commit(next);
        }
        None => {
            eprintln!("drag had no effect");
            engine.cancel_drag(session);
        }
    }

    subframe::validate_tiling(layout.areas())?;
    write_json(
        &args.out,
        &LayoutFile {
            areas: layout.into_areas(),
        },
    )?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    match args.kind {
        CheckKind::Project => {
            let project: subframe::Project = read_json(&args.in_path, "project")?;
            project.validate()?;
            let animated = project
                .blocks
                .iter()
                .filter(|b| b.span.is_animated())
                .count();
            eprintln!(
                "ok: {} blocks ({animated} animated), {} curves",
                project.blocks.len(),
                project.curves.iter().count()
            );
        }
        CheckKind::Layout => {
            let file: LayoutFile = read_json(&args.in_path, "layout")?;
            subframe::validate_tiling(&file.areas)?;
            eprintln!("ok: {} areas tile the container", file.areas.len());
        }
    }
    Ok(())
}
