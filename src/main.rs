//! glsr: render RON scenes of lines and triangles to P3 PPM (or PNG/JPEG/BMP)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use glsr::ppm::load_ppm;
use glsr::{load_scene, EdgeRule, FillMode, Scene};

#[derive(Parser, Debug)]
#[command(name = "glsr", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a RON scene file.
    Render(RenderArgs),
    /// Render the built-in three-triangle scene.
    Demo(DemoArgs),
    /// Subtract a constant from every channel of a P3 image.
    Darken(DarkenArgs),
    /// Render a scene and show it in a window.
    #[cfg(feature = "preview")]
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
struct RasterArgs {
    /// Fill mode for every triangle (overrides the scene).
    #[arg(long, value_enum)]
    mode: Option<ModeChoice>,

    /// Boundary rule for filled triangles (overrides the scene).
    #[arg(long, value_enum)]
    edge_rule: Option<EdgeRuleChoice>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input scene (.ron).
    scene: PathBuf,

    /// Output image; the extension picks the format.
    #[arg(short, long)]
    out: PathBuf,

    #[command(flatten)]
    raster: RasterArgs,
}

#[derive(Parser, Debug)]
struct DemoArgs {
    /// Output image; the extension picks the format.
    #[arg(short, long, default_value = "graphics_lab2.ppm")]
    out: PathBuf,

    #[command(flatten)]
    raster: RasterArgs,
}

#[derive(Parser, Debug)]
struct DarkenArgs {
    /// Input P3 image.
    input: PathBuf,

    /// Output image; the extension picks the format.
    #[arg(short, long)]
    out: PathBuf,

    /// Amount subtracted from each channel.
    #[arg(long, default_value_t = 50)]
    amount: u8,
}

#[cfg(feature = "preview")]
#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Input scene (.ron); the built-in demo when omitted.
    scene: Option<PathBuf>,

    #[command(flatten)]
    raster: RasterArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Wireframe,
    Filled,
}

impl From<ModeChoice> for FillMode {
    fn from(choice: ModeChoice) -> Self {
        match choice {
            ModeChoice::Wireframe => FillMode::Wireframe,
            ModeChoice::Filled => FillMode::Filled,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EdgeRuleChoice {
    Inclusive,
    TopLeft,
}

impl From<EdgeRuleChoice> for EdgeRule {
    fn from(choice: EdgeRuleChoice) -> Self {
        match choice {
            EdgeRuleChoice::Inclusive => EdgeRule::Inclusive,
            EdgeRuleChoice::TopLeft => EdgeRule::TopLeft,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Command::Render(args) => {
            let scene = load_scene(&args.scene)
                .with_context(|| format!("load scene {}", args.scene.display()))?;
            render_to_file(&scene, &args.raster, &args.out)
        }
        Command::Demo(args) => render_to_file(&Scene::demo(), &args.raster, &args.out),
        Command::Darken(args) => {
            let mut fb = load_ppm(&args.input)
                .with_context(|| format!("load image {}", args.input.display()))?;
            fb.darken(args.amount);
            fb.save_image(&args.out)
                .with_context(|| format!("write {}", args.out.display()))?;
            tracing::info!(out = %args.out.display(), amount = args.amount, "darkened image");
            Ok(())
        }
        #[cfg(feature = "preview")]
        Command::Preview(args) => {
            let scene = match &args.scene {
                Some(path) => load_scene(path)
                    .with_context(|| format!("load scene {}", path.display()))?,
                None => Scene::demo(),
            };
            let fb = render(&scene, &args.raster)?;
            glsr::preview::show(fb, format!("glsr v{}", glsr::VERSION))
                .context("open preview window")?;
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Render with CLI overrides. `--mode` is forced onto every triangle,
/// `--edge-rule` replaces the scene's rule.
fn render(scene: &Scene, raster: &RasterArgs) -> anyhow::Result<glsr::Framebuffer> {
    let mut scene = scene.clone();
    if let Some(rule) = raster.edge_rule {
        scene.edge_rule = rule.into();
    }

    let fb = match raster.mode {
        Some(mode) => scene.render_with(&scene.settings().with_fill_mode(mode.into())),
        None => scene.render(),
    };
    fb.context("render scene")
}

fn render_to_file(scene: &Scene, raster: &RasterArgs, out: &Path) -> anyhow::Result<()> {
    let fb = render(scene, raster)?;
    fb.save_image(out)
        .with_context(|| format!("write {}", out.display()))?;
    tracing::info!(
        out = %out.display(),
        width = fb.width(),
        height = fb.height(),
        primitives = scene.primitives.len(),
        "rendered scene"
    );
    Ok(())
}
