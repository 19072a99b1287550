use std::{
    fs::{self, File},
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "stageflow", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single slide at a single animation tick.
    Frame(FrameArgs),
    /// Render a tick sequence for one slide (or the whole story) as numbered frames.
    Render(RenderArgs),
    /// Dump the built-in story as JSON, or validate a story file.
    Story(StoryArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Story JSON; defaults to the built-in story.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Slide index (0-based).
    #[arg(long)]
    slide: usize,

    /// Animation tick to sample (progress-clock ticks for attack-flow slides).
    #[arg(long, default_value_t = 0)]
    tick: u64,

    /// Display mode to render.
    #[arg(long, value_enum, default_value_t = ModeChoice::Wide)]
    mode: ModeChoice,

    /// Output path; format chosen by extension (.svg or .png).
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Story JSON; defaults to the built-in story.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Slide index; when omitted, every slide is rendered.
    #[arg(long)]
    slide: Option<usize>,

    /// Ticks to render per slide.
    #[arg(long, default_value_t = 90)]
    ticks: u64,

    /// Display mode to render.
    #[arg(long, value_enum, default_value_t = ModeChoice::Wide)]
    mode: ModeChoice,

    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatChoice::Png)]
    format: FormatChoice,

    /// Output directory for the numbered frames.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct StoryArgs {
    /// Story JSON to validate; when omitted, the built-in story is printed.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Wide,
    Vertical,
    Compact,
}

impl From<ModeChoice> for stageflow::DisplayMode {
    fn from(choice: ModeChoice) -> Self {
        match choice {
            ModeChoice::Wide => Self::Wide,
            ModeChoice::Vertical => Self::Vertical,
            ModeChoice::Compact => Self::Compact,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatChoice {
    Png,
    Svg,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Story(args) => cmd_story(args),
    }
}

fn load_story(path: Option<&Path>) -> anyhow::Result<stageflow::Story> {
    let story = match path {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("open story '{}'", path.display()))?;
            let r = BufReader::new(f);
            serde_json::from_reader(r).with_context(|| "parse story JSON")?
        }
        None => stageflow::Story::stuxnet(),
    };
    story.validate()?;
    Ok(story)
}

fn slide_at(story: &stageflow::Story, index: usize) -> anyhow::Result<&stageflow::Slide> {
    story
        .slides
        .get(index)
        .with_context(|| format!("slide index {index} out of range (story has {})", story.slides.len()))
}

fn write_frame(svg: &str, path: &Path) -> anyhow::Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("svg") => fs::write(path, svg).with_context(|| format!("write '{}'", path.display()))?,
        Some("png") => stageflow::render_png::write_png(svg, path)?,
        _ => anyhow::bail!("output extension must be .svg or .png"),
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let story = load_story(args.in_path.as_deref())?;
    let slide = slide_at(&story, args.slide)?;
    let svg = stageflow::render_svg::render_slide(slide, args.mode.into(), args.tick);
    write_frame(&svg, &args.out)?;
    println!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let story = load_story(args.in_path.as_deref())?;
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create '{}'", args.out_dir.display()))?;

    let slides: Vec<usize> = match args.slide {
        Some(i) => {
            slide_at(&story, i)?;
            vec![i]
        }
        None => (0..story.slides.len()).collect(),
    };

    let ext = match args.format {
        FormatChoice::Png => "png",
        FormatChoice::Svg => "svg",
    };

    let mut frames = 0u64;
    for slide_idx in slides {
        let slide = &story.slides[slide_idx];
        // Static slides get a single frame; animated ones the full sequence.
        let ticks = match slide {
            stageflow::Slide::AttackFlow { .. } => args.ticks,
            _ => 1,
        };
        for tick in 0..ticks {
            let svg = stageflow::render_svg::render_slide(slide, args.mode.into(), tick);
            let path = args
                .out_dir
                .join(format!("slide{slide_idx:03}_tick{tick:04}.{ext}"));
            write_frame(&svg, &path)?;
            frames += 1;
        }
    }
    println!("wrote {frames} frames to {}", args.out_dir.display());
    Ok(())
}

fn cmd_story(args: StoryArgs) -> anyhow::Result<()> {
    match args.in_path.as_deref() {
        Some(path) => {
            load_story(Some(path))?;
            println!("{} is valid", path.display());
        }
        None => {
            let story = stageflow::Story::stuxnet();
            let json = serde_json::to_string_pretty(&story).context("serialize story")?;
            println!("{json}");
        }
    }
    Ok(())
}
