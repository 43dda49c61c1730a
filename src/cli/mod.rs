// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// The terminal replacement for the game's screens. It uses the
// `clap` crate to parse command line arguments and delegates
// all work to Layer 2 (application).
//
// Three commands are supported:
//   1. `classify` — recognise one digit from an image or strokes
//   2. `render`   — show what the model will see for a stroke file
//   3. `play`     — the arithmetic game, one command per line
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;
pub mod repl;

use anyhow::Result;
use clap::Parser;
use commands::{ClassifyArgs, Commands, PlayArgs, RenderArgs};

use crate::domain::{IMAGE_HEIGHT, IMAGE_WIDTH};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "mathscribe",
    version = "0.1.0",
    about = "Solve arithmetic questions by handwriting the digits of the answer."
)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Classify(args) => run_classify(args),
            Commands::Render(args)   => run_render(args),
            Commands::Play(args)     => run_play(args),
        }
    }
}

/// Handles the `classify` subcommand.
fn run_classify(args: ClassifyArgs) -> Result<()> {
    use crate::application::classify_use_case::ClassifyUseCase;
    use crate::data::loader::{load_drawing, ImageFile};
    use crate::domain::traits::RasterProducer;

    // Model first — without it nothing else matters
    let use_case = ClassifyUseCase::from_model_dir(&args.model_dir)?;

    let producer: Box<dyn RasterProducer> = match (args.image, args.strokes) {
        (Some(image), _)      => Box::new(ImageFile::new(image)),
        (None, Some(strokes)) => Box::new(load_drawing(strokes)?),
        // clap's ArgGroup guarantees one of the two
        (None, None)          => anyhow::bail!("Either --image or --strokes is required"),
    };

    let result = use_case.classify(producer.as_ref())?;
    println!("Digit: {}", result.digit);
    for (digit, score) in result.scores.scores().iter().enumerate() {
        println!("  {digit}: {score:>10.4}");
    }
    Ok(())
}

/// Handles the `render` subcommand.
fn run_render(args: RenderArgs) -> Result<()> {
    use crate::data::loader::{load_drawing, save_raster};
    use crate::domain::traits::RasterProducer;

    let drawing = load_drawing(&args.strokes)?;
    let raster  = drawing.produce(IMAGE_WIDTH, IMAGE_HEIGHT)?;
    save_raster(&raster, &args.out)?;

    tracing::info!("Rendered '{}' to '{}'", args.strokes, args.out);
    println!("Wrote {}x{} raster to {}", IMAGE_WIDTH, IMAGE_HEIGHT, args.out);
    Ok(())
}

/// Handles the `play` subcommand.
fn run_play(args: PlayArgs) -> Result<()> {
    use crate::application::{
        classify_use_case::ClassifyUseCase,
        play_use_case::{GameConfig, PlayUseCase},
    };

    let config   = GameConfig::from(args);
    let classify = ClassifyUseCase::from_model_dir(&config.model_dir)?;
    let mut play = PlayUseCase::new(classify, &config);

    let stdin  = std::io::stdin();
    let stdout = std::io::stdout();
    repl::run(&mut play, stdin.lock(), &mut stdout.lock())?;

    tracing::info!(
        "Game over: score {} of {}{}",
        play.score(), config.target_score,
        if play.is_won() { ", won" } else { "" }
    );
    Ok(())
}
