// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `classify`, `render` and `play`
// and all their configurable flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{ArgGroup, Args, Subcommand};
use crate::application::play_use_case::GameConfig;

/// The top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recognise a single handwritten digit
    Classify(ClassifyArgs),

    /// Rasterise a stroke file to a 28x28 image (no model needed)
    Render(RenderArgs),

    /// Play the arithmetic game on the terminal
    Play(PlayArgs),
}

/// All arguments for the `classify` command.
/// Exactly one input — an image or a stroke file — is required.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["image", "strokes"])))]
pub struct ClassifyArgs {
    /// Image of the digit (PNG, JPEG, ...); scaled to 28x28 if needed
    #[arg(long)]
    pub image: Option<String>,

    /// JSON stroke file describing the drawing
    #[arg(long)]
    pub strokes: Option<String>,

    /// Directory with model_config.json and the model weights
    #[arg(long, default_value = "assets/digit_model")]
    pub model_dir: String,
}

/// All arguments for the `render` command
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// JSON stroke file to rasterise
    #[arg(long)]
    pub strokes: String,

    /// Where to write the image (format from the extension)
    #[arg(long, default_value = "digit.png")]
    pub out: String,
}

/// All arguments for the `play` command
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Directory with model_config.json and the model weights
    #[arg(long, default_value = "assets/digit_model")]
    pub model_dir: String,

    /// Points needed to win
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub target_score: u32,

    /// Largest operand a question may use
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_operand: u32,

    /// Seed the question generator for a repeatable game
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Convert CLI PlayArgs into the application-layer GameConfig.
/// The application layer never sees clap types.
impl From<PlayArgs> for GameConfig {
    fn from(a: PlayArgs) -> Self {
        GameConfig {
            model_dir:    a.model_dir,
            target_score: a.target_score,
            max_operand:  a.max_operand,
            seed:         a.seed,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use crate::cli::Cli;
    use super::*;
    use clap::Parser;

    #[test]
    fn test_classify_needs_an_input() {
        assert!(Cli::try_parse_from(["mathscribe", "classify"]).is_err());
        assert!(Cli::try_parse_from(["mathscribe", "classify", "--image", "a.png", "--strokes", "b.json"]).is_err());
    }

    #[test]
    fn test_play_rejects_zero_limits() {
        assert!(Cli::try_parse_from(["mathscribe", "play", "--target-score", "0"]).is_err());
        assert!(Cli::try_parse_from(["mathscribe", "play", "--max-operand", "0"]).is_err());

        let cli = Cli::try_parse_from(["mathscribe", "play", "--target-score", "1", "--max-operand", "1"]).unwrap();
        let Commands::Play(args) = cli.command else { panic!("expected play") };
        assert_eq!((args.target_score, args.max_operand), (1, 1));
    }

    #[test]
    fn test_play_defaults() {
        let cli = Cli::try_parse_from(["mathscribe", "play"]).unwrap();
        let Commands::Play(args) = cli.command else { panic!("expected play") };
        let cfg = GameConfig::from(args);
        assert_eq!(cfg.target_score, 10);
        assert_eq!(cfg.max_operand, 20);
        assert_eq!(cfg.model_dir, "assets/digit_model");
        assert_eq!(cfg.seed, None);
    }
}
