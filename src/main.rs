//! Tic-tac-toe GUI
//!
//! A graphical interface for playing K-in-a-row against the AI or watching
//! two AIs play each other.

use clap::Parser;
use tictactoe::cli::{self, DifficultyArg, EngineArgs, ModeArg};
use tictactoe::ui::TicTacToeApp;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    engine: EngineArgs,
    /// AI strength
    #[clap(long, value_enum, default_value_t)]
    difficulty: DifficultyArg,
    /// Who plays
    #[clap(long, value_enum, default_value_t)]
    mode: ModeArg,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    cli::init_tracing();

    let config = args.engine.config()?;
    let app = TicTacToeApp::new(config, args.mode.into(), args.difficulty.into())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("GUI terminated with an error: {e}"))
}
