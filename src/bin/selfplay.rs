//! Headless self-play and position analysis
//!
//! Without `--position`, plays one or more AI-vs-AI games and prints the
//! board after every move. With `--position "XX./.../..."`, scores every
//! empty cell for the side to move and prints the ranking.

use std::thread;

use anyhow::Context;
use clap::Parser;
use tictactoe::cli::{self, DifficultyArg, EngineArgs};
use tictactoe::{
    Board, Difficulty, EngineConfig, Game, GameMode, GameStatus, Mark, MoveSelector, SessionStats,
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    engine: EngineArgs,
    /// AI strength for both sides
    #[clap(long, value_enum, default_value_t)]
    difficulty: DifficultyArg,
    /// Number of games to play
    #[clap(long, default_value_t = 1)]
    games: u32,
    /// Wait `--delay-ms` between moves
    #[clap(long)]
    paced: bool,
    /// Seed for the easy AI's random moves
    #[clap(long)]
    seed: Option<u64>,
    /// Analyse this position instead of playing, rows separated by '/'
    #[clap(long)]
    position: Option<String>,
}

#[derive(Debug, Default)]
struct Tally {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    cli::init_tracing();

    match &args.position {
        Some(position) => analyse(&args, position),
        None => play(&args),
    }
}

fn selector(args: &Args, config: EngineConfig) -> anyhow::Result<MoveSelector> {
    let selector = match args.seed {
        Some(seed) => MoveSelector::with_seed(config, seed)?,
        None => MoveSelector::new(config)?,
    };
    Ok(selector)
}

fn play(args: &Args) -> anyhow::Result<()> {
    let config = args.engine.config()?;
    let difficulty = Difficulty::from(args.difficulty);
    let mut engine = selector(args, config)?;
    let rules = engine.rules();
    let mut tally = Tally::default();

    println!(
        "{}×{} board, {} in a row, {} vs {}",
        config.board_size, config.board_size, config.win_length, difficulty, difficulty
    );

    for index in 1..=args.games {
        println!("\n=== Game {index} ===");
        let mut game = Game::new(rules);
        let mut stats = SessionStats::new();

        while !game.is_over() {
            let mark = game.current();
            let result = engine.compute_move(game.board(), GameMode::AiVsAi, difficulty, mark)?;
            stats.record_ai_move(&result);
            let pos = result.best_move.context("engine returned no move")?;
            game.apply_move(pos)?;

            println!(
                "{mark} plays {pos}  [{}, score {}, {} nodes, {}ms]",
                result.search_type,
                result.score,
                result.nodes,
                result.time_ms()
            );
            println!("{}\n", game.board());

            if args.paced && !game.is_over() {
                thread::sleep(config.ai_vs_ai_delay);
            }
        }

        stats.finish();
        match game.status() {
            GameStatus::Won { winner, line } => {
                let cells: Vec<String> = line.iter().map(ToString::to_string).collect();
                println!("{winner} wins along {}", cells.join(" "));
                match winner {
                    Mark::X => tally.x_wins += 1,
                    Mark::O => tally.o_wins += 1,
                }
            }
            GameStatus::Draw => {
                println!("Draw");
                tally.draws += 1;
            }
            GameStatus::InProgress => {}
        }
        print_stats(&stats);
        stats.log_summary();
    }

    println!(
        "\nResults over {} game(s): X {} / O {} / draw {}",
        args.games, tally.x_wins, tally.o_wins, tally.draws
    );
    Ok(())
}

fn print_stats(stats: &SessionStats) {
    let ms = |d: Option<std::time::Duration>| d.map_or(0, |d| d.as_millis());
    println!(
        "{} moves, AI time min {}ms / max {}ms / avg {}ms, {} nodes (avg {}), {:.2}s",
        stats.total_moves(),
        ms(stats.ai_time_min()),
        ms(stats.ai_time_max()),
        ms(stats.ai_time_avg()),
        stats.total_nodes(),
        stats.avg_nodes().unwrap_or(0),
        stats.game_duration().as_secs_f64()
    );
}

fn analyse(args: &Args, position: &str) -> anyhow::Result<()> {
    let board = position.parse::<Board>().context("invalid --position")?;
    let config = args.engine.config_for_size(board.size())?;
    let mut engine = selector(args, config)?;
    let rules = engine.rules();
    let difficulty = Difficulty::from(args.difficulty);

    println!("{board}\n");

    if let Some(winner) = rules.winner(&board) {
        println!("{winner} has already won");
        return Ok(());
    }
    if rules.is_draw(&board) {
        println!("Board is full: draw");
        return Ok(());
    }

    // X moves first, so equal counts mean X is to move
    let to_move = if board.count(Mark::X) > board.count(Mark::O) {
        Mark::O
    } else {
        Mark::X
    };

    let result = engine.compute_move(&board, GameMode::AiVsAi, difficulty, to_move)?;

    println!(
        "{to_move} to move, {} ({} nodes, {}ms)",
        result.search_type,
        result.nodes,
        result.time_ms()
    );
    if result.ranked.is_empty() {
        if let Some(pos) = result.best_move {
            println!("  -> {pos}");
        }
        return Ok(());
    }
    for (rank, candidate) in result.ranked.iter().enumerate() {
        let marker = if Some(candidate.pos) == result.best_move { "->" } else { "  " };
        println!(
            "{marker} {:>2}. {}  {:+}",
            rank + 1,
            candidate.pos,
            candidate.score
        );
    }
    Ok(())
}
