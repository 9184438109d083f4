//! Arena CLI
//!
//! Play a game from the settings file, or run matches between engines.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use alpha_beta_engine::{AlphaBetaEngine, SearchConfig, Settings};
use arena::{MatchConfig, MatchReport, MatchRunner};
use checkers_core::{sq, Color, Engine, Game, Outcome, Square};
use random_engine::RandomEngine;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Checkers Arena");
    println!();
    println!("Usage:");
    println!("  checkers_arena play [--settings PATH] [--max-turns N]");
    println!("  checkers_arena match <engine1> <engine2> [--games N] [--depth D] [--max-turns N] [--out PATH]");
    println!();
    println!("Engines:");
    println!("  alphabeta     - Minimax with alpha-beta pruning");
    println!("  random        - Random legal turns");
    println!();
    println!("In play mode, human moves are entered as `row col row col`;");
    println!("capture chains ask for each further landing as `row col`.");
    println!("`u` undoes the last turn, `q` quits.");
}

fn create_engine(name: &str, depth: usize) -> Box<dyn Engine> {
    match name.to_lowercase().as_str() {
        "alphabeta" | "ab" => Box::new(AlphaBetaEngine::new(SearchConfig {
            depth,
            ..Default::default()
        })),
        "random" => Box::new(RandomEngine::new()),
        _ => {
            eprintln!("Unknown engine: {}", name);
            Box::new(AlphaBetaEngine::new(SearchConfig {
                depth,
                ..Default::default()
            }))
        }
    }
}

/// Parse whitespace or comma separated coordinates into squares.
fn parse_squares(line: &str) -> Option<Vec<Square>> {
    let nums: Vec<i8> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(|t| t.parse().ok())
        .collect::<Option<_>>()?;
    if nums.len() % 2 != 0 {
        return None;
    }
    nums.chunks(2).map(|p| sq(p[0], p[1])).collect()
}

enum HumanAction {
    Played,
    Undo,
    Quit,
}

fn prompt(input: &mut impl Iterator<Item = io::Result<String>>, label: &str) -> Option<String> {
    print!("{label}> ");
    io::stdout().flush().ok();
    input.next()?.ok()
}

fn human_turn(
    game: &mut Game,
    engine: &mut AlphaBetaEngine,
    input: &mut impl Iterator<Item = io::Result<String>>,
) -> HumanAction {
    let side = game.side_to_move;
    let legal = engine.find_turns(&game.board, side);
    let hint: Vec<String> = legal.moves.iter().map(ToString::to_string).collect();
    println!("{side} to move: {}", hint.join(" "));

    let mv = loop {
        let Some(line) = prompt(input, &side.to_string()) else {
            return HumanAction::Quit;
        };
        match line.trim() {
            "q" | "quit" => return HumanAction::Quit,
            "u" | "undo" => return HumanAction::Undo,
            _ => {}
        }
        let Some(squares) = parse_squares(&line) else {
            println!("enter a move as: row col row col");
            continue;
        };
        let [from, to] = squares.as_slice() else {
            println!("enter a move as: row col row col");
            continue;
        };
        match legal.moves.iter().find(|m| m.from == *from && m.to == *to) {
            Some(&mv) => break mv,
            None => println!("illegal move"),
        }
    };

    game.begin_turn();
    game.apply_move(mv);
    if mv.is_capture() {
        let mut at = mv.to;
        loop {
            let cont = engine.find_turns_at(&game.board, at);
            if !cont.has_captures {
                break;
            }
            println!("{}", game.board);
            let hint: Vec<String> = cont.moves.iter().map(|m| m.to.to_string()).collect();
            println!("keep capturing from {at}: {}", hint.join(" "));

            let Some(line) = prompt(input, &side.to_string()) else {
                // abandon the half-played turn
                game.end_turn();
                game.undo();
                return HumanAction::Quit;
            };
            let landing = parse_squares(&line).and_then(|v| v.first().copied());
            match cont.moves.iter().find(|m| Some(m.to) == landing) {
                Some(&step) => {
                    game.apply_move(step);
                    at = step.to;
                }
                None => println!("illegal landing square"),
            }
        }
    }
    game.end_turn();
    HumanAction::Played
}

fn run_play(args: &[String]) {
    let mut settings_path = "settings.json".to_string();
    let mut max_turns: u32 = 300;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--settings" | "-s" => {
                if i + 1 < args.len() {
                    settings_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--max-turns" | "-t" => {
                if i + 1 < args.len() {
                    max_turns = args[i + 1].parse().unwrap_or(300);
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    let settings = match Settings::load(&settings_path) {
        Ok(s) => s,
        Err(e) => {
            warn!("{e}; using default settings");
            Settings::default()
        }
    };
    let bot = &settings.bot;
    let mut engines = Color::ALL.map(|c| AlphaBetaEngine::new(bot.search_config(c)));

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();
    let mut game = Game::new();
    println!("{}", game.board);

    while game.turns_played() < max_turns && game.outcome().is_none() {
        let side = game.side_to_move;
        let engine = &mut engines[side.idx()];

        if bot.is_bot(side) {
            if bot.bot_delay_ms > 0 {
                thread::sleep(Duration::from_millis(bot.bot_delay_ms));
            }
            let result = engine.find_best_turns(&game.board, side);
            let line: Vec<String> = result.turns.iter().map(ToString::to_string).collect();
            println!("{side}: {}", line.join(" "));
            game.play_turn(&result.turns);
        } else {
            match human_turn(&mut game, engine, &mut input) {
                HumanAction::Played => {}
                HumanAction::Quit => return,
                HumanAction::Undo => {
                    if !game.undo() {
                        println!("nothing to undo");
                        continue;
                    }
                    // step back over bot replies to the human's last turn
                    while bot.is_bot(game.side_to_move) && game.can_undo() {
                        game.undo();
                    }
                }
            }
        }
        println!("{}", game.board);
    }

    match game.outcome() {
        Some(Outcome::Win(c)) => println!("{c} wins after {} turns", game.turns_played()),
        _ => println!("Draw after {} turns", game.turns_played()),
    }
}

fn run_match(args: &[String]) {
    if args.len() < 2 {
        eprintln!("Error: match requires two engine names");
        print_usage();
        return;
    }

    let engine1_name = &args[0];
    let engine2_name = &args[1];

    // Parse optional arguments
    let mut num_games: u32 = 10;
    let mut depth: usize = 4;
    let mut max_turns: u32 = 150;
    let mut out: Option<String> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                if i + 1 < args.len() {
                    num_games = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "--depth" | "-d" => {
                if i + 1 < args.len() {
                    depth = args[i + 1].parse().unwrap_or(4);
                    i += 1;
                }
            }
            "--max-turns" | "-t" => {
                if i + 1 < args.len() {
                    max_turns = args[i + 1].parse().unwrap_or(150);
                    i += 1;
                }
            }
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    info!(
        "Match: {} vs {}, games: {}, depth: {}",
        engine1_name, engine2_name, num_games, depth
    );

    let mut engine1 = create_engine(engine1_name, depth);
    let mut engine2 = create_engine(engine2_name, depth);

    let config = MatchConfig {
        num_games,
        max_turns,
        verbose: true,
        ..Default::default()
    };

    let runner = MatchRunner::new(config);
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut());

    let report = MatchReport {
        engine1: engine1.name().to_string(),
        engine2: engine2.name().to_string(),
        depth,
        max_turns,
        result,
    };
    println!("{}", report.summary());

    if let Some(path) = out {
        if let Err(e) = report.save(Path::new(&path)) {
            eprintln!("Warning: Failed to save report: {}", e);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "play" => run_play(&args[2..]),
        "match" => run_match(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
        }
    }
}
