use std::fs;
use std::io::{self, BufRead};

use clap::Parser;

use engine::logger::init_logger;
use engine::{
    AgeGroup, DifficultySettings, GameEvent, GameStatus, TileId, TileMatchSession, load_presets,
};

#[derive(Parser)]
#[command(
    name = "tile_match_cli",
    about = "Terminal host for the tile-matching engine"
)]
struct Args {
    /// Preset name: preschool, junior, senior, or a key from --presets
    #[arg(long, default_value = "preschool")]
    preset: String,

    /// RNG seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// YAML preset table that replaces the built-in presets
    #[arg(long)]
    presets: Option<String>,
}

fn resolve_settings(args: &Args) -> Result<DifficultySettings, String> {
    if let Some(path) = &args.presets {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read preset file {}: {}", path, e))?;
        let table = load_presets(&content)?;
        return table
            .get(&args.preset)
            .copied()
            .ok_or_else(|| format!("Preset '{}' not found in {}", args.preset, path));
    }

    let group = match args.preset.as_str() {
        "preschool" => AgeGroup::Preschool,
        "junior" => AgeGroup::Junior,
        "senior" => AgeGroup::Senior,
        other => return Err(format!("Unknown preset '{}'", other)),
    };
    Ok(DifficultySettings::for_age_group(group))
}

fn main() {
    let args = Args::parse();
    init_logger(None);

    let settings = match resolve_settings(&args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut session = match TileMatchSession::create(settings, seed) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    session.set_completion_callback(|final_score| {
        println!("Final score: {}", final_score);
    });

    print_board(&session);
    print_help();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            &[] => {}
            &["quit"] | &["exit"] => break,
            &["board"] => print_board(&session),
            &["hint"] => {
                let events = session.hint();
                if events.is_empty() {
                    println!("No hint available");
                }
                print_events(&events);
            }
            &["undo"] => {
                let events = session.undo();
                if events.is_empty() {
                    println!("Nothing to undo");
                } else {
                    print_events(&events);
                    print_board(&session);
                }
            }
            &["restart"] => match session.restart() {
                Ok(()) => print_board(&session),
                Err(e) => eprintln!("{}", e),
            },
            &["select", x, y] => select(&mut session, x, y, None),
            &["select", x, y, z] => select(&mut session, x, y, Some(z)),
            _ => print_help(),
        }

        if session.game_state().status() != GameStatus::InProgress {
            print_board(&session);
        }
    }
}

fn select(session: &mut TileMatchSession, x: &str, y: &str, z: Option<&str>) {
    let (Ok(x), Ok(y)) = (x.parse::<i32>(), y.parse::<i32>()) else {
        println!("Coordinates must be integers");
        return;
    };

    let id = match z {
        Some(z) => {
            let Ok(z) = z.parse::<u8>() else {
                println!("Layer must be a small integer");
                return;
            };
            session.game_state().board().tile_at(x, y, z).map(|t| t.id)
        }
        None => topmost_tile(session, x, y),
    };

    let Some(id) = id else {
        println!("No tile at that position");
        return;
    };

    let events = session.select_tile(id);
    if events.is_empty() {
        println!("{} is not playable", id);
    }
    print_events(&events);
    if events
        .iter()
        .any(|e| matches!(e, GameEvent::PairRemoved { .. }))
    {
        print_board(session);
    }
}

fn topmost_tile(session: &TileMatchSession, x: i32, y: i32) -> Option<TileId> {
    let board = session.game_state().board();
    let max_z = board.tiles().iter().map(|t| t.z).max().unwrap_or(0);
    (0..=max_z)
        .rev()
        .find_map(|z| board.tile_at(x, y, z))
        .map(|t| t.id)
}

fn print_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::TileSelected { tile } => println!("Selected {}", tile),
            GameEvent::TileDeselected { tile } => println!("Deselected {}", tile),
            GameEvent::PairRemoved {
                first,
                second,
                points,
            } => println!("Matched {} and {} for {} points", first, second, points),
            GameEvent::Mismatch { first, second } => {
                println!("{} and {} do not match", first, second)
            }
            GameEvent::HintShown { first, second } => {
                println!("Hint: {} pairs with {} ({} pre-selected)", first, second, first)
            }
            GameEvent::UndoApplied => println!("Undo applied"),
            GameEvent::GameOver {
                status,
                final_score,
            } => match status {
                GameStatus::Won => println!("Board cleared! Score: {}", final_score),
                GameStatus::Deadlocked => {
                    println!("No moves left. Score: {}", final_score)
                }
                GameStatus::InProgress => {}
            },
        }
    }
}

fn print_board(session: &TileMatchSession) {
    let state = session.game_state();
    let board = state.board();
    let tiles = board.tiles();

    let max_x = tiles.iter().map(|t| t.x).max().unwrap_or(0);
    let max_y = tiles.iter().map(|t| t.y).max().unwrap_or(0);
    let max_z = tiles.iter().map(|t| t.z).max().unwrap_or(0);
    let selected_pos = state
        .selected()
        .and_then(|id| board.get(id))
        .map(|t| (t.x, t.y, t.z));

    for z in 0..=max_z {
        if board.tiles().iter().all(|t| t.z != z || !t.is_active()) {
            continue;
        }
        println!("Layer {}:", z);
        for y in 0..=max_y {
            let mut row = String::new();
            for x in 0..=max_x {
                let cell = match board.tile_at(x, y, z) {
                    Some(tile) if selected_pos == Some((x, y, z)) => {
                        format!("[{:>2}]", tile.symbol.to_string())
                    }
                    Some(tile) => format!(" {:>2} ", tile.symbol.to_string()),
                    None => "  . ".to_string(),
                };
                row.push_str(&cell);
            }
            println!("  {}", row);
        }
    }
    println!(
        "Score: {}  Moves: {}  Hints: {}  Undos: {}",
        state.score(),
        state.move_count(),
        state.hints_remaining(),
        state.undos_remaining()
    );
}

fn print_help() {
    println!("Commands: select <x> <y> [z], hint, undo, restart, board, quit");
}
