use beginner_cube::engine::CubeState;
use beginner_cube::geometry::GeometricCube;
use beginner_cube::notation::{format_moves, parse_tokens, Move};
use beginner_cube::solver::solve_state;
use beginner_cube::utils::{moves_from_lines, scramble_with_seed, DEFAULT_SCRAMBLE_LENGTH};
use clap::Parser;
use env_logger::TimestampPrecision;
use log::{info, LevelFilter};
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Scramble moves, e.g. `R U R' U'`
    moves: Vec<String>,

    /// Read the scramble from a file instead (one or more lines of moves, `#` starts a comment)
    #[clap(short, long, conflicts_with = "moves")]
    file: Option<PathBuf>,

    /// Generate a random scramble from this seed instead
    #[clap(short, long, conflicts_with_all = ["moves", "file"])]
    seed: Option<u64>,

    /// Length of the generated scramble
    #[clap(short, long, default_value_t = DEFAULT_SCRAMBLE_LENGTH)]
    length: usize,

    /// Print the cube net before and after solving
    #[clap(short, long)]
    net: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn read_scramble_file(path: &PathBuf) -> Result<Vec<Move>, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
    let lines: Vec<&str> = content.lines().collect();
    moves_from_lines(&lines).map_err(|e| format!("Invalid scramble: {}", e))
}

fn read_scramble(args: &Args) -> Result<Vec<Move>, String> {
    if let Some(path) = &args.file {
        info!("reading scramble from {}", path.display());
        return read_scramble_file(path);
    }
    if let Some(seed) = args.seed {
        return Ok(scramble_with_seed(seed, args.length));
    }
    // Accept both `solve_cube R U` and `solve_cube "R U"`.
    let tokens: Vec<&str> = args.moves.iter().flat_map(|m| m.split_whitespace()).collect();
    parse_tokens(&tokens).map_err(|e| format!("Invalid scramble: {}", e))
}

fn run(args: &Args) -> Result<(), String> {
    let scramble = read_scramble(args)?;
    let mut cube = CubeState::from_moves(&scramble);
    println!("Scramble ({}): {}", scramble.len(), format_moves(&scramble));
    if args.net {
        println!("\n{}", GeometricCube::project(&cube));
    }

    let solution = solve_state(&cube).map_err(|e| format!("Solver failed: {}", e))?;
    println!(
        "Solution ({} moves, {} before simplification):",
        solution.moves.len(),
        solution.unsimplified_len
    );
    println!("  {}", solution);
    for (phase, count) in &solution.phase_moves {
        println!("  {:<24} {:>4}", phase.to_string(), count);
    }

    cube.apply_moves(&solution.moves);
    if args.net {
        println!("\n{}", GeometricCube::project(&cube));
    }
    if !cube.is_solved() {
        return Err("Solution does not solve the cube".to_string());
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
