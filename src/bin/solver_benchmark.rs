use beginner_cube::engine::CubeState;
use beginner_cube::notation::format_moves;
use beginner_cube::solver::{solve_state, Phase};
use beginner_cube::utils::{scramble_with_seed, DEFAULT_SCRAMBLE_LENGTH};
use clap::Parser;
use env_logger::TimestampPrecision;
use log::{debug, LevelFilter};
use std::collections::HashMap;
use std::process;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of seeded scrambles to solve
    #[clap(short, long, default_value_t = 1000)]
    count: u64,

    /// Seed of the first scramble; the others follow consecutively
    #[clap(short, long, default_value_t = 0)]
    start_seed: u64,

    /// Moves per scramble
    #[clap(short, long, default_value_t = DEFAULT_SCRAMBLE_LENGTH)]
    length: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Default)]
struct Stats {
    total: usize,
    min: Option<usize>,
    max: usize,
}

impl Stats {
    fn record(&mut self, value: usize) {
        self.total += value;
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = self.max.max(value);
    }

    fn average(&self, samples: u64) -> f64 {
        if samples == 0 {
            0.0
        } else {
            self.total as f64 / samples as f64
        }
    }
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

    println!(
        "Solving {} scrambles of {} moves (seeds {}..{})...",
        args.count,
        args.length,
        args.start_seed,
        args.start_seed + args.count
    );

    let mut solution_lengths = Stats::default();
    let mut raw_lengths = Stats::default();
    let mut phase_lengths: HashMap<Phase, Stats> = HashMap::new();
    let mut failures = 0;

    for seed in args.start_seed..args.start_seed + args.count {
        let scramble = scramble_with_seed(seed, args.length);
        let mut cube = CubeState::from_moves(&scramble);
        let solution = match solve_state(&cube) {
            Ok(solution) => solution,
            Err(e) => {
                eprintln!("Seed {}: {} (scramble: {})", seed, e, format_moves(&scramble));
                failures += 1;
                continue;
            }
        };
        cube.apply_moves(&solution.moves);
        if !cube.is_solved() {
            eprintln!("Seed {}: solution leaves the cube unsolved (scramble: {})", seed, format_moves(&scramble));
            failures += 1;
            continue;
        }
        debug!("seed {}: {} moves", seed, solution.moves.len());

        solution_lengths.record(solution.moves.len());
        raw_lengths.record(solution.unsimplified_len);
        for (phase, count) in solution.phase_moves {
            phase_lengths.entry(phase).or_default().record(count);
        }
    }

    let solved = args.count - failures;
    println!("\n--- Benchmark Complete ---");
    println!("Solved: {}/{}", solved, args.count);
    println!(
        "Solution length: avg {:.1}, min {}, max {}",
        solution_lengths.average(solved),
        solution_lengths.min.unwrap_or(0),
        solution_lengths.max
    );
    println!(
        "Before simplification: avg {:.1}, max {}",
        raw_lengths.average(solved),
        raw_lengths.max
    );
    println!("\n--- Moves per Phase ---");
    for phase in Phase::ALL {
        if let Some(stats) = phase_lengths.get(&phase) {
            println!(
                "{:<24}: avg {:>6.1}, max {:>4}",
                phase.to_string(),
                stats.average(solved),
                stats.max
            );
        }
    }

    if failures > 0 {
        process::exit(1);
    }
}
