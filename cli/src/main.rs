//! cogame CLI - Command-line harness for the cogame engine
//!
//! Builds a game from command-line numbers and prints its solution concepts.

use std::process;

use cogame_engine::{CooperativeGame, GameError, SimpleGame, TuGame, WeightedVotingGame};
use cogame_indices::{power_indices, power_values};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let outcome = match args.get(1).map(String::as_str) {
        Some("values") if args.len() >= 3 => run_values(&args[2..]),
        Some("indices") if args.len() >= 5 && args[2] == "--quorum" => run_indices(&args[3], &args[4..]),
        _ => {
            print_usage();
            return;
        }
    };

    if let Err(message) = outcome {
        eprintln!("error: {message}");
        process::exit(1);
    }
}

fn print_usage() {
    println!("cogame CLI v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage:");
    println!("  cogame values <payoff>...                TU game, payoffs in canonical coalition order");
    println!("  cogame indices --quorum <q> <weight>...  weighted voting game");
    println!();
    println!("Examples:");
    println!("  cogame values 2 4 5 18 14 9 24");
    println!("  cogame indices --quorum 4 1 2 3");
    println!();
    println!("RAYON_NUM_THREADS sizes the pool used for core vertex solves.");
}

/// Size the global pool from `RAYON_NUM_THREADS`, keeping Rayon's default
/// when unset or unparsable.
fn init_rayon_threads() {
    let requested = std::env::var("RAYON_NUM_THREADS")
        .ok()
        .and_then(|s| s.parse::<usize>().ok());
    if let Some(num_threads) = requested {
        // May fail if already initialized
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok();
    }
}

fn parse_numbers<T: std::str::FromStr>(raw: &[String]) -> Result<Vec<T>, String> {
    raw.iter()
        .map(|s| s.parse().map_err(|_| format!("'{s}' is not a number")))
        .collect()
}

fn run_values(raw: &[String]) -> Result<(), String> {
    init_rayon_threads();
    let payoffs: Vec<f64> = parse_numbers(raw)?;
    let game = TuGame::new(&payoffs).map_err(|e: GameError| e.to_string())?;

    println!("{game}");
    println!();
    for (name, payoffs) in power_values(&game) {
        println!("{name:<16} {}", format_vector(&payoffs));
    }
    println!();
    println!("Utopia payoffs   {}", format_vector(&game.utopia_payoff_vector()));
    println!("Minimal rights   {}", format_vector(&game.minimal_rights_vector()));
    println!("Convex           {}", game.is_convex());
    println!("Additive         {}", game.is_additive());

    println!();
    println!("Imputation vertices:");
    for vertex in game.imputation_vertices() {
        println!("  {}", format_vector(&vertex));
    }
    let core = game.core_vertices().map_err(|e| e.to_string())?;
    if core.is_empty() {
        println!("Core is empty");
    } else {
        println!("Core vertices:");
        for vertex in core {
            println!("  {}", format_vector(&vertex));
        }
    }
    Ok(())
}

fn run_indices(quorum: &str, raw: &[String]) -> Result<(), String> {
    let quorum: i64 = quorum
        .parse()
        .map_err(|_| format!("quorum '{quorum}' is not an integer"))?;
    let weights: Vec<i64> = parse_numbers(raw)?;
    let game = WeightedVotingGame::from_weights(weights, quorum).map_err(|e| e.to_string())?;

    println!("{game}");
    println!();
    println!("Winning coalitions:          {}", format_coalitions(&game.winning_coalitions()));
    println!(
        "Minimal winning coalitions:  {}",
        format_coalitions(&game.minimal_winning_coalitions())
    );
    println!(
        "Shift-minimal coalitions:    {}",
        format_coalitions(&game.shift_winning_coalitions())
    );
    println!("Null players:                {:?}", game.null_players());
    println!();
    for (name, scores) in power_indices(&game) {
        println!("{name:<30} {}", format_vector(&scores));
    }
    Ok(())
}

fn format_vector(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| format!("{v:.4}")).collect();
    format!("[{}]", parts.join(", "))
}

fn format_coalitions<C: std::fmt::Display>(coalitions: &[C]) -> String {
    let parts: Vec<String> = coalitions.iter().map(|c| c.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numbers() {
        let raw = vec!["1".to_string(), "2.5".to_string()];
        assert_eq!(parse_numbers::<f64>(&raw), Ok(vec![1.0, 2.5]));
        assert!(parse_numbers::<i64>(&raw).is_err());
    }

    #[test]
    fn test_format_vector() {
        assert_eq!(format_vector(&[9.5, 8.0]), "[9.5000, 8.0000]");
        assert_eq!(format_vector(&[]), "[]");
    }

    #[test]
    fn test_format_coalitions() {
        let game = WeightedVotingGame::from_weights(vec![1, 2, 3], 4).unwrap();
        assert_eq!(
            format_coalitions(&game.minimal_winning_coalitions()),
            "[(1, 3), (2, 3)]"
        );
    }
}
