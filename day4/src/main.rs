use std::env;

use anyhow::{Context, Result};
use day4::{Report, EXAMPLE_INPUT};

const DEFAULT_INPUT: &str = "input.txt";

fn main() -> Result<()> {
    util::init_logger();

    let example = Report::from_lines(&EXAMPLE_INPUT.lines().collect::<Vec<_>>());
    let expected = Report::EXAMPLE;

    println!(
        "Example accessible ({}): {}",
        expected.accessible, example.accessible
    );
    println!(
        "Example total removed ({}): {}",
        expected.total_removed, example.total_removed
    );

    if example != expected {
        log::error!("example gave {example:?}, expected {expected:?}");
    }

    let path = env::args().nth(1).unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let lines = util::read_input_file(&path).context("couldn't load the puzzle input")?;

    println!("{}", Report::from_lines(&lines).render("Input"));

    Ok(())
}
