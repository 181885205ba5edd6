//! satlab: interactive driver for the four-numbers game.
//!
//! Prompts for four nonnegative integers, recovers a pair `(x, y)`
//! whose sum, difference, product and quotient are those numbers in
//! some order, then reports whether that pair is unique.
//!
//! The solver engine is auto-detected (Z3 by default; override with
//! `SATLAB_SOLVER=cvc5` or `SATLAB_SOLVER=yices`). Set `RUST_LOG=debug`
//! to watch the individual solver invocations.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use colored::Colorize;

use satlab_puzzles::four_numbers;
use satlab_solver::Prover;

const PROMPTS: [&str; 4] = [
    "First number: ",
    "Second number: ",
    "Third number: ",
    "Fourth number: ",
];

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let prover = Prover::with_default_backend()?;
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout();

    println!("{}", "=== Input ===".bold());
    let nums = read_numbers(&mut stdin, &mut stdout)?;

    println!("{}", "=== Stage 1 ===".bold());
    let first = four_numbers::solve_stage1(&prover, nums)?;
    match first {
        Some((x, y)) => println!("{} x = {x}, y = {y}", "Solution:".green().bold()),
        None => println!("{}", "No solution found.".red()),
    }

    println!("{}", "=== Stage 2 ===".bold());
    let answer = four_numbers::solve_stage2(&prover, nums, first)?;
    println!("Solution status: {answer}");

    Ok(())
}

/// Prompt for and read the four numbers, one per line.
fn read_numbers(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<[i64; 4], Box<dyn Error>> {
    let mut nums = [0i64; 4];
    for (slot, prompt) in nums.iter_mut().zip(PROMPTS) {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err("unexpected end of input".into());
        }
        *slot = line.trim().parse()?;
    }
    Ok(nums)
}
