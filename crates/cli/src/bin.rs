use args::{to_level_filter, Width};
use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Result};
use fibkont::{
    Accumulator, Continuation, EvaluatorKind, Limits, Natural, DEFAULT_MAX_CHAIN_DEPTH, DEFAULT_MAX_NATIVE_DEPTH,
};
use log::{debug, info};
use owo_colors::OwoColorize;
use serde::Serialize;

mod args;

#[derive(Parser)]
#[command(name = "fibkont", version, about = "Fibonacci numbers through an explicit continuation chain")]
struct FibkontCli {
    #[command(subcommand)]
    nested: FibkontSubcommand,

    /// log level
    #[arg(short = 'l', long, global = true, default_value = "info")]
    log_level: String,

    /// maximum number of pending continuation frames
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_CHAIN_DEPTH)]
    max_chain_depth: usize,

    /// maximum native recursion depth of the recursive evaluator
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_NATIVE_DEPTH)]
    max_native_depth: usize,
}

#[derive(Subcommand)]
enum FibkontSubcommand {
    /// compute a single fibonacci number
    Run(Run),
    /// check that both evaluators agree over a range of indices
    Compare(Compare),
}

#[derive(clap::Args)]
struct Run {
    /// 1-based index of the fibonacci number
    n: u64,

    /// evaluator to use (recursive or iterative)
    #[arg(short = 'e', long, default_value = "iterative")]
    evaluator: EvaluatorKind,

    /// accumulator width (u8, u16, u32, u64, u128 or big)
    #[arg(short = 'w', long, default_value = "big")]
    width: Width,

    /// print a JSON report instead of the bare value
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args)]
struct Compare {
    /// first index, inclusive
    from: u64,

    /// last index, inclusive
    to: u64,
}

#[derive(Debug, Serialize)]
struct Report {
    n: u64,
    evaluator: &'static str,
    width: String,
    value: String,
    steps: u64,
    max_chain_depth: usize,
    max_native_depth: usize,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = FibkontCli::parse();
    pretty_env_logger::formatted_builder().filter_level(to_level_filter(&args.log_level)).init();

    let limits = Limits::default()
        .with_max_chain_depth(args.max_chain_depth)
        .with_max_native_depth(args.max_native_depth);
    debug!("limits: {limits:?}");

    match args.nested {
        FibkontSubcommand::Run(Run { n, evaluator, width, json }) => {
            let report = match width {
                Width::U8 => run::<u8>(evaluator, limits, n)?,
                Width::U16 => run::<u16>(evaluator, limits, n)?,
                Width::U32 => run::<u32>(evaluator, limits, n)?,
                Width::U64 => run::<u64>(evaluator, limits, n)?,
                Width::U128 => run::<u128>(evaluator, limits, n)?,
                Width::Big => run::<Natural>(evaluator, limits, n)?,
            };

            match json {
                true => anstream::println!("{}", serde_json::to_string_pretty(&report)?),
                false => anstream::println!("{}", report.value),
            }
            Ok(())
        }
        FibkontSubcommand::Compare(Compare { from, to }) => compare(limits, from, to),
    }
}

fn run<T: Accumulator>(kind: EvaluatorKind, limits: Limits, n: u64) -> Result<Report> {
    let evaluation = kind.evaluate::<T>(limits, n, Continuation::empty())?;
    info!("{} steps, chain depth {}", evaluation.steps, evaluation.max_chain_depth);

    Ok(Report {
        n,
        evaluator: kind.name(),
        width: T::WIDTH.to_string(),
        value: evaluation.value.to_string(),
        steps: evaluation.steps,
        max_chain_depth: evaluation.max_chain_depth,
        max_native_depth: evaluation.max_native_depth,
    })
}

fn compare(limits: Limits, from: u64, to: u64) -> Result<()> {
    if from > to {
        return Err(eyre!("empty range: {from} > {to}"));
    }

    for n in from..=to {
        let recursive = EvaluatorKind::Recursive.evaluate::<Natural>(limits, n, Continuation::empty())?;
        let iterative = EvaluatorKind::Iterative.evaluate::<Natural>(limits, n, Continuation::empty())?;
        debug!("fibonacci({n}) = {} / {}", recursive.value, iterative.value);

        if recursive.value != iterative.value {
            return Err(eyre!(
                "{}: fibonacci({n}) recursive={} iterative={}",
                "evaluators disagree".red().bold(),
                recursive.value,
                iterative.value
            ));
        }
    }

    anstream::println!("{} for n in {from}..={to}", "evaluators agree".green().bold());
    Ok(())
}
