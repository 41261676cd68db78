mod command;
mod common;
mod error;

use anyhow::Context;
use clap::{Parser, Subcommand};
use flexi_logger::{AdaptiveFormat, Logger};

use command::{
    ContainsArgs, DistinctArgs, ElementAtArgs, PairArgs, PairOp, PredicateArgs, PredicateOp,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log specification, e.g. "debug" or "seqop=trace"
    #[arg(long, global = true, env = "SEQOP_LOG", default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Whether every integer satisfies the predicate.
    All(PredicateArgs),
    /// Whether any integer satisfies the predicate.
    Any(PredicateArgs),
    /// Whether the word occurs in the sequence.
    Contains(ContainsArgs),
    /// The first integer satisfying the predicate.
    First(PredicateArgs),
    /// The last integer satisfying the predicate.
    Last(PredicateArgs),
    /// The only integer satisfying the predicate.
    ///
    /// Fails if there is none, or more than one.
    Single(PredicateArgs),
    /// Each word the first time it occurs.
    Distinct(DistinctArgs),
    /// Words of the first sequence that aren't in the second.
    Except(PairArgs),
    /// Words of the first sequence that are also in the second.
    Intersect(PairArgs),
    /// Words of either sequence, each once.
    Union(PairArgs),
    /// The word at a zero-based position.
    ElementAt(ElementAtArgs),
    /// How many integers satisfy the predicate.
    Count(PredicateArgs),
    /// Whether both sequences hold the same words in the same order.
    SequenceEqual(PairArgs),
    /// Integers from the first one that fails the predicate onwards.
    SkipWhile(PredicateArgs),
    /// Integers that satisfy the predicate.
    Where(PredicateArgs),
    /// Run every operator over a built-in example.
    Demo,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _logger = Logger::try_with_str(&cli.log_level)
        .with_context(|| format!("Invalid log specification: {}", cli.log_level))?
        .log_to_stderr()
        .adaptive_format_for_stderr(AdaptiveFormat::Default)
        .start()?;

    let output = match cli.command {
        Commands::All(args) => args.run(PredicateOp::All)?,
        Commands::Any(args) => args.run(PredicateOp::Any)?,
        Commands::Contains(args) => args.run(),
        Commands::First(args) => args.run(PredicateOp::First)?,
        Commands::Last(args) => args.run(PredicateOp::Last)?,
        Commands::Single(args) => args.run(PredicateOp::Single)?,
        Commands::Distinct(args) => args.run(),
        Commands::Except(args) => args.run(PairOp::Except),
        Commands::Intersect(args) => args.run(PairOp::Intersect),
        Commands::Union(args) => args.run(PairOp::Union),
        Commands::ElementAt(args) => args.run()?,
        Commands::Count(args) => args.run(PredicateOp::Count)?,
        Commands::SequenceEqual(args) => args.run(PairOp::SequenceEqual),
        Commands::SkipWhile(args) => args.run(PredicateOp::SkipWhile)?,
        Commands::Where(args) => args.run(PredicateOp::Where)?,
        Commands::Demo => command::demo().join("\n"),
    };
    println!("{}", output);
    Ok(())
}
