//! Quine-McCluskey minimizer - command line interface
//!
//! Minimizes one boolean formula and optionally prints the truth table, the
//! prime-implicant trace, or the full diagnostic record as JSON.

use clap::{Parser, ValueEnum};
use qmc_logic::{
    process, Diagnostics, FormatOptions, OperatorStyle, ParenStyle, TraceStepKind,
};
use std::process::exit;

#[derive(Debug, Clone, ValueEnum)]
enum OpsArg {
    /// Render operators as `!`, `&`, `|`, `^`
    Symbolic,
    /// Render operators as `NOT`, `AND`, `OR`, `XOR`
    Word,
}

#[derive(Debug, Clone, ValueEnum)]
enum ParensArg {
    /// Parenthesize only where precedence requires it
    Minimal,
    /// Parenthesize every binary node
    Full,
}

impl From<OpsArg> for OperatorStyle {
    fn from(val: OpsArg) -> Self {
        match val {
            OpsArg::Symbolic => OperatorStyle::Symbolic,
            OpsArg::Word => OperatorStyle::Word,
        }
    }
}

impl From<ParensArg> for ParenStyle {
    fn from(val: ParensArg) -> Self {
        match val {
            ParensArg::Minimal => ParenStyle::Minimal,
            ParensArg::Full => ParenStyle::Full,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "qmc")]
#[command(about = "Exact boolean minimizer (Quine-McCluskey + Petrick)", long_about = None)]
#[command(version)]
struct Args {
    /// The formula to minimize, e.g. "a & (a | b)"
    #[arg(value_name = "EXPRESSION")]
    expression: String,

    /// Print the truth table of the input formula
    #[arg(short, long)]
    table: bool,

    /// Print the prime-implicant trace
    #[arg(long)]
    trace: bool,

    /// Dump the whole result (simplification, table, diagnostics) as JSON
    #[arg(long)]
    json: bool,

    /// Operator rendering style
    #[arg(long, value_enum, default_value = "symbolic")]
    ops: OpsArg,

    /// Parenthesization style
    #[arg(long, value_enum, default_value = "minimal")]
    parens: ParensArg,
}

fn main() {
    let args = Args::parse();

    let options = FormatOptions {
        operators: args.ops.clone().into(),
        parentheses: args.parens.clone().into(),
    };

    let output = match process(&args.expression, &options) {
        Ok(output) => output,
        Err(err) => {
            eprintln!("error: {}", err);
            exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("error: failed to serialize output: {}", err);
                exit(1);
            }
        }
        return;
    }

    println!("{}", output.simplified);

    if args.table {
        println!();
        print!("{}", output.table);
    }

    if args.trace {
        println!();
        print_trace(&output.diagnostics);
    }
}

fn print_trace(diagnostics: &Diagnostics) {
    for (i, step) in diagnostics.trace.iter().enumerate() {
        match step.kind {
            TraceStepKind::Grouping => println!("step {}: initial grouping", i),
            TraceStepKind::MergePass => println!("step {}: merge pass", i),
        }
        for (key, bucket) in &step.groups_after {
            let rendered: Vec<String> = bucket.iter().map(|imp| imp.to_string()).collect();
            println!("  group {}: {}", key, rendered.join(" "));
        }
        for record in &step.merges {
            if record.merged.is_empty() {
                continue;
            }
            let rendered: Vec<String> = record.merged.iter().map(|imp| imp.to_string()).collect();
            println!(
                "  groups {}+{} merged: {}",
                record.group,
                record.next_group,
                rendered.join(" ")
            );
        }
        if !step.unmerged_carried.is_empty() {
            let rendered: Vec<String> = step
                .unmerged_carried
                .iter()
                .map(|imp| imp.to_string())
                .collect();
            println!("  carried as prime: {}", rendered.join(" "));
        }
    }

    let primes: Vec<String> = diagnostics
        .prime_implicants
        .iter()
        .map(|imp| imp.to_string())
        .collect();
    println!("prime implicants: {}", primes.join(" "));

    let selected: Vec<String> = diagnostics
        .selected_cover
        .iter()
        .map(|imp| imp.to_string())
        .collect();
    println!("minimal covers found: {}", diagnostics.covers.len());
    println!("selected cover: {}", selected.join(" "));
}
