use std::collections::HashSet;
use std::fs;
use std::process;
use std::str::FromStr;

use clap::Parser;
use common::Args;
use parser::filter;
use parser::{AnswerSet, Fact, GroupMode, GroupedReport, SortKey};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize simple tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .init();

    // Parse command line arguments
    let args = Args::parse();

    let sort_key = match SortKey::from_str(args.sort_by()) {
        Ok(key) => key,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    let raw = match fs::read_to_string(args.input()) {
        Ok(raw) => raw,
        Err(e) => {
            error!("Failed to read {}: {e}", args.input());
            process::exit(1);
        }
    };

    let set = match AnswerSet::parse(&raw) {
        Ok(set) => set,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    match set.answer_number() {
        Some(n) => info!("Answer {}: {} facts", n, set.facts().len()),
        None => info!("{} facts", set.facts().len()),
    }
    info!("Signatures: {}", set.signatures().join(", "));
    info!("Max arity: {}", set.max_arity());

    let allowed: HashSet<String> = match args.signature_filter() {
        Some(selected) => selected,
        None => set.signatures().into_iter().collect(),
    };

    let facts: Vec<&Fact> = set.facts().iter().collect();
    let filtered = filter::filter_by_signature(&facts, &allowed);
    let filtered = filter::filter_by_argument(filtered, args.arg_index(), args.arg_value());
    let mode = GroupMode::from_flags(args.group_by_name(), args.group_by_arity());
    let mut grouped = filter::group(filtered, mode);
    filter::sort_groups(&mut grouped, sort_key);

    println!("{}", GroupedReport::new(&grouped));
}
