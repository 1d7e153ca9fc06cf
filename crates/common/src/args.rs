//! Command line argument parsing for the answer-set tools.

use clap::Parser;
use std::collections::HashSet;

/// Command line arguments for the answer-set tools
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path of the solver output file
    #[arg(value_name = "OUTPUT_FILE")]
    pub input: String,

    /// Keep only facts with these signatures, e.g. `-f edge/2 -f happens/2`.
    /// When omitted, every signature passes.
    #[arg(short = 'f', long = "filter", value_name = "SIGNATURE")]
    pub filters: Vec<String>,

    /// Match position for --arg-value (zero-based)
    #[arg(long, value_name = "INDEX", default_value_t = 0)]
    pub arg_index: usize,

    /// Keep only facts whose argument at --arg-index equals this value.
    /// The empty string means no constraint.
    #[arg(long, value_name = "VALUE", default_value = "")]
    pub arg_value: String,

    /// Group facts by predicate name
    #[arg(long)]
    pub group_by_name: bool,

    /// Split name groups further by arity (ignored without --group-by-name)
    #[arg(long)]
    pub group_by_arity: bool,

    /// Sort facts inside each group: an argument index, `last`, or the
    /// empty string to keep input order
    #[arg(short = 's', long = "sort-by", value_name = "KEY", default_value = "")]
    pub sort_by: String,
}

impl Args {
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Selected signatures, or `None` when every signature passes.
    pub fn signature_filter(&self) -> Option<HashSet<String>> {
        if self.filters.is_empty() {
            None
        } else {
            Some(self.filters.iter().cloned().collect())
        }
    }

    pub fn arg_index(&self) -> usize {
        self.arg_index
    }

    pub fn arg_value(&self) -> &str {
        &self.arg_value
    }

    pub fn group_by_name(&self) -> bool {
        self.group_by_name
    }

    pub fn group_by_arity(&self) -> bool {
        self.group_by_arity
    }

    pub fn sort_by(&self) -> &str {
        &self.sort_by
    }
}
