//! CLI result presenter.

use std::time::Duration;

use combcalc_orchestration::interfaces::{EvaluationResult, Output, Request, ResultPresenter};

use crate::output::{format_duration, format_number, format_result, format_row, notation};
use crate::ui::{print_error, styled_symbol};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(
        &self,
        evaluator: &str,
        request: &Request,
        output: &Output,
        duration: Duration,
        details: bool,
    ) {
        if self.quiet {
            match output {
                Output::Value(value) => println!("{value}"),
                Output::Row(row) => {
                    for value in row {
                        println!("{value}");
                    }
                }
            }
            return;
        }

        println!("Evaluator: {evaluator}");
        println!("Duration: {}", format_duration(duration));

        match output {
            Output::Value(value) => {
                if details {
                    println!("Result bits: {}", value.bits());
                    println!(
                        "Result digits: {}",
                        format_number(value.magnitude().to_string().len())
                    );
                }
                println!(
                    "{} = {}",
                    styled_symbol(&notation(request)),
                    format_result(value, self.verbose)
                );
            }
            Output::Row(row) => {
                if details {
                    let largest = row.iter().map(|v| v.bits()).max().unwrap_or(0);
                    println!("Entries: {}", format_number(row.len()));
                    println!("Largest entry bits: {largest}");
                }
                println!("{}:", styled_symbol(&notation(request)));
                println!("{}", format_row(row, self.verbose));
            }
        }
    }

    fn present_comparison(&self, results: &[EvaluationResult]) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for result in results {
            let status = if result.outcome.is_err() {
                "ERROR"
            } else {
                "OK"
            };
            println!(
                "  {:<20} {:>10} [{}]",
                result.evaluator,
                format_duration(result.duration),
                status,
            );
        }
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
