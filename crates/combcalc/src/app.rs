//! Application entry point and dispatch.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use combcalc_cli::output::{format_number, write_to_file, JsonReport};
use combcalc_cli::presenter::CLIResultPresenter;
use combcalc_cli::ui::{print_header, print_warning};
use combcalc_core::registry::DefaultFactory;
use combcalc_core::{Arity, FunctionFamily, TableCache};
use combcalc_orchestration::evaluator_selection::get_evaluators_to_run;
use combcalc_orchestration::interfaces::{EvaluationResult, Request, ResultPresenter};
use combcalc_orchestration::orchestrator::{analyze_comparison_results, execute_evaluations};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        combcalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    if config.list {
        list_families(config.quiet);
        return Ok(());
    }

    run_cli(config)
}

fn list_families(quiet: bool) {
    if !quiet {
        print_header("Function families");
    }
    for family in FunctionFamily::ALL {
        if quiet {
            println!("{family}");
            continue;
        }
        let arguments = match family.arity() {
            Arity::Single => "-n N",
            Arity::Pair if family.requires_k_le_n() => "-n N -k K   (K <= N)",
            Arity::Pair => "-n M -k N",
            Arity::Parts => "-n N --parts K1,K2,...   (sum = N)",
        };
        println!("  {:<12} {:<4} {arguments}", family.name(), family.symbol());
    }
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let request = config.request()?;
    let opts = config.options();

    let factory = DefaultFactory::new();
    let evaluators = get_evaluators_to_run(&config.evaluator, &factory)?;
    let cache = Arc::new(TableCache::new());

    info!(%request, evaluators = evaluators.len(), "starting evaluation");
    let results = execute_evaluations(&evaluators, &request, &opts, &cache);
    let analysis = analyze_comparison_results(&results);

    if config.json {
        let report = JsonReport::new(&request, &results, analysis.is_ok());
        println!("{}", report.to_json()?);
    } else {
        let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
        present_results(&presenter, &request, &results, config.details, config.quiet);
    }

    // Write to file if requested
    if let Some(ref path) = config.output {
        match results.iter().find_map(|r| r.outcome.as_ref().ok()) {
            Some(output) => write_to_file(path, output)?,
            None => print_warning(&format!("no result to write to {path}")),
        }
    }

    if config.details && !config.quiet && !config.json {
        let stats = cache.stats();
        println!(
            "Cache: {} rows, {} terms ({} hits, {} misses)",
            format_number(stats.rows),
            format_number(stats.terms),
            format_number(stats.hits),
            format_number(stats.misses)
        );
    }

    analysis?;
    Ok(())
}

/// Present each evaluator's outcome, then the comparison table when more
/// than one evaluator ran.
///
/// A lone evaluator's error is left to the caller, which reports it once
/// through the returned error.
fn present_results(
    presenter: &dyn ResultPresenter,
    request: &Request,
    results: &[EvaluationResult],
    details: bool,
    quiet: bool,
) {
    for result in results {
        match &result.outcome {
            Ok(output) => {
                presenter.present_result(
                    &result.evaluator,
                    request,
                    output,
                    result.duration,
                    details,
                );
                // One value is enough in quiet mode.
                if quiet {
                    break;
                }
            }
            Err(e) if results.len() > 1 => {
                presenter.present_error(&format!("{}: {e}", result.evaluator));
            }
            Err(_) => {}
        }
    }
    if results.len() > 1 {
        presenter.present_comparison(results);
    }
}
