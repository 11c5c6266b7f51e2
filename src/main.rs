//! Estimator entry point — CLI wiring and config-driven report construction.

use std::path::Path;
use std::process;

use slot_estimator::config::SiteConfig;
use slot_estimator::io::export::export_csv;
use slot_estimator::report::EstimateReport;

/// Parsed CLI arguments.
struct CliArgs {
    config_path: Option<String>,
    preset: Option<String>,
    hours_override: Option<Vec<f32>>,
    report_out: Option<String>,
    json: bool,
}

fn print_help() {
    eprintln!("slot-estimator — appliance-slot electricity consumption estimator");
    eprintln!();
    eprintln!("Usage: slot-estimator [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>       Load site from TOML config file");
    eprintln!("  --preset <name>       Use a built-in preset (office, always_on)");
    eprintln!("  --hours <list>        Override usage hours, comma-separated per slot");
    eprintln!("  --report-out <path>   Export per-slot breakdown to CSV");
    eprintln!("  --json                Print the estimate as JSON instead of text");
    eprintln!("  --help                Show this help message");
    eprintln!();
    eprintln!("If no --config or --preset is given, the office preset is used.");
}

fn parse_hours_list(raw: &str) -> Result<Vec<f32>, String> {
    raw.split(',')
        .map(|part| {
            part.trim()
                .parse::<f32>()
                .map_err(|_| format!("--hours entry \"{}\" is not a number", part.trim()))
        })
        .collect()
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config_path: None,
        preset: None,
        hours_override: None,
        report_out: None,
        json: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --config requires a path argument");
                    process::exit(1);
                }
                cli.config_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--hours" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --hours requires a comma-separated list");
                    process::exit(1);
                }
                match parse_hours_list(&args[i]) {
                    Ok(hours) => cli.hours_override = Some(hours),
                    Err(e) => {
                        eprintln!("error: {e}");
                        process::exit(1);
                    }
                }
            }
            "--report-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --report-out requires a path argument");
                    process::exit(1);
                }
                cli.report_out = Some(args[i].clone());
            }
            "--json" => {
                cli.json = true;
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn main() {
    let cli = parse_args();

    // Load config: --config takes priority, then --preset, then office default
    let mut site = if let Some(ref path) = cli.config_path {
        match SiteConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match SiteConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        SiteConfig::office()
    };

    // Apply hours override
    if let Some(ref hours) = cli.hours_override {
        if hours.len() != site.slots.len() {
            eprintln!(
                "error: --hours expects {} values, got {}",
                site.slots.len(),
                hours.len()
            );
            process::exit(1);
        }
        for (slot, h) in site.slots.iter_mut().zip(hours) {
            slot.hours = *h;
        }
    }

    // Validate
    let errors = site.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    // Aggregate
    let report = match EstimateReport::from_inputs(&site.slot_configs(), &site.power_kw(), &site.hours())
    {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    // Print estimate, JSON when the caller wants the hand-off payload
    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize report: {e}");
                process::exit(1);
            }
        }
    } else {
        println!("{report}");
    }

    // Export CSV if requested
    if let Some(ref path) = cli.report_out {
        if let Err(e) = export_csv(&report, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Report written to {path}");
    }
}
