use super::args::*;
use sqlgen_core::api::{HttpApi, SqlGenApi};
use sqlgen_core::engine::runner::SuiteRunner;
use sqlgen_core::report::{console, json};
use std::sync::Arc;
use std::time::Duration;

pub mod exit_codes {
    pub const OK: i32 = 0;
    pub const API_UNREACHABLE: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
}

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Run(args) => cmd_run(args).await,
        Command::Init(args) => cmd_init(args),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(exit_codes::OK)
        }
    }
}

async fn cmd_run(args: RunArgs) -> anyhow::Result<i32> {
    let mut suite = match &args.suite {
        Some(path) => match sqlgen_core::config::load_suite(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("config error: {}", e);
                return Ok(exit_codes::CONFIG_ERROR);
            }
        },
        None => sqlgen_core::config::parse_suite(crate::templates::DEFAULT_SUITE)
            .map_err(|e| anyhow::anyhow!("built-in suite: {}", e))?,
    };

    if let Some(path) = &args.schema {
        match std::fs::read_to_string(path) {
            Ok(schema) => suite.schema = schema,
            Err(e) => {
                eprintln!("config error: failed to read schema {}: {}", path.display(), e);
                return Ok(exit_codes::CONFIG_ERROR);
            }
        }
    }

    let api = HttpApi::new(
        args.api_url.as_str(),
        Duration::from_secs(args.timeout_seconds),
    );

    // Fail-fast precondition: no test runs against a dead service.
    match api.probe().await {
        Err(e) => {
            eprintln!("error: cannot reach the API at {}: {}", args.api_url, e);
            eprintln!("start the service with: sqlgen-server");
            return Ok(exit_codes::API_UNREACHABLE);
        }
        Ok(status) if !(200..300).contains(&status) => {
            println!(
                "warning: API responded with HTTP {} to the health probe",
                status
            );
        }
        Ok(_) => println!("API is up at {}", args.api_url),
    }

    console::print_run_header(&args.api_url, &suite);

    let runner = SuiteRunner::new(Arc::new(api));
    let total = suite.cases.len();
    let mut outcomes = Vec::with_capacity(total);

    for (i, tc) in suite.cases.iter().enumerate() {
        console::print_case_start(i + 1, total, tc);
        let outcome = runner.run_case(&suite.schema, tc).await;
        console::print_case_result(&outcome);
        outcomes.push(outcome);
    }

    console::print_summary(&outcomes);

    json::write_report(&outcomes, &args.out)?;
    println!("\nResults written to {}", args.out.display());

    // Individual failures are reported, not signaled through the exit code.
    Ok(exit_codes::OK)
}

fn cmd_init(args: InitArgs) -> anyhow::Result<i32> {
    if args.suite.exists() {
        eprintln!("note: {} already exists (skipped)", args.suite.display());
        return Ok(exit_codes::OK);
    }
    if let Some(parent) = args.suite.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&args.suite, crate::templates::SAMPLE_SUITE)?;
    eprintln!("created {}", args.suite.display());
    Ok(exit_codes::OK)
}
