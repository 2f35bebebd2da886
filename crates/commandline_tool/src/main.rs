use anyhow::Result;
use commandline_tool::report::{analysis_summary, generation_summary};
use commandline_tool::{Commands, parse_args, run_analyze, run_generate};
use std::fs;
use std::path::Path;
use tracing::debug;
use tracing_appender::rolling;
use tracing_log::LogTracer;
use tracing_subscriber::filter::LevelFilter as SubLevel;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

fn init_logging(debug: bool) {
    // Route `log` records from the library crates through tracing
    let _ = LogTracer::init();

    let log_dir = Path::new("log");
    if let Err(e) = fs::create_dir_all(log_dir) {
        eprintln!("failed to create log directory: {}", e);
    }

    let stdout_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    // Each run overwrites latest.log
    let file_appender = rolling::never(log_dir, "latest.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    // Keep the worker alive until exit so buffered lines are flushed
    let _guard: &'static _ = Box::leak(Box::new(guard));

    let file_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(non_blocking);

    let stdout_filter = if debug {
        SubLevel::DEBUG
    } else {
        SubLevel::WARN
    };
    let file_filter = if debug {
        SubLevel::DEBUG
    } else {
        SubLevel::INFO
    };

    let subscriber = tracing_subscriber::registry()
        .with(stdout_layer.with_filter(stdout_filter))
        .with(file_layer.with_filter(file_filter));
    let _ = subscriber.try_init();
}

fn main() -> Result<()> {
    let cli = parse_args();
    init_logging(cli.debug);
    let config = cli.config.as_deref();

    match &cli.command {
        Commands::Analyze {
            backend_dir,
            output,
        } => {
            debug!("analyze command selected");
            println!("🔍 Analyzing backend structure at {}", backend_dir.display());
            let model = run_analyze(backend_dir, output, config)?;
            print!("{}", analysis_summary(&model));
            println!("💾 Analysis saved to: {}", output.display());
            Ok(())
        }

        Commands::Generate {
            module,
            analysis,
            output_dir,
        } => {
            debug!("generate command selected");
            println!("🚀 Generating Go project from {}", analysis.display());
            let report = run_generate(
                module.as_deref(),
                analysis,
                output_dir.as_deref(),
                config,
            )?;
            print!("{}", generation_summary(&report));
            Ok(())
        }
    }
}
