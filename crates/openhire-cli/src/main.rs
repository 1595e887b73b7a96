// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod runtime;

use anyhow::{Context, Result};
use config::{Config, SinkMode};
use openhire_app::AppState;
use openhire_store::Store;
use openhire_submit::{Client, SimulatedSink, Sink};
use openhire_tui::UiOptions;
use runtime::StoreRuntime;
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `openhire --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let db_path = if options.demo {
        PathBuf::from(":memory:")
    } else {
        config.db_path()?
    };
    if options.print_db_path {
        println!("{}", db_path.display());
        return Ok(());
    }

    let store = Store::open(&db_path).with_context(|| {
        format!(
            "open database {} -- if this path is wrong, set [storage].db_path or OPENHIRE_DB_PATH",
            db_path.display()
        )
    })?;
    store.bootstrap()?;
    if options.demo {
        store.seed_demo_data()?;
    }

    let sink = match config.sink_mode()? {
        SinkMode::Simulated => Sink::Simulated(
            SimulatedSink::new(config.submit_delay()?)
                .with_context(|| format!("invalid [submit] config in {}", options.config_path.display()))?,
        ),
        SinkMode::Http => {
            let base_url = config
                .submit_base_url()
                .context("submit.mode is \"http\" but submit.base_url is unset")?;
            Sink::Http(
                Client::new(base_url, config.submit_timeout()?).with_context(|| {
                    format!(
                        "invalid [submit] config in {}; fix base_url/timeout values",
                        options.config_path.display()
                    )
                })?,
            )
        }
    };

    let ui_options = UiOptions {
        banner_slugs: config.banners(),
        show_banners: config.show_banners() && store.get_show_banners()?,
        banner_interval: config.banner_interval()?,
        featured_interval: config.featured_interval()?,
    };

    if options.check_only {
        return Ok(());
    }

    let mut state = AppState::default();
    state.role = store.get_user_role()?;

    let mut runtime = StoreRuntime::new(&store, sink);
    openhire_tui::run_app(&mut state, &mut runtime, ui_options)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    print_config_path: bool,
    print_db_path: bool,
    demo: bool,
    print_example: bool,
    check_only: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        print_config_path: false,
        print_db_path: false,
        demo: false,
        print_example: false,
        check_only: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-path" => {
                options.print_db_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--demo" => {
                options.demo = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow::anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("openhire");
    println!("  --config <path>          Use a specific config path");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-path             Print resolved database path");
    println!("  --print-example-config   Print a config template");
    println!("  --demo                   Launch with the sample board (in-memory)");
    println!("  --check                  Validate config + DB + startup dependencies");
    println!("  --help                   Show this help");
}
