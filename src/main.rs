use hdl0::*;

use anyhow::Context;
use clap::Parser;
use log::*;

use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The `.hw` file to simulate.
    filename: PathBuf,

    /// Directory the rendered HTML is written to.
    #[arg(long, default_value = "html_output")]
    html_dir: PathBuf,

    /// Don't render the program as HTML.
    #[arg(long, default_value_t = false)]
    no_html: bool,

    /// Print the simulation traces as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,

    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    println!();
    println!("== == == == == == == == == == == == == == ==");
    println!("||--------|| Hardware Simulator ||--------||");
    println!();
    println!("\t * Processing file: '{}'", args.filename.display());
    println!();

    let program = load_program_from_file(&args.filename)?;

    let html_filename = if args.no_html {
        None
    } else {
        Some(write_html(&program, &args.filename, &args.html_dir)?)
    };

    let mut circuit = Circuit::new(program)?;
    circuit.run_simulator()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report::json_report(&circuit))?);
    } else {
        eprintln!("|| Simulation input ||");
        print!("{}", report::trace_lines(circuit.sim_inputs()));
        println!();
        eprintln!("|| Simulation output ||");
        print!("{}", report::trace_lines(circuit.sim_outputs()));
    }

    if let Some(html_filename) = html_filename {
        println!();
        println!("\t * Saved Generated HTML at: \"{}\"", html_filename.display());
    }

    println!();
    println!("\t * Hardware simulator finished");
    println!("== == == == == == == == == == == == == == ==");
    println!();
    Ok(())
}

fn write_html(program: &Program, filename: &Path, html_dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(html_dir)
        .with_context(|| format!("Couldn't create {}", html_dir.display()))?;

    let stem = filename.file_stem().unwrap_or(filename.as_os_str());
    let html_filename = html_dir.join(stem).with_extension("html");
    std::fs::write(&html_filename, html::render_html(program))
        .with_context(|| format!("Error writing HTML file: {}", html_filename.display()))?;

    info!("Wrote {}", html_filename.display());
    Ok(html_filename)
}

fn init_logging(debug: bool) {
    use chrono::{DateTime, Utc};

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            let now: DateTime<Utc> = Utc::now();
            out.finish(format_args!(
                "[{} {} {}] {}",
                now.format("%Y-%m-%dT%H:%M:%S%.fZ"),
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr());

    let level = std::env::var("LEVEL").unwrap_or_default();

    if level == "TRACE" {
        dispatch = dispatch.level(LevelFilter::Trace);
    } else if debug || level == "DEBUG" {
        dispatch = dispatch.level(LevelFilter::Debug);
    } else if level == "INFO" {
        dispatch = dispatch.level(LevelFilter::Info);
    } else {
        dispatch = dispatch.level(LevelFilter::Warn);
    }

    if let Err(e) = dispatch.apply() {
        eprintln!("Couldn't initialize logging: {e}");
    }
}
