//! LS-8 - CLI
//!
//! Command-line interface to run LS-8 programs.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use ls8_core::{Machine, MachineConfig, ProgramLoader, StackGuard};

/// LS-8 register machine
#[derive(Parser, Debug)]
#[command(name = "ls8", version, about = "Run an LS-8 program")]
struct Args {
    /// Program file: one binary byte per line, `#` starts a comment
    program: PathBuf,

    /// Stop with an error after this many instructions
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Let the stack pointer wrap around instead of trapping
    #[arg(long)]
    wrap_stack: bool,

    /// Log a trace line before every instruction
    #[arg(short, long)]
    trace: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.trace {
        "trace"
    } else if args.verbose {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let image = ProgramLoader::load_file(&args.program)
        .with_context(|| format!("failed to load program {}", args.program.display()))?;

    let config = MachineConfig {
        stack_guard: if args.wrap_stack {
            StackGuard::Wrap
        } else {
            StackGuard::Trap
        },
        max_cycles: args.max_cycles,
    };

    let mut machine = Machine::new(config);
    machine.load(&image)?;

    let cycles = machine.run().context("machine fault")?;
    info!("{} instructions executed", cycles);
    Ok(())
}
