use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the ride fare workspace",
    long_about = "A unified CLI for running the fare report, tests, benchmarks,\n\
                  and CI checks in the ride fare workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the fare report for the demo rides
    Run {
        /// Enable diagnostic logging on stderr at this level (sets RUST_LOG)
        #[arg(long)]
        log: Option<String>,
    },
    /// Run the fare_core test suite
    Test,
    /// Run Criterion benchmarks
    Bench,
    /// Run CI checks (fmt, clippy, tests, benchmarks)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Run the demo binary
    Demo,
    /// Run benchmarks
    Bench,
    /// Run check + demo + bench
    All,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str], envs: &[(&str, &str)]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .envs(envs.iter().copied())
        .status()
        .expect("failed to execute cargo")
}

fn run_cargo(args: &[&str]) {
    run_cargo_with_env(args, &[]);
}

fn run_cargo_with_env(args: &[&str], envs: &[(&str, &str)]) {
    let status = cargo(args, envs);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test fare_core");
    run_cargo(&["test", "-p", "fare_core"]);
}

fn ci_demo() {
    step("Run fare_demo");
    run_cargo(&["run", "-p", "fare_core", "--bin", "fare_demo"]);
}

fn ci_bench() {
    step("Run benchmarks");
    run_cargo(&["bench", "--package", "fare_core", "--bench", "performance"]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { log } => {
            let args = ["run", "-p", "fare_core", "--bin", "fare_demo"];
            match log.as_deref() {
                Some(level) => run_cargo_with_env(&args, &[("RUST_LOG", level)]),
                None => run_cargo(&args),
            }
        }
        Commands::Test => {
            run_cargo(&["test", "-p", "fare_core"]);
        }
        Commands::Bench => {
            run_cargo(&["bench", "--package", "fare_core", "--bench", "performance"]);
        }
        Commands::Ci { job } => match job {
            CiJob::Check => ci_check(),
            CiJob::Demo => ci_demo(),
            CiJob::Bench => ci_bench(),
            CiJob::All => {
                ci_check();
                ci_demo();
                ci_bench();
            }
        },
    }
}
