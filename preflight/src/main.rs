//! `preflight` binary: run the environment checks, print one line per
//! check, exit nonzero when anything fails.

use std::path::PathBuf;
use std::time::Duration;

use colored::Colorize;

use approx_preflight::{
    check_registry_dns, check_toolchain, find_manifest, CheckOutcome, DEFAULT_REGISTRY_HOST,
    DEFAULT_TIMEOUT_SECS,
};

fn format_usage() -> &'static str {
    "preflight - environment checks for the Approx workspace\n\n\
Validates the local environment before dependency installation:\n  \
  1. installed rustc satisfies the workspace rust-version pin\n  \
  2. the crate registry download host resolves via system DNS\n\n\
Usage: preflight [options]\n\n\
Options:\n  \
  --registry-host <host>  Registry host to resolve (default: static.crates.io)\n  \
  --manifest <path>       Manifest carrying the rust-version pin\n                          \
(default: nearest Cargo.toml above the current directory)\n  \
  --timeout <secs>        Per-check timeout in seconds (default: 5)\n  \
  -h, --help              Show this help\n  \
  -V, --version           Show version\n\n\
Exit codes: 0 all checks passed, 1 a check failed, 2 usage error."
}

struct Options {
    registry_host: String,
    manifest: Option<PathBuf>,
    timeout: Duration,
    show_help: bool,
    show_version: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            registry_host: DEFAULT_REGISTRY_HOST.to_string(),
            manifest: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            show_help: false,
            show_version: false,
        }
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--registry-host" => {
                options.registry_host = args
                    .next()
                    .ok_or_else(|| "--registry-host expects a hostname".to_string())?;
            }
            "--manifest" => {
                let path = args
                    .next()
                    .ok_or_else(|| "--manifest expects a path".to_string())?;
                options.manifest = Some(PathBuf::from(path));
            }
            "--timeout" => {
                let raw = args
                    .next()
                    .ok_or_else(|| "--timeout expects seconds".to_string())?;
                let secs: u64 = raw
                    .parse()
                    .map_err(|_| format!("--timeout expects a whole number of seconds, got `{raw}`"))?;
                options.timeout = Duration::from_secs(secs);
            }
            "--help" | "-h" => options.show_help = true,
            "--version" | "-V" => options.show_version = true,
            other => return Err(format!("unknown option: {other} (see --help)")),
        }
    }

    Ok(options)
}

fn report(outcome: &CheckOutcome) {
    let tag = if outcome.ok {
        "[OK]".green().bold()
    } else {
        "[FAIL]".red().bold()
    };
    println!("{tag} {}", outcome.detail);
}

fn main() {
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    if options.show_help {
        println!("{}", format_usage());
        return;
    }
    if options.show_version {
        println!("preflight {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let manifest = match options.manifest {
        Some(path) => path,
        None => match find_manifest() {
            Ok(path) => path,
            Err(err) => {
                eprintln!("{err:#}");
                std::process::exit(2);
            }
        },
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("failed to start async runtime: {err}");
            std::process::exit(2);
        }
    };

    let results = [
        check_toolchain(&manifest),
        runtime.block_on(check_registry_dns(&options.registry_host, options.timeout)),
    ];

    let mut failed = false;
    for outcome in &results {
        report(outcome);
        failed |= !outcome.ok;
    }

    if failed {
        eprintln!();
        eprintln!("Preflight checks failed. Fix the toolchain/network before building.");
        std::process::exit(1);
    }
}
