//! Environment preflight checks.
//!
//! Two static checks run before any build work: the installed `rustc`
//! must satisfy the workspace's pinned `rust-version` (a minimum, per
//! MSRV convention), and the crate registry download host must resolve
//! via the system resolver. Each check reports an outcome line; nothing
//! here panics on a failing environment.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};

/// Registry download host checked by default.
pub const DEFAULT_REGISTRY_HOST: &str = "static.crates.io";

/// Per-check timeout default, seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Minimal release triple. Missing minor/patch parts count as zero, so
/// `"1.85"` and `"1.85.0"` compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub fn parse(raw: &str) -> Result<Self> {
        let mut parts = raw.trim().splitn(3, '.');
        let mut component = |name: &str| -> Result<u64> {
            match parts.next() {
                None => Ok(0),
                Some(part) => part
                    .parse()
                    .with_context(|| format!("bad {name} component in version `{raw}`")),
            }
        };
        Ok(Self {
            major: component("major")?,
            minor: component("minor")?,
            patch: component("patch")?,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Result of one preflight check: pass/fail plus a human detail line.
#[derive(Clone, Debug)]
pub struct CheckOutcome {
    pub ok: bool,
    pub detail: String,
}

impl CheckOutcome {
    fn from_result(result: Result<String>) -> Self {
        match result {
            Ok(detail) => Self { ok: true, detail },
            Err(err) => Self {
                ok: false,
                detail: format!("{err:#}"),
            },
        }
    }
}

/// Pull the release triple out of `rustc --version` output. Channel
/// suffixes (`1.87.0-nightly`) are stripped; the triple is enough for a
/// minimum-version comparison.
pub fn parse_rustc_output(raw: &str) -> Result<Version> {
    let token = raw
        .split_whitespace()
        .nth(1)
        .with_context(|| format!("unexpected `rustc --version` output: {raw:?}"))?;
    let release = token.split('-').next().unwrap_or(token);
    Version::parse(release)
}

/// Read the `rust-version` pin from a workspace or package manifest.
pub fn read_pinned_version(manifest: &Path) -> Result<Version> {
    let text = std::fs::read_to_string(manifest)
        .with_context(|| format!("reading {}", manifest.display()))?;
    let doc: toml::Table = text
        .parse()
        .with_context(|| format!("parsing {}", manifest.display()))?;
    let pin = doc
        .get("workspace")
        .and_then(|workspace| workspace.get("package"))
        .and_then(|package| package.get("rust-version"))
        .or_else(|| {
            doc.get("package")
                .and_then(|package| package.get("rust-version"))
        })
        .and_then(|value| value.as_str())
        .ok_or_else(|| anyhow!("no rust-version pin in {}", manifest.display()))?;
    Version::parse(pin)
}

/// Walk up from the current directory to the nearest `Cargo.toml`.
pub fn find_manifest() -> Result<PathBuf> {
    let mut dir = std::env::current_dir().context("resolving current directory")?;
    loop {
        let candidate = dir.join("Cargo.toml");
        if candidate.is_file() {
            return Ok(candidate);
        }
        if !dir.pop() {
            bail!("no Cargo.toml between the current directory and the filesystem root");
        }
    }
}

/// Toolchain check: installed `rustc` satisfies the manifest pin.
pub fn check_toolchain(manifest: &Path) -> CheckOutcome {
    CheckOutcome::from_result(toolchain_status(manifest))
}

fn toolchain_status(manifest: &Path) -> Result<String> {
    let pinned = read_pinned_version(manifest)?;
    let output = Command::new("rustc")
        .arg("--version")
        .output()
        .context("running `rustc --version`")?;
    if !output.status.success() {
        bail!("`rustc --version` exited with {}", output.status);
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let installed = parse_rustc_output(&stdout)?;
    if installed < pinned {
        bail!("rustc {installed} detected; workspace pins rust-version {pinned}");
    }
    Ok(format!(
        "rustc {installed} satisfies pinned rust-version {pinned}"
    ))
}

/// Registry check: the download host resolves via the system resolver.
pub async fn check_registry_dns(host: &str, timeout: Duration) -> CheckOutcome {
    CheckOutcome::from_result(dns_status(host, timeout).await)
}

async fn dns_status(host: &str, timeout: Duration) -> Result<String> {
    let lookup = tokio::net::lookup_host((host, 443));
    let mut addrs = tokio::time::timeout(timeout, lookup)
        .await
        .map_err(|_| anyhow!("{host} lookup timed out after {}s", timeout.as_secs()))?
        .with_context(|| format!("{host} lookup failed"))?;
    let addr = addrs
        .next()
        .ok_or_else(|| anyhow!("{host} resolved to no addresses"))?;
    Ok(format!("{host} -> {}", addr.ip()))
}
