//! CLI command handlers

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::kube::{KubeSource, ValuesSource, create_client};
use crate::models::{DEFAULT_KEY, DEFAULT_NAMESPACE, ResourceKind, ValueUrl};
use crate::services::ValuesService;

/// Helm plugin that reads chart values from ConfigMaps and Secrets
#[derive(Parser, Debug)]
#[command(name = "helm-external-val")]
#[command(about = "Helm plugin that reads chart values from ConfigMaps and Secrets", long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(long, short = 'd', global = true)]
    pub debug: bool,

    /// Kubeconfig context to use
    #[arg(long, global = true)]
    pub context: Option<String>,

    /// Path to a configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Command table
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get value from a remote source and output it to stdout
    #[command(long_about = "Get value from a remote source and output it to stdout.

URL is formatted like below
<protocol>://[<namespace>/]<name>[/<key>]

where protocol is `cm` or `secret`, namespace defaults to `default` and key
defaults to `values.yaml`.

Helm invokes this command with the URL as the last argument.
See https://helm.sh/docs/topics/plugins/#downloader-plugins.")]
    Downloader(DownloaderArgs),

    /// Read values from a ConfigMap
    Cm(LookupArgs),

    /// Read values from a Secret
    Secret(LookupArgs),

    /// Show version information
    Version,
}

/// Arguments Helm passes to a downloader plugin
#[derive(Args, Debug)]
pub struct DownloaderArgs {
    /// Client certificate file (unused)
    #[arg(value_name = "certFile")]
    pub cert_file: String,

    /// Client key file (unused)
    #[arg(value_name = "keyFile")]
    pub key_file: String,

    /// CA bundle file (unused)
    #[arg(value_name = "caFile")]
    pub ca_file: String,

    /// Values URL, e.g. cm://namespace/name/values.yaml
    #[arg(value_name = "URL")]
    pub url: String,
}

/// Arguments for a direct ConfigMap or Secret lookup
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Resource name
    pub name: String,

    /// Namespace of the resource
    #[arg(long, short = 'n', default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Data key holding the values
    #[arg(long, short = 'k', default_value = DEFAULT_KEY)]
    pub key: String,

    /// Write the values to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Write a payload verbatim followed by a single newline
pub fn write_payload<W: Write>(out: &mut W, payload: &[u8]) -> std::io::Result<()> {
    out.write_all(payload)?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Resolve a parsed URL and write the payload, if any, to `out`
///
/// Nothing is written when the URL's protocol names no supported kind, or
/// when resolution fails.
pub async fn emit<S: ValuesSource, W: Write>(
    service: &ValuesService<S>,
    url: &ValueUrl,
    out: &mut W,
) -> Result<()> {
    if let Some(payload) = service.resolve(url).await? {
        write_payload(out, &payload).context("Failed to write values")?;
    }
    Ok(())
}

async fn connect(config: &Config) -> Result<ValuesService<KubeSource>> {
    let client = create_client(config.context.as_deref()).await?;
    Ok(ValuesService::new(KubeSource::new(client)))
}

/// Handle the downloader command
pub async fn handle_downloader(args: &DownloaderArgs, config: &Config) -> Result<()> {
    tracing::debug!(
        "Downloader invoked with certFile={} keyFile={} caFile={}",
        args.cert_file,
        args.key_file,
        args.ca_file
    );

    let url = ValueUrl::parse(&args.url)?;
    tracing::debug!("Resolving {}", url);

    // No client for protocols we would ignore anyway
    if url.kind().is_none() {
        tracing::warn!("Ignoring unsupported protocol {}", url.protocol);
        return Ok(());
    }

    let service = connect(config).await?;
    emit(&service, &url, &mut std::io::stdout().lock()).await
}

/// Handle the `cm` and `secret` lookup commands
pub async fn handle_lookup(kind: ResourceKind, args: &LookupArgs, config: &Config) -> Result<()> {
    let service = connect(config).await?;
    lookup(&service, kind, args).await
}

/// Fetch one resource key and write it to `--output` or stdout
///
/// The output file is only created once the fetch has succeeded.
pub async fn lookup<S: ValuesSource>(
    service: &ValuesService<S>,
    kind: ResourceKind,
    args: &LookupArgs,
) -> Result<()> {
    let payload = service
        .fetch(kind, &args.namespace, &args.name, &args.key)
        .await?;

    match &args.output {
        Some(path) => {
            let mut file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_payload(&mut file, &payload)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::debug!("Values written to {}", path.display());
        }
        None => write_payload(&mut std::io::stdout().lock(), &payload)
            .context("Failed to write values")?,
    }

    Ok(())
}
