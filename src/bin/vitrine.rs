use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use vitrine::{
    ConfigField, ConfigStore, EXPORT_FILE_NAME, EditorSession, FsBlobIo, ImportOutcome,
    LayoutVariant, TextBlobIo, Viewport,
};

#[derive(Parser, Debug)]
#[command(name = "vitrine", version)]
struct Cli {
    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the startup configuration export.
    Defaults(DefaultsArgs),
    /// Apply overrides to a configuration file and export the result.
    Set(SetArgs),
    /// Project a configuration into its render tree (JSON).
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct DefaultsArgs {
    /// Output path; `ui-config.json` in the working directory when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SetArgs {
    /// Configuration JSON, shallow-merged onto the defaults.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Leaf override, e.g. `--set button.shadow=large`. Repeatable, applied in order.
    #[arg(long = "set", value_name = "PATH=VALUE", value_parser = parse_override)]
    overrides: Vec<Override>,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Configuration JSON; the defaults when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Leaf override applied before projecting. Repeatable.
    #[arg(long = "set", value_name = "PATH=VALUE", value_parser = parse_override)]
    overrides: Vec<Override>,

    /// Shortcut for `--set layout=<layout>`.
    #[arg(long, value_parser = LayoutVariant::TOKENS.to_vec())]
    layout: Option<String>,

    /// Shortcut for `--set viewport=<viewport>`.
    #[arg(long, value_parser = Viewport::TOKENS.to_vec())]
    viewport: Option<String>,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Debug)]
struct Override {
    field: ConfigField,
    value: Value,
}

/// `path=value`; the value is read as JSON when it parses, as a bare string otherwise.
fn parse_override(s: &str) -> Result<Override, String> {
    let (path, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("expected PATH=VALUE, got '{s}'"))?;
    let field = ConfigField::parse(path.trim()).map_err(|e| e.to_string())?;
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()));
    Ok(Override { field, value })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Defaults(args) => cmd_defaults(args),
        Command::Set(args) => cmd_set(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Split `path` into a blob root and a blob name for [`FsBlobIo`].
fn blob_for(path: &Path) -> anyhow::Result<(FsBlobIo, String)> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("'{}' does not name a file", path.display()))?
        .to_owned();
    let root = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok((FsBlobIo::new(root), name))
}

fn emit(out: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            let (mut io, name) = blob_for(path)?;
            io.write_text(&name, text)?;
            Ok(())
        }
        None => {
            println!("{text}");
            Ok(())
        }
    }
}

fn load_store(path: &Path) -> anyhow::Result<ConfigStore> {
    let (io, name) = blob_for(path)?;
    let mut store = ConfigStore::new();
    store
        .import_from(&io, &name)
        .with_context(|| format!("import configuration '{}'", path.display()))?;
    Ok(store)
}

fn cmd_defaults(args: DefaultsArgs) -> anyhow::Result<()> {
    let text = ConfigStore::new().export_snapshot()?;
    let out = args.out.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
    emit(Some(out.as_path()), &text)?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_set(args: SetArgs) -> anyhow::Result<()> {
    let mut store = load_store(&args.in_path)?;
    let updates = args.overrides.into_iter().map(|o| (o.field, o.value));
    store.apply_batch(updates).context("apply overrides")?;
    let text = store.export_snapshot()?;
    emit(args.out.as_deref(), &text)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut session = EditorSession::new()?;
    if let Some(path) = &args.in_path {
        let (io, name) = blob_for(path)?;
        if let ImportOutcome::Rejected(notice) = session.import_from(&io, &name)? {
            anyhow::bail!("{}: {}", path.display(), notice.message);
        }
    }

    let mut updates: Vec<(ConfigField, Value)> = args
        .overrides
        .into_iter()
        .map(|o| (o.field, o.value))
        .collect();
    if let Some(layout) = args.layout {
        updates.push((ConfigField::Layout, Value::String(layout)));
    }
    if let Some(viewport) = args.viewport {
        updates.push((ConfigField::Viewport, Value::String(viewport)));
    }
    if !updates.is_empty() {
        session.apply_batch(updates).context("apply overrides")?;
    }

    let text = session.tree().to_json()?;
    emit(args.out.as_deref(), &text)
}
