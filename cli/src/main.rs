use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use folio::{
    ContentError, EnvironmentColorSignal, FileStore, GridSlotAssignment, PreferenceStore, ScopeFlag, SiteContent,
    StoreError, ThemePreference, ThemeResolver,
};

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error("preference store: {0}")]
    Store(#[from] StoreError),
    #[error("theme toggled to {0} but the store still reads {1:?}")]
    NotPersisted(&'static str, ThemePreference),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("health check failed: HTTP {0}")]
    Unhealthy(u16),
}

#[derive(Parser, Debug)]
#[command(name = "folio-cli", about = "Inspect folio site content and theme preferences")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the 3x3 affiliation grid for a content file.
    Grid(GridArgs),
    /// Inspect or change a file-backed theme preference.
    Theme(ThemeCommand),
    /// Check that a running server answers `/healthz`.
    Ping(PingArgs),
}

#[derive(Args, Debug)]
struct GridArgs {
    /// YAML or JSON content file; built-in content when omitted.
    #[arg(long, env = "FOLIO_CONTENT")]
    content: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ThemeCommand {
    #[command(subcommand)]
    command: ThemeSubcommand,
}

#[derive(Subcommand, Debug)]
enum ThemeSubcommand {
    /// Print the raw stored preference.
    Show(StoreArgs),
    /// Print the theme a page would start in.
    Resolve(StoreArgs),
    /// Flip the resolved theme and persist it.
    Toggle(StoreArgs),
}

#[derive(Args, Debug)]
struct StoreArgs {
    /// JSON file holding the `theme` key.
    #[arg(long, env = "FOLIO_THEME_STORE")]
    store: PathBuf,

    /// Act as if the environment prefers a dark color scheme.
    #[arg(long)]
    prefers_dark: bool,
}

#[derive(Args, Debug)]
struct PingArgs {
    #[arg(long, env = "FOLIO_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Grid(args) => run_grid(&args),
        Command::Theme(theme) => run_theme(theme.command),
        Command::Ping(args) => run_ping(&args).await,
    }
}

fn run_grid(args: &GridArgs) -> Result<(), CliError> {
    let content = match &args.content {
        Some(path) => folio::content::load(path)?,
        None => SiteContent::default(),
    };
    let grid = content.affiliation_grid();
    println!("{}", render_grid(&grid));
    let dropped = content.affiliations.len().saturating_sub(grid.occupied_count());
    if dropped > 0 {
        eprintln!("{dropped} affiliation(s) not shown (out of range or overwritten)");
    }
    Ok(())
}

fn run_theme(command: ThemeSubcommand) -> Result<(), CliError> {
    match command {
        ThemeSubcommand::Show(args) => {
            let preference = FileStore::new(&args.store).get_preference()?;
            println!("{}", describe_preference(preference));
        }
        ThemeSubcommand::Resolve(args) => {
            let resolver = resolver(&args);
            let mut surface = ScopeFlag::default();
            resolver.resolve_initial_theme(&mut surface);
            println!("{}", surface_label(surface));
        }
        ThemeSubcommand::Toggle(args) => {
            let mut resolver = resolver(&args);
            let mut surface = ScopeFlag::default();
            let current = resolver.resolve_initial_theme(&mut surface);
            resolver.toggle_theme(current, &mut surface);
            let label = surface_label(surface);

            // The resolver only logs write failures; surface them here.
            let stored = resolver.store().get_preference()?;
            if stored.theme() != surface.applied() {
                return Err(CliError::NotPersisted(label, stored));
            }
            println!("{label}");
        }
    }
    Ok(())
}

async fn run_ping(args: &PingArgs) -> Result<(), CliError> {
    let client = reqwest::Client::builder().timeout(Duration::from_secs(10)).build()?;
    let url = format!("{}/healthz", args.base_url.trim_end_matches('/'));
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Unhealthy(status.as_u16()));
    }
    println!("ok");
    Ok(())
}

fn resolver(args: &StoreArgs) -> ThemeResolver<FileStore> {
    ThemeResolver::new(FileStore::new(&args.store), EnvironmentColorSignal::new(args.prefers_dark))
}

fn surface_label(surface: ScopeFlag) -> &'static str {
    surface.applied().map_or("unset", folio::Theme::as_str)
}

fn describe_preference(preference: ThemePreference) -> &'static str {
    preference.theme().map_or("unset", folio::Theme::as_str)
}

/// Fixed-width text table: one row per grid row, `id` per occupied cell,
/// `.` for an empty one.
fn render_grid(grid: &GridSlotAssignment) -> String {
    let width = grid.iter().flatten().map(|record| record.id.len()).max().unwrap_or(1).max(1);
    grid.rows()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    let label = cell.as_ref().map_or(".", |record| record.id.as_str());
                    format!("{label:<width$}")
                })
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_owned()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
