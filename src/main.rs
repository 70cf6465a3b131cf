use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use syntify::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convert a YouTube playlist into a new Spotify playlist
    Convert(ConvertOptions),

    /// List the video titles of a YouTube playlist
    Titles(TitlesOptions),

    /// Show cleaned title, artist and track without contacting any API
    Inspect(InspectOptions),

    /// Look titles up on Spotify without creating a playlist
    Resolve(ResolveOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ConvertOptions {
    /// YouTube playlist URL or playlist id
    pub playlist: String,

    /// Name of the Spotify playlist (default: "Syntified: <YouTube title>")
    #[clap(long)]
    pub name: Option<String>,

    /// Spotify access token (default: SPOTIFY_ACCESS_TOKEN)
    #[clap(long)]
    pub token: Option<String>,

    /// Resolve tracks only, do not create a playlist
    #[clap(long)]
    pub dry_run: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct TitlesOptions {
    /// YouTube playlist URL or playlist id
    pub playlist: String,
}

#[derive(Parser, Debug, Clone)]
pub struct InspectOptions {
    /// One or more video titles
    #[clap(required = true)]
    pub titles: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ResolveOptions {
    /// One or more video titles
    #[clap(required = true)]
    pub titles: Vec<String>,

    /// Spotify access token (default: SPOTIFY_ACCESS_TOKEN)
    #[clap(long)]
    pub token: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Convert(opt) => cli::convert(opt.playlist, opt.name, opt.token, opt.dry_run).await,
        Command::Titles(opt) => cli::titles(opt.playlist).await,
        Command::Inspect(opt) => cli::inspect(opt.titles),
        Command::Resolve(opt) => cli::resolve(opt.titles, opt.token).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
