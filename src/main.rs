use clap::{Parser, Subcommand};
use pytt_help::{Preview, PreviewError, Viewport};
use std::path::PathBuf;

/// Preview what the PyTT help pages render for a given URL and window.
#[derive(Parser, Debug)]
#[command(name = "pytt-help", version, about)]
struct Cli {
    /// Viewer configuration (JSON). Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the navigation bar markup.
    Nav {
        /// Include the search form.
        #[arg(long)]
        search: bool,
    },
    /// Print the language menu markup for a page URL.
    Menu {
        #[arg(long)]
        url: String,
    },
    /// Print the frame plan (language, frame URLs, height) as JSON.
    Plan {
        #[arg(long)]
        url: String,
        /// Window inner height in pixels.
        #[arg(long)]
        height: u32,
        /// Header height in pixels.
        #[arg(long, default_value_t = 0)]
        header: u32,
        /// Footer height in pixels.
        #[arg(long, default_value_t = 0)]
        footer: u32,
    },
}

fn main() -> Result<(), PreviewError> {
    env_logger::init();
    let cli = Cli::parse();

    let preview = match &cli.config {
        Some(path) => Preview::from_config_file(path)?,
        None => Preview::default(),
    };

    match cli.command {
        Command::Nav { search } => println!("{}", preview.nav(search)),
        Command::Menu { url } => println!("{}", preview.language_menu(&url)?),
        Command::Plan {
            url,
            height,
            header,
            footer,
        } => {
            let viewport = Viewport::new(height, header, footer);
            println!("{}", preview.plan_json(&url, viewport)?);
        }
    }
    Ok(())
}
