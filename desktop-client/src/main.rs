mod app;
mod board_view;
mod config;

use clap::Parser;
use eframe::egui;
use engine::logger::init_logger;
use engine::types::Mark;

use app::TicTacToeApp;
use config::{Config, get_config_store};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum MarkArg {
    X,
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

/// Tic-tac-toe with an optional perfect-play computer opponent.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Start with the computer opponent enabled
    #[arg(long)]
    ai: bool,

    /// Start with the computer opponent disabled
    #[arg(long, conflicts_with = "ai")]
    no_ai: bool,

    /// Which mark the computer plays
    #[arg(long, value_enum)]
    ai_mark: Option<MarkArg>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger(Some("client".to_string()));
    let args = Args::parse();

    let config_store = get_config_store();
    let mut config = match config_store.load() {
        Ok(config) => config,
        Err(e) => {
            engine::log!("Failed to load settings, using defaults: {}", e);
            Config::default()
        }
    };

    if args.ai {
        config.ai_enabled = true;
    }
    if args.no_ai {
        config.ai_enabled = false;
    }
    if let Some(mark) = args.ai_mark {
        config.ai_mark = mark.into();
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(|_cc| Ok(Box::new(TicTacToeApp::new(config, config_store)))),
    )?;

    Ok(())
}
