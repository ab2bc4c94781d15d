use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;

use jex::app::App;
use jex::config::{self, Engine};
use jex::input::InputReader;
use jex::query;

/// Explore a JSON document with live, debounced queries
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON file to explore (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Query engine
    #[arg(long, value_enum)]
    engine: Option<Engine>,

    /// Quiet period after a keystroke before the query runs
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Expression to apply on start-up
    #[arg(short, long)]
    query: Option<String>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_logging();

    let args = Args::parse();

    let config_result = config::load_config();
    let mut config = config_result.config;
    if let Some(engine) = args.engine {
        config.query.engine = engine;
    }
    if let Some(ms) = args.debounce_ms {
        config.query.debounce_ms = ms;
    }

    // Fail before touching the terminal
    let document = InputReader::read_json(args.input.as_deref())?;
    let evaluator = query::evaluator_for(config.query.engine)?;

    let mut app = App::new(document, evaluator, &config);
    if let Some(warning) = &config_result.warning {
        app.notify(warning);
    }
    if let Some(initial) = &args.query {
        app.submit_query(initial);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = run(terminal, &mut app);
    ratatui::restore();
    result?;

    if let Some(output) = app.output_text() {
        println!("{}", output);
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Debug builds log to a file; stderr belongs to the terminal UI
#[cfg(debug_assertions)]
fn init_logging() {
    let path = std::env::temp_dir().join("jex-debug.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::new().filter_or("JEX_LOG", "debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}
