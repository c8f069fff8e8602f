use anyhow::Context;
use arcade::app::{load_config, App, FrameClock};
use arcade::build_info;
use arcade::core::{logging, ArcadeConfig};
use arcade::games::maze::MazeDifficulty;
use arcade::games::GameKind;
use arcade::input::{handle_key, InputResult};
use arcade::ui;
use clap::{Parser, ValueEnum};
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GameArg {
    Maze,
    Shooter,
}

impl From<GameArg> for GameKind {
    fn from(arg: GameArg) -> Self {
        match arg {
            GameArg::Maze => GameKind::Maze,
            GameArg::Shooter => GameKind::Shooter,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for MazeDifficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => MazeDifficulty::Easy,
            DifficultyArg::Medium => MazeDifficulty::Medium,
            DifficultyArg::Hard => MazeDifficulty::Hard,
        }
    }
}

/// Terminal arcade: a timed maze and a falling-enemy shooter.
#[derive(Debug, Parser)]
#[command(name = "arcade", disable_version_flag = true)]
struct Cli {
    /// Skip the menu and start this game
    #[arg(value_enum)]
    game: Option<GameArg>,

    /// Maze wall density preset
    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,

    /// Seed the random generator for reproducible rounds
    #[arg(long)]
    seed: Option<u64>,

    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file (defaults to the platform data directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    save_config: bool,

    /// Show version information
    #[arg(short = 'V', long)]
    version: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("arcade {}", build_info::version_string());
        return Ok(());
    }

    let config = load_config(cli.config.as_deref(), cli.difficulty.map(Into::into))?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }
    if cli.save_config {
        let path = cli
            .config
            .clone()
            .or_else(ArcadeConfig::default_path)
            .context("could not determine a config file location; pass --config")?;
        config.save(&path)?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    let log_path = cli
        .log_file
        .or_else(ArcadeConfig::default_log_path)
        .context("could not determine a log file location; pass --log-file")?;
    logging::init(&log_path, &config.log_level)?;
    info!(version = %build_info::version_string(), seed = ?cli.seed, "starting arcade");

    let frame_ms = config.frame_ms;
    let mut app = App::new(config, cli.seed);
    if let Some(game) = cli.game {
        app.launch(game.into())?;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, frame_ms);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "arcade exited with an error");
    }
    info!("arcade stopped");
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    frame_ms: u64,
) -> anyhow::Result<()> {
    let mut clock = FrameClock::new();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(frame_ms))? {
            if let Event::Key(key) = event::read()? {
                if handle_key(app, key)? == InputResult::Quit {
                    return Ok(());
                }
            }
        }

        app.tick(clock.elapsed_ms())?;
    }
}
