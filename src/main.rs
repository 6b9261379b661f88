use crawler::app::{App, AppControl, AppInput};
use crawler::build_info;
use crawler::core::constants::TICK_INTERVAL_MS;
use crawler::utils::persistence::{default_log_path, default_save_path};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Default, PartialEq)]
struct CliOptions {
    save_path: Option<PathBuf>,
    seed: Option<u64>,
}

#[derive(Debug, PartialEq)]
enum CliCommand {
    Run(CliOptions),
    Help,
    Version,
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let options = match parse_args(&args) {
        Ok(CliCommand::Run(options)) => options,
        Ok(CliCommand::Help) => {
            print_help();
            return Ok(());
        }
        Ok(CliCommand::Version) => {
            println!("{}", build_info::version_string());
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'crawler --help' for usage.");
            std::process::exit(1);
        }
    };

    init_logging();

    let save_path = match options.save_path {
        Some(path) => path,
        None => default_save_path()?,
    };
    let rng = match options.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    tracing::info!(
        save = %save_path.display(),
        version = %build_info::version_string(),
        "starting crawler"
    );

    let mut app = App::new(save_path, rng);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Cleanup terminal even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "terminal loop failed");
    }
    result?;

    println!("Thanks for playing!");
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| crawler::ui::draw(frame, app))?;

        // Poll for input (non-blocking)
        if event::poll(Duration::from_millis(TICK_INTERVAL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press
                    && app.handle_input(map_key(key_event), Instant::now()) == AppControl::Exit
                {
                    tracing::info!("player exited");
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now());
    }
}

fn map_key(key: KeyEvent) -> AppInput {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppInput::Quit,
        KeyCode::Char(c) => AppInput::Char(c),
        KeyCode::Esc => AppInput::Back,
        KeyCode::Enter => AppInput::Confirm,
        _ => AppInput::Other,
    }
}

/// Logs go to ~/.crawler/crawler.log since the terminal belongs to the UI.
/// Logging stays off if the file cannot be opened.
fn init_logging() {
    let Ok(path) = default_log_path() else {
        return;
    };
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
}

fn parse_args(args: &[String]) -> Result<CliCommand, String> {
    let mut options = CliOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--version" | "-v" => return Ok(CliCommand::Version),
            "--save" => {
                let path = args.get(i + 1).ok_or("--save needs a file path")?;
                options.save_path = Some(PathBuf::from(path));
                i += 1;
            }
            "--seed" => {
                let value = args.get(i + 1).ok_or("--seed needs a number")?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                options.seed = Some(seed);
                i += 1;
            }
            other => return Err(format!("Unknown command: {}", other)),
        }
        i += 1;
    }

    Ok(CliCommand::Run(options))
}

fn print_help() {
    println!("Crawler - Incremental Dungeon Crawler\n");
    println!("Usage: crawler [options]\n");
    println!("Options:");
    println!("  --save <path>  Use a different save file (default: ~/.crawler/save_game.json)");
    println!("  --seed <n>     Seed the random number generator");
    println!("  --version      Show version information");
    println!("  --help         Show this help message");
}
