use std::io;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use ratatui::crossterm::execute;

use ifsc_finder::app::App;
use ifsc_finder::cli::Args;
use ifsc_finder::client::{HttpSource, SuggestClient, parse_base_url};
use ifsc_finder::codes::describe_code;
use ifsc_finder::config::{load_config, load_config_from_path};
use ifsc_finder::logging;

/// Event poll timeout; also the resolution of debounce and toast timers
const TICK_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<ExitCode> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    logging::init();

    let args = Args::parse();

    if let Some(code) = &args.check {
        return Ok(check_code(code));
    }

    let loaded = match &args.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };
    let mut config = loaded.config;
    args.apply(&mut config);

    let base_url = parse_base_url(&config.server.base_url)?;
    let source = HttpSource::new(
        base_url.clone(),
        &config.server.endpoint,
        config.server.timeout(),
    )?;
    let client = SuggestClient::spawn(source)?;
    log::info!("Using suggestions from {}", source_url(&base_url, &config.server.endpoint));

    let mut app = App::new(&config, base_url, client);
    if let Some(warning) = loaded.warning {
        app.notification.error(&warning);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture, EnableBracketedPaste)?;

    let result = run(terminal, app);

    // Restore terminal even if the loop failed
    let _ = execute!(io::stdout(), DisableBracketedPaste, DisableMouseCapture);
    ratatui::restore();

    let app = result?;
    match app.into_outcome() {
        Some(outcome) if args.print_url => println!("{}", outcome.url),
        Some(outcome) => println!("{}", outcome.query),
        None => {}
    }

    Ok(ExitCode::SUCCESS)
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<App> {
    loop {
        app.tick(Instant::now());

        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        if app.should_quit() {
            break;
        }

        // Wake up early when a debounced fetch comes due
        let timeout = app
            .autocomplete
            .time_until_fetch(Instant::now())
            .map_or(TICK_INTERVAL, |due| due.min(TICK_INTERVAL));

        if event::poll(timeout)? {
            let event = event::read()?;
            app.handle_event(event, Instant::now());
        }
    }

    Ok(app)
}

fn check_code(code: &str) -> ExitCode {
    match describe_code(code) {
        Some(description) => {
            println!("{}: valid {}", code.trim(), description);
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("{}: not a valid IFSC or MICR code", code.trim());
            ExitCode::FAILURE
        }
    }
}

fn source_url(base_url: &reqwest::Url, endpoint: &str) -> String {
    format!("{}{}", base_url.as_str().trim_end_matches('/'), endpoint)
}
