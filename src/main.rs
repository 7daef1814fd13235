mod app;
mod cli;
mod commands;
mod config;
mod error;
mod i18n;
mod logic;
mod models;
mod ui;

use anyhow::Context;
use app::{App, PredictionField, Screen, SettingsField};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use logic::TelemetryTimer;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use ui::screens::{
    AnalysisScreen, DashboardScreen, MonitoringScreen, PredictionScreen, RecommendationsScreen,
    SettingsScreen,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Init) => {
            Config::setup_interactive(cli.config.as_ref())
                .context("Interactive setup failed")?;
            return Ok(());
        }
        Some(Commands::Check) => {
            let config = Config::load(cli.config.as_ref()).context("Failed to load config")?;
            print!("{}", commands::check(&config)?);
            return Ok(());
        }
        Some(Commands::Predict {
            crop,
            planting_date,
            field_size,
            seed,
            json,
        }) => {
            let config = Config::load(cli.config.as_ref()).context("Failed to load config")?;
            let mut rng = commands::command_rng(seed, &config);
            let report = commands::predict(&crop, &planting_date, field_size, &mut rng)?;
            if json {
                println!("{}", commands::to_json(&report)?);
            } else {
                print!(
                    "{}",
                    commands::format_prediction(&report, config.display.language)
                );
            }
            return Ok(());
        }
        Some(Commands::Recommend { rule, json }) => {
            let config = Config::load(cli.config.as_ref()).context("Failed to load config")?;
            let report = commands::recommend(rule.as_deref())?;
            if json {
                println!("{}", commands::to_json(&report)?);
            } else {
                print!(
                    "{}",
                    commands::format_recommendations(&report, config.display.language)
                );
            }
            return Ok(());
        }
        Some(Commands::History { year, json }) => {
            let report = commands::history(year.as_deref());
            if json {
                println!("{}", commands::to_json(&report)?);
            } else {
                print!("{}", commands::format_history(&report));
            }
            return Ok(());
        }
        None => {}
    }

    let config = match Config::load(cli.config.as_ref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Run `fieldops init` or copy config/config.yaml.example to config/config.yaml");
            std::process::exit(1);
        }
    };

    let mut app = App::new(&config);
    let mut timer = TelemetryTimer::start(config.telemetry.tick_interval());
    tracing::info!(
        period_secs = timer.period().as_secs(),
        farm = %app.farm.name,
        "Starting dashboard"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &mut timer).await;
    timer.cancel();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    timer: &mut TelemetryTimer,
) -> io::Result<()> {
    let mut frame: usize = 0;

    loop {
        app.apply_ticks(timer.drain());
        app.poll_prediction();
        frame = frame.wrapping_add(1);

        terminal.draw(|f| {
            let area = f.area();

            match app.screen {
                Screen::Dashboard => {
                    let urgent = app.urgent_recommendations();
                    let alert = app.weather_alert();
                    let latest = app.history.years().first().copied().unwrap_or_default();
                    let screen = DashboardScreen::new(
                        &app.farm,
                        &app.telemetry,
                        &urgent,
                        &app.recent_predictions,
                    )
                    .with_trend(app.history.yoy_change(latest))
                    .with_display(app.language, app.temperature_unit)
                    .with_notifications(app.notifications, alert.as_deref())
                    .with_status(app.status_message.as_deref());
                    f.render_widget(screen, area);
                }
                Screen::Prediction => {
                    let screen = PredictionScreen::new(&app.prediction_state, &app.farm)
                        .language(app.language)
                        .spinner(frame / 3);
                    f.render_widget(screen, area);
                }
                Screen::Recommendations => {
                    let screen = RecommendationsScreen::new(&app.recommendations)
                        .with_selection(app.recommendations_state.selected_index)
                        .language(app.language);
                    f.render_widget(screen, area);
                }
                Screen::Monitoring => {
                    let screen = MonitoringScreen::new(&app.telemetry)
                        .with_metric(app.monitoring_state.metric)
                        .with_display(app.language, app.temperature_unit);
                    f.render_widget(screen, area);
                }
                Screen::Analysis => {
                    let screen = AnalysisScreen::new(&app.history, app.selected_year())
                        .with_filter(app.analysis_state.crop_filter)
                        .with_display(app.language, app.temperature_unit);
                    f.render_widget(screen, area);
                }
                Screen::Settings => {
                    let screen =
                        SettingsScreen::new(app.settings_farm(), app.language, app.temperature_unit)
                            .with_focus(
                                app.settings_state.focused_field,
                                app.settings_state.crop_cursor,
                            )
                            .with_notifications(
                                app.notifications,
                                app.settings_state.notification_cursor,
                            )
                            .editing(app.settings_state.editing, &app.settings_state.edit_buffer)
                            .unsaved(app.has_unsaved_settings())
                            .with_status(app.status_message.as_deref());
                    f.render_widget(screen, area);
                }
            }
        })?;

        // Poll with a timeout so ticks and pending predictions are picked up
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                let editing = app.prediction_state.editing || app.settings_state.editing;
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.quit();
                    }
                    KeyCode::Char('s')
                        if key.modifiers.contains(KeyModifiers::CONTROL)
                            && app.screen == Screen::Settings
                            && !editing =>
                    {
                        app.save_settings();
                    }
                    KeyCode::Char('q') if !editing => {
                        app.quit();
                    }
                    KeyCode::Esc if !editing => {
                        if app.prediction_state.is_pending() {
                            app.cancel_prediction();
                        } else {
                            app.switch_screen(Screen::Dashboard);
                        }
                    }
                    KeyCode::Char(c) if !editing => {
                        if let Some(screen) = Screen::from_key(c) {
                            app.switch_screen(screen);
                        } else {
                            handle_screen_input(app, key.code);
                        }
                    }
                    _ => {
                        handle_screen_input(app, key.code);
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_screen_input(app: &mut App, code: KeyCode) {
    match app.screen {
        Screen::Dashboard => {}
        Screen::Prediction => handle_prediction_input(app, code),
        Screen::Recommendations => handle_recommendations_input(app, code),
        Screen::Monitoring => handle_monitoring_input(app, code),
        Screen::Analysis => handle_analysis_input(app, code),
        Screen::Settings => handle_settings_input(app, code),
    }
}

fn handle_prediction_input(app: &mut App, code: KeyCode) {
    if !app.prediction_state.editing && code == KeyCode::Char('p') {
        app.request_prediction();
        return;
    }

    let state = &mut app.prediction_state;
    if state.editing {
        match code {
            KeyCode::Esc => state.cancel_editing(),
            KeyCode::Enter => state.finish_editing(),
            KeyCode::Backspace => {
                state.edit_buffer.pop();
            }
            KeyCode::Char(c) => state.edit_buffer.push(c),
            _ => {}
        }
        return;
    }

    match code {
        KeyCode::Up => state.prev_field(),
        KeyCode::Down | KeyCode::Tab => state.next_field(),
        KeyCode::Left if state.focused_field == PredictionField::Crop => state.cycle_crop(false),
        KeyCode::Right if state.focused_field == PredictionField::Crop => state.cycle_crop(true),
        KeyCode::Enter if state.focused_field == PredictionField::Crop => state.cycle_crop(true),
        KeyCode::Enter => state.start_editing(),
        _ => {}
    }
}

fn handle_recommendations_input(app: &mut App, code: KeyCode) {
    let count = app.recommendations.len();
    match code {
        KeyCode::Up => app.recommendations_state.prev(),
        KeyCode::Down => app.recommendations_state.next(count),
        _ => {}
    }
}

fn handle_monitoring_input(app: &mut App, code: KeyCode) {
    if let KeyCode::Char('m') | KeyCode::Tab = code {
        app.monitoring_state.cycle_metric();
    }
}

fn handle_analysis_input(app: &mut App, code: KeyCode) {
    let year_count = app.history.years().len();
    match code {
        // Chart runs oldest to newest, left to right
        KeyCode::Left => app.analysis_state.older(year_count),
        KeyCode::Right => app.analysis_state.newer(),
        KeyCode::Char('c') => app.analysis_state.cycle_crop(),
        _ => {}
    }
}

fn handle_settings_input(app: &mut App, code: KeyCode) {
    if app.settings_state.editing {
        match code {
            KeyCode::Esc => {
                app.settings_state.cancel_editing();
            }
            KeyCode::Enter => {
                let value = app.settings_state.finish_editing();
                let field = app.settings_state.focused_field;
                match app.apply_setting(field, &value) {
                    Ok(()) => app.clear_status(),
                    Err(e) => {
                        tracing::warn!(field = field.label(), error = %e, "Rejected settings edit");
                        app.set_status(&format!("{}", e));
                    }
                }
            }
            KeyCode::Backspace => {
                app.settings_state.edit_buffer.pop();
            }
            KeyCode::Char(c) => {
                app.settings_state.edit_buffer.push(c);
            }
            _ => {}
        }
        return;
    }

    let field = app.settings_state.focused_field;
    match code {
        KeyCode::Up => app.settings_state.prev_field(),
        KeyCode::Down | KeyCode::Tab => app.settings_state.next_field(),
        KeyCode::Left if field == SettingsField::Crops => {
            app.settings_state.move_crop_cursor(false)
        }
        KeyCode::Right if field == SettingsField::Crops => {
            app.settings_state.move_crop_cursor(true)
        }
        KeyCode::Left if field == SettingsField::Notifications => {
            app.settings_state.move_notification_cursor(false)
        }
        KeyCode::Right if field == SettingsField::Notifications => {
            app.settings_state.move_notification_cursor(true)
        }
        KeyCode::Char('x') => app.discard_settings(),
        KeyCode::Enter if field.is_text() => {
            let current = app.settings_value(field);
            app.settings_state.start_editing(&current);
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.cycle_setting(),
        _ => {}
    }
}
