use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use resumizer_core::{update, AppState, Effect, Msg, ALERT_NO_RESUME};
use resumizer_engine::{EngineHandle, ReqwestClient};
use resumizer_logging::{log_info, log_warn};

use super::config::{self, AppConfig};
use super::effects::EffectRunner;
use super::input::{parse_command, Command};
use super::ui::console::ConsolePage;
use super::ui::{layout, render};

pub enum AppEvent {
    /// A line typed by the user.
    Line(String),
    /// A completion forwarded from the engine.
    Engine(Msg),
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let config_path = config::config_path(std::env::args_os().nth(1));
    let loaded = config::load_config(&config_path);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        Ok(None) | Err(_) => AppConfig::default(),
    }
    .with_env_overrides(|key| std::env::var(key).ok());

    resumizer_logging::initialize(config.log_destination(), config.log_level());
    match loaded {
        Ok(Some(_)) => log_info!("Loaded configuration from {:?}", config_path),
        Ok(None) => log_info!("No configuration at {:?}, using defaults", config_path),
        Err(err) => log_warn!("{:#}; using defaults", err),
    }

    let client = ReqwestClient::new(config.client_settings())
        .with_context(|| format!("Invalid server url {:?}", config.server_url))?;
    log_info!("Using resume service at {}", client.base_url());

    let (engine, engine_events) =
        EngineHandle::spawn(Arc::new(client)).context("Failed to start the request engine")?;
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(engine, engine_events, event_tx.clone());
    spawn_input_reader(event_tx);

    let mut shell = Shell::new(ConsolePage::new(io::stdout()), runner);
    shell.start()?;

    for event in event_rx {
        let keep_running = match event {
            AppEvent::Line(line) => shell.handle_line(&line)?,
            AppEvent::Engine(msg) => {
                shell.dispatch_msg(msg)?;
                true
            }
            AppEvent::InputClosed => false,
        };
        if !keep_running {
            break;
        }
        shell.page.prompt()?;
    }

    log_info!("Session ended");
    Ok(())
}

fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if event_tx.send(AppEvent::Line(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    log_warn!("Failed to read input: {}", err);
                    break;
                }
            }
        }
        let _ = event_tx.send(AppEvent::InputClosed);
    });
}

/// Owns the page state; only the main loop touches it.
struct Shell<W: Write> {
    state: AppState,
    page: ConsolePage<W>,
    runner: EffectRunner,
}

impl<W: Write> Shell<W> {
    fn new(page: ConsolePage<W>, runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            page,
            runner,
        }
    }

    fn start(&mut self) -> io::Result<()> {
        self.page.apply(layout::initial_commands());
        self.page.apply(render::render(&self.state.view()));
        self.page.clear_changes();
        self.page.notice("Resumizer: enhance a resume and match it against a job.")?;
        self.page.print_help()?;
        self.page.prompt()
    }

    /// Returns false when the user asked to leave.
    fn handle_line(&mut self, line: &str) -> io::Result<bool> {
        match parse_command(line, self.state.job_description()) {
            Command::Dispatch(msg) => self.dispatch_msg(msg)?,
            Command::Show => match self.state.session().enhanced_resume() {
                Some(resume) => self.page.print_resume(resume)?,
                None => self.page.alert(ALERT_NO_RESUME)?,
            },
            Command::Help => self.page.print_help()?,
            Command::Quit => return Ok(false),
            Command::Empty => {}
            Command::Unknown(word) => self
                .page
                .notice(&format!("Unknown command `{word}`. Type `help` for the list."))?,
        }
        Ok(true)
    }

    fn dispatch_msg(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;

        if was_dirty {
            self.page.apply(render::render(&view));
            self.page.flush_changes()?;
        }

        for effect in effects {
            match effect {
                Effect::Alert { message } => self.page.alert(&message)?,
                request => self.runner.enqueue(request),
            }
        }
        Ok(())
    }
}
