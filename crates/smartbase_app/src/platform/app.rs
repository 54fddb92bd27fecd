use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use smartbase_core::{update, AppState, Msg};
use smartbase_logging::{smartbase_info, smartbase_warn};

use super::config::{load_config, AppConfig, CONFIG_FILENAME};
use super::effects::EffectRunner;
use super::logging;
use super::ui::commands::{parse_line, HostEvent, USAGE};
use super::ui::render::render;

pub fn run_app() -> anyhow::Result<()> {
    let (config, config_error) = match load_config(Path::new(CONFIG_FILENAME)) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    logging::initialize(config.log_destination.into());
    if let Some(err) = config_error {
        smartbase_warn!("{}; using defaults", err);
    }
    smartbase_info!("starting against {}", config.api_base);

    let (event_tx, event_rx) = mpsc::channel::<HostEvent>();
    let runner = EffectRunner::new(&config.api_settings(), event_tx.clone())
        .context("failed to start backend engine")?;

    spawn_input_reader(event_tx.clone());
    spawn_ticker(event_tx, config.tick_interval());

    let mut host = Host::new(runner);
    host.dispatch(Msg::Started);
    println!("{USAGE}");

    while let Ok(event) = event_rx.recv() {
        match event {
            HostEvent::Core(msg) => host.dispatch(msg),
            HostEvent::Help => println!("{USAGE}"),
            HostEvent::Invalid(line) => println!("unknown command `{line}`; type `help`"),
            HostEvent::Quit => break,
        }
    }

    smartbase_info!("shutting down");
    Ok(())
}

/// Single-threaded owner of the core state; every message goes through here.
struct Host {
    state: AppState,
    runner: EffectRunner,
    last_frame: String,
}

impl Host {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
            last_frame: String::new(),
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);

        if self.state.consume_dirty() {
            self.redraw();
        }
    }

    fn redraw(&mut self) {
        let frame = render(&self.state.view());
        if frame == self.last_frame {
            return;
        }
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "\n{frame}");
        let _ = stdout.flush();
        self.last_frame = frame;
    }
}

fn spawn_input_reader(event_tx: mpsc::Sender<HostEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    smartbase_warn!("stdin read failed: {}", err);
                    break;
                }
            };
            if event_tx.send(parse_line(&line)).is_err() {
                return;
            }
        }
        // EOF or a read error ends the session.
        let _ = event_tx.send(HostEvent::Quit);
    });
}

// Background tick driving timers and frame callbacks.
fn spawn_ticker(event_tx: mpsc::Sender<HostEvent>, interval: Duration) {
    let started = Instant::now();
    thread::spawn(move || loop {
        let now_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        if event_tx.send(HostEvent::Core(Msg::Tick { now_ms })).is_err() {
            break;
        }
        thread::sleep(interval);
    });
}
