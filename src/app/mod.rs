pub mod actions;
pub mod events;
pub mod state;

use crate::clock::{self, world::TzDatabase};
use crate::config::Config;
use crate::input;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::Event;
use state::AppState;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

pub struct App {
    cfg: Config,
    state: AppState,
    zones: TzDatabase,
}

impl App {
    pub fn new(cfg: Config) -> Self {
        let state = AppState::new(cfg.initial_state());
        Self {
            cfg,
            state,
            zones: TzDatabase,
        }
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(64);

        input::spawn_input_task(tx.clone());
        spawn_ticker(tx, self.cfg.clock.tick);

        self.refresh();
        tui::draw(terminal, &self.state)?;

        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Tick => self.refresh(),
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(input_ev) {
                        self.handle_action(action);
                    }
                }
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &self.state)?;
        }

        tracing::info!(uptime_secs = self.state.clock.uptime().as_secs(), "clock stopped");
        Ok(())
    }

    fn handle_action(&mut self, action: Action) {
        tracing::debug!(?action, "action");
        self.reduce(action);
        // Show the change right away instead of on the next tick.
        if !self.state.should_quit {
            self.refresh();
        }
    }

    fn reduce(&mut self, action: Action) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::CycleTheme => self.state.clock.cycle_theme(),
            Action::ToggleFormat => self.state.clock.toggle_format(),
            Action::ToggleSeconds => self.state.clock.toggle_seconds(),
            Action::Resize => {}
        }
    }

    fn refresh(&mut self) {
        let now = chrono::Local::now().fixed_offset();
        clock::refresh(
            &self.state.clock,
            now,
            self.state.clock.uptime(),
            &self.cfg.world,
            &self.zones,
            &mut self.state.board,
        );
    }
}

fn spawn_ticker(tx: mpsc::Sender<Event>, period: std::time::Duration) {
    tokio::spawn(async move {
        let mut interval = time::interval(period);
        // A late tick is simply dropped; the next one redraws everything.
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tx.send(Event::Tick).await.is_err() {
                break;
            }
        }
    });
}
