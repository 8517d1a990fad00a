use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::info;

use crate::models::Lead;
use crate::simulation::driver::{CampaignDriver, TimerSleeper};
use crate::simulation::pacing::SimulationPacing;
use crate::simulation::random::default_random;
use crate::simulation::{CancelToken, RunOutcome, SimulationEvent, SimulationSink};
use crate::state::{use_app_actions, AppActions};
use crate::APP_CONFIG;

/// Feeds driver events straight into the app state.
struct ActionSink(AppActions);

impl SimulationSink for ActionSink {
    fn emit(&mut self, event: SimulationEvent) {
        self.0.apply_simulation_event(&event);
    }
}

struct ActiveRun {
    task: Task,
    cancel: CancelToken,
}

#[derive(Clone)]
pub struct SimulationRunner {
    actions: AppActions,
    active: Rc<RefCell<Option<ActiveRun>>>,
}

impl SimulationRunner {
    /// 启动一次新的模拟；已有运行会先被停止。空列表不做任何事。
    pub fn start(&self, leads: Vec<Lead>) {
        self.halt();
        if leads.is_empty() {
            return;
        }

        let pacing = APP_CONFIG
            .get()
            .map(|config| config.pacing.clone())
            .unwrap_or_else(SimulationPacing::default);
        let cancel = CancelToken::new();
        let token = cancel.clone();
        let actions = self.actions;
        let slot = self.active.clone();
        actions.reset_simulation();

        let task = spawn(async move {
            let mut leads = leads;
            let mut driver = CampaignDriver::new(
                pacing,
                TimerSleeper,
                default_random(),
                ActionSink(actions),
                token,
            );
            match driver.run(&mut leads).await {
                RunOutcome::Completed => actions.notify_success(
                    "Campaign complete",
                    format!("{} leads marked as Engaged", leads.len()),
                ),
                RunOutcome::Cancelled => info!("simulation task stopped"),
                RunOutcome::Skipped => {}
            }
            slot.borrow_mut().take();
        });

        *self.active.borrow_mut() = Some(ActiveRun { task, cancel });
    }

    /// Stop button: ends the run immediately and records it as cancelled.
    pub fn stop(&self) {
        if self.halt() {
            self.actions
                .apply_simulation_event(&SimulationEvent::RunCancelled);
        }
    }

    fn halt(&self) -> bool {
        let Some(run) = self.active.borrow_mut().take() else {
            return false;
        };
        run.cancel.cancel();
        run.task.cancel();
        true
    }
}

/// Owns at most one driver task; the run is stopped when the caller unmounts.
pub fn use_simulation_runner() -> SimulationRunner {
    let actions = use_app_actions();
    let active = use_hook(|| Rc::new(RefCell::new(Option::<ActiveRun>::None)));
    let runner = SimulationRunner { actions, active };

    let on_drop = runner.clone();
    use_drop(move || {
        on_drop.halt();
    });

    runner
}
