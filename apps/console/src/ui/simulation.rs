use dioxus::prelude::*;

use crate::hooks::simulation::use_simulation_runner;
use crate::models::{Channel, ChatRole};
use crate::simulation::state::SimulationState;
use crate::simulation::{SimulationPhase, SimulationStep, StepKind};
use crate::state::{resolve_selection, use_app_state};
use crate::Route;

fn step_icon(kind: StepKind) -> &'static str {
    match kind {
        StepKind::Analyzing => "🔍",
        StepKind::ChoosingChannel => "📡",
        StepKind::Connecting => "🔗",
        StepKind::Sent => "📤",
        StepKind::Response => "💬",
        StepKind::Marked => "✅",
    }
}

fn phase_label(phase: SimulationPhase) -> &'static str {
    match phase {
        SimulationPhase::Idle => "Waiting to start",
        SimulationPhase::Analyzing => "Analyzing profile",
        SimulationPhase::ChoosingChannel => "Choosing channel",
        SimulationPhase::Connecting => "Connecting",
        SimulationPhase::Calling => "On a call",
        SimulationPhase::Messaging => "Messaging",
        SimulationPhase::Marked => "Marking as engaged",
        SimulationPhase::Complete => "Complete",
        SimulationPhase::Cancelled => "Stopped",
    }
}

/// 从查询参数解析线索并在挂载后自动开始模拟。
#[component]
pub fn Simulation(leads: String) -> Element {
    let app_state = use_app_state();
    let runner = use_simulation_runner();
    let nav = navigator();
    let selection = use_memo(use_reactive!(|leads| {
        resolve_selection(&app_state.peek().leads, &leads)
    }));

    let starter = runner.clone();
    use_effect(move || starter.start(selection()));
    let selected = selection();

    if selected.is_empty() {
        return rsx! {
            div { class: "flex min-h-screen items-center justify-center bg-slate-50 p-6",
                div { class: "max-w-sm space-y-4 rounded-lg border border-slate-200 bg-white p-8 text-center shadow-sm",
                    h2 { class: "text-lg font-semibold text-slate-900", "No Leads Selected" }
                    p { class: "text-sm text-slate-500", "Select one or more leads before starting a campaign." }
                    button {
                        class: "rounded bg-slate-900 px-4 py-2 text-sm text-white hover:bg-slate-700",
                        onclick: move |_| {
                            nav.push(Route::Home {});
                        },
                        "Back to leads"
                    }
                }
            }
        };
    }

    let sim = app_state.read().simulation.clone();
    let running = sim.is_running();
    let finished = matches!(
        sim.phase,
        SimulationPhase::Complete | SimulationPhase::Cancelled
    );
    let position = sim
        .position()
        .map(|(current, total)| format!("Lead {current} of {total}"))
        .unwrap_or_else(|| format!("{} leads queued", selected.len()));
    let lead_name = sim.current_lead_name.clone().unwrap_or_default();
    let stopper = runner.clone();
    let restarter = runner.clone();
    let again = selected.clone();

    rsx! {
        div { class: "min-h-screen space-y-6 bg-slate-50 p-6",
            header { class: "space-y-3 rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
                div { class: "flex flex-wrap items-center justify-between gap-3",
                    div { class: "space-y-1",
                        h2 { class: "text-xl font-semibold text-slate-900", "AI Campaign Simulation" }
                        p { class: "text-xs text-slate-500", "{position} · {phase_label(sim.phase)} {lead_name}" }
                    }
                    div { class: "flex gap-2",
                        if running {
                            button {
                                class: "rounded border border-red-300 px-3 py-2 text-xs text-red-600 hover:bg-red-50",
                                onclick: move |_| stopper.stop(),
                                "Stop"
                            }
                        }
                        if finished {
                            button {
                                class: "rounded border border-slate-300 px-3 py-2 text-xs text-slate-600 hover:bg-slate-100",
                                onclick: move |_| restarter.start(again.clone()),
                                "Run again"
                            }
                        }
                        button {
                            class: "rounded bg-slate-900 px-3 py-2 text-xs text-white hover:bg-slate-700",
                            onclick: move |_| {
                                nav.push(Route::Home {});
                            },
                            "Back to leads"
                        }
                    }
                }
                div { class: "h-2 rounded bg-slate-100",
                    div { class: "h-2 rounded bg-emerald-500 transition-all", width: "{sim.progress}%" }
                }
                p { class: "text-right text-[11px] text-slate-500", "{sim.progress}%" }
            }

            if sim.is_complete() {
                div { class: "rounded-lg border border-emerald-200 bg-emerald-50 p-4 text-sm text-emerald-800",
                    "Campaign complete. {sim.engaged.len()} of {sim.total} leads are now Engaged."
                }
            }
            if sim.phase == SimulationPhase::Cancelled {
                div { class: "rounded-lg border border-amber-200 bg-amber-50 p-4 text-sm text-amber-800",
                    "Campaign stopped. {sim.engaged.len()} of {sim.total} leads were engaged before the stop."
                }
            }

            div { class: "grid gap-6 lg:grid-cols-2",
                {timeline(&sim.steps)}
                if sim.current_channel == Some(Channel::Phone) {
                    {call_interface(&sim, &lead_name)}
                } else {
                    {phone_mockup(&sim, &lead_name)}
                }
            }
        }
    }
}

fn timeline(steps: &[SimulationStep]) -> Element {
    rsx! {
        section { class: "space-y-3 rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
            h3 { class: "text-sm font-semibold text-slate-800", "Timeline" }
            if steps.is_empty() {
                p { class: "text-xs italic text-slate-500", "Preparing the first lead…" }
            }
            ol { class: "max-h-[520px] space-y-2 overflow-y-auto text-xs",
                for step in steps.iter() {
                    li { key: "{step.id}", class: "flex gap-2",
                        span { {step_icon(step.kind)} }
                        div {
                            p { class: "text-slate-800", "{step.message}" }
                            p { class: "text-[10px] text-slate-400", "{step.lead_id}" }
                        }
                    }
                }
            }
        }
    }
}

fn phone_mockup(sim: &SimulationState, lead_name: &str) -> Element {
    let channel = sim
        .current_channel
        .map(|channel| channel.label())
        .unwrap_or("Chat");

    rsx! {
        section { class: "mx-auto w-full max-w-xs rounded-[2rem] border-8 border-slate-900 bg-white shadow-lg",
            header { class: "border-b border-slate-200 px-4 py-3",
                p { class: "text-sm font-semibold text-slate-900", "{lead_name}" }
                p { class: "text-[11px] text-slate-500", "{channel}" }
            }
            div { class: "h-[420px] space-y-2 overflow-y-auto p-3",
                for (index, message) in sim.conversation.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: if message.role == ChatRole::Assistant { "flex justify-end" } else { "flex justify-start" },
                        p {
                            class: if message.role == ChatRole::Assistant {
                                "max-w-[85%] rounded-lg bg-slate-900 px-3 py-2 text-xs text-white"
                            } else {
                                "max-w-[85%] rounded-lg bg-slate-100 px-3 py-2 text-xs text-slate-800"
                            },
                            "{message.text}"
                        }
                    }
                }
            }
        }
    }
}

fn call_interface(sim: &SimulationState, lead_name: &str) -> Element {
    let status = if sim.call_active {
        "Call in progress"
    } else {
        "Call ended"
    };
    let speaker = sim
        .speaker
        .map(|role| format!("{} speaking", role.label()))
        .unwrap_or_default();
    let open_line = sim.transcript.line_count().checked_sub(1);

    rsx! {
        section { class: "mx-auto w-full max-w-xs space-y-4 rounded-[2rem] border-8 border-slate-900 bg-slate-900 p-4 text-white shadow-lg",
            div { class: "space-y-1 text-center",
                div { class: "mx-auto flex h-16 w-16 items-center justify-center rounded-full bg-slate-700 text-2xl", "📞" }
                p { class: "text-sm font-semibold", "{lead_name}" }
                p { class: "text-[11px] text-slate-400", "{status}" }
                p { class: "h-4 text-[11px] text-emerald-400", "{speaker}" }
            }
            div { class: "h-[320px] space-y-2 overflow-y-auto rounded bg-slate-800 p-3 text-xs",
                for snapshot in sim.transcript.lines() {
                    p { key: "{snapshot.line}",
                        span { class: "font-semibold text-slate-400", "{snapshot.role.transcript_prefix()}: " }
                        "{snapshot.text}"
                        if sim.speaker.is_some() && Some(snapshot.line) == open_line {
                            span { class: "animate-pulse", "▍" }
                        }
                    }
                }
            }
        }
    }
}
