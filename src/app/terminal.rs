use leptos::{
    ev::{self, MouseEvent},
    html,
    prelude::*,
};
use leptos_use::{
    use_interval_fn_with_options, use_timeout_fn, utils::Pausable, UseIntervalFnOptions,
    UseTimeoutFnReturn,
};

use crate::config::TerminalConfig;
use crate::drag::{DragState, Point};
use crate::typewriter::{Schedule, Tick, Typewriter};

const CARET_CLASS: &str = "inline-block w-2 h-4 bg-green-500 ml-px align-middle animate-pulse";

fn pointer(e: &MouseEvent) -> Point {
    Point::new(e.client_x(), e.client_y())
}

/// Owns the typewriter state and keeps exactly the timer that
/// [`Typewriter::schedule`] asks for running.
fn use_typewriter(config: &TerminalConfig) -> RwSignal<Typewriter> {
    let machine = RwSignal::new(Typewriter::new(config.script()));

    let Pausable {
        pause: pause_typing,
        resume: resume_typing,
        ..
    } = use_interval_fn_with_options(
        move || {
            let tick = machine.try_update(Typewriter::tick);
            if tick == Some(Tick::LineComplete) {
                log::trace!("terminal line complete");
            }
        },
        config.char_tick_ms,
        UseIntervalFnOptions::default().immediate(false),
    );

    let UseTimeoutFnReturn {
        start: start_line_break,
        stop: stop_line_break,
        ..
    } = use_timeout_fn(
        move |_: ()| {
            machine.update(|m| {
                m.finish_line_break();
            });
        },
        config.line_pause_ms as f64,
    );

    let UseTimeoutFnReturn {
        start: start_reveal,
        ..
    } = use_timeout_fn(
        move |_: ()| {
            machine.update(Typewriter::show);
            log::debug!("terminal overlay shown");
        },
        config.reveal_delay_ms as f64,
    );
    Effect::new(move |_| start_reveal(()));

    let schedule = Memo::new(move |_| machine.with(Typewriter::schedule));
    Effect::new(move |_| match schedule.get() {
        Schedule::Ticking => {
            stop_line_break();
            resume_typing();
        }
        Schedule::LineBreak => {
            pause_typing();
            start_line_break(());
        }
        Schedule::Stopped => {
            pause_typing();
            stop_line_break();
            if machine.with_untracked(Typewriter::is_finished) {
                log::debug!("terminal script finished");
            }
        }
    });

    machine
}

#[component]
pub fn TerminalOverlay(config: TerminalConfig) -> impl IntoView {
    let machine = use_typewriter(&config);
    let title = config.title.clone();

    let drag = RwSignal::new(DragState::default());
    let listeners = StoredValue::new(Vec::<WindowListenerHandle>::new());
    let release = move || {
        listeners.try_update_value(|handles| {
            for handle in handles.drain(..) {
                handle.remove();
            }
        });
    };
    on_cleanup(release);

    // move/up listeners live only for the duration of one gesture
    let start_drag = move |e: MouseEvent| {
        e.prevent_default();
        release();
        drag.update(|d| d.begin(pointer(&e)));
        let on_move = window_event_listener(ev::mousemove, move |e| {
            drag.update(|d| d.move_to(pointer(&e)));
        });
        let on_up = window_event_listener(ev::mouseup, move |_| {
            drag.update(DragState::end);
            release();
            log::debug!("terminal dropped at {:?}", drag.with_untracked(DragState::offset));
        });
        listeners.update_value(|handles| handles.extend([on_move, on_up]));
    };

    let closed = RwSignal::new(false);
    let minimized = Memo::new(move |_| machine.with(Typewriter::is_minimized));
    let completed = Memo::new(move |_| machine.with(|m| m.completed_lines().len()));

    let body_ref = NodeRef::<html::Div>::new();
    Effect::new(move |_| {
        machine.track();
        if let Some(el) = body_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let reopen = move || {
        closed.get().then(|| {
            view! {
                <button
                    class="fixed bottom-8 right-8 z-50 bg-black border border-zinc-800 rounded-md px-3 py-1 font-mono text-sm text-green-500 hover:border-green-500"
                    aria-label="Open terminal"
                    on:click=move |_| {
                        closed.set(false);
                        machine.update(Typewriter::show);
                    }
                >
                    "$_"
                </button>
            }
        })
    };

    view! {
        <Show when=move || machine.with(Typewriter::is_visible) fallback=reopen>
            <div
                class="fixed bottom-8 right-8 z-50 terminal-enter"
                style:transform=move || drag.with(DragState::css_transform)
                style:max-width=move || if minimized.get() { "200px" } else { "500px" }
                style:width=move || if minimized.get() { "auto" } else { "90vw" }
            >
                <div class="bg-black border border-zinc-800 rounded-md overflow-hidden shadow-xl">
                    <div
                        class="bg-zinc-900 px-4 py-2 flex items-center justify-between cursor-move select-none"
                        on:mousedown=start_drag
                    >
                        <div class="flex items-center">
                            <div class="w-3 h-3 rounded-full bg-red-500 mr-2"></div>
                            <div class="w-3 h-3 rounded-full bg-yellow-500 mr-2"></div>
                            <div class="w-3 h-3 rounded-full bg-green-500 mr-2"></div>
                            <span class="text-xs text-gray-400 ml-2">{title.clone()}</span>
                        </div>
                        <div class="flex items-center space-x-2">
                            <button
                                class="text-gray-400 hover:text-white transition-colors"
                                aria-label=move || if minimized.get() { "Maximize" } else { "Minimize" }
                                on:mousedown=|e: MouseEvent| e.stop_propagation()
                                on:click=move |_| {
                                    machine.update(Typewriter::toggle_minimized);
                                    log::debug!("terminal minimized: {}", minimized.get_untracked());
                                }
                            >
                                {move || if minimized.get() { "□" } else { "–" }}
                            </button>
                            <button
                                class="text-gray-400 hover:text-white transition-colors"
                                aria-label="Close"
                                on:mousedown=|e: MouseEvent| e.stop_propagation()
                                on:click=move |_| {
                                    machine.update(Typewriter::hide);
                                    closed.set(true);
                                    log::debug!("terminal overlay closed");
                                }
                            >
                                "×"
                            </button>
                        </div>
                    </div>
                    <Show when=move || !minimized.get()>
                        <div
                            node_ref=body_ref
                            class="p-4 font-mono text-sm text-green-500 bg-black h-64 overflow-y-auto"
                        >
                            {move || {
                                let n = completed.get();
                                machine
                                    .with_untracked(|m| {
                                        m.script().lines()[..n]
                                            .iter()
                                            .map(|line| view! { <div class="mb-1">{line.clone()}</div> })
                                            .collect_view()
                                    })
                            }}
                            {move || {
                                machine
                                    .with(|m| {
                                        let caret = m.shows_caret();
                                        m.active_text()
                                            .map(|text| {
                                                view! {
                                                    <div>
                                                        {text.to_string()}
                                                        {caret.then(|| view! { <span class=CARET_CLASS></span> })}
                                                    </div>
                                                }
                                            })
                                    })
                            }}
                            {move || {
                                machine
                                    .with(Typewriter::is_finished)
                                    .then(|| {
                                        view! {
                                            <div class="flex items-center">
                                                <span class="mr-1">"$"</span>
                                                <span class=CARET_CLASS></span>
                                            </div>
                                        }
                                    })
                            }}
                        </div>
                    </Show>
                </div>
                <Show when=move || minimized.get()>
                    <div class="absolute bottom-0 right-0 bg-green-500 text-black text-xs px-2 py-1 rounded-bl-md rounded-tr-md">
                        "Terminal"
                    </div>
                </Show>
            </div>
        </Show>
    }
}
