use leptos::prelude::*;
use leptos_use::{use_interval_fn, use_timeout_fn, utils::Pausable, UseTimeoutFnReturn};

use super::ui::ProgressBar;
use crate::config::LoadingConfig;
use crate::loading::LoadingGate;

/// Drives the gate: one counter tick per period until the cap, then a
/// single delayed switch to "loaded". Timers are released with the scope.
pub fn use_loading_gate(config: &LoadingConfig) -> RwSignal<LoadingGate> {
    let gate = RwSignal::new(LoadingGate::new(config.cap));

    let Pausable { pause, .. } = use_interval_fn(
        move || {
            gate.update(|g| {
                g.tick();
            });
        },
        config.tick_ms,
    );

    let UseTimeoutFnReturn {
        start: start_loaded,
        ..
    } = use_timeout_fn(
        move |_: ()| {
            gate.update(LoadingGate::finish);
            log::debug!("loading gate opened");
        },
        config.loaded_delay_ms as f64,
    );

    let capped = Memo::new(move |_| gate.with(LoadingGate::is_capped));
    Effect::new(move |_| {
        if capped.get() {
            pause();
            start_loaded(());
        }
    });

    gate
}

#[component]
pub fn LoadingScreen(gate: RwSignal<LoadingGate>) -> impl IntoView {
    let progress = Signal::derive(move || gate.with(|g| g.progress() as f64));

    view! {
        <div class="h-screen w-screen flex flex-col items-center justify-center bg-black p-4">
            <div class="glitch-wrapper">
                <h1 class="text-4xl font-bold mb-8 text-white glitch-text" data-text="LOADING EXCUSES...">
                    "LOADING EXCUSES..."
                </h1>
            </div>
            <ProgressBar value=progress size="w-80 h-1" />
            <p class="mt-4 text-gray-500 font-mono text-sm">
                {move || gate.with(|g| g.progress())}
                "% - This will never reach 100% (just like my projects)"
            </p>
        </div>
    }
}
