use std::time::Duration;

use leptos::prelude::*;

use crate::config::ToastConfig;
use crate::toast::{ToastId, ToastQueue};

/// Handle to the page's notification surface.
#[derive(Debug, Clone, Copy)]
pub struct Toasts {
    queue: RwSignal<ToastQueue>,
    duration: Duration,
}

impl Toasts {
    pub fn notify(&self, title: &str, description: &str) {
        let Some(id) = self.queue.try_update(|q| q.push(title, description)) else {
            return;
        };
        log::debug!("toast: {title}");
        let queue = self.queue;
        set_timeout(
            move || {
                queue.try_update(|q| q.dismiss(id));
            },
            self.duration,
        );
    }

    pub fn dismiss(&self, id: ToastId) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }
}

pub fn provide_toasts(config: &ToastConfig) -> Toasts {
    let toasts = Toasts {
        queue: RwSignal::new(ToastQueue::new(config.limit)),
        duration: Duration::from_millis(config.duration_ms),
    };
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <ol class="fixed bottom-0 left-0 z-[100] flex flex-col gap-2 p-4 w-full max-w-sm">
            {move || {
                toasts
                    .queue
                    .with(|q| {
                        q.toasts()
                            .iter()
                            .cloned()
                            .map(|t| {
                                let id = t.id;
                                view! {
                                    <li class="relative border border-zinc-800 bg-zinc-950 rounded-md p-4 pr-8 shadow-lg">
                                        <div class="text-sm font-semibold">{t.title}</div>
                                        <div class="text-sm text-gray-400">{t.description}</div>
                                        <button
                                            class="absolute top-2 right-2 text-gray-500 hover:text-white"
                                            aria-label="Close"
                                            on:click=move |_| toasts.dismiss(id)
                                        >
                                            "×"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    })
            }}
        </ol>
    }
}
