use leptos::{either::EitherOf4, ev::MouseEvent, prelude::*};

use super::toast::use_toasts;
use super::ui::{OutlineButton, ProgressBar, SectionHeading, Separator};
use crate::resume::{attendance, toggle, Panel, PROFIT_MARGIN_PERCENT, TRAVEL_PHOTOS};

#[component]
pub fn FailureReel() -> impl IntoView {
    let active = RwSignal::new(None::<Panel>);

    view! {
        <section class="py-24 px-6 md:px-12 bg-black">
            <div class="max-w-4xl mx-auto">
                <div class="fade-in">
                    <SectionHeading number="02." title="FAILURE HIGHLIGHT REEL" />
                </div>
                {Panel::ALL
                    .into_iter()
                    .map(|panel| view! { <PanelCard panel active /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn PanelCard(panel: Panel, active: RwSignal<Option<Panel>>) -> impl IntoView {
    let is_open = Memo::new(move |_| active.get() == Some(panel));

    view! {
        <div class="mb-16 fade-in">
            <div
                class="border border-zinc-800 p-6 rounded-sm cursor-pointer hover:border-zinc-700 transition-colors"
                on:click=move |_| active.update(|a| *a = toggle(*a, panel))
            >
                <div class="flex items-center justify-between">
                    <div class="flex items-center">
                        <span class="w-6 text-gray-500 mr-4">{panel.icon()}</span>
                        <h3 class="text-xl font-bold">
                            {panel.title()} " "
                            <span class="text-sm text-gray-500 font-normal">{panel.aka()}</span>
                        </h3>
                    </div>
                    <span class=move || {
                        if is_open.get() {
                            "text-gray-500 transition-transform rotate-180"
                        } else {
                            "text-gray-500 transition-transform"
                        }
                    }>
                        "⌄"
                    </span>
                </div>
                <Show when=move || is_open.get()>
                    <div class="overflow-hidden expand-in">
                        <Separator />
                        <ul class="space-y-2 text-gray-400 pl-10">
                            {panel
                                .bullets()
                                .iter()
                                .map(|line| view! { <li>{*line}</li> })
                                .collect_view()}
                        </ul>
                        <PanelExtra panel />
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn PanelExtra(panel: Panel) -> impl IntoView {
    match panel {
        Panel::Music => {
            let toasts = use_toasts();
            EitherOf4::A(view! {
                <div class="mt-6 pl-10" on:click=|e: MouseEvent| e.stop_propagation()>
                    <OutlineButton on_click=move |_: MouseEvent| {
                        toasts.notify("Music player crashed", "Just like my music career")
                    }>"Play My \"Hit\" Song"</OutlineButton>
                </div>
            })
        }
        Panel::Business => EitherOf4::B(view! {
            <div class="mt-6 pl-10">
                <p class="text-sm text-gray-500 mb-2">"PROFIT MARGIN:"</p>
                <div class="flex items-center gap-4">
                    <ProgressBar value=f64::from(PROFIT_MARGIN_PERCENT) size="h-1 w-64" />
                    <span class="text-gray-400 text-sm">{PROFIT_MARGIN_PERCENT} "%"</span>
                </div>
                <p class="text-xs text-gray-600 mt-1">"(but hey, look at those order numbers!)"</p>
            </div>
        }),
        Panel::Education => EitherOf4::C(view! {
            <div class="mt-6 pl-10">
                <p class="text-sm text-gray-500 mb-2">"ATTENDANCE RECORD:"</p>
                <div class="flex gap-1 mt-1">
                    {attendance()
                        .map(|attended| {
                            let class = if attended {
                                "w-2 h-6 bg-gray-700"
                            } else {
                                "w-2 h-6 bg-zinc-900 border border-zinc-800"
                            };
                            view! { <div class=class></div> }
                        })
                        .collect_view()}
                </div>
            </div>
        }),
        Panel::Startup => EitherOf4::D(view! {
            <div class="mt-6 pl-10 grid grid-cols-3 gap-2">
                {TRAVEL_PHOTOS
                    .into_iter()
                    .map(|caption| {
                        view! {
                            <div class="aspect-square bg-zinc-900 border border-zinc-800 flex items-center justify-center">
                                <p class="text-xs text-gray-600 p-1 text-center">{caption}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }),
    }
}
