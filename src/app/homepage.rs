use leptos::{ev::MouseEvent, prelude::*};

use super::loading::{use_loading_gate, LoadingScreen};
use super::resume::FailureReel;
use super::terminal::TerminalOverlay;
use super::toast::use_toasts;
use super::ui::{OutlineButton, SectionHeading};
use crate::build_info::build_year;
use crate::config::SiteConfig;
use crate::loading::LoadingGate;

const SPELLED_RIGHT: [&str; 6] = [
    "Money",
    "Success",
    "Excuse",
    "Instagram",
    "Travel",
    "Procrastinate",
];
const SPELLED_WRONG: [&str; 5] = [
    "Responsibility",
    "Commitment",
    "Deadline",
    "Perseverance",
    "Discipline",
];
const TIMELINE: [(&str, &str); 4] = [
    ("Planning", "✓ Done"),
    ("Design", "✓ Done"),
    ("Development", "5% Complete"),
    ("Launch", "Never"),
];
const INITIAL_DEADLINES_IGNORED: u32 = 7;

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let gate = use_loading_gate(&config.loading);
    let terminal = config.terminal;

    view! {
        <Show
            when=move || gate.with(LoadingGate::is_loaded)
            fallback=move || view! { <LoadingScreen gate /> }
        >
            <TerminalOverlay config=terminal.clone() />
            <Hero />
            <About />
            <FailureReel />
            <CurrentDelusion />
            <DyslexiaCorner />
            <Contact />
            <Footer />
        </Show>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let toasts = use_toasts();
    let (deadlines, set_deadlines) = signal(INITIAL_DEADLINES_IGNORED);

    view! {
        <header class="h-screen flex flex-col items-center justify-center relative overflow-hidden">
            <div class="absolute inset-0 bg-grid-pattern opacity-10"></div>
            <div class="z-10 text-center px-4 rise-in">
                <div class="glitch-wrapper mb-4">
                    <h1 class="text-6xl md:text-8xl font-bold glitch-text" data-text="TAMISH MHATRE">
                        "TAMISH MHATRE"
                    </h1>
                </div>
                <h2 class="text-xl md:text-2xl text-gray-400 font-light tracking-wider mb-8">
                    "PROFESSIONAL EXCUSE-MAKER WITH A WIFI CONNECTION"
                </h2>
                <div class="flex justify-center space-x-4 mt-8">
                    <OutlineButton on_click=move |_: MouseEvent| {
                        set_deadlines.update(|n| *n += 1);
                        toasts.notify("Another deadline ignored", "You're getting really good at this.");
                    }>"DEADLINES IGNORED: " {deadlines}</OutlineButton>
                </div>
            </div>
            <div class="absolute bottom-12 text-3xl text-gray-500 animate-bounce">"⌄"</div>
            <div class="glitch-horizontal"></div>
            <div class="glitch-vertical"></div>
        </header>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section class="py-24 px-6 md:px-12 bg-zinc-900">
            <div class="max-w-4xl mx-auto fade-in">
                <SectionHeading number="01." title="WHAT'S THIS GUY'S DEAL ANYWAY?" />
                <p class="text-xl text-gray-400 leading-relaxed max-w-3xl">
                    "Just another dropout who thinks being unable to finish things is a personality trait. Currently pretending that avoiding structured education was actually \"having a game plan\""
                    <span class="text-gray-500 italic">" (narrator: it wasn't)"</span>
                    "."
                </p>
            </div>
        </section>
    }
}

#[component]
fn CurrentDelusion() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <section class="py-24 px-6 md:px-12 bg-zinc-900 relative overflow-hidden">
            <div class="glitch-horizontal opacity-20"></div>
            <div class="max-w-4xl mx-auto relative z-10">
                <div class="fade-in">
                    <SectionHeading number="03." title="CURRENT DELUSION" />
                </div>
                <div class="mt-16 fade-in">
                    <div class="flex items-center mb-8">
                        <span class="text-3xl text-gray-500 mr-4">"👟"</span>
                        <h3 class="text-4xl font-bold tracking-tighter">"SNEAKLAB"</h3>
                    </div>
                    <p class="text-xl text-gray-400 italic mb-12">
                        "Because the world definitely needed another sneaker customization platform"
                    </p>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                        <div class="border border-zinc-800 p-6 rounded-sm">
                            <h4 class="text-lg font-bold mb-4 text-gray-300">"OVERAMBITIOUS MOCKUPS"</h4>
                            <div class="aspect-video bg-zinc-900 border border-zinc-800 flex items-center justify-center">
                                <p class="text-sm text-gray-600 p-2 text-center">
                                    "[Wireframe that will change 47 times before launch]"
                                </p>
                            </div>
                        </div>
                        <div class="border border-zinc-800 p-6 rounded-sm">
                            <h4 class="text-lg font-bold mb-4 text-gray-300">"SNEAKER CUSTOMIZER"</h4>
                            <div class="aspect-video bg-zinc-900 border border-zinc-800 flex items-center justify-center">
                                <OutlineButton on_click=move |_: MouseEvent| {
                                    toasts.notify("Customizer crashed at 99%", "Just like all my projects")
                                }>"Try Customizer (Will Crash)"</OutlineButton>
                            </div>
                        </div>
                    </div>
                    <div class="mt-12 border border-zinc-800 p-6 rounded-sm">
                        <h4 class="text-lg font-bold mb-4 text-gray-300">"PROJECT TIMELINE:"</h4>
                        <div class="flex items-center">
                            {TIMELINE
                                .into_iter()
                                .enumerate()
                                .map(|(i, (stage, status))| {
                                    let class = if i + 1 < TIMELINE.len() {
                                        "w-1/4 text-center p-2 border-r border-zinc-800"
                                    } else {
                                        "w-1/4 text-center p-2"
                                    };
                                    view! {
                                        <div class=class>
                                            <p class="text-sm font-bold text-gray-300">{stage}</p>
                                            <p class="text-xs text-gray-500">{status}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn word_chips(words: &'static [&'static str], class: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {words.iter().map(|word| view! { <div class=class>{*word}</div> }).collect_view()}
        </div>
    }
}

#[component]
fn DyslexiaCorner() -> impl IntoView {
    view! {
        <section class="py-24 px-6 md:px-12 bg-black">
            <div class="max-w-4xl mx-auto">
                <div class="fade-in">
                    <SectionHeading number="04." title="THE \"DYSLEXIA MADE ME DO IT\" CORNER" />
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 mt-16 fade-in">
                    <div class="border border-zinc-800 p-6 rounded-sm">
                        <p class="text-lg text-gray-400 leading-relaxed">
                            "Can spell "
                            <span class="font-bold text-white">"\"e-commerce success\""</span>
                            " but mysteriously can't spell "
                            <span class="font-bold text-white">"\"responsibility\""</span>
                        </p>
                    </div>
                    <div class="border border-zinc-800 p-6 rounded-sm">
                        <p class="text-lg text-gray-400 leading-relaxed">
                            "Turns out attention span issues aren't actually dyslexia, just regular procrastination"
                        </p>
                    </div>
                </div>
                <div class="mt-12 border border-zinc-800 p-6 rounded-sm fade-in">
                    <div class="mb-6">
                        <h4 class="text-lg font-bold mb-4 text-gray-300">"WORDS I CAN SPELL CORRECTLY:"</h4>
                        {word_chips(&SPELLED_RIGHT, "px-3 py-1 border border-zinc-800 rounded-sm text-sm")}
                    </div>
                    <div>
                        <h4 class="text-lg font-bold mb-4 text-gray-300">"WORDS I \"CAN'T\" SPELL:"</h4>
                        {word_chips(
                            &SPELLED_WRONG,
                            "px-3 py-1 border border-zinc-700 bg-zinc-900 rounded-sm text-sm text-gray-500",
                        )}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <section class="py-24 px-6 md:px-12 bg-zinc-900">
            <div class="max-w-4xl mx-auto">
                <div class="fade-in">
                    <SectionHeading number="05." title="DON'T CONTACT ME" />
                </div>
                <div class="mt-16 text-center fade-in">
                    <div class="text-5xl text-gray-500 mb-8">"✉"</div>
                    <p class="text-xl text-gray-400 mb-4">"If you're lucky enough, I will find you."</p>
                    <p class="text-sm text-gray-500 italic mb-12">
                        "(Translation: I'm terrible at responding to emails anyway)"
                    </p>
                    <OutlineButton on_click=move |_: MouseEvent| {
                        toasts.notify("Email sent to void", "I'll get back to you... eventually")
                    }>"Send Email (I Won't Reply)"</OutlineButton>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 px-6 md:px-12 bg-black border-t border-zinc-900">
            <div class="max-w-4xl mx-auto text-center text-gray-600 text-sm">
                "© " {build_year()} " Tamish Mhatre. All excuses reserved."
            </div>
        </footer>
    }
}
