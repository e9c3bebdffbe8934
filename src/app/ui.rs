use leptos::{ev::MouseEvent, prelude::*};

const OUTLINE_BUTTON: &str = "px-4 py-2 border border-zinc-800 rounded-sm text-gray-400 hover:text-white hover:border-zinc-700 transition-colors";

#[component]
pub fn OutlineButton(#[prop(into)] on_click: Callback<MouseEvent>, children: Children) -> impl IntoView {
    view! {
        <button class=OUTLINE_BUTTON on:click=move |e| on_click.run(e)>
            {children()}
        </button>
    }
}

#[component]
pub fn ProgressBar(
    #[prop(into)] value: Signal<f64>,
    #[prop(optional, into)] size: String,
) -> impl IntoView {
    view! {
        <div
            class=format!("relative overflow-hidden rounded-full bg-zinc-800 {size}")
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || value.get().to_string()
        >
            <div
                class="h-full bg-white transition-all"
                style:width=move || format!("{}%", value.get().clamp(0.0, 100.0))
            ></div>
        </div>
    }
}

#[component]
pub fn Separator() -> impl IntoView {
    view! { <div class="h-px w-full my-4 bg-zinc-800" role="separator"></div> }
}

/// Numbered section title with an underline accent.
#[component]
pub fn SectionHeading(number: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <h2 class="text-3xl font-bold mb-12 inline-block relative">
            <span class="text-gray-500 font-mono text-sm absolute -top-6 left-0">{number}</span>
            {title}
            <div class="h-px w-24 bg-gray-700 absolute -bottom-4 left-0"></div>
        </h2>
    }
}
