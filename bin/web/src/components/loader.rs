use leptos::prelude::*;

/// Centered spinner shown while a route waits on the identity check.
#[component]
pub fn Loader(#[prop(into, optional)] route: String) -> impl IntoView {
    view! {
        <div class="loader" data-route=route role="status" aria-live="polite">
            <span class="spinner" aria-hidden="true"></span>
            <span class="visually-hidden">"Loading..."</span>
        </div>
    }
}
