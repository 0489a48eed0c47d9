use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404 Page Not Found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <a href="/" class="link-button">"Back to home"</a>
        </div>
    }
}
