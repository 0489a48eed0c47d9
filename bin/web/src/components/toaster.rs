use crate::session::{NoticeVariant, use_auth};
use leptos::prelude::*;

/// Shows the latest auth notice until dismissed.
#[component]
pub fn Toaster() -> impl IntoView {
    let auth = use_auth();

    move || {
        auth.notice().map(|notice| {
            let destructive = notice.variant == NoticeVariant::Destructive;
            view! {
                <div class="toast" class:destructive=destructive role="alert">
                    <div class="toast-body">
                        <strong>{notice.title}</strong>
                        {notice.description.map(|d| view! { <p>{d}</p> })}
                    </div>
                    <button
                        type="button"
                        class="toast-close"
                        aria-label="Dismiss"
                        on:click=move |_| auth.dismiss_notice()
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
