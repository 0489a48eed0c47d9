use leptos::prelude::*;
use readybag_session::AUTH_ENTRY_PATH;

/// Notice for guests: saved data lives only in this browser.
#[component]
pub fn NonMemberInfo() -> impl IntoView {
    view! {
        <section class="non-member-info">
            <h3>
                <span class="icon-info" aria-hidden="true"></span>
                "Using ReadyBag as a guest"
            </h3>
            <p>
                "You can browse products and save favorites without an account. "
                "Saved items may be lost if you switch devices or clear browser data."
            </p>
            <div class="non-member-actions">
                <a href=AUTH_ENTRY_PATH class="link-button">"Sign in"</a>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn links_to_the_auth_page() {
        let html = view! { <NonMemberInfo/> }.to_html();
        assert!(html.contains(r#"href="/auth""#));
    }
}
