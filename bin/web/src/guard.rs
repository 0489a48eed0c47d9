//! The route guard component.

use crate::components::Loader;
use crate::session::use_auth;
use leptos::prelude::*;
use leptos_router::components::Redirect;
use readybag_session::{GuardOutcome, RouteSpec};

/// Wraps a route's view and decides, reactively, whether to show it.
///
/// While the identity check is pending a [`Loader`] is shown. When
/// `require_auth` is set and nobody is signed in, the browser is sent to
/// the auth page. Otherwise the children render.
///
/// ```ignore
/// <Route path=path!("/") view=|| view! {
///     <RouteGuard path="/"><HomePage/></RouteGuard>
/// }/>
/// ```
#[component]
pub fn RouteGuard(
    #[prop(into)] path: String,
    #[prop(optional)] require_auth: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let spec = RouteSpec::new(path, children).require_auth(require_auth);

    move || match spec.evaluate(&auth) {
        GuardOutcome::Loading { path } => view! { <Loader route=path.to_string()/> }.into_any(),
        GuardOutcome::Redirect { to, .. } => view! { <Redirect path=to/> }.into_any(),
        GuardOutcome::Allowed { view: children, .. } => children(),
    }
}
