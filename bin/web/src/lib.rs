//! ReadyBag web front end.
//!
//! This crate provides the Leptos UI (routing, auth session provider,
//! route guard, pages, and shared components) and, behind the `ssr`
//! feature, the axum host that renders it and forwards `/api` calls to
//! the backend.

#![allow(non_snake_case)]

pub mod app;
pub mod browser;
pub mod components;
pub mod guard;
pub mod pages;
pub mod session;

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod proxy;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
