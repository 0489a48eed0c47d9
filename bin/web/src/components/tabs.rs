//! Static tab rows above the product list.

use leptos::prelude::*;

/// Two-button tab row: exchange rate and filter.
#[component]
pub fn CustomTabs() -> impl IntoView {
    view! {
        <div class="tabs">
            <div class="tabs-grid">
                <button type="button" class="tab">"Exchange rate"</button>
                <button type="button" class="tab">"Filter"</button>
            </div>
        </div>
    }
}

/// Exchange rate / filter toggle row with the filter icon.
#[component]
pub fn ExchangeFilterTabs() -> impl IntoView {
    view! {
        <div class="tabs">
            <div class="tabs-grid">
                <button type="button" class="tab tab-animated">"Exchange rate"</button>
                <button type="button" class="tab tab-animated tab-icon" aria-label="Filter">
                    <span class="icon-filter" aria-hidden="true"></span>
                    "Filter"
                </button>
            </div>
        </div>
    }
}
