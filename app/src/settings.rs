//! This module defines the settings page.
//!
//! Besides the settings themselves it hosts the business switcher: a modal in
//! which the user types a business id and follows a link to that business's
//! settings.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use shared_utils::TenantContext;

use crate::components::{header, modal};
use crate::pages::Page;
use crate::tenant::{BusinessIdError, use_tenant, validate_business_id};

/// Path of `page` for the business typed into the switcher.
///
/// Surrounding whitespace is ignored; an empty id switches to the primary
/// business. Ids that cannot form a single path segment are rejected.
pub fn switch_target(business_id: &str, page: Page) -> Result<String, BusinessIdError> {
    let business_id = validate_business_id(business_id.trim())?;
    let tenant = if business_id.is_empty() {
        TenantContext::primary()
    } else {
        TenantContext::for_business(business_id)
    };
    Ok(tenant.resolve(page.name()))
}

pub fn component() -> impl IntoView {
    let tenant = use_tenant();
    let switcher_open = RwSignal::new(false);
    let target = RwSignal::new(String::new());

    let switcher = move || {
        let target_path = move || target.with(|id| switch_target(id, Page::Settings));
        let switch_link = move || match target_path() {
            Ok(href) => view! {
                <div
                    class="self-end py-2 px-4 font-semibold rounded-lg text-[#1e1e1e] bg-[#ffef5c]"
                    on:click=move |_| modal::dismiss(switcher_open)
                >
                    <A href=href>"Switch"</A>
                </div>
            }
            .into_any(),
            Err(error) => view! {
                <div class="flex flex-row gap-4 justify-between items-center">
                    <p class="text-sm text-red-400">{error.to_string()}</p>
                    <span
                        aria-disabled="true"
                        class="py-2 px-4 font-semibold rounded-lg opacity-50 cursor-not-allowed text-[#1e1e1e] bg-[#ffef5c]"
                    >
                        "Switch"
                    </span>
                </div>
            }
            .into_any(),
        };

        view! {
            <div class="flex flex-col gap-4">
                <input
                    id="business_id"
                    name="business_id"
                    placeholder="Business id (empty for primary)"
                    type="text"
                    prop:value=move || target.get()
                    on:input=move |ev| target.set(event_target_value(&ev))
                    class="py-3 px-4 w-full placeholder-gray-400 text-white transition-shadow focus:ring-2 focus:outline-none bg-[#1e1e1e] focus:ring-[#ffef5c]"
                />
                {switch_link}
            </div>
        }
    };

    view! {
        <Title text=Page::Settings.title()/>
        {header::component(Page::Settings, tenant)}
        <section class="flex flex-col gap-6 mt-16">
            <div class="flex flex-row justify-between items-center p-6 rounded-lg bg-[#2a2a2a]">
                <div>
                    <h2 class="text-xl font-semibold">"Business"</h2>
                    <p class="text-gray-300">
                        {move || tenant.with(header::tenant_label)}
                    </p>
                </div>
                <button
                    type="button"
                    class="py-2 px-4 rounded-lg transition-all duration-500 hover:text-[#ffef5c] bg-[#1e1e1e]"
                    on:click=move |_| switcher_open.set(true)
                >
                    "Switch business"
                </button>
            </div>
        </section>
        {modal::component(switcher_open, "Switch business", switcher)}
    }
}
