//! The business profile page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::header;
use crate::pages::Page;
use crate::tenant::use_tenant;

pub fn component() -> impl IntoView {
    let tenant = use_tenant();
    let business = move || {
        tenant.with(|tenant| tenant.path_prefix().map_or_else(|| "Your primary business".to_owned(), str::to_owned))
    };

    view! {
        <Title text=Page::BusinessProfile.title()/>
        {header::component(Page::BusinessProfile, tenant)}
        <section class="flex flex-col gap-4 mt-16">
            <h2 class="text-3xl font-bold text-[#ffef5c]">{business}</h2>
            <p class="text-gray-300">"Contact details, opening hours and branding for this business."</p>
        </section>
    }
}
