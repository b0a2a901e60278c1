//! The dashboard, the landing page of every tenant.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::{header, icons};
use crate::pages::Page;
use crate::tenant::use_tenant;

/// Renders the dashboard with one shortcut card per other page.
pub fn component() -> impl IntoView {
    let tenant = use_tenant();

    let cards = move || {
        Page::ALL
            .into_iter()
            .filter(|page| *page != Page::Dashboard)
            .map(|page| {
                let href = tenant.with(|tenant| tenant.resolve(page.name()));
                view! {
                    <A href=href>
                        <div class="flex flex-row gap-3 items-center p-6 rounded-lg transition-all duration-500 bg-[#2a2a2a] hover:text-[#ffef5c]">
                            {icons::component(page.icon(), "size-8")}
                            <span class="text-xl font-semibold">{page.title()}</span>
                        </div>
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <Title text=Page::Dashboard.title()/>
        {header::component(Page::Dashboard, tenant)}
        <section class="grid grid-cols-1 gap-6 mt-16 md:grid-cols-3">{cards}</section>
    }
}
