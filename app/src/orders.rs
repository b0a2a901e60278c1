//! The order history page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::header;
use crate::pages::Page;
use crate::tenant::use_tenant;

pub fn component() -> impl IntoView {
    let tenant = use_tenant();

    view! {
        <Title text=Page::OrderHistory.title()/>
        {header::component(Page::OrderHistory, tenant)}
        <section class="flex flex-col gap-4 mt-16">
            <p class="text-gray-300">"No orders have been placed yet."</p>
        </section>
    }
}
