use crate::components::icons::{self, AppIcon};
use crate::pages::Page;
use leptos::prelude::*;
use leptos_router::components::A;
use shared_utils::TenantContext;

const LINK: &str = "text-base font-bold transition-all duration-500 sm:text-lg hover:text-[#ffef5c]";
const ACTIVE_LINK: &str = "text-base font-bold transition-all duration-500 sm:text-lg text-[#ffef5c]";

/// Navigation entries for `tenant`, each paired with its resolved path.
#[must_use]
pub fn nav_links(tenant: &TenantContext) -> Vec<(Page, String)> {
    Page::ALL
        .into_iter()
        .map(|page| (page, tenant.resolve(page.name())))
        .collect()
}

/// Label of the business badge next to the brand.
#[must_use]
pub fn tenant_label(tenant: &TenantContext) -> String {
    tenant
        .path_prefix()
        .map_or_else(|| "Primary business".to_owned(), |id| format!("Business {id}"))
}

pub fn component(page: Page, tenant: Memo<TenantContext>) -> impl IntoView {
    let links = move || {
        tenant
            .with(nav_links)
            .into_iter()
            .map(|(target, href)| {
                let class = if target == page { ACTIVE_LINK } else { LINK };
                view! {
                    <div class=class>
                        <A href=href>
                            <span class="flex flex-row gap-2 items-center">
                                {icons::component(target.icon(), "size-5")}
                                {target.title()}
                            </span>
                        </A>
                    </div>
                }
            })
            .collect_view()
    };
    let home = move || tenant.with(|tenant| tenant.resolve(Page::Dashboard.name()));

    view! {
        <header class="fixed top-0 right-0 left-0 z-10 py-6 px-4 md:px-6 bg-[#1e1e1e]/80 backdrop-blur-md">
            <div class="container mx-auto max-w-5xl">
                <div class="flex flex-row justify-between items-center text-white">
                    <div class="flex flex-row gap-3 items-center">
                        <div class="text-lg font-bold transition-all duration-500 sm:text-3xl hover:text-[#ffef5c]">
                            <A href=home>"portal"</A>
                        </div>
                        <span class="py-1 px-2 text-xs rounded-full bg-white/10">
                            {move || tenant.with(tenant_label)}
                        </span>
                    </div>
                    <nav class="hidden flex-row gap-4 md:flex">{links}</nav>
                </div>
                <div class="flex flex-row gap-2 items-center mt-4 text-gray-300">
                    <A href=home>{icons::component(AppIcon::Back, "size-4")}</A>
                    <h1 class="text-2xl font-semibold text-white">{page.title()}</h1>
                </div>
            </div>
        </header>
    }
}
