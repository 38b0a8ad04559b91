use leptos::*;
use leptos_router::A;

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-50">
            <header class="bg-white border-b border-zinc-200 sticky top-0 z-50">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center justify-between h-14">
                        <A href="/" class="flex items-center gap-2">
                            <span class="font-bold text-zinc-900 text-base">
                                "HRMS " <span class="text-brand-600">"Lite"</span>
                            </span>
                        </A>
                        <nav class="flex items-center gap-1" aria-label="Main">
                            <NavItem href="/" label="Dashboard" exact=true/>
                            <NavItem href="/employees" label="Employees"/>
                            <NavItem href="/attendance" label="Attendance"/>
                        </nav>
                    </div>
                </div>
            </header>
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">{children()}</main>
        </div>
    }
}

#[component]
fn NavItem(
    href: &'static str,
    label: &'static str,
    #[prop(optional)] exact: bool,
) -> impl IntoView {
    // Active styling keys off the aria-current attribute the router sets.
    view! {
        <A
            href=href
            exact=exact
            class="px-3 py-2 rounded-lg text-sm font-medium text-zinc-600 hover:text-zinc-900 hover:bg-zinc-100 aria-[current=page]:bg-brand-50 aria-[current=page]:text-brand-700"
        >
            {label}
        </A>
    }
}
