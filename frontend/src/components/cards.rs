use leptos::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatTone {
    #[default]
    Teal,
    Green,
    Red,
    Amber,
}

fn badge_class(tone: StatTone) -> &'static str {
    match tone {
        StatTone::Teal => "bg-teal-50 text-teal-600",
        StatTone::Green => "bg-emerald-50 text-emerald-600",
        StatTone::Red => "bg-red-50 text-red-500",
        StatTone::Amber => "bg-amber-50 text-amber-600",
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional, into)] sub: String,
    #[prop(optional)] tone: StatTone,
) -> impl IntoView {
    let sub = (!sub.is_empty()).then_some(sub);
    view! {
        <div class="bg-white rounded-xl border border-zinc-200 p-5 flex items-start justify-between">
            <div>
                <p class="text-sm text-zinc-500">{label}</p>
                <p class="mt-1 text-3xl font-bold text-zinc-900">{value}</p>
                {sub.map(|sub| view! {
                    <p class="mt-1 text-xs text-zinc-400">{sub}</p>
                })}
            </div>
            <span class=format!("h-10 w-10 rounded-lg flex items-center justify-center {}", badge_class(tone)) aria-hidden="true">
                <span class="h-2.5 w-2.5 rounded-full bg-current"></span>
            </span>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn stat_card_renders_label_value_and_sub() {
        let html = render_to_string(|| {
            view! {
                <StatCard label="Present Today" value="3" sub="of 5 employees" tone=StatTone::Green/>
            }
        });
        assert!(html.contains("Present Today"));
        assert!(html.contains(">3<"));
        assert!(html.contains("of 5 employees"));
        assert!(html.contains("text-emerald-600"));
    }
}
