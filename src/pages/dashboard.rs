//! Dashboard Page
//!
//! Workspace overview inside the dashboard shell: usage stats, recent
//! projects, and a latency chart. All figures are fixed display values.

use leptos::*;

use crate::components::DashboardLayout;
use crate::state::session::SessionState;

/// Fixed 24-hour latency series, already expressed as bar heights (%)
const LATENCY_BARS: [u32; 24] = [
    40, 65, 45, 80, 55, 30, 70, 45, 60, 50, 75, 55, 65, 40, 85, 60, 50, 70, 55, 45, 35, 60, 80, 65,
];

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");

    view! {
        <DashboardLayout>
            <div class="max-w-7xl mx-auto">
                // Welcome
                <div class="mb-8 flex justify-between items-end">
                    <div>
                        <h1 class="font-serif text-3xl text-stone-900 mb-2">
                            {move || format!("Welcome back, {}", state.display_name())}
                        </h1>
                        <p class="text-stone-500">
                            "Your research workspace is ready. Logic cores operating at 99.9% efficiency."
                        </p>
                    </div>
                    <button class="px-5 py-2.5 bg-stone-900 text-white text-sm font-bold uppercase tracking-wider
                                   rounded-lg hover:bg-stone-800 transition-all shadow-lg">
                        "⚡ New Project"
                    </button>
                </div>

                // Stats grid
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-10">
                    <StatCard title="API Calls" value="124,592" change="+12.5%" trend_up=true icon="☁" />
                    <StatCard title="Compute Hours" value="48.2h" change="Running" trend_up=false icon="⚙" />
                    <StatCard title="Knowledge Index" value="14.2 GB" change="+850 MB" trend_up=true icon="🗄" />
                    <StatCard title="Avg. Confidence" value="99.4%" change="+0.2%" trend_up=true icon="◉" />
                </div>

                // Recent projects
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-lg font-bold text-stone-800">"Recent Projects"</h2>
                    <button class="text-sm text-stone-500 hover:text-stone-900">"View All ↗"</button>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-10">
                    <ProjectCard
                        name="FinTech Risk Analysis"
                        model="GaussLM v1.2 (Safe)"
                        last_active="2 mins ago"
                        active=true
                    />
                    <ProjectCard
                        name="Semantic Search Core"
                        model="Penrose-Embed-004"
                        last_active="4 hours ago"
                        active=false
                    />
                    <ProjectCard
                        name="Legal Document Parse"
                        model="GaussLM v1.0"
                        last_active="1 day ago"
                        active=false
                    />
                </div>

                <LatencyChart />
            </div>
        </DashboardLayout>
    }
}

/// Single usage statistic card
#[component]
fn StatCard(
    title: &'static str,
    value: &'static str,
    change: &'static str,
    trend_up: bool,
    icon: &'static str,
) -> impl IntoView {
    let badge = if trend_up {
        "text-xs font-bold px-2 py-1 rounded-full bg-green-100 text-green-700"
    } else {
        "text-xs font-bold px-2 py-1 rounded-full bg-stone-100 text-stone-500"
    };

    view! {
        <div class="bg-white p-6 rounded-xl border border-stone-200 shadow-sm hover:shadow-md transition-shadow">
            <div class="flex justify-between items-start mb-4">
                <div class="p-3 bg-stone-100 rounded-lg text-stone-600">{icon}</div>
                <span class=badge>{change}</span>
            </div>
            <h3 class="text-stone-500 text-sm font-medium uppercase tracking-wide">{title}</h3>
            <p class="text-2xl font-serif text-stone-900 mt-1">{value}</p>
        </div>
    }
}

/// Single recent-project card
#[component]
fn ProjectCard(
    name: &'static str,
    model: &'static str,
    last_active: &'static str,
    active: bool,
) -> impl IntoView {
    let initial = name.chars().next().unwrap_or('?');
    let (status_class, dot_class, status) = if active {
        ("text-green-600", "bg-green-500", "Active")
    } else {
        ("text-stone-400", "bg-stone-300", "Idle")
    };

    view! {
        <div class="group bg-white border border-stone-200 rounded-xl p-5 hover:border-stone-400 transition-all cursor-pointer">
            <div class="flex justify-between items-start mb-3">
                <div class="w-10 h-10 rounded-lg bg-stone-900 text-white flex items-center justify-center font-serif text-lg">
                    {initial}
                </div>
                <button class="text-stone-400 hover:text-stone-800">"⋯"</button>
            </div>
            <h4 class="font-bold text-stone-900 mb-1">{name}</h4>
            <p class="text-xs text-stone-500 mb-4">{format!("Model: {}", model)}</p>

            <div class="flex items-center justify-between pt-4 border-t border-stone-100 text-xs">
                <span class="text-stone-400">{format!("Edited {}", last_active)}</span>
                <span class=format!("flex items-center gap-1 font-medium {}", status_class)>
                    <span class=format!("w-1.5 h-1.5 rounded-full {}", dot_class) />
                    {status}
                </span>
            </div>
        </div>
    }
}

/// CSS-only bar chart of the fixed latency series
#[component]
fn LatencyChart() -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl border border-stone-200 p-6">
            <div class="flex items-center justify-between mb-6">
                <h3 class="font-bold text-stone-800">"Inference Latency (ms)"</h3>
                <div class="flex gap-2">
                    <span class="px-3 py-1 text-xs font-bold text-white bg-stone-900 rounded-md">"24h"</span>
                    <span class="px-3 py-1 text-xs font-bold text-stone-500 bg-stone-100 hover:bg-stone-200 rounded-md cursor-pointer">"7d"</span>
                    <span class="px-3 py-1 text-xs font-bold text-stone-500 bg-stone-100 hover:bg-stone-200 rounded-md cursor-pointer">"30d"</span>
                </div>
            </div>

            <div class="h-48 flex items-end gap-2">
                {LATENCY_BARS
                    .iter()
                    .copied()
                    .map(|h| view! {
                        <div
                            class="flex-1 bg-stone-100 hover:bg-amber-500 transition-colors rounded-t-sm relative group"
                            style=format!("height: {}%", h)
                        >
                            <div class="absolute bottom-full left-1/2 -translate-x-1/2 mb-2 bg-stone-800 text-white
                                        text-[10px] px-2 py-1 rounded opacity-0 group-hover:opacity-100
                                        transition-opacity pointer-events-none whitespace-nowrap">
                                {format!("{}ms", h)}
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="mt-4 flex justify-between text-xs text-stone-400 font-mono">
                <span>"00:00"</span>
                <span>"06:00"</span>
                <span>"12:00"</span>
                <span>"18:00"</span>
                <span>"Now"</span>
            </div>
        </div>
    }
}
