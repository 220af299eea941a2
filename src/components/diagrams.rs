//! Diagram Components
//!
//! Self-contained animated diagrams for the landing page. Everything here
//! is decorative: timers cycle fixed visual states and the scatter uses
//! random positions, with no numerical model behind any of it. Timers are
//! released when the owning diagram unmounts.

use gloo_timers::callback::Interval;
use leptos::*;

/// A point in diagram space (percent coordinates)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Where the query vector sits in the projection diagram
const QUERY_CENTER: Point = Point { x: 50.0, y: 50.0 };

/// Scatter points closer than this to the query get highlighted
const NEIGHBOR_RADIUS: f64 = 30.0;

/// Scatter size generated on each mount
const SCATTER_COUNT: usize = 15;

/// Milliseconds between pipeline stage advances
const STAGE_INTERVAL_MS: u32 = 2_000;

/// Euclidean distance between two diagram points
pub fn distance(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Whether a scatter point falls inside the query neighborhood
pub fn is_neighbor(p: Point) -> bool {
    distance(p, QUERY_CENTER) < NEIGHBOR_RADIUS
}

/// How many points the active query would highlight
pub fn neighbor_count(points: &[Point]) -> usize {
    points.iter().copied().filter(|p| is_neighbor(*p)).count()
}

/// Fresh random scatter for one diagram mount
fn random_scatter(count: usize) -> Vec<Point> {
    (0..count)
        .map(|_| Point {
            x: js_sys::Math::random() * 100.0,
            y: js_sys::Math::random() * 100.0,
        })
        .collect()
}

/// Stages the pipeline diagram cycles through
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Input,
    Decomposition,
    Inversion,
    Result,
}

impl PipelineStage {
    pub const ALL: [PipelineStage; 4] = [
        PipelineStage::Input,
        PipelineStage::Decomposition,
        PipelineStage::Inversion,
        PipelineStage::Result,
    ];

    /// Next stage, wrapping back to input
    pub fn next(self) -> Self {
        match self {
            PipelineStage::Input => PipelineStage::Decomposition,
            PipelineStage::Decomposition => PipelineStage::Inversion,
            PipelineStage::Inversion => PipelineStage::Result,
            PipelineStage::Result => PipelineStage::Input,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PipelineStage::Input => "Input",
            PipelineStage::Decomposition => "Decomposition",
            PipelineStage::Inversion => "Inversion",
            PipelineStage::Result => "Result",
        }
    }

    /// Whether the solver box is lit during this stage
    fn solver_active(self) -> bool {
        matches!(self, PipelineStage::Decomposition | PipelineStage::Inversion)
    }
}

/// Benchmarks selectable in the results diagram
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Benchmark {
    Mmlu,
    HumanEval,
    Math,
}

impl Benchmark {
    pub const ALL: [Benchmark; 3] = [Benchmark::Mmlu, Benchmark::HumanEval, Benchmark::Math];

    pub fn name(self) -> &'static str {
        match self {
            Benchmark::Mmlu => "MMLU",
            Benchmark::HumanEval => "HumanEval",
            Benchmark::Math => "MATH",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Benchmark::Mmlu => "General Knowledge",
            Benchmark::HumanEval => "Code Generation",
            Benchmark::Math => "Adv. Mathematics",
        }
    }

    /// Static `(ours, competitor)` scores on a 0-100 axis
    pub fn scores(self) -> (f64, f64) {
        match self {
            Benchmark::Mmlu => (86.5, 82.3),
            Benchmark::HumanEval => (92.1, 88.4),
            Benchmark::Math => (74.8, 69.5),
        }
    }
}

/// Bar height as a percentage of the 0-100 score axis
pub fn bar_height_pct(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

/// Interactive scatter: random points, with the ones nearest the query
/// vector highlighted while the "solver" is active.
#[component]
pub fn ProjectionDiagram() -> impl IntoView {
    let (active, set_active) = create_signal(false);

    // New point set on every mount
    let points = random_scatter(SCATTER_COUNT);
    let matched = neighbor_count(&points);

    view! {
        <div class="flex flex-col items-center p-8 bg-white rounded-xl shadow-sm border border-stone-200 my-8">
            <h3 class="font-serif text-xl mb-4 text-stone-800">"Interactive: Orthogonal Projection"</h3>
            <p class="text-sm text-stone-500 mb-6 text-center max-w-md">
                "Press " <strong>"Solve Projection"</strong>
                " to project the query vector onto the knowledge subspace and light up its nearest basis vectors."
            </p>

            <div class="relative w-64 h-64 bg-[#F5F4F0] rounded-lg border border-stone-200 overflow-hidden">
                // Grid lines
                <div class="absolute inset-0 pointer-events-none opacity-10">
                    <div class="w-full h-px bg-stone-400 absolute top-1/4" />
                    <div class="w-full h-px bg-stone-400 absolute top-2/4" />
                    <div class="w-full h-px bg-stone-400 absolute top-3/4" />
                    <div class="h-full w-px bg-stone-400 absolute left-1/4" />
                    <div class="h-full w-px bg-stone-400 absolute left-2/4" />
                    <div class="h-full w-px bg-stone-400 absolute left-3/4" />
                </div>

                // Query point
                <div class=move || {
                    let base = "absolute left-1/2 top-1/2 w-4 h-4 -ml-2 -mt-2 rounded-full border-2 border-amber-500 z-20 transition-all duration-500";
                    if active.get() {
                        format!("{} bg-stone-900 scale-125", base)
                    } else {
                        format!("{} bg-white", base)
                    }
                } />

                // Pulse ring while solving
                {move || {
                    active.get().then(|| view! {
                        <div class="absolute left-1/2 top-1/2 w-16 h-16 -ml-8 -mt-8 rounded-full bg-amber-500/30 z-10 animate-ping" />
                    })
                }}

                // Scatter
                {points
                    .iter()
                    .map(|p| {
                        let near = is_neighbor(*p);
                        let style = format!("left: {:.2}%; top: {:.2}%", p.x, p.y);
                        view! {
                            <div
                                class=move || {
                                    if active.get() && near {
                                        "absolute w-2 h-2 rounded-full bg-amber-500 scale-150 transition-all duration-500"
                                    } else {
                                        "absolute w-2 h-2 rounded-full bg-stone-300 transition-all duration-500"
                                    }
                                }
                                style=style
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <button
                on:click=move |_| set_active.update(|a| *a = !*a)
                class="mt-6 px-6 py-2 bg-stone-900 text-white text-xs font-bold uppercase tracking-widest
                       rounded-full hover:bg-stone-700 transition-colors"
            >
                {move || if active.get() { "Reset Solver" } else { "Solve Projection" }}
            </button>

            <div class="mt-4 h-6 text-sm font-serif italic text-stone-600">
                {move || {
                    if active.get() {
                        format!("Minimal norm solution found. {} basis vectors matched.", matched)
                    } else {
                        "Vector space initialized.".to_string()
                    }
                }}
            </div>
        </div>
    }
}

/// Four-stage inference pipeline animation
#[component]
pub fn PipelineDiagram() -> impl IntoView {
    let (stage, set_stage) = create_signal(PipelineStage::Input);

    let ticker = Interval::new(STAGE_INTERVAL_MS, move || {
        set_stage.update(|s| *s = s.next());
    });
    on_cleanup(move || drop(ticker));

    view! {
        <div class="flex flex-col items-center p-8 bg-[#F5F4F0] rounded-xl border border-stone-200 my-8">
            <h3 class="font-serif text-xl mb-4 text-stone-900">"PINV-Optimized Pipeline"</h3>
            <p class="text-sm text-stone-600 mb-6 text-center max-w-md">
                "An inference pipeline built around analytical weight solving rather than iterative descent."
            </p>

            <div class="relative w-full max-w-lg h-56 bg-white rounded-lg shadow-inner overflow-hidden mb-6
                        border border-stone-200 flex items-center justify-center gap-4 md:gap-8 p-4">
                // Input stage
                <div class="flex flex-col items-center gap-2">
                    <div class=move || {
                        let base = "w-14 h-14 rounded-lg border-2 flex items-center justify-center text-xl transition-colors duration-500";
                        if stage.get() == PipelineStage::Input {
                            format!("{} border-amber-500 bg-amber-500/10", base)
                        } else {
                            format!("{} border-stone-200 bg-stone-50", base)
                        }
                    }>"▦"</div>
                    <span class="text-[10px] uppercase font-bold tracking-wider text-stone-500">"Matrix In"</span>
                </div>

                <span class=move || {
                    if stage.get() == PipelineStage::Input { "opacity-20" } else { "opacity-100 text-stone-800" }
                }>"→"</span>

                // Solver stage
                <div class="flex flex-col items-center gap-2">
                    <div class=move || {
                        let base = "w-20 h-20 rounded-xl border-2 flex items-center justify-center text-2xl transition-colors duration-500 relative overflow-hidden";
                        if stage.get().solver_active() {
                            format!("{} border-stone-800 bg-stone-900 text-amber-500", base)
                        } else {
                            format!("{} border-stone-200 bg-stone-50 text-stone-300", base)
                        }
                    }>
                        "⚙"
                        {move || {
                            (stage.get() == PipelineStage::Decomposition).then(|| view! {
                                <div class="absolute inset-0 bg-stone-800 flex items-center justify-center">
                                    <div class="text-[10px] font-mono text-amber-500">"INVERT"</div>
                                </div>
                            })
                        }}
                    </div>
                    <span class="text-[10px] uppercase font-bold tracking-wider text-stone-500">"PINV Solver"</span>
                </div>

                <span class=move || {
                    if stage.get() == PipelineStage::Result { "opacity-100 text-stone-800" } else { "opacity-20" }
                }>"→"</span>

                // Output stage
                <div class="flex flex-col items-center gap-2">
                    <div class=move || {
                        let base = "w-14 h-14 rounded-lg border-2 flex items-center justify-center text-xl transition-colors duration-500";
                        if stage.get() == PipelineStage::Result {
                            format!("{} border-green-500 bg-green-50 text-green-600", base)
                        } else {
                            format!("{} border-stone-200 bg-stone-50 text-stone-300", base)
                        }
                    }>
                        {move || if stage.get() == PipelineStage::Result { "⚡" } else { "○" }}
                    </div>
                    <span class="text-[10px] uppercase font-bold tracking-wider text-stone-500">"Solution"</span>
                </div>
            </div>

            // Progress pips
            <div class="flex gap-2">
                {PipelineStage::ALL
                    .iter()
                    .map(|s| {
                        let s = *s;
                        view! {
                            <div
                                class=move || {
                                    if stage.get() == s {
                                        "h-1 rounded-full transition-all duration-300 w-8 bg-amber-500"
                                    } else {
                                        "h-1 rounded-full transition-all duration-300 w-2 bg-stone-300"
                                    }
                                }
                                title=s.label()
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Benchmark comparison bars with selectable benchmark tabs
#[component]
pub fn BenchmarkDiagram() -> impl IntoView {
    let (benchmark, set_benchmark) = create_signal(Benchmark::Mmlu);

    view! {
        <div class="flex flex-col md:flex-row gap-8 items-center p-8 bg-stone-900 text-stone-100 rounded-xl my-8 border border-stone-800 shadow-lg">
            <div class="flex-1 min-w-[240px]">
                <h3 class="font-serif text-xl mb-2 text-amber-500">"Benchmark Superiority"</h3>
                <p class="text-stone-400 text-sm mb-4 leading-relaxed">
                    "Penrose models consistently outperform open weights and commercial competitors on reasoning-heavy tasks."
                </p>

                <div class="flex flex-wrap gap-2 mt-6">
                    {Benchmark::ALL
                        .iter()
                        .map(|b| {
                            let b = *b;
                            view! {
                                <button
                                    on:click=move |_| set_benchmark.set(b)
                                    class=move || {
                                        let base = "px-3 py-1.5 rounded text-xs font-medium transition-all duration-200 border";
                                        if benchmark.get() == b {
                                            format!("{} bg-amber-500 text-stone-900 border-amber-500", base)
                                        } else {
                                            format!("{} bg-transparent text-stone-400 border-stone-700 hover:border-stone-500 hover:text-stone-200", base)
                                        }
                                    }
                                >
                                    {b.name()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="mt-6 font-mono text-xs text-stone-500">
                    {move || format!("{} SCORE", benchmark.get().label().to_uppercase())}
                </div>
            </div>

            <div class="relative w-64 h-72 bg-stone-800/50 rounded-xl border border-stone-700/50 p-6 flex justify-around items-end">
                // Background grid lines
                <div class="absolute inset-0 p-6 flex flex-col justify-between pointer-events-none opacity-10">
                    <div class="w-full h-[1px] bg-stone-400" />
                    <div class="w-full h-[1px] bg-stone-400" />
                    <div class="w-full h-[1px] bg-stone-400" />
                    <div class="w-full h-[1px] bg-stone-400" />
                </div>

                <BenchmarkBar benchmark=benchmark ours=false />
                <BenchmarkBar benchmark=benchmark ours=true />
            </div>
        </div>
    }
}

/// One bar of the benchmark chart
#[component]
fn BenchmarkBar(benchmark: ReadSignal<Benchmark>, ours: bool) -> impl IntoView {
    let score = move || {
        let (our_score, comp_score) = benchmark.get().scores();
        if ours {
            our_score
        } else {
            comp_score
        }
    };

    let (bar_class, label_class, label) = if ours {
        (
            "w-full bg-amber-500 rounded-t-md shadow-[0_0_20px_rgba(245,158,11,0.25)] transition-all duration-500",
            "text-amber-500",
            "PENROSE-1",
        )
    } else {
        (
            "w-full bg-stone-600 rounded-t-md border-t border-x border-stone-500/30 transition-all duration-500",
            "text-stone-500",
            "GPT-4o",
        )
    };

    view! {
        <div class="w-20 flex flex-col justify-end items-center h-full z-10">
            <div class="flex-1 w-full flex items-end justify-center relative mb-3">
                <div class=format!(
                    "absolute -top-5 w-full text-center text-sm font-mono font-bold bg-stone-900/90 py-1 px-2 rounded {}",
                    label_class
                )>
                    {move || format!("{:.1}%", score())}
                </div>
                <div
                    class=bar_class
                    style=move || format!("height: {:.1}%", bar_height_pct(score()))
                />
            </div>
            <div class=format!("h-6 flex items-center text-xs font-bold uppercase tracking-wider {}", label_class)>
                {label}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point { x: 0.0, y: 0.0 };
        let b = Point { x: 3.0, y: 4.0 };
        assert_eq!(distance(a, b), 5.0);
        assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn test_neighbor_classification() {
        // Dead center is trivially inside the neighborhood
        assert!(is_neighbor(QUERY_CENTER));
        assert!(is_neighbor(Point { x: 60.0, y: 60.0 }));
        assert!(!is_neighbor(Point { x: 0.0, y: 0.0 }));
        // Exactly on the radius is not a neighbor
        assert!(!is_neighbor(Point { x: 80.0, y: 50.0 }));
    }

    #[test]
    fn test_neighbor_count_degenerate_sets() {
        // Empty and single-point sets must not panic
        assert_eq!(neighbor_count(&[]), 0);
        assert_eq!(neighbor_count(&[QUERY_CENTER]), 1);

        // All points stacked on one spot
        let stacked = vec![Point { x: 50.0, y: 50.0 }; 10];
        assert_eq!(neighbor_count(&stacked), 10);
    }

    #[test]
    fn test_pipeline_stage_cycle() {
        let mut stage = PipelineStage::Input;
        for expected in [
            PipelineStage::Decomposition,
            PipelineStage::Inversion,
            PipelineStage::Result,
            PipelineStage::Input,
        ] {
            stage = stage.next();
            assert_eq!(stage, expected);
        }
    }

    #[test]
    fn test_benchmark_scores_fit_axis() {
        for b in Benchmark::ALL {
            let (ours, comp) = b.scores();
            assert!((0.0..=100.0).contains(&ours));
            assert!((0.0..=100.0).contains(&comp));
        }
    }

    #[test]
    fn test_bar_height_clamps() {
        assert_eq!(bar_height_pct(86.5), 86.5);
        assert_eq!(bar_height_pct(-5.0), 0.0);
        assert_eq!(bar_height_pct(250.0), 100.0);
    }
}
