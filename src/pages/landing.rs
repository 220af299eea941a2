//! Landing Page
//!
//! Marketing front page: hero, methodology, science, architecture,
//! results, impact, and the partnership contact form. Reads the session
//! holder only to decide where its calls-to-action lead.

use leptos::*;
use leptos_router::*;

use crate::components::{
    BenchmarkDiagram, ContactForm, HeroScene, MatrixStackScene, PipelineDiagram, ProjectionDiagram,
};
use crate::state::session::SessionState;

/// Scroll offset (px) after which the fixed nav condenses
const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Landing page component
#[component]
pub fn Landing() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");
    let (scrolled, set_scrolled) = create_signal(false);
    let (menu_open, set_menu_open) = create_signal(false);

    // Condense the nav once the page scrolls; the listener dies with the view
    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or(0.0);
        set_scrolled.set(y > NAV_SCROLL_THRESHOLD);
    });
    on_cleanup(move || scroll_handle.remove());

    let goto_section = move |id: &'static str| {
        move |_| {
            set_menu_open.set(false);
            scroll_to_section(id);
        }
    };

    view! {
        <div class="min-h-screen bg-[#F9F8F4] text-stone-800">
            // Fixed navigation
            <nav class=move || {
                let base = "fixed top-0 left-0 right-0 z-50 transition-all duration-300";
                if scrolled.get() {
                    format!("{} bg-[#F9F8F4]/90 backdrop-blur-md shadow-sm py-4", base)
                } else {
                    format!("{} bg-transparent py-6", base)
                }
            }>
                <div class="container mx-auto px-6 flex justify-between items-center">
                    // Brand
                    <button class="flex items-center gap-3" on:click=move |_| scroll_to_top()>
                        <span class="w-9 h-9 bg-stone-900 text-white rounded-md flex items-center justify-center font-serif font-bold text-xl">
                            "P"
                        </span>
                        <span class="font-serif font-medium text-lg tracking-wide text-stone-900">"PENROSE"</span>
                    </button>

                    // Desktop links
                    <div class="hidden md:flex items-center gap-8 text-sm font-medium tracking-wide text-stone-600">
                        <ProductsDropdown />

                        <button on:click=goto_section("science") class="hover:text-stone-900 transition-colors uppercase">
                            "Solutions"
                        </button>
                        <button on:click=goto_section("impact") class="hover:text-stone-900 transition-colors uppercase">
                            "Enterprise"
                        </button>
                        <button on:click=goto_section("contact") class="hover:text-stone-900 transition-colors uppercase">
                            "Contact"
                        </button>

                        <div class="ml-4 flex items-center gap-4">
                            {
                                let state = state.clone();
                                move || {
                                    state.is_authenticated().then(|| view! {
                                        <A
                                            href="/dashboard"
                                            class="hidden lg:flex items-center gap-2 px-4 py-2 bg-stone-100 text-stone-600
                                                   text-xs font-bold uppercase tracking-widest rounded-full hover:bg-stone-200 transition-all"
                                        >
                                            "▦ Dash"
                                        </A>
                                    })
                                }
                            }
                            <A
                                href="/login"
                                class="px-5 py-2 border border-stone-300 bg-transparent hover:bg-stone-100 text-stone-600
                                       text-xs font-bold uppercase tracking-widest rounded-full transition-all"
                            >
                                "Login"
                            </A>
                            <A
                                href="/signup"
                                class="px-5 py-2 bg-stone-900 text-white text-xs font-bold uppercase tracking-widest
                                       rounded-full hover:bg-stone-800 transition-all shadow-md hover:shadow-lg"
                            >
                                "Sign Up"
                            </A>
                        </div>
                    </div>

                    // Mobile menu toggle
                    <button
                        class="md:hidden text-stone-900 p-2 text-xl"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </nav>

            // Mobile menu overlay
            {
                let state = state.clone();
                move || {
                    menu_open.get().then(|| view! {
                        <MobileMenu
                            authenticated=state.is_authenticated()
                            on_section=move |id| {
                                set_menu_open.set(false);
                                scroll_to_section(id);
                            }
                        />
                    })
                }
            }

            // Hero
            <header class="relative h-screen flex items-center justify-center overflow-hidden">
                <HeroScene />

                // Radial wash over the scene
                <div class="absolute inset-0 z-0 pointer-events-none bg-[radial-gradient(circle_at_center,rgba(249,248,244,0.92)_0%,rgba(249,248,244,0.6)_50%,rgba(249,248,244,0.3)_100%)]" />

                <FloatingMath />

                <div class="relative z-10 container mx-auto px-6 text-center">
                    <div class="inline-block mb-4 px-3 py-1 border border-amber-500 text-amber-600 text-xs tracking-[0.2em]
                                uppercase font-bold rounded-full backdrop-blur-sm bg-white/30">
                        "Next Gen • Q1 2026"
                    </div>
                    <h1 class="font-serif text-5xl md:text-7xl lg:text-9xl font-medium leading-tight md:leading-[0.9] mb-8 text-stone-900 drop-shadow-sm">
                        "PENROSE"
                    </h1>
                    <p class="max-w-2xl mx-auto text-lg md:text-xl text-stone-700 font-light leading-relaxed mb-12">
                        "A new class of foundational models leveraging the " <strong>"pseudoinverse"</strong>
                        " for analytical learning, instant adaptation, and zero-shot accuracy."
                    </p>

                    <div class="flex flex-col items-center gap-10 justify-center">
                        <GetStartedButton />

                        <button
                            on:click=goto_section("introduction")
                            class="group flex flex-col items-center gap-2 text-sm font-medium text-stone-500 hover:text-stone-900 transition-colors"
                        >
                            <span>"EXPLORE THE MATH"</span>
                            <span class="p-2 border border-stone-300 rounded-full group-hover:border-stone-900 transition-colors bg-white/50">
                                "↓"
                            </span>
                        </button>
                    </div>
                </div>
            </header>

            <main>
                <IntroSection />
                <ScienceSection />
                <ArchitectureSection />
                <ResultsSection />
                <ImpactSection />

                // Contact
                <section id="contact" class="py-24 bg-[#F5F4F0] border-t border-stone-300 scroll-mt-24">
                    <div class="container mx-auto px-6">
                        <ContactForm />
                    </div>
                </section>
            </main>

            <SiteFooter />
        </div>
    }
}

/// Primary CTA: straight to the dashboard when signed in, else signup
#[component]
fn GetStartedButton() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");
    let navigate = use_navigate();

    let on_click = move |_| {
        if state.session.get_untracked().is_some() {
            navigate("/dashboard", Default::default());
        } else {
            navigate("/signup", Default::default());
        }
    };

    view! {
        <button
            on:click=on_click
            class="px-10 py-4 bg-stone-900 text-white text-xs font-bold uppercase tracking-widest rounded-full
                   hover:bg-stone-800 transition-all shadow-lg hover:shadow-xl hover:-translate-y-1"
        >
            "Get Started"
        </button>
    }
}

/// Hover dropdown listing the product family
#[component]
fn ProductsDropdown() -> impl IntoView {
    view! {
        <div class="relative group">
            <button class="flex items-center gap-1 hover:text-stone-900 transition-colors uppercase focus:outline-none py-2">
                "Products" <span class="text-[10px] group-hover:rotate-180 transition-transform duration-200">"▼"</span>
            </button>
            <div class="absolute top-full left-0 mt-0 w-56 bg-white border border-stone-200 shadow-xl rounded-sm py-1
                        opacity-0 invisible group-hover:opacity-100 group-hover:visible transition-all duration-200
                        translate-y-2 group-hover:translate-y-0">
                // Hover bridge between trigger and panel
                <div class="w-full h-2 absolute -top-2 left-0 bg-transparent" />
                <a
                    href="https://gausslm.penrose-ai.com/"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="block px-4 py-3 text-sm text-stone-600 hover:bg-stone-100 hover:text-stone-900
                           transition-colors border-b border-stone-100 text-left"
                >
                    "GaussLM v1"
                </a>
                <a
                    href="https://embed.penrose-ai.com/"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="block px-4 py-3 text-sm text-stone-600 hover:bg-stone-100 hover:text-stone-900 transition-colors text-left"
                >
                    "Penrose Embed"
                </a>
            </div>
        </div>
    }
}

/// Full-screen mobile navigation overlay
#[component]
fn MobileMenu(authenticated: bool, on_section: impl Fn(&'static str) + Copy + 'static) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-40 bg-[#F9F8F4] flex flex-col items-center justify-center gap-6 text-xl font-serif animate-fade-in">
            <div class="flex flex-col items-center gap-4 pb-4 border-b border-stone-300 w-56">
                <span class="text-stone-400 text-sm uppercase tracking-widest font-sans font-bold">"Products"</span>
                <a href="https://gausslm.penrose-ai.com/" target="_blank" rel="noopener noreferrer" class="hover:text-stone-900 transition-colors">
                    "GaussLM v1"
                </a>
                <a href="https://embed.penrose-ai.com/" target="_blank" rel="noopener noreferrer" class="hover:text-stone-900 transition-colors">
                    "Penrose Embed"
                </a>
            </div>

            <button on:click=move |_| on_section("science") class="hover:text-stone-900 transition-colors uppercase">
                "Solutions"
            </button>
            <button on:click=move |_| on_section("impact") class="hover:text-stone-900 transition-colors uppercase">
                "Enterprise"
            </button>
            <button on:click=move |_| on_section("contact") class="hover:text-stone-900 transition-colors uppercase">
                "Contact"
            </button>

            <div class="flex flex-col gap-4 mt-4 w-48">
                {authenticated.then(|| view! {
                    <A
                        href="/dashboard"
                        class="w-full px-5 py-3 bg-stone-900 text-white text-xs font-bold uppercase tracking-widest
                               rounded-full hover:bg-stone-800 transition-all shadow-md text-center"
                    >
                        "Go to Dashboard"
                    </A>
                })}
                <A
                    href="/login"
                    class="w-full px-5 py-3 border border-stone-300 bg-transparent hover:bg-white text-stone-800
                           text-xs font-bold uppercase tracking-widest rounded-full transition-all text-center"
                >
                    "Login"
                </A>
                <A
                    href="/signup"
                    class="w-full px-5 py-3 bg-stone-900 text-white text-xs font-bold uppercase tracking-widest
                           rounded-full hover:bg-stone-800 transition-all shadow-md text-center"
                >
                    "Sign Up"
                </A>
            </div>
        </div>
    }
}

/// Floating matrix annotations over the hero scene
#[component]
fn FloatingMath() -> impl IntoView {
    view! {
        <div class="absolute inset-0 z-[5] pointer-events-none overflow-hidden">
            <div class="absolute top-[15%] left-[8%] font-mono text-sm md:text-base text-stone-400/60 flex flex-col gap-1 animate-float">
                <span>"[ 0.577, 0.816 ]"</span>
                <span>"[ 1.732, 0.289 ]"</span>
                <span>"[ 0.500, 0.866 ]"</span>
            </div>
            <div class="absolute top-[20%] right-[10%] font-mono text-sm md:text-base text-stone-400/50 flex flex-col gap-1 animate-float-slow">
                <span>"A⁺ = (AᵀA)⁻¹Aᵀ"</span>
                <span>"[ 0.923, 0.384 ]"</span>
                <span>"[ 0.141, 0.990 ]"</span>
            </div>
            <div class="absolute bottom-[25%] left-[5%] font-mono text-sm md:text-base text-stone-400/40 flex flex-col gap-1 animate-float-fast">
                <span>"[ 0.309, 0.951 ]"</span>
                <span>"[ 0.809, 0.588 ]"</span>
                <span>"min‖Ax−b‖₂"</span>
            </div>
            <div class="absolute bottom-[20%] right-[8%] font-mono text-sm md:text-base text-stone-400/50 flex flex-col gap-1 animate-float">
                <span>"[ 0.707, 0.707 ]"</span>
                <span>"[ 0.447, 0.894 ]"</span>
                <span>"[ 0.832, 0.555 ]"</span>
            </div>
            <div class="absolute top-[45%] left-[3%] font-mono text-xs text-stone-400/30 animate-float-slow">
                <span>"x = A⁺b"</span>
            </div>
            <div class="absolute top-[40%] right-[3%] font-mono text-xs text-stone-400/30 animate-float-fast">
                <span>"Σᵢ wᵢxᵢ"</span>
            </div>
        </div>
    }
}

#[component]
fn IntroSection() -> impl IntoView {
    view! {
        <section id="introduction" class="py-24 bg-white scroll-mt-24">
            <div class="container mx-auto px-6 md:px-12 grid grid-cols-1 md:grid-cols-12 gap-12 items-start">
                <div class="md:col-span-4">
                    <div class="inline-block mb-3 text-xs font-bold tracking-widest text-stone-500 uppercase">
                        "Our Methodology"
                    </div>
                    <h2 class="font-serif text-4xl mb-6 leading-tight text-stone-900">"Deterministic Learning"</h2>
                    <div class="w-16 h-1 bg-amber-500 mb-6" />
                </div>
                <div class="md:col-span-8 text-lg text-stone-600 leading-relaxed space-y-6">
                    <p>
                        "The era of black-box approximation is over. Standard LLMs lean on iterative stochastic
                        gradient descent and routinely settle into suboptimal local minima."
                    </p>
                    <p>
                        "Penrose AI pioneers pseudo-inverse (PINV) methods that compute optimal model states
                        directly. Solving for weights analytically guarantees the lowest possible error norm on
                        targeted reasoning tasks, removing the randomness baked into conventional training."
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ScienceSection() -> impl IntoView {
    view! {
        <section id="science" class="py-24 bg-stone-900 text-stone-100 overflow-hidden relative scroll-mt-24">
            // Soft glow blobs
            <div class="absolute top-0 left-0 w-full h-full opacity-10 pointer-events-none">
                <div class="w-96 h-96 rounded-full bg-stone-600 blur-[100px] absolute top-[-100px] left-[-100px]" />
                <div class="w-96 h-96 rounded-full bg-amber-500 blur-[100px] absolute bottom-[-100px] right-[-100px]" />
            </div>

            <div class="container mx-auto px-6 relative z-10">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-16 items-center">
                    <div>
                        <div class="inline-flex items-center gap-2 px-3 py-1 bg-stone-800 text-amber-500 text-xs font-bold
                                    tracking-widest uppercase rounded-full mb-6 border border-stone-700">
                            "The Core"
                        </div>
                        <h2 class="font-serif text-4xl md:text-5xl mb-6 text-white">"Pseudo-Inverse Projection"</h2>
                        <p class="text-lg text-stone-400 mb-6 leading-relaxed">
                            "Traditional vector search is fuzzy and approximate. Penrose projects complex queries
                            onto an orthogonal basis of verified knowledge using pseudo-inverse matrix operations."
                        </p>
                        <p class="text-lg text-stone-400 mb-6 leading-relaxed">
                            "The least-squares formulation minimizes the error distance in a single computational
                            step, so retrieval is mathematically optimal rather than merely statistically likely."
                        </p>
                    </div>
                    <div>
                        <ProjectionDiagram />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ArchitectureSection() -> impl IntoView {
    view! {
        <section class="py-24 bg-white border-t border-stone-100">
            <div class="container mx-auto px-6">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-16 items-center">
                    <div class="order-2 lg:order-1">
                        <PipelineDiagram />
                    </div>
                    <div class="order-1 lg:order-2">
                        <div class="inline-flex items-center gap-2 px-3 py-1 bg-stone-100 text-stone-600 text-xs font-bold
                                    tracking-widest uppercase rounded-full mb-6 border border-stone-200">
                            "The Innovation"
                        </div>
                        <h2 class="font-serif text-4xl md:text-5xl mb-6 text-stone-900">"Direct Weight Resolution"</h2>
                        <p class="text-lg text-stone-600 mb-6 leading-relaxed">
                            "Standard models learn slowly across millions of iterations. Penrose solvers calculate
                            specific adaptation layers instantly, in a single pass."
                        </p>
                        <p class="text-lg text-stone-600 leading-relaxed">
                            "That enables true one-shot learning: the model adapts to your enterprise data in real
                            time by solving the inverse problem analytically, without the catastrophic forgetting
                            that haunts gradient-based fine-tuning."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ResultsSection() -> impl IntoView {
    view! {
        <section class="py-24 bg-[#F9F8F4]">
            <div class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto text-center mb-12">
                    <h2 class="font-serif text-4xl md:text-5xl mb-6 text-stone-900">"Calculated Superiority"</h2>
                    <p class="text-lg text-stone-600 leading-relaxed">
                        "Replacing approximation with analytical solutions lifts precision on logic and reasoning
                        tasks. The data speaks for itself."
                    </p>
                </div>
                <div class="max-w-3xl mx-auto">
                    <BenchmarkDiagram />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ImpactSection() -> impl IntoView {
    view! {
        <section id="impact" class="py-24 bg-white border-t border-stone-200 scroll-mt-24">
            <div class="container mx-auto px-6 grid grid-cols-1 md:grid-cols-12 gap-12">
                <div class="md:col-span-5 relative">
                    <div class="aspect-square bg-[#F5F4F0] rounded-xl overflow-hidden relative border border-stone-200 shadow-inner">
                        <MatrixStackScene />
                        <div class="absolute bottom-4 left-0 right-0 text-center text-xs text-stone-400 font-serif italic">
                            "Visualization of the PINV neural core"
                        </div>
                    </div>
                </div>
                <div class="md:col-span-7 flex flex-col justify-center">
                    <div class="inline-block mb-3 text-xs font-bold tracking-widest text-stone-500 uppercase">"Impact"</div>
                    <h2 class="font-serif text-4xl mb-6 text-stone-900">"Enterprise Reliability"</h2>
                    <p class="text-lg text-stone-600 mb-6 leading-relaxed">
                        "In business, a wrong answer is worse than no answer. Penrose ships with confidence scoring
                        derived from the condition number of the inverted matrices."
                    </p>
                    <p class="text-lg text-stone-600 mb-8 leading-relaxed">
                        "Every generation carries a mathematical certainty metric, so developers can set rigorous
                        thresholds for automated decisions in regulated industries."
                    </p>

                    <div class="p-6 bg-[#F9F8F4] border border-stone-200 rounded-lg border-l-4 border-l-amber-500">
                        <p class="font-serif italic text-xl text-stone-800 mb-4">
                            "\"Penrose marks the shift from probabilistic guessing to verified reasoning. The
                            pseudo-inverse approach makes it the first model we trust near production code.\""
                        </p>
                        <span class="text-sm font-bold text-stone-500 tracking-wider uppercase">
                            "— CTO, Global FinTech Alliance"
                        </span>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="bg-stone-900 text-stone-400 py-16">
            <div class="container mx-auto px-6 flex flex-col md:flex-row justify-between items-center gap-8">
                <div class="text-center md:text-left">
                    <div class="text-white font-serif font-bold text-2xl mb-2">"Penrose AI"</div>
                    <p class="text-sm">"Foundational intelligence for the future."</p>
                </div>

                // Social links
                <div class="flex gap-6">
                    <a href="#" class="w-10 h-10 rounded-full bg-stone-800 flex items-center justify-center
                                       text-stone-400 hover:bg-white hover:text-stone-900 transition-all duration-300">
                        <svg viewBox="0 0 24 24" fill="currentColor" class="w-4 h-4">
                            <path d="M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z" />
                        </svg>
                    </a>
                    <a href="#" class="w-10 h-10 rounded-full bg-stone-800 flex items-center justify-center
                                       text-stone-400 hover:bg-white hover:text-stone-900 transition-all duration-300">
                        "in"
                    </a>
                    <a href="#" class="w-10 h-10 rounded-full bg-stone-800 flex items-center justify-center
                                       text-stone-400 hover:bg-white hover:text-stone-900 transition-all duration-300">
                        "gh"
                    </a>
                </div>

                <div class="flex gap-8 text-sm">
                    <A href="/privacy" class="hover:text-white transition-colors">"Privacy"</A>
                    <A href="/terms" class="hover:text-white transition-colors">"Terms"</A>
                    <A href="/policy" class="hover:text-white transition-colors">"Policy"</A>
                </div>
            </div>
            <div class="text-center mt-12 text-xs text-stone-600">
                "© 2025 Penrose AI Inc. All rights reserved."
            </div>
        </footer>
    }
}

/// Smooth-scroll a section into view; sections carry `scroll-mt-*` so the
/// fixed header does not cover them.
fn scroll_to_section(id: &str) {
    if let Some(el) = document().get_element_by_id(id) {
        let mut options = web_sys::ScrollIntoViewOptions::new();
        options.behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Smooth-scroll back to the top of the page
fn scroll_to_top() {
    let mut options = web_sys::ScrollToOptions::new();
    options.top(0.0);
    options.behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}
