//! Decorative Scenes
//!
//! Static background art for the hero and impact sections. Pure CSS/SVG
//! layers, no state and no timers.

use leptos::*;

/// Hero backdrop: blueprint grid, concentric guides, and oversized
/// linear-algebra glyphs.
#[component]
pub fn HeroScene() -> impl IntoView {
    view! {
        <div class="absolute inset-0 z-0 overflow-hidden pointer-events-none">
            // Base grid
            <div
                class="absolute inset-0 opacity-60"
                style="background-image: linear-gradient(to right, rgba(214, 211, 209, 0.4) 1px, transparent 1px),
                       linear-gradient(to bottom, rgba(214, 211, 209, 0.4) 1px, transparent 1px);
                       background-size: 40px 40px"
            />

            // Concentric construction circles
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[45vw] h-[45vw] border border-stone-200 rounded-full opacity-60" />
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[35vw] h-[35vw] border border-stone-200 rounded-full opacity-40" />
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[60vw] h-[60vw] border border-dashed border-stone-200 rounded-full opacity-30" />

            // Oversized annotations
            <div class="absolute top-[15%] left-[10%] font-serif text-stone-300 text-7xl md:text-9xl opacity-20 select-none rotate-12">
                "A"<sup>"†"</sup>
            </div>
            <div class="absolute bottom-[10%] right-[5%] font-serif text-stone-300 text-8xl md:text-[10rem] opacity-20 select-none -rotate-6">
                "Σ"
            </div>

            // Matrix hint
            <div class="hidden md:flex absolute top-[20%] right-[15%] font-mono text-xs text-stone-400 opacity-60 flex-col gap-1">
                <span>"[ 0.002, 1.414 ]"</span>
                <span>"[ 1.000, 0.000 ]"</span>
                <span>"[ 0.707, 0.707 ]"</span>
            </div>

            // Residual norm
            <div class="hidden md:block absolute bottom-[25%] left-[15%] font-serif text-4xl text-stone-300 italic opacity-40">
                "‖Ax − b‖"<sub>"2"</sub>
            </div>

            // Construction lines
            <svg class="absolute inset-0 w-full h-full opacity-20">
                <line x1="0" y1="100%" x2="100%" y2="0" stroke="#f59e0b" stroke-width="1" stroke-dasharray="10,10" />
                <line x1="15%" y1="0" x2="15%" y2="100%" stroke="#a8a29e" stroke-width="1" />
            </svg>
        </div>
    }
}

/// Impact-section schematic: three stacked matrix layers resolving into a
/// gold "solved" layer.
#[component]
pub fn MatrixStackScene() -> impl IntoView {
    view! {
        <div class="w-full h-full relative bg-[#F5F4F0] overflow-hidden flex items-center justify-center">
            // Background grid
            <div
                class="absolute inset-0 opacity-10"
                style="background-image: linear-gradient(#444 1px, transparent 1px),
                       linear-gradient(90deg, #444 1px, transparent 1px);
                       background-size: 40px 40px"
            />

            <div class="relative w-64 h-64 flex items-center justify-center">
                // Base layer
                <div class="absolute w-40 h-40 border border-stone-300 bg-white shadow-sm transform translate-y-4 translate-x-4 rotate-6 transition-all duration-[3000ms] hover:rotate-3 hover:translate-y-2" />

                // Data layer
                <div class="absolute w-40 h-40 border border-stone-400 bg-stone-50 shadow-md transform rotate-3 transition-all duration-[3000ms] hover:rotate-1 hover:scale-105 flex flex-col items-center justify-center gap-2 overflow-hidden">
                    <div class="w-full h-[1px] bg-stone-200" />
                    <div class="w-full h-[1px] bg-stone-200" />
                    <div class="w-full h-[1px] bg-stone-200" />
                </div>

                // Solution layer
                <div class="absolute w-40 h-40 border-2 border-amber-500 bg-white/90 backdrop-blur-sm shadow-xl transform -rotate-3 transition-all duration-[3000ms] hover:rotate-0 flex flex-col items-center justify-center gap-2 group">
                    <div class="flex gap-1">
                        <div class="w-2 h-2 bg-amber-500 rounded-full opacity-40 group-hover:opacity-100 transition-opacity" />
                        <div class="w-2 h-2 bg-amber-500 rounded-full opacity-40 group-hover:opacity-100 transition-opacity delay-75" />
                        <div class="w-2 h-2 bg-amber-500 rounded-full opacity-40 group-hover:opacity-100 transition-opacity delay-150" />
                    </div>
                    <div class="text-[10px] font-mono text-stone-500 tracking-widest uppercase">"PINV-SOLVED"</div>
                </div>

                // Axis guides
                <div class="absolute top-1/2 left-0 w-full h-[1px] bg-amber-500 opacity-30 -z-10" />
                <div class="absolute top-0 left-1/2 w-[1px] h-full bg-amber-500 opacity-30 -z-10" />
            </div>
        </div>
    }
}
