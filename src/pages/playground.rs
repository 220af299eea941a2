//! Playground Page
//!
//! Mock conversational console for the model: a query goes in, one canned
//! analytical answer comes back after a fixed "computing" delay. The
//! transcript lives only for the page's lifetime.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::components::DashboardLayout;

/// Fixed thinking time before the canned reply appears
const REPLY_DELAY_MS: u32 = 2_000;

/// The one answer the mock model ever gives
const CANNED_REPLY: &str = "Projection onto the verified subspace converges at rate α = 0.045. \
    The analytical solve removes the stochastic error present in your control group; residual \
    norm is minimal for the supplied constraints.";

/// Static certainty annotation shown under each reply
const CONFIDENCE_NOTE: &str = "Confidence: 99.8% (condition number 1.2e-4)";

/// Dimensionality options in the parameters panel
const DIMENSIONS: [u32; 4] = [128, 256, 512, 1024];

/// Who produced a transcript entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

/// One console exchange line
#[derive(Clone, Debug, PartialEq)]
pub struct ChatEntry {
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: i64,
}

/// Ordered console transcript
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript {
    entries: Vec<ChatEntry>,
}

impl Transcript {
    /// Append the user's query. Whitespace-only input is dropped and
    /// `false` is returned.
    pub fn push_query(&mut self, text: &str, timestamp: i64) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }

        self.entries.push(ChatEntry {
            speaker: Speaker::User,
            text: trimmed.to_string(),
            timestamp,
        });
        true
    }

    /// Append the assistant's reply
    pub fn push_reply(&mut self, text: &str, timestamp: i64) {
        self.entries.push(ChatEntry {
            speaker: Speaker::Assistant,
            text: text.to_string(),
            timestamp,
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Playground page component
#[component]
pub fn Playground() -> impl IntoView {
    let transcript = create_rw_signal(Transcript::default());
    let (prompt, set_prompt) = create_signal(String::new());
    let (computing, set_computing) = create_signal(false);

    // Pending reply timer; dropped on unmount so the callback can never
    // append to a transcript that no longer exists.
    let pending = store_value(None::<Timeout>);
    on_cleanup(move || {
        pending.update_value(|t| {
            t.take();
        })
    });

    let run = move || {
        if computing.get() {
            return;
        }

        let mut accepted = false;
        let now = chrono::Local::now().timestamp_millis();
        transcript.update(|t| accepted = t.push_query(&prompt.get(), now));
        if !accepted {
            return;
        }

        set_prompt.set(String::new());
        set_computing.set(true);

        pending.set_value(Some(Timeout::new(REPLY_DELAY_MS, move || {
            let now = chrono::Local::now().timestamp_millis();
            transcript.update(|t| t.push_reply(CANNED_REPLY, now));
            set_computing.set(false);
        })));
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            run();
        }
    };

    view! {
        <DashboardLayout>
            <div class="h-[calc(100vh-140px)] flex gap-6">
                // Console
                <div class="flex-1 flex flex-col bg-white border border-stone-200 rounded-xl shadow-sm overflow-hidden">
                    // Header
                    <div class="p-4 border-b border-stone-100 flex justify-between items-center bg-stone-50/50">
                        <div class="flex items-center gap-2 text-stone-600">
                            <span class="font-bold text-sm uppercase tracking-wider">"❯_ Console"</span>
                        </div>
                        <button
                            title="Clear History"
                            on:click=move |_| transcript.update(|t| t.clear())
                            class="p-2 text-stone-400 hover:text-stone-800 transition-colors text-sm"
                        >
                            "Clear"
                        </button>
                    </div>

                    // Messages
                    <div class="flex-1 overflow-y-auto p-6 space-y-6 bg-stone-50/30">
                        {move || {
                            transcript.get().is_empty().then(|| view! {
                                <div class="h-full flex flex-col items-center justify-center text-stone-400 opacity-60">
                                    <span class="text-5xl mb-4">"▦"</span>
                                    <p>"Ready for input..."</p>
                                </div>
                            })
                        }}

                        {move || {
                            transcript
                                .get()
                                .entries()
                                .iter()
                                .cloned()
                                .map(|entry| view! { <MessageBubble entry=entry /> })
                                .collect_view()
                        }}

                        // Typing indicator while "computing"
                        {move || {
                            computing.get().then(|| view! {
                                <div class="flex justify-start">
                                    <div class="bg-white border border-stone-200 rounded-2xl rounded-bl-none px-5 py-4 shadow-sm flex items-center gap-3">
                                        <div class="w-2 h-2 bg-amber-500 rounded-full animate-bounce" />
                                        <div class="w-2 h-2 bg-amber-500 rounded-full animate-bounce" style="animation-delay: 0.2s" />
                                        <div class="w-2 h-2 bg-amber-500 rounded-full animate-bounce" style="animation-delay: 0.4s" />
                                    </div>
                                </div>
                            })
                        }}
                    </div>

                    // Input
                    <div class="p-4 bg-white border-t border-stone-200">
                        <div class="relative">
                            <textarea
                                prop:value=move || prompt.get()
                                on:input=move |ev| set_prompt.set(event_target_value(&ev))
                                on:keydown=on_keydown
                                placeholder="Enter a command or analytical query..."
                                class="w-full bg-stone-50 border border-stone-200 rounded-xl pl-4 pr-14 py-4 text-sm
                                       focus:outline-none focus:ring-2 focus:ring-stone-200 resize-none h-[60px]"
                            ></textarea>
                            <button
                                on:click=move |_| run()
                                disabled=move || prompt.get().trim().is_empty() || computing.get()
                                class="absolute right-2 top-2 bottom-2 aspect-square bg-stone-900 text-white rounded-lg
                                       flex items-center justify-center hover:bg-stone-800 disabled:opacity-50
                                       disabled:cursor-not-allowed transition-all"
                            >
                                "➤"
                            </button>
                        </div>
                        <div class="mt-2 flex justify-between items-center text-[10px] text-stone-400 uppercase font-bold tracking-widest px-1">
                            <span>"GaussLM v1.2"</span>
                            <span>"Tokens: 0 / 4096"</span>
                        </div>
                    </div>
                </div>

                // Visualizer and parameters
                <div class="w-96 flex flex-col gap-6">
                    <div class="bg-stone-900 rounded-xl p-1 h-64 shadow-lg flex flex-col">
                        <MatrixVisualizer active=computing />
                    </div>

                    <ParametersPanel />
                </div>
            </div>
        </DashboardLayout>
    }
}

/// One transcript bubble
#[component]
fn MessageBubble(entry: ChatEntry) -> impl IntoView {
    let (row_class, bubble_class) = match entry.speaker {
        Speaker::User => (
            "flex justify-end",
            "max-w-[80%] rounded-2xl px-5 py-4 text-sm leading-relaxed bg-stone-900 text-white rounded-br-none",
        ),
        Speaker::Assistant => (
            "flex justify-start",
            "max-w-[80%] rounded-2xl px-5 py-4 text-sm leading-relaxed bg-white border border-stone-200 text-stone-700 rounded-bl-none shadow-sm",
        ),
    };

    let time = chrono::DateTime::from_timestamp_millis(entry.timestamp)
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_default();

    view! {
        <div class=row_class>
            <div class=bubble_class>
                {entry.text.clone()}
                {matches!(entry.speaker, Speaker::Assistant).then(|| view! {
                    <div class="mt-3 pt-3 border-t border-stone-100 flex items-center justify-between text-[10px] text-stone-400">
                        <span>{CONFIDENCE_NOTE}</span>
                        <span>{time}</span>
                    </div>
                })}
            </div>
        </div>
    }
}

/// Decorative "live matrix" backdrop with a solving overlay while the
/// mock computation runs.
#[component]
fn MatrixVisualizer(active: ReadSignal<bool>) -> impl IntoView {
    // Static pseudo-random cell values, fixed for this mount
    let cells: Vec<(String, String)> = (0..64)
        .map(|_| {
            (
                format!("{:.2}", js_sys::Math::random()),
                format!("animation-delay: {:.2}s", js_sys::Math::random() * 2.0),
            )
        })
        .collect();

    view! {
        <div class=move || {
            let base = "w-full h-full bg-stone-950 rounded-lg overflow-hidden relative border border-stone-800 font-mono text-xs";
            if active.get() {
                format!("{} animate-pulse", base)
            } else {
                base.to_string()
            }
        }>
            <div class="absolute top-2 left-4 text-stone-500 select-none">"Live Matrix State"</div>
            <div class="absolute inset-0 flex items-center justify-center opacity-30 pointer-events-none">
                <div class="grid grid-cols-8 gap-2 text-green-500/50">
                    {cells
                        .into_iter()
                        .map(|(value, delay)| view! {
                            <span class="animate-pulse" style=delay>{value}</span>
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                active.get().then(|| view! {
                    <div class="absolute inset-0 bg-stone-900/10 backdrop-blur-[1px] flex items-center justify-center">
                        <div class="bg-stone-900 border border-amber-500/50 text-amber-500 px-4 py-2 rounded
                                    shadow-[0_0_15px_rgba(245,158,11,0.2)]">
                            "Computing SVD..."
                        </div>
                    </div>
                })
            }}
        </div>
    }
}

/// Inert model parameters panel
#[component]
fn ParametersPanel() -> impl IntoView {
    let (dimension, set_dimension) = create_signal(512u32);

    view! {
        <div class="flex-1 bg-white border border-stone-200 rounded-xl shadow-sm p-6 overflow-y-auto">
            <h3 class="font-bold text-stone-800 mb-4">"⚙ Parameters"</h3>

            <div class="space-y-6">
                <div>
                    <label class="flex justify-between text-xs font-bold text-stone-500 uppercase tracking-wider mb-2">
                        <span>"Temperature"</span>
                        <span>"0.0"</span>
                    </label>
                    <input
                        type="range"
                        min="0"
                        max="100"
                        value="0"
                        class="w-full h-1 bg-stone-200 rounded-lg appearance-none cursor-pointer"
                    />
                    <p class="text-[10px] text-stone-400 mt-1">"Strictly deterministic (0.0)"</p>
                </div>

                <div>
                    <label class="flex justify-between text-xs font-bold text-stone-500 uppercase tracking-wider mb-2">
                        <span>"Dimensionality"</span>
                        <span>{move || dimension.get().to_string()}</span>
                    </label>
                    <div class="flex gap-2">
                        {DIMENSIONS
                            .iter()
                            .copied()
                            .map(|dim| view! {
                                <button
                                    on:click=move |_| set_dimension.set(dim)
                                    class=move || {
                                        let base = "flex-1 py-2 text-xs border rounded";
                                        if dimension.get() == dim {
                                            format!("{} bg-stone-900 text-white border-stone-900", base)
                                        } else {
                                            format!("{} text-stone-600 border-stone-200 hover:bg-stone-50", base)
                                        }
                                    }
                                >
                                    {dim.to_string()}
                                </button>
                            })
                            .collect_view()}
                    </div>
                </div>

                <div>
                    <label class="block text-xs font-bold text-stone-500 uppercase tracking-wider mb-2">
                        "Output Format"
                    </label>
                    <select class="w-full p-2 bg-stone-50 border border-stone-200 rounded text-sm text-stone-700 focus:outline-none">
                        <option>"Natural Language"</option>
                        <option>"JSON Object"</option>
                        <option>"NumPy Array"</option>
                        <option>"LaTeX Proof"</option>
                    </select>
                </div>
            </div>

            <div class="mt-8 pt-6 border-t border-stone-100">
                <div class="p-3 bg-blue-50 text-blue-800 rounded-lg text-xs leading-relaxed">
                    "Using PINV mode guarantees exact recall for indexed datasets."
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_then_reply_appends_one_entry_each() {
        let mut transcript = Transcript::default();

        assert!(transcript.push_query("solve Ax = b", 1));
        assert_eq!(transcript.entries().len(), 1);
        assert_eq!(transcript.entries()[0].speaker, Speaker::User);
        assert_eq!(transcript.entries()[0].text, "solve Ax = b");

        transcript.push_reply(CANNED_REPLY, 2);
        assert_eq!(transcript.entries().len(), 2);
        assert_eq!(transcript.entries()[1].speaker, Speaker::Assistant);
    }

    #[test]
    fn test_whitespace_only_query_appends_nothing() {
        let mut transcript = Transcript::default();

        assert!(!transcript.push_query("", 1));
        assert!(!transcript.push_query("   \n\t ", 2));
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_query_text_is_trimmed() {
        let mut transcript = Transcript::default();

        assert!(transcript.push_query("  invert this  ", 1));
        assert_eq!(transcript.entries()[0].text, "invert this");
    }

    #[test]
    fn test_entries_preserve_insertion_order() {
        let mut transcript = Transcript::default();

        transcript.push_query("first", 1);
        transcript.push_reply("reply one", 2);
        transcript.push_query("second", 3);
        transcript.push_reply("reply two", 4);

        let texts: Vec<&str> = transcript.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "reply one", "second", "reply two"]);
    }

    #[test]
    fn test_clear_empties_transcript() {
        let mut transcript = Transcript::default();
        transcript.push_query("anything", 1);
        transcript.clear();
        assert!(transcript.is_empty());
    }
}
