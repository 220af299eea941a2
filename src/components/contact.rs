//! Contact Form Component
//!
//! Partnership inquiry form on the landing page. Submission only simulates
//! network latency; nothing leaves the browser.

use gloo_timers::callback::Timeout;
use leptos::*;

/// Simulated round-trip time for a submission
const SUBMIT_DELAY_MS: u32 = 1_500;

/// Submission lifecycle of the inquiry form
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Success,
}

impl FormPhase {
    /// Begin a submission; only an idle form can start one.
    pub fn submit(self) -> Self {
        match self {
            FormPhase::Idle => FormPhase::Submitting,
            other => other,
        }
    }

    /// Finish the in-flight submission.
    pub fn complete(self) -> Self {
        match self {
            FormPhase::Submitting => FormPhase::Success,
            other => other,
        }
    }

    /// Return to an empty idle form.
    pub fn reset(self) -> Self {
        FormPhase::Idle
    }
}

/// Contact form with simulated submission
#[component]
pub fn ContactForm() -> impl IntoView {
    let (phase, set_phase) = create_signal(FormPhase::Idle);
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (company, set_company) = create_signal(String::new());
    let (message, set_message) = create_signal(String::new());

    // Pending mock-latency timer; dropping it on unmount cancels the
    // callback so it can never touch a dead view.
    let pending = store_value(None::<Timeout>);
    on_cleanup(move || {
        pending.update_value(|t| {
            t.take();
        })
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if phase.get() != FormPhase::Idle {
            return;
        }

        set_phase.update(|p| *p = p.submit());
        pending.set_value(Some(Timeout::new(SUBMIT_DELAY_MS, move || {
            set_phase.update(|p| *p = p.complete());
        })));
    };

    let send_another = move |_| {
        set_phase.update(|p| *p = p.reset());
        set_name.set(String::new());
        set_email.set(String::new());
        set_company.set(String::new());
        set_message.set(String::new());
    };

    view! {
        <div class="max-w-4xl mx-auto bg-white rounded-2xl shadow-xl overflow-hidden flex flex-col md:flex-row border border-stone-200">
            // Contact info pane
            <div class="md:w-5/12 bg-stone-900 text-white p-10 flex flex-col justify-between relative overflow-hidden">
                <div class="relative z-10">
                    <div class="inline-block mb-4 px-3 py-1 border border-amber-500 text-amber-500 text-xs tracking-[0.2em] uppercase font-bold rounded-full">
                        "Partnership"
                    </div>
                    <h2 class="font-serif text-3xl mb-6">"Deploy Penrose AI"</h2>
                    <p class="text-stone-400 mb-8 leading-relaxed text-sm">
                        "Ready to put analytical models behind your enterprise workflow? Request access or schedule a technical demo."
                    </p>

                    <div class="flex items-start gap-4">
                        <div class="p-2 bg-stone-800 rounded-lg text-amber-500">"✉"</div>
                        <div>
                            <p class="text-xs text-stone-500 font-bold uppercase tracking-wider mb-1">"Email Us"</p>
                            <a href="mailto:contact@penrose-ai.com" class="text-white font-medium">
                                "contact@penrose-ai.com"
                            </a>
                        </div>
                    </div>
                </div>

                <div class="absolute bottom-0 right-0 w-64 h-64 bg-amber-500 opacity-10 rounded-full blur-[80px] translate-x-1/2 translate-y-1/2" />
            </div>

            // Form / confirmation pane
            <div class="md:w-7/12 p-10 bg-white">
                {move || {
                    if phase.get() == FormPhase::Success {
                        view! {
                            <div class="h-full flex flex-col items-center justify-center text-center py-12 animate-fade-in">
                                <div class="w-16 h-16 bg-green-50 rounded-full flex items-center justify-center mb-6 text-green-600 text-3xl">
                                    "✓"
                                </div>
                                <h3 class="font-serif text-2xl text-stone-900 mb-2">"Request Received"</h3>
                                <p class="text-stone-500 max-w-xs">
                                    "Thank you for your interest. Our team will reach out at the email you provided shortly."
                                </p>
                                <button
                                    on:click=send_another
                                    class="mt-8 text-sm text-stone-500 underline hover:text-stone-800"
                                >
                                    "Send another request"
                                </button>
                            </div>
                        }
                        .into_view()
                    } else {
                        view! {
                            <form on:submit=on_submit class="space-y-6">
                                <ContactField
                                    label="Full Name"
                                    placeholder="Ada Lovelace"
                                    value=name
                                    set_value=set_name
                                    required=true
                                />
                                <ContactField
                                    label="Work Email"
                                    placeholder="ada@company.com"
                                    value=email
                                    set_value=set_email
                                    required=true
                                />
                                <ContactField
                                    label="Company / Organization"
                                    placeholder="Acme Inc."
                                    value=company
                                    set_value=set_company
                                    required=false
                                />

                                <div>
                                    <label class="block text-xs font-bold uppercase tracking-widest text-stone-500 mb-2">
                                        "Inquiry"
                                    </label>
                                    <textarea
                                        required
                                        rows=3
                                        placeholder="Tell us about your use case..."
                                        prop:value=move || message.get()
                                        on:input=move |ev| set_message.set(event_target_value(&ev))
                                        class="w-full bg-[#F9F8F4] border border-stone-200 rounded-lg px-4 py-3 text-stone-800
                                               focus:outline-none focus:border-amber-500 focus:ring-1 focus:ring-amber-500
                                               transition-all resize-none"
                                    ></textarea>
                                </div>

                                <button
                                    type="submit"
                                    disabled=move || phase.get() == FormPhase::Submitting
                                    class="w-full bg-stone-900 text-white font-bold uppercase tracking-widest text-xs py-4
                                           rounded-lg hover:bg-stone-800 transition-all flex items-center justify-center gap-2
                                           disabled:opacity-70 disabled:cursor-not-allowed"
                                >
                                    {move || {
                                        if phase.get() == FormPhase::Submitting {
                                            "Processing..."
                                        } else {
                                            "Submit Request →"
                                        }
                                    }}
                                </button>
                            </form>
                        }
                        .into_view()
                    }
                }}
            </div>
        </div>
    }
}

/// Single-line labelled text input
#[component]
fn ContactField(
    label: &'static str,
    placeholder: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    required: bool,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-xs font-bold uppercase tracking-widest text-stone-500 mb-2">
                {label}
            </label>
            <input
                type="text"
                required=required
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full bg-[#F9F8F4] border border-stone-200 rounded-lg px-4 py-3 text-stone-800
                       focus:outline-none focus:border-amber-500 focus:ring-1 focus:ring-amber-500 transition-all"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_happy_path() {
        let phase = FormPhase::Idle;
        let phase = phase.submit();
        assert_eq!(phase, FormPhase::Submitting);
        let phase = phase.complete();
        assert_eq!(phase, FormPhase::Success);
        assert_eq!(phase.reset(), FormPhase::Idle);
    }

    #[test]
    fn test_phase_ignores_out_of_order_events() {
        // A second submit while in flight changes nothing
        assert_eq!(FormPhase::Submitting.submit(), FormPhase::Submitting);
        // Completion only applies to an in-flight submission
        assert_eq!(FormPhase::Idle.complete(), FormPhase::Idle);
        assert_eq!(FormPhase::Success.complete(), FormPhase::Success);
        // Resubmitting from success requires an explicit reset first
        assert_eq!(FormPhase::Success.submit(), FormPhase::Success);
    }

    #[test]
    fn test_phase_default_is_idle() {
        assert_eq!(FormPhase::default(), FormPhase::Idle);
    }
}
