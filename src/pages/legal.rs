//! Legal Page
//!
//! Privacy policy and terms of service behind one tabbed view. The
//! `/legal`, `/privacy`, `/terms`, and `/policy` paths all land here,
//! opening on the privacy tab.

use leptos::*;
use leptos_router::*;

/// Which legal document is shown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegalTab {
    #[default]
    Privacy,
    Terms,
}

/// Legal content page
#[component]
pub fn Legal() -> impl IntoView {
    let (tab, set_tab) = create_signal(LegalTab::default());

    view! {
        <div class="min-h-screen bg-[#F9F8F4] text-stone-800">
            // Header
            <header class="bg-white border-b border-stone-200 sticky top-0 z-50">
                <div class="container mx-auto px-6 py-4">
                    <A href="/" class="flex items-center gap-2 text-stone-600 hover:text-stone-900 transition-colors">
                        "←" <span class="font-medium">"Back to Home"</span>
                    </A>
                </div>
            </header>

            <main class="container mx-auto px-6 py-16 max-w-5xl">
                <div class="bg-white rounded-2xl shadow-lg border border-stone-200 overflow-hidden">
                    // Tab navigation
                    <div class="border-b border-stone-200 bg-[#F9F8F4] flex">
                        <TabButton label="Privacy Policy" current=tab target=LegalTab::Privacy set_tab=set_tab />
                        <TabButton label="Terms of Service" current=tab target=LegalTab::Terms set_tab=set_tab />
                    </div>

                    // Tab content
                    <div class="p-8 md:p-12">
                        {move || match tab.get() {
                            LegalTab::Privacy => view! { <PrivacyContent /> }.into_view(),
                            LegalTab::Terms => view! { <TermsContent /> }.into_view(),
                        }}
                    </div>
                </div>
            </main>

            <footer class="bg-stone-900 text-stone-400 py-8 mt-16">
                <div class="container mx-auto px-6 text-center">
                    <p class="text-sm">"© 2025 Penrose AI Inc. All rights reserved."</p>
                </div>
            </footer>
        </div>
    }
}

#[component]
fn TabButton(
    label: &'static str,
    current: ReadSignal<LegalTab>,
    target: LegalTab,
    set_tab: WriteSignal<LegalTab>,
) -> impl IntoView {
    view! {
        <button
            on:click=move |_| set_tab.set(target)
            class=move || {
                let base = "flex-1 px-8 py-4 font-serif text-lg font-semibold transition-all";
                if current.get() == target {
                    format!("{} bg-white text-stone-900 border-b-2 border-amber-500", base)
                } else {
                    format!("{} text-stone-600 hover:text-stone-900 hover:bg-white/50", base)
                }
            }
        >
            {label}
        </button>
    }
}

/// One titled section of a legal document
#[component]
fn LegalSection(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section>
            <h2 class="font-serif text-2xl font-semibold text-stone-900 mb-4">{title}</h2>
            {children()}
        </section>
    }
}

#[component]
fn PrivacyContent() -> impl IntoView {
    view! {
        <div>
            <h1 class="font-serif text-4xl md:text-5xl mb-4 text-stone-900">"Privacy Policy"</h1>
            <p class="text-sm text-stone-500 mb-8">"Last updated: December 14, 2025"</p>
            <div class="w-16 h-1 bg-amber-500 mb-12" />

            <div class="max-w-none space-y-8">
                <LegalSection title="1. Introduction">
                    <p class="text-stone-600 leading-relaxed">
                        "Welcome to Penrose AI (\"we,\" \"our,\" or \"us\"). We are committed to protecting your
                        personal information. This Privacy Policy explains how we collect, use, disclose, and
                        safeguard your information when you visit our website and use our services."
                    </p>
                </LegalSection>

                <LegalSection title="2. Information We Collect">
                    <p class="text-stone-600 leading-relaxed mb-4">
                        "We collect information that you provide directly to us, including:"
                    </p>
                    <ul class="list-disc list-inside text-stone-600 space-y-2 ml-4">
                        <li><strong>"Personal Information: "</strong>"name, email address, company name, and other contact details you provide when you register or contact us."</li>
                        <li><strong>"Account Information: "</strong>"credentials and preferences associated with your account."</li>
                        <li><strong>"Usage Data: "</strong>"how you interact with our services, including queries and feature usage."</li>
                        <li><strong>"Technical Data: "</strong>"IP address, browser type, device information, and analytics data collected through cookies."</li>
                    </ul>
                </LegalSection>

                <LegalSection title="3. How We Use Your Information">
                    <p class="text-stone-600 leading-relaxed mb-4">"We use the information we collect to:"</p>
                    <ul class="list-disc list-inside text-stone-600 space-y-2 ml-4">
                        <li>"Provide, maintain, and improve our services and platform"</li>
                        <li>"Process your requests and respond to your inquiries"</li>
                        <li>"Send technical notices, updates, and support messages"</li>
                        <li>"Detect, prevent, and address technical issues and security threats"</li>
                        <li>"Comply with legal obligations and enforce our terms"</li>
                    </ul>
                </LegalSection>

                <LegalSection title="4. Data Storage and Security">
                    <p class="text-stone-600 leading-relaxed">
                        "We implement industry-standard security measures to protect your personal information
                        from unauthorized access, alteration, disclosure, or destruction. Your data is encrypted
                        in transit and at rest. No method of transmission over the internet is completely secure,
                        and we cannot guarantee absolute security."
                    </p>
                </LegalSection>

                <LegalSection title="5. Your Privacy Rights">
                    <p class="text-stone-600 leading-relaxed mb-4">
                        "Depending on your location, you may have the right to access, correct, delete, or export
                        your personal information, and to opt out of marketing communications. To exercise these
                        rights, contact us at "
                        <a href="mailto:privacy@penrose-ai.com" class="text-amber-600 hover:underline">
                            "privacy@penrose-ai.com"
                        </a>
                        "."
                    </p>
                </LegalSection>

                <LegalSection title="6. Contact Us">
                    <div class="p-6 bg-[#F9F8F4] border border-stone-200 rounded-lg">
                        <p class="text-stone-800 font-medium">"Penrose AI Inc."</p>
                        <p class="text-stone-600">
                            "Email: "
                            <a href="mailto:privacy@penrose-ai.com" class="text-amber-600 hover:underline">
                                "privacy@penrose-ai.com"
                            </a>
                        </p>
                        <p class="text-stone-600">
                            "General inquiries: "
                            <a href="mailto:contact@penrose-ai.com" class="text-amber-600 hover:underline">
                                "contact@penrose-ai.com"
                            </a>
                        </p>
                    </div>
                </LegalSection>
            </div>
        </div>
    }
}

#[component]
fn TermsContent() -> impl IntoView {
    view! {
        <div>
            <h1 class="font-serif text-4xl md:text-5xl mb-4 text-stone-900">"Terms of Service"</h1>
            <p class="text-sm text-stone-500 mb-8">"Last updated: December 14, 2025"</p>
            <div class="w-16 h-1 bg-amber-500 mb-12" />

            <div class="max-w-none space-y-8">
                <LegalSection title="1. Agreement to Terms">
                    <p class="text-stone-600 leading-relaxed">
                        "By accessing or using Penrose AI's services, you agree to be bound by these Terms of
                        Service. If you do not agree to these Terms, you may not access or use our services.
                        These Terms apply to all users, including visitors, registered users, and enterprise
                        customers."
                    </p>
                </LegalSection>

                <LegalSection title="2. Description of Services">
                    <p class="text-stone-600 leading-relaxed">
                        "Penrose AI provides artificial intelligence services built on analytical, pseudo-inverse
                        learning methods. Our services include AI models, API access, and related tools and
                        documentation. We reserve the right to modify, suspend, or discontinue any aspect of our
                        services at any time."
                    </p>
                </LegalSection>

                <LegalSection title="3. User Accounts">
                    <p class="text-stone-600 leading-relaxed mb-4">
                        "To access certain features, you must create an account. You agree to:"
                    </p>
                    <ul class="list-disc list-inside text-stone-600 space-y-2 ml-4">
                        <li>"Provide accurate, current, and complete information during registration"</li>
                        <li>"Maintain the security of your password and account credentials"</li>
                        <li>"Accept responsibility for all activities that occur under your account"</li>
                        <li>"Notify us immediately of any unauthorized access or security breach"</li>
                    </ul>
                </LegalSection>

                <LegalSection title="4. Acceptable Use">
                    <p class="text-stone-600 leading-relaxed mb-4">"You agree not to use our services to:"</p>
                    <ul class="list-disc list-inside text-stone-600 space-y-2 ml-4">
                        <li>"Violate any applicable laws, regulations, or third-party rights"</li>
                        <li>"Distribute malware or other harmful code"</li>
                        <li>"Attempt to gain unauthorized access to our systems or networks"</li>
                        <li>"Reverse engineer, decompile, or disassemble our services"</li>
                        <li>"Interfere with or disrupt the integrity or performance of our services"</li>
                    </ul>
                </LegalSection>

                <LegalSection title="5. Intellectual Property">
                    <p class="text-stone-600 leading-relaxed">
                        "All content, features, and functionality of our services are owned by Penrose AI and
                        protected by copyright, trademark, and other intellectual property laws. You retain
                        ownership of any content you submit; by submitting it, you grant us a worldwide,
                        non-exclusive, royalty-free license to process it solely to provide and improve our
                        services."
                    </p>
                </LegalSection>

                <LegalSection title="6. Disclaimer and Limitation of Liability">
                    <p class="text-stone-600 leading-relaxed">
                        "Our services are provided \"as is\" and \"as available\" without warranties of any kind.
                        To the maximum extent permitted by law, Penrose AI shall not be liable for any indirect,
                        incidental, special, consequential, or punitive damages, and our total liability shall
                        not exceed the amount you paid us in the twelve months preceding the claim."
                    </p>
                </LegalSection>

                <LegalSection title="7. Contact Information">
                    <div class="p-6 bg-[#F9F8F4] border border-stone-200 rounded-lg">
                        <p class="text-stone-800 font-medium">"Penrose AI Inc."</p>
                        <p class="text-stone-600">
                            "Email: "
                            <a href="mailto:legal@penrose-ai.com" class="text-amber-600 hover:underline">
                                "legal@penrose-ai.com"
                            </a>
                        </p>
                    </div>
                </LegalSection>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_tab_is_privacy() {
        // Every legal route alias opens the view with its default tab
        assert_eq!(LegalTab::default(), LegalTab::Privacy);
    }
}
