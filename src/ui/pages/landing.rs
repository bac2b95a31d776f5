//! Landing page component
//!
//! Single-page marketing site for GLZ:
//! - SEO meta tags
//! - Header with section navigation, auth buttons and a mobile menu
//! - Hero section with the interactive 3D sculpture
//! - Features, pricing and contact sections
//! - Footer
//! - The auth modal and its acknowledgment toasts

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::content::{
    BRAND, CONTACT_HEADING, CONTACT_SUBCOPY, FEATURES, Feature, PRICING_HEADING, PRICING_PLANS,
    PRICING_SUBCOPY, PricingPlan, TAGLINE, copyright, current_year,
};
use crate::core::{AuthMode, PlanAction, Section};
use crate::ui::auth::{AuthModal, AuthModalController};
use crate::ui::hero::Hero;
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::{NotificationManager, NotificationsContainer};
use crate::ui::scroll::scroll_to;

/// Landing page; owns the auth modal state and the toast stack
#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = AuthModalController::new();
    let notifications = NotificationManager::new();

    view! {
        <SeoMeta />
        <LandingStyles />

        <div class="min-h-screen bg-gradient-to-b from-slate-950 via-slate-900 to-black text-white overflow-x-hidden">
            <Header auth=auth />

            <main class="pt-16">
                <section aria-label="Hero">
                    <Hero />
                </section>

                <FeaturesSection />
                <PricingSection auth=auth />
                <ContactSection auth=auth />
            </main>

            <footer class="py-8 text-center text-sm text-white/50 border-t border-white/10">
                {copyright(current_year())}
            </footer>
        </div>

        <AuthModal
            is_open=auth.is_open()
            mode=auth.mode()
            values=auth.values()
            on_close=auth.close_callback()
            on_toggle=auth.toggle_callback()
            on_forgot=auth.forgot_callback()
            on_submit=auth.submit_callback(notifications.callback())
        />
        <NotificationsContainer manager=notifications />
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    let title = format!("{BRAND} - Interactive 3D for the web");

    view! {
        <Title text=title.clone() />
        <Meta name="description" content=TAGLINE />
        <Meta name="keywords" content="3D, WebGL, WebAssembly, Rust, design system, landing page" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=title />
        <Meta property="og:description" content=TAGLINE />

        <Meta name="twitter:card" content="summary_large_image" />
    }
}

/// Header component with mobile menu support
#[component]
fn Header(auth: AuthModalController) -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    let nav_to = move |section: Section| {
        set_mobile_menu_open.set(false);
        scroll_to(section);
    };
    let open_auth = move |mode: AuthMode| {
        set_mobile_menu_open.set(false);
        auth.open(mode);
    };

    view! {
        <header class="fixed top-0 left-0 right-0 z-40 bg-black/40 backdrop-blur-md border-b border-white/10">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    // Logo
                    <div class="flex items-center gap-3">
                        <div class="w-9 h-9 rounded-lg bg-gradient-to-br from-violet-600 to-cyan-500 flex items-center justify-center font-bold">
                            "G"
                        </div>
                        <span class="text-xl font-bold tracking-tight">{BRAND}</span>
                    </div>

                    // Desktop navigation
                    <nav class="hidden md:flex items-center gap-6">
                        {Section::NAV
                            .into_iter()
                            .map(|section| view! {
                                <button
                                    type="button"
                                    class="text-sm font-medium text-white/70 hover:text-white transition-colors"
                                    on:click=move |_| nav_to(section)
                                >
                                    {section.label()}
                                </button>
                            })
                            .collect_view()}
                        <button
                            type="button"
                            class="text-sm font-medium text-white/80 hover:text-white"
                            on:click=move |_| open_auth(AuthMode::Login)
                        >
                            "Sign in"
                        </button>
                        <button
                            type="button"
                            class="glz-btn-primary text-sm"
                            on:click=move |_| open_auth(AuthMode::Register)
                        >
                            "Get started"
                        </button>
                    </nav>

                    // Mobile menu button
                    <button
                        type="button"
                        class="md:hidden p-2 rounded-lg hover:bg-white/10 transition-colors"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || mobile_menu_open.get().to_string()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! { <Icon name=icons::X class="w-6 h-6 invert" /> }.into_any()
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6 invert" /> }.into_any()
                            }
                        }}
                    </button>
                </div>

                // Mobile menu
                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !mobile_menu_open.get()
                    class:max-h-96=move || mobile_menu_open.get()
                >
                    <nav class="flex flex-col gap-2 py-4 border-t border-white/10">
                        {Section::NAV
                            .into_iter()
                            .map(|section| view! {
                                <button
                                    type="button"
                                    class="text-left px-4 py-2 text-sm font-medium text-white/70 hover:text-white hover:bg-white/5 rounded-lg"
                                    on:click=move |_| nav_to(section)
                                >
                                    {section.label()}
                                </button>
                            })
                            .collect_view()}
                        <button
                            type="button"
                            class="text-left px-4 py-2 text-sm font-medium text-white/80 hover:bg-white/5 rounded-lg"
                            on:click=move |_| open_auth(AuthMode::Login)
                        >
                            "Sign in"
                        </button>
                        <button
                            type="button"
                            class="mx-4 glz-btn-primary text-sm"
                            on:click=move |_| open_auth(AuthMode::Register)
                        >
                            "Get started"
                        </button>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section id=Section::Features.id() class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl sm:text-4xl font-bold text-center mb-12">"Features"</h2>
                <div class="grid md:grid-cols-3 gap-8">
                    {FEATURES
                        .into_iter()
                        .map(|feature| view! { <FeatureCard feature=feature /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="glz-lift p-6 rounded-2xl bg-white/5 border border-white/10">
            <h3 class="text-xl font-semibold mb-2">{feature.title}</h3>
            <p class="text-white/70 leading-relaxed">{feature.description}</p>
        </div>
    }
}

/// Pricing section component
#[component]
fn PricingSection(auth: AuthModalController) -> impl IntoView {
    view! {
        <section id=Section::Pricing.id() class="py-20 px-4 bg-white/[0.02]">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl sm:text-4xl font-bold text-center">{PRICING_HEADING}</h2>
                <p class="mt-2 mb-12 text-center text-white/70">
                    {PRICING_SUBCOPY}
                </p>
                <div class="grid md:grid-cols-3 gap-8 items-stretch">
                    {PRICING_PLANS
                        .into_iter()
                        .map(|plan| view! { <PricingCard plan=plan auth=auth /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PricingCard(plan: PricingPlan, auth: AuthModalController) -> impl IntoView {
    let on_choose = move |_| match plan.action {
        PlanAction::OpenAuth(mode) => auth.open(mode),
        PlanAction::ScrollTo(section) => scroll_to(section),
    };

    let card_class = if plan.highlighted {
        "glz-lift flex flex-col p-6 rounded-2xl border-2 border-violet-500 bg-violet-500/10 shadow-xl shadow-violet-900/30"
    } else {
        "glz-lift flex flex-col p-6 rounded-2xl border border-white/10 bg-white/5"
    };
    let button_class = if plan.highlighted {
        "mt-8 glz-btn-primary"
    } else {
        "mt-8 glz-btn-secondary"
    };

    view! {
        <div class=card_class>
            <h3 class="text-lg font-semibold">{plan.name}</h3>
            <p class="mt-4">
                <span class="text-4xl font-bold">{plan.price}</span>
                <span class="text-white/60">{plan.period}</span>
            </p>
            <ul class="mt-6 space-y-3 flex-1">
                {plan
                    .perks
                    .iter()
                    .map(|perk| view! {
                        <li class="flex items-center gap-2 text-white/80">
                            <Icon name=icons::CHECK class="w-4 h-4 invert" />
                            {*perk}
                        </li>
                    })
                    .collect_view()}
            </ul>
            <button
                type="button"
                class=button_class
                on:click=on_choose
            >
                {plan.cta}
            </button>
        </div>
    }
}

#[component]
fn ContactSection(auth: AuthModalController) -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="py-20 px-4">
            <div class="max-w-3xl mx-auto text-center">
                <h2 class="text-3xl sm:text-4xl font-bold mb-4">{CONTACT_HEADING}</h2>
                <p class="text-lg text-white/70 mb-8">
                    {CONTACT_SUBCOPY}
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <button
                        type="button"
                        class="glz-btn-primary"
                        on:click=move |_| auth.open(AuthMode::Register)
                    >
                        "Create account"
                    </button>
                    <button
                        type="button"
                        class="glz-btn-secondary"
                        on:click=move |_| auth.open(AuthMode::Login)
                    >
                        "Sign in"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html {
                scroll-behavior: smooth;
            }

            .glz-btn-primary {
                padding: 0.625rem 1.25rem;
                font-weight: 600;
                color: white;
                border-radius: 0.75rem;
                background-image: linear-gradient(90deg, #7c3aed, #06b6d4);
                transition: transform 0.2s, box-shadow 0.2s;
            }
            .glz-btn-primary:hover {
                transform: scale(1.03);
                box-shadow: 0 10px 20px -6px rgba(124, 58, 237, 0.5);
            }

            .glz-btn-secondary {
                padding: 0.625rem 1.25rem;
                font-weight: 600;
                color: rgba(255, 255, 255, 0.9);
                border: 1px solid rgba(255, 255, 255, 0.2);
                border-radius: 0.75rem;
                transition: background-color 0.2s;
            }
            .glz-btn-secondary:hover {
                background-color: rgba(255, 255, 255, 0.08);
            }

            .glz-lift {
                transition: transform 0.25s ease, box-shadow 0.25s ease;
            }
            .glz-lift:hover {
                transform: translateY(-6px);
                box-shadow: 0 20px 30px -12px rgba(0, 0, 0, 0.6);
            }

            @keyframes glz-fade-in {
                from { opacity: 0; }
                to { opacity: 1; }
            }
            .glz-fade-in {
                animation: glz-fade-in 0.2s ease-out both;
            }

            @keyframes glz-pop-in {
                from {
                    opacity: 0;
                    transform: translateY(20px) scale(0.98);
                }
                to {
                    opacity: 1;
                    transform: translateY(0) scale(1);
                }
            }
            .glz-pop-in {
                animation: glz-pop-in 0.25s ease-out both;
            }

            @media (prefers-reduced-motion: reduce) {
                .glz-fade-in, .glz-pop-in, .glz-lift {
                    animation: none;
                    transition: none;
                }
            }
            "#
        </style>
    }
}
