//! Auth modal: header with mode title and toggle, the form, and the
//! "Forgot password?" link

use leptos::prelude::*;

use super::form::AuthForm;
use crate::core::{AuthFormValues, AuthMode};
use crate::ui::common::BaseModal;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn AuthModal(
    /// Whether the overlay is shown
    is_open: Signal<bool>,
    /// Selected form variant
    mode: Signal<AuthMode>,
    /// Typed form values
    values: RwSignal<AuthFormValues>,
    /// Close button, backdrop and Escape
    on_close: Callback<()>,
    /// Login ⇄ register link
    on_toggle: Callback<()>,
    /// "Forgot password?" link
    on_forgot: Callback<()>,
    /// Form submission; acknowledges and closes
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <BaseModal is_open=is_open on_close=on_close>
            <div class="backdrop-blur-md bg-black/60 rounded-2xl p-6 border border-white/10 text-white">
                <div class="flex items-center justify-between">
                    <h4 class="text-lg font-semibold">{move || mode.get().title()}</h4>
                    <div class="flex items-center gap-2">
                        {move || {
                            mode.get().toggle_label().map(|label| view! {
                                <button
                                    type="button"
                                    class="text-sm text-white/70 hover:underline"
                                    on:click=move |_| on_toggle.run(())
                                >
                                    {label}
                                </button>
                            })
                        }}
                        <button
                            type="button"
                            class="text-white/60 hover:text-white"
                            on:click=move |_| on_close.run(())
                            title="Close"
                            aria-label="Close modal"
                        >
                            <Icon name=icons::X class="w-5 h-5" />
                        </button>
                    </div>
                </div>

                <div class="mt-4">
                    <AuthForm mode=mode values=values on_submit=on_submit />
                </div>

                <Show when=move || mode.get().offers_forgot_link()>
                    <div class="mt-4 text-right">
                        <button
                            type="button"
                            class="text-sm text-white/70 hover:underline"
                            on:click=move |_| on_forgot.run(())
                        >
                            "Forgot password?"
                        </button>
                    </div>
                </Show>
            </div>
        </BaseModal>
    }
}
