//! Auth form component
//!
//! Renders the field set of the current mode. Submission is answered with a
//! placeholder acknowledgment; there is no backend behind it.

use leptos::prelude::*;

use crate::core::{AuthFormValues, AuthMode};
use crate::ui::common::FormField;

/// Login / register / forgot-password form
#[component]
pub fn AuthForm(
    /// Form variant to render
    mode: Signal<AuthMode>,
    /// Typed values, shared across modes
    values: RwSignal<AuthFormValues>,
    /// Acknowledges and closes the modal
    on_submit: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form on:submit=handle_submit class="space-y-4">
            {move || {
                let mode = mode.get();
                mode.fields()
                    .iter()
                    .copied()
                    .map(|field| {
                        view! {
                            <FormField
                                label=field.label()
                                name=field.name()
                                input_type=field.input_type()
                                placeholder=field.placeholder()
                                autocomplete=field.autocomplete(mode)
                                required=true
                                value=Signal::derive(move || values.with(|v| v.get(field).to_string()))
                                on_input=Callback::new(move |value: String| {
                                    values.update(|v| v.set(field, value));
                                })
                            />
                        }
                    })
                    .collect_view()
            }}

            <div class="flex items-center justify-between">
                <button
                    type="submit"
                    class="px-4 py-2 rounded-md bg-indigo-600 hover:bg-indigo-500 text-white font-medium transition-colors"
                >
                    {move || mode.get().submit_label()}
                </button>
            </div>
        </form>
    }
}
