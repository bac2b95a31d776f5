use leptos::prelude::*;

/// Labelled input bound to a string signal.
///
/// Required-ness is left to the browser through the native `required`
/// attribute; no application-level validation happens here.
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// `name` attribute of the input
    name: &'static str,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Whether the browser must see a value before submitting
    #[prop(default = false)]
    required: bool,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="text-sm text-slate-300">{label}</span>
            <input
                type=input_type
                name=name
                autocomplete=autocomplete
                required=required
                class="mt-1 block w-full rounded-md bg-white/5 border border-white/10 px-3 py-2 text-white
                       placeholder-white/30 focus:outline-none focus:ring-2 focus:ring-indigo-500"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}
