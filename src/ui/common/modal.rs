use leptos::prelude::*;

/// Overlay with a backdrop and a centred panel.
///
/// Content is only mounted while `is_open` is true.
#[component]
pub fn BaseModal(
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: ChildrenFn,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(feature = "hydrate")]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });

        on_cleanup(move || handle_keydown.remove());
    }

    view! {
        <Show when=move || is_open.get()>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center glz-fade-in"
                role="dialog"
                aria-modal="true"
            >
                // Backdrop
                <div
                    class="absolute inset-0 bg-black/50 backdrop-blur-sm"
                    on:click=move |_| on_close.run(())
                ></div>

                // Panel
                <div class="relative mx-4 w-[min(96vw,540px)] glz-pop-in">
                    {children()}
                </div>
            </div>
        </Show>
    }
}
