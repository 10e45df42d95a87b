use leptos::prelude::*;

/// Two-position switch with a caption on each side.
///
/// `checked` means the right-hand option is selected.
#[component]
pub fn Toggle(
    left_label: &'static str,
    right_label: &'static str,
    #[prop(into)]
    checked: Signal<bool>,
    #[prop(optional)]
    on_toggle: Option<Callback<()>>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <div class="toggle">
            <span class="toggle__caption">{left_label}</span>
            <label class="toggle__switch">
                <input
                    type="checkbox"
                    prop:checked=move || checked.get()
                    disabled=move || disabled.get().unwrap_or(false)
                    on:change=move |_| {
                        if let Some(handler) = on_toggle {
                            handler.run(());
                        }
                    }
                />
                <span class="toggle__slider"></span>
            </label>
            <span class="toggle__caption">{right_label}</span>
        </div>
    }
}
