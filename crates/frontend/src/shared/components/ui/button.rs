use leptos::prelude::*;

fn button_class(size: Option<&str>) -> &'static str {
    match size {
        Some("sm") => "button button--primary button--small",
        _ => "button button--primary",
    }
}

/// Основная кнопка виджета; size="sm" для мелких кнопок в карточке результата
#[component]
pub fn Button(
    /// Button size: "md" (default) or "sm"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Button type attribute ("button" by default)
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || button_class(size.get().as_deref())
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
