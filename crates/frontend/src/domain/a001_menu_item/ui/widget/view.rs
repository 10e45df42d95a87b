//! Menu item widget - View Component

use super::view_model::MenuItemWidgetVm;
use crate::shared::components::ui::{Button, Input, Toggle};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use contracts::enums::GenerationModel;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use thaw::Spinner;

#[component]
#[allow(non_snake_case)]
pub fn MenuItemWidget() -> impl IntoView {
    let vm = MenuItemWidgetVm::new();
    let state = vm.state;

    let is_loading = Signal::derive(move || state.with(|s| s.is_loading));
    let submit_disabled = Signal::derive(move || state.with(|s| !s.can_submit()));
    let item_name = Signal::derive(move || state.with(|s| s.input_value.clone()));
    let gpt4_selected =
        Signal::derive(move || state.with(|s| s.selected_model == GenerationModel::Gpt4));

    let on_input = Callback::new(move |text: String| vm.set_item_name(text));
    let on_toggle = Callback::new(move |_: ()| vm.toggle_model());

    view! {
        <div class="container">
            <div class="card">
                <div class="header">
                    <h1>
                        {icon("sparkles")}
                        " Menu Intelligence Widget"
                    </h1>
                    <p>"AI-powered menu description and upsell suggestions for your POS system"</p>
                </div>

                <form on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit();
                }>
                    <Input
                        id="itemName"
                        label="Food Item Name"
                        value=item_name
                        on_input=on_input
                        placeholder="e.g., Paneer Tikka Pizza, Margherita Pizza, Chicken Burger..."
                        disabled=is_loading
                    />

                    <div class="model-toggle">
                        <label>"AI Model:"</label>
                        <Toggle
                            left_label=GenerationModel::Gpt35Turbo.display_name()
                            right_label=GenerationModel::Gpt4.display_name()
                            checked=gpt4_selected
                            on_toggle=on_toggle
                            disabled=is_loading
                        />
                    </div>

                    <Button button_type="submit" disabled=submit_disabled>
                        {move || {
                            if is_loading.get() {
                                view! {
                                    <span class="loading">
                                        <Spinner />
                                        "Generating Content..."
                                    </span>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <span>
                                        {icon("zap")}
                                        " Generate Menu Content"
                                    </span>
                                }
                                    .into_any()
                            }
                        }}
                    </Button>
                </form>

                {move || {
                    state
                        .with(|s| s.last_error.clone())
                        .map(|e| {
                            view! {
                                <div class="banner banner--error">
                                    {icon("alert-circle")}
                                    <span>{e}</span>
                                </div>
                            }
                        })
                }}

                {move || {
                    state
                        .with(|s| s.last_success_message.clone())
                        .map(|msg| {
                            view! {
                                <div class="banner banner--success">
                                    {icon("check-circle")}
                                    <span>{msg}</span>
                                </div>
                            }
                        })
                }}

                {move || {
                    state
                        .with(|s| s.last_result.clone())
                        .map(|result| {
                            let description = result.description.clone();
                            let upsell = result.upsell_suggestion.clone();
                            let copy_description =
                                Callback::new(move |_: MouseEvent| vm.copy(description.clone()));
                            let copy_upsell =
                                Callback::new(move |_: MouseEvent| vm.copy(upsell.clone()));
                            view! {
                                <div class="result">
                                    <h3>{format!("Generated Content for \"{}\"", result.item_name)}</h3>

                                    <div class="result-item">
                                        <h4>"Menu Description"</h4>
                                        <p>{result.description.clone()}</p>
                                        <Button size="sm" on_click=copy_description>
                                            {icon("copy")}
                                            " Copy"
                                        </Button>
                                    </div>

                                    <div class="result-item">
                                        <h4>"Upsell Suggestion"</h4>
                                        <p>{result.upsell_suggestion.clone()}</p>
                                        <Button size="sm" on_click=copy_upsell>
                                            {icon("copy")}
                                            " Copy"
                                        </Button>
                                    </div>

                                    <div class="result-meta">
                                        <strong>"Model used:"</strong>
                                        {format!(" {} | ", result.model_used)}
                                        <strong>"Generated at:"</strong>
                                        {format!(" {}", format_datetime(&result.generated_at))}
                                    </div>
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}
