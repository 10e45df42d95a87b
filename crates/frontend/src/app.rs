use crate::domain::a001_menu_item::ui::MenuItemWidget;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <MenuItemWidget />
        <footer class="footer">
            <p>"Built for POS system integration"</p>
        </footer>
    }
}
