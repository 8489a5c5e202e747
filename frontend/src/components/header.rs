use yew::prelude::*;

use crate::app::Page;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub page: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let nav_button = |target: Page, label: &str| {
        let on_navigate = props.on_navigate.clone();
        let class = if props.page == target {
            "nav-btn active"
        } else {
            "nav-btn"
        };
        let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(target));
        html! { <button {class} onclick={onclick}>{label}</button> }
    };

    html! {
        <nav class="top-nav">
            <div class="top-nav-inner">
                <div class="brand">{"FAIRMONT BARBERS • Booking"}</div>
                <div class="nav-buttons">
                    {nav_button(Page::Book, "Book")}
                    {nav_button(Page::Admin, "Admin")}
                </div>
            </div>
        </nav>
    }
}
