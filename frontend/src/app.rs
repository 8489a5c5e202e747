use yew::prelude::*;

use crate::components::admin_panel::AdminPanel;
use crate::components::booking_wizard::BookingWizard;
use crate::components::header::Header;
use crate::components::legal_pages::{ImprintPage, PrivacyPage};
use crate::config::AppConfig;
use crate::hooks::use_barbers::use_barbers;
use crate::services::api::ApiClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Book,
    Admin,
    Imprint,
    Privacy,
}

/// Root component: resolves the configuration once, owns the shared barber
/// list, and switches between the booking page, the admin page and the two
/// legal pages.
#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| AppConfig::from_env());
    let api_client = use_memo(config.clone(), |config| {
        ApiClient::with_base_url(config.api_base_url.clone())
    });
    let page = use_state(|| Page::Book);
    let barbers = use_barbers(&api_client);

    let navigate = {
        let page = page.clone();
        Callback::from(move |target: Page| page.set(target))
    };

    let footer_link = |target: Page, label: &str| {
        let navigate = navigate.clone();
        let onclick = Callback::from(move |_: MouseEvent| navigate.emit(target));
        html! { <button class="footer-link" onclick={onclick}>{label}</button> }
    };

    let content = match *page {
        Page::Book => html! {
            <BookingWizard
                api_client={(*api_client).clone()}
                barbers={(*barbers).clone()}
            />
        },
        Page::Admin => html! {
            <AdminPanel
                api_client={(*api_client).clone()}
                barbers={(*barbers).clone()}
            />
        },
        Page::Imprint => html! { <ImprintPage /> },
        Page::Privacy => html! { <PrivacyPage /> },
    };

    html! {
        <div class="app">
            <Header page={*page} on_navigate={navigate.clone()} />
            <main class="main">
                <div class="container">
                    {content}
                </div>
            </main>
            <footer class="footer">
                {footer_link(Page::Imprint, "Imprint")}
                {footer_link(Page::Privacy, "Privacy")}
            </footer>
        </div>
    }
}
