use shared::Barber;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

/// Fetch the barber list once at mount. The list is immutable afterwards
/// and shared by the booking wizard and the admin panel.
#[hook]
pub fn use_barbers(api_client: &ApiClient) -> UseStateHandle<Vec<Barber>> {
    let barbers = use_state(Vec::<Barber>::new);

    {
        let barbers = barbers.clone();
        let api_client = api_client.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.barbers().await {
                    Ok(list) => barbers.set(list),
                    Err(error) => {
                        Logger::error("barbers", &format!("failed to load barbers: {error}"));
                    }
                }
            });
            || ()
        });
    }

    barbers
}
