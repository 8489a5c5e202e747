use shared::Barber;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BarberPickerProps {
    pub barbers: Vec<Barber>,
    pub selected: Option<String>,
    pub on_select: Callback<String>,
}

const PHOTO_FALLBACK: &str = "https://placehold.co/64x64";

/// Step 1: one card per barber, fetched once at startup.
#[function_component(BarberPicker)]
pub fn barber_picker(props: &BarberPickerProps) -> Html {
    html! {
        <div class="barber-list">
            {for props.barbers.iter().map(|barber| {
                let selected = props.selected.as_deref() == Some(barber.id.as_str());
                let onclick = {
                    let on_select = props.on_select.clone();
                    let id = barber.id.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
                };
                let photo = barber
                    .photo_url
                    .clone()
                    .unwrap_or_else(|| PHOTO_FALLBACK.to_string());
                html! {
                    <button
                        key={barber.id.clone()}
                        class={if selected { "barber-card selected" } else { "barber-card" }}
                        onclick={onclick}
                    >
                        <img class="barber-photo" src={photo} alt={barber.name.clone()} />
                        <div class="barber-name">{&barber.name}</div>
                    </button>
                }
            })}
        </div>
    }
}
