use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SlotPickerProps {
    pub date: Option<String>,
    /// `None` while no date is selected or the slot list is still loading.
    pub slots: Option<Vec<String>>,
    pub selected: Option<String>,
    pub on_pick: Callback<String>,
}

/// Free start times for the selected day.
#[function_component(SlotPicker)]
pub fn slot_picker(props: &SlotPickerProps) -> Html {
    let slots = props.slots.as_deref().unwrap_or_default();

    html! {
        <div class="slot-picker">
            <div class="slot-picker-label">{"Time"}</div>
            <div class="slot-grid">
                {if props.date.is_none() || slots.is_empty() {
                    html! {
                        <div class="slot-hint">
                            {"Pick a day first – or no slot is available."}
                        </div>
                    }
                } else { html! {} }}
                {for slots.iter().map(|slot| {
                    let selected = props.selected.as_deref() == Some(slot.as_str());
                    let onclick = {
                        let on_pick = props.on_pick.clone();
                        let slot = slot.clone();
                        Callback::from(move |_: MouseEvent| on_pick.emit(slot.clone()))
                    };
                    html! {
                        <button
                            key={slot.clone()}
                            class={if selected { "slot selected" } else { "slot" }}
                            onclick={onclick}
                        >
                            {slot}
                        </button>
                    }
                })}
            </div>
        </div>
    }
}
