use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StepIndicatorProps {
    pub current: u8,
}

#[function_component(StepIndicator)]
pub fn step_indicator(props: &StepIndicatorProps) -> Html {
    html! {
        <div class="step-indicator">
            {for (1..=3u8).map(|step| {
                let class = if props.current >= step { "step-dot done" } else { "step-dot" };
                html! { <div key={step.to_string()} {class}>{step}</div> }
            })}
        </div>
    }
}
