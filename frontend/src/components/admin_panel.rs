use shared::{Barber, STATUS_CANCELLED};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::time_off_form::TimeOffForm;
use super::{click, input_value};
use crate::hooks::use_admin::use_admin;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct AdminPanelProps {
    pub api_client: ApiClient,
    pub barbers: Vec<Barber>,
}

/// Read-only booking list with cancel, plus the time-off form. Credentials
/// are entered in-page and sent as a Basic header with every request.
#[function_component(AdminPanel)]
pub fn admin_panel(props: &AdminPanelProps) -> Html {
    let admin = use_admin(&props.api_client, &props.barbers);
    let state = &admin.state;
    let actions = &admin.actions;

    let on_filter_change = {
        let set_barber_filter = actions.set_barber_filter.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let value = select.value();
            set_barber_filter.emit((!value.is_empty()).then_some(value));
        })
    };

    html! {
        <div class="admin-panel">
            <h2>{"Admin"}</h2>

            {if let Some(notice) = state.notice.as_ref() {
                let class = if notice.is_error() {
                    "form-message error"
                } else {
                    "form-message success"
                };
                html! { <div {class}>{notice.message()}</div> }
            } else { html! {} }}

            <div class="admin-card">
                <div class="login-grid">
                    <input
                        type="text"
                        class="form-field"
                        placeholder="Username"
                        value={state.username.clone()}
                        oninput={input_value(&actions.set_username)}
                    />
                    <input
                        type="password"
                        class="form-field"
                        placeholder="Password"
                        value={state.password.clone()}
                        oninput={input_value(&actions.set_password)}
                    />
                </div>
                <div class="filter-row">
                    <select class="form-field" onchange={on_filter_change}>
                        <option value="" selected={state.barber_filter.is_none()}>
                            {"All barbers"}
                        </option>
                        {for props.barbers.iter().map(|barber| {
                            let selected =
                                state.barber_filter.as_deref() == Some(barber.id.as_str());
                            html! {
                                <option key={barber.id.clone()} value={barber.id.clone()} {selected}>
                                    {&barber.name}
                                </option>
                            }
                        })}
                    </select>
                    <input
                        type="date"
                        class="form-field"
                        value={state.from.clone()}
                        oninput={input_value(&actions.set_from)}
                    />
                    <input
                        type="date"
                        class="form-field"
                        value={state.to.clone()}
                        oninput={input_value(&actions.set_to)}
                    />
                    <button class="btn btn-primary" onclick={click(&actions.load)}>
                        {"Load"}
                    </button>
                </div>
            </div>

            <div class="admin-card">
                <div class="admin-card-title">{"Bookings"}</div>
                <table class="bookings-table">
                    <thead>
                        <tr>
                            <th>{"Time"}</th>
                            <th>{"Barber"}</th>
                            <th>{"Customer"}</th>
                            <th>{"Contact"}</th>
                            <th>{"Service"}</th>
                            <th>{"Status"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {for state.items.iter().map(|item| {
                            let cancelled = item.status == STATUS_CANCELLED;
                            let contact = match item.email.as_ref() {
                                Some(email) => format!("{} • {email}", item.phone_e164),
                                None => item.phone_e164.clone(),
                            };
                            let oncancel = {
                                let cancel = actions.cancel.clone();
                                let id = item.id.clone();
                                Callback::from(move |_: MouseEvent| cancel.emit(id.clone()))
                            };
                            html! {
                                <tr key={item.id.clone()}>
                                    <td>{format!("{} – {}", item.start_local, item.end_local)}</td>
                                    <td>{&item.barber_name}</td>
                                    <td>{&item.customer_name}</td>
                                    <td>{contact}</td>
                                    <td>{&item.service_name}</td>
                                    <td class={if cancelled { "status cancelled" } else { "status" }}>
                                        {&item.status}
                                    </td>
                                    <td>
                                        {if !cancelled {
                                            html! {
                                                <button class="btn" onclick={oncancel}>
                                                    {"Cancel"}
                                                </button>
                                            }
                                        } else { html! {} }}
                                    </td>
                                </tr>
                            }
                        })}
                        {if state.items.is_empty() {
                            html! {
                                <tr><td class="empty-hint" colspan="7">{"No entries"}</td></tr>
                            }
                        } else { html! {} }}
                    </tbody>
                </table>
            </div>

            <TimeOffForm
                barbers={props.barbers.clone()}
                draft={state.time_off.clone()}
                on_barber={actions.set_time_off_barber.clone()}
                on_date={actions.set_time_off_date.clone()}
                on_start={actions.set_time_off_start.clone()}
                on_end={actions.set_time_off_end.clone()}
                on_reason={actions.set_time_off_reason.clone()}
                on_submit={actions.submit_time_off.clone()}
            />
        </div>
    }
}
