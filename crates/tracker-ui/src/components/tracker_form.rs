//! The tracker screen: shipment ID + OTP inputs, the Track and Deliver
//! buttons, and the result panel below them.

use crate::{
    API_BASE,
    action::{self, Outcome},
    api::ShipmentApi,
    components::result_panel::ResultPanel,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[function_component(TrackerForm)]
pub fn tracker_form() -> Html {
    let shipment_id_state = use_state(String::new);
    let otp_state = use_state(String::new);
    // One shared panel: exactly one warning/success/error is visible at a
    // time, the latest completed action replaces it.
    let outcome_state = use_state(|| None::<Outcome>);
    let tracking_state = use_state(|| false);
    let delivering_state = use_state(|| false);

    let on_shipment_id_change = {
        let shipment_id_state = shipment_id_state.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            shipment_id_state.set(input.value());
        })
    };

    let on_otp_change = {
        let otp_state = otp_state.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            otp_state.set(input.value());
        })
    };

    let on_track = {
        let shipment_id_state = shipment_id_state.clone();
        let outcome_state = outcome_state.clone();
        let tracking_state = tracking_state.clone();

        Callback::from(move |_| {
            let shipment_id = (*shipment_id_state).clone();
            let outcome_state = outcome_state.clone();
            let tracking_state = tracking_state.clone();

            tracking_state.set(true);
            spawn_local(async move {
                let api = ShipmentApi::new(API_BASE);
                let outcome = action::track(&api, &shipment_id).await;
                tracking_state.set(false);
                outcome_state.set(Some(outcome));
            });
        })
    };

    let on_deliver = {
        let shipment_id_state = shipment_id_state.clone();
        let otp_state = otp_state.clone();
        let outcome_state = outcome_state.clone();
        let delivering_state = delivering_state.clone();

        Callback::from(move |_| {
            let shipment_id = (*shipment_id_state).clone();
            let otp = (*otp_state).clone();
            let outcome_state = outcome_state.clone();
            let delivering_state = delivering_state.clone();

            delivering_state.set(true);
            spawn_local(async move {
                let api = ShipmentApi::new(API_BASE);
                let outcome = action::deliver(&api, &shipment_id, &otp).await;
                delivering_state.set(false);
                outcome_state.set(Some(outcome));
            });
        })
    };

    let is_tracking = *tracking_state;
    let is_delivering = *delivering_state;

    html! {
        <div class="card">
            <div class="form-row">
                <label for="shipment-id">{"Shipment ID"}</label>
                <input
                    id="shipment-id"
                    type="text"
                    placeholder="e.g. SHIP1766914906941"
                    value={(*shipment_id_state).clone()}
                    onchange={on_shipment_id_change}
                />
            </div>

            <div class="form-row">
                <label for="otp">{"OTP"}</label>
                <input
                    id="otp"
                    type="password"
                    placeholder="Enter delivery OTP"
                    value={(*otp_state).clone()}
                    onchange={on_otp_change}
                />
            </div>

            <div class="button-row">
                <button
                    class="action-button track-button"
                    onclick={on_track}
                    disabled={is_tracking}
                >
                    if is_tracking {
                        {"Tracking..."}
                    } else {
                        {"Track Shipment"}
                    }
                </button>
                <button
                    class="action-button deliver-button"
                    onclick={on_deliver}
                    disabled={is_delivering}
                >
                    if is_delivering {
                        {"Delivering..."}
                    } else {
                        {"Deliver Shipment"}
                    }
                </button>
            </div>

            <ResultPanel outcome={(*outcome_state).clone()} />
        </div>
    }
}
