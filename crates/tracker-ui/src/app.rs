use crate::components::tracker_form::TrackerForm;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="container">
            <header class="page-header">
                <h1>{"Last Mile Delivery Tracker"}</h1>
                <p class="subtitle">{"Track and complete deliveries securely using OTP"}</p>
            </header>

            <TrackerForm />

            <footer class="page-footer">
                {"Last-mile shipment tracker"}
            </footer>
        </div>
    }
}
