//! Renders the outcome of the last completed action as exactly one of:
//! validation warning, success panel (track or deliver variant), or error
//! banner.

use crate::{
    action::Outcome,
    components::shipment_status::StatusBadge,
    util::time::{parse_backend_timestamp, relative_time},
};
use chrono::Utc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    pub outcome: Option<Outcome>,
}

#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    match &props.outcome {
        None => html! {},
        Some(Outcome::Warning(msg)) => html! {
            <div class="banner banner-warning">{ *msg }</div>
        },
        Some(Outcome::Error(msg)) => html! {
            <div class="banner banner-error">{ *msg }</div>
        },
        Some(Outcome::TrackSuccess(view)) => html! {
            <div class="result-panel track-result">
                <div class="banner banner-success">{"Shipment Found"}</div>
                <div class="result-fields">
                    <div class="result-row">
                        <span class="field-label">{"Status:"}</span>
                        <StatusBadge status={view.status.clone()} />
                    </div>
                    <div class="result-row">
                        <span class="field-label">{"Customer:"}</span>
                        <span>{ &view.customer_name }</span>
                    </div>
                    <div class="result-row">
                        <span class="field-label">{"Shipment ID:"}</span>
                        <span>{ &view.shipment_id }</span>
                    </div>
                </div>
            </div>
        },
        Some(Outcome::DeliverSuccess(confirmation)) => html! {
            <div class="result-panel deliver-result">
                <div class="banner banner-success">{"Delivery Completed"}</div>
                <div class="result-fields">
                    <div class="result-row">
                        <span class="field-label">{"Status:"}</span>
                        <StatusBadge status={confirmation.status.clone()} />
                    </div>
                    <div class="result-row">
                        <span class="field-label">{"Delivered At:"}</span>
                        <span>{ delivered_at_label(&confirmation.delivered_at) }</span>
                    </div>
                </div>
            </div>
        },
    }
}

/// Verbatim backend timestamp, with a relative suffix when it parses.
fn delivered_at_label(delivered_at: &str) -> String {
    match parse_backend_timestamp(delivered_at) {
        Some(when) => format!("{delivered_at} ({})", relative_time(when, Utc::now())),
        None => delivered_at.to_string(),
    }
}
