use yew::prelude::*;

/// CSS class for a backend-defined status string. Unknown statuses get a
/// neutral badge instead of failing.
fn status_class(status: &str) -> &'static str {
    match status {
        "DELIVERED" => "status-delivered",
        "IN_TRANSIT" => "status-in-transit",
        "PENDING" | "CREATED" => "status-pending",
        _ => "status-unknown",
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: AttrValue,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    html! {
        <span class={classes!("status-badge", status_class(&props.status))}>
            { &props.status }
        </span>
    }
}
