pub mod result_panel;
pub mod shipment_status;
pub mod tracker_form;
