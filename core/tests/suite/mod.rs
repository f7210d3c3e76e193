mod controller_flow;
mod merge_properties;
mod unit_labels;
