pub mod author_select;
pub mod control_panel;
pub mod mission_chart;
