pub mod entry_form;
pub mod map_component;
pub mod workout_list;
