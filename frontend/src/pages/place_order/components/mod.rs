pub mod delivery_form;
pub mod summary;
