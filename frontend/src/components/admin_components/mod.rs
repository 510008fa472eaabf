pub mod admin_crud;
pub mod entity_table;
pub mod entity_form;
