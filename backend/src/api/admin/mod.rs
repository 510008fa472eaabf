//! Authenticated administration: login, admin checks and entity CRUD.

mod session;
pub use session::{SessionExpired, admin_login, check_admin, ensure_token_valid};

mod entities;
pub use entities::{create_entity, dashboard_stats, delete_entity, list_entities, update_entity};
