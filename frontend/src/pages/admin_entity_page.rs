use common::admin_entity::EntityKind;
use dioxus::prelude::*;

use crate::{
    components::admin_components::admin_crud::AdminCrud,
    data_definitions::session::use_admin_session,
    routes::Route,
};

/// Management page of one entity, reachable only with a session.
#[component]
pub fn AdminEntityPage(entity: EntityKind) -> Element {
    let session = use_admin_session();
    let logged_in = session.is_logged_in();

    use_effect(move || {
        if !session.is_logged_in() {
            dioxus::logger::tracing::warn!("no admin session, redirecting to login");
            navigator().replace(Route::AdminLoginPage {});
        }
    });

    if !logged_in {
        return rsx! {};
    }

    rsx! {
        Title { "Course Catalog - Manage {entity.plural_name()}" }
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 28px 32px; box-sizing: border-box;",
            AdminCrud { key: "{entity}", kind: entity }
        }
    }
}
