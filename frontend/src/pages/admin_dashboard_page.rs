//! Admin landing page: session check, record counts and links to every entity.

use common::admin_entity::{DashboardStats, EntityKind};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdChevronRight};

use crate::{
    api::admin_api::{check_admin, dashboard_stats},
    components::suspend_boundary::LoadingIndicator,
    data_definitions::session::use_admin_session,
    routes::Route,
};

#[component]
pub fn AdminDashboardPage() -> Element {
    let mut session = use_admin_session();
    let mut admin_name = use_signal(|| None::<String>);
    let mut stats = use_signal(|| None::<DashboardStats>);
    let mut stats_error = use_signal(|| None::<String>);

    use_future(move || async move {
        let Some(token) = session.token() else {
            navigator().replace(Route::AdminLoginPage {});
            return;
        };
        match check_admin(token.clone()).await {
            Ok(status) if status.is_admin => admin_name.set(Some(status.username)),
            Ok(status) => {
                dioxus::logger::tracing::warn!("{} is not an admin", status.username);
                session.logout();
                navigator().replace(Route::AdminLoginPage {});
                return;
            }
            Err(e) => {
                dioxus::logger::tracing::warn!("admin check failed: {}", e);
                session.handle_error(&e);
                navigator().replace(Route::AdminLoginPage {});
                return;
            }
        }
        match dashboard_stats(token).await {
            Ok(loaded) => stats.set(Some(loaded)),
            Err(e) => stats_error.set(Some(session.handle_error(&e))),
        }
    });

    let logout = move |_| {
        session.logout();
        navigator().push(Route::AdminLoginPage {});
    };

    let Some(username) = admin_name() else {
        return rsx! {
            Title { "Course Catalog - Admin" }
            LoadingIndicator {}
        };
    };

    rsx! {
        Title { "Course Catalog - Admin" }
        div {
            id: "x-admin-dashboard",
            style: "display:flex; flex-direction: column; gap: 24px; max-width: 1100px; margin: 0 auto; padding: 28px 32px; box-sizing: border-box;",
            div {
                style: "display:flex; flex-direction: row; align-items: center; justify-content: space-between; flex-wrap: wrap; gap: 16px;",
                div {
                    h1 { style: "margin: 0; font-size: 32px; font-weight: 500;", "Teaching Platform Admin" }
                    p { style: "margin: 4px 0 0 0; color: #6B7280;", "Welcome back, {username}" }
                }
                div {
                    style: "display:flex; flex-direction: row; gap: 10px;",
                    Link {
                        to: Route::HomePage {},
                        style: "padding: 8px 16px; border-radius: 8px; border: 1px solid #D1D5DB; background: white; color: #111827; text-decoration: none;",
                        "View Site"
                    }
                    button {
                        style: "padding: 8px 16px; border-radius: 8px; border: 1px solid #FCA5A5; background: #FEF2F2; color: #B91C1C; cursor: pointer;",
                        onclick: logout,
                        "Logout"
                    }
                }
            }
            h2 { style: "margin: 0; font-size: 22px; font-weight: 500;", "Dashboard Overview" }
            if let Some(error) = stats_error() {
                div {
                    style: "color:#B91C1C; background:#FEF2F2; border: 1px solid #FCA5A5; border-radius: 8px; padding: 10px;",
                    "Failed to load stats: {error}"
                }
            }
            div {
                style: "display:grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 16px;",
                for kind in EntityKind::ALL {
                    EntityStatCard {
                        key: "{kind}",
                        kind,
                        count: stats.read().as_ref().map(|s| s.count(kind)),
                    }
                }
            }
        }
    }
}

#[component]
fn EntityStatCard(kind: EntityKind, count: Option<usize>) -> Element {
    let count = count.map(|n| n.to_string()).unwrap_or_else(|| "…".to_string());
    rsx! {
        Link {
            to: Route::AdminEntityPage { entity: kind },
            class: "catalog-hover-shadow",
            style: "
                display:flex;
                flex-direction: row;
                align-items: center;
                justify-content: space-between;
                gap: 12px;
                padding: 20px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 12px;
                color: #111827;
                text-decoration: none;
            ",
            div {
                style: "display:flex; flex-direction: column; gap: 6px;",
                h3 { style: "margin: 0; font-size: 18px; font-weight: 500;", "{kind.plural_name()}" }
                span { style: "font-size: 28px; font-weight: 600; color: #4F46E5;", "{count}" }
                span { style: "font-size: 14px; color: #6B7280;", "{kind.dashboard_description()}" }
            }
            Icon { icon: MdChevronRight, style: "width: 24px; height: 24px; color: #9CA3AF;" }
        }
    }
}
