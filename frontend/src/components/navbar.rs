//! Header menu shared by every page.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdDashboard, MdHome, MdInfo, MdLock};
use dioxus_free_icons::icons::md_social_icons::MdSchool;
use dioxus_free_icons::{Icon, IconShape};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::session::use_admin_session;
use crate::routes::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display:flex;
                flex-direction: column;
                width: 100%;
                min-height: 100%;
            ",

            div {
                id: "x-nav-header",
                style: "
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 28px;
                    width: 100%;
                    height: 64px;
                    padding: 0 24px;
                    background-color: #1C212D;
                    color: white;
                ",
                NavbarLogo {}
                // empty space
                div { style: "flex-grow:1;" }
                NavbarLinks {}
            }

            div {
                id: "x-page-container",
                style: "flex-grow:1; min-height: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavbarLogo() -> Element {
    rsx! {
        Link {
            to: Route::HomePage {},
            span {
                style: "display:flex; align-items:center; gap: 10px; color: white; font-size: 22px; font-weight: 500;",
                Icon { icon: MdSchool, style: "width: 30px; height: 30px;" }
                "Course Catalog"
            }
        }
    }
}

#[component]
fn NavbarLinks() -> Element {
    let session = use_admin_session();
    rsx! {
        div {
            style: "display:flex; flex-direction: row; align-items: center; gap: 24px;",
            HeaderLink { to: Route::HomePage {}, icon: MdHome, label: "Teaching" }
            HeaderLink { to: Route::AboutPage {}, icon: MdInfo, label: "About" }
            if session.is_logged_in() {
                HeaderLink { to: Route::AdminDashboardPage {}, icon: MdDashboard, label: "Dashboard" }
            } else {
                HeaderLink { to: Route::AdminLoginPage {}, icon: MdLock, label: "Admin Login" }
            }
        }
    }
}

#[component]
fn HeaderLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                style: "display:flex; align-items:center; gap: 6px; color:white; font-size: 16px;",
                title: "{label}",
                Icon { icon: icon, style: "width: 22px; height: 22px;" }
                "{label}"
            }
        }
    }
}
