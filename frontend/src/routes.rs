use common::admin_entity::EntityKind;
use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::about_page::AboutPage;
use crate::pages::admin_dashboard_page::AdminDashboardPage;
use crate::pages::admin_entity_page::AdminEntityPage;
use crate::pages::admin_login_page::AdminLoginPage;
use crate::pages::course_detail_page::CourseDetailPage;
use crate::pages::department_page::DepartmentPage;
use crate::pages::home_page::HomePage;
use crate::pages::not_found_page::NotFoundPage;
use crate::pages::teacher_page::TeacherPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    HomePage {},

    #[route("/about")]
    AboutPage {},

    #[route("/courses/:id")]
    CourseDetailPage { id: u64 },

    #[route("/teacher/:id")]
    TeacherPage { id: u64 },

    #[route("/departments/:id")]
    DepartmentPage { id: u64 },

    #[route("/admin/login")]
    AdminLoginPage {},

    #[route("/admin/dashboard")]
    AdminDashboardPage {},

    #[route("/admin/:entity")]
    AdminEntityPage { entity: EntityKind },

    #[route("/:..segments")]
    NotFoundPage { segments: Vec<String> },
}
