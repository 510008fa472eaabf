pub mod home_page;
pub mod about_page;
pub mod course_detail_page;
pub mod teacher_page;
pub mod department_page;
pub mod admin_login_page;
pub mod admin_dashboard_page;
pub mod admin_entity_page;
pub mod not_found_page;
