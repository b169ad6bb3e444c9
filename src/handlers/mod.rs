pub mod component_handler;
pub mod health_handler;
pub mod partner_handler;
pub mod project_handler;
pub mod teacher_handler;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_handler::health_check)
        .service(health_handler::health_check_ready)
        .service(health_handler::health_check_live)
        .service(teacher_handler::list_teachers)
        .service(teacher_handler::create_teacher)
        .service(teacher_handler::get_teacher)
        .service(teacher_handler::update_teacher)
        .service(teacher_handler::delete_teacher)
        .service(teacher_handler::schedule_exam)
        .service(teacher_handler::reschedule_attempt)
        .service(teacher_handler::cancel_attempt)
        .service(partner_handler::list_partners)
        .service(partner_handler::create_partner)
        .service(partner_handler::get_partner)
        .service(partner_handler::update_partner)
        .service(partner_handler::update_partner_status)
        .service(partner_handler::delete_partner)
        .service(partner_handler::attach_partner_user)
        .service(partner_handler::detach_partner_user)
        .service(project_handler::list_projects)
        .service(project_handler::create_project)
        .service(project_handler::get_project)
        .service(project_handler::update_project)
        .service(project_handler::delete_project)
        .service(component_handler::list_components)
        .service(component_handler::create_component)
        .service(component_handler::get_component)
        .service(component_handler::update_component)
        .service(component_handler::delete_component);
}
