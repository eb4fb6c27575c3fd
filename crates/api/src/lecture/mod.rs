mod create_lecture;
mod delete_lecture;
mod get_lectures;
pub mod send_lecture_reminders;

use actix_web::web;
use create_lecture::create_lecture_controller;
use delete_lecture::delete_lecture_controller;
use get_lectures::get_lectures_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/lectures", web::post().to(create_lecture_controller));
    cfg.route("/lectures", web::get().to(get_lectures_controller));
    cfg.route(
        "/lectures/{lecture_id}",
        web::delete().to(delete_lecture_controller),
    );
}
