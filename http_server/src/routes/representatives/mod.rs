pub mod lookup;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/representatives").configure(lookup::init_routes));
}
