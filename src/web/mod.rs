pub mod error;
pub mod polls;

/// Registers the poll pages and static assets on an `App`.
pub fn configure(conf: &mut actix_web::web::ServiceConfig) {
    // Route resolution will stop at the first match.
    polls::configure(conf);

    conf.service(actix_files::Files::new("/static", "./static"));
}
