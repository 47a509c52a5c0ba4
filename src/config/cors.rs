use actix_cors::Cors;
use actix_web::http;

pub fn cors(http_port: u16) -> Cors {
    Cors::default()
        .allowed_origin(&format!("http://localhost:{}", http_port))
        .allowed_methods(vec!["GET", "OPTIONS"])
        .allowed_headers(vec![http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(3600)
}
