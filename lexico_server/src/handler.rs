use crate::io::{HttpRequest, HttpResponse, Status};
use serde::Deserialize;


pub const ANALYZE_PATH: &str = "/analyze";

#[derive(Debug, PartialEq, Eq, Deserialize)]
struct AnalyzeRequest {
    code: String,
}

pub fn bad_request() -> HttpResponse {
    HttpResponse::new(Status::BadRequest, "bad request")
}

/// Routes a decoded request.
pub fn handle(request: &HttpRequest) -> HttpResponse {
    if request.path != ANALYZE_PATH {
        return HttpResponse::new(Status::NotFound, "not found");
    }
    match request.method.as_str() {
        "OPTIONS" => HttpResponse::ok(""),
        "POST" => analyze(request),
        _ => HttpResponse::new(Status::MethodNotAllowed, "method not allowed"),
    }
}

fn analyze(request: &HttpRequest) -> HttpResponse {
    if request.body.is_empty() {
        log::error!("Received empty body");
        return bad_request();
    }
    match serde_json::from_slice::<AnalyzeRequest>(&request.body) {
        Ok(AnalyzeRequest { code }) => {
            log::debug!("Analyzing:\n{}", code);
            HttpResponse::ok(lexico_frontend::analyze(&code))
        }
        Err(err) => {
            log::error!("Cannot parse request body: {}", err);
            bad_request()
        }
    }
}
