use std::io;

use tiny_http::{Request, Server};

use crate::config::Config;
use crate::context::Context;
use crate::error::{AppError, HandlerError};
use crate::handlers::{handle_get, handle_post, internal_error, not_implemented};
use crate::logger::get_reporter;
use crate::request::{Headers, Method, Reply};


const MODULE: &str = "SERVER";


pub fn bind(host: &str, port: u16) -> Result<Server, AppError> {
    let addr = format!("{}:{}", host, port);
    Server::http(&addr)
        .map_err(get_reporter(MODULE, "Could not start server"))
        .map_err(|reason| AppError::Bind { addr, reason })
}

/// Binds the listener and serves forever. Only returns on bind failure.
pub fn run(cfg: &Config) -> Result<(), AppError> {
    let server = bind(&cfg.server.host, cfg.server.port)?;
    info!("[{}] Starting server on port {}...", MODULE, cfg.server.port);

    serve(&server);
    Ok(())
}

/// One request is fully answered before the next one is taken
pub fn serve(server: &Server) {
    for r in server.incoming_requests() {
        if let Err(e) = handle_request(r, Context::new()) {
            error!("[{}] Failed to send response: {}", MODULE, e);
        }
    }
}

fn handle_request(mut r: Request, mut ctx: Context) -> io::Result<()> {
    let method = Method::from(r.method());
    let headers = Headers::from(r.headers());
    info!("New Request [qid={}]: method: {}; url: {}; headers='{}'", ctx.qid, method, r.url(), headers);

    let reply = dispatch(&method, &headers, &mut r).unwrap_or_else(|e| internal_error(&e));
    respond(r, &mut ctx, reply)
}

fn dispatch(method: &Method, headers: &Headers, r: &mut Request) -> Result<Reply, HandlerError> {
    match method {
        Method::Get => Ok(handle_get()),
        Method::Post => handle_post(headers, r.as_reader()),
        Method::Other(_) => Ok(not_implemented(method)),
    }
}

fn respond(r: Request, ctx: &mut Context, reply: Reply) -> io::Result<()> {
    let code = reply.status;
    let sent = reply.body.len();

    let result = r.respond(reply.into_response());

    ctx.fix();
    info!("Respond to [{}]: time: {}ms; status: {}; sent: {} bytes", ctx.qid, ctx.time_ms(), code, sent);

    result
}
