use std::io;
use std::path::Path;

use crate::http::mime;
use crate::http::parser::parse_request_line;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::static_files::resolver::{DocumentRoot, ResolvedTarget};

/// Turns one raw request into one response.
///
/// Holds nothing but the immutable document root, so a single instance is
/// shared by every connection.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    root: DocumentRoot,
}

enum DispatchState {
    Start,
    Parsed(Request),
    Resolved(Request, ResolvedTarget),
    Responded(Response),
}

impl Dispatcher {
    pub fn new(root: DocumentRoot) -> Self {
        Self { root }
    }

    pub async fn dispatch(&self, raw: &[u8]) -> Response {
        let mut state = DispatchState::Start;

        loop {
            state = match state {
                DispatchState::Start => match parse_request_line(raw) {
                    Ok(req) => DispatchState::Parsed(req),
                    Err(e) => {
                        tracing::debug!(error = %e, "Rejecting malformed request");
                        DispatchState::Responded(Response::method_not_allowed())
                    }
                },

                DispatchState::Parsed(req) => {
                    if req.is_get() {
                        let target = self.root.resolve(&req.path).await;
                        DispatchState::Resolved(req, target)
                    } else {
                        tracing::info!(
                            method = %req.method,
                            path = %req.path,
                            status = 405,
                            "Method not allowed"
                        );
                        DispatchState::Responded(Response::method_not_allowed())
                    }
                }

                DispatchState::Resolved(req, target) => {
                    let response = self.respond(&req, target).await;
                    tracing::info!(
                        method = %req.method,
                        path = %req.path,
                        status = response.status.as_u16(),
                        "Request served"
                    );
                    DispatchState::Responded(response)
                }

                DispatchState::Responded(response) => return response,
            };
        }
    }

    async fn respond(&self, req: &Request, target: ResolvedTarget) -> Response {
        match target {
            ResolvedTarget::File(path) => Self::read_file(req, &path).await,
            ResolvedTarget::Directory(_) => Self::redirect_to_directory(req),
            ResolvedTarget::OutOfBounds => {
                tracing::warn!(path = %req.path, "Path traversal attempt blocked");
                Response::not_found()
            }
            ResolvedTarget::NotFound => Response::not_found(),
        }
    }

    async fn read_file(req: &Request, path: &Path) -> Response {
        match tokio::fs::read(path).await {
            Ok(contents) => Response::ok(mime::content_type_for(path), contents),
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "Failed to read file");
                Self::read_error_response(req, &e)
            }
        }
    }

    /// Maps a failed read of a resolved file onto a client-facing status.
    fn read_error_response(req: &Request, err: &io::Error) -> Response {
        match err.kind() {
            // Replaced by a directory after resolution
            io::ErrorKind::IsADirectory => Self::redirect_to_directory(req),
            io::ErrorKind::PermissionDenied => Response::forbidden(),
            _ => Response::not_found(),
        }
    }

    fn redirect_to_directory(req: &Request) -> Response {
        Response::moved_permanently(format!("{}/", req.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::request::Method;
    use crate::http::response::StatusCode;

    fn get(path: &str) -> Request {
        Request {
            method: Method::GET,
            path: path.to_string(),
        }
    }

    #[test]
    fn read_of_directory_redirects() {
        let err = io::Error::from(io::ErrorKind::IsADirectory);

        let response = Dispatcher::read_error_response(&get("/docs"), &err);

        assert_eq!(response.status, StatusCode::MovedPermanently);
        assert_eq!(response.header("Location"), Some("/docs/"));
    }

    #[test]
    fn unreadable_file_is_forbidden() {
        let err = io::Error::from(io::ErrorKind::PermissionDenied);

        let response = Dispatcher::read_error_response(&get("/private.txt"), &err);

        assert_eq!(response, Response::forbidden());
    }

    #[test]
    fn other_read_failures_are_not_found() {
        for kind in [
            io::ErrorKind::NotFound,
            io::ErrorKind::InvalidData,
            io::ErrorKind::UnexpectedEof,
            io::ErrorKind::Other,
        ] {
            let response = Dispatcher::read_error_response(&get("/gone.txt"), &io::Error::from(kind));

            assert_eq!(response, Response::not_found(), "{kind:?}");
        }
    }
}
