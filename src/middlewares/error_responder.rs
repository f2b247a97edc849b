// Start of file: /src/middlewares/error_responder.rs

use axum::{
    body::Body,
    extract::State,
    http::{Request, Response},
    middleware::Next,
    response::IntoResponse,
};

use crate::config::state::AppState;
use crate::responder::{ErrorResponse, RaisedError, RequestDescriptor};

/*
    * Terminal error stage. Runs the inner service and, when the response
    * carries a raised error, swaps it for the responder's rendering.
    * Responses without a raised error pass through untouched.
*/
pub async fn error_responder(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response<Body> {
    // Capture the path before the request is consumed
    let request: RequestDescriptor = RequestDescriptor::from_uri(req.uri());

    let response: Response<Body> = next.run(req).await;

    let Some(RaisedError(error)) = response.extensions().get::<RaisedError>().cloned() else {
        return response;
    };

    let rendered: ErrorResponse = state.responder.respond(error.as_ref(), &request);
    rendered.into_response()
}

// End of file: /src/middlewares/error_responder.rs
