use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use color_eyre::eyre::Report;

#[derive(Debug)]
pub struct ServerError(pub(crate) Report, pub(crate) StatusCode);

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let error: &(dyn std::error::Error + 'static) = self.0.as_ref();
        sentry::capture_error(error);

        tracing::error!(error = ?self.0, status = %self.1, "ServerError");

        (self.1, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for ServerError
where
    E: Into<Report>,
{
    fn from(err: E) -> Self {
        ServerError(err.into(), StatusCode::INTERNAL_SERVER_ERROR)
    }
}
