use crate::error::{BookingError, BookingErrorExt};
use tour_domain::booking::{BookingResponse, FormPayload};

/// Delivers a booking form to the server.
///
/// Implementors only move bytes; decoding the reply is shared by every transport.
pub trait BookingTransport {
    /// POSTs `payload` to `endpoint` and yields the raw response body, whatever the status.
    fn send(
        &self,
        endpoint: &str,
        payload: &FormPayload,
    ) -> impl Future<Output = Result<String, BookingError>>;

    /// Sends the form and decodes the JSON reply.
    ///
    /// # Errors
    /// [`BookingError::Transport`] from [`send`](Self::send), or [`BookingError::Decode`]
    /// when the body is not a JSON object.
    fn post(
        &self,
        endpoint: &str,
        payload: &FormPayload,
    ) -> impl Future<Output = Result<BookingResponse, BookingError>> {
        async move {
            let body = self.send(endpoint, payload).await?;
            serde_json::from_str(&body).context("Failed to decode booking response")
        }
    }
}
