use super::describe;
use tour::BookingError;
use tour::BookingTransport;
use tour::domain::booking::FormPayload;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, RequestInit, Response, Window};

fn transport_error(err: JsValue) -> BookingError {
    BookingError::transport(describe(&err))
}

/// `fetch` POST with a `multipart/form-data` body.
#[derive(Debug, Clone)]
pub struct FetchTransport {
    window: Window,
}

impl FetchTransport {
    #[must_use]
    pub const fn new(window: Window) -> Self {
        Self { window }
    }
}

impl BookingTransport for FetchTransport {
    /// The body is read whatever the status; error replies still carry JSON.
    async fn send(&self, endpoint: &str, payload: &FormPayload) -> Result<String, BookingError> {
        let data = FormData::new().map_err(transport_error)?;
        for (name, value) in payload.iter() {
            data.append_with_str(name, value).map_err(transport_error)?;
        }

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&data);

        let request = self.window.fetch_with_str_and_init(endpoint, &init);
        let response: Response = JsFuture::from(request)
            .await
            .map_err(transport_error)?
            .dyn_into()
            .map_err(transport_error)?;
        let body = JsFuture::from(response.text().map_err(transport_error)?)
            .await
            .map_err(transport_error)?;

        body.as_string().ok_or_else(|| BookingError::transport("Response body is not text"))
    }
}
