use std::borrow::Cow;

/// Errors raised while talking to the booking endpoint.
#[tour_derive::tour_error]
pub enum BookingError {
    /// The request never produced a readable response body.
    #[error("Booking transport error{}: {message}", format_context(.context))]
    Transport { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The response body is not the expected JSON.
    #[error("Booking response error{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Internal booking error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl BookingError {
    pub fn transport(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Transport { message: message.into(), context: None }
    }
}
