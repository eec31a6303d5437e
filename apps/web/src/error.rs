use std::borrow::Cow;
use tour::kernel::config::ConfigError;
use tour_logger::LoggerError;

/// Errors that stop the page script from starting.
#[tour_derive::tour_error]
pub enum WebError {
    /// A global such as `window` or `document` is missing.
    #[error("Browser API unavailable{}: {message}", format_context(.context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A DOM call threw.
    #[error("Script error{}: {message}", format_context(.context))]
    Script { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Page config error{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    #[error("Logger error{}: {source}", format_context(.context))]
    Logger { source: LoggerError, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl WebError {
    pub fn unavailable(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Unavailable { message: message.into(), context: None }
    }

    pub fn script(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Script { message: message.into(), context: None }
    }
}
