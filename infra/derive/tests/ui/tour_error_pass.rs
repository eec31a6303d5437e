use std::borrow::Cow;
use tour_derive::tour_error;

#[tour_error]
pub enum DemoError {
    #[error("Decode error{}: {source}", format_context(.context))]
    Decode {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, DemoError> {
    raw.parse::<u32>().context("Parsing guest count")
}

fn main() {
    let err = parse("many").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Decode error (Parsing guest count): invalid digit found in string"
    );

    let internal: DemoError = "no form".into();
    let internal: Result<(), DemoError> = Err(internal);
    let err = internal.context("Submitting").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (Submitting): no form");
}
