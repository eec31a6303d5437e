use tour_derive::tour_error;

#[tour_error]
pub enum DemoError {
    #[error("Internal error: {message}")]
    Internal { message: String, context: String },
}

fn main() {}
