use tour_derive::tour_error;

#[tour_error]
pub enum DemoError {
    #[error("Decode error: {0}")]
    Decode(std::num::ParseIntError),
}

fn main() {}
