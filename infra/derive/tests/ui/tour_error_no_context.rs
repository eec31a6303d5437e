use tour_derive::tour_error;

#[tour_error]
pub enum DemoError {
    #[error("Decode error: {source}")]
    Decode {
        #[source]
        source: std::num::ParseIntError,
    },
}

fn main() {}
