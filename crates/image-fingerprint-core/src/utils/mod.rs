mod round;

pub use round::round_to;
