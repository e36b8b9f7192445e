pub mod make;

pub use make::ScaffoldOutcome;
