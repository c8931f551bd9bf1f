pub mod adjudicator;
pub mod error;
pub mod lint;
pub mod template;

pub use adjudicator::Adjudicator;
