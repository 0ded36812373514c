pub mod aggregate;
pub mod ranking;

pub use aggregate::{aggregate, AggregateResult};
pub use ranking::{rank, RankResult};
