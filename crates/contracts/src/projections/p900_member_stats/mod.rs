mod dto;

pub use dto::{StatsFilter, StatsRow, StatsResponse};
