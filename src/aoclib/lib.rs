mod error;
mod input;
mod interval;
mod moves;
mod point;
mod rope;

pub use error::MalformedInput;
pub use input::read_input;
pub use interval::{tally_intervals, Interval, IntervalPair, IntervalTally};
pub use moves::{parse_moves, Direction, MoveCommand};
pub use point::{DimVal, Point};
pub use rope::{calculate_visited_fields, simulate, KnotChain};
