use std::fmt;
use std::str::FromStr;

use anyhow::Context;
use nom::{
    character::complete::char,
    combinator::{all_consuming, map_opt},
    sequence::separated_pair,
    Finish, IResult,
};

use crate::MalformedInput;

/// An inclusive range of integers, `lo` never above `hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    lo: i64,
    hi: i64,
}

impl Interval {
    const WHAT: &'static str = "an interval";
    const EXPECTED: &'static str = "`<lo>-<hi>` with lo <= hi";

    pub fn new(lo: i64, hi: i64) -> Option<Self> {
        (lo <= hi).then_some(Self { lo, hi })
    }

    pub fn fully_contains(&self, other: &Self) -> bool {
        self.lo <= other.lo && self.hi >= other.hi
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.lo <= other.hi && other.lo <= self.hi
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lo, self.hi)
    }
}

fn parse_interval(s: &str) -> IResult<&str, Interval> {
    map_opt(
        separated_pair(
            nom::character::complete::i64,
            char('-'),
            nom::character::complete::i64,
        ),
        |(lo, hi)| Interval::new(lo, hi),
    )(s)
}

impl FromStr for Interval {
    type Err = MalformedInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_consuming(parse_interval)(s.trim())
            .finish()
            .map(|(_, interval)| interval)
            .map_err(|_| MalformedInput::new(s, Self::WHAT, Self::EXPECTED))
    }
}

/// The two intervals found on one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalPair {
    pub first: Interval,
    pub second: Interval,
}

impl IntervalPair {
    const WHAT: &'static str = "an interval pair";
    const EXPECTED: &'static str = "`<lo>-<hi>,<lo>-<hi>` with lo <= hi";

    pub fn has_containment(&self) -> bool {
        self.first.fully_contains(&self.second) || self.second.fully_contains(&self.first)
    }

    pub fn has_overlap(&self) -> bool {
        self.first.overlaps(&self.second)
    }
}

fn parse_interval_pair(s: &str) -> IResult<&str, IntervalPair> {
    let (rest, (first, second)) = separated_pair(parse_interval, char(','), parse_interval)(s)?;
    Ok((rest, IntervalPair { first, second }))
}

impl FromStr for IntervalPair {
    type Err = MalformedInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_consuming(parse_interval_pair)(s.trim())
            .finish()
            .map(|(_, pair)| pair)
            .map_err(|_| MalformedInput::new(s, Self::WHAT, Self::EXPECTED))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IntervalTally {
    pub containing: usize,
    pub overlapping: usize,
}

/// Count the lines whose pair has a containment and the lines whose pair
/// overlaps. Stops at the first malformed line.
pub fn tally_intervals<I, S>(lines: I) -> anyhow::Result<IntervalTally>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tally = IntervalTally::default();
    for (i, line) in lines.into_iter().enumerate() {
        let pair: IntervalPair = line
            .as_ref()
            .parse()
            .with_context(|| format!("invalid assignment on line {}", i + 1))?;
        if pair.has_containment() {
            log::trace!("{} and {} contain one another", pair.first, pair.second);
            tally.containing += 1;
        }
        if pair.has_overlap() {
            tally.overlapping += 1;
        }
    }
    log::debug!("{:?}", tally);
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::{tally_intervals, Interval, IntervalPair, IntervalTally};

    fn interval(lo: i64, hi: i64) -> Interval {
        Interval::new(lo, hi).unwrap()
    }

    #[test]
    fn test_interval_overlaps() {
        assert!(interval(0, 5).overlaps(&interval(5, 10)));
        assert!(interval(10, 10).overlaps(&interval(0, 20)));
        assert!(interval(10, 10).overlaps(&interval(0, 10)));
        assert!(interval(0, 20).overlaps(&interval(10, 10)));
        assert!(!interval(2, 4).overlaps(&interval(6, 8)));
        assert!(!interval(6, 8).overlaps(&interval(2, 4)));
    }

    #[test]
    fn test_containment_one_way() {
        let pair: IntervalPair = "2-8,3-7".parse().unwrap();
        assert!(pair.first.fully_contains(&pair.second));
        assert!(!pair.second.fully_contains(&pair.first));
        assert!(pair.has_containment());
        assert!(pair.has_overlap());
    }

    #[test]
    fn test_touching_ends_overlap_without_containment() {
        let pair: IntervalPair = "5-7,7-9".parse().unwrap();
        assert!(pair.has_overlap());
        assert!(pair.second.overlaps(&pair.first));
        assert!(!pair.first.fully_contains(&pair.second));
        assert!(!pair.second.fully_contains(&pair.first));
        assert!(!pair.has_containment());
    }

    #[test]
    fn test_equal_intervals_contain_each_other() {
        let a = interval(6, 6);
        assert!(a.fully_contains(&a));
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_parse_interval() {
        assert_eq!("2-4".parse::<Interval>().unwrap(), interval(2, 4));
        assert_eq!(" 12-40\n".parse::<Interval>().unwrap(), interval(12, 40));
        assert_eq!(interval(2, 4).to_string(), "2-4");
    }

    #[test]
    fn test_rejects_malformed_intervals() {
        for s in ["", "2", "2-", "-4", "4-2", "2-4-6", "a-b", "2 - 4"] {
            assert!(s.parse::<Interval>().is_err(), "{:?} should not parse", s);
        }
        for s in ["2-4", "2-4,", "2-4;6-8", "2-4,6-8,1-1", "2-4,8-6"] {
            assert!(s.parse::<IntervalPair>().is_err(), "{:?} should not parse", s);
        }
    }

    #[test]
    fn test_tally() {
        let lines = ["2-4,6-8", "2-3,4-5", "5-7,7-9", "2-8,3-7", "6-6,4-6", "2-6,4-8"];
        assert_eq!(
            tally_intervals(lines).unwrap(),
            IntervalTally {
                containing: 2,
                overlapping: 4,
            }
        );
    }

    #[test]
    fn test_tally_aborts_on_bad_line() {
        let err = tally_intervals(["2-4,6-8", "2-4 6-8"]).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("line 2"), "{}", message);
        assert!(message.contains("\"2-4 6-8\""), "{}", message);
    }
}
