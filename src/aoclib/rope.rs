use std::collections::HashSet;

use anyhow::Context;
use itertools::Itertools;
use nonempty::NonEmpty;

use crate::{MoveCommand, Point};

/// A rope of knots on an unbounded grid. The head is driven by move commands
/// and every other knot chases the one in front of it.
#[derive(Debug, Clone)]
pub struct KnotChain {
    knots: NonEmpty<Point>,
    visited: HashSet<Point>,
    steps_applied: u64,
}

impl KnotChain {
    pub fn new(num_knots: usize) -> anyhow::Result<Self> {
        let knots = NonEmpty::from_vec(vec![Point::origin(); num_knots])
            .ok_or_else(|| anyhow::anyhow!("a knot chain needs at least one knot"))?;
        Ok(Self {
            knots,
            visited: HashSet::new(),
            steps_applied: 0,
        })
    }

    pub fn num_knots(&self) -> usize {
        self.knots.len()
    }

    pub fn knots(&self) -> impl Iterator<Item = &Point> {
        self.knots.iter()
    }

    pub fn head(&self) -> Point {
        self.knots.head
    }

    pub fn tail(&self) -> Point {
        *self.knots.last()
    }

    pub fn visited(&self) -> &HashSet<Point> {
        &self.visited
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn steps_applied(&self) -> u64 {
        self.steps_applied
    }

    pub fn is_taut(&self) -> bool {
        self.knots.iter().tuple_windows().all(|(a, b)| a.touches(b))
    }

    pub fn apply_unit_step(&mut self, direction: Point) {
        self.knots.head += direction;
        let mut leader = self.knots.head;
        for follower in self.knots.tail.iter_mut() {
            // nothing behind a knot that didn't move can move either
            if follower.touches(&leader) {
                break;
            }
            let step = follower.step_toward(&leader);
            *follower += step;
            leader = *follower;
        }
        self.visited.insert(self.tail());
        self.steps_applied += 1;
    }

    pub fn apply(&mut self, command: &MoveCommand) {
        log::trace!("applying {} {}", command.direction, command.count);
        for step in command.steps() {
            self.apply_unit_step(step);
        }
    }
}

/// Run every move line through a fresh chain of `num_knots` knots, calling
/// `on_step` with the chain and the index of the current line after each unit
/// step. An error from `on_step` aborts the whole run.
pub fn simulate<I, S, F>(lines: I, num_knots: usize, mut on_step: F) -> anyhow::Result<KnotChain>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(&KnotChain, usize) -> anyhow::Result<()>,
{
    let mut chain = KnotChain::new(num_knots)?;
    for (i, line) in lines.into_iter().enumerate() {
        let command: MoveCommand = line
            .as_ref()
            .parse()
            .with_context(|| format!("invalid move on line {}", i + 1))?;
        log::trace!("line {}: {:?}", i + 1, command);
        for step in command.steps() {
            chain.apply_unit_step(step);
            on_step(&chain, i)?;
        }
    }
    log::debug!(
        "applied {} unit steps to {} knots; tail ended at {}",
        chain.steps_applied(),
        chain.num_knots(),
        chain.tail()
    );
    Ok(chain)
}

/// Count the distinct positions the last of `num_knots` knots visits.
pub fn calculate_visited_fields<I, S>(move_lines: I, num_knots: usize) -> anyhow::Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let chain = simulate(move_lines, num_knots, |_, _| Ok(()))?;
    Ok(chain.visited_count())
}
