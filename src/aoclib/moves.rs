use std::str::FromStr;

use derive_more::Display;
use nom::{
    character::complete::{anychar, char},
    combinator::{all_consuming, map, map_res},
    sequence::separated_pair,
    Finish, IResult,
};

use crate::{MalformedInput, Point};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    #[display(fmt = "U")]
    Up,
    #[display(fmt = "D")]
    Down,
    #[display(fmt = "L")]
    Left,
    #[display(fmt = "R")]
    Right,
}

impl Direction {
    pub fn unit_vector(self) -> Point {
        match self {
            Direction::Up => Point::new(0, 1),
            Direction::Down => Point::new(0, -1),
            Direction::Left => Point::new(-1, 0),
            Direction::Right => Point::new(1, 0),
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = MalformedInput;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Ok(match c {
            'U' => Direction::Up,
            'D' => Direction::Down,
            'L' => Direction::Left,
            'R' => Direction::Right,
            other => {
                return Err(MalformedInput::new(
                    &other.to_string(),
                    "a direction",
                    "one of U, D, L, R",
                ))
            }
        })
    }
}

/// One line of rope input: a direction and how many unit steps to take in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCommand {
    pub direction: Direction,
    pub count: u32,
}

impl MoveCommand {
    const WHAT: &'static str = "a move command";
    const EXPECTED: &'static str = "`<U|D|L|R> <positive count>`";

    pub fn steps(&self) -> impl Iterator<Item = Point> + Clone {
        std::iter::repeat(self.direction.unit_vector()).take(self.count as usize)
    }
}

fn parse_move_command(s: &str) -> IResult<&str, MoveCommand> {
    map(
        separated_pair(
            map_res(anychar, Direction::try_from),
            char(' '),
            nom::character::complete::u32,
        ),
        |(direction, count)| MoveCommand { direction, count },
    )(s)
}

impl FromStr for MoveCommand {
    type Err = MalformedInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || MalformedInput::new(s, Self::WHAT, Self::EXPECTED);
        let (_, command) = all_consuming(parse_move_command)(s.trim_end())
            .finish()
            .map_err(|_| malformed())?;
        if command.count == 0 {
            return Err(malformed());
        }
        Ok(command)
    }
}

pub fn parse_moves(line: &str) -> Result<impl Iterator<Item = Point> + Clone, MalformedInput> {
    let command: MoveCommand = line.parse()?;
    Ok(command.steps())
}
