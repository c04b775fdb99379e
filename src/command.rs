//! Inbound command parsing
//!
//! Turns user text such as `push 60` or `splice 2 99` into a [`Command`],
//! rejecting anything that is not a plain decimal integer before it can reach
//! the generator. A command carries no array; [`Command::request`] binds it
//! to the array it should run against.

use crate::generator::OperationRequest;
use crate::snapshot::OperationKind;
use std::fmt;

/// Errors from parsing user-supplied operation text
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("No operation given")]
    Empty,

    #[error("'{operand}' is not an integer")]
    InvalidNumber { operand: String },

    #[error("{operation} takes at most {max} operand(s)")]
    TooManyOperands { operation: String, max: usize },
}

/// A parsed operation, not yet bound to an array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub kind: OperationKind,
    pub index: Option<i64>,
    pub value: Option<i64>,
}

impl Command {
    pub fn request<'a>(&self, source: &'a [i64]) -> OperationRequest<'a> {
        OperationRequest::new(source, self.kind.clone())
            .with_index(self.index)
            .with_value(self.value)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        match self.kind {
            OperationKind::Slice | OperationKind::Splice => {
                for operand in [self.index, self.value].into_iter().flatten() {
                    write!(f, " {}", operand)?;
                }
            }
            _ => {
                if let Some(value) = self.value {
                    write!(f, " {}", value)?;
                }
            }
        }
        Ok(())
    }
}

/// Parse a single integer operand.
///
/// Only optional sign plus decimal digits are accepted, so `NaN`, `inf` and
/// fractional values never become operation parameters.
pub fn parse_operand(text: &str) -> Result<i64, CommandError> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| CommandError::InvalidNumber {
            operand: trimmed.to_string(),
        })
}

/// Parse an operation line: a name followed by up to two integer operands.
///
/// Operand meaning per operation:
/// - `push <value>`, `find <value>`
/// - `pop`
/// - `slice <start> <end>`
/// - `splice <index> [<value>]`
///
/// Unknown names parse successfully; the generator narrates them.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let name = words.next().ok_or(CommandError::Empty)?;
    let kind = OperationKind::from_name(name);

    let operands = words.map(parse_operand).collect::<Result<Vec<_>, _>>()?;

    let max = match kind {
        OperationKind::Pop | OperationKind::Init => 0,
        OperationKind::Push | OperationKind::Find => 1,
        OperationKind::Slice | OperationKind::Splice | OperationKind::Unknown(_) => 2,
    };
    if operands.len() > max {
        return Err(CommandError::TooManyOperands {
            operation: kind.name().to_string(),
            max,
        });
    }

    let (index, value) = match kind {
        OperationKind::Push | OperationKind::Find => (None, operands.first().copied()),
        _ => (operands.first().copied(), operands.get(1).copied()),
    };

    Ok(Command { kind, index, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_push() {
        let cmd = parse_command("push 60").unwrap();
        assert_eq!(cmd.kind, OperationKind::Push);
        assert_eq!(cmd.value, Some(60));
        assert_eq!(cmd.index, None);
    }

    #[test]
    fn test_parse_slice_and_splice() {
        let slice = parse_command("slice 1 4").unwrap();
        assert_eq!((slice.index, slice.value), (Some(1), Some(4)));

        let delete = parse_command("  splice   2 ").unwrap();
        assert_eq!((delete.index, delete.value), (Some(2), None));
        assert_eq!(delete.to_string(), "splice 2");
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        for bad in ["push NaN", "find inf", "push 1.5", "slice 1 x"] {
            assert!(
                matches!(parse_command(bad), Err(CommandError::InvalidNumber { .. })),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_parse_rejects_extra_operands() {
        assert_eq!(
            parse_command("pop 3"),
            Err(CommandError::TooManyOperands {
                operation: "pop".to_string(),
                max: 0
            })
        );
        assert!(parse_command("push 1 2").is_err());
        assert_eq!(parse_command("   "), Err(CommandError::Empty));
    }

    #[test]
    fn test_parse_unknown_operation() {
        let cmd = parse_command("shift").unwrap();
        assert_eq!(cmd.kind, OperationKind::Unknown("shift".to_string()));
    }

    #[test]
    fn test_request_binds_array() {
        let cmd = parse_command("splice 1 9").unwrap();
        let array = [1, 2, 3];
        let request = cmd.request(&array);
        assert_eq!(request, OperationRequest::splice(&array, 1, Some(9)));
    }
}
