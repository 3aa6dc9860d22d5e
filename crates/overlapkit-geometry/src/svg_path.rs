//! SVG path data parsing.
//!
//! Only the absolute `M`, `L`, `Q`, `C` and `Z` commands produce geometry.
//! Every other command (relative forms, `H`, `V`, `S`, `T`, `A`) is consumed
//! together with its arguments and dropped, so it never moves the pen.

use overlapkit_core::{PathCommand, PathError};
use tracing::trace;

/// Parse path data, skipping anything malformed.
///
/// Never fails: a command with missing or unparseable arguments is dropped
/// and stray tokens are ignored.
pub fn parse_svg_path(data: &str) -> Vec<PathCommand> {
    let mut commands = Vec::new();
    // Lenient mode never produces an error.
    let _ = parse_into(data, false, &mut commands);
    commands
}

/// Parse path data, reporting the first syntax problem.
///
/// Well-formed but unsupported commands are still ignored rather than
/// rejected.
pub fn parse_svg_path_strict(data: &str) -> Result<Vec<PathCommand>, PathError> {
    let mut commands = Vec::new();
    parse_into(data, true, &mut commands)?;
    Ok(commands)
}

fn command_letter(token: &str) -> Option<char> {
    let mut chars = token.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    matches!(
        c.to_ascii_uppercase(),
        'M' | 'L' | 'H' | 'V' | 'C' | 'S' | 'Q' | 'T' | 'A' | 'Z'
    )
    .then_some(c)
}

/// Number of arguments consumed per repetition of a command.
fn arity(command: char) -> usize {
    match command.to_ascii_uppercase() {
        'M' | 'L' | 'T' => 2,
        'H' | 'V' => 1,
        'Q' | 'S' => 4,
        'C' => 6,
        'A' => 7,
        _ => 0,
    }
}

fn parse_number(command: char, token: &str) -> Result<f64, PathError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| PathError::InvalidNumber {
            command,
            token: token.to_string(),
        })
}

fn parse_into(
    data: &str,
    strict: bool,
    commands: &mut Vec<PathCommand>,
) -> Result<(), PathError> {
    let tokens = tokenize_svg_path(data);
    let mut i = 0usize;

    while i < tokens.len() {
        let Some(cmd) = command_letter(&tokens[i]) else {
            if strict {
                return Err(PathError::MissingCommand {
                    token: tokens[i].clone(),
                });
            }
            trace!(token = %tokens[i], "skipping stray path token");
            i += 1;
            continue;
        };
        i += 1;

        let start = i;
        while i < tokens.len() && command_letter(&tokens[i]).is_none() {
            i += 1;
        }
        let args = &tokens[start..i];

        let per_group = arity(cmd);
        if per_group == 0 {
            // Close takes no arguments; anything trailing it is noise.
            commands.push(PathCommand::Close);
            if !args.is_empty() {
                if strict {
                    return Err(PathError::MissingCommand {
                        token: args[0].clone(),
                    });
                }
                trace!(count = args.len(), "ignoring arguments after close");
            }
            continue;
        }

        if args.is_empty() {
            if strict {
                return Err(PathError::MissingArguments {
                    command: cmd,
                    expected: per_group,
                    found: 0,
                });
            }
            trace!(command = %cmd, "dropping command without arguments");
            continue;
        }

        for (repeat, group) in args.chunks(per_group).enumerate() {
            if group.len() < per_group {
                if strict {
                    return Err(PathError::MissingArguments {
                        command: cmd,
                        expected: per_group,
                        found: group.len(),
                    });
                }
                trace!(command = %cmd, found = group.len(), "dropping truncated command");
                break;
            }

            let values = match group
                .iter()
                .map(|t| parse_number(cmd, t))
                .collect::<Result<Vec<f64>, PathError>>()
            {
                Ok(values) => values,
                Err(err) if strict => return Err(err),
                Err(err) => {
                    trace!(%err, "dropping command with bad argument");
                    continue;
                }
            };

            let parsed = match cmd {
                // Extra pairs after a moveto are implicit linetos.
                'M' if repeat == 0 => PathCommand::move_to(values[0], values[1]),
                'M' | 'L' => PathCommand::line_to(values[0], values[1]),
                'Q' => PathCommand::quad_to(values[0], values[1], values[2], values[3]),
                'C' => PathCommand::cubic_to(
                    values[0], values[1], values[2], values[3], values[4], values[5],
                ),
                other => {
                    trace!(command = %other, "ignoring unsupported path command");
                    continue;
                }
            };
            commands.push(parsed);
        }
    }

    Ok(())
}

/// Tokenize SVG path data into commands and numeric strings.
///
/// This handles commas/whitespace and also splits on `+`/`-` when they begin a
/// new number (e.g. `10-5` -> `10`, `-5`) and on a second decimal point
/// (`0.5.5` -> `0.5`, `.5`), while preserving scientific notation.
fn tokenize_svg_path(path_data: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current_token = String::new();

    for ch in path_data.chars() {
        match ch {
            'M' | 'm' | 'L' | 'l' | 'H' | 'h' | 'V' | 'v' | 'C' | 'c' | 'S' | 's' | 'Q'
            | 'q' | 'T' | 't' | 'A' | 'a' | 'Z' | 'z' => {
                if !current_token.is_empty() {
                    tokens.push(std::mem::take(&mut current_token));
                }
                tokens.push(ch.to_string());
            }
            ' ' | ',' | '\n' | '\r' | '\t' => {
                if !current_token.is_empty() {
                    tokens.push(std::mem::take(&mut current_token));
                }
            }
            '-' | '+' => {
                if current_token.is_empty() {
                    current_token.push(ch);
                    continue;
                }

                // If the previous char indicates scientific notation, keep the sign.
                if matches!(current_token.chars().last(), Some('e' | 'E')) {
                    current_token.push(ch);
                } else {
                    tokens.push(std::mem::take(&mut current_token));
                    current_token.push(ch);
                }
            }
            '.' => {
                let has_exponent = current_token.contains(['e', 'E']);
                if current_token.contains('.') && !has_exponent {
                    tokens.push(std::mem::take(&mut current_token));
                }
                current_token.push(ch);
            }
            _ => current_token.push(ch),
        }
    }

    if !current_token.is_empty() {
        tokens.push(current_token);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_compact_numbers() {
        assert_eq!(
            tokenize_svg_path("M10-5L1e-3,.5.25"),
            vec!["M", "10", "-5", "L", "1e-3", ".5", ".25"]
        );
    }

    #[test]
    fn test_parse_square() {
        let cmds = parse_svg_path("M0 0 L10 0 L10 10 L0 10 Z");
        assert_eq!(
            cmds,
            vec![
                PathCommand::move_to(0.0, 0.0),
                PathCommand::line_to(10.0, 0.0),
                PathCommand::line_to(10.0, 10.0),
                PathCommand::line_to(0.0, 10.0),
                PathCommand::Close,
            ]
        );
    }

    #[test]
    fn test_implicit_repeats() {
        let cmds = parse_svg_path("M0 0 10 0 10 10 Q 1 2 3 4 5 6 7 8");
        assert_eq!(
            cmds,
            vec![
                PathCommand::move_to(0.0, 0.0),
                PathCommand::line_to(10.0, 0.0),
                PathCommand::line_to(10.0, 10.0),
                PathCommand::quad_to(1.0, 2.0, 3.0, 4.0),
                PathCommand::quad_to(5.0, 6.0, 7.0, 8.0),
            ]
        );
    }

    #[test]
    fn test_unsupported_commands_are_dropped_with_arguments() {
        let cmds = parse_svg_path("M0 0 h 5 l 1 1 A 5 5 0 0 1 10 10 L 2 2");
        assert_eq!(
            cmds,
            vec![PathCommand::move_to(0.0, 0.0), PathCommand::line_to(2.0, 2.0)]
        );
    }

    #[test]
    fn test_lenient_skips_malformed() {
        let cmds = parse_svg_path("junk M0 0 L 5 C 1 2 3 4 5 x6 L 7 7 Z");
        assert_eq!(
            cmds,
            vec![
                PathCommand::move_to(0.0, 0.0),
                PathCommand::line_to(7.0, 7.0),
                PathCommand::Close
            ]
        );
        assert!(parse_svg_path("").is_empty());
    }

    #[test]
    fn test_strict_reports_errors() {
        assert_eq!(
            parse_svg_path_strict("0 0 L 1 1"),
            Err(PathError::MissingCommand {
                token: "0".to_string()
            })
        );
        assert_eq!(
            parse_svg_path_strict("M 0 0 C 1 2 3 4"),
            Err(PathError::MissingArguments {
                command: 'C',
                expected: 6,
                found: 4
            })
        );
        assert!(matches!(
            parse_svg_path_strict("M 0 1x"),
            Err(PathError::InvalidNumber { command: 'M', .. })
        ));
        assert!(parse_svg_path_strict("M 0 0 l 5 5 L 1 1 Z").is_ok());
    }
}
