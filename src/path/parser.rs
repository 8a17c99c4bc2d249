//! Tokenizer for the straight-line subset of SVG path data

use crate::error::{MesherError, Result};
use crate::mesh::Point2D;
use crate::path::rings::PathCommand;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Opcode(char),
    Number(f64),
}

/// Split path data into opcode letters and numbers
///
/// Numbers follow the SVG grammar: optional sign, digits with an optional
/// fraction, optional exponent. Whitespace and commas separate tokens; a sign
/// or a second decimal point also starts a new number (`10-5`, `1.5.5`).
fn tokenize(data: &str) -> Result<Vec<Token>> {
    let bytes = data.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        match c {
            b' ' | b'\t' | b'\n' | b'\r' | b'\x0C' | b',' => i += 1,
            b'+' | b'-' | b'.' | b'0'..=b'9' => {
                let (value, end) = scan_number(data, i)?;
                tokens.push(Token::Number(value));
                i = end;
            }
            c if c.is_ascii_alphabetic() => {
                tokens.push(Token::Opcode(c as char));
                i += 1;
            }
            _ => {
                let ch = data[i..].chars().next().unwrap_or('?');
                return Err(MesherError::MalformedPathCommand(format!(
                    "Unexpected character '{}' at offset {}",
                    ch, i
                )));
            }
        }
    }

    Ok(tokens)
}

/// Scan one number starting at `start`, returning its value and end offset
fn scan_number(data: &str, start: usize) -> Result<(f64, usize)> {
    let bytes = data.as_bytes();
    let mut i = start;

    if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while matches!(bytes.get(i), Some(b) if b.is_ascii_digit()) {
        i += 1;
    }
    let mut digits = i - int_start;

    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let frac_start = i;
        while matches!(bytes.get(i), Some(b) if b.is_ascii_digit()) {
            i += 1;
        }
        digits += i - frac_start;
    }

    if digits == 0 {
        return Err(MesherError::MalformedPathCommand(format!(
            "Invalid number at offset {}",
            start
        )));
    }

    // Exponent only when followed by digits, so "1e" leaves 'e' as an opcode
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        if matches!(bytes.get(j), Some(b) if b.is_ascii_digit()) {
            while matches!(bytes.get(j), Some(b) if b.is_ascii_digit()) {
                j += 1;
            }
            i = j;
        }
    }

    let text = &data[start..i];
    let value = text.parse::<f64>().map_err(|e| {
        MesherError::MalformedPathCommand(format!("Invalid number '{}': {}", text, e))
    })?;
    if !value.is_finite() {
        return Err(MesherError::MalformedPathCommand(format!(
            "Number '{}' is out of range",
            text
        )));
    }

    Ok((value, i))
}

/// Parse path data into straight-line drawing commands
///
/// Supports `M m L l H h V v Z z`. Operands may repeat after an opcode; extra
/// pairs after a move are implicit line commands with the same relativity.
pub fn parse_path_data(data: &str) -> Result<Vec<PathCommand>> {
    let tokens = tokenize(data)?;
    let mut commands = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let opcode = match tokens[i] {
            Token::Opcode(op) => op,
            Token::Number(value) => {
                return Err(MesherError::MalformedPathCommand(format!(
                    "Number {} appears before any command",
                    value
                )));
            }
        };
        i += 1;

        let operands = take_numbers(&tokens, &mut i);
        let relative = opcode.is_ascii_lowercase();

        match opcode {
            'M' | 'm' => {
                let points = operand_pairs(opcode, &operands)?;
                for (k, point) in points.into_iter().enumerate() {
                    if k == 0 {
                        commands.push(PathCommand::MoveTo { point, relative });
                    } else {
                        commands.push(PathCommand::LineTo { point, relative });
                    }
                }
            }
            'L' | 'l' => {
                for point in operand_pairs(opcode, &operands)? {
                    commands.push(PathCommand::LineTo { point, relative });
                }
            }
            'H' | 'h' => {
                require_operands(opcode, &operands)?;
                commands.extend(
                    operands
                        .iter()
                        .map(|&x| PathCommand::HorizontalLineTo { x, relative }),
                );
            }
            'V' | 'v' => {
                require_operands(opcode, &operands)?;
                commands.extend(
                    operands
                        .iter()
                        .map(|&y| PathCommand::VerticalLineTo { y, relative }),
                );
            }
            'Z' | 'z' => {
                if !operands.is_empty() {
                    return Err(MesherError::MalformedPathCommand(format!(
                        "'{}' takes no operands, found {}",
                        opcode,
                        operands.len()
                    )));
                }
                commands.push(PathCommand::ClosePath);
            }
            other => {
                return Err(MesherError::MalformedPathCommand(format!(
                    "Unsupported path command '{}'",
                    other
                )));
            }
        }
    }

    Ok(commands)
}

fn take_numbers(tokens: &[Token], i: &mut usize) -> Vec<f64> {
    let mut numbers = Vec::new();
    while let Some(Token::Number(value)) = tokens.get(*i) {
        numbers.push(*value);
        *i += 1;
    }
    numbers
}

fn require_operands(opcode: char, operands: &[f64]) -> Result<()> {
    if operands.is_empty() {
        return Err(MesherError::MalformedPathCommand(format!(
            "'{}' is missing its operand",
            opcode
        )));
    }
    Ok(())
}

fn operand_pairs(opcode: char, operands: &[f64]) -> Result<Vec<Point2D>> {
    require_operands(opcode, operands)?;
    if operands.len() % 2 != 0 {
        return Err(MesherError::MalformedPathCommand(format!(
            "'{}' expects coordinate pairs, found {} numbers",
            opcode,
            operands.len()
        )));
    }

    Ok(operands
        .chunks_exact(2)
        .map(|pair| Point2D::new(pair[0], pair[1]))
        .collect())
}
