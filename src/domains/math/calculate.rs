//! Arithmetic expression evaluation tool.
//!
//! A small recursive-descent evaluator over `+ - * / %`, `^`
//! (right-associative), unary minus, parentheses and decimal literals.
//! Evaluation is pure f64 arithmetic; any non-finite outcome (division by
//! zero, overflow) is a domain error.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::number_value;
use crate::core::{Result, ToolRegistry, ToolResult};
use crate::domains::register_tool;

/// Parameters for the calculate tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MathCalculateParams {
    /// Arithmetic expression, e.g. "(10 + 5) * 2".
    pub expression: String,
}

/// Calculate tool - evaluates an arithmetic expression.
pub struct MathCalculateTool;

impl MathCalculateTool {
    pub const NAME: &'static str = "math_calculate";

    pub const DESCRIPTION: &'static str =
        "Evaluate an arithmetic expression with + - * / % ^, parentheses and \
         unary minus. Returns the value and whether it is an integer or float.";

    /// Execute the tool logic.
    pub fn execute(params: &MathCalculateParams) -> ToolResult {
        let value = match evaluate(&params.expression) {
            Ok(v) => v,
            Err(message) => return ToolResult::failure(message),
        };

        if !value.is_finite() {
            return ToolResult::failure(
                "Expression did not evaluate to a finite number",
            );
        }

        let (value, kind) = number_value(value);
        ToolResult::success(json!({
            "value": value,
            "type": kind,
            "expression": params.expression,
        }))
    }

    /// Register this tool.
    pub fn register(registry: &mut ToolRegistry) -> Result<()> {
        register_tool(registry, Self::NAME, Self::DESCRIPTION, Self::execute)
    }
}

// ============================================================================
// Expression evaluator
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    LeftParen,
    RightParen,
}

fn tokenize(input: &str) -> std::result::Result<Vec<Token>, String> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        match c {
            ' ' | '\t' | '\n' | '\r' => {
                chars.next();
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '%' => {
                chars.next();
                tokens.push(Token::Percent);
            }
            '^' => {
                chars.next();
                tokens.push(Token::Caret);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LeftParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RightParen);
            }
            '0'..='9' | '.' => {
                let mut end = start;
                while let Some(&(i, d)) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        end = i + d.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let literal = &input[start..end];
                let number = literal
                    .parse::<f64>()
                    .map_err(|_| format!("Invalid number: '{literal}'"))?;
                tokens.push(Token::Number(number));
            }
            other => return Err(format!("Unexpected character: '{other}'")),
        }
    }

    Ok(tokens)
}

/// Recursive-descent parser over the token stream.
struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.position);
        self.position += 1;
        token
    }

    /// expression := term (('+' | '-') term)*
    fn expression(&mut self) -> std::result::Result<f64, String> {
        let mut value = self.term()?;
        while let Some(op) = self.peek() {
            match op {
                Token::Plus => {
                    self.advance();
                    value += self.term()?;
                }
                Token::Minus => {
                    self.advance();
                    value -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    /// term := power (('*' | '/' | '%') power)*
    fn term(&mut self) -> std::result::Result<f64, String> {
        let mut value = self.power()?;
        while let Some(op) = self.peek() {
            match op {
                Token::Star => {
                    self.advance();
                    value *= self.power()?;
                }
                Token::Slash => {
                    self.advance();
                    value /= self.power()?;
                }
                Token::Percent => {
                    self.advance();
                    value %= self.power()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    /// power := unary ('^' power)?   (right-associative)
    fn power(&mut self) -> std::result::Result<f64, String> {
        let base = self.unary()?;
        if matches!(self.peek(), Some(Token::Caret)) {
            self.advance();
            let exponent = self.power()?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    /// unary := '-' unary | primary
    fn unary(&mut self) -> std::result::Result<f64, String> {
        if matches!(self.peek(), Some(Token::Minus)) {
            self.advance();
            return Ok(-self.unary()?);
        }
        self.primary()
    }

    /// primary := number | '(' expression ')'
    fn primary(&mut self) -> std::result::Result<f64, String> {
        match self.advance() {
            Some(Token::Number(n)) => Ok(*n),
            Some(Token::LeftParen) => {
                let value = self.expression()?;
                match self.advance() {
                    Some(Token::RightParen) => Ok(value),
                    _ => Err("Expected closing parenthesis".to_string()),
                }
            }
            Some(token) => Err(format!("Unexpected token: {token:?}")),
            None => Err("Unexpected end of expression".to_string()),
        }
    }
}

/// Evaluate an arithmetic expression.
fn evaluate(input: &str) -> std::result::Result<f64, String> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err("Empty expression".to_string());
    }
    let mut parser = Parser::new(&tokens);
    let value = parser.expression()?;
    if parser.peek().is_some() {
        return Err(format!(
            "Unexpected trailing input in expression: '{input}'"
        ));
    }
    Ok(value)
}

// ============================================================================
// Tests
// ============================================================================
