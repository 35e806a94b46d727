// Copyright (c) The gclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::EvalError;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Token {
    Ident(String),
    Str(String),
    None,
    Equals,
    Comma,
    Colon,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    LParen,
    RParen,
    Eof,
}

pub(crate) struct Spanned {
    pub(crate) token: Token,
    pub(crate) line: usize,
}

/// Tokenizes a manifest's text. The grammar is deliberately tiny: identifiers
/// (bare words, used only in binding position and as the `From` call name),
/// quoted strings, `None`, and the punctuation needed for `{}`, `[]`, and
/// `From(...)`. `#` begins a line comment, matching the source format's
/// heritage as an embedded script.
pub(crate) fn tokenize(text: &str) -> Result<Vec<Spanned>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();
    let mut line = 1usize;
    let bytes = text.as_bytes();

    while let Some(&(i, c)) = chars.peek() {
        match c {
            ' ' | '\t' | '\r' => {
                chars.next();
            }
            '\n' => {
                chars.next();
                line += 1;
            }
            '#' => {
                while let Some(&(_, c)) = chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            '=' => {
                chars.next();
                tokens.push(Spanned {
                    token: Token::Equals,
                    line,
                });
            }
            ',' => {
                chars.next();
                tokens.push(Spanned {
                    token: Token::Comma,
                    line,
                });
            }
            ':' => {
                chars.next();
                tokens.push(Spanned {
                    token: Token::Colon,
                    line,
                });
            }
            '{' => {
                chars.next();
                tokens.push(Spanned {
                    token: Token::LBrace,
                    line,
                });
            }
            '}' => {
                chars.next();
                tokens.push(Spanned {
                    token: Token::RBrace,
                    line,
                });
            }
            '[' => {
                chars.next();
                tokens.push(Spanned {
                    token: Token::LBracket,
                    line,
                });
            }
            ']' => {
                chars.next();
                tokens.push(Spanned {
                    token: Token::RBracket,
                    line,
                });
            }
            '(' => {
                chars.next();
                tokens.push(Spanned {
                    token: Token::LParen,
                    line,
                });
            }
            ')' => {
                chars.next();
                tokens.push(Spanned {
                    token: Token::RParen,
                    line,
                });
            }
            '"' | '\'' => {
                let quote = c;
                chars.next();
                let start = i + 1;
                let mut end = start;
                let mut closed = false;
                let mut escaped = String::new();
                let mut has_escape = false;
                while let Some(&(j, ch)) = chars.peek() {
                    if ch == '\\' {
                        has_escape = true;
                        chars.next();
                        if let Some(&(_, next)) = chars.peek() {
                            escaped.push(next);
                            chars.next();
                        }
                        continue;
                    }
                    if ch == quote {
                        end = j;
                        chars.next();
                        closed = true;
                        break;
                    }
                    if ch == '\n' {
                        line += 1;
                    }
                    escaped.push(ch);
                    chars.next();
                }
                if !closed {
                    return Err(EvalError::Syntax {
                        message: "unterminated string literal".to_string(),
                        line,
                    });
                }
                let value = if has_escape {
                    escaped
                } else {
                    bytes[start..end].iter().map(|b| *b as char).collect()
                };
                tokens.push(Spanned {
                    token: Token::Str(value),
                    line,
                });
            }
            c if c.is_alphabetic() || c == '_' => {
                let start = i;
                let mut end = i;
                while let Some(&(j, ch)) = chars.peek() {
                    if ch.is_alphanumeric() || ch == '_' {
                        end = j + ch.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let ident = &text[start..end];
                let token = if ident == "None" {
                    Token::None
                } else {
                    Token::Ident(ident.to_string())
                };
                tokens.push(Spanned { token, line });
            }
            other => {
                return Err(EvalError::Syntax {
                    message: format!("unexpected character '{}'", other),
                    line,
                });
            }
        }
    }

    tokens.push(Spanned {
        token: Token::Eof,
        line,
    });
    Ok(tokens)
}
