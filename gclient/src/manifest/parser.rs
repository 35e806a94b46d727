// Copyright (c) The gclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::EvalError;
use crate::manifest::lexer::{tokenize, Spanned, Token};
use crate::manifest::value::Value;
use indexmap::IndexMap;

/// Parses manifest text into an ordered set of top-level `name = value`
/// bindings. Each binding is a statement; statements are not
/// comma-separated, matching `.gclient`'s `solutions = [...]` / `DEPS`'s
/// `deps = {...}` one-binding-per-statement style.
pub(crate) fn parse_bindings(text: &str) -> Result<IndexMap<String, Value>, EvalError> {
    let tokens = tokenize(text)?;
    let mut parser = Parser { tokens, pos: 0 };
    let mut bindings = IndexMap::new();

    while !parser.at_eof() {
        let name = parser.expect_ident()?;
        parser.expect(Token::Equals)?;
        let value = parser.parse_value()?;
        bindings.insert(name, value);
    }

    Ok(bindings)
}

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
}

impl Parser {
    fn at_eof(&self) -> bool {
        matches!(self.tokens[self.pos].token, Token::Eof)
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.pos].token
    }

    fn line(&self) -> usize {
        self.tokens[self.pos].line
    }

    fn bump(&mut self) -> Token {
        let token = self.tokens[self.pos].token.clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, expected: Token) -> Result<(), EvalError> {
        if *self.peek() == expected {
            self.bump();
            Ok(())
        } else {
            Err(EvalError::Syntax {
                message: format!("expected {:?}, found {:?}", expected, self.peek()),
                line: self.line(),
            })
        }
    }

    fn expect_ident(&mut self) -> Result<String, EvalError> {
        match self.bump() {
            Token::Ident(name) => Ok(name),
            other => Err(EvalError::Syntax {
                message: format!("expected an identifier, found {:?}", other),
                line: self.line(),
            }),
        }
    }

    fn expect_str(&mut self) -> Result<String, EvalError> {
        match self.bump() {
            Token::Str(s) => Ok(s),
            other => Err(EvalError::Syntax {
                message: format!("expected a string literal, found {:?}", other),
                line: self.line(),
            }),
        }
    }

    fn parse_value(&mut self) -> Result<Value, EvalError> {
        match self.peek().clone() {
            Token::None => {
                self.bump();
                Ok(Value::Null)
            }
            Token::Str(s) => {
                self.bump();
                Ok(Value::Str(s))
            }
            Token::LBrace => self.parse_mapping(),
            Token::LBracket => self.parse_sequence(),
            Token::Ident(name) if name == "From" => {
                self.bump();
                self.expect(Token::LParen)?;
                let module_name = self.expect_str()?;
                self.expect(Token::RParen)?;
                Ok(Value::From(module_name))
            }
            other => Err(EvalError::Syntax {
                message: format!("unexpected token {:?} in value position", other),
                line: self.line(),
            }),
        }
    }

    fn parse_mapping(&mut self) -> Result<Value, EvalError> {
        self.expect(Token::LBrace)?;
        let mut map = IndexMap::new();
        while *self.peek() != Token::RBrace {
            let key = self.expect_str()?;
            self.expect(Token::Colon)?;
            let value = self.parse_value()?;
            map.insert(key, value);
            if *self.peek() == Token::Comma {
                self.bump();
            } else {
                break;
            }
        }
        self.expect(Token::RBrace)?;
        Ok(Value::Mapping(map))
    }

    fn parse_sequence(&mut self) -> Result<Value, EvalError> {
        self.expect(Token::LBracket)?;
        let mut items = Vec::new();
        while *self.peek() != Token::RBracket {
            items.push(self.parse_value()?);
            if *self.peek() == Token::Comma {
                self.bump();
            } else {
                break;
            }
        }
        self.expect(Token::RBracket)?;
        Ok(Value::Sequence(items))
    }
}
