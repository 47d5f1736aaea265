//! Grammar-driven tree builder.
//!
//! Recursive descent over the token stream, one token of lookahead:
//!
//! ```text
//! value    := object | array | string | number | boolean | null
//! object   := '{' '}' | '{' members '}'
//! members  := pair | members ',' pair
//! pair     := string ':' value
//! array    := '[' ']' | '[' elements ']'
//! elements := value | elements ',' value
//! ```
//!
//! The first error halts the parse; whatever partial tree exists is dropped
//! on the way out, so the caller sees either a complete value or an error.

use crate::error::JsonError;
use crate::lexer::{Lexer, Token};
use crate::value::{JsonArray, JsonObject, JsonValue};

/// Parses one complete JSON document. Trailing non-whitespace after the
/// top-level value is an error.
pub fn parse(input: &[u8]) -> Result<JsonValue, JsonError> {
    Parser::new(input)?.parse_document()
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a [u8]) -> Result<Self, JsonError> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parses the document and checks that nothing but whitespace follows.
    pub fn parse_document(&mut self) -> Result<JsonValue, JsonError> {
        let value = self.parse_value()?;
        if self.current != Token::Eof {
            return Err(JsonError::UnexpectedCharacter(self.lexer.position()));
        }
        Ok(value)
    }

    fn advance(&mut self) -> Result<(), JsonError> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    /// The current token viewed as an error: end of input or a stray token.
    fn unexpected(&self) -> JsonError {
        if self.current == Token::Eof {
            JsonError::UnexpectedEnd
        } else {
            JsonError::UnexpectedCharacter(self.lexer.position())
        }
    }

    fn parse_value(&mut self) -> Result<JsonValue, JsonError> {
        match self.current {
            Token::LeftBrace => self.parse_object(),
            Token::LeftBracket => self.parse_array(),
            Token::Null | Token::True | Token::False | Token::Number(_) | Token::String(_) => {
                let token = std::mem::replace(&mut self.current, Token::Eof);
                self.advance()?;
                Ok(match token {
                    Token::Null => JsonValue::Null,
                    Token::True => JsonValue::Bool(true),
                    Token::False => JsonValue::Bool(false),
                    Token::Number(n) => JsonValue::Number(n),
                    Token::String(s) => JsonValue::String(s),
                    _ => unreachable!(),
                })
            }
            _ => Err(self.unexpected()),
        }
    }

    fn parse_object(&mut self) -> Result<JsonValue, JsonError> {
        self.advance()?; // consume '{'
        let mut object = JsonObject::new();

        if self.current == Token::RightBrace {
            self.advance()?;
            return Ok(JsonValue::Object(object));
        }

        loop {
            let key = match std::mem::replace(&mut self.current, Token::Eof) {
                Token::String(s) => s,
                Token::Eof => return Err(JsonError::UnexpectedEnd),
                _ => return Err(JsonError::UnexpectedCharacter(self.lexer.position())),
            };
            self.advance()?;

            if self.current != Token::Colon {
                return Err(self.unexpected());
            }
            self.advance()?;

            let value = self.parse_value()?;
            // Duplicate keys: the later pair wins, the earlier value is
            // dropped by the upsert.
            object.insert(key, value);

            match self.current {
                Token::Comma => self.advance()?,
                Token::RightBrace => {
                    self.advance()?;
                    return Ok(JsonValue::Object(object));
                }
                _ => return Err(self.unexpected()),
            }
        }
    }

    fn parse_array(&mut self) -> Result<JsonValue, JsonError> {
        self.advance()?; // consume '['
        let mut array = JsonArray::new();

        if self.current == Token::RightBracket {
            self.advance()?;
            return Ok(JsonValue::Array(array));
        }

        loop {
            let value = self.parse_value()?;
            array.push(value);

            match self.current {
                Token::Comma => self.advance()?,
                Token::RightBracket => {
                    self.advance()?;
                    return Ok(JsonValue::Array(array));
                }
                _ => return Err(self.unexpected()),
            }
        }
    }
}
