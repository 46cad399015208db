use std::{iter::Peekable, str::CharIndices};

use thiserror::Error;
use tracing::trace;

use crate::{token::Token, token_type::TokenTy};

static KEYWORDS: phf::Map<&'static str, TokenTy> = phf::phf_map! {
    "pow" => TokenTy::Function,
    "abs" => TokenTy::Function,
    "max" => TokenTy::Function,
    "min" => TokenTy::Function,
};

pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    start: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            start: 0,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.ty == TokenTy::End;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        let Some((start, ch)) = self.advance() else {
            self.start = self.source.len();
            return Ok(Token::new(TokenTy::End, ""));
        };
        self.start = start;

        let token = match ch {
            '+' => self.make_token(TokenTy::Plus),
            '-' => self.make_token(TokenTy::Minus),
            '*' => self.make_token(TokenTy::Multiply),
            '/' => self.make_token(TokenTy::Divide),
            '(' => self.make_token(TokenTy::LeftParen),
            ')' => self.make_token(TokenTy::RightParen),
            '=' => self.make_token(TokenTy::Assignment),
            ',' => self.make_token(TokenTy::Comma),
            ch if ch.is_ascii_digit() => self.number(),
            ch if ch.is_ascii_alphabetic() => self.identifier(),
            ch => return Err(ScanError::InvalidCharacter(ch)),
        };
        trace!(%token, "scanned token");
        Ok(token)
    }

    fn number(&mut self) -> Token {
        while self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            self.advance();
        }
        self.make_token(TokenTy::Number)
    }

    fn identifier(&mut self) -> Token {
        while self.peek().is_some_and(|ch| ch.is_ascii_alphanumeric()) {
            self.advance();
        }

        let end = self.offset();
        match KEYWORDS.get(&self.source[self.start..end]) {
            Some(&ty) => self.make_token(ty),
            None => self.make_token(TokenTy::Identifier),
        }
    }

    fn skip_whitespace(&mut self) {
        // the C `isspace` set, vertical tab and form feed included
        while self
            .peek()
            .is_some_and(|ch| matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r'))
        {
            self.advance();
        }
    }

    fn make_token(&mut self, ty: TokenTy) -> Token {
        let end = self.offset();
        Token::new(ty, &self.source[self.start..end])
    }

    #[inline]
    fn offset(&mut self) -> usize {
        self.chars
            .peek()
            .map(|&(offset, _)| offset)
            .unwrap_or(self.source.len())
    }

    #[inline]
    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, ch)| ch)
    }

    #[inline]
    fn advance(&mut self) -> Option<(usize, char)> {
        self.chars.next()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("Invalid character '{0}'")]
    InvalidCharacter(char),
}

pub type Result<T> = std::result::Result<T, ScanError>;
