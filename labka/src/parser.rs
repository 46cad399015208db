use thiserror::Error;
use tracing::{debug, warn};

use crate::{expr::Expr, token::Token, token_type::TokenTy};

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.ty) != Some(TokenTy::End) {
            tokens.push(Token::new(TokenTy::End, ""));
        }
        Self { tokens, current: 0 }
    }

    pub fn parse(mut self) -> Result<Expr> {
        let expr = self.expression()?;
        if !self.is_at_end() {
            warn!(token = %self.peek(), "ignoring tokens after a complete expression");
        }
        debug!(ast = %expr, "parsed expression");
        Ok(expr)
    }

    fn expression(&mut self) -> Result<Expr> {
        let mut expr = self.term()?;

        while self.matches([TokenTy::Plus, TokenTy::Minus]) {
            let operator = self.operator();
            let right = self.term()?;
            expr = Expr::binary(expr, operator, right);
        }

        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr> {
        let mut expr = self.factor()?;

        while self.matches([TokenTy::Multiply, TokenTy::Divide]) {
            let operator = self.operator();
            let right = self.factor()?;
            expr = Expr::binary(expr, operator, right);
        }

        Ok(expr)
    }

    // no unary operators yet
    fn factor(&mut self) -> Result<Expr> {
        self.primary()
    }

    fn primary(&mut self) -> Result<Expr> {
        if self.matches([TokenTy::Number]) {
            let lexeme = &self.previous().lexeme;
            let value: f64 = lexeme
                .parse()
                .map_err(|_| ParseError::InvalidPrimaryExpression(format!("'{lexeme}'")))?;
            Ok(Expr::Number(value))
        } else if self.matches([TokenTy::LeftParen]) {
            let expr = self.expression()?;
            self.consume(TokenTy::RightParen, ParseError::MismatchedParentheses)?;
            Ok(expr)
        } else if self.matches([TokenTy::Identifier]) {
            Ok(Expr::Variable(self.previous().lexeme.clone()))
        } else if self.matches([TokenTy::Function]) {
            self.call()
        } else {
            let found = match self.peek().ty {
                TokenTy::End => "end of input".to_owned(),
                _ => format!("'{}'", self.peek().lexeme),
            };
            Err(ParseError::InvalidPrimaryExpression(found))
        }
    }

    fn call(&mut self) -> Result<Expr> {
        let name = self.previous().lexeme.clone();
        self.consume(TokenTy::LeftParen, ParseError::ExpectedLeftParen)?;

        let mut arguments = Vec::new();
        if !self.check(TokenTy::RightParen) {
            loop {
                arguments.push(self.expression()?);
                if !self.matches([TokenTy::Comma]) {
                    break;
                }
            }
        }

        self.consume(TokenTy::RightParen, ParseError::MismatchedParentheses)?;
        Ok(Expr::Call { name, arguments })
    }

    fn operator(&self) -> char {
        match self.previous().ty {
            TokenTy::Plus => '+',
            TokenTy::Minus => '-',
            TokenTy::Multiply => '*',
            TokenTy::Divide => '/',
            _ => unreachable!(),
        }
    }

    fn consume(&mut self, ty: TokenTy, error: ParseError) -> Result<&Token> {
        if self.check(ty) {
            Ok(self.advance())
        } else {
            Err(error)
        }
    }

    fn matches<const N: usize>(&mut self, tys: [TokenTy; N]) -> bool {
        if tys.iter().any(|&ty| self.check(ty)) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn check(&self, ty: TokenTy) -> bool {
        self.peek().ty == ty
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn is_at_end(&self) -> bool {
        self.peek().ty == TokenTy::End
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Mismatched parentheses")]
    MismatchedParentheses,
    #[error("Expected '(' after function name")]
    ExpectedLeftParen,
    #[error("Invalid primary expression: found {0}")]
    InvalidPrimaryExpression(String),
}

pub type Result<T> = std::result::Result<T, ParseError>;
