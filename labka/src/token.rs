use crate::token_type::TokenTy;

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub ty: TokenTy,
    pub lexeme: String,
}

impl Token {
    pub fn new(ty: TokenTy, lexeme: impl Into<String>) -> Self {
        Token {
            ty,
            lexeme: lexeme.into(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:?} {}", self.ty, self.lexeme))
    }
}
