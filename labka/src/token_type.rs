#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenTy {
    // literals
    Number,
    Identifier,
    Function,

    // operators
    Plus,
    Minus,
    Multiply,
    Divide,

    // punctuation
    LeftParen,
    RightParen,
    Assignment,
    Comma,

    End,
}
