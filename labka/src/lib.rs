pub mod ast_printer;
pub mod environment;
pub mod error;
pub mod expr;
pub mod interpreter;
pub mod lexer;
pub mod native_functions;
pub mod parser;
pub mod token;
pub mod token_type;

pub use error::Error;
pub use expr::Expr;
pub use interpreter::{Interpreter, RuntimeError};
pub use lexer::{Lexer, ScanError};
pub use native_functions::{FunctionTable, NativeFunction};
pub use parser::{ParseError, Parser};
pub use token::Token;
pub use token_type::TokenTy;
