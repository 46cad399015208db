#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Binary {
        left: Box<Expr>,
        operator: char,
        right: Box<Expr>,
    },
    Variable(String),
    Call {
        name: String,
        arguments: Vec<Expr>,
    },
}

impl Expr {
    pub fn binary(left: Expr, operator: char, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }
}

impl From<f64> for Expr {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::ast_printer::ast_to_string(self))
    }
}
