use crate::expr::Expr;

pub fn ast_to_string(expr: &Expr) -> String {
    match expr {
        Expr::Number(n) => format!("{n}"),
        Expr::Binary {
            left,
            operator,
            right,
        } => parenthesize(&operator.to_string(), &[left.as_ref(), right.as_ref()]),
        Expr::Variable(name) => name.clone(),
        Expr::Call { name, arguments } => {
            let arguments: Vec<&Expr> = arguments.iter().collect();
            parenthesize(&format!("call {name}"), &arguments)
        }
    }
}

fn parenthesize(name: &str, exprs: &[&Expr]) -> String {
    let mut str = String::new();
    str.push('(');
    str.push_str(name);
    for expr in exprs {
        str.push(' ');
        str.push_str(&ast_to_string(expr));
    }
    str.push(')');
    str
}
