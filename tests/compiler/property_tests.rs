use super::helpers::*;
use parens::compiler::backend::ast::Node;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

const MAX_DEPTH: usize = 4;

/// A well formed expression, able to print itself in both languages.
#[derive(Clone, Debug)]
enum Expr {
    Number(String),
    Str(String),
    Call(String, Vec<Expr>),
}

impl Expr {
    fn lisp(&self) -> String {
        match self {
            Expr::Number(n) => n.clone(),
            Expr::Str(s) => format!("\"{}\"", s),
            Expr::Call(name, args) => {
                let mut parts = vec![name.clone()];
                parts.extend(args.iter().map(Expr::lisp));
                format!("({})", parts.join(" "))
            }
        }
    }

    fn c(&self) -> String {
        match self {
            Expr::Number(n) => n.clone(),
            Expr::Str(s) => format!("\"{}\"", s),
            Expr::Call(name, args) => {
                let args: Vec<_> = args.iter().map(Expr::c).collect();
                format!("{}({})", name, args.join(", "))
            }
        }
    }

    fn depth(&self) -> usize {
        match self {
            Expr::Call(_, args) => 1 + args.iter().map(Expr::depth).max().unwrap_or(0),
            _ => 0,
        }
    }

    fn arbitrary_with_depth(gen: &mut Gen, depth: usize) -> Self {
        match gen.choose(&[0, 1, 2, 3, 4]) {
            Some(0) => Expr::Number(u64::arbitrary(gen).to_string()),
            Some(1) => Expr::Str(String::arbitrary(gen).replace('"', "")),
            _ if depth == 0 => Expr::Number(u8::arbitrary(gen).to_string()),
            _ => Expr::arbitrary_call(gen, depth - 1),
        }
    }

    fn arbitrary_call(gen: &mut Gen, depth: usize) -> Self {
        let arity = usize::arbitrary(gen) % 4;
        let args = (0..arity)
            .map(|_| Expr::arbitrary_with_depth(gen, depth))
            .collect();

        Expr::Call(Name::arbitrary(gen).0, args)
    }
}

#[derive(Clone, Debug)]
struct Name(String);

impl Arbitrary for Name {
    fn arbitrary(gen: &mut Gen) -> Self {
        let letters = ('a'..='z').chain('A'..='Z').collect::<Vec<_>>();
        let len = 1 + usize::arbitrary(gen) % 8;
        let name = (0..len)
            .map(|_| *gen.choose(&letters).unwrap_or(&'f'))
            .collect();

        Name(name)
    }
}

/// A sequence of top level calls.
#[derive(Clone, Debug)]
struct Program(Vec<Expr>);

impl Arbitrary for Program {
    fn arbitrary(gen: &mut Gen) -> Self {
        let count = 1 + usize::arbitrary(gen) % 4;
        Program(
            (0..count)
                .map(|_| Expr::arbitrary_call(gen, MAX_DEPTH))
                .collect(),
        )
    }
}

impl Program {
    fn lisp(&self, separator: &str) -> String {
        self.0.iter().map(Expr::lisp).collect::<Vec<_>>().join(separator)
    }

    fn c(&self) -> String {
        self.0
            .iter()
            .map(|e| format!("{};", e.c()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[quickcheck]
fn compiles_calls_to_c_calls(program: Program) -> bool {
    compile_code(&program.lisp("\n")).unwrap() == program.c()
}

#[quickcheck]
fn whitespace_between_forms_does_not_matter(program: Program) -> bool {
    compile_code(&program.lisp(" \t\n ")).unwrap() == compile_code(&program.lisp("")).unwrap()
}

fn target_depth(node: &Node) -> usize {
    match node {
        Node::ExpressionStatement(expression) => target_depth(expression),
        Node::CallExpression(call) => {
            1 + call.arguments.iter().map(target_depth).max().unwrap_or(0)
        }
        _ => 0,
    }
}

#[quickcheck]
fn nesting_depth_is_preserved(program: Program) -> bool {
    let target = Compiler::new().target_ast(&program.lisp("\n")).unwrap();

    target.body.len() == program.0.len()
        && target
            .body
            .iter()
            .zip(program.0.iter())
            .all(|(node, expr)| target_depth(node) == expr.depth())
}

#[quickcheck]
fn tokenizing_is_idempotent(program: Program) -> bool {
    let source = program.lisp(" ");
    parens::tokenize(&source) == parens::tokenize(&source)
}

#[quickcheck]
fn unclosed_calls_fail(program: Program) -> bool {
    let source = program.lisp(" ");
    // every generated program ends with the `)` of a call
    let truncated = &source[..source.len() - 1];

    compile_code(truncated).is_err()
}
