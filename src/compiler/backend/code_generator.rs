//! Generate C-like call syntax from the target-AST.
//!
//! Every top level node ends up on its own line. Literal text is emitted
//! exactly as it was read: numbers are not normalised and strings are not
//! re-escaped.
use super::ast::{CallExpression, Node, Program};

pub struct CodeGenerator {
    source: String,
}

impl CodeGenerator {
    fn new() -> Self {
        Self {
            source: String::new(),
        }
    }

    pub fn generate(ast: &Program) -> String {
        let mut generator = Self::new();
        generator.emit_program(ast);

        log::trace!("generated {} bytes of output", generator.source.len());
        generator.source
    }

    pub fn generate_node(node: &Node) -> String {
        let mut generator = Self::new();
        generator.emit(node);
        generator.source
    }

    fn emit_program(&mut self, ast: &Program) {
        for (idx, node) in ast.body.iter().enumerate() {
            if idx > 0 {
                self.source.push('\n');
            }
            self.emit(node);
        }
    }

    fn emit(&mut self, node: &Node) {
        match node {
            Node::ExpressionStatement(expression) => {
                self.emit(expression);
                self.source.push(';');
            }
            Node::CallExpression(call) => self.emit_call(call),
            Node::Identifier(id) => self.source.push_str(&id.name),
            Node::NumberLiteral(value) => self.source.push_str(value),
            Node::StringLiteral(value) => {
                self.source.push('"');
                self.source.push_str(value);
                self.source.push('"');
            }
        }
    }

    fn emit_call(&mut self, call: &CallExpression) {
        self.source.push_str(&call.callee.name);
        self.source.push('(');

        for (idx, argument) in call.arguments.iter().enumerate() {
            if idx > 0 {
                self.source.push_str(", ");
            }
            self.emit(argument);
        }

        self.source.push(')');
    }
}
