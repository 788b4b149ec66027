pub mod ast;
pub mod code_generator;

use ast::{Node, Program};
use code_generator::CodeGenerator;

#[derive(Debug, Clone, Default)]
pub struct Backend;

impl Backend {
    pub fn new() -> Self {
        Backend
    }

    pub fn pass(&self, ast: &Program) -> String {
        generate(ast)
    }
}

pub fn generate(ast: &Program) -> String {
    CodeGenerator::generate(ast)
}

pub fn generate_node(node: &Node) -> String {
    CodeGenerator::generate_node(node)
}
