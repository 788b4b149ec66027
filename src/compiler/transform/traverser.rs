//! Generic depth-first walk over the source-AST.
//!
//! Every node kind has an `enter` hook, called before the node's children are
//! visited, and an `exit` hook, called after. All hooks default to doing
//! nothing, so a visitor only implements the ones it cares about.
//! A hook that returns an error aborts the walk.
use crate::compiler::frontend::parser::ast::{CallExpression, Node, Program};

/// The node a visited node hangs off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parent<'a> {
    Program(&'a Program),
    CallExpression(&'a CallExpression),
}

impl<'a> Parent<'a> {
    pub fn is_call_expression(&self) -> bool {
        match self {
            Parent::CallExpression(_) => true,
            _ => false,
        }
    }
}

pub trait Visitor {
    type Error;

    fn enter_program(&mut self, _program: &Program) -> Result<(), Self::Error> {
        Ok(())
    }

    fn exit_program(&mut self, _program: &Program) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_call_expression(
        &mut self,
        _call: &CallExpression,
        _parent: Parent<'_>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn exit_call_expression(
        &mut self,
        _call: &CallExpression,
        _parent: Parent<'_>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_number_literal(&mut self, _value: &str, _parent: Parent<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn exit_number_literal(&mut self, _value: &str, _parent: Parent<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn enter_string_literal(&mut self, _value: &str, _parent: Parent<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn exit_string_literal(&mut self, _value: &str, _parent: Parent<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

pub fn traverse<V: Visitor>(ast: &Program, visitor: &mut V) -> Result<(), V::Error> {
    visitor.enter_program(ast)?;
    traverse_nodes(&ast.body, Parent::Program(ast), visitor)?;
    visitor.exit_program(ast)
}

fn traverse_nodes<'a, V: Visitor>(
    nodes: &'a [Node],
    parent: Parent<'a>,
    visitor: &mut V,
) -> Result<(), V::Error> {
    for node in nodes {
        traverse_node(node, parent, visitor)?;
    }

    Ok(())
}

fn traverse_node<'a, V: Visitor>(
    node: &'a Node,
    parent: Parent<'a>,
    visitor: &mut V,
) -> Result<(), V::Error> {
    match node {
        Node::CallExpression(call) => {
            visitor.enter_call_expression(call, parent)?;
            traverse_nodes(&call.params, Parent::CallExpression(call), visitor)?;
            visitor.exit_call_expression(call, parent)
        }
        Node::NumberLiteral(value) => {
            visitor.enter_number_literal(value, parent)?;
            visitor.exit_number_literal(value, parent)
        }
        Node::StringLiteral(value) => {
            visitor.enter_string_literal(value, parent)?;
            visitor.exit_string_literal(value, parent)
        }
    }
}
