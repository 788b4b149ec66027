use super::traverser::{traverse, Parent, Visitor};
use crate::compiler::backend::ast as target;
use crate::compiler::frontend::parser::ast as source;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("InternalError: {0}")]
    Bug(String),
}

impl Error {
    pub fn bug<M: Into<String>>(message: M) -> Self {
        Error::Bug(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Build the target-AST from the source-AST.
///
/// Literals are appended to the open argument list when they are entered.
/// A call opens a new argument list on `enter` and is appended to its
/// parent's list only on `exit`, once all of its arguments are in place.
/// Siblings are visited one after another, so the target keeps source order.
pub fn transform(ast: &source::Program) -> Result<target::Program> {
    let mut transformer = Transformer::default();
    traverse(ast, &mut transformer)?;
    transformer.finish()
}

/// A list of target nodes under construction.
///
/// The bottom context collects the program body, every other one the
/// arguments of the call named by `callee`.
#[derive(Debug)]
struct Context {
    callee: Option<target::Identifier>,
    nodes: Vec<target::Node>,
}

#[derive(Debug, Default)]
struct Transformer {
    contexts: Vec<Context>,
}

impl Transformer {
    fn append(&mut self, node: target::Node) -> Result<()> {
        match self.contexts.last_mut() {
            Some(context) => {
                context.nodes.push(node);
                Ok(())
            }
            None => Err(Error::bug("no open context to append to")),
        }
    }

    fn finish(mut self) -> Result<target::Program> {
        match self.contexts.pop() {
            Some(Context { callee: None, nodes }) if self.contexts.is_empty() => {
                log::trace!("transformed {} top level nodes", nodes.len());
                Ok(target::Program::new(nodes))
            }
            _ => Err(Error::bug("unbalanced contexts after transformation")),
        }
    }
}

impl Visitor for Transformer {
    type Error = Error;

    fn enter_program(&mut self, _program: &source::Program) -> Result<()> {
        if !self.contexts.is_empty() {
            return Err(Error::bug("program entered twice"));
        }

        self.contexts.push(Context {
            callee: None,
            nodes: vec![],
        });
        Ok(())
    }

    fn enter_call_expression(
        &mut self,
        call: &source::CallExpression,
        _parent: Parent<'_>,
    ) -> Result<()> {
        self.contexts.push(Context {
            callee: Some(target::Identifier::new(call.name.clone())),
            nodes: Vec::with_capacity(call.params.len()),
        });
        Ok(())
    }

    // The call is complete once all its params have been visited. Siblings are
    // visited strictly one after another, so appending here keeps source order.
    fn exit_call_expression(
        &mut self,
        call: &source::CallExpression,
        parent: Parent<'_>,
    ) -> Result<()> {
        let finished = match self.contexts.pop() {
            Some(Context {
                callee: Some(callee),
                nodes,
            }) => target::CallExpression::new(callee, nodes),
            _ => {
                return Err(Error::bug(format!(
                    "no open context for call to `{}`",
                    call.name
                )))
            }
        };
        let expression = target::Node::CallExpression(finished);

        if parent.is_call_expression() {
            self.append(expression)
        } else {
            self.append(target::Node::statement(expression))
        }
    }

    fn enter_number_literal(&mut self, value: &str, _parent: Parent<'_>) -> Result<()> {
        self.append(target::Node::number(value))
    }

    fn enter_string_literal(&mut self, value: &str, _parent: Parent<'_>) -> Result<()> {
        self.append(target::Node::string(value))
    }
}
