/// The source-AST, the tree the parser builds straight from the tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub body: Vec<Node>,
}

impl Program {
    pub fn new(body: Vec<Node>) -> Self {
        Self { body }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    CallExpression(CallExpression),
    NumberLiteral(String),
    StringLiteral(String),
}

impl Node {
    pub fn call<N: Into<String>>(name: N, params: Vec<Node>) -> Self {
        Node::CallExpression(CallExpression::new(name, params))
    }

    pub fn number<V: Into<String>>(value: V) -> Self {
        Node::NumberLiteral(value.into())
    }

    pub fn string<V: Into<String>>(value: V) -> Self {
        Node::StringLiteral(value.into())
    }
}

/// `(name param...)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpression {
    pub name: String,
    pub params: Vec<Node>,
}

impl CallExpression {
    pub fn new<N: Into<String>>(name: N, params: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}
