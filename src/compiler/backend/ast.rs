/// The target-AST, shaped after the C-like output language.
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
    ExpressionStatement(Box<Node>),
    CallExpression(CallExpression),
    Identifier(Identifier),
    NumberLiteral(String),
    StringLiteral(String),
}

impl Node {
    pub fn statement(expression: Node) -> Self {
        Node::ExpressionStatement(Box::new(expression))
    }

    pub fn call<N: Into<String>>(callee: N, arguments: Vec<Node>) -> Self {
        Node::CallExpression(CallExpression::new(Identifier::new(callee), arguments))
    }

    pub fn identifier<N: Into<String>>(name: N) -> Self {
        Node::Identifier(Identifier::new(name))
    }

    pub fn number<V: Into<String>>(value: V) -> Self {
        Node::NumberLiteral(value.into())
    }

    pub fn string<V: Into<String>>(value: V) -> Self {
        Node::StringLiteral(value.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpression {
    pub callee: Identifier,
    pub arguments: Vec<Node>,
}

impl CallExpression {
    pub fn new(callee: Identifier, arguments: Vec<Node>) -> Self {
        Self { callee, arguments }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self { name: name.into() }
    }
}
