use std::{fmt, rc::Rc};

use crate::interpreter::lexer::Token;

/// The root node of a parsed source text.
///
/// A program is a flat sequence of statements. Its rendering is the
/// concatenation of the renderings of its statements, which lets parser
/// tests round-trip precedence through [`fmt::Display`].
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A braced sequence of statements.
///
/// Blocks only occur as the branches of `if` expressions and the bodies of
/// function literals. Evaluation of a block propagates `return` and error
/// values outward without unwrapping them.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// The `{` token that opened the block.
    pub token:      Token,
    /// The statements between the braces.
    pub statements: Vec<Statement>,
}

/// A name appearing in source, either as an expression or as a binding
/// target.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    /// The identifier token.
    pub token: Token,
    /// The name itself.
    pub name:  String,
}

/// A statement node.
///
/// Statements are the units a program or block is made of. Only three
/// forms exist; everything else in the language is an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A `let` binding: `let <name> = <value>;`.
    Let {
        /// The `let` keyword token.
        token: Token,
        /// The name being bound.
        name:  Identifier,
        /// The bound expression.
        value: Expression,
    },
    /// A `return` statement: `return <value>;`.
    Return {
        /// The `return` keyword token.
        token: Token,
        /// The returned expression.
        value: Expression,
    },
    /// A bare expression used in statement position.
    Expression {
        /// The first token of the expression.
        token: Token,
        /// The expression itself.
        value: Expression,
    },
}

/// A prefix (unary) operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical negation (`!x`).
    Bang,
    /// Arithmetic negation (`-x`).
    Minus,
}

/// An infix (binary) operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Plus,
    /// Subtraction (`-`)
    Minus,
    /// Multiplication (`*`)
    Asterisk,
    /// Division (`/`)
    Slash,
    /// Less than (`<`)
    Lt,
    /// Greater than (`>`)
    Gt,
    /// Equal to (`==`)
    Eq,
    /// Not equal to (`!=`)
    NotEq,
}

/// An expression node.
///
/// Expressions cover literals, operators, control flow, function literals,
/// calls, and composite construction and access. Every variant carries the
/// token it originated from so the pretty-printer can reproduce literal
/// spellings.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Reference to a binding by name.
    Ident(Identifier),
    /// A 64-bit signed integer literal.
    IntLit {
        /// The integer token.
        token: Token,
        /// The parsed value.
        value: i64,
    },
    /// A boolean literal, `true` or `false`.
    BoolLit {
        /// The keyword token.
        token: Token,
        /// The literal value.
        value: bool,
    },
    /// A string literal. The value is the raw body, no escape processing.
    StringLit {
        /// The string token.
        token: Token,
        /// The string body.
        value: String,
    },
    /// A prefix operation such as `!ok` or `-x`.
    Prefix {
        /// The operator token.
        token:    Token,
        /// The operator to apply.
        operator: PrefixOperator,
        /// The operand.
        right:    Box<Expression>,
    },
    /// A binary operation such as `a + b`.
    Infix {
        /// The operator token.
        token:    Token,
        /// The operator to apply.
        operator: InfixOperator,
        /// Left operand.
        left:     Box<Expression>,
        /// Right operand.
        right:    Box<Expression>,
    },
    /// A conditional expression with an optional `else` branch.
    If {
        /// The `if` keyword token.
        token:       Token,
        /// The tested condition.
        condition:   Box<Expression>,
        /// Branch taken when the condition is truthy.
        consequence: Block,
        /// Branch taken otherwise, if present.
        alternative: Option<Block>,
    },
    /// A function literal: `fn(<params>) { <body> }`.
    ///
    /// The body is shared; closures created from this literal keep it alive
    /// after the enclosing program is gone.
    FnLit {
        /// The `fn` keyword token.
        token:      Token,
        /// The parameter names.
        parameters: Vec<Identifier>,
        /// The function body.
        body:       Rc<Block>,
    },
    /// A call expression: `<callee>(<args>)`.
    Call {
        /// The `(` token of the argument list.
        token:     Token,
        /// The expression being called.
        function:  Box<Expression>,
        /// The argument expressions, in order.
        arguments: Vec<Expression>,
    },
    /// An array literal: `[e1, e2, ...]`.
    ArrayLit {
        /// The `[` token.
        token:    Token,
        /// The element expressions, in order.
        elements: Vec<Expression>,
    },
    /// A hash literal: `{k1: v1, k2: v2, ...}`.
    HashLit {
        /// The `{` token.
        token: Token,
        /// Key/value expression pairs in source order.
        pairs: Vec<(Expression, Expression)>,
    },
    /// An index expression: `<target>[<index>]`.
    Index {
        /// The `[` token.
        token: Token,
        /// The indexed expression.
        left:  Box<Expression>,
        /// The index expression.
        index: Box<Expression>,
    },
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { token, name, value } => {
                write!(f, "{} {name} = {value};", token.literal)
            },
            Self::Return { token, value } => write!(f, "{} {value};", token.literal),
            Self::Expression { value, .. } => write!(f, "{value}"),
        }
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Bang => "!",
            Self::Minus => "-",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Expression {
    /// Renders the expression with explicit parenthesization.
    ///
    /// Every prefix operation renders as `(OP R)` and every infix operation
    /// as `(L OP R)`, so the output of the parser exposes exactly the
    /// precedence it resolved: `-a * b` renders as `((-a) * b)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(identifier) => write!(f, "{identifier}"),
            Self::IntLit { token, .. }
            | Self::BoolLit { token, .. }
            | Self::StringLit { token, .. } => write!(f, "{}", token.literal),
            Self::Prefix { operator, right, .. } => write!(f, "({operator}{right})"),
            Self::Infix { operator,
                          left,
                          right,
                          .. } => write!(f, "({left} {operator} {right})"),
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            },
            Self::FnLit { token,
                          parameters,
                          body, } => {
                let parameters = parameters.iter()
                                           .map(ToString::to_string)
                                           .collect::<Vec<_>>()
                                           .join(", ");
                write!(f, "{}({parameters}) {body}", token.literal)
            },
            Self::Call { function, arguments, .. } => {
                let arguments = arguments.iter()
                                         .map(ToString::to_string)
                                         .collect::<Vec<_>>()
                                         .join(", ");
                write!(f, "{function}({arguments})")
            },
            Self::ArrayLit { elements, .. } => {
                let elements = elements.iter()
                                       .map(ToString::to_string)
                                       .collect::<Vec<_>>()
                                       .join(", ");
                write!(f, "[{elements}]")
            },
            Self::HashLit { pairs, .. } => {
                let pairs = pairs.iter()
                                 .map(|(key, value)| format!("{key}:{value}"))
                                 .collect::<Vec<_>>()
                                 .join(", ");
                write!(f, "{{{pairs}}}")
            },
            Self::Index { left, index, .. } => write!(f, "({left}[{index}])"),
        }
    }
}

/// Rewrites a program bottom-up with the given modifier.
///
/// Every expression in the tree is rebuilt from its modified children and
/// then passed to `modifier`, whose result replaces it. Statements keep
/// their shape; only the expressions inside them change.
///
/// # Example
/// ```
/// use langur::{
///     ast::{self, Expression},
///     interpreter::{lexer::Lexer, parser::core::Parser},
/// };
///
/// let mut parser = Parser::new(Lexer::new("x + 2;"));
/// let program = parser.parse_program();
///
/// let renamed = ast::modify_program(program, &|expr| match expr {
///     Expression::Ident(mut identifier) => {
///         identifier.name = identifier.name.to_uppercase();
///         Expression::Ident(identifier)
///     },
///     other => other,
/// });
///
/// assert_eq!(renamed.to_string(), "(X + 2)");
/// ```
#[must_use]
pub fn modify_program(program: Program,
                      modifier: &impl Fn(Expression) -> Expression)
                      -> Program {
    Program { statements: program.statements
                                 .into_iter()
                                 .map(|statement| modify_statement(statement, modifier))
                                 .collect(), }
}

/// Rewrites the expressions inside a single statement.
#[must_use]
pub fn modify_statement(statement: Statement,
                        modifier: &impl Fn(Expression) -> Expression)
                        -> Statement {
    match statement {
        Statement::Let { token, name, value } => {
            Statement::Let { token,
                             name,
                             value: modify_expression(value, modifier) }
        },
        Statement::Return { token, value } => {
            Statement::Return { token,
                                value: modify_expression(value, modifier) }
        },
        Statement::Expression { token, value } => {
            Statement::Expression { token,
                                    value: modify_expression(value, modifier) }
        },
    }
}

/// Rewrites an expression bottom-up with the given modifier.
#[must_use]
pub fn modify_expression(expression: Expression,
                         modifier: &impl Fn(Expression) -> Expression)
                         -> Expression {
    let rebuilt = match expression {
        Expression::Prefix { token, operator, right } => {
            Expression::Prefix { token,
                                 operator,
                                 right: Box::new(modify_expression(*right, modifier)) }
        },
        Expression::Infix { token,
                            operator,
                            left,
                            right, } => {
            Expression::Infix { token,
                                operator,
                                left: Box::new(modify_expression(*left, modifier)),
                                right: Box::new(modify_expression(*right, modifier)) }
        },
        Expression::If { token,
                         condition,
                         consequence,
                         alternative, } => {
            Expression::If { token,
                             condition: Box::new(modify_expression(*condition, modifier)),
                             consequence: modify_block(consequence, modifier),
                             alternative: alternative.map(|block| modify_block(block, modifier)) }
        },
        Expression::FnLit { token,
                            parameters,
                            body, } => {
            let body = Rc::try_unwrap(body).unwrap_or_else(|shared| (*shared).clone());
            Expression::FnLit { token,
                                parameters,
                                body: Rc::new(modify_block(body, modifier)) }
        },
        Expression::Call { token,
                           function,
                           arguments, } => {
            Expression::Call { token,
                               function: Box::new(modify_expression(*function, modifier)),
                               arguments: arguments.into_iter()
                                                   .map(|argument| {
                                                       modify_expression(argument, modifier)
                                                   })
                                                   .collect() }
        },
        Expression::ArrayLit { token, elements } => {
            Expression::ArrayLit { token,
                                   elements: elements.into_iter()
                                                     .map(|element| {
                                                         modify_expression(element, modifier)
                                                     })
                                                     .collect() }
        },
        Expression::HashLit { token, pairs } => {
            Expression::HashLit { token,
                                  pairs: pairs.into_iter()
                                              .map(|(key, value)| {
                                                  (modify_expression(key, modifier),
                                                   modify_expression(value, modifier))
                                              })
                                              .collect() }
        },
        Expression::Index { token, left, index } => {
            Expression::Index { token,
                                left: Box::new(modify_expression(*left, modifier)),
                                index: Box::new(modify_expression(*index, modifier)) }
        },
        leaf => leaf,
    };

    modifier(rebuilt)
}

fn modify_block(block: Block, modifier: &impl Fn(Expression) -> Expression) -> Block {
    Block { token:      block.token,
            statements: block.statements
                             .into_iter()
                             .map(|statement| modify_statement(statement, modifier))
                             .collect(), }
}
