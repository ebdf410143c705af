//! Abstract Syntax Tree node definitions.
//!
//! The AST mirrors the ESTree/Babel convention: every node carries a `type`
//! discriminator (see [`NodeType`]) plus its own fields, and serializes to the
//! familiar JSON shape through serde. The tree is strictly owned - every child
//! belongs to exactly one parent and cycles cannot be constructed.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Discriminator naming each AST node variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    /// Identifier reference
    Identifier,
    /// `null` literal
    NullLiteral,
    /// String literal
    StringLiteral,
    /// Numeric literal
    NumericLiteral,
    /// Boolean literal
    BooleanLiteral,
    /// Unary operation
    UnaryExpression,
    /// Binary operation
    BinaryExpression,
    /// Expression in statement position
    ExpressionStatement,
    /// Braced statement list
    BlockStatement,
    /// Lone semicolon
    EmptyStatement,
    /// `debugger` statement
    DebuggerStatement,
    /// `return` statement
    ReturnStatement,
    /// `continue` statement
    ContinueStatement,
    /// `break` statement
    BreakStatement,
    /// `if` statement
    IfStatement,
    /// `switch` statement
    SwitchStatement,
    /// `case` / `default` clause
    SwitchCase,
    /// `while` loop
    WhileStatement,
    /// `do ... while` loop
    DoWhileStatement,
    /// C-style `for` loop
    ForStatement,
    /// Variable declaration
    VariableDeclaration,
    /// Single declarator within a variable declaration
    VariableDeclarator,
    /// `for ... in` loop
    ForInStatement,
    /// `for ... of` loop
    ForOfStatement,
    /// `throw` statement
    ThrowStatement,
    /// `try` statement
    TryStatement,
    /// `catch` clause
    CatchClause,
    /// Function declaration
    FunctionDeclaration,
    /// Function expression
    FunctionExpression,
    /// Program root
    Program,
    /// `import` declaration
    ImportDeclaration,
    /// Named import specifier
    ImportSpecifier,
    /// Default import specifier
    ImportDefaultSpecifier,
    /// Namespace import specifier
    ImportNamespaceSpecifier,
    /// Named export specifier
    ExportSpecifier,
    /// Namespace export specifier
    ExportNamespaceSpecifier,
    /// Default export specifier
    ExportDefaultSpecifier,
    /// Named export declaration
    ExportNamedDeclaration,
    /// Default export declaration
    ExportDefaultDeclaration,
    /// `export * from ...` declaration
    ExportAllDeclaration,
    /// Function call
    CallExpression,
    /// Parenthesized expression
    ParenthesizedExpression,
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOperator {
    /// `+`
    #[serde(rename = "+")]
    Plus,
    /// `-`
    #[serde(rename = "-")]
    Minus,
    /// `!`
    #[serde(rename = "!")]
    Not,
    /// `~`
    #[serde(rename = "~")]
    BitwiseNot,
    /// `typeof`
    #[serde(rename = "typeof")]
    Typeof,
    /// `void`
    #[serde(rename = "void")]
    Void,
    /// `delete`
    #[serde(rename = "delete")]
    Delete,
    /// `throw`
    #[serde(rename = "throw")]
    Throw,
}

impl UnaryOperator {
    /// The operator's canonical spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOperator::Plus => "+",
            UnaryOperator::Minus => "-",
            UnaryOperator::Not => "!",
            UnaryOperator::BitwiseNot => "~",
            UnaryOperator::Typeof => "typeof",
            UnaryOperator::Void => "void",
            UnaryOperator::Delete => "delete",
            UnaryOperator::Throw => "throw",
        }
    }
}

/// Binary operators.
///
/// Ordered lexicographically by spelling so the operator can key a
/// `BTreeMap`, as the parser's precedence table does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    /// `==`
    #[serde(rename = "==")]
    EqEq,
    /// `!=`
    #[serde(rename = "!=")]
    NotEq,
    /// `===`
    #[serde(rename = "===")]
    EqEqEq,
    /// `!==`
    #[serde(rename = "!==")]
    NotEqEq,
    /// `<`
    #[serde(rename = "<")]
    Lt,
    /// `<=`
    #[serde(rename = "<=")]
    LtEq,
    /// `>`
    #[serde(rename = ">")]
    Gt,
    /// `>=`
    #[serde(rename = ">=")]
    GtEq,
    /// `<<`
    #[serde(rename = "<<")]
    LeftShift,
    /// `>>`
    #[serde(rename = ">>")]
    RightShift,
    /// `>>>`
    #[serde(rename = ">>>")]
    UnsignedRightShift,
    /// `+`
    #[serde(rename = "+")]
    Add,
    /// `-`
    #[serde(rename = "-")]
    Sub,
    /// `*`
    #[serde(rename = "*")]
    Mul,
    /// `/`
    #[serde(rename = "/")]
    Div,
    /// `%`
    #[serde(rename = "%")]
    Mod,
}

impl BinaryOperator {
    /// The operator's canonical spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::EqEq => "==",
            BinaryOperator::NotEq => "!=",
            BinaryOperator::EqEqEq => "===",
            BinaryOperator::NotEqEq => "!==",
            BinaryOperator::Lt => "<",
            BinaryOperator::LtEq => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::GtEq => ">=",
            BinaryOperator::LeftShift => "<<",
            BinaryOperator::RightShift => ">>",
            BinaryOperator::UnsignedRightShift => ">>>",
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Mod => "%",
        }
    }
}

impl PartialOrd for BinaryOperator {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BinaryOperator {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

/// Variable declaration kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableDeclarationKind {
    /// `var` declaration
    #[serde(rename = "var")]
    Var,
    /// `let` declaration
    #[serde(rename = "let")]
    Let,
    /// `const` declaration
    #[serde(rename = "const")]
    Const,
}

impl VariableDeclarationKind {
    /// The kind's keyword spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            VariableDeclarationKind::Var => "var",
            VariableDeclarationKind::Let => "let",
            VariableDeclarationKind::Const => "const",
        }
    }
}

/// `script` vs `module` designation of a program root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceType {
    /// Classic script
    #[serde(rename = "script")]
    Script,
    /// ES module
    #[serde(rename = "module")]
    Module,
}

impl SourceType {
    /// The source type's spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            SourceType::Script => "script",
            SourceType::Module => "module",
        }
    }
}

/// Import declaration kind, per the Babel schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImportKind {
    /// Value import (the only kind this grammar produces)
    #[serde(rename = "value")]
    Value,
    /// Type-only import
    #[serde(rename = "type")]
    Type,
    /// Typeof import
    #[serde(rename = "typeof")]
    TypeOf,
    /// No kind recorded
    #[serde(rename = "null")]
    Null,
}

impl ImportKind {
    /// The kind's spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            ImportKind::Value => "value",
            ImportKind::Type => "type",
            ImportKind::TypeOf => "typeof",
            ImportKind::Null => "null",
        }
    }
}

/// Identifier reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    /// The identifier text
    pub name: String,
}

/// `null` literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NullLiteral {}

/// String literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringLiteral {
    /// The string body, without quotes
    pub value: String,
}

/// Numeric literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericLiteral {
    /// The literal's value
    pub value: f64,
}

/// Boolean literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanLiteral {
    /// The literal's value
    pub value: bool,
}

/// Unary operation such as `-x` or `typeof x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpression {
    /// Operator
    pub operator: UnaryOperator,
    /// Operand
    pub argument: Box<Node>,
}

/// Binary operation such as `a + b`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpression {
    /// Operator
    pub operator: BinaryOperator,
    /// Left operand
    pub left: Box<Node>,
    /// Right operand
    pub right: Box<Node>,
}

/// Function call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpression {
    /// Expression being called
    pub callee: Box<Node>,
    /// Call arguments
    pub arguments: Vec<Node>,
}

/// Expression wrapped in parentheses.
///
/// Kept as an explicit node so re-emitted source preserves grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenthesizedExpression {
    /// The inner expression
    pub expression: Box<Node>,
}

/// Expression in statement position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionStatement {
    /// The expression
    pub expression: Box<Node>,
}

/// Braced statement list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockStatement {
    /// Statements in source order
    pub body: Vec<Node>,
}

/// Lone semicolon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmptyStatement {}

/// `debugger` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebuggerStatement {}

/// `return` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStatement {
    /// Returned value, if any
    pub argument: Option<Box<Node>>,
}

/// `continue` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinueStatement {}

/// `break` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakStatement {}

/// `if` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStatement {
    /// Condition
    pub test: Box<Node>,
    /// Statement taken when the test is truthy
    pub consequent: Box<Node>,
    /// `else` branch, if any
    pub alternate: Option<Box<Node>>,
}

/// `switch` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchStatement {
    /// Discriminant expression
    pub discriminant: Box<Node>,
    /// Case clauses in source order
    pub cases: Vec<Node>,
}

/// `case` / `default` clause of a switch statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchCase {
    /// Test expression; absent for the `default` clause
    pub test: Option<Box<Node>>,
    /// Statements of the clause
    pub consequent: Vec<Node>,
}

/// `while` loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhileStatement {
    /// Loop condition
    pub test: Box<Node>,
    /// Loop body
    pub body: Box<Node>,
}

/// `do ... while` loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoWhileStatement {
    /// Loop condition
    pub test: Box<Node>,
    /// Loop body
    pub body: Box<Node>,
}

/// C-style `for` loop; every clause may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForStatement {
    /// Initialization clause
    pub init: Option<Box<Node>>,
    /// Condition clause
    pub test: Option<Box<Node>>,
    /// Update clause
    pub update: Option<Box<Node>>,
    /// Loop body
    pub body: Box<Node>,
}

/// `for ... in` loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForInStatement {
    /// Target: a single-declarator variable declaration or an assignable
    /// expression
    pub left: Box<Node>,
    /// Object whose keys are iterated
    pub right: Box<Node>,
    /// Loop body
    pub body: Box<Node>,
}

/// `for ... of` loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForOfStatement {
    /// Target: a single-declarator variable declaration or an assignable
    /// expression
    pub left: Box<Node>,
    /// Iterable
    pub right: Box<Node>,
    /// Loop body
    pub body: Box<Node>,
    /// Whether this is a `for await` loop
    pub r#await: bool,
}

/// Variable declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    /// Declaration kind (`var`, `let`, `const`)
    pub kind: VariableDeclarationKind,
    /// Declarators in source order
    pub declarations: Vec<Node>,
}

/// Single declarator within a variable declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclarator {
    /// Bound identifier
    pub id: Box<Node>,
    /// Initializer, if any
    pub init: Option<Box<Node>>,
}

/// `throw` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThrowStatement {
    /// Thrown value
    pub argument: Box<Node>,
}

/// `try` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TryStatement {
    /// Protected block
    pub block: Box<Node>,
    /// Catch clause, if any
    pub handler: Option<Box<Node>>,
    /// `finally` block, if any
    pub finalizer: Option<Box<Node>>,
}

/// `catch` clause. The parameter is always an identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchClause {
    /// Caught-value binding
    pub param: Box<Node>,
    /// Handler block
    pub body: Box<Node>,
}

/// Function declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    /// Function name
    pub id: Box<Node>,
    /// Parameter identifiers
    pub params: Vec<Node>,
    /// Function body
    pub body: Box<Node>,
    /// Whether this is a generator function
    pub generator: bool,
    /// Whether this is an async function
    pub r#async: bool,
}

/// Function expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionExpression {
    /// Function name, if any
    pub id: Option<Box<Node>>,
    /// Parameter identifiers
    pub params: Vec<Node>,
    /// Function body
    pub body: Box<Node>,
    /// Whether this is a generator function
    pub generator: bool,
    /// Whether this is an async function
    pub r#async: bool,
}

/// Program root; the result of every parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    /// `script` or `module`
    pub source_type: SourceType,
    /// Top-level statements and declarations in source order
    pub body: Vec<Node>,
}

/// `import` declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportDeclaration {
    /// Import kind, per the Babel schema
    pub import_kind: ImportKind,
    /// Import specifiers in source order
    pub specifiers: Vec<Node>,
    /// Module source string
    pub source: Box<Node>,
}

/// Named import specifier, e.g. `{ a }` or `{ a as b }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSpecifier {
    /// Name exported by the source module
    pub imported: Box<Node>,
    /// Local binding
    pub local: Box<Node>,
}

/// Default import specifier, e.g. `a` in `import a from "m"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportDefaultSpecifier {
    /// Local binding
    pub local: Box<Node>,
}

/// Namespace import specifier, e.g. `* as ns`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportNamespaceSpecifier {
    /// Local binding
    pub local: Box<Node>,
}

/// Named export specifier, e.g. `{ a }` or `{ a as b }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSpecifier {
    /// Name visible to importers
    pub exported: Box<Node>,
    /// Local binding being exported
    pub local: Box<Node>,
}

/// Namespace export specifier, e.g. `* as ns` in `export * as ns from "m"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportNamespaceSpecifier {
    /// Exported namespace name
    pub local: Box<Node>,
}

/// Default export specifier.
///
/// Part of the node model for host-side rewrites; the grammar itself never
/// produces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDefaultSpecifier {
    /// Exported name
    pub local: Box<Node>,
}

/// Named export declaration: `export { a }`, `export const x = 1`, or
/// `export { a } from "m"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportNamedDeclaration {
    /// Exported declaration, if the export carries one
    pub declaration: Option<Box<Node>>,
    /// Export specifiers, if the export lists names
    pub specifiers: Vec<Node>,
    /// Re-export source, if any
    pub source: Option<Box<Node>>,
}

/// Default export declaration, e.g. `export default foo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDefaultDeclaration {
    /// Exported declaration or expression
    pub declaration: Box<Node>,
}

/// `export * from "m"` declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportAllDeclaration {
    /// Re-export source
    pub source: Box<Node>,
}

/// An AST node.
///
/// One variant per [`NodeType`], each wrapping the variant's payload struct.
/// Serializes to the ESTree JSON shape: the variant name becomes the `type`
/// field and the payload's fields are inlined beside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Identifier reference
    Identifier(Identifier),
    /// `null` literal
    NullLiteral(NullLiteral),
    /// String literal
    StringLiteral(StringLiteral),
    /// Numeric literal
    NumericLiteral(NumericLiteral),
    /// Boolean literal
    BooleanLiteral(BooleanLiteral),
    /// Unary operation
    UnaryExpression(UnaryExpression),
    /// Binary operation
    BinaryExpression(BinaryExpression),
    /// Expression in statement position
    ExpressionStatement(ExpressionStatement),
    /// Braced statement list
    BlockStatement(BlockStatement),
    /// Lone semicolon
    EmptyStatement(EmptyStatement),
    /// `debugger` statement
    DebuggerStatement(DebuggerStatement),
    /// `return` statement
    ReturnStatement(ReturnStatement),
    /// `continue` statement
    ContinueStatement(ContinueStatement),
    /// `break` statement
    BreakStatement(BreakStatement),
    /// `if` statement
    IfStatement(IfStatement),
    /// `switch` statement
    SwitchStatement(SwitchStatement),
    /// `case` / `default` clause
    SwitchCase(SwitchCase),
    /// `while` loop
    WhileStatement(WhileStatement),
    /// `do ... while` loop
    DoWhileStatement(DoWhileStatement),
    /// C-style `for` loop
    ForStatement(ForStatement),
    /// Variable declaration
    VariableDeclaration(VariableDeclaration),
    /// Single declarator
    VariableDeclarator(VariableDeclarator),
    /// `for ... in` loop
    ForInStatement(ForInStatement),
    /// `for ... of` loop
    ForOfStatement(ForOfStatement),
    /// `throw` statement
    ThrowStatement(ThrowStatement),
    /// `try` statement
    TryStatement(TryStatement),
    /// `catch` clause
    CatchClause(CatchClause),
    /// Function declaration
    FunctionDeclaration(FunctionDeclaration),
    /// Function expression
    FunctionExpression(FunctionExpression),
    /// Program root
    Program(Program),
    /// `import` declaration
    ImportDeclaration(ImportDeclaration),
    /// Named import specifier
    ImportSpecifier(ImportSpecifier),
    /// Default import specifier
    ImportDefaultSpecifier(ImportDefaultSpecifier),
    /// Namespace import specifier
    ImportNamespaceSpecifier(ImportNamespaceSpecifier),
    /// Named export specifier
    ExportSpecifier(ExportSpecifier),
    /// Namespace export specifier
    ExportNamespaceSpecifier(ExportNamespaceSpecifier),
    /// Default export specifier
    ExportDefaultSpecifier(ExportDefaultSpecifier),
    /// Named export declaration
    ExportNamedDeclaration(ExportNamedDeclaration),
    /// Default export declaration
    ExportDefaultDeclaration(ExportDefaultDeclaration),
    /// `export * from ...` declaration
    ExportAllDeclaration(ExportAllDeclaration),
    /// Function call
    CallExpression(CallExpression),
    /// Parenthesized expression
    ParenthesizedExpression(ParenthesizedExpression),
}

impl Node {
    /// The node's discriminator.
    pub fn node_type(&self) -> NodeType {
        match self {
            Node::Identifier(_) => NodeType::Identifier,
            Node::NullLiteral(_) => NodeType::NullLiteral,
            Node::StringLiteral(_) => NodeType::StringLiteral,
            Node::NumericLiteral(_) => NodeType::NumericLiteral,
            Node::BooleanLiteral(_) => NodeType::BooleanLiteral,
            Node::UnaryExpression(_) => NodeType::UnaryExpression,
            Node::BinaryExpression(_) => NodeType::BinaryExpression,
            Node::ExpressionStatement(_) => NodeType::ExpressionStatement,
            Node::BlockStatement(_) => NodeType::BlockStatement,
            Node::EmptyStatement(_) => NodeType::EmptyStatement,
            Node::DebuggerStatement(_) => NodeType::DebuggerStatement,
            Node::ReturnStatement(_) => NodeType::ReturnStatement,
            Node::ContinueStatement(_) => NodeType::ContinueStatement,
            Node::BreakStatement(_) => NodeType::BreakStatement,
            Node::IfStatement(_) => NodeType::IfStatement,
            Node::SwitchStatement(_) => NodeType::SwitchStatement,
            Node::SwitchCase(_) => NodeType::SwitchCase,
            Node::WhileStatement(_) => NodeType::WhileStatement,
            Node::DoWhileStatement(_) => NodeType::DoWhileStatement,
            Node::ForStatement(_) => NodeType::ForStatement,
            Node::VariableDeclaration(_) => NodeType::VariableDeclaration,
            Node::VariableDeclarator(_) => NodeType::VariableDeclarator,
            Node::ForInStatement(_) => NodeType::ForInStatement,
            Node::ForOfStatement(_) => NodeType::ForOfStatement,
            Node::ThrowStatement(_) => NodeType::ThrowStatement,
            Node::TryStatement(_) => NodeType::TryStatement,
            Node::CatchClause(_) => NodeType::CatchClause,
            Node::FunctionDeclaration(_) => NodeType::FunctionDeclaration,
            Node::FunctionExpression(_) => NodeType::FunctionExpression,
            Node::Program(_) => NodeType::Program,
            Node::ImportDeclaration(_) => NodeType::ImportDeclaration,
            Node::ImportSpecifier(_) => NodeType::ImportSpecifier,
            Node::ImportDefaultSpecifier(_) => NodeType::ImportDefaultSpecifier,
            Node::ImportNamespaceSpecifier(_) => NodeType::ImportNamespaceSpecifier,
            Node::ExportSpecifier(_) => NodeType::ExportSpecifier,
            Node::ExportNamespaceSpecifier(_) => NodeType::ExportNamespaceSpecifier,
            Node::ExportDefaultSpecifier(_) => NodeType::ExportDefaultSpecifier,
            Node::ExportNamedDeclaration(_) => NodeType::ExportNamedDeclaration,
            Node::ExportDefaultDeclaration(_) => NodeType::ExportDefaultDeclaration,
            Node::ExportAllDeclaration(_) => NodeType::ExportAllDeclaration,
            Node::CallExpression(_) => NodeType::CallExpression,
            Node::ParenthesizedExpression(_) => NodeType::ParenthesizedExpression,
        }
    }

    /// Convenience constructor for an identifier node.
    pub fn identifier(name: impl Into<String>) -> Node {
        Node::Identifier(Identifier { name: name.into() })
    }
}
