//! Generic AST traversal.
//!
//! [`Visitor`] carries one hook per node variant. Every hook's default
//! implementation calls the matching `walk_*` function, which recurses into
//! the node's children in field order; traversal is therefore pre-order,
//! left-to-right. Implementors override only the hooks they care about and
//! call the `walk_*` function themselves if they still want the children
//! visited. [`Node::accept`] dispatches a node to its hook.

use crate::ast::*;

/// A read-only AST visitor with default-recursive hooks.
pub trait Visitor {
    /// Visit an identifier.
    fn visit_identifier(&mut self, node: &Identifier) {
        walk_identifier(self, node)
    }

    /// Visit a `null` literal.
    fn visit_null_literal(&mut self, node: &NullLiteral) {
        walk_null_literal(self, node)
    }

    /// Visit a string literal.
    fn visit_string_literal(&mut self, node: &StringLiteral) {
        walk_string_literal(self, node)
    }

    /// Visit a numeric literal.
    fn visit_numeric_literal(&mut self, node: &NumericLiteral) {
        walk_numeric_literal(self, node)
    }

    /// Visit a boolean literal.
    fn visit_boolean_literal(&mut self, node: &BooleanLiteral) {
        walk_boolean_literal(self, node)
    }

    /// Visit a unary expression.
    fn visit_unary_expression(&mut self, node: &UnaryExpression) {
        walk_unary_expression(self, node)
    }

    /// Visit a binary expression.
    fn visit_binary_expression(&mut self, node: &BinaryExpression) {
        walk_binary_expression(self, node)
    }

    /// Visit an expression statement.
    fn visit_expression_statement(&mut self, node: &ExpressionStatement) {
        walk_expression_statement(self, node)
    }

    /// Visit a block statement.
    fn visit_block_statement(&mut self, node: &BlockStatement) {
        walk_block_statement(self, node)
    }

    /// Visit an empty statement.
    fn visit_empty_statement(&mut self, node: &EmptyStatement) {
        walk_empty_statement(self, node)
    }

    /// Visit a `debugger` statement.
    fn visit_debugger_statement(&mut self, node: &DebuggerStatement) {
        walk_debugger_statement(self, node)
    }

    /// Visit a `return` statement.
    fn visit_return_statement(&mut self, node: &ReturnStatement) {
        walk_return_statement(self, node)
    }

    /// Visit a `continue` statement.
    fn visit_continue_statement(&mut self, node: &ContinueStatement) {
        walk_continue_statement(self, node)
    }

    /// Visit a `break` statement.
    fn visit_break_statement(&mut self, node: &BreakStatement) {
        walk_break_statement(self, node)
    }

    /// Visit an `if` statement.
    fn visit_if_statement(&mut self, node: &IfStatement) {
        walk_if_statement(self, node)
    }

    /// Visit a `switch` statement.
    fn visit_switch_statement(&mut self, node: &SwitchStatement) {
        walk_switch_statement(self, node)
    }

    /// Visit a switch case.
    fn visit_switch_case(&mut self, node: &SwitchCase) {
        walk_switch_case(self, node)
    }

    /// Visit a `while` loop.
    fn visit_while_statement(&mut self, node: &WhileStatement) {
        walk_while_statement(self, node)
    }

    /// Visit a `do ... while` loop.
    fn visit_do_while_statement(&mut self, node: &DoWhileStatement) {
        walk_do_while_statement(self, node)
    }

    /// Visit a C-style `for` loop.
    fn visit_for_statement(&mut self, node: &ForStatement) {
        walk_for_statement(self, node)
    }

    /// Visit a variable declaration.
    fn visit_variable_declaration(&mut self, node: &VariableDeclaration) {
        walk_variable_declaration(self, node)
    }

    /// Visit a variable declarator.
    fn visit_variable_declarator(&mut self, node: &VariableDeclarator) {
        walk_variable_declarator(self, node)
    }

    /// Visit a `for ... in` loop.
    fn visit_for_in_statement(&mut self, node: &ForInStatement) {
        walk_for_in_statement(self, node)
    }

    /// Visit a `for ... of` loop.
    fn visit_for_of_statement(&mut self, node: &ForOfStatement) {
        walk_for_of_statement(self, node)
    }

    /// Visit a `throw` statement.
    fn visit_throw_statement(&mut self, node: &ThrowStatement) {
        walk_throw_statement(self, node)
    }

    /// Visit a `try` statement.
    fn visit_try_statement(&mut self, node: &TryStatement) {
        walk_try_statement(self, node)
    }

    /// Visit a `catch` clause.
    fn visit_catch_clause(&mut self, node: &CatchClause) {
        walk_catch_clause(self, node)
    }

    /// Visit a function declaration.
    fn visit_function_declaration(&mut self, node: &FunctionDeclaration) {
        walk_function_declaration(self, node)
    }

    /// Visit a function expression.
    fn visit_function_expression(&mut self, node: &FunctionExpression) {
        walk_function_expression(self, node)
    }

    /// Visit the program root.
    fn visit_program(&mut self, node: &Program) {
        walk_program(self, node)
    }

    /// Visit an `import` declaration.
    fn visit_import_declaration(&mut self, node: &ImportDeclaration) {
        walk_import_declaration(self, node)
    }

    /// Visit a named import specifier.
    fn visit_import_specifier(&mut self, node: &ImportSpecifier) {
        walk_import_specifier(self, node)
    }

    /// Visit a default import specifier.
    fn visit_import_default_specifier(&mut self, node: &ImportDefaultSpecifier) {
        walk_import_default_specifier(self, node)
    }

    /// Visit a namespace import specifier.
    fn visit_import_namespace_specifier(&mut self, node: &ImportNamespaceSpecifier) {
        walk_import_namespace_specifier(self, node)
    }

    /// Visit a named export specifier.
    fn visit_export_specifier(&mut self, node: &ExportSpecifier) {
        walk_export_specifier(self, node)
    }

    /// Visit a namespace export specifier.
    fn visit_export_namespace_specifier(&mut self, node: &ExportNamespaceSpecifier) {
        walk_export_namespace_specifier(self, node)
    }

    /// Visit a default export specifier.
    fn visit_export_default_specifier(&mut self, node: &ExportDefaultSpecifier) {
        walk_export_default_specifier(self, node)
    }

    /// Visit a named export declaration.
    fn visit_export_named_declaration(&mut self, node: &ExportNamedDeclaration) {
        walk_export_named_declaration(self, node)
    }

    /// Visit a default export declaration.
    fn visit_export_default_declaration(&mut self, node: &ExportDefaultDeclaration) {
        walk_export_default_declaration(self, node)
    }

    /// Visit an `export * from ...` declaration.
    fn visit_export_all_declaration(&mut self, node: &ExportAllDeclaration) {
        walk_export_all_declaration(self, node)
    }

    /// Visit a call expression.
    fn visit_call_expression(&mut self, node: &CallExpression) {
        walk_call_expression(self, node)
    }

    /// Visit a parenthesized expression.
    fn visit_parenthesized_expression(&mut self, node: &ParenthesizedExpression) {
        walk_parenthesized_expression(self, node)
    }
}

impl Node {
    /// Dispatch this node to the matching visitor hook.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        match self {
            Node::Identifier(n) => visitor.visit_identifier(n),
            Node::NullLiteral(n) => visitor.visit_null_literal(n),
            Node::StringLiteral(n) => visitor.visit_string_literal(n),
            Node::NumericLiteral(n) => visitor.visit_numeric_literal(n),
            Node::BooleanLiteral(n) => visitor.visit_boolean_literal(n),
            Node::UnaryExpression(n) => visitor.visit_unary_expression(n),
            Node::BinaryExpression(n) => visitor.visit_binary_expression(n),
            Node::ExpressionStatement(n) => visitor.visit_expression_statement(n),
            Node::BlockStatement(n) => visitor.visit_block_statement(n),
            Node::EmptyStatement(n) => visitor.visit_empty_statement(n),
            Node::DebuggerStatement(n) => visitor.visit_debugger_statement(n),
            Node::ReturnStatement(n) => visitor.visit_return_statement(n),
            Node::ContinueStatement(n) => visitor.visit_continue_statement(n),
            Node::BreakStatement(n) => visitor.visit_break_statement(n),
            Node::IfStatement(n) => visitor.visit_if_statement(n),
            Node::SwitchStatement(n) => visitor.visit_switch_statement(n),
            Node::SwitchCase(n) => visitor.visit_switch_case(n),
            Node::WhileStatement(n) => visitor.visit_while_statement(n),
            Node::DoWhileStatement(n) => visitor.visit_do_while_statement(n),
            Node::ForStatement(n) => visitor.visit_for_statement(n),
            Node::VariableDeclaration(n) => visitor.visit_variable_declaration(n),
            Node::VariableDeclarator(n) => visitor.visit_variable_declarator(n),
            Node::ForInStatement(n) => visitor.visit_for_in_statement(n),
            Node::ForOfStatement(n) => visitor.visit_for_of_statement(n),
            Node::ThrowStatement(n) => visitor.visit_throw_statement(n),
            Node::TryStatement(n) => visitor.visit_try_statement(n),
            Node::CatchClause(n) => visitor.visit_catch_clause(n),
            Node::FunctionDeclaration(n) => visitor.visit_function_declaration(n),
            Node::FunctionExpression(n) => visitor.visit_function_expression(n),
            Node::Program(n) => visitor.visit_program(n),
            Node::ImportDeclaration(n) => visitor.visit_import_declaration(n),
            Node::ImportSpecifier(n) => visitor.visit_import_specifier(n),
            Node::ImportDefaultSpecifier(n) => visitor.visit_import_default_specifier(n),
            Node::ImportNamespaceSpecifier(n) => visitor.visit_import_namespace_specifier(n),
            Node::ExportSpecifier(n) => visitor.visit_export_specifier(n),
            Node::ExportNamespaceSpecifier(n) => visitor.visit_export_namespace_specifier(n),
            Node::ExportDefaultSpecifier(n) => visitor.visit_export_default_specifier(n),
            Node::ExportNamedDeclaration(n) => visitor.visit_export_named_declaration(n),
            Node::ExportDefaultDeclaration(n) => visitor.visit_export_default_declaration(n),
            Node::ExportAllDeclaration(n) => visitor.visit_export_all_declaration(n),
            Node::CallExpression(n) => visitor.visit_call_expression(n),
            Node::ParenthesizedExpression(n) => visitor.visit_parenthesized_expression(n),
        }
    }
}

fn accept_opt<V: Visitor + ?Sized>(visitor: &mut V, node: &Option<Box<Node>>) {
    if let Some(node) = node {
        node.accept(visitor);
    }
}

fn accept_all<V: Visitor + ?Sized>(visitor: &mut V, nodes: &[Node]) {
    for node in nodes {
        node.accept(visitor);
    }
}

/// Recurse into an identifier's children (there are none).
pub fn walk_identifier<V: Visitor + ?Sized>(_visitor: &mut V, _node: &Identifier) {}

/// Recurse into a `null` literal's children (there are none).
pub fn walk_null_literal<V: Visitor + ?Sized>(_visitor: &mut V, _node: &NullLiteral) {}

/// Recurse into a string literal's children (there are none).
pub fn walk_string_literal<V: Visitor + ?Sized>(_visitor: &mut V, _node: &StringLiteral) {}

/// Recurse into a numeric literal's children (there are none).
pub fn walk_numeric_literal<V: Visitor + ?Sized>(_visitor: &mut V, _node: &NumericLiteral) {}

/// Recurse into a boolean literal's children (there are none).
pub fn walk_boolean_literal<V: Visitor + ?Sized>(_visitor: &mut V, _node: &BooleanLiteral) {}

/// Recurse into a unary expression's argument.
pub fn walk_unary_expression<V: Visitor + ?Sized>(visitor: &mut V, node: &UnaryExpression) {
    node.argument.accept(visitor);
}

/// Recurse into a binary expression's operands.
pub fn walk_binary_expression<V: Visitor + ?Sized>(visitor: &mut V, node: &BinaryExpression) {
    node.left.accept(visitor);
    node.right.accept(visitor);
}

/// Recurse into an expression statement's expression.
pub fn walk_expression_statement<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ExpressionStatement,
) {
    node.expression.accept(visitor);
}

/// Recurse into a block's statements.
pub fn walk_block_statement<V: Visitor + ?Sized>(visitor: &mut V, node: &BlockStatement) {
    accept_all(visitor, &node.body);
}

/// Recurse into an empty statement's children (there are none).
pub fn walk_empty_statement<V: Visitor + ?Sized>(_visitor: &mut V, _node: &EmptyStatement) {}

/// Recurse into a `debugger` statement's children (there are none).
pub fn walk_debugger_statement<V: Visitor + ?Sized>(_visitor: &mut V, _node: &DebuggerStatement) {}

/// Recurse into a `return` statement's argument, if present.
pub fn walk_return_statement<V: Visitor + ?Sized>(visitor: &mut V, node: &ReturnStatement) {
    accept_opt(visitor, &node.argument);
}

/// Recurse into a `continue` statement's children (there are none).
pub fn walk_continue_statement<V: Visitor + ?Sized>(_visitor: &mut V, _node: &ContinueStatement) {}

/// Recurse into a `break` statement's children (there are none).
pub fn walk_break_statement<V: Visitor + ?Sized>(_visitor: &mut V, _node: &BreakStatement) {}

/// Recurse into an `if` statement's test and branches.
pub fn walk_if_statement<V: Visitor + ?Sized>(visitor: &mut V, node: &IfStatement) {
    node.test.accept(visitor);
    node.consequent.accept(visitor);
    accept_opt(visitor, &node.alternate);
}

/// Recurse into a `switch` statement's discriminant and cases.
pub fn walk_switch_statement<V: Visitor + ?Sized>(visitor: &mut V, node: &SwitchStatement) {
    node.discriminant.accept(visitor);
    accept_all(visitor, &node.cases);
}

/// Recurse into a switch case's test and consequent.
pub fn walk_switch_case<V: Visitor + ?Sized>(visitor: &mut V, node: &SwitchCase) {
    accept_opt(visitor, &node.test);
    accept_all(visitor, &node.consequent);
}

/// Recurse into a `while` loop's test and body.
pub fn walk_while_statement<V: Visitor + ?Sized>(visitor: &mut V, node: &WhileStatement) {
    node.test.accept(visitor);
    node.body.accept(visitor);
}

/// Recurse into a `do ... while` loop's test and body.
pub fn walk_do_while_statement<V: Visitor + ?Sized>(visitor: &mut V, node: &DoWhileStatement) {
    node.test.accept(visitor);
    node.body.accept(visitor);
}

/// Recurse into a `for` loop's clauses and body.
pub fn walk_for_statement<V: Visitor + ?Sized>(visitor: &mut V, node: &ForStatement) {
    accept_opt(visitor, &node.init);
    accept_opt(visitor, &node.test);
    accept_opt(visitor, &node.update);
    node.body.accept(visitor);
}

/// Recurse into a variable declaration's declarators.
pub fn walk_variable_declaration<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &VariableDeclaration,
) {
    accept_all(visitor, &node.declarations);
}

/// Recurse into a declarator's binding and initializer.
pub fn walk_variable_declarator<V: Visitor + ?Sized>(visitor: &mut V, node: &VariableDeclarator) {
    node.id.accept(visitor);
    accept_opt(visitor, &node.init);
}

/// Recurse into a `for ... in` loop's target, object, and body.
pub fn walk_for_in_statement<V: Visitor + ?Sized>(visitor: &mut V, node: &ForInStatement) {
    node.left.accept(visitor);
    node.right.accept(visitor);
    node.body.accept(visitor);
}

/// Recurse into a `for ... of` loop's target, iterable, and body.
pub fn walk_for_of_statement<V: Visitor + ?Sized>(visitor: &mut V, node: &ForOfStatement) {
    node.left.accept(visitor);
    node.right.accept(visitor);
    node.body.accept(visitor);
}

/// Recurse into a `throw` statement's argument.
pub fn walk_throw_statement<V: Visitor + ?Sized>(visitor: &mut V, node: &ThrowStatement) {
    node.argument.accept(visitor);
}

/// Recurse into a `try` statement's block, handler, and finalizer.
pub fn walk_try_statement<V: Visitor + ?Sized>(visitor: &mut V, node: &TryStatement) {
    node.block.accept(visitor);
    accept_opt(visitor, &node.handler);
    accept_opt(visitor, &node.finalizer);
}

/// Recurse into a `catch` clause's parameter and body.
pub fn walk_catch_clause<V: Visitor + ?Sized>(visitor: &mut V, node: &CatchClause) {
    node.param.accept(visitor);
    node.body.accept(visitor);
}

/// Recurse into a function declaration's name, parameters, and body.
pub fn walk_function_declaration<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &FunctionDeclaration,
) {
    node.id.accept(visitor);
    accept_all(visitor, &node.params);
    node.body.accept(visitor);
}

/// Recurse into a function expression's name, parameters, and body.
pub fn walk_function_expression<V: Visitor + ?Sized>(visitor: &mut V, node: &FunctionExpression) {
    accept_opt(visitor, &node.id);
    accept_all(visitor, &node.params);
    node.body.accept(visitor);
}

/// Recurse into the program's top-level statements.
pub fn walk_program<V: Visitor + ?Sized>(visitor: &mut V, node: &Program) {
    accept_all(visitor, &node.body);
}

/// Recurse into an `import` declaration's specifiers and source.
pub fn walk_import_declaration<V: Visitor + ?Sized>(visitor: &mut V, node: &ImportDeclaration) {
    accept_all(visitor, &node.specifiers);
    node.source.accept(visitor);
}

/// Recurse into a named import specifier's names.
pub fn walk_import_specifier<V: Visitor + ?Sized>(visitor: &mut V, node: &ImportSpecifier) {
    node.imported.accept(visitor);
    node.local.accept(visitor);
}

/// Recurse into a default import specifier's binding.
pub fn walk_import_default_specifier<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ImportDefaultSpecifier,
) {
    node.local.accept(visitor);
}

/// Recurse into a namespace import specifier's binding.
pub fn walk_import_namespace_specifier<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ImportNamespaceSpecifier,
) {
    node.local.accept(visitor);
}

/// Recurse into a named export specifier's names.
pub fn walk_export_specifier<V: Visitor + ?Sized>(visitor: &mut V, node: &ExportSpecifier) {
    node.exported.accept(visitor);
    node.local.accept(visitor);
}

/// Recurse into a namespace export specifier's name.
pub fn walk_export_namespace_specifier<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ExportNamespaceSpecifier,
) {
    node.local.accept(visitor);
}

/// Recurse into a default export specifier's name.
pub fn walk_export_default_specifier<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ExportDefaultSpecifier,
) {
    node.local.accept(visitor);
}

/// Recurse into a named export declaration's children.
pub fn walk_export_named_declaration<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ExportNamedDeclaration,
) {
    accept_opt(visitor, &node.declaration);
    accept_all(visitor, &node.specifiers);
    accept_opt(visitor, &node.source);
}

/// Recurse into a default export declaration's child.
pub fn walk_export_default_declaration<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ExportDefaultDeclaration,
) {
    node.declaration.accept(visitor);
}

/// Recurse into an `export * from ...` declaration's source.
pub fn walk_export_all_declaration<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ExportAllDeclaration,
) {
    node.source.accept(visitor);
}

/// Recurse into a call expression's callee and arguments.
pub fn walk_call_expression<V: Visitor + ?Sized>(visitor: &mut V, node: &CallExpression) {
    node.callee.accept(visitor);
    accept_all(visitor, &node.arguments);
}

/// Recurse into a parenthesized expression's inner expression.
pub fn walk_parenthesized_expression<V: Visitor + ?Sized>(
    visitor: &mut V,
    node: &ParenthesizedExpression,
) {
    node.expression.accept(visitor);
}
