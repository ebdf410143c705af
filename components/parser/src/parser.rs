//! Recursive descent parser for JavaScript.
//!
//! The parser drives the lexer one token at a time, dispatching on the
//! current token kind. Binary expressions are assembled by precedence
//! climbing over a configurable operator precedence table; everything else is
//! plain recursive descent. The root of every successful parse is a
//! [`Program`] node with `source_type = module`.

use std::collections::BTreeMap;

use core_types::JsError;

use crate::ast::*;
use crate::error::{syntax_error, unexpected_token};
use crate::lexer::{Lexer, TokenKind};

/// Precedence reported for operators absent from the precedence table.
///
/// Never exceeds the climb threshold, so an unlisted operator always
/// terminates the ascent and is left for the caller to reject.
pub const UNDEFINED_PRECEDENCE: i32 = -1;

fn default_binary_op_precedences() -> BTreeMap<BinaryOperator, i32> {
    BTreeMap::from([
        (BinaryOperator::Lt, 5),
        (BinaryOperator::LeftShift, 5),
        (BinaryOperator::Add, 10),
        (BinaryOperator::Sub, 10),
        (BinaryOperator::Mul, 20),
        (BinaryOperator::Div, 20),
    ])
}

fn binary_op_from_token(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::EqEq => Some(BinaryOperator::EqEq),
        TokenKind::NotEq => Some(BinaryOperator::NotEq),
        TokenKind::EqEqEq => Some(BinaryOperator::EqEqEq),
        TokenKind::NotEqEq => Some(BinaryOperator::NotEqEq),
        TokenKind::Lt => Some(BinaryOperator::Lt),
        TokenKind::LtEq => Some(BinaryOperator::LtEq),
        TokenKind::Gt => Some(BinaryOperator::Gt),
        TokenKind::GtEq => Some(BinaryOperator::GtEq),
        TokenKind::LtLt => Some(BinaryOperator::LeftShift),
        TokenKind::GtGt => Some(BinaryOperator::RightShift),
        TokenKind::GtGtGt => Some(BinaryOperator::UnsignedRightShift),
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Percent => Some(BinaryOperator::Mod),
        _ => None,
    }
}

fn unary_op_from_token(kind: TokenKind) -> Option<UnaryOperator> {
    match kind {
        TokenKind::Plus => Some(UnaryOperator::Plus),
        TokenKind::Minus => Some(UnaryOperator::Minus),
        TokenKind::Not => Some(UnaryOperator::Not),
        TokenKind::Tilde => Some(UnaryOperator::BitwiseNot),
        TokenKind::Typeof => Some(UnaryOperator::Typeof),
        TokenKind::Void => Some(UnaryOperator::Void),
        TokenKind::Delete => Some(UnaryOperator::Delete),
        TokenKind::Throw => Some(UnaryOperator::Throw),
        _ => None,
    }
}

/// JavaScript parser.
pub struct Parser {
    lexer: Lexer,
    binary_op_precedences: BTreeMap<BinaryOperator, i32>,
}

impl Parser {
    /// Create a new parser for the given source code.
    pub fn new(source: &str) -> Self {
        Self {
            lexer: Lexer::new(source),
            binary_op_precedences: default_binary_op_precedences(),
        }
    }

    /// Replace the binary operator precedence table.
    ///
    /// Intended for tests and host configuration; the table is immutable
    /// while a parse is running.
    pub fn install_binary_op_precedences(
        &mut self,
        binary_op_precedences: BTreeMap<BinaryOperator, i32>,
    ) {
        self.binary_op_precedences = binary_op_precedences;
    }

    /// Parse the source into an AST.
    ///
    /// The returned root is always a [`Program`]. On failure the first error
    /// is returned and no partial tree is produced.
    pub fn parse(&mut self) -> Result<Node, JsError> {
        self.lexer.advance();
        let program = self.parse_program()?;
        // Lexer soft errors (unterminated string, malformed numeric literal)
        // invalidate the parse even though a tree was assembled.
        if let Some(error) = self.lexer.take_error() {
            return Err(error);
        }
        Ok(program)
    }

    fn parse_program(&mut self) -> Result<Node, JsError> {
        let mut body = Vec::new();
        while !self.check(TokenKind::Eof) {
            let node = match self.lexer.current_kind() {
                TokenKind::Import => self.parse_import_declaration()?,
                TokenKind::Export => self.parse_export_declaration()?,
                _ => self.parse_statement()?,
            };
            body.push(node);
        }
        Ok(Node::Program(Program {
            source_type: SourceType::Module,
            body,
        }))
    }

    // ------------------------------------------------------------------
    // Statements
    // ------------------------------------------------------------------

    fn parse_statement(&mut self) -> Result<Node, JsError> {
        match self.lexer.current_kind() {
            TokenKind::Semicolon => self.parse_empty_statement(),
            TokenKind::Function | TokenKind::Async => self.parse_function_declaration(),
            TokenKind::Var | TokenKind::Let | TokenKind::Const => {
                self.parse_variable_declaration()
            }
            TokenKind::LBrace => self.parse_block_statement(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::Throw => self.parse_throw_statement(),
            TokenKind::Continue => self.parse_continue_statement(),
            TokenKind::Break => self.parse_break_statement(),
            TokenKind::If => self.parse_if_statement(),
            TokenKind::Switch => self.parse_switch_statement(),
            TokenKind::While => self.parse_while_statement(),
            TokenKind::Do => self.parse_do_while_statement(),
            TokenKind::For => self.parse_for_statement(),
            TokenKind::Try => self.parse_try_statement(),
            TokenKind::Debugger => self.parse_debugger_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_empty_statement(&mut self) -> Result<Node, JsError> {
        self.lexer.advance();
        Ok(Node::EmptyStatement(EmptyStatement {}))
    }

    fn parse_debugger_statement(&mut self) -> Result<Node, JsError> {
        self.lexer.advance();
        self.skip_semicolon();
        Ok(Node::DebuggerStatement(DebuggerStatement {}))
    }

    fn parse_expression_statement(&mut self) -> Result<Node, JsError> {
        let expression = self.parse_expression()?;
        self.skip_semicolon();
        Ok(Node::ExpressionStatement(ExpressionStatement {
            expression: Box::new(expression),
        }))
    }

    fn parse_block_statement(&mut self) -> Result<Node, JsError> {
        self.expect(TokenKind::LBrace)?;
        let mut body = Vec::new();
        while !self.check(TokenKind::RBrace) {
            if self.check(TokenKind::Eof) {
                return Err(self.unexpected("'}'"));
            }
            body.push(self.parse_statement()?);
        }
        self.lexer.advance();
        Ok(Node::BlockStatement(BlockStatement { body }))
    }

    fn parse_return_statement(&mut self) -> Result<Node, JsError> {
        self.lexer.advance();
        let argument = match self.lexer.current_kind() {
            TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof => None,
            _ => Some(Box::new(self.parse_expression()?)),
        };
        self.skip_semicolon();
        Ok(Node::ReturnStatement(ReturnStatement { argument }))
    }

    fn parse_throw_statement(&mut self) -> Result<Node, JsError> {
        self.lexer.advance();
        let argument = self.parse_expression()?;
        self.skip_semicolon();
        Ok(Node::ThrowStatement(ThrowStatement {
            argument: Box::new(argument),
        }))
    }

    fn parse_continue_statement(&mut self) -> Result<Node, JsError> {
        self.lexer.advance();
        self.skip_semicolon();
        Ok(Node::ContinueStatement(ContinueStatement {}))
    }

    fn parse_break_statement(&mut self) -> Result<Node, JsError> {
        self.lexer.advance();
        self.skip_semicolon();
        Ok(Node::BreakStatement(BreakStatement {}))
    }

    fn parse_if_statement(&mut self) -> Result<Node, JsError> {
        self.lexer.advance();
        self.expect(TokenKind::LParen)?;
        let test = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        let consequent = self.parse_statement()?;
        let alternate = if self.eat(TokenKind::Else) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };
        Ok(Node::IfStatement(IfStatement {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate,
        }))
    }

    fn parse_switch_statement(&mut self) -> Result<Node, JsError> {
        self.lexer.advance();
        self.expect(TokenKind::LParen)?;
        let discriminant = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::LBrace)?;
        let mut cases = Vec::new();
        while self.check(TokenKind::Case) || self.check(TokenKind::Default) {
            cases.push(self.parse_switch_case()?);
        }
        self.expect(TokenKind::RBrace)?;
        Ok(Node::SwitchStatement(SwitchStatement {
            discriminant: Box::new(discriminant),
            cases,
        }))
    }

    fn parse_switch_case(&mut self) -> Result<Node, JsError> {
        let test = if self.eat(TokenKind::Case) {
            Some(Box::new(self.parse_expression()?))
        } else {
            self.expect(TokenKind::Default)?;
            None
        };
        self.expect(TokenKind::Colon)?;
        let mut consequent = Vec::new();
        loop {
            match self.lexer.current_kind() {
                TokenKind::Case | TokenKind::Default | TokenKind::RBrace | TokenKind::Eof => break,
                _ => consequent.push(self.parse_statement()?),
            }
        }
        Ok(Node::SwitchCase(SwitchCase { test, consequent }))
    }

    fn parse_while_statement(&mut self) -> Result<Node, JsError> {
        self.lexer.advance();
        self.expect(TokenKind::LParen)?;
        let test = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        let body = self.parse_statement()?;
        Ok(Node::WhileStatement(WhileStatement {
            test: Box::new(test),
            body: Box::new(body),
        }))
    }

    fn parse_do_while_statement(&mut self) -> Result<Node, JsError> {
        self.lexer.advance();
        let body = self.parse_statement()?;
        self.expect(TokenKind::While)?;
        self.expect(TokenKind::LParen)?;
        let test = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        self.skip_semicolon();
        Ok(Node::DoWhileStatement(DoWhileStatement {
            test: Box::new(test),
            body: Box::new(body),
        }))
    }

    // ------------------------------------------------------------------
    // Declarations
    // ------------------------------------------------------------------

    fn parse_variable_declaration(&mut self) -> Result<Node, JsError> {
        let declaration = self.parse_variable_declaration_clause()?;
        self.skip_semicolon();
        Ok(declaration)
    }

    /// Parse `kind declarator [, declarator]*` without touching a trailing
    /// semicolon. Shared between statement position and for-statement heads.
    fn parse_variable_declaration_clause(&mut self) -> Result<Node, JsError> {
        let kind = match self.lexer.current_kind() {
            TokenKind::Var => VariableDeclarationKind::Var,
            TokenKind::Let => VariableDeclarationKind::Let,
            TokenKind::Const => VariableDeclarationKind::Const,
            _ => return Err(self.unexpected("'var', 'let', or 'const'")),
        };
        self.lexer.advance();
        let mut declarations = Vec::new();
        loop {
            declarations.push(self.parse_variable_declarator()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        Ok(Node::VariableDeclaration(VariableDeclaration {
            kind,
            declarations,
        }))
    }

    fn parse_variable_declarator(&mut self) -> Result<Node, JsError> {
        let id = self.parse_identifier()?;
        let init = if self.eat(TokenKind::Assign) {
            Some(Box::new(self.parse_expression()?))
        } else {
            None
        };
        Ok(Node::VariableDeclarator(VariableDeclarator {
            id: Box::new(id),
            init,
        }))
    }

    fn parse_function_declaration(&mut self) -> Result<Node, JsError> {
        let is_async = self.eat(TokenKind::Async);
        self.expect(TokenKind::Function)?;
        let generator = self.eat(TokenKind::Star);
        let id = self.parse_identifier()?;
        let params = self.parse_function_params()?;
        let body = self.parse_block_statement()?;
        Ok(Node::FunctionDeclaration(FunctionDeclaration {
            id: Box::new(id),
            params,
            body: Box::new(body),
            generator,
            r#async: is_async,
        }))
    }

    fn parse_function_expression(&mut self) -> Result<Node, JsError> {
        let is_async = self.eat(TokenKind::Async);
        self.expect(TokenKind::Function)?;
        let generator = self.eat(TokenKind::Star);
        let id = if self.check(TokenKind::LParen) {
            None
        } else {
            Some(Box::new(self.parse_identifier()?))
        };
        let params = self.parse_function_params()?;
        let body = self.parse_block_statement()?;
        Ok(Node::FunctionExpression(FunctionExpression {
            id,
            params,
            body: Box::new(body),
            generator,
            r#async: is_async,
        }))
    }

    fn parse_function_params(&mut self) -> Result<Vec<Node>, JsError> {
        self.expect(TokenKind::LParen)?;
        let mut params = Vec::new();
        while !self.check(TokenKind::RParen) {
            params.push(self.parse_identifier()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(params)
    }

    /// Declarations allowed after `export`.
    fn parse_declaration(&mut self) -> Result<Node, JsError> {
        match self.lexer.current_kind() {
            TokenKind::Function | TokenKind::Async => self.parse_function_declaration(),
            TokenKind::Var | TokenKind::Let | TokenKind::Const => {
                self.parse_variable_declaration()
            }
            _ => Err(self.unexpected("declaration")),
        }
    }

    // ------------------------------------------------------------------
    // For statements
    // ------------------------------------------------------------------

    fn parse_for_statement(&mut self) -> Result<Node, JsError> {
        self.lexer.advance();
        let is_await = self.eat(TokenKind::Await);
        self.expect(TokenKind::LParen)?;

        if self.check(TokenKind::Semicolon) {
            self.reject_for_await(is_await)?;
            self.lexer.advance();
            return self.parse_regular_for(None);
        }

        let head = match self.lexer.current_kind() {
            TokenKind::Var | TokenKind::Let | TokenKind::Const => {
                self.parse_variable_declaration_clause()?
            }
            _ => self.parse_expression()?,
        };

        match self.lexer.current_kind() {
            TokenKind::In => {
                self.reject_for_await(is_await)?;
                self.check_for_in_of_target(&head)?;
                self.lexer.advance();
                let right = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                let body = self.parse_statement()?;
                Ok(Node::ForInStatement(ForInStatement {
                    left: Box::new(head),
                    right: Box::new(right),
                    body: Box::new(body),
                }))
            }
            TokenKind::Of => {
                self.check_for_in_of_target(&head)?;
                self.lexer.advance();
                let right = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                let body = self.parse_statement()?;
                Ok(Node::ForOfStatement(ForOfStatement {
                    left: Box::new(head),
                    right: Box::new(right),
                    body: Box::new(body),
                    r#await: is_await,
                }))
            }
            _ => {
                self.reject_for_await(is_await)?;
                self.expect(TokenKind::Semicolon)?;
                self.parse_regular_for(Some(head))
            }
        }
    }

    /// Parse the tail of a C-style for loop; the first `;` is already
    /// consumed.
    fn parse_regular_for(&mut self, init: Option<Node>) -> Result<Node, JsError> {
        let test = if self.check(TokenKind::Semicolon) {
            None
        } else {
            Some(Box::new(self.parse_expression()?))
        };
        self.expect(TokenKind::Semicolon)?;
        let update = if self.check(TokenKind::RParen) {
            None
        } else {
            Some(Box::new(self.parse_expression()?))
        };
        self.expect(TokenKind::RParen)?;
        let body = self.parse_statement()?;
        Ok(Node::ForStatement(ForStatement {
            init: init.map(Box::new),
            test,
            update,
            body: Box::new(body),
        }))
    }

    fn reject_for_await(&self, is_await: bool) -> Result<(), JsError> {
        if is_await {
            return Err(syntax_error(
                "'for await' is only valid with for-of",
                Some(self.lexer.token_position()),
            ));
        }
        Ok(())
    }

    /// A for-in/for-of target that is a declaration must declare exactly one
    /// binding.
    fn check_for_in_of_target(&self, left: &Node) -> Result<(), JsError> {
        if let Node::VariableDeclaration(declaration) = left {
            if declaration.declarations.len() != 1 {
                return Err(syntax_error(
                    "for-in/for-of head must declare exactly one binding",
                    Some(self.lexer.token_position()),
                ));
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Try statements
    // ------------------------------------------------------------------

    fn parse_try_statement(&mut self) -> Result<Node, JsError> {
        self.lexer.advance();
        let block = self.parse_block_statement()?;
        let handler = if self.check(TokenKind::Catch) {
            Some(Box::new(self.parse_catch_clause()?))
        } else {
            None
        };
        let finalizer = if self.eat(TokenKind::Finally) {
            Some(Box::new(self.parse_block_statement()?))
        } else {
            None
        };
        Ok(Node::TryStatement(TryStatement {
            block: Box::new(block),
            handler,
            finalizer,
        }))
    }

    fn parse_catch_clause(&mut self) -> Result<Node, JsError> {
        self.lexer.advance();
        self.expect(TokenKind::LParen)?;
        let param = self.parse_identifier()?;
        self.expect(TokenKind::RParen)?;
        let body = self.parse_block_statement()?;
        Ok(Node::CatchClause(CatchClause {
            param: Box::new(param),
            body: Box::new(body),
        }))
    }

    // ------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------

    fn parse_expression(&mut self) -> Result<Node, JsError> {
        let left = self.parse_unary_expression()?;
        self.parse_binary_expression(left, UNDEFINED_PRECEDENCE)
    }

    /// Precedence climbing over the operator table.
    ///
    /// Folds operators while their precedence is strictly greater than
    /// `min_precedence`; equal precedence returns to the caller, which makes
    /// same-precedence chains left-associative.
    fn parse_binary_expression(
        &mut self,
        mut left: Node,
        min_precedence: i32,
    ) -> Result<Node, JsError> {
        loop {
            let Some(operator) = binary_op_from_token(self.lexer.current_kind()) else {
                return Ok(left);
            };
            let precedence = self.binary_op_precedence(operator);
            if precedence <= min_precedence {
                return Ok(left);
            }
            self.lexer.advance();
            let next_left = self.parse_unary_expression()?;
            let right = self.parse_binary_expression(next_left, precedence)?;
            left = Node::BinaryExpression(BinaryExpression {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            });
        }
    }

    fn binary_op_precedence(&self, operator: BinaryOperator) -> i32 {
        self.binary_op_precedences
            .get(&operator)
            .copied()
            .unwrap_or(UNDEFINED_PRECEDENCE)
    }

    fn parse_unary_expression(&mut self) -> Result<Node, JsError> {
        match self.lexer.current_kind() {
            TokenKind::LParen => {
                self.lexer.advance();
                let expression = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(Node::ParenthesizedExpression(ParenthesizedExpression {
                    expression: Box::new(expression),
                }))
            }
            TokenKind::Identifier => self.parse_identifier_or_call_expression(),
            TokenKind::Numeric => self.parse_numeric_literal(),
            TokenKind::String => self.parse_string_literal(),
            TokenKind::Boolean => self.parse_boolean_literal(),
            TokenKind::Null => {
                self.lexer.advance();
                Ok(Node::NullLiteral(NullLiteral {}))
            }
            TokenKind::Function | TokenKind::Async => self.parse_function_expression(),
            kind => {
                if let Some(operator) = unary_op_from_token(kind) {
                    self.lexer.advance();
                    let argument = self.parse_unary_expression()?;
                    Ok(Node::UnaryExpression(UnaryExpression {
                        operator,
                        argument: Box::new(argument),
                    }))
                } else {
                    Err(self.unexpected("expression"))
                }
            }
        }
    }

    fn parse_identifier(&mut self) -> Result<Node, JsError> {
        if !self.check(TokenKind::Identifier) {
            return Err(self.unexpected("identifier"));
        }
        let name = self.lexer.current_value().to_string();
        self.lexer.advance();
        Ok(Node::identifier(name))
    }

    fn parse_identifier_or_call_expression(&mut self) -> Result<Node, JsError> {
        let identifier = self.parse_identifier()?;
        if self.check(TokenKind::LParen) {
            self.parse_call_expression(identifier)
        } else {
            Ok(identifier)
        }
    }

    fn parse_call_expression(&mut self, callee: Node) -> Result<Node, JsError> {
        let arguments = self.parse_call_arguments()?;
        Ok(Node::CallExpression(CallExpression {
            callee: Box::new(callee),
            arguments,
        }))
    }

    fn parse_call_arguments(&mut self) -> Result<Vec<Node>, JsError> {
        self.expect(TokenKind::LParen)?;
        let mut arguments = Vec::new();
        while !self.check(TokenKind::RParen) {
            arguments.push(self.parse_expression()?);
            if !self.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(arguments)
    }

    fn parse_numeric_literal(&mut self) -> Result<Node, JsError> {
        let value = self.lexer.current_value().parse::<f64>().map_err(|_| {
            syntax_error(
                format!("Invalid numeric literal: {}", self.lexer.current_value()),
                Some(self.lexer.token_position()),
            )
        })?;
        self.lexer.advance();
        Ok(Node::NumericLiteral(NumericLiteral { value }))
    }

    fn parse_string_literal(&mut self) -> Result<Node, JsError> {
        if !self.check(TokenKind::String) {
            return Err(self.unexpected("string literal"));
        }
        let value = self.lexer.current_value().to_string();
        self.lexer.advance();
        Ok(Node::StringLiteral(StringLiteral { value }))
    }

    fn parse_boolean_literal(&mut self) -> Result<Node, JsError> {
        let value = self.lexer.current_value() == "true";
        self.lexer.advance();
        Ok(Node::BooleanLiteral(BooleanLiteral { value }))
    }

    // ------------------------------------------------------------------
    // Imports
    // ------------------------------------------------------------------

    fn parse_import_declaration(&mut self) -> Result<Node, JsError> {
        self.lexer.advance();
        let mut specifiers = Vec::new();
        while !self.check(TokenKind::From) {
            match self.lexer.current_kind() {
                TokenKind::Star => specifiers.push(self.parse_import_namespace_specifier()?),
                TokenKind::Identifier => specifiers.push(self.parse_import_default_specifier()?),
                TokenKind::LBrace => {
                    self.lexer.advance();
                    while !self.check(TokenKind::RBrace) {
                        specifiers.push(self.parse_import_specifier()?);
                        if !self.eat(TokenKind::Comma) {
                            break;
                        }
                    }
                    self.expect(TokenKind::RBrace)?;
                }
                _ => return Err(self.unexpected("import specifier or 'from'")),
            }
            if !self.check(TokenKind::From) {
                self.expect(TokenKind::Comma)?;
            }
        }
        self.lexer.advance();
        let source = self.parse_string_literal()?;
        self.skip_semicolon();
        Ok(Node::ImportDeclaration(ImportDeclaration {
            import_kind: ImportKind::Value,
            specifiers,
            source: Box::new(source),
        }))
    }

    fn parse_import_specifier(&mut self) -> Result<Node, JsError> {
        let imported = self.parse_identifier()?;
        let local = if self.eat(TokenKind::As) {
            self.parse_identifier()?
        } else {
            imported.clone()
        };
        Ok(Node::ImportSpecifier(ImportSpecifier {
            imported: Box::new(imported),
            local: Box::new(local),
        }))
    }

    fn parse_import_default_specifier(&mut self) -> Result<Node, JsError> {
        let local = self.parse_identifier()?;
        Ok(Node::ImportDefaultSpecifier(ImportDefaultSpecifier {
            local: Box::new(local),
        }))
    }

    fn parse_import_namespace_specifier(&mut self) -> Result<Node, JsError> {
        self.lexer.advance();
        self.expect(TokenKind::As)?;
        let local = self.parse_identifier()?;
        Ok(Node::ImportNamespaceSpecifier(ImportNamespaceSpecifier {
            local: Box::new(local),
        }))
    }

    // ------------------------------------------------------------------
    // Exports
    // ------------------------------------------------------------------

    fn parse_export_declaration(&mut self) -> Result<Node, JsError> {
        self.lexer.advance();
        if self.check(TokenKind::Default) {
            return self.parse_export_default_declaration();
        }
        self.parse_export_named_or_all_declaration()
    }

    fn parse_export_default_declaration(&mut self) -> Result<Node, JsError> {
        self.lexer.advance();
        let declaration = match self.lexer.current_kind() {
            TokenKind::Function | TokenKind::Async => self.parse_function_declaration()?,
            _ => self.parse_expression()?,
        };
        self.skip_semicolon();
        Ok(Node::ExportDefaultDeclaration(ExportDefaultDeclaration {
            declaration: Box::new(declaration),
        }))
    }

    fn parse_export_named_or_all_declaration(&mut self) -> Result<Node, JsError> {
        let mut specifiers = Vec::new();
        let mut declaration = None;
        match self.lexer.current_kind() {
            TokenKind::LBrace => {
                self.lexer.advance();
                while !self.check(TokenKind::RBrace) {
                    specifiers.push(self.parse_export_specifier()?);
                    if !self.eat(TokenKind::Comma) {
                        break;
                    }
                }
                self.expect(TokenKind::RBrace)?;
            }
            TokenKind::Star => {
                self.lexer.advance();
                if self.check(TokenKind::As) {
                    specifiers.push(self.parse_export_namespace_specifier()?);
                } else {
                    self.expect(TokenKind::From)?;
                    let source = self.parse_string_literal()?;
                    self.skip_semicolon();
                    return Ok(Node::ExportAllDeclaration(ExportAllDeclaration {
                        source: Box::new(source),
                    }));
                }
            }
            _ => declaration = Some(Box::new(self.parse_declaration()?)),
        }
        let source = if self.eat(TokenKind::From) {
            Some(Box::new(self.parse_string_literal()?))
        } else {
            None
        };
        self.skip_semicolon();
        Ok(Node::ExportNamedDeclaration(ExportNamedDeclaration {
            declaration,
            specifiers,
            source,
        }))
    }

    fn parse_export_specifier(&mut self) -> Result<Node, JsError> {
        let local = self.parse_identifier()?;
        let exported = if self.eat(TokenKind::As) {
            self.parse_identifier()?
        } else {
            local.clone()
        };
        Ok(Node::ExportSpecifier(ExportSpecifier {
            exported: Box::new(exported),
            local: Box::new(local),
        }))
    }

    fn parse_export_namespace_specifier(&mut self) -> Result<Node, JsError> {
        self.lexer.advance();
        let local = self.parse_identifier()?;
        Ok(Node::ExportNamespaceSpecifier(ExportNamespaceSpecifier {
            local: Box::new(local),
        }))
    }

    // ------------------------------------------------------------------
    // Token helpers
    // ------------------------------------------------------------------

    fn check(&self, kind: TokenKind) -> bool {
        self.lexer.current_kind() == kind
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.lexer.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), JsError> {
        if self.check(kind) {
            self.lexer.advance();
            Ok(())
        } else {
            Err(self.unexpected(&format!("{:?}", kind)))
        }
    }

    /// Consume one trailing semicolon if present.
    fn skip_semicolon(&mut self) {
        if self.check(TokenKind::Semicolon) {
            self.lexer.advance();
        }
    }

    fn unexpected(&self, expected: &str) -> JsError {
        unexpected_token(
            expected,
            &format!("{:?}", self.lexer.current_kind()),
            Some(self.lexer.token_position()),
        )
    }
}
