//! Contract tests for the parser API
//!
//! These tests verify the parser component implements its public contract
//! correctly.

use core_types::JsError;
use parser::ast::{BinaryOperator, Identifier, Node, NodeType, SourceType};
use parser::visitor::Visitor;
use parser::{Lexer, Parser, TokenKind};

// =============================================================================
// Lexer Contract Tests
// =============================================================================

#[test]
fn test_lexer_new_creates_lexer() {
    let source = "let x = 42;";
    let _lexer = Lexer::new(source);
    // Should compile and create lexer
}

#[test]
fn test_lexer_advance_returns_kind() {
    let mut lexer = Lexer::new("let x = 42;");
    assert_eq!(lexer.advance(), TokenKind::Let);
    assert_eq!(lexer.advance(), TokenKind::Identifier);
    assert_eq!(lexer.advance(), TokenKind::Assign);
    assert_eq!(lexer.advance(), TokenKind::Numeric);
    assert_eq!(lexer.advance(), TokenKind::Semicolon);
    assert_eq!(lexer.advance(), TokenKind::Eof);
}

#[test]
fn test_lexer_observers_track_last_token() {
    let mut lexer = Lexer::new("myVar 42.5 \"hi\"");
    lexer.advance();
    assert_eq!(lexer.current_kind(), TokenKind::Identifier);
    assert_eq!(lexer.current_value(), "myVar");
    lexer.advance();
    assert_eq!(lexer.current_kind(), TokenKind::Numeric);
    assert_eq!(lexer.current_value(), "42.5");
    lexer.advance();
    assert_eq!(lexer.current_kind(), TokenKind::String);
    assert_eq!(lexer.current_value(), "hi");
}

#[test]
fn test_lexer_eof_latches_after_end() {
    let mut lexer = Lexer::new("");
    assert_eq!(lexer.advance(), TokenKind::Eof);
    assert_eq!(lexer.advance(), TokenKind::Eof);
    assert_eq!(lexer.current_kind(), TokenKind::Eof);
}

#[test]
fn test_keywords_never_tokenize_as_identifiers() {
    let keywords = [
        ("const", TokenKind::Const),
        ("let", TokenKind::Let),
        ("var", TokenKind::Var),
        ("function", TokenKind::Function),
        ("return", TokenKind::Return),
        ("break", TokenKind::Break),
        ("continue", TokenKind::Continue),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("switch", TokenKind::Switch),
        ("case", TokenKind::Case),
        ("default", TokenKind::Default),
        ("for", TokenKind::For),
        ("in", TokenKind::In),
        ("of", TokenKind::Of),
        ("while", TokenKind::While),
        ("do", TokenKind::Do),
        ("throw", TokenKind::Throw),
        ("try", TokenKind::Try),
        ("catch", TokenKind::Catch),
        ("finally", TokenKind::Finally),
        ("async", TokenKind::Async),
        ("await", TokenKind::Await),
        ("typeof", TokenKind::Typeof),
        ("void", TokenKind::Void),
        ("delete", TokenKind::Delete),
        ("debugger", TokenKind::Debugger),
        ("import", TokenKind::Import),
        ("export", TokenKind::Export),
        ("from", TokenKind::From),
        ("as", TokenKind::As),
        ("true", TokenKind::Boolean),
        ("false", TokenKind::Boolean),
        ("null", TokenKind::Null),
    ];
    for (spelling, kind) in keywords {
        let mut lexer = Lexer::new(spelling);
        assert_eq!(lexer.advance(), kind, "keyword {:?}", spelling);
        assert_ne!(lexer.current_kind(), TokenKind::Identifier);
    }
}

// =============================================================================
// Parser Contract Tests
// =============================================================================

#[test]
fn test_parser_new_creates_parser() {
    let source = "let x = 42;";
    let _parser = Parser::new(source);
    // Should compile and create parser
}

#[test]
fn test_parser_parse_returns_node_result() {
    let source = "let x = 42;";
    let mut parser = Parser::new(source);
    let result: Result<Node, JsError> = parser.parse();
    assert!(result.is_ok());
}

#[test]
fn test_parse_root_is_always_program() {
    for source in ["", "a;", "function f() {}", "import a from \"m\";"] {
        let mut parser = Parser::new(source);
        let root = parser.parse().unwrap();
        assert_eq!(root.node_type(), NodeType::Program, "source {:?}", source);
    }
}

#[test]
fn test_parse_program_source_type_is_module() {
    let root = Parser::new("a;").parse().unwrap();
    match root {
        Node::Program(program) => assert_eq!(program.source_type, SourceType::Module),
        _ => panic!("root must be Program"),
    }
}

#[test]
fn test_parse_failure_returns_error_not_partial_tree() {
    let mut parser = Parser::new("a; const = 1;");
    let result = parser.parse();
    assert!(result.is_err());
}

#[test]
fn test_install_precedences_is_configuration_surface() {
    use std::collections::BTreeMap;
    let mut parser = Parser::new("a % b");
    // `%` is not in the default table; give it a precedence.
    let mut precedences: BTreeMap<BinaryOperator, i32> = BTreeMap::new();
    precedences.insert(BinaryOperator::Mod, 20);
    parser.install_binary_op_precedences(precedences);
    assert!(parser.parse().is_ok());
}

// =============================================================================
// AST Contract Tests
// =============================================================================

#[test]
fn test_node_type_matches_variant_for_parsed_tree() {
    let root = Parser::new("if (a) b;").parse().unwrap();
    let Node::Program(program) = root else {
        panic!("root must be Program");
    };
    assert_eq!(program.body[0].node_type(), NodeType::IfStatement);
}

#[test]
fn test_gen_js_returns_string() {
    let root = Parser::new("const a = 1;").parse().unwrap();
    let rendered: String = root.gen_js();
    assert_eq!(rendered, "const a = 1");
}

#[test]
fn test_binary_operator_total_order_is_lexicographic() {
    let mut operators = vec![
        BinaryOperator::Mul,
        BinaryOperator::EqEq,
        BinaryOperator::Add,
        BinaryOperator::Lt,
    ];
    operators.sort();
    let spellings: Vec<&str> = operators.iter().map(|op| op.as_str()).collect();
    let mut sorted = spellings.clone();
    sorted.sort();
    assert_eq!(spellings, sorted);
}

// =============================================================================
// Visitor Contract Tests
// =============================================================================

struct NodeCounter {
    count: usize,
}

impl Visitor for NodeCounter {
    fn visit_identifier(&mut self, node: &Identifier) {
        self.count += 1;
        parser::visitor::walk_identifier(self, node);
    }
}

#[test]
fn test_accept_dispatches_to_visitor() {
    let root = Parser::new("a; b;").parse().unwrap();
    let mut counter = NodeCounter { count: 0 };
    root.accept(&mut counter);
    assert_eq!(counter.count, 2);
}

// =============================================================================
// Host Projection Tests
// =============================================================================

#[test]
fn test_serde_projection_matches_estree_shape() {
    let root = Parser::new("const a = 1;").parse().unwrap();
    let json = serde_json::to_value(&root).unwrap();

    assert_eq!(json["type"], "Program");
    assert_eq!(json["sourceType"], "module");
    let declaration = &json["body"][0];
    assert_eq!(declaration["type"], "VariableDeclaration");
    assert_eq!(declaration["kind"], "const");
    let declarator = &declaration["declarations"][0];
    assert_eq!(declarator["type"], "VariableDeclarator");
    assert_eq!(declarator["id"]["type"], "Identifier");
    assert_eq!(declarator["id"]["name"], "a");
    assert_eq!(declarator["init"]["type"], "NumericLiteral");
}

#[test]
fn test_serde_projection_import_kind() {
    let root = Parser::new("import a from \"m\";").parse().unwrap();
    let json = serde_json::to_value(&root).unwrap();
    let import = &json["body"][0];
    assert_eq!(import["type"], "ImportDeclaration");
    assert_eq!(import["importKind"], "value");
    assert_eq!(import["specifiers"][0]["type"], "ImportDefaultSpecifier");
    assert_eq!(import["source"]["value"], "m");
}

#[test]
fn test_serde_projection_optional_children_are_null() {
    let root = Parser::new("if (a) b;").parse().unwrap();
    let json = serde_json::to_value(&root).unwrap();
    let if_statement = &json["body"][0];
    assert_eq!(if_statement["type"], "IfStatement");
    assert!(if_statement["alternate"].is_null());
}

#[test]
fn test_serde_round_trip_preserves_tree() {
    let root = Parser::new("function f(a) { return a + 1; }")
        .parse()
        .unwrap();
    let json = serde_json::to_string(&root).unwrap();
    let back: Node = serde_json::from_str(&json).unwrap();
    assert_eq!(back, root);
}
