//! JavaScript re-emission from the AST.
//!
//! [`Node::gen_js`] renders a node and its subtree back to JavaScript text.
//! Output is deterministic: the same tree always renders the same string.
//! Formatting is minimal - statements inside a block are tab-indented one
//! level, everything else is a single line.

use crate::ast::*;

/// Render a slice of nodes, joining with `delim` and prefixing each entry.
fn gen_js_list(nodes: &[Node], delim: &str, prefix: &str) -> String {
    let rendered: Vec<String> = nodes
        .iter()
        .map(|node| format!("{}{}", prefix, node.gen_js()))
        .collect();
    rendered.join(delim)
}

fn gen_js_opt(node: &Option<Box<Node>>) -> String {
    node.as_ref().map(|n| n.gen_js()).unwrap_or_default()
}

impl Node {
    /// Produce a textual JavaScript rendering of this node.
    pub fn gen_js(&self) -> String {
        match self {
            Node::Identifier(n) => n.name.clone(),
            Node::NullLiteral(_) => "null".to_string(),
            Node::StringLiteral(n) => format!("\"{}\"", n.value),
            Node::NumericLiteral(n) => format!("{}", n.value),
            Node::BooleanLiteral(n) => {
                if n.value {
                    "true".to_string()
                } else {
                    "false".to_string()
                }
            }
            Node::UnaryExpression(n) => n.gen_js(),
            Node::BinaryExpression(n) => n.gen_js(),
            Node::ExpressionStatement(n) => n.expression.gen_js(),
            Node::BlockStatement(n) => n.gen_js(),
            Node::EmptyStatement(_) => String::new(),
            Node::DebuggerStatement(_) => "debugger".to_string(),
            Node::ReturnStatement(n) => n.gen_js(),
            Node::ContinueStatement(_) => "continue".to_string(),
            Node::BreakStatement(_) => "break".to_string(),
            Node::IfStatement(n) => n.gen_js(),
            Node::SwitchStatement(n) => n.gen_js(),
            Node::SwitchCase(n) => n.gen_js(),
            Node::WhileStatement(n) => n.gen_js(),
            Node::DoWhileStatement(n) => n.gen_js(),
            Node::ForStatement(n) => n.gen_js(),
            Node::VariableDeclaration(n) => n.gen_js(),
            Node::VariableDeclarator(n) => n.gen_js(),
            Node::ForInStatement(n) => n.gen_js(),
            Node::ForOfStatement(n) => n.gen_js(),
            Node::ThrowStatement(n) => format!("throw {}", n.argument.gen_js()),
            Node::TryStatement(n) => n.gen_js(),
            Node::CatchClause(n) => {
                format!("catch ({}) {}", n.param.gen_js(), n.body.gen_js())
            }
            Node::FunctionDeclaration(n) => n.gen_js(),
            Node::FunctionExpression(n) => n.gen_js(),
            Node::Program(n) => gen_js_list(&n.body, "\n", ""),
            Node::ImportDeclaration(n) => n.gen_js(),
            Node::ImportSpecifier(n) => n.gen_js(),
            Node::ImportDefaultSpecifier(n) => n.local.gen_js(),
            Node::ImportNamespaceSpecifier(n) => format!("* as {}", n.local.gen_js()),
            Node::ExportSpecifier(n) => n.gen_js(),
            Node::ExportNamespaceSpecifier(n) => format!("* as {}", n.local.gen_js()),
            Node::ExportDefaultSpecifier(n) => format!("default {}", n.local.gen_js()),
            Node::ExportNamedDeclaration(n) => n.gen_js(),
            Node::ExportDefaultDeclaration(n) => {
                format!("export default {}", n.declaration.gen_js())
            }
            Node::ExportAllDeclaration(n) => {
                format!("export * from {}", n.source.gen_js())
            }
            Node::CallExpression(n) => n.gen_js(),
            Node::ParenthesizedExpression(n) => format!("({})", n.expression.gen_js()),
        }
    }
}

impl UnaryExpression {
    fn gen_js(&self) -> String {
        format!("{} {}", self.operator.as_str(), self.argument.gen_js())
    }
}

impl BinaryExpression {
    fn gen_js(&self) -> String {
        format!(
            "{} {} {}",
            self.left.gen_js(),
            self.operator.as_str(),
            self.right.gen_js()
        )
    }
}

impl CallExpression {
    fn gen_js(&self) -> String {
        format!(
            "{}({})",
            self.callee.gen_js(),
            gen_js_list(&self.arguments, ", ", "")
        )
    }
}

impl BlockStatement {
    fn gen_js(&self) -> String {
        format!("{{\n{}\n}}", gen_js_list(&self.body, "\n", "\t"))
    }
}

impl ReturnStatement {
    fn gen_js(&self) -> String {
        match &self.argument {
            Some(argument) => format!("return {}", argument.gen_js()),
            None => "return".to_string(),
        }
    }
}

impl IfStatement {
    fn gen_js(&self) -> String {
        let head = format!("if ({}) {}", self.test.gen_js(), self.consequent.gen_js());
        match &self.alternate {
            Some(alternate) => format!("{} else {}", head, alternate.gen_js()),
            None => head,
        }
    }
}

impl SwitchStatement {
    fn gen_js(&self) -> String {
        format!(
            "switch ({}) {{\n{}\n}}",
            self.discriminant.gen_js(),
            gen_js_list(&self.cases, "\n", "")
        )
    }
}

impl SwitchCase {
    fn gen_js(&self) -> String {
        let consequent = gen_js_list(&self.consequent, "\n", "\t");
        match &self.test {
            Some(test) => format!("case ({}): {{\n{}\n}}", test.gen_js(), consequent),
            None => format!("default: {{\n{}\n}}", consequent),
        }
    }
}

impl WhileStatement {
    fn gen_js(&self) -> String {
        format!("while ({}) {}", self.test.gen_js(), self.body.gen_js())
    }
}

impl DoWhileStatement {
    fn gen_js(&self) -> String {
        format!("do {} while ({})", self.body.gen_js(), self.test.gen_js())
    }
}

impl ForStatement {
    fn gen_js(&self) -> String {
        format!(
            "for ({};{};{}) {}",
            gen_js_opt(&self.init),
            gen_js_opt(&self.test),
            gen_js_opt(&self.update),
            self.body.gen_js()
        )
    }
}

impl ForInStatement {
    fn gen_js(&self) -> String {
        format!(
            "for ({} in {}) {}",
            self.left.gen_js(),
            self.right.gen_js(),
            self.body.gen_js()
        )
    }
}

impl ForOfStatement {
    fn gen_js(&self) -> String {
        let await_str = if self.r#await { "await " } else { "" };
        format!(
            "for {}({} of {}) {}",
            await_str,
            self.left.gen_js(),
            self.right.gen_js(),
            self.body.gen_js()
        )
    }
}

impl VariableDeclaration {
    fn gen_js(&self) -> String {
        format!(
            "{} {}",
            self.kind.as_str(),
            gen_js_list(&self.declarations, " ", "")
        )
    }
}

impl VariableDeclarator {
    fn gen_js(&self) -> String {
        match &self.init {
            Some(init) => format!("{} = {}", self.id.gen_js(), init.gen_js()),
            None => self.id.gen_js(),
        }
    }
}

impl TryStatement {
    fn gen_js(&self) -> String {
        let mut out = format!("try {}", self.block.gen_js());
        if let Some(handler) = &self.handler {
            out.push(' ');
            out.push_str(&handler.gen_js());
        }
        if let Some(finalizer) = &self.finalizer {
            out.push_str(" finally ");
            out.push_str(&finalizer.gen_js());
        }
        out
    }
}

impl FunctionDeclaration {
    fn gen_js(&self) -> String {
        format!(
            "{}function{} {}({}) {}",
            if self.r#async { "async " } else { "" },
            if self.generator { "*" } else { "" },
            self.id.gen_js(),
            gen_js_list(&self.params, ", ", ""),
            self.body.gen_js()
        )
    }
}

impl FunctionExpression {
    fn gen_js(&self) -> String {
        let async_str = if self.r#async { "async " } else { "" };
        let generator_str = if self.generator { "*" } else { "" };
        let params = gen_js_list(&self.params, ", ", "");
        match &self.id {
            Some(id) => format!(
                "{}function{} {}({}) {}",
                async_str,
                generator_str,
                id.gen_js(),
                params,
                self.body.gen_js()
            ),
            None => format!(
                "{}function{}({}) {}",
                async_str,
                generator_str,
                params,
                self.body.gen_js()
            ),
        }
    }
}

impl ImportDeclaration {
    fn gen_js(&self) -> String {
        format!(
            "import {} from {}",
            gen_js_list(&self.specifiers, ",", ""),
            self.source.gen_js()
        )
    }
}

impl ImportSpecifier {
    fn gen_js(&self) -> String {
        let imported = self.imported.gen_js();
        let local = self.local.gen_js();
        if imported == local {
            format!("{{ {} }}", local)
        } else {
            format!("{{ {} as {} }}", imported, local)
        }
    }
}

impl ExportSpecifier {
    fn gen_js(&self) -> String {
        let exported = self.exported.gen_js();
        let local = self.local.gen_js();
        if exported == local {
            local
        } else {
            format!("{} as {}", local, exported)
        }
    }
}

impl ExportNamedDeclaration {
    fn gen_js(&self) -> String {
        if let Some(declaration) = &self.declaration {
            return format!("export {}", declaration.gen_js());
        }
        let specifiers = gen_js_list(&self.specifiers, " ", "");
        match &self.source {
            Some(source) => format!("export {} from {}", specifiers, source.gen_js()),
            None => format!("export {}", specifiers),
        }
    }
}
