use super::ast::{Ast, Node};

/// Serializes an AST into text.
///
/// Walks the tree depth first, emitting `label(` before a node's children
/// and `)` after them; a leaf emits only its label. Flat output joins the
/// emissions with single spaces, pretty output puts each on its own line
/// indented by two spaces per depth level.
///
/// `1 + 2 * 3` displays flat as `Add( 1 Multiply( 2 3 ) )`.
#[derive(Default)]
pub struct AstDisplayer {
    lines: Vec<(usize, String)>,
}

impl AstDisplayer {
    pub fn new() -> Self {
        AstDisplayer::default()
    }

    pub fn build_string(&mut self, ast: &Ast, pretty_print: bool) -> String {
        self.lines.clear();
        self.build(0, ast.as_node());

        if pretty_print {
            self.lines
                .iter()
                .map(|(level, text)| format!("{}{}", "  ".repeat(*level), text))
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            self.lines
                .iter()
                .map(|(_, text)| text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        }
    }

    fn build(&mut self, level: usize, node: Node<'_>) {
        let (label, children) = node.get_display_info();

        match children {
            None => self.add(level, label),
            Some(children) => {
                self.add(level, format!("{}(", label));
                for child in children {
                    self.build(level + 1, child);
                }
                self.add(level, String::from(")"));
            }
        }
    }

    fn add(&mut self, level: usize, text: String) {
        self.lines.push((level, text));
    }
}

/// Displays an AST in flat or indented form.
pub fn display(ast: &Ast, pretty_print: bool) -> String {
    AstDisplayer::new().build_string(ast, pretty_print)
}
