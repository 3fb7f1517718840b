//! Display, Debug and configurable formatting for boolean expressions

use super::{BoolExpr, BoolExprInner};
use std::fmt;

/// Operator rendering style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OperatorStyle {
    /// `!`, `&`, `|`, `^`
    #[default]
    Symbolic,
    /// `NOT`, `AND`, `OR`, `XOR`
    Word,
}

/// Parenthesization style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParenStyle {
    /// Parenthesize only where precedence requires it
    #[default]
    Minimal,
    /// Parenthesize every binary node
    Full,
}

/// Options for rendering an expression as an infix string
///
/// # Examples
///
/// ```
/// use qmc_logic::{BoolExpr, FormatOptions, OperatorStyle, ParenStyle};
///
/// let expr = BoolExpr::parse("!a & (b | c)")?;
///
/// let words = FormatOptions {
///     operators: OperatorStyle::Word,
///     parentheses: ParenStyle::Minimal,
/// };
/// assert_eq!(expr.format(&words), "NOT a AND (b OR c)");
///
/// let full = FormatOptions {
///     operators: OperatorStyle::Symbolic,
///     parentheses: ParenStyle::Full,
/// };
/// assert_eq!(expr.format(&full), "(!a & (b | c))");
/// # Ok::<(), qmc_logic::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub operators: OperatorStyle,
    pub parentheses: ParenStyle,
}

/// Binding strength of the surrounding context, loosest to tightest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Level {
    None,
    Or,
    Xor,
    And,
}

impl BoolExpr {
    /// Render this expression with the given formatting options
    ///
    /// The default options (symbolic operators, minimal parentheses) are what
    /// `Display` produces.
    pub fn format(&self, options: &FormatOptions) -> String {
        let mut out = String::new();
        self.write_with_level(&mut out, options, Level::None);
        out
    }

    fn write_with_level(&self, out: &mut String, options: &FormatOptions, level: Level) {
        match self.inner() {
            BoolExprInner::Variable(name) => out.push_str(name),
            BoolExprInner::Constant(val) => out.push_str(if *val { "1" } else { "0" }),

            BoolExprInner::And(left, right) => {
                let op = match options.operators {
                    OperatorStyle::Symbolic => "&",
                    OperatorStyle::Word => "AND",
                };
                write_binary(out, options, level, Level::And, op, left, right);
            }
            BoolExprInner::Or(left, right) => {
                let op = match options.operators {
                    OperatorStyle::Symbolic => "|",
                    OperatorStyle::Word => "OR",
                };
                write_binary(out, options, level, Level::Or, op, left, right);
            }
            BoolExprInner::Xor(left, right) => {
                let op = match options.operators {
                    OperatorStyle::Symbolic => "^",
                    OperatorStyle::Word => "XOR",
                };
                write_binary(out, options, level, Level::Xor, op, left, right);
            }

            BoolExprInner::Not(inner) => {
                match options.operators {
                    OperatorStyle::Symbolic => out.push('!'),
                    OperatorStyle::Word => out.push_str("NOT "),
                }
                // NOT binds tightest: compound operands get parenthesized,
                // variables, constants and nested NOTs do not. With full
                // parenthesization the binary child brings its own parens.
                match (inner.inner(), options.parentheses) {
                    (
                        BoolExprInner::Variable(_)
                        | BoolExprInner::Constant(_)
                        | BoolExprInner::Not(_),
                        _,
                    )
                    | (_, ParenStyle::Full) => {
                        inner.write_with_level(out, options, Level::None);
                    }
                    _ => {
                        out.push('(');
                        inner.write_with_level(out, options, Level::None);
                        out.push(')');
                    }
                }
            }
        }
    }
}

fn write_binary(
    out: &mut String,
    options: &FormatOptions,
    level: Level,
    own: Level,
    op: &str,
    left: &BoolExpr,
    right: &BoolExpr,
) {
    let needs_parens = match options.parentheses {
        ParenStyle::Full => true,
        // A binary node needs parens when the context binds tighter than it
        // does; equal levels chain without them.
        ParenStyle::Minimal => level > own,
    };

    if needs_parens {
        out.push('(');
    }
    left.write_with_level(out, options, own);
    out.push(' ');
    out.push_str(op);
    out.push(' ');
    right.write_with_level(out, options, own);
    if needs_parens {
        out.push(')');
    }
}

/// Display formatting for boolean expressions
///
/// Renders with symbolic operators and minimal parentheses based on operator
/// precedence (`or < xor < and < not`).
///
/// # Examples
///
/// ```
/// use qmc_logic::BoolExpr;
///
/// let a = BoolExpr::variable("a");
/// let b = BoolExpr::variable("b");
/// let c = BoolExpr::variable("c");
/// let expr = a.and(&b).or(&c);
///
/// assert_eq!(expr.to_string(), "a & b | c");
/// ```
impl fmt::Display for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(&FormatOptions::default()))
    }
}

/// Debug formatting delegates to `Display`; the infix rendering is already
/// unambiguous.
impl fmt::Debug for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
