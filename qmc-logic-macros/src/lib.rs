//! Procedural macros for the qmc-logic crate.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, Ident, Token};

/// Binary connectives, ordered by binding power
#[derive(Clone, Copy)]
enum Op {
    Or,
    Xor,
    And,
}

impl Op {
    /// How tightly the operator binds; higher wins
    fn binding_power(self) -> u8 {
        match self {
            Op::Or => 1,
            Op::Xor => 2,
            Op::And => 3,
        }
    }

    /// The `BoolExpr` builder method the operator lowers to
    fn builder(self) -> TokenStream2 {
        match self {
            Op::Or => quote!(or),
            Op::Xor => quote!(xor),
            Op::And => quote!(and),
        }
    }
}

/// Parsed form of one `expr!` invocation
enum Node {
    /// A `BoolExpr` binding in the caller's scope
    Var(Ident),
    /// A string literal, turned into `BoolExpr::variable(..)`
    Name(syn::LitStr),
    /// `0`, `1`, `true` or `false`
    Const(bool),
    Not(Box<Node>),
    Bin(Op, Box<Node>, Box<Node>),
}

impl Parse for Node {
    fn parse(input: ParseStream) -> Result<Self> {
        parse_with_power(input, 0)
    }
}

/// Precedence-climbing loop: fold in operators while they bind at least as
/// tightly as `min_power`. Right operands climb with `power + 1`, so chains
/// of one operator associate left.
fn parse_with_power(input: ParseStream, min_power: u8) -> Result<Node> {
    let mut node = parse_prefix(input)?;

    while let Some(op) = peek_op(input) {
        let power = op.binding_power();
        if power < min_power {
            break;
        }
        skip_op(input, op)?;
        let rhs = parse_with_power(input, power + 1)?;
        node = Node::Bin(op, Box::new(node), Box::new(rhs));
    }

    Ok(node)
}

/// `!` and `~` bind tighter than every binary operator and stack freely
fn parse_prefix(input: ParseStream) -> Result<Node> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
    } else if input.peek(Token![~]) {
        input.parse::<Token![~]>()?;
    } else {
        return parse_operand(input);
    }
    Ok(Node::Not(Box::new(parse_prefix(input)?)))
}

fn parse_operand(input: ParseStream) -> Result<Node> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        return parse_with_power(&content, 0);
    }
    if input.peek(syn::LitStr) {
        return Ok(Node::Name(input.parse()?));
    }
    if input.peek(syn::LitBool) {
        let lit: syn::LitBool = input.parse()?;
        return Ok(Node::Const(lit.value));
    }
    if input.peek(syn::LitInt) {
        let lit: syn::LitInt = input.parse()?;
        return match lit.base10_parse::<u8>()? {
            0 => Ok(Node::Const(false)),
            1 => Ok(Node::Const(true)),
            _ => Err(syn::Error::new(
                lit.span(),
                "boolean constants are 0 and 1",
            )),
        };
    }
    Ok(Node::Var(input.parse()?))
}

fn peek_op(input: ParseStream) -> Option<Op> {
    if input.peek(Token![+]) || input.peek(Token![|]) {
        Some(Op::Or)
    } else if input.peek(Token![^]) {
        Some(Op::Xor)
    } else if input.peek(Token![*]) || input.peek(Token![&]) {
        Some(Op::And)
    } else {
        None
    }
}

fn skip_op(input: ParseStream, op: Op) -> Result<()> {
    match op {
        Op::Or if input.peek(Token![+]) => input.parse::<Token![+]>().map(drop),
        Op::Or => input.parse::<Token![|]>().map(drop),
        Op::Xor => input.parse::<Token![^]>().map(drop),
        Op::And if input.peek(Token![*]) => input.parse::<Token![*]>().map(drop),
        Op::And => input.parse::<Token![&]>().map(drop),
    }
}

/// Lower a node to a chain of `BoolExpr` builder calls.
///
/// Every builder method takes `&self`, so a caller binding named in the
/// macro is auto-referenced and stays usable afterwards; the macro never
/// moves or clones anything itself.
fn lower(node: &Node) -> TokenStream2 {
    match node {
        Node::Var(ident) => quote!(#ident),
        Node::Name(lit) => quote!(BoolExpr::variable(#lit)),
        Node::Const(value) => quote!(BoolExpr::constant(#value)),
        Node::Not(inner) => {
            let inner = lower(inner);
            quote!((#inner).not())
        }
        Node::Bin(op, lhs, rhs) => {
            let method = op.builder();
            let lhs = lower(lhs);
            let rhs = lower(rhs);
            quote!((#lhs).#method(&(#rhs)))
        }
    }
}

/// Build a `BoolExpr` from infix notation.
///
/// Operands are existing `BoolExpr` bindings, string literals (which become
/// variables of that name), or the constants `0`/`1`/`true`/`false`.
/// Operators are `!`/`~`, `*`/`&`, `^` and `+`/`|`, with parentheses for
/// grouping. Binding order, loosest first: OR, XOR, AND, NOT - the same
/// precedence the string parser uses.
///
/// `BoolExpr` must be in scope at the call site.
///
/// # Examples
///
/// ```ignore
/// use qmc_logic::{expr, BoolExpr};
///
/// // String literals declare variables inline.
/// let xor = expr!("a" ^ "b");
/// let gated = expr!(("a" + "b") * "enable");
///
/// // Bindings from the caller's scope compose without cloning.
/// let a = BoolExpr::variable("a");
/// let b = BoolExpr::variable("b");
/// let carry = expr!(a * b);
/// let sum = expr!(a ^ b);
/// let masked = expr!(carry + sum * 0);
/// ```
#[proc_macro]
pub fn expr(input: TokenStream) -> TokenStream {
    let node = parse_macro_input!(input as Node);
    lower(&node).into()
}
