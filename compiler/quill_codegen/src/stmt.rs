//! C statement text.
//!
//! The translator decides what to emit; these helpers decide how it is
//! spelled. Statements are single lines with a trailing `;`.

use quill_ir::TokenKind;

use crate::CType;

/// Spell a literal value as C source. String contents are wrapped in double
/// quotes again; every other kind is emitted verbatim.
pub fn render_value(kind: TokenKind, value: &str) -> String {
    if kind == TokenKind::String {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

/// `<type> <name> = <value>;`
pub fn declaration(ty: CType, name: &str, value: &str) -> String {
    format!("{ty} {name} = {value};")
}

/// `<callee>(<arg0>, <arg1>, ...);`
pub fn call<S: AsRef<str>>(callee: &str, args: &[S]) -> String {
    let mut out = String::with_capacity(callee.len() + 3);
    out.push_str(callee);
    out.push('(');
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(arg.as_ref());
    }
    out.push_str(");");
    out
}
