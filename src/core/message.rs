//! Message rendering for the three call forms
//!
//! Every level has a concatenation form (`info`), a format form (`infof`)
//! and a concatenation-with-newline form (`infoln`). The concatenation forms
//! join their arguments with single spaces.

use std::fmt::{self, Display, Write};

/// Join the arguments with single spaces.
///
/// ```
/// use multi_logger::core::message::sprint;
///
/// assert_eq!(sprint(&[&"key=", &42, &true]), "key= 42 true");
/// assert_eq!(sprint(&[]), "");
/// ```
pub fn sprint(args: &[&dyn Display]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{}", arg);
    }
    out
}

/// [`sprint`] followed by a newline.
pub fn sprintln(args: &[&dyn Display]) -> String {
    let mut out = sprint(args);
    out.push('\n');
    out
}

/// Build `<label><name><message>`.
pub(crate) fn render_line(label: &str, name: &str, message: fmt::Arguments<'_>) -> String {
    let mut line = String::with_capacity(label.len() + name.len() + 32);
    line.push_str(label);
    line.push_str(name);
    let _ = line.write_fmt(message);
    line
}
