//! Conversion of raw fact arguments into quoted argument lists.

use crate::catalog::predicate::Predicate;
use crate::error::ArgumentError;

const OWNER_SEPARATOR: &str = "%.";

impl Predicate {
    /// Flatten a raw comma-joined argument text into a quoted argument list.
    ///
    /// Parenthesized and angle-bracketed groups are removed unless the text
    /// already splits into exactly two arguments. Conclusion predicates pick
    /// their compound argument and expand it into qualified name, simple
    /// name and owner, with `null` standing in for a missing owner. Other
    /// predicates keep two arguments, in logical order.
    pub fn converted_args(&self, raw: &str) -> Result<String, ArgumentError> {
        let text = if tokens(raw).len() != 2 {
            strip_groups(&strip_groups(raw, '(', ')'), '<', '>')
        } else {
            raw.to_string()
        };
        let args = tokens(&text);
        let arg = |position: usize| {
            args.get(position)
                .copied()
                .ok_or_else(|| ArgumentError::MissingArgument {
                    predicate: self.name().to_string(),
                    position,
                })
        };

        if self.is_conclusion_predicate() {
            let suffix = self.suffix();
            let position = if suffix.contains("inherited") {
                2
            } else if suffix.eq_ignore_ascii_case("typeintype")
                || suffix.eq_ignore_ascii_case("accesses")
            {
                1
            } else {
                0
            };

            let qualified = unquote(arg(position)?);
            let (simple, owner) = match qualified.find(OWNER_SEPARATOR) {
                Some(i) => (
                    &qualified[i + OWNER_SEPARATOR.len()..],
                    &qualified[..i],
                ),
                None => (qualified, ""),
            };
            let owner = if owner.is_empty() || qualified.starts_with('%') {
                "null"
            } else {
                owner
            };
            Ok(format!("\"{}\",\"{}\",\"{}\"", qualified, simple, owner))
        } else {
            let (mut first, mut second) = (arg(0)?, arg(1)?);
            if self.suffix().eq_ignore_ascii_case("accesses") {
                std::mem::swap(&mut first, &mut second);
            }
            Ok(format!("\"{}\",\"{}\"", unquote(first), unquote(second)))
        }
    }
}

/// Join three arguments in the layout expected by fact files.
pub fn combine_arguments(arg0: &str, arg1: &str, arg2: &str) -> String {
    format!("\"{}\", \"{}\" ,\"{}\"", arg0, arg1, arg2)
}

fn tokens(text: &str) -> Vec<&str> {
    text.split(',').filter(|t| !t.is_empty()).collect()
}

/// Remove every `open ... close` group, up to the first `close` after
/// each `open`. An unclosed `open` is dropped by itself.
fn strip_groups(text: &str, open: char, close: char) -> String {
    let mut text = text.to_string();
    while let Some(i) = text.find(open) {
        let rest = &text[i + open.len_utf8()..];
        let tail = match rest.find(close) {
            Some(j) => &rest[j + close.len_utf8()..],
            None => rest,
        };
        text = format!("{}{}", &text[..i], tail);
    }
    text
}

/// Strip the quoting around a single argument: `"name#..."` keeps the
/// text before `#`, `"name"` the text inside the quotes.
fn unquote(token: &str) -> &str {
    let end = token.find('#').or_else(|| token.rfind('"'));
    match end {
        Some(end) => token.get(1..end).unwrap_or(""),
        None => token,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::registry::Catalog;

    #[test]
    fn conclusion_arguments_are_split_on_the_owner_separator() {
        let catalog = Catalog::standard();
        let p = catalog.get("added_method").unwrap();
        assert_eq!(
            p.converted_args("\"pkg.Foo%.bar()\",\"bar\",\"pkg.Foo\"").unwrap(),
            "\"pkg.Foo%.bar\",\"bar\",\"pkg.Foo\""
        );
    }

    #[test]
    fn missing_owner_becomes_null() {
        let catalog = Catalog::standard();
        let p = catalog.get("deleted_type").unwrap();
        assert_eq!(
            p.converted_args("\"%.Foo\",\"Foo\",\"pkg\"").unwrap(),
            "\"%.Foo\",\"Foo\",\"null\""
        );
        assert_eq!(
            p.converted_args("\"Foo\",\"Foo\",\"pkg\"").unwrap(),
            "\"Foo\",\"Foo\",\"null\""
        );
    }

    #[test]
    fn conclusion_picks_the_family_argument() {
        let catalog = Catalog::standard();
        let accesses = catalog.get("added_accesses").unwrap();
        assert_eq!(
            accesses.converted_args("\"a.F%.x\",\"a.F%.m\",").unwrap(),
            "\"a.F%.m\",\"m\",\"a.F\""
        );

        let inherited = catalog.get("deleted_inheritedmethod").unwrap();
        assert_eq!(
            inherited
                .converted_args("\"run\",\"a.Sub\",\"a.Base%.run\"")
                .unwrap(),
            "\"a.Base%.run\",\"run\",\"a.Base\""
        );
    }

    #[test]
    fn hash_marks_end_the_argument() {
        let catalog = Catalog::standard();
        let p = catalog.get("added_calls").unwrap();
        assert_eq!(
            p.converted_args("\"a.B%.m#1\",\"a.B%.n\"").unwrap(),
            "\"a.B%.m\",\"m\",\"a.B\""
        );
    }

    #[test]
    fn accesses_antecedents_are_reordered() {
        let catalog = Catalog::standard();
        let accesses = catalog.get("before_accesses").unwrap();
        assert_eq!(
            accesses.converted_args("\"a.F%.x\",\"a.F%.m()\"").unwrap(),
            "\"a.F%.m()\",\"a.F%.x\""
        );

        let calls = catalog.get("before_calls").unwrap();
        assert_eq!(
            calls.converted_args("\"a%.m\",\"a%.n\"").unwrap(),
            "\"a%.m\",\"a%.n\""
        );
    }

    #[test]
    fn too_few_arguments_is_an_error() {
        let catalog = Catalog::standard();
        let p = catalog.get("before_calls").unwrap();
        assert_eq!(
            p.converted_args("\"a%.m\""),
            Err(ArgumentError::MissingArgument {
                predicate: "before_calls".into(),
                position: 1
            })
        );
    }

    #[test]
    fn nested_groups_are_removed() {
        assert_eq!(strip_groups("m(int,String),x", '(', ')'), "m,x");
        assert_eq!(strip_groups("List<A,B>,x", '<', '>'), "List,x");
        assert_eq!(strip_groups("open(x", '(', ')'), "openx");
    }

    #[test]
    fn combined_arguments_keep_their_layout() {
        assert_eq!(combine_arguments("a", "b", "c"), "\"a\", \"b\" ,\"c\"");
    }
}
