//! Query depth limiting.
//!
//! Documents are measured before juniper executes them. Root fields sit at
//! depth 0 and every nested selection set adds one. Fragment spreads and
//! inline fragments do not add a level of their own; the fields they contribute
//! are counted where the spread appears. Introspection fields (`__schema`,
//! `__type`, ...) are not counted so the playground keeps working.
//!
//! The analyzer is lexical. A document it cannot make sense of is passed
//! through and left for juniper to reject with a proper syntax error.
//!
//! Work is bounded by the limit itself: parsing stops at the first field
//! nested deeper than the maximum, and each fragment is measured once no
//! matter how often it is spread.

use std::collections::HashMap;

use thiserror::Error;

/// Nesting of selection sets and fragment spreads the analyzer follows before
/// giving up on a document as too deep, whatever the configured maximum.
const MAX_NESTING: usize = 256;

/// Upper bound on query depth, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthLimit {
    max: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Query depth {depth} exceeds the maximum allowed depth of {max}")]
pub struct DepthExceeded {
    pub depth: usize,
    pub max: usize,
}

impl DepthLimit {
    pub const DEFAULT_MAX: usize = 6;

    pub fn new(max: usize) -> Self {
        Self { max }
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn check(&self, query: &str) -> Result<(), DepthExceeded> {
        let depth = match measure(query, self.max) {
            Ok(depth) if depth > self.max => depth,
            Err(Halt::TooDeep(depth)) => depth,
            _ => return Ok(()),
        };
        Err(DepthExceeded {
            depth,
            max: self.max,
        })
    }
}

impl Default for DepthLimit {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX)
    }
}

/// Why measuring stopped early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Halt {
    Unparsable,
    /// Nested past the limit; carries the depth reached when parsing stopped.
    TooDeep(usize),
}

/// Deepest field in any operation of the document.
fn measure(query: &str, max: usize) -> Result<usize, Halt> {
    let tokens = tokenize(query).ok_or(Halt::Unparsable)?;
    let document = Parser::new(tokens, max).document()?;

    let mut measurer = Measurer {
        fragments: &document.fragments,
        cache: HashMap::new(),
        max,
    };
    let mut deepest = 0;
    for operation in &document.operations {
        if let Some(depth) = measurer.relative_depth(operation, 0)? {
            deepest = deepest.max(depth);
        }
    }
    Ok(deepest)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Name(&'a str),
    Punct(char),
    Spread,
    /// Number or string literal; only ever appears inside arguments.
    Value,
}

fn tokenize(source: &str) -> Option<Vec<Token<'_>>> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b' ' | b'\t' | b'\n' | b'\r' | b',' => i += 1,
            b'#' => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'"' if bytes[i..].starts_with(b"\"\"\"") => {
                i += 3;
                loop {
                    if i >= bytes.len() {
                        return None;
                    }
                    if bytes[i..].starts_with(b"\\\"\"\"") {
                        i += 4;
                    } else if bytes[i..].starts_with(b"\"\"\"") {
                        i += 3;
                        break;
                    } else {
                        i += 1;
                    }
                }
                tokens.push(Token::Value);
            }
            b'"' => {
                i += 1;
                loop {
                    match bytes.get(i)? {
                        b'\\' => i += 2,
                        b'"' => {
                            i += 1;
                            break;
                        }
                        b'\n' => return None,
                        _ => i += 1,
                    }
                }
                tokens.push(Token::Value);
            }
            b'.' => {
                if !bytes[i..].starts_with(b"...") {
                    return None;
                }
                tokens.push(Token::Spread);
                i += 3;
            }
            c @ (b'{' | b'}' | b'(' | b')' | b'[' | b']' | b':' | b'=' | b'@' | b'!' | b'$'
            | b'|' | b'&') => {
                tokens.push(Token::Punct(c as char));
                i += 1;
            }
            c if c.is_ascii_alphabetic() || c == b'_' => {
                let start = i;
                while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                    i += 1;
                }
                tokens.push(Token::Name(&source[start..i]));
            }
            c if c.is_ascii_digit() || c == b'-' => {
                i += 1;
                while i < bytes.len()
                    && (bytes[i].is_ascii_alphanumeric() || matches!(bytes[i], b'.' | b'+' | b'-'))
                {
                    i += 1;
                }
                tokens.push(Token::Value);
            }
            // Byte order mark
            0xEF if bytes[i..].starts_with(&[0xEF, 0xBB, 0xBF]) => i += 3,
            _ => return None,
        }
    }

    Some(tokens)
}

#[derive(Debug)]
enum Selection<'a> {
    Field {
        name: &'a str,
        children: Vec<Selection<'a>>,
    },
    Spread(&'a str),
    Inline(Vec<Selection<'a>>),
}

struct Document<'a> {
    operations: Vec<Vec<Selection<'a>>>,
    fragments: HashMap<&'a str, Vec<Selection<'a>>>,
}

struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    max: usize,
    /// Field depth of the selection set being parsed, relative to the
    /// operation or fragment that contains it.
    level: usize,
    /// Open selection sets, inline fragments included.
    nesting: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: Vec<Token<'a>>, max: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            max,
            level: 0,
            nesting: 0,
        }
    }

    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Result<Token<'a>, Halt> {
        let token = self.peek().ok_or(Halt::Unparsable)?;
        self.pos += 1;
        Ok(token)
    }

    fn name(&mut self) -> Result<&'a str, Halt> {
        match self.next()? {
            Token::Name(name) => Ok(name),
            _ => Err(Halt::Unparsable),
        }
    }

    fn document(mut self) -> Result<Document<'a>, Halt> {
        let mut document = Document {
            operations: Vec::new(),
            fragments: HashMap::new(),
        };

        while let Some(token) = self.peek() {
            match token {
                Token::Punct('{') => document.operations.push(self.selection_set()?),
                Token::Name("fragment") => {
                    self.pos += 1;
                    let name = self.name()?;
                    if self.name()? != "on" {
                        return Err(Halt::Unparsable);
                    }
                    self.name()?;
                    self.directives()?;
                    let selections = self.selection_set()?;
                    document.fragments.insert(name, selections);
                }
                Token::Name("query" | "mutation" | "subscription") => {
                    self.pos += 1;
                    // Operation name, variable definitions, directives
                    loop {
                        match self.peek().ok_or(Halt::Unparsable)? {
                            Token::Punct('{') => break,
                            Token::Punct('(') => self.skip_parens()?,
                            _ => self.pos += 1,
                        }
                    }
                    document.operations.push(self.selection_set()?);
                }
                _ => return Err(Halt::Unparsable),
            }
        }

        Ok(document)
    }

    fn selection_set(&mut self) -> Result<Vec<Selection<'a>>, Halt> {
        if self.next()? != Token::Punct('{') {
            return Err(Halt::Unparsable);
        }
        if self.level > self.max || self.nesting >= MAX_NESTING {
            return Err(Halt::TooDeep(self.level.max(self.max.saturating_add(1))));
        }

        self.nesting += 1;
        let selections = self.selections();
        self.nesting -= 1;
        selections
    }

    fn selections(&mut self) -> Result<Vec<Selection<'a>>, Halt> {
        let mut selections = Vec::new();
        loop {
            match self.next()? {
                Token::Punct('}') => break,
                Token::Spread => match self.peek().ok_or(Halt::Unparsable)? {
                    Token::Name(name) if name != "on" => {
                        self.pos += 1;
                        self.directives()?;
                        selections.push(Selection::Spread(name));
                    }
                    token => {
                        if token == Token::Name("on") {
                            self.pos += 1;
                            self.name()?;
                        }
                        self.directives()?;
                        selections.push(Selection::Inline(self.selection_set()?));
                    }
                },
                Token::Name(mut name) => {
                    if self.peek() == Some(Token::Punct(':')) {
                        self.pos += 1;
                        name = self.name()?;
                    }
                    if self.peek() == Some(Token::Punct('(')) {
                        self.skip_parens()?;
                    }
                    self.directives()?;
                    let children = if self.peek() == Some(Token::Punct('{')) {
                        self.level += 1;
                        let children = self.selection_set();
                        self.level -= 1;
                        children?
                    } else {
                        Vec::new()
                    };
                    selections.push(Selection::Field { name, children });
                }
                _ => return Err(Halt::Unparsable),
            }
        }

        Ok(selections)
    }

    fn directives(&mut self) -> Result<(), Halt> {
        while self.peek() == Some(Token::Punct('@')) {
            self.pos += 1;
            self.name()?;
            if self.peek() == Some(Token::Punct('(')) {
                self.skip_parens()?;
            }
        }
        Ok(())
    }

    /// Skips a balanced `( ... )` group. Braces inside are object values.
    fn skip_parens(&mut self) -> Result<(), Halt> {
        let mut open = 0usize;
        loop {
            match self.next()? {
                Token::Punct('(') => open += 1,
                Token::Punct(')') => {
                    open -= 1;
                    if open == 0 {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Measured {
    InProgress,
    Done(Option<usize>),
}

/// Measures selections relative to the level they appear at, caching the
/// result for every fragment it visits.
struct Measurer<'d, 'a> {
    fragments: &'d HashMap<&'a str, Vec<Selection<'a>>>,
    cache: HashMap<&'a str, Measured>,
    max: usize,
}

impl<'d, 'a> Measurer<'d, 'a> {
    /// Deepest counted field below `selections`, where their own fields sit at
    /// 0. `None` when nothing in them counts.
    fn relative_depth(
        &mut self,
        selections: &[Selection<'a>],
        hops: usize,
    ) -> Result<Option<usize>, Halt> {
        if hops >= MAX_NESTING {
            return Err(Halt::TooDeep(self.max.saturating_add(1)));
        }

        let mut deepest = None;
        for selection in selections {
            let depth = match selection {
                Selection::Field { name, .. } if name.starts_with("__") => None,
                Selection::Field { children, .. } => Some(
                    self.relative_depth(children, hops + 1)?
                        .map_or(0, |depth| depth + 1),
                ),
                Selection::Inline(children) => self.relative_depth(children, hops + 1)?,
                Selection::Spread(name) => self.fragment_depth(*name, hops)?,
            };
            deepest = deepest.max(depth);
        }

        Ok(deepest)
    }

    fn fragment_depth(&mut self, name: &'a str, hops: usize) -> Result<Option<usize>, Halt> {
        match self.cache.get(name) {
            Some(Measured::Done(depth)) => return Ok(*depth),
            // Cyclic spreads are invalid; juniper reports them.
            Some(Measured::InProgress) => return Ok(None),
            None => {}
        }
        let fragments = self.fragments;
        let Some(fragment) = fragments.get(name) else {
            return Ok(None);
        };

        self.cache.insert(name, Measured::InProgress);
        let depth = self.relative_depth(fragment, hops + 1)?;
        self.cache.insert(name, Measured::Done(depth));
        Ok(depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_depth(query: &str) -> Option<usize> {
        measure(query, usize::MAX).ok()
    }

    #[test]
    fn test_root_fields_are_depth_zero() {
        assert_eq!(query_depth("{ users }"), Some(0));
        assert_eq!(query_depth("{ users { id } }"), Some(1));
        assert_eq!(query_depth("query Q { users { posts { title } } }"), Some(2));
    }

    #[test]
    fn test_deepest_branch_wins() {
        let query = r#"
            {
                memberTypes { id }
                users {
                    id
                    subscribedToUser { profile { memberType { id } } }
                }
            }
        "#;
        assert_eq!(query_depth(query), Some(4));
    }

    #[test]
    fn test_named_fragments_are_followed() {
        let query = r#"
            query Users {
                users { ...UserFields }
            }
            fragment UserFields on User {
                id
                posts { ...PostFields }
            }
            fragment PostFields on Post {
                author { id }
            }
        "#;
        assert_eq!(query_depth(query), Some(3));
    }

    #[test]
    fn test_inline_fragments_add_no_level() {
        let query = "{ users { ... on User { profile { id } } } }";
        assert_eq!(query_depth(query), Some(2));
    }

    #[test]
    fn test_braces_in_arguments_and_strings_are_ignored() {
        let query = r#"
            mutation Create($city: String!) {
                # { { { {
                createProfile(data: { avatar: "{ { {", sex: "x", birthday: 1, country: "NO",
                                      street: "s", city: $city, memberTypeId: "basic",
                                      userId: "u" }) @include(if: true) {
                    id
                }
            }
        "#;
        assert_eq!(query_depth(query), Some(1));
    }

    #[test]
    fn test_aliases_and_block_strings() {
        let query = r#"{ first: user(id: """ } " """) { alias: profile { id } } }"#;
        assert_eq!(query_depth(query), Some(2));
    }

    #[test]
    fn test_introspection_is_not_counted() {
        let query = "{ __schema { types { fields { type { ofType { ofType { ofType { name } } } } } } } }";
        assert_eq!(query_depth(query), Some(0));
    }

    #[test]
    fn test_cyclic_fragments_terminate() {
        let query = r#"
            { users { ...A } }
            fragment A on User { subscribedToUser { ...A } }
        "#;
        assert_eq!(query_depth(query), Some(1));
    }

    #[test]
    fn test_unparsable_documents_pass_through() {
        assert_eq!(query_depth("{ users { id }"), None);
        assert_eq!(query_depth("{ user(id: \"unterminated) { id } }"), None);
        assert!(DepthLimit::new(0).check("not graphql at all {").is_ok());
    }

    #[test]
    fn test_limit_is_inclusive() {
        let limit = DepthLimit::new(2);
        assert!(limit.check("{ users { posts { id } } }").is_ok());

        let err = limit
            .check("{ users { posts { author { id } } } }")
            .unwrap_err();
        assert_eq!(err, DepthExceeded { depth: 3, max: 2 });
        assert_eq!(
            err.to_string(),
            "Query depth 3 exceeds the maximum allowed depth of 2"
        );
    }

    #[test]
    fn test_default_limit() {
        assert_eq!(DepthLimit::default().max(), 6);
    }

    #[test]
    fn test_fragment_fan_out_is_measured_once() {
        let mut query = String::from("{ users { ...F0 } }");
        for i in 0..40 {
            query.push_str(&format!(" fragment F{i} on User {{ ...F{n} ...F{n} }}", n = i + 1));
        }
        query.push_str(" fragment F40 on User { id posts { id } }");

        assert_eq!(query_depth(&query), Some(2));
        assert!(DepthLimit::new(2).check(&query).is_ok());
        assert_eq!(
            DepthLimit::new(1).check(&query),
            Err(DepthExceeded { depth: 2, max: 1 })
        );
    }

    #[test]
    fn test_deeply_nested_document_is_rejected_without_recursing() {
        let query = "{a".repeat(200_000) + "}".repeat(200_000).as_str();
        let inline = "{ ... on User ".repeat(200_000) + "}".repeat(200_000).as_str();

        let result = std::thread::Builder::new()
            .stack_size(2 * 1024 * 1024)
            .spawn(move || {
                let limit = DepthLimit::default();
                (limit.check(&query), limit.check(&inline))
            })
            .unwrap()
            .join()
            .unwrap();

        assert_eq!(result.0, Err(DepthExceeded { depth: 7, max: 6 }));
        assert_eq!(result.1, Err(DepthExceeded { depth: 7, max: 6 }));
    }

    #[test]
    fn test_long_spread_chain_is_rejected() {
        let mut query = String::from("{ users { ...F0 } }");
        for i in 0..100_000 {
            query.push_str(&format!(" fragment F{i} on User {{ ...F{} }}", i + 1));
        }

        let result = std::thread::Builder::new()
            .stack_size(2 * 1024 * 1024)
            .spawn(move || DepthLimit::default().check(&query))
            .unwrap()
            .join()
            .unwrap();

        assert_eq!(result, Err(DepthExceeded { depth: 7, max: 6 }));
    }
}
