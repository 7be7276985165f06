//! Scanner: walks compiled CSS block structure
//!
//! Produces flattened style rules for the analyzer to reduce. Grouping
//! at-rules (`@media`, `@supports`, `@layer`, `@container`) are descended
//! into; non-rule at-rules (`@keyframes`, `@property`, `@font-face`) are
//! skipped whole. Declarations nested under `&` selectors or wrapped
//! at-rules inside a rule body are attributed to the enclosing rule, which
//! is how the v4 engine emits variant bodies.
//!
//! Scanning never fails: segments that do not parse are skipped, and the
//! analyzer decides what to do with rules it cannot map.

/// One declaration inside a rule body
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Property name as written (`background-color`, `--tw-border-style`)
    pub property: String,
    /// Declared value, verbatim
    pub value: String,
}

/// A flattened style rule: its selector and every declaration observed
/// anywhere in its body
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScannedRule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

/// At-rules whose bodies contain further rules
const GROUPING_AT_RULES: &[&str] = &["media", "supports", "layer", "container"];

/// What ended a prelude read
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Terminator {
    /// Unnested `{`, consumed
    BlockOpen,
    /// Unnested `;`, consumed
    DeclarationEnd,
    /// Unnested `}`, left for the enclosing loop
    BlockClose,
    /// End of input
    Eof,
}

/// Scanner over compiled stylesheet text
pub struct CssScanner {
    input: Vec<char>,
    pos: usize,
}

impl CssScanner {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
        }
    }

    /// Scan the whole stylesheet and return its flattened style rules
    pub fn scan(&mut self) -> Vec<ScannedRule> {
        let mut rules = Vec::new();
        self.scan_block_contents(&mut rules, false);
        rules
    }

    /// `nested` is true inside a grouping at-rule, whose closing brace ends
    /// the block. At top level an orphan `}` is skipped so the rules after
    /// it are still scanned.
    fn scan_block_contents(&mut self, rules: &mut Vec<ScannedRule>, nested: bool) {
        loop {
            self.skip_trivia();
            match self.current() {
                None => break,
                Some('}') => {
                    self.advance();
                    if nested {
                        break;
                    }
                }
                Some(_) => self.scan_item(rules),
            }
        }
    }

    fn scan_item(&mut self, rules: &mut Vec<ScannedRule>) {
        let (prelude, terminator) = self.read_prelude();
        if terminator != Terminator::BlockOpen {
            // at-statement (`@import ...;`, `@layer a, b;`) or junk
            return;
        }
        let prelude = prelude.trim().to_string();
        if let Some(rest) = prelude.strip_prefix('@') {
            let name = rest
                .split(|c: char| c == '(' || c.is_whitespace())
                .next()
                .unwrap_or("");
            if GROUPING_AT_RULES.contains(&name) {
                self.scan_block_contents(rules, true);
            } else {
                self.skip_block();
            }
            return;
        }
        let declarations = self.read_rule_body();
        if !prelude.is_empty() {
            rules.push(ScannedRule {
                selector: prelude,
                declarations,
            });
        }
    }

    /// Read text up to an unnested `{`, `;` or `}`. The first two are
    /// consumed; a closing brace is left for the enclosing loop.
    fn read_prelude(&mut self) -> (String, Terminator) {
        let mut text = String::new();
        let mut depth = 0usize;
        while let Some(ch) = self.current() {
            match ch {
                '/' if self.peek_at(1) == Some('*') => self.skip_comment(),
                '"' | '\'' => text.push_str(&self.read_quoted(ch)),
                '(' | '[' => {
                    depth += 1;
                    text.push(ch);
                    self.advance();
                }
                ')' | ']' => {
                    depth = depth.saturating_sub(1);
                    text.push(ch);
                    self.advance();
                }
                '\\' => {
                    text.push(ch);
                    self.advance();
                    if let Some(next) = self.current() {
                        text.push(next);
                        self.advance();
                    }
                }
                '{' if depth == 0 => {
                    self.advance();
                    return (text, Terminator::BlockOpen);
                }
                ';' if depth == 0 => {
                    self.advance();
                    return (text, Terminator::DeclarationEnd);
                }
                '}' if depth == 0 => return (text, Terminator::BlockClose),
                _ => {
                    text.push(ch);
                    self.advance();
                }
            }
        }
        (text, Terminator::Eof)
    }

    /// Collect declarations until the rule's closing brace, descending
    /// into nested blocks
    fn read_rule_body(&mut self) -> Vec<Declaration> {
        let mut declarations = Vec::new();
        loop {
            self.skip_trivia();
            match self.current() {
                None => break,
                Some('}') => {
                    self.advance();
                    break;
                }
                Some(_) => {
                    let (segment, terminator) = self.read_prelude();
                    match terminator {
                        Terminator::BlockOpen => declarations.extend(self.read_rule_body()),
                        Terminator::DeclarationEnd | Terminator::BlockClose | Terminator::Eof => {
                            if let Some(declaration) = parse_declaration(&segment) {
                                declarations.push(declaration);
                            }
                        }
                    }
                }
            }
        }
        declarations
    }

    /// Skip a balanced block after its opening brace was consumed
    fn skip_block(&mut self) {
        let mut depth = 1usize;
        while let Some(ch) = self.current() {
            match ch {
                '/' if self.peek_at(1) == Some('*') => self.skip_comment(),
                '"' | '\'' => {
                    self.read_quoted(ch);
                }
                '\\' => {
                    self.advance();
                    self.advance();
                }
                '{' => {
                    depth += 1;
                    self.advance();
                }
                '}' => {
                    depth -= 1;
                    self.advance();
                    if depth == 0 {
                        return;
                    }
                }
                _ => self.advance(),
            }
        }
    }

    fn read_quoted(&mut self, quote: char) -> String {
        let mut text = String::new();
        text.push(quote);
        self.advance();
        while let Some(ch) = self.current() {
            if ch == '\\' {
                text.push(ch);
                self.advance();
                if let Some(next) = self.current() {
                    text.push(next);
                    self.advance();
                }
                continue;
            }
            text.push(ch);
            self.advance();
            if ch == quote {
                break;
            }
        }
        text
    }

    fn skip_trivia(&mut self) {
        while let Some(ch) = self.current() {
            if ch.is_whitespace() {
                self.advance();
            } else if ch == '/' && self.peek_at(1) == Some('*') {
                self.skip_comment();
            } else {
                break;
            }
        }
    }

    fn skip_comment(&mut self) {
        self.advance();
        self.advance();
        while let Some(ch) = self.current() {
            if ch == '*' && self.peek_at(1) == Some('/') {
                self.advance();
                self.advance();
                return;
            }
            self.advance();
        }
    }

    fn current(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.pos + offset).copied()
    }

    fn advance(&mut self) {
        if self.pos < self.input.len() {
            self.pos += 1;
        }
    }
}

fn parse_declaration(segment: &str) -> Option<Declaration> {
    let (property, value) = segment.split_once(':')?;
    let property = property.trim();
    let value = value.trim();
    if property.is_empty() || value.is_empty() {
        return None;
    }
    if !property
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return None;
    }
    Some(Declaration {
        property: property.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(css: &str) -> Vec<ScannedRule> {
        CssScanner::new(css).scan()
    }

    #[test]
    fn test_top_level_rule() {
        let rules = scan(".flex { display: flex; }");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].selector, ".flex");
        assert_eq!(rules[0].declarations.len(), 1);
        assert_eq!(rules[0].declarations[0].property, "display");
        assert_eq!(rules[0].declarations[0].value, "flex");
    }

    #[test]
    fn test_descends_grouping_at_rules() {
        let css = r#"
            @layer utilities {
                @media (width >= 40rem) {
                    .sm\:flex { display: flex; }
                }
            }
        "#;
        let rules = scan(css);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].selector, ".sm\\:flex");
    }

    #[test]
    fn test_skips_non_rule_at_rules() {
        let css = r#"
            @keyframes spin { to { transform: rotate(360deg); } }
            @property --tw-border-style { syntax: "*"; inherits: false; }
            .underline { text-decoration-line: underline; }
        "#;
        let rules = scan(css);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].selector, ".underline");
    }

    #[test]
    fn test_discards_at_statements() {
        let css = r#"
            @charset "utf-8";
            @layer theme, base, components, utilities;
            @import "tailwindcss";
            .block { display: block; }
        "#;
        let rules = scan(css);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].selector, ".block");
    }

    #[test]
    fn test_nested_variant_body_attributed_to_rule() {
        let css = r#"
            .hover\:bg-red-500 {
                &:hover {
                    @media (hover: hover) {
                        background-color: var(--color-red-500);
                    }
                }
            }
        "#;
        let rules = scan(css);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].selector, ".hover\\:bg-red-500");
        assert_eq!(rules[0].declarations.len(), 1);
        assert_eq!(rules[0].declarations[0].property, "background-color");
    }

    #[test]
    fn test_mixed_direct_and_nested_declarations() {
        let css = ".x { color: red; &:hover { color: blue; } }";
        let rules = scan(css);
        assert_eq!(rules[0].declarations.len(), 2);
    }

    #[test]
    fn test_last_declaration_without_semicolon() {
        let rules = scan(".p-4 { padding: 1rem }");
        assert_eq!(rules[0].declarations.len(), 1);
        assert_eq!(rules[0].declarations[0].value, "1rem");
    }

    #[test]
    fn test_rule_unterminated_at_end_of_input_keeps_its_declaration() {
        let rules = scan(".flex { display: flex");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].declarations.len(), 1);
        assert_eq!(rules[0].declarations[0].property, "display");
        assert_eq!(rules[0].declarations[0].value, "flex");
    }

    #[test]
    fn test_comments_ignored() {
        let css = "/* header */ .flex { /* inline */ display: flex; }";
        let rules = scan(css);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].declarations.len(), 1);
    }

    #[test]
    fn test_braces_inside_strings_do_not_confuse_nesting() {
        let css = r#".content-open { content: "{"; } .flex { display: flex; }"#;
        let rules = scan(css);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[1].selector, ".flex");
    }

    #[test]
    fn test_orphan_close_brace_does_not_end_the_scan() {
        let css = "} .flex { display: flex; } } .block { display: block; }";
        let rules = scan(css);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].selector, ".flex");
        assert_eq!(rules[1].selector, ".block");
    }

    #[test]
    fn test_value_with_colons_kept_whole() {
        let css = r#".bg-image { background-image: url(https://example.com/a.png); }"#;
        let rules = scan(css);
        assert_eq!(
            rules[0].declarations[0].value,
            "url(https://example.com/a.png)"
        );
    }

    #[test]
    fn test_empty_input_yields_no_rules() {
        assert!(scan("").is_empty());
        assert!(scan("   /* only a comment */  ").is_empty());
    }
}
