//! Shell-style word splitting for command lines
//!
//! Follows POSIX shell quoting:
//! - Whitespace separates words
//! - Single quotes preserve everything up to the closing quote
//! - Double quotes preserve everything except `\"`, `\\`, `\$` and `` \` ``
//! - A backslash outside quotes escapes the next character
//! - Adjacent quoted and unquoted pieces join into one word

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unterminated {0} quote")]
    UnterminatedQuote(&'static str),
    #[error("trailing backslash")]
    DanglingEscape,
}

/// Characters a backslash escapes inside double quotes
const DOUBLE_QUOTE_ESCAPES: [char; 4] = ['"', '\\', '$', '`'];

/// Word splitter over one input line
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Split the whole line, failing on the first malformed word
    pub fn split(self) -> Result<Vec<String>, LexError> {
        self.collect()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.current_char()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current_char() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn read_word(&mut self) -> Result<String, LexError> {
        let mut word = String::new();
        while let Some(c) = self.current_char() {
            if c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
            match c {
                '\'' => self.read_single_quoted(&mut word)?,
                '"' => self.read_double_quoted(&mut word)?,
                '\\' => word.push(self.bump().ok_or(LexError::DanglingEscape)?),
                _ => word.push(c),
            }
        }
        Ok(word)
    }

    fn read_single_quoted(&mut self, word: &mut String) -> Result<(), LexError> {
        loop {
            match self.bump() {
                Some('\'') => return Ok(()),
                Some(c) => word.push(c),
                None => return Err(LexError::UnterminatedQuote("single")),
            }
        }
    }

    fn read_double_quoted(&mut self, word: &mut String) -> Result<(), LexError> {
        loop {
            match self.bump() {
                Some('"') => return Ok(()),
                Some('\\') => match self.bump() {
                    Some(c) if DOUBLE_QUOTE_ESCAPES.contains(&c) => word.push(c),
                    Some(c) => {
                        word.push('\\');
                        word.push(c);
                    }
                    None => return Err(LexError::UnterminatedQuote("double")),
                },
                Some(c) => word.push(c),
                None => return Err(LexError::UnterminatedQuote("double")),
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<String, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        if self.at_end() {
            return None;
        }
        let word = self.read_word();
        if word.is_err() {
            // stop after the first error
            self.pos = self.input.len();
        }
        Some(word)
    }
}

/// Split `input` into words
pub fn split(input: &str) -> Result<Vec<String>, LexError> {
    Lexer::new(input).split()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &str) -> Vec<String> {
        split(input).unwrap()
    }

    #[test]
    fn test_plain_words() {
        assert_eq!(words("cp a.txt b.txt"), vec!["cp", "a.txt", "b.txt"]);
        assert_eq!(words("   ls   "), vec!["ls"]);
        assert!(words("").is_empty());
        assert!(words(" \t ").is_empty());
    }

    #[test]
    fn test_double_quotes_keep_spaces() {
        assert_eq!(words(r#"cd "My Drive""#), vec!["cd", "My Drive"]);
    }

    #[test]
    fn test_single_quotes_are_literal() {
        assert_eq!(
            words("cp 'Q1 report.pdf' /tmp"),
            vec!["cp", "Q1 report.pdf", "/tmp"]
        );
        assert_eq!(words(r#"info 'a "b" \c'"#), vec!["info", r#"a "b" \c"#]);
    }

    #[test]
    fn test_backslash_escapes() {
        assert_eq!(words(r"cd My\ Drive"), vec!["cd", "My Drive"]);
        assert_eq!(words(r#"cd "say \"hi\"""#), vec!["cd", r#"say "hi""#]);
        assert_eq!(words(r#"cd "a\b""#), vec!["cd", r"a\b"]);
    }

    #[test]
    fn test_adjacent_pieces_join() {
        assert_eq!(words(r#"cd My' 'Dri"ve""#), vec!["cd", "My Drive"]);
    }

    #[test]
    fn test_empty_quotes_make_empty_word() {
        assert_eq!(words("cp '' x"), vec!["cp", "", "x"]);
    }

    #[test]
    fn test_unicode_names() {
        assert_eq!(words("cd 'Überweisungen 2024'"), vec!["cd", "Überweisungen 2024"]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            split(r#"cd "My Drive"#),
            Err(LexError::UnterminatedQuote("double"))
        );
        assert_eq!(
            split("cd 'My Drive"),
            Err(LexError::UnterminatedQuote("single"))
        );
        assert_eq!(split(r"cd foo\"), Err(LexError::DanglingEscape));
    }
}
