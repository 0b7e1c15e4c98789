//! Tokenizer for the build-script subset gradeps understands.
//!
//! Produces identifiers, punctuation, and quoted strings; `//` line comments
//! and `/* */` block comments are skipped. Each token carries the line it
//! started on for diagnostics.

use gradeps_util::errors::GradepsError;

/// A lexical token with the line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Bare identifier: `buildscript`, `classpath`, `google`.
    Ident(String),
    /// Single- or double-quoted string literal, quotes stripped.
    Str(String),
    LBrace,
    RBrace,
    LParen,
    RParen,
    Eq,
}

impl TokenKind {
    /// Short description used in parser error messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Ident(name) => format!("'{name}'"),
            TokenKind::Str(_) => "string literal".to_string(),
            TokenKind::LBrace => "'{'".to_string(),
            TokenKind::RBrace => "'}'".to_string(),
            TokenKind::LParen => "'('".to_string(),
            TokenKind::RParen => "')'".to_string(),
            TokenKind::Eq => "'='".to_string(),
        }
    }
}

/// Split script text into tokens, skipping whitespace and comments.
pub fn tokenize(src: &str) -> Result<Vec<Token>, GradepsError> {
    let mut tokens = Vec::new();
    let mut chars = src.chars().peekable();
    let mut line = 1usize;

    while let Some(ch) = chars.next() {
        match ch {
            '\n' => line += 1,
            c if c.is_whitespace() => {}
            // Groovy permits semicolon statement separators.
            ';' => {}
            '{' => tokens.push(Token {
                kind: TokenKind::LBrace,
                line,
            }),
            '}' => tokens.push(Token {
                kind: TokenKind::RBrace,
                line,
            }),
            '(' => tokens.push(Token {
                kind: TokenKind::LParen,
                line,
            }),
            ')' => tokens.push(Token {
                kind: TokenKind::RParen,
                line,
            }),
            '=' => tokens.push(Token {
                kind: TokenKind::Eq,
                line,
            }),
            '/' => match chars.peek() {
                Some('/') => {
                    while let Some(&c) = chars.peek() {
                        if c == '\n' {
                            break;
                        }
                        chars.next();
                    }
                }
                Some('*') => {
                    chars.next();
                    let start_line = line;
                    let mut closed = false;
                    while let Some(c) = chars.next() {
                        match c {
                            '\n' => line += 1,
                            '*' if chars.peek() == Some(&'/') => {
                                chars.next();
                                closed = true;
                                break;
                            }
                            _ => {}
                        }
                    }
                    if !closed {
                        return Err(GradepsError::Syntax {
                            line: start_line,
                            message: "unterminated block comment".to_string(),
                        });
                    }
                }
                _ => {
                    return Err(GradepsError::Syntax {
                        line,
                        message: "unexpected character '/'".to_string(),
                    });
                }
            },
            quote @ ('\'' | '"') => {
                let start_line = line;
                let mut value = String::new();
                loop {
                    match chars.next() {
                        Some(c) if c == quote => break,
                        Some('\n') | None => {
                            return Err(GradepsError::Syntax {
                                line: start_line,
                                message: "unterminated string literal".to_string(),
                            });
                        }
                        Some(c) => value.push(c),
                    }
                }
                tokens.push(Token {
                    kind: TokenKind::Str(value),
                    line: start_line,
                });
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut name = String::new();
                name.push(c);
                while let Some(&next) = chars.peek() {
                    if next.is_ascii_alphanumeric() || next == '_' {
                        name.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token {
                    kind: TokenKind::Ident(name),
                    line,
                });
            }
            other => {
                return Err(GradepsError::Syntax {
                    line,
                    message: format!("unexpected character '{other}'"),
                });
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        tokenize(src)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn tokenizes_call_and_block() {
        assert_eq!(
            kinds("repositories { google() }"),
            vec![
                TokenKind::Ident("repositories".to_string()),
                TokenKind::LBrace,
                TokenKind::Ident("google".to_string()),
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::RBrace,
            ]
        );
    }

    #[test]
    fn both_quote_styles() {
        assert_eq!(
            kinds("classpath 'a:b:1' classpath \"c:d:2\""),
            vec![
                TokenKind::Ident("classpath".to_string()),
                TokenKind::Str("a:b:1".to_string()),
                TokenKind::Ident("classpath".to_string()),
                TokenKind::Str("c:d:2".to_string()),
            ]
        );
    }

    #[test]
    fn comments_are_skipped() {
        let src = "google() // trailing note\n/* block\n comment */ mavenCentral()";
        assert_eq!(
            kinds(src),
            vec![
                TokenKind::Ident("google".to_string()),
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Ident("mavenCentral".to_string()),
                TokenKind::LParen,
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn tracks_line_numbers() {
        let tokens = tokenize("buildscript {\n    google()\n}").unwrap();
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[2].line, 2);
        assert_eq!(tokens.last().unwrap().line, 3);
    }

    #[test]
    fn line_numbers_after_block_comment() {
        let tokens = tokenize("/* one\ntwo */ google()").unwrap();
        assert_eq!(tokens[0].line, 2);
    }

    #[test]
    fn unterminated_string_fails() {
        let err = tokenize("classpath 'a:b:1").unwrap_err();
        assert!(matches!(err, GradepsError::Syntax { line: 1, .. }));
    }

    #[test]
    fn string_may_not_span_lines() {
        assert!(tokenize("classpath 'a:b\n:1'").is_err());
    }

    #[test]
    fn unterminated_block_comment_fails() {
        let err = tokenize("google() /* never closed").unwrap_err();
        assert!(matches!(err, GradepsError::Syntax { .. }));
    }

    #[test]
    fn rejects_stray_characters() {
        assert!(tokenize("repositories @ {}").is_err());
    }
}
