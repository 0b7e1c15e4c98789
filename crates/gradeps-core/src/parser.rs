//! Recursive-descent parser for the bootstrap configuration blocks.
//!
//! The grammar is the declarative subset a build script's bootstrap section
//! actually uses: a `buildscript` block holding `repositories` and
//! `dependencies`, and an `allprojects` block holding `repositories`.
//! Parsing is one-shot and fail-fast; nothing is recovered or retried.

use tracing::debug;

use gradeps_util::errors::GradepsError;

use crate::dependency::{ClasspathDependency, DependencySpec};
use crate::lexer::{self, Token, TokenKind};
use crate::repository::{Repository, RepositoryList};
use crate::script::{BootstrapBlock, BuildScript, LoadOptions, ProjectDefaults};

/// Parse script text into a [`BuildScript`].
pub fn parse(src: &str, options: &LoadOptions) -> Result<BuildScript, GradepsError> {
    let tokens = lexer::tokenize(src)?;
    let mut parser = Parser { tokens, pos: 0 };
    let script = parser.script(options)?;
    debug!(
        bootstrap_repos = script.buildscript.repositories.len(),
        classpath_deps = script.buildscript.dependencies.len(),
        project_repos = script.allprojects.repositories.len(),
        "parsed build script"
    );
    Ok(script)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn last_line(&self) -> usize {
        self.tokens.last().map(|t| t.line).unwrap_or(1)
    }

    fn eof(&self, expected: &str) -> GradepsError {
        GradepsError::Syntax {
            line: self.last_line(),
            message: format!("expected {expected} before end of input"),
        }
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<(), GradepsError> {
        match self.peek() {
            Some(tok) if tok.kind == *kind => {
                self.pos += 1;
                Ok(())
            }
            Some(tok) => Err(GradepsError::Syntax {
                line: tok.line,
                message: format!(
                    "expected {}, found {}",
                    kind.describe(),
                    tok.kind.describe()
                ),
            }),
            None => Err(self.eof(&kind.describe())),
        }
    }

    fn expect_ident(&mut self, expected: &str) -> Result<(), GradepsError> {
        match self.peek() {
            Some(Token {
                kind: TokenKind::Ident(name),
                ..
            }) if name == expected => {
                self.pos += 1;
                Ok(())
            }
            Some(tok) => Err(GradepsError::Syntax {
                line: tok.line,
                message: format!("expected '{expected}', found {}", tok.kind.describe()),
            }),
            None => Err(self.eof(&format!("'{expected}'"))),
        }
    }

    fn expect_string(&mut self, what: &str) -> Result<String, GradepsError> {
        match self.peek() {
            Some(Token {
                kind: TokenKind::Str(value),
                ..
            }) => {
                let value = value.clone();
                self.pos += 1;
                Ok(value)
            }
            Some(tok) => Err(GradepsError::Syntax {
                line: tok.line,
                message: format!("expected {what}, found {}", tok.kind.describe()),
            }),
            None => Err(self.eof(what)),
        }
    }

    fn script(&mut self, options: &LoadOptions) -> Result<BuildScript, GradepsError> {
        let mut buildscript: Option<BootstrapBlock> = None;
        let mut allprojects: Option<ProjectDefaults> = None;

        while let Some(tok) = self.peek() {
            let line = tok.line;
            let kind = tok.kind.clone();
            match kind {
                TokenKind::Ident(name) => match name.as_str() {
                    "buildscript" => {
                        if buildscript.is_some() {
                            return Err(GradepsError::Syntax {
                                line,
                                message: "block 'buildscript' declared twice".to_string(),
                            });
                        }
                        self.pos += 1;
                        buildscript = Some(self.bootstrap_block(options)?);
                    }
                    "allprojects" => {
                        if allprojects.is_some() {
                            return Err(GradepsError::Syntax {
                                line,
                                message: "block 'allprojects' declared twice".to_string(),
                            });
                        }
                        self.pos += 1;
                        allprojects = Some(self.allprojects_block(options)?);
                    }
                    other => {
                        return Err(GradepsError::Syntax {
                            line,
                            message: format!("unsupported top-level block '{other}'"),
                        });
                    }
                },
                other => {
                    return Err(GradepsError::Syntax {
                        line,
                        message: format!("expected a block name, found {}", other.describe()),
                    });
                }
            }
        }

        Ok(BuildScript {
            buildscript: buildscript.unwrap_or_default(),
            allprojects: allprojects.unwrap_or_default(),
        })
    }

    fn bootstrap_block(&mut self, options: &LoadOptions) -> Result<BootstrapBlock, GradepsError> {
        self.expect(&TokenKind::LBrace)?;
        let mut repositories: Option<RepositoryList> = None;
        let mut dependencies: Option<DependencySpec> = None;

        loop {
            match self.peek() {
                Some(Token {
                    kind: TokenKind::RBrace,
                    ..
                }) => {
                    self.pos += 1;
                    break;
                }
                Some(Token {
                    kind: TokenKind::Ident(name),
                    line,
                }) => {
                    let line = *line;
                    let name = name.clone();
                    self.pos += 1;
                    match name.as_str() {
                        "repositories" => {
                            if repositories.is_some() {
                                return Err(GradepsError::Syntax {
                                    line,
                                    message: "block 'repositories' declared twice in buildscript"
                                        .to_string(),
                                });
                            }
                            repositories =
                                Some(self.repositories_block("buildscript", options)?);
                        }
                        "dependencies" => {
                            if dependencies.is_some() {
                                return Err(GradepsError::Syntax {
                                    line,
                                    message: "block 'dependencies' declared twice in buildscript"
                                        .to_string(),
                                });
                            }
                            dependencies = Some(self.dependencies_block()?);
                        }
                        other => {
                            return Err(GradepsError::Syntax {
                                line,
                                message: format!(
                                    "unsupported declaration '{other}' in buildscript block"
                                ),
                            });
                        }
                    }
                }
                Some(tok) => {
                    return Err(GradepsError::Syntax {
                        line: tok.line,
                        message: format!(
                            "expected '}}' or a nested block, found {}",
                            tok.kind.describe()
                        ),
                    });
                }
                None => return Err(self.eof("'}'")),
            }
        }

        Ok(BootstrapBlock {
            repositories: repositories.unwrap_or_default(),
            dependencies: dependencies.unwrap_or_default(),
        })
    }

    fn allprojects_block(&mut self, options: &LoadOptions) -> Result<ProjectDefaults, GradepsError> {
        self.expect(&TokenKind::LBrace)?;
        let mut repositories: Option<RepositoryList> = None;

        loop {
            match self.peek() {
                Some(Token {
                    kind: TokenKind::RBrace,
                    ..
                }) => {
                    self.pos += 1;
                    break;
                }
                Some(Token {
                    kind: TokenKind::Ident(name),
                    line,
                }) => {
                    let line = *line;
                    let name = name.clone();
                    self.pos += 1;
                    if name == "repositories" {
                        if repositories.is_some() {
                            return Err(GradepsError::Syntax {
                                line,
                                message: "block 'repositories' declared twice in allprojects"
                                    .to_string(),
                            });
                        }
                        repositories = Some(self.repositories_block("allprojects", options)?);
                    } else {
                        return Err(GradepsError::Syntax {
                            line,
                            message: format!(
                                "unsupported declaration '{name}' in allprojects block"
                            ),
                        });
                    }
                }
                Some(tok) => {
                    return Err(GradepsError::Syntax {
                        line: tok.line,
                        message: format!(
                            "expected '}}' or a 'repositories' block, found {}",
                            tok.kind.describe()
                        ),
                    });
                }
                None => return Err(self.eof("'}'")),
            }
        }

        Ok(ProjectDefaults {
            repositories: repositories.unwrap_or_default(),
        })
    }

    fn repositories_block(
        &mut self,
        list: &str,
        options: &LoadOptions,
    ) -> Result<RepositoryList, GradepsError> {
        self.expect(&TokenKind::LBrace)?;
        let mut entries: Vec<Repository> = Vec::new();

        loop {
            match self.peek() {
                Some(Token {
                    kind: TokenKind::RBrace,
                    ..
                }) => {
                    self.pos += 1;
                    break;
                }
                Some(Token {
                    kind: TokenKind::Ident(name),
                    line,
                }) => {
                    let line = *line;
                    let name = name.clone();
                    self.pos += 1;
                    if name == "maven" {
                        entries.push(self.maven_block()?);
                    } else {
                        self.expect(&TokenKind::LParen)?;
                        self.expect(&TokenKind::RParen)?;
                        let repo = Repository::from_shorthand(&name)
                            .ok_or(GradepsError::UnknownRepository { line, name })?;
                        entries.push(repo);
                    }
                }
                Some(tok) => {
                    return Err(GradepsError::Syntax {
                        line: tok.line,
                        message: format!(
                            "expected '}}' or a repository declaration, found {}",
                            tok.kind.describe()
                        ),
                    });
                }
                None => return Err(self.eof("'}'")),
            }
        }

        RepositoryList::build(list, entries, options.duplicates)
    }

    /// A custom host: `maven { url = "..." }` (the `=` is optional in the
    /// Groovy DSL).
    fn maven_block(&mut self) -> Result<Repository, GradepsError> {
        self.expect(&TokenKind::LBrace)?;
        self.expect_ident("url")?;
        if matches!(
            self.peek(),
            Some(Token {
                kind: TokenKind::Eq,
                ..
            })
        ) {
            self.pos += 1;
        }
        let url = self.expect_string("repository URL string")?;
        self.expect(&TokenKind::RBrace)?;
        Ok(Repository::Custom { url })
    }

    fn dependencies_block(&mut self) -> Result<DependencySpec, GradepsError> {
        self.expect(&TokenKind::LBrace)?;
        let mut deps: Vec<ClasspathDependency> = Vec::new();

        loop {
            match self.peek() {
                Some(Token {
                    kind: TokenKind::RBrace,
                    ..
                }) => {
                    self.pos += 1;
                    break;
                }
                Some(Token {
                    kind: TokenKind::Ident(name),
                    line,
                }) => {
                    let line = *line;
                    let name = name.clone();
                    self.pos += 1;
                    if name != "classpath" {
                        return Err(GradepsError::Syntax {
                            line,
                            message: format!(
                                "unsupported declaration '{name}' in dependencies block"
                            ),
                        });
                    }
                    // Groovy form: classpath 'g:a:v'
                    // Kotlin DSL form: classpath("g:a:v")
                    let coordinate = match self.peek() {
                        Some(Token {
                            kind: TokenKind::Str(value),
                            ..
                        }) => {
                            let value = value.clone();
                            self.pos += 1;
                            value
                        }
                        Some(Token {
                            kind: TokenKind::LParen,
                            ..
                        }) => {
                            self.pos += 1;
                            let value = self.expect_string("dependency coordinate string")?;
                            self.expect(&TokenKind::RParen)?;
                            value
                        }
                        _ => {
                            return Err(GradepsError::Syntax {
                                line,
                                message: "expected a coordinate string after 'classpath'"
                                    .to_string(),
                            });
                        }
                    };
                    let dep = ClasspathDependency::parse(&coordinate)
                        .map_err(|message| GradepsError::Syntax { line, message })?;
                    deps.push(dep);
                }
                Some(tok) => {
                    return Err(GradepsError::Syntax {
                        line: tok.line,
                        message: format!(
                            "expected '}}' or a classpath declaration, found {}",
                            tok.kind.describe()
                        ),
                    });
                }
                None => return Err(self.eof("'}'")),
            }
        }

        Ok(DependencySpec::new(deps))
    }
}
