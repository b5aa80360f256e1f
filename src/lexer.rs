use crate::ast::{Spanned, Token};

/// Character-level scanner turning source text into positioned tokens.
///
/// The lexer never fails: text it cannot make sense of becomes a
/// [`Token::Invalid`], and the parser reports it together with what it
/// expected at that point.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

pub fn is_word_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

pub fn is_word_continue(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Whether `text` scans as exactly one word token.
pub fn is_word(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some_and(is_word_start) && chars.all(is_word_continue)
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn text_from(&self, start: usize) -> String {
        self.input[start..self.position].iter().collect()
    }

    fn read_word(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if is_word_continue(ch) {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    /// Reads a double-quoted string. `""` stands for one quote; backslash
    /// escapes `\\`, `\"`, `\'`, `\n`, `\t` and `\r`. The string may not span
    /// lines.
    fn read_escaped_string(&mut self) -> Token {
        let start = self.position;
        let mut result = String::new();
        self.advance(); // Consume opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                '"' => {
                    if self.peek_char(1) == Some('"') {
                        result.push('"');
                        self.advance();
                        self.advance();
                    } else {
                        self.advance();
                        return Token::String(result);
                    }
                }
                '\\' => {
                    self.advance(); // Consume backslash
                    let escaped = match self.current_char() {
                        Some('n') => '\n',
                        Some('t') => '\t',
                        Some('r') => '\r',
                        Some(c @ ('"' | '\'' | '\\')) => c,
                        Some(c) if c != '\n' => {
                            self.advance();
                            return Token::Invalid(self.text_from(start));
                        }
                        _ => break,
                    };
                    result.push(escaped);
                    self.advance();
                }
                '\n' => break,
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        // Unterminated
        Token::Invalid(self.text_from(start))
    }

    /// Reads a single-quoted string with SQL rules: `''` stands for one
    /// quote and every other character, backslash and line breaks included,
    /// is taken as is.
    fn read_raw_string(&mut self) -> Token {
        let start = self.position;
        let mut result = String::new();
        self.advance(); // Consume opening quote

        while let Some(ch) = self.current_char() {
            if ch == '\'' {
                self.advance();
                if self.current_char() != Some('\'') {
                    return Token::String(result);
                }
            }
            result.push(ch);
            self.advance();
        }

        // Unterminated
        Token::Invalid(self.text_from(start))
    }

    fn read_number(&mut self) -> Token {
        let start = self.position;
        let mut is_float = false;

        if self.current_char() == Some('-') {
            self.advance();
        }

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                self.advance();
            } else if ch == '.'
                && !is_float
                && self.peek_char(1).is_some_and(|c| c.is_ascii_digit())
            {
                is_float = true;
                self.advance();
            } else {
                break;
            }
        }

        let number = self.text_from(start);
        if is_float {
            match number.parse::<f64>() {
                Ok(n) if n.is_finite() => Token::Float(n),
                _ => Token::Invalid(number),
            }
        } else {
            number
                .parse::<i64>()
                .map(Token::Integer)
                .unwrap_or(Token::Invalid(number))
        }
    }

    fn single(&mut self, token: Token) -> Token {
        self.advance();
        token
    }

    fn double(&mut self, token: Token) -> Token {
        self.advance();
        self.advance();
        token
    }

    pub fn next_token(&mut self) -> Spanned {
        self.skip_whitespace();
        let position = self.position;

        let token = match self.current_char() {
            None => Token::Eof,
            Some('(') => self.single(Token::LParen),
            Some(')') => self.single(Token::RParen),
            Some('=') => {
                if self.peek_char(1) == Some('=') {
                    self.double(Token::EqEq)
                } else {
                    self.single(Token::Eq)
                }
            }
            Some('!') => {
                if self.peek_char(1) == Some('=') {
                    self.double(Token::NotEq)
                } else {
                    self.single(Token::Invalid("!".to_string()))
                }
            }
            Some('<') => match self.peek_char(1) {
                Some('=') => self.double(Token::LtEq),
                Some('>') => self.double(Token::LtGt),
                _ => self.single(Token::Lt),
            },
            Some('>') => {
                if self.peek_char(1) == Some('=') {
                    self.double(Token::GtEq)
                } else {
                    self.single(Token::Gt)
                }
            }
            Some('"') => self.read_escaped_string(),
            Some('\'') => self.read_raw_string(),
            Some('-') => {
                if self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) {
                    self.read_number()
                } else {
                    self.single(Token::Invalid("-".to_string()))
                }
            }
            Some(ch) if ch.is_ascii_digit() => self.read_number(),
            Some(ch) if is_word_start(ch) => Token::from_word(self.read_word()),
            Some(ch) => self.single(Token::Invalid(ch.to_string())),
        };

        log::trace!("token {:?} at {}", token, position);
        Spanned { token, position }
    }

    /// Scans the whole input; the last element is always [`Token::Eof`].
    pub fn tokenize(mut self) -> Vec<Spanned> {
        let mut tokens = Vec::new();
        loop {
            let spanned = self.next_token();
            let done = spanned.token == Token::Eof;
            tokens.push(spanned);
            if done {
                return tokens;
            }
        }
    }
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("and or not is true false null");
    assert_eq!(lexer.next_token().token, Token::And);
    assert_eq!(lexer.next_token().token, Token::Or);
    assert_eq!(lexer.next_token().token, Token::Not);
    assert_eq!(lexer.next_token().token, Token::Is);
    assert_eq!(lexer.next_token().token, Token::Boolean(true));
    assert_eq!(lexer.next_token().token, Token::Boolean(false));
    assert_eq!(lexer.next_token().token, Token::Null);
    assert_eq!(lexer.next_token().token, Token::Eof);

    let mut lexer = Lexer::new("None True False");
    assert_eq!(lexer.next_token().token, Token::Null);
    assert_eq!(lexer.next_token().token, Token::Boolean(true));
    assert_eq!(lexer.next_token().token, Token::Boolean(false));
}

#[test]
fn test_comparison_positions() {
    let mut lexer = Lexer::new("price >= -1.5");
    assert_eq!(
        lexer.next_token(),
        Spanned {
            token: Token::Word("price".to_string()),
            position: 0
        }
    );
    assert_eq!(
        lexer.next_token(),
        Spanned {
            token: Token::GtEq,
            position: 6
        }
    );
    assert_eq!(
        lexer.next_token(),
        Spanned {
            token: Token::Float(-1.5),
            position: 9
        }
    );
}

#[test]
fn test_quote_styles() {
    let mut lexer = Lexer::new(r#""a\tb" 'a\tb'"#);
    assert_eq!(lexer.next_token().token, Token::String("a\tb".into()));
    assert_eq!(lexer.next_token().token, Token::String(r"a\tb".into()));
}

#[test]
fn test_is_word() {
    assert!(is_word("foo_2"));
    assert!(is_word("_x"));
    assert!(!is_word("2x"));
    assert!(!is_word("a b"));
    assert!(!is_word(""));
}
