/*!
Parsing formula text.

# Grammar

- Variables are maximal runs of alphabetic characters.
- `~` and `-` negate, and bind tighter than any binary operator.
- `&` conjoins, `|` disjoins, `>` implies (right associative, weakest).
- Parentheses group, whitespace is ignored.

# Validation

Validation is two-phase, ahead of parsing:

1. A bracket-balance scan: an integer counter over the text which must never go negative and
   must be zero at the end.
2. Token-sequence validation: no adjacent binary operators, no operator at the end of the
   text, and every operand position filled by a variable, a negation, or a bracketed group.

A validated token sequence is then consumed by recursive descent, one function per
precedence level.
*/

use crate::{
    misc::log::targets::{self},
    structures::formula::Formula,
    types::err::ParseError,
};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Variable(String),
    Not,
    And,
    Or,
    Implies,
    Open,
    Close,
}

impl Formula {
    /// Parses formula text to a formula.
    ///
    /// ```rust
    /// # use entrench::structures::formula::Formula;
    /// # use entrench::types::err::ParseError;
    /// assert!(Formula::parse("-a & (b | c) > d").is_ok());
    /// assert_eq!(Formula::parse("-(a && b) | c"), Err(ParseError::MisplacedOperator));
    /// assert_eq!(Formula::parse("-a & -b | c)"), Err(ParseError::UnbalancedBrackets));
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        if !brackets_balanced(text) {
            return Err(ParseError::UnbalancedBrackets);
        }

        let tokens = tokenize(text)?;
        validate(&tokens)?;

        let mut parser = Parser { tokens: &tokens, index: 0 };
        let formula = parser.implication()?;

        if parser.index != tokens.len() {
            return Err(ParseError::UnexpectedToken);
        }

        log::trace!(target: targets::PARSE, "\"{text}\" parsed as {formula}");
        Ok(formula)
    }
}

impl std::str::FromStr for Formula {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Formula::parse(text)
    }
}

/// The bracket-balance scan: never negative, zero at the end.
fn brackets_balanced(text: &str) -> bool {
    let mut balance: isize = 0;
    for character in text.chars() {
        match character {
            '(' => balance += 1,
            ')' => balance -= 1,
            _ => {}
        }
        if balance < 0 {
            return false;
        }
    }
    balance == 0
}

fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut characters = text.chars().peekable();

    while let Some(character) = characters.next() {
        match character {
            c if c.is_whitespace() => {}

            c if c.is_alphabetic() => {
                let mut name = String::from(c);
                while let Some(&next) = characters.peek() {
                    if !next.is_alphabetic() {
                        break;
                    }
                    name.push(next);
                    characters.next();
                }
                tokens.push(Token::Variable(name));
            }

            '~' | '-' => tokens.push(Token::Not),
            '&' => tokens.push(Token::And),
            '|' => tokens.push(Token::Or),
            '>' => tokens.push(Token::Implies),
            '(' => tokens.push(Token::Open),
            ')' => tokens.push(Token::Close),

            unexpected => return Err(ParseError::UnexpectedCharacter(unexpected)),
        }
    }

    Ok(tokens)
}

/// Token-sequence validation.
///
/// Examines the first and last tokens, and every adjacent pair.
fn validate(tokens: &[Token]) -> Result<(), ParseError> {
    use Token::*;

    let Some(first) = tokens.first() else {
        return Err(ParseError::Empty);
    };

    if matches!(first, And | Or | Implies) {
        return Err(ParseError::MisplacedOperator);
    }

    if matches!(tokens.last(), Some(And | Or | Implies | Not)) {
        return Err(ParseError::TrailingOperator);
    }

    for pair in tokens.windows(2) {
        match (&pair[0], &pair[1]) {
            (And | Or | Implies | Not | Open, And | Or | Implies) => {
                return Err(ParseError::MisplacedOperator);
            }

            (And | Or | Implies | Not, Close) => return Err(ParseError::TrailingOperator),

            (Variable(_) | Close, Variable(_) | Not | Open) => {
                return Err(ParseError::MissingConnective);
            }

            (Open, Close) => return Err(ParseError::EmptyBrackets),

            _ => {}
        }
    }

    Ok(())
}

struct Parser<'t> {
    tokens: &'t [Token],
    index: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.index);
        self.index += 1;
        token
    }

    // implication := disjunction ('>' implication)?
    fn implication(&mut self) -> Result<Formula, ParseError> {
        let left = self.disjunction()?;
        match self.peek() {
            Some(Token::Implies) => {
                self.index += 1;
                let right = self.implication()?;
                Ok(Formula::implies(left, right))
            }
            _ => Ok(left),
        }
    }

    // disjunction := conjunction ('|' conjunction)*
    fn disjunction(&mut self) -> Result<Formula, ParseError> {
        let mut formula = self.conjunction()?;
        while self.peek() == Some(&Token::Or) {
            self.index += 1;
            let right = self.conjunction()?;
            formula = Formula::or(formula, right);
        }
        Ok(formula)
    }

    // conjunction := negation ('&' negation)*
    fn conjunction(&mut self) -> Result<Formula, ParseError> {
        let mut formula = self.negation()?;
        while self.peek() == Some(&Token::And) {
            self.index += 1;
            let right = self.negation()?;
            formula = Formula::and(formula, right);
        }
        Ok(formula)
    }

    // negation := ('~' | '-') negation | atom
    fn negation(&mut self) -> Result<Formula, ParseError> {
        match self.peek() {
            Some(Token::Not) => {
                self.index += 1;
                Ok(Formula::not(self.negation()?))
            }
            _ => self.atom(),
        }
    }

    // atom := variable | '(' implication ')'
    fn atom(&mut self) -> Result<Formula, ParseError> {
        match self.advance() {
            Some(Token::Variable(name)) => Ok(Formula::variable(name)),

            Some(Token::Open) => {
                let inner = self.implication()?;
                match self.advance() {
                    Some(Token::Close) => Ok(inner),
                    _ => Err(ParseError::UnexpectedToken),
                }
            }

            _ => Err(ParseError::UnexpectedToken),
        }
    }
}
