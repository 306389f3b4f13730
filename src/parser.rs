use crate::{
    ast::{BinaryOp, Formula},
    error::Error,
    token::{tokenize, Token, TokenKind},
};

/// Parses a formula string into an AST.
///
/// Precedence, low to high: biconditional, implication, or, xor, and, not.
/// Implication is right-associative, the other binary connectives are
/// left-associative, and parenthesized subexpressions re-enter the grammar
/// at the lowest level.
pub fn parse(input: &str) -> Result<Formula, Error> {
    let tokens = tokenize(input)?;
    Parser { tokens, pos: 0 }.parse()
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        self.pos += 1;
        token
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, Error> {
        if self.peek().kind != kind {
            return Err(Error::ExpectedToken {
                expected: kind,
                found: self.peek().clone(),
            });
        }

        Ok(self.advance())
    }

    fn parse(mut self) -> Result<Formula, Error> {
        let formula = self.biconditional()?;
        self.expect(TokenKind::End)?;
        Ok(formula)
    }

    fn biconditional(&mut self) -> Result<Formula, Error> {
        let mut left = self.implication()?;

        while self.peek().kind == TokenKind::Biconditional {
            self.advance();
            let right = self.implication()?;
            left = binary(BinaryOp::Biconditional, left, right);
        }

        Ok(left)
    }

    fn implication(&mut self) -> Result<Formula, Error> {
        let left = self.or()?;

        // Right-associative: the tail re-enters this rule.
        if self.peek().kind == TokenKind::Implies {
            self.advance();
            let right = self.implication()?;
            return Ok(binary(BinaryOp::Implies, left, right));
        }

        Ok(left)
    }

    fn or(&mut self) -> Result<Formula, Error> {
        let mut left = self.xor()?;

        while self.peek().kind == TokenKind::Or {
            self.advance();
            let right = self.xor()?;
            left = binary(BinaryOp::Or, left, right);
        }

        Ok(left)
    }

    fn xor(&mut self) -> Result<Formula, Error> {
        let mut left = self.and()?;

        while self.peek().kind == TokenKind::Xor {
            self.advance();
            let right = self.and()?;
            left = binary(BinaryOp::Xor, left, right);
        }

        Ok(left)
    }

    fn and(&mut self) -> Result<Formula, Error> {
        let mut left = self.not()?;

        while self.peek().kind == TokenKind::And {
            self.advance();
            let right = self.not()?;
            left = binary(BinaryOp::And, left, right);
        }

        Ok(left)
    }

    fn not(&mut self) -> Result<Formula, Error> {
        if self.peek().kind == TokenKind::Not {
            self.advance();
            let operand = self.not()?;
            return Ok(Formula::Not(Box::new(operand)));
        }

        self.primary()
    }

    fn primary(&mut self) -> Result<Formula, Error> {
        match self.peek().kind {
            TokenKind::Variable => {
                let token = self.advance();
                Ok(Formula::Variable(token.text))
            }
            TokenKind::True => {
                self.advance();
                Ok(Formula::Literal(true))
            }
            TokenKind::False => {
                self.advance();
                Ok(Formula::Literal(false))
            }
            TokenKind::LParen => {
                self.advance();
                let formula = self.biconditional()?;
                self.expect(TokenKind::RParen)?;
                Ok(formula)
            }
            _ => Err(Error::UnexpectedToken {
                found: self.peek().clone(),
            }),
        }
    }
}

fn binary(op: BinaryOp, left: Formula, right: Formula) -> Formula {
    Formula::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}
