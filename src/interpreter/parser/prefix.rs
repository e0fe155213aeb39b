use std::rc::Rc;

use crate::{
    ast::{Expression, Identifier, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Dispatches the current token to its prefix-position handler.
    ///
    /// This is the entry half of the Pratt loop: everything an expression
    /// can start with is handled here. A token with no handler records
    /// the "no prefix parse function" error and yields `None`.
    pub(in crate::interpreter::parser) fn parse_prefix_position(&mut self) -> Option<Expression> {
        match self.cur.kind {
            TokenKind::Ident => Some(Expression::Ident(self.parse_identifier())),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::Str => Some(self.parse_string_literal()),
            TokenKind::True | TokenKind::False => Some(self.parse_boolean_literal()),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_operator(),
            TokenKind::LParen => self.parse_grouped(),
            TokenKind::If => self.parse_if(),
            TokenKind::Function => self.parse_function_literal(),
            TokenKind::LBracket => self.parse_array_literal(),
            TokenKind::LBrace => self.parse_hash_literal(),
            kind => {
                self.errors.push(ParseError::NoPrefixParseFn { kind });
                None
            },
        }
    }

    fn parse_identifier(&self) -> Identifier {
        Identifier { token: self.cur.clone(),
                     name:  self.cur.literal.clone(), }
    }

    /// Parses an integer literal, recording an error when the digits do
    /// not fit in an `i64`.
    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.cur.clone();

        match token.literal.parse() {
            Ok(value) => Some(Expression::IntLit { token, value }),
            Err(_) => {
                self.errors
                    .push(ParseError::InvalidIntegerLiteral { literal: token.literal });
                None
            },
        }
    }

    fn parse_string_literal(&self) -> Expression {
        Expression::StringLit { token: self.cur.clone(),
                                value: self.cur.literal.clone(), }
    }

    fn parse_boolean_literal(&self) -> Expression {
        Expression::BoolLit { token: self.cur.clone(),
                              value: self.cur_is(TokenKind::True), }
    }

    /// Parses `!<operand>` or `-<operand>`.
    ///
    /// The operand binds at [`Precedence::Prefix`], below indexing, so
    /// `-a[2]` negates the element rather than indexing a negation.
    fn parse_prefix_operator(&mut self) -> Option<Expression> {
        let token = self.cur.clone();
        let operator = match token.kind {
            TokenKind::Bang => PrefixOperator::Bang,
            _ => PrefixOperator::Minus,
        };

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix { token,
                                  operator,
                                  right: Box::new(right) })
    }

    /// Parses a parenthesized expression, re-entering at the lowest
    /// precedence.
    fn parse_grouped(&mut self) -> Option<Expression> {
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(expression)
    }

    /// Parses `if (<condition>) { <consequence> }` with an optional
    /// `else { <alternative> }`.
    fn parse_if(&mut self) -> Option<Expression> {
        let token = self.cur.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }

        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }

        let consequence = self.parse_block();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();

            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }

            Some(self.parse_block())
        } else {
            None
        };

        Some(Expression::If { token,
                              condition: Box::new(condition),
                              consequence,
                              alternative })
    }

    /// Parses `fn(<parameters>) { <body> }`.
    ///
    /// The body goes behind a shared pointer immediately; closures
    /// evaluated from this literal keep it alive without copying it.
    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.cur.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }

        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }

        let body = Rc::new(self.parse_block());

        Some(Expression::FnLit { token,
                                 parameters,
                                 body })
    }

    /// Parses the comma-separated parameter names of a function literal,
    /// up to and including the closing `)`.
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Some(parameters);
        }

        self.next_token();
        parameters.push(self.parse_identifier());

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            parameters.push(self.parse_identifier());
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }

        Some(parameters)
    }

    fn parse_array_literal(&mut self) -> Option<Expression> {
        let token = self.cur.clone();
        let elements = self.parse_expression_list(TokenKind::RBracket)?;

        Some(Expression::ArrayLit { token, elements })
    }

    /// Parses `{<key>: <value>, ...}`.
    ///
    /// Keys and values are full expressions; whether a key is actually
    /// hashable is a runtime question. `{}` is an empty hash.
    fn parse_hash_literal(&mut self) -> Option<Expression> {
        let token = self.cur.clone();
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(TokenKind::Colon) {
                return None;
            }

            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek_is(TokenKind::RBrace) && !self.expect_peek(TokenKind::Comma) {
                return None;
            }
        }

        if !self.expect_peek(TokenKind::RBrace) {
            return None;
        }

        Some(Expression::HashLit { token, pairs })
    }
}
