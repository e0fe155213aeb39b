use crate::{
    ast::{Expression, InfixOperator},
    interpreter::{
        lexer::TokenKind,
        parser::core::{Parser, Precedence},
    },
};

/// Maps an operator token to its infix operator.
///
/// Only called for kinds the Pratt loop already matched, so the mapping
/// is total for its callers.
const fn infix_operator_of(kind: TokenKind) -> InfixOperator {
    match kind {
        TokenKind::Plus => InfixOperator::Plus,
        TokenKind::Minus => InfixOperator::Minus,
        TokenKind::Asterisk => InfixOperator::Asterisk,
        TokenKind::Slash => InfixOperator::Slash,
        TokenKind::Lt => InfixOperator::Lt,
        TokenKind::Gt => InfixOperator::Gt,
        TokenKind::Eq => InfixOperator::Eq,
        _ => InfixOperator::NotEq,
    }
}

impl Parser<'_> {
    /// Parses the right-hand side of a binary operator.
    ///
    /// Called with the current token on the operator. The right operand
    /// is parsed at the operator's own precedence, which is what makes
    /// same-precedence operator chains left-associative.
    pub(in crate::interpreter::parser) fn parse_infix_operator(&mut self,
                                                               left: Expression)
                                                               -> Option<Expression> {
        let token = self.cur.clone();
        let operator = infix_operator_of(token.kind);
        let precedence = self.cur_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix { token,
                                 operator,
                                 left: Box::new(left),
                                 right: Box::new(right) })
    }

    /// Parses the argument list of a call expression.
    ///
    /// Called with the current token on the `(` that follows the callee.
    pub(in crate::interpreter::parser) fn parse_call(&mut self,
                                                     function: Expression)
                                                     -> Option<Expression> {
        let token = self.cur.clone();
        let arguments = self.parse_expression_list(TokenKind::RParen)?;

        Some(Expression::Call { token,
                                function: Box::new(function),
                                arguments })
    }

    /// Parses the bracketed index that follows an expression.
    pub(in crate::interpreter::parser) fn parse_index(&mut self,
                                                      left: Expression)
                                                      -> Option<Expression> {
        let token = self.cur.clone();

        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RBracket) {
            return None;
        }

        Some(Expression::Index { token,
                                 left: Box::new(left),
                                 index: Box::new(index) })
    }

    /// Parses a comma-separated expression list up to and including the
    /// closing token.
    ///
    /// Shared by call argument lists (`closing` is `)`) and array
    /// literals (`closing` is `]`). An immediately encountered closing
    /// token produces an empty list.
    pub(in crate::interpreter::parser) fn parse_expression_list(&mut self,
                                                                closing: TokenKind)
                                                                -> Option<Vec<Expression>> {
        let mut items = Vec::new();

        if self.peek_is(closing) {
            self.next_token();
            return Some(items);
        }

        self.next_token();
        items.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(closing) {
            return None;
        }

        Some(items)
    }
}
