use crate::{
    ast::{Block, Identifier, Statement},
    interpreter::{
        lexer::TokenKind,
        parser::core::{Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a single statement, dispatching on the current token.
    ///
    /// `let` and `return` introduce their dedicated forms; anything else
    /// is an expression statement. Returns `None` when the statement was
    /// malformed, in which case an error has been recorded.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur.kind {
            TokenKind::Let => self.parse_let(),
            TokenKind::Return => self.parse_return(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let <identifier> = <expression>;`.
    ///
    /// All three of the identifier, the `=`, and the terminating `;` are
    /// required; a missing one records an error and drops the statement.
    fn parse_let(&mut self) -> Option<Statement> {
        let token = self.cur.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }

        let name = Identifier { token: self.cur.clone(),
                                name:  self.cur.literal.clone(), };

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::Semicolon) {
            return None;
        }

        Some(Statement::Let { token, name, value })
    }

    /// Parses `return <expression>;`.
    fn parse_return(&mut self) -> Option<Statement> {
        let token = self.cur.clone();

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::Semicolon) {
            return None;
        }

        Some(Statement::Return { token, value })
    }

    /// Parses a bare expression in statement position.
    ///
    /// The trailing semicolon is optional here, which is what makes
    /// `fn(x) { x + 1 }` and REPL input pleasant to write.
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.cur.clone();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Expression { token, value })
    }

    /// Parses the statements of a `{ ... }` block.
    ///
    /// Called with the current token on `{`. Consumes statements until
    /// the closing brace; an unterminated block simply runs to the end of
    /// input.
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> Block {
        let token = self.cur.clone();
        let mut statements = Vec::new();

        self.next_token();

        while !self.cur_is(TokenKind::RBrace) && !self.cur_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        Block { token, statements }
    }
}
