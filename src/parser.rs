use std::fmt;
use std::fmt::Formatter;
use std::mem;

use log::trace;

use crate::ast::{Expression, Program, Statement};
use crate::lexer::Lexer;
use crate::token::{Token, TokenType};

/// The precedence ladder, lowest binding first. Infix parsing recurses at
/// the operator's own level, so an equal-precedence neighbour fails the
/// strict less-than test and the operator chain stays left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest,
    Equals,      // ==, !=
    LessGreater, // <, >
    Sum,         // +, -
    Product,     // *, /
    Prefix,      // -x, !x
    Call,        // add(x)
    Index,       // array[0]
}

impl fmt::Display for Precedence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

fn token_precedence(token: TokenType) -> Precedence {
    match token {
        TokenType::Eq | TokenType::NotEq => Precedence::Equals,
        TokenType::Lt | TokenType::Gt => Precedence::LessGreater,
        TokenType::Plus | TokenType::Minus => Precedence::Sum,
        TokenType::Asterisk | TokenType::Slash => Precedence::Product,
        TokenType::Lparen => Precedence::Call,
        TokenType::Lbracket => Precedence::Index,
        _ => Precedence::Lowest,
    }
}

/// Pratt parser over the lexer's token stream. Parse errors are collected
/// rather than aborting; callers must check `errors()` before trusting the
/// returned program.
pub struct Parser {
    l: Lexer,
    errors: Vec<String>,

    cur_token: Token,
    peek_token: Token,
}

impl Parser {
    pub fn new(mut l: Lexer) -> Self {
        let cur_token = l.next_token();
        let peek_token = l.next_token();

        Parser {
            l,
            errors: Vec::new(),
            cur_token,
            peek_token,
        }
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    fn next_token(&mut self) {
        self.cur_token = mem::replace(&mut self.peek_token, self.l.next_token());
    }

    fn cur_token_is(&self, t: TokenType) -> bool {
        self.cur_token.token_type == t
    }

    fn peek_token_is(&self, t: TokenType) -> bool {
        self.peek_token.token_type == t
    }

    fn expect_peek(&mut self, t: TokenType) -> bool {
        if self.peek_token_is(t) {
            self.next_token();
            true
        } else {
            self.peek_error(t);
            false
        }
    }

    fn peek_error(&mut self, t: TokenType) {
        self.errors.push(format!(
            "expected next token to be {}, got {} instead",
            t, self.peek_token.token_type
        ));
    }

    fn no_prefix_parse_fn_error(&mut self, t: TokenType) {
        self.errors
            .push(format!("no prefix parse function for {} found", t));
    }

    fn peek_precedence(&self) -> Precedence {
        token_precedence(self.peek_token.token_type)
    }

    fn cur_precedence(&self) -> Precedence {
        token_precedence(self.cur_token.token_type)
    }

    pub fn parse_program(&mut self) -> Program {
        let mut program = Program {
            statements: Vec::new(),
        };

        while !self.cur_token_is(TokenType::Eof) {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
            }
            self.next_token();
        }
        program
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        trace!("parse_statement: {}", self.cur_token);
        match self.cur_token.token_type {
            TokenType::Let => self.parse_let_statement(),
            TokenType::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Statement> {
        if !self.expect_peek(TokenType::Ident) {
            return None;
        }
        let name = self.cur_token.literal.clone();

        if !self.expect_peek(TokenType::Assign) {
            return None;
        }
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenType::Semicolon) {
            self.next_token();
        }
        Some(Statement::Let { name, value })
    }

    fn parse_return_statement(&mut self) -> Option<Statement> {
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenType::Semicolon) {
            self.next_token();
        }
        Some(Statement::Return(value))
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenType::Semicolon) {
            self.next_token();
        }
        Some(Statement::Expression(expression))
    }

    // Every sub-parser enters with cur_token on the first token of its
    // construct and leaves with cur_token on the last one.
    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        trace!("parse_expression({}): {}", precedence, self.cur_token);

        let mut left = match self.cur_token.token_type {
            TokenType::Ident => self.parse_identifier(),
            TokenType::Int => self.parse_integer_literal(),
            TokenType::String => self.parse_string_literal(),
            TokenType::True | TokenType::False => self.parse_boolean(),
            TokenType::Bang | TokenType::Minus => self.parse_prefix_expression(),
            TokenType::Lparen => self.parse_grouped_expression(),
            TokenType::Lbracket => self.parse_array_literal(),
            TokenType::Lbrace => self.parse_hash_literal(),
            TokenType::If => self.parse_if_expression(),
            TokenType::Function => self.parse_function_literal(),
            other => {
                self.no_prefix_parse_fn_error(other);
                None
            }
        }?;

        while !self.peek_token_is(TokenType::Semicolon) && precedence < self.peek_precedence() {
            left = match self.peek_token.token_type {
                TokenType::Plus
                | TokenType::Minus
                | TokenType::Asterisk
                | TokenType::Slash
                | TokenType::Eq
                | TokenType::NotEq
                | TokenType::Lt
                | TokenType::Gt => {
                    self.next_token();
                    self.parse_infix_expression(left)?
                }
                TokenType::Lparen => {
                    self.next_token();
                    self.parse_call_expression(left)?
                }
                TokenType::Lbracket => {
                    self.next_token();
                    self.parse_index_expression(left)?
                }
                _ => return Some(left),
            };
        }
        Some(left)
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(self.cur_token.literal.clone()))
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        match self.cur_token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::Integer(value)),
            Err(_) => {
                self.errors.push(format!(
                    "could not parse {:?} as integer",
                    self.cur_token.literal
                ));
                None
            }
        }
    }

    fn parse_string_literal(&mut self) -> Option<Expression> {
        Some(Expression::Str(self.cur_token.literal.clone()))
    }

    fn parse_boolean(&mut self) -> Option<Expression> {
        Some(Expression::Boolean(self.cur_token_is(TokenType::True)))
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let operator = self.cur_token.literal.clone();
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expression::Prefix {
            operator,
            right: Box::new(right),
        })
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let operator = self.cur_token.literal.clone();
        let precedence = self.cur_precedence();
        self.next_token();
        let right = self.parse_expression(precedence)?;
        Some(Expression::Infix {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let exp = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenType::Rparen) {
            return None;
        }
        Some(exp)
    }

    fn parse_if_expression(&mut self) -> Option<Expression> {
        if !self.expect_peek(TokenType::Lparen) {
            return None;
        }
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenType::Rparen) {
            return None;
        }
        if !self.expect_peek(TokenType::Lbrace) {
            return None;
        }
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_token_is(TokenType::Else) {
            self.next_token();
            if !self.expect_peek(TokenType::Lbrace) {
                return None;
            }
            Some(Box::new(self.parse_block_statement()))
        } else {
            None
        };

        Some(Expression::If {
            condition: Box::new(condition),
            consequence: Box::new(consequence),
            alternative,
        })
    }

    fn parse_block_statement(&mut self) -> Statement {
        let mut statements = Vec::new();

        self.next_token();
        while !self.cur_token_is(TokenType::Rbrace) && !self.cur_token_is(TokenType::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.next_token();
        }
        Statement::Block(statements)
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        if !self.expect_peek(TokenType::Lparen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenType::Lbrace) {
            return None;
        }
        let body = self.parse_block_statement();

        Some(Expression::Function {
            parameters,
            body: Box::new(body),
        })
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_token_is(TokenType::Rparen) {
            self.next_token();
            return Some(parameters);
        }
        self.next_token();

        parameters.push(self.cur_token.literal.clone());
        while self.peek_token_is(TokenType::Comma) {
            self.next_token();
            self.next_token();
            parameters.push(self.cur_token.literal.clone());
        }

        if !self.expect_peek(TokenType::Rparen) {
            return None;
        }
        Some(parameters)
    }

    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let arguments = self.parse_expression_list(TokenType::Rparen)?;
        Some(Expression::Call {
            function: Box::new(function),
            arguments,
        })
    }

    fn parse_expression_list(&mut self, end: TokenType) -> Option<Vec<Expression>> {
        let mut list = Vec::new();

        if self.peek_token_is(end) {
            self.next_token();
            return Some(list);
        }
        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token_is(TokenType::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }
        Some(list)
    }

    fn parse_array_literal(&mut self) -> Option<Expression> {
        let elements = self.parse_expression_list(TokenType::Rbracket)?;
        Some(Expression::Array(elements))
    }

    fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenType::Rbracket) {
            return None;
        }
        Some(Expression::Index {
            left: Box::new(left),
            index: Box::new(index),
        })
    }

    fn parse_hash_literal(&mut self) -> Option<Expression> {
        let mut pairs = Vec::new();

        while !self.peek_token_is(TokenType::Rbrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(TokenType::Colon) {
                return None;
            }
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek_token_is(TokenType::Rbrace) && !self.expect_peek(TokenType::Comma) {
                return None;
            }
        }

        if !self.expect_peek(TokenType::Rbrace) {
            return None;
        }
        Some(Expression::Hash(pairs))
    }
}

#[cfg(test)]
mod test {
    use crate::ast::{Expression, Statement};
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn parse(input: &str) -> crate::ast::Program {
        let l = Lexer::new(input);
        let mut p = Parser::new(l);
        let program = p.parse_program();
        assert_eq!(p.errors(), &[] as &[String], "input: {}", input);
        program
    }

    fn parse_errors(input: &str) -> Vec<String> {
        let l = Lexer::new(input);
        let mut p = Parser::new(l);
        p.parse_program();
        p.errors().to_vec()
    }

    fn ident(name: &str) -> Expression {
        Expression::Identifier(name.to_string())
    }

    fn infix(left: Expression, operator: &str, right: Expression) -> Expression {
        Expression::Infix {
            operator: operator.to_string(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[test]
    fn test_let_statements() {
        struct Test<'a> {
            input: &'a str,
            exp_name: &'a str,
            exp_value: Expression,
        }
        let tests = vec![
            Test {
                input: "let x = 5;",
                exp_name: "x",
                exp_value: Expression::Integer(5),
            },
            Test {
                input: "let y = true;",
                exp_name: "y",
                exp_value: Expression::Boolean(true),
            },
            Test {
                input: "let foobar = y;",
                exp_name: "foobar",
                exp_value: ident("y"),
            },
        ];

        for test in tests {
            let program = parse(test.input);
            assert_eq!(program.statements.len(), 1);

            match &program.statements[0] {
                Statement::Let { name, value } => {
                    assert_eq!(name, test.exp_name);
                    assert_eq!(value, &test.exp_value);
                }
                other => panic!("not a let statement: {}", other),
            }
        }
    }

    #[test]
    fn test_let_statement_errors() {
        struct Test<'a> {
            input: &'a str,
            exp_error: &'a str,
        }
        let tests = vec![
            Test {
                input: "let x 5;",
                exp_error: "expected next token to be =, got INT instead",
            },
            Test {
                input: "let = 10;",
                exp_error: "expected next token to be IDENT, got = instead",
            },
            Test {
                input: "let 838383;",
                exp_error: "expected next token to be IDENT, got INT instead",
            },
        ];

        for test in tests {
            let errors = parse_errors(test.input);
            assert!(
                errors.iter().any(|e| e == test.exp_error),
                "input {:?}: expected error {:?} in {:?}",
                test.input,
                test.exp_error,
                errors
            );
        }
    }

    #[test]
    fn test_return_statements() {
        let tests = vec![
            ("return 5;", Expression::Integer(5)),
            ("return true;", Expression::Boolean(true)),
            ("return foobar;", ident("foobar")),
        ];

        for (input, expected) in tests {
            let program = parse(input);
            assert_eq!(program.statements.len(), 1);

            match &program.statements[0] {
                Statement::Return(value) => assert_eq!(value, &expected),
                other => panic!("not a return statement: {}", other),
            }
        }
    }

    #[test]
    fn test_integer_literal_out_of_range() {
        let errors = parse_errors("9223372036854775808;");
        assert_eq!(
            errors,
            vec!["could not parse \"9223372036854775808\" as integer".to_string()]
        );
    }

    #[test]
    fn test_no_prefix_parse_fn_error() {
        let errors = parse_errors(")");
        assert_eq!(
            errors,
            vec!["no prefix parse function for ) found".to_string()]
        );

        // unknown bytes surface as ILLEGAL tokens and are rejected here
        let errors = parse_errors("@");
        assert_eq!(
            errors,
            vec!["no prefix parse function for ILLEGAL found".to_string()]
        );
    }

    #[test]
    fn test_prefix_expressions() {
        struct Test<'a> {
            input: &'a str,
            exp_operator: &'a str,
            exp_right: Expression,
        }
        let tests = vec![
            Test {
                input: "!5;",
                exp_operator: "!",
                exp_right: Expression::Integer(5),
            },
            Test {
                input: "-15;",
                exp_operator: "-",
                exp_right: Expression::Integer(15),
            },
            Test {
                input: "!true;",
                exp_operator: "!",
                exp_right: Expression::Boolean(true),
            },
        ];

        for test in tests {
            let program = parse(test.input);
            assert_eq!(program.statements.len(), 1);

            match &program.statements[0] {
                Statement::Expression(Expression::Prefix { operator, right }) => {
                    assert_eq!(operator, test.exp_operator);
                    assert_eq!(right.as_ref(), &test.exp_right);
                }
                other => panic!("not a prefix expression: {}", other),
            }
        }
    }

    #[test]
    fn test_infix_expressions() {
        let tests = vec![
            ("5 + 6;", Expression::Integer(5), "+", Expression::Integer(6)),
            ("5 - 6;", Expression::Integer(5), "-", Expression::Integer(6)),
            ("5 * 6;", Expression::Integer(5), "*", Expression::Integer(6)),
            ("5 / 6;", Expression::Integer(5), "/", Expression::Integer(6)),
            ("5 < 6;", Expression::Integer(5), "<", Expression::Integer(6)),
            ("5 > 6;", Expression::Integer(5), ">", Expression::Integer(6)),
            ("5 == 6;", Expression::Integer(5), "==", Expression::Integer(6)),
            ("5 != 6;", Expression::Integer(5), "!=", Expression::Integer(6)),
            ("foo != bar", ident("foo"), "!=", ident("bar")),
            (
                "true == true",
                Expression::Boolean(true),
                "==",
                Expression::Boolean(true),
            ),
        ];

        for (input, exp_left, exp_op, exp_right) in tests {
            let program = parse(input);
            assert_eq!(program.statements.len(), 1);

            match &program.statements[0] {
                Statement::Expression(Expression::Infix {
                    operator,
                    left,
                    right,
                }) => {
                    assert_eq!(left.as_ref(), &exp_left);
                    assert_eq!(operator, exp_op);
                    assert_eq!(right.as_ref(), &exp_right);
                }
                other => panic!("not an infix expression: {}", other),
            }
        }
    }

    #[test]
    fn test_operator_precedence() {
        let tests = vec![
            ("-a * b", "((-a) * b)"),
            ("!-a", "(!(-a))"),
            ("a + b + c", "((a + b) + c)"),
            ("a + b - c", "((a + b) - c)"),
            ("a * b * c", "((a * b) * c)"),
            ("a * b / c", "((a * b) / c)"),
            ("a + b / c", "(a + (b / c))"),
            ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
            ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
            ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
            ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
            (
                "3 + 4 * 5 == 3 * 1 + 4 * 5",
                "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
            ),
            ("true", "true"),
            ("false", "false"),
            ("3 > 5 == false", "((3 > 5) == false)"),
            ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
            ("(5 + 5) * 2", "((5 + 5) * 2)"),
            ("2 / (5 + 5)", "(2 / (5 + 5))"),
            ("-(5 + 5)", "(-(5 + 5))"),
            ("!(true == true)", "(!(true == true))"),
            ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
            (
                "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
            ),
            ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
            (
                "a * [1, 2, 3, 4][b * c] * d",
                "((a * ([1, 2, 3, 4][(b * c)])) * d)",
            ),
            (
                "add(a * b[2], b[1], 2 * [1, 2][1])",
                "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))",
            ),
        ];

        for (input, expected) in tests {
            let program = parse(input);
            assert_eq!(program.to_string(), expected, "input: {}", input);
        }
    }

    #[test]
    fn test_if_expression() {
        let program = parse("if (x < y) { x }");
        assert_eq!(program.statements.len(), 1);

        let expected = Expression::If {
            condition: Box::new(infix(ident("x"), "<", ident("y"))),
            consequence: Box::new(Statement::Block(vec![Statement::Expression(ident("x"))])),
            alternative: None,
        };
        assert_eq!(program.statements[0], Statement::Expression(expected));
    }

    #[test]
    fn test_if_else_expression() {
        let program = parse("if (x < y) { x } else { y }");
        assert_eq!(program.statements.len(), 1);

        let expected = Expression::If {
            condition: Box::new(infix(ident("x"), "<", ident("y"))),
            consequence: Box::new(Statement::Block(vec![Statement::Expression(ident("x"))])),
            alternative: Some(Box::new(Statement::Block(vec![Statement::Expression(
                ident("y"),
            )]))),
        };
        assert_eq!(program.statements[0], Statement::Expression(expected));
    }

    #[test]
    fn test_function_literal() {
        let program = parse("fn(x, y) { x + y; }");
        assert_eq!(program.statements.len(), 1);

        let expected = Expression::Function {
            parameters: vec!["x".to_string(), "y".to_string()],
            body: Box::new(Statement::Block(vec![Statement::Expression(infix(
                ident("x"),
                "+",
                ident("y"),
            ))])),
        };
        assert_eq!(program.statements[0], Statement::Expression(expected));
    }

    #[test]
    fn test_function_parameters() {
        let tests: Vec<(&str, Vec<&str>)> = vec![
            ("fn() {};", vec![]),
            ("fn(x) {};", vec!["x"]),
            ("fn(x, y, z) {};", vec!["x", "y", "z"]),
        ];

        for (input, expected) in tests {
            let program = parse(input);
            match &program.statements[0] {
                Statement::Expression(Expression::Function { parameters, .. }) => {
                    let expected: Vec<String> =
                        expected.iter().map(|s| s.to_string()).collect();
                    assert_eq!(parameters, &expected);
                }
                other => panic!("not a function literal: {}", other),
            }
        }
    }

    #[test]
    fn test_call_expression() {
        let program = parse("add(1, 2 * 3, 4 + 5);");
        assert_eq!(program.statements.len(), 1);

        let expected = Expression::Call {
            function: Box::new(ident("add")),
            arguments: vec![
                Expression::Integer(1),
                infix(Expression::Integer(2), "*", Expression::Integer(3)),
                infix(Expression::Integer(4), "+", Expression::Integer(5)),
            ],
        };
        assert_eq!(program.statements[0], Statement::Expression(expected));
    }

    #[test]
    fn test_string_literal() {
        let program = parse(r#""hello world";"#);
        assert_eq!(
            program.statements[0],
            Statement::Expression(Expression::Str("hello world".to_string()))
        );
    }

    #[test]
    fn test_array_literal() {
        let program = parse("[1, 2 * 2, 3 + 3]");
        let expected = Expression::Array(vec![
            Expression::Integer(1),
            infix(Expression::Integer(2), "*", Expression::Integer(2)),
            infix(Expression::Integer(3), "+", Expression::Integer(3)),
        ]);
        assert_eq!(program.statements[0], Statement::Expression(expected));
    }

    #[test]
    fn test_empty_array_literal() {
        let program = parse("[]");
        assert_eq!(
            program.statements[0],
            Statement::Expression(Expression::Array(vec![]))
        );
    }

    #[test]
    fn test_index_expression() {
        let program = parse("myArray[1 + 1]");
        let expected = Expression::Index {
            left: Box::new(ident("myArray")),
            index: Box::new(infix(Expression::Integer(1), "+", Expression::Integer(1))),
        };
        assert_eq!(program.statements[0], Statement::Expression(expected));
    }

    #[test]
    fn test_hash_literal() {
        let program = parse(r#"{"one": 1, "two": 2, "three": 3}"#);
        let expected = Expression::Hash(vec![
            (Expression::Str("one".to_string()), Expression::Integer(1)),
            (Expression::Str("two".to_string()), Expression::Integer(2)),
            (Expression::Str("three".to_string()), Expression::Integer(3)),
        ]);
        assert_eq!(program.statements[0], Statement::Expression(expected));
    }

    #[test]
    fn test_empty_hash_literal() {
        let program = parse("{}");
        assert_eq!(
            program.statements[0],
            Statement::Expression(Expression::Hash(vec![]))
        );
    }

    #[test]
    fn test_hash_literal_with_expressions() {
        let program = parse(r#"{"one": 0 + 1, "two": 10 - 8}"#);
        let expected = Expression::Hash(vec![
            (
                Expression::Str("one".to_string()),
                infix(Expression::Integer(0), "+", Expression::Integer(1)),
            ),
            (
                Expression::Str("two".to_string()),
                infix(Expression::Integer(10), "-", Expression::Integer(8)),
            ),
        ]);
        assert_eq!(program.statements[0], Statement::Expression(expected));
    }

    #[test]
    fn test_errors_do_not_halt_parsing() {
        let l = Lexer::new("let x 5; let y = 10;");
        let mut p = Parser::new(l);
        let program = p.parse_program();

        assert_eq!(p.errors().len(), 1);
        // the second statement still parses
        assert!(program
            .statements
            .iter()
            .any(|s| matches!(s, Statement::Let { name, .. } if name == "y")));
    }
}
