use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use log::debug;

use crate::ast::{Expression, Node, Program, Statement};
use crate::builtin::BuiltinFunction;
use crate::environment::Environment;
use crate::object::{HashKey, HashPair, Object};

/// Tree-walker over the AST. Holds the environment the next node will be
/// evaluated in; function application swaps in a fresh enclosed scope.
pub struct Evaluator {
    env: Rc<RefCell<Environment>>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            env: Rc::new(RefCell::new(Environment::new())),
        }
    }

    fn with_env(env: Rc<RefCell<Environment>>) -> Self {
        Self { env }
    }

    /// Maps a node to a value. Always returns a concrete object; runtime
    /// failures come back as `Object::Error`, and `Object::ReturnValue` only
    /// appears as an internal signal between a `return` statement and the
    /// program or call boundary that unwraps it.
    pub fn eval(&mut self, node: Node) -> Object {
        match node {
            Node::Program(program) => self.eval_program(program),
            Node::Statement(stmt) => match stmt {
                Statement::Block(stmts) => self.eval_block_statement(stmts),
                Statement::Expression(exp) => self.eval(Node::Expression(exp)),
                Statement::Return(exp) => {
                    let value = self.eval(Node::Expression(exp));
                    if is_error(&value) {
                        return value;
                    }
                    Object::ReturnValue(Box::new(value))
                }
                Statement::Let { name, value } => {
                    let value = self.eval(Node::Expression(value));
                    if is_error(&value) {
                        return value;
                    }
                    debug!("bind {} = {}", name, value.kind());
                    self.env.borrow_mut().set(name, value.clone());
                    value
                }
            },
            Node::Expression(exp) => match exp {
                Expression::Integer(i) => Object::Integer(i),
                Expression::Str(s) => Object::Str(s),
                Expression::Boolean(b) => Object::Boolean(b),
                Expression::Identifier(name) => self.eval_identifier(&name),
                Expression::Prefix { operator, right } => {
                    let right = self.eval(Node::Expression(*right));
                    if is_error(&right) {
                        return right;
                    }
                    eval_prefix_expression(&operator, right)
                }
                Expression::Infix {
                    operator,
                    left,
                    right,
                } => {
                    let left = self.eval(Node::Expression(*left));
                    if is_error(&left) {
                        return left;
                    }
                    let right = self.eval(Node::Expression(*right));
                    if is_error(&right) {
                        return right;
                    }
                    eval_infix_expression(&operator, left, right)
                }
                Expression::If {
                    condition,
                    consequence,
                    alternative,
                } => self.eval_if_expression(*condition, *consequence, alternative),
                Expression::Function { parameters, body } => Object::Function {
                    parameters,
                    body: *body,
                    env: Rc::clone(&self.env),
                },
                Expression::Call {
                    function,
                    arguments,
                } => {
                    let function = self.eval(Node::Expression(*function));
                    if is_error(&function) {
                        return function;
                    }
                    let args = self.eval_expressions(arguments);
                    if args.len() == 1 && is_error(&args[0]) {
                        return args[0].clone();
                    }
                    apply_function(function, args)
                }
                Expression::Array(elements) => {
                    let elements = self.eval_expressions(elements);
                    if elements.len() == 1 && is_error(&elements[0]) {
                        return elements[0].clone();
                    }
                    Object::Array(elements)
                }
                Expression::Index { left, index } => {
                    let left = self.eval(Node::Expression(*left));
                    if is_error(&left) {
                        return left;
                    }
                    let index = self.eval(Node::Expression(*index));
                    if is_error(&index) {
                        return index;
                    }
                    eval_index_expression(left, index)
                }
                Expression::Hash(pairs) => self.eval_hash_literal(pairs),
            },
        }
    }

    // Unwraps ReturnValue here, at the outermost boundary.
    fn eval_program(&mut self, program: Program) -> Object {
        let mut result = Object::Null;

        for stmt in program.statements {
            result = self.eval(Node::Statement(stmt));

            match result {
                Object::ReturnValue(value) => return *value,
                Object::Error(_) => return result,
                _ => {}
            }
        }
        result
    }

    // ReturnValue and Error pass through unexamined so a `return` nested in
    // inner blocks bubbles out to the enclosing function or program.
    fn eval_block_statement(&mut self, statements: Vec<Statement>) -> Object {
        let mut result = Object::Null;

        for stmt in statements {
            result = self.eval(Node::Statement(stmt));

            if matches!(result, Object::ReturnValue(_) | Object::Error(_)) {
                return result;
            }
        }
        result
    }

    fn eval_if_expression(
        &mut self,
        condition: Expression,
        consequence: Statement,
        alternative: Option<Box<Statement>>,
    ) -> Object {
        let condition = self.eval(Node::Expression(condition));
        if is_error(&condition) {
            return condition;
        }

        if is_truthy(&condition) {
            self.eval(Node::Statement(consequence))
        } else {
            match alternative {
                Some(alt) => self.eval(Node::Statement(*alt)),
                None => Object::Null,
            }
        }
    }

    fn eval_identifier(&mut self, name: &str) -> Object {
        if let Some(obj) = self.env.borrow().get(name) {
            return obj;
        }
        match BuiltinFunction::look_up(name) {
            Some(builtin) => Object::Builtin(builtin),
            None => new_error(format!("identifier not found: {}", name)),
        }
    }

    // Left-to-right; on the first error the result collapses to a
    // single-element list holding it, which the caller short-circuits on.
    fn eval_expressions(&mut self, expressions: Vec<Expression>) -> Vec<Object> {
        let mut result = Vec::new();

        for exp in expressions {
            let evaluated = self.eval(Node::Expression(exp));
            if is_error(&evaluated) {
                return vec![evaluated];
            }
            result.push(evaluated);
        }
        result
    }

    fn eval_hash_literal(&mut self, pairs: Vec<(Expression, Expression)>) -> Object {
        let mut hash = BTreeMap::new();

        for (key_exp, value_exp) in pairs {
            let key = self.eval(Node::Expression(key_exp));
            if is_error(&key) {
                return key;
            }
            let hash_key = match HashKey::from_object(&key) {
                Some(hk) => hk,
                None => return new_error(format!("unusable as hash key: {}", key.kind())),
            };

            let value = self.eval(Node::Expression(value_exp));
            if is_error(&value) {
                return value;
            }

            hash.insert(hash_key, HashPair { key, value });
        }
        Object::Hash(hash)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn new_error(msg: String) -> Object {
    Object::Error(msg)
}

fn is_error(obj: &Object) -> bool {
    matches!(obj, Object::Error(_))
}

fn is_truthy(obj: &Object) -> bool {
    match obj {
        Object::Null => false,
        Object::Boolean(b) => *b,
        _ => true,
    }
}

fn eval_prefix_expression(operator: &str, right: Object) -> Object {
    match operator {
        "!" => eval_bang_operator_expression(right),
        "-" => eval_minus_prefix_operator_expression(right),
        _ => new_error(format!("unknown operator: {}{}", operator, right.kind())),
    }
}

fn eval_bang_operator_expression(right: Object) -> Object {
    match right {
        Object::Boolean(b) => Object::Boolean(!b),
        Object::Null => Object::Boolean(true),
        _ => Object::Boolean(false),
    }
}

fn eval_minus_prefix_operator_expression(right: Object) -> Object {
    match right {
        Object::Integer(i) => Object::Integer(-i),
        other => new_error(format!("unknown operator: -{}", other.kind())),
    }
}

fn eval_infix_expression(operator: &str, left: Object, right: Object) -> Object {
    match (left, right) {
        (Object::Integer(l), Object::Integer(r)) => {
            eval_integer_infix_expression(operator, l, r)
        }
        (Object::Str(l), Object::Str(r)) => eval_string_infix_expression(operator, &l, &r),
        (left, right) => match operator {
            "==" => Object::Boolean(objects_equal(&left, &right)),
            "!=" => Object::Boolean(!objects_equal(&left, &right)),
            _ if left.kind() != right.kind() => new_error(format!(
                "type mismatch: {} {} {}",
                left.kind(),
                operator,
                right.kind()
            )),
            _ => new_error(format!(
                "unknown operator: {} {} {}",
                left.kind(),
                operator,
                right.kind()
            )),
        },
    }
}

// Equality for the non-integer, non-string fallback. Booleans and null
// compare by value, which coincides with the identity comparison their
// singleton nature implies; everything else is only ever equal to itself.
fn objects_equal(left: &Object, right: &Object) -> bool {
    match (left, right) {
        (Object::Boolean(l), Object::Boolean(r)) => l == r,
        (Object::Null, Object::Null) => true,
        _ => false,
    }
}

fn eval_integer_infix_expression(operator: &str, left: i64, right: i64) -> Object {
    match operator {
        "+" => Object::Integer(left + right),
        "-" => Object::Integer(left - right),
        "*" => Object::Integer(left * right),
        "/" => {
            if right == 0 {
                new_error(format!("division by zero: {} / {}", left, right))
            } else {
                Object::Integer(left / right)
            }
        }
        "<" => Object::Boolean(left < right),
        ">" => Object::Boolean(left > right),
        "==" => Object::Boolean(left == right),
        "!=" => Object::Boolean(left != right),
        _ => new_error(format!("unknown operator: INTEGER {} INTEGER", operator)),
    }
}

fn eval_string_infix_expression(operator: &str, left: &str, right: &str) -> Object {
    match operator {
        "+" => Object::Str(format!("{}{}", left, right)),
        "==" => Object::Boolean(left == right),
        "!=" => Object::Boolean(left != right),
        _ => new_error(format!("unknown operator: STRING {} STRING", operator)),
    }
}

fn eval_index_expression(left: Object, index: Object) -> Object {
    match (left, index) {
        (Object::Array(elements), Object::Integer(i)) => {
            if i < 0 || i >= elements.len() as i64 {
                Object::Null
            } else {
                elements[i as usize].clone()
            }
        }
        (Object::Hash(pairs), index) => match HashKey::from_object(&index) {
            Some(key) => pairs
                .get(&key)
                .map(|pair| pair.value.clone())
                .unwrap_or(Object::Null),
            None => new_error(format!("unusable as hash key: {}", index.kind())),
        },
        (left, _) => new_error(format!("index operator not supported: {}", left.kind())),
    }
}

fn apply_function(function: Object, args: Vec<Object>) -> Object {
    match function {
        Object::Function {
            parameters,
            body,
            env,
        } => {
            if parameters.len() != args.len() {
                return new_error(format!(
                    "wrong number of arguments. got={}, want={}",
                    args.len(),
                    parameters.len()
                ));
            }
            debug!("apply function with {} arguments", args.len());

            // The call scope extends the closure's captured environment,
            // not the caller's.
            let mut call_env = Environment::new_enclosed(env);
            for (param, arg) in parameters.into_iter().zip(args) {
                call_env.set(param, arg);
            }

            let mut evaluator = Evaluator::with_env(Rc::new(RefCell::new(call_env)));
            let result = evaluator.eval(Node::Statement(body));
            unwrap_return_value(result)
        }
        Object::Builtin(builtin) => builtin.call(args),
        other => new_error(format!("not a function: {}", other.kind())),
    }
}

fn unwrap_return_value(obj: Object) -> Object {
    match obj {
        Object::ReturnValue(value) => *value,
        other => other,
    }
}
