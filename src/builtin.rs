use std::fmt;
use std::fmt::Formatter;

use once_cell::sync::Lazy;

use crate::evaluator::new_error;
use crate::object::Object;

pub type BuiltinFn = fn(args: Vec<Object>) -> Object;

/// A host function callable as an ordinary value. Whatever it returns flows
/// back into evaluation, errors included.
#[derive(Clone, Copy)]
pub struct BuiltinFunction {
    name: &'static str,
    func: BuiltinFn,
}

static BUILTINS: Lazy<Vec<BuiltinFunction>> = Lazy::new(|| {
    vec![
        BuiltinFunction {
            name: "len",
            func: builtin_len,
        },
        BuiltinFunction {
            name: "first",
            func: builtin_first,
        },
        BuiltinFunction {
            name: "last",
            func: builtin_last,
        },
        BuiltinFunction {
            name: "rest",
            func: builtin_rest,
        },
        BuiltinFunction {
            name: "push",
            func: builtin_push,
        },
        BuiltinFunction {
            name: "puts",
            func: builtin_puts,
        },
    ]
});

impl BuiltinFunction {
    pub fn look_up(name: &str) -> Option<Self> {
        BUILTINS.iter().find(|b| b.name == name).copied()
    }

    pub fn call(&self, args: Vec<Object>) -> Object {
        (self.func)(args)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for BuiltinFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for BuiltinFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for BuiltinFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "builtin {}", self.name)
    }
}

fn builtin_len(args: Vec<Object>) -> Object {
    if args.len() != 1 {
        return new_error(format!(
            "wrong number of arguments. got={}, want=1",
            args.len()
        ));
    }

    match &args[0] {
        Object::Str(s) => Object::Integer(s.len() as i64),
        Object::Array(elements) => Object::Integer(elements.len() as i64),
        other => new_error(format!(
            "argument to 'len' not supported, got {}",
            other.kind()
        )),
    }
}

fn builtin_first(args: Vec<Object>) -> Object {
    if args.len() != 1 {
        return new_error(format!(
            "wrong number of arguments. got={}, want=1",
            args.len()
        ));
    }

    match &args[0] {
        Object::Array(elements) => elements.first().cloned().unwrap_or(Object::Null),
        other => new_error(format!(
            "argument to 'first' not supported, got {}",
            other.kind()
        )),
    }
}

fn builtin_last(args: Vec<Object>) -> Object {
    if args.len() != 1 {
        return new_error(format!(
            "wrong number of arguments. got={}, want=1",
            args.len()
        ));
    }

    match &args[0] {
        Object::Array(elements) => elements.last().cloned().unwrap_or(Object::Null),
        other => new_error(format!(
            "argument to 'last' not supported, got {}",
            other.kind()
        )),
    }
}

// Returns a new array without the head; hands back NULL for an empty array.
fn builtin_rest(args: Vec<Object>) -> Object {
    if args.len() != 1 {
        return new_error(format!(
            "wrong number of arguments. got={}, want=1",
            args.len()
        ));
    }

    match &args[0] {
        Object::Array(elements) => {
            if elements.is_empty() {
                Object::Null
            } else {
                Object::Array(elements[1..].to_vec())
            }
        }
        other => new_error(format!(
            "argument to 'rest' not supported, got {}",
            other.kind()
        )),
    }
}

// Arrays are immutable; push allocates a copy with the value appended.
fn builtin_push(args: Vec<Object>) -> Object {
    if args.len() != 2 {
        return new_error(format!(
            "wrong number of arguments. got={}, want=2",
            args.len()
        ));
    }

    match &args[0] {
        Object::Array(elements) => {
            let mut pushed = elements.clone();
            pushed.push(args[1].clone());
            Object::Array(pushed)
        }
        other => new_error(format!(
            "argument to 'push' not supported, got {}",
            other.kind()
        )),
    }
}

fn builtin_puts(args: Vec<Object>) -> Object {
    for arg in args {
        println!("{}", arg);
    }
    Object::Null
}
