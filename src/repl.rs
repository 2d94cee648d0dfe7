use std::io;
use std::io::{BufRead, BufReader, Read, Write};

use crate::ast::Node;
use crate::evaluator::Evaluator;
use crate::lexer::Lexer;
use crate::object::Object;
use crate::parser::Parser;

const PROMPT: &str = ">> ";

const MONKEY_FACE: &str = r#"            __,__
   .--.  .-"     "-.  .--.
  / .. \/  .-. .-.  \/ .. \
 | |  '|  /   Y   \  |'  | |
 | \   \  \ 0 | 0 /  /   / |
  \ '- ,\.-"""""""-./, -' /
   ''-' /_   ^ ^   _\ '-''
       |  \._   _./  |
       \   \ '~' /   /
        '._ '-=-' _.'
           '-----'
"#;

/// The interactive loop. One environment persists across lines, so bindings
/// carry over.
pub fn start<R: Read, W: Write>(reader: R, mut writer: W) -> io::Result<()> {
    let mut reader = BufReader::new(reader);
    let mut evaluator = Evaluator::new();

    loop {
        write!(writer, "{}", PROMPT)?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let l = Lexer::new(&line);
        let mut p = Parser::new(l);
        let program = p.parse_program();
        if !p.errors().is_empty() {
            print_parser_errors(&mut writer, p.errors())?;
            continue;
        }

        let evaluated = evaluator.eval(Node::Program(program));
        writeln!(writer, "{}", evaluated)?;
    }
}

/// Runs a whole source text against `evaluator`. Parse errors get the same
/// banner as the REPL; a runtime error value is printed in its inspect form.
/// With `print_result` the final value is printed too, whatever it is.
pub fn run_source<W: Write>(
    source: &str,
    evaluator: &mut Evaluator,
    mut writer: W,
    print_result: bool,
) -> io::Result<()> {
    let l = Lexer::new(source);
    let mut p = Parser::new(l);
    let program = p.parse_program();
    if !p.errors().is_empty() {
        return print_parser_errors(&mut writer, p.errors());
    }

    let evaluated = evaluator.eval(Node::Program(program));
    if print_result || matches!(evaluated, Object::Error(_)) {
        writeln!(writer, "{}", evaluated)?;
    }
    Ok(())
}

fn print_parser_errors<W: Write>(writer: &mut W, errors: &[String]) -> io::Result<()> {
    write!(writer, "{}", MONKEY_FACE)?;
    writeln!(writer, "Woops! We ran into some monkey business here!")?;
    writeln!(writer, "parser errors:")?;
    for msg in errors {
        writeln!(writer, "\t{}", msg)?;
    }
    writer.flush()
}
