//! Host primitives.
//!
//! French names with their short and long spellings, all arity 1 except
//! `q`/`quit`:
//!
//! | Names | Effect |
//! |---|---|
//! | `p`, `print` | print the value, result Unit |
//! | `racine`, `rc` | square root |
//! | `av`, `avance` / `re`, `recule` | move the turtle |
//! | `ga`, `gauche` / `dr`, `droite` | turn the turtle (degrees) |
//! | `vi`, `vitesse` | set the turtle speed |
//! | `q`, `quit` | request the driver to stop |

use std::cell::Cell;
use std::rc::Rc;

use logo_eval::{expect_number, Interpreter, InterpreterBuilder, Keywords, ProgramError, Value};

use crate::print_handler::SharedPrintHandler;
use crate::turtle::{Command, Turtle};

type TurtleCommand = fn(f64) -> Command;

const TURTLE_PRIMITIVES: [(&str, TurtleCommand); 10] = [
    ("av", Command::Forward),
    ("avance", Command::Forward),
    ("re", Command::Backward),
    ("recule", Command::Backward),
    ("ga", Command::TurnLeft),
    ("gauche", Command::TurnLeft),
    ("dr", Command::TurnRight),
    ("droite", Command::TurnRight),
    ("vi", Command::SetSpeed),
    ("vitesse", Command::SetSpeed),
];

/// State shared by the host primitives of one program run or session.
pub struct Host {
    printer: SharedPrintHandler,
    turtle: Rc<Turtle>,
    quit: Rc<Cell<bool>>,
}

impl Host {
    pub fn new(printer: SharedPrintHandler, max_step: f64) -> Self {
        Host {
            printer,
            turtle: Rc::new(Turtle::new(max_step)),
            quit: Rc::new(Cell::new(false)),
        }
    }

    pub fn turtle(&self) -> &Turtle {
        &self.turtle
    }

    pub fn printer(&self) -> &SharedPrintHandler {
        &self.printer
    }

    /// Whether a program called `q`/`quit`.
    pub fn quit_requested(&self) -> bool {
        self.quit.get()
    }

    /// An interpreter whose host frame holds every primitive above.
    pub fn interpreter(&self, keywords: Keywords) -> Interpreter {
        self.register(Interpreter::builder().keywords(keywords)).build()
    }

    fn register(&self, mut builder: InterpreterBuilder) -> InterpreterBuilder {
        for name in ["p", "print"] {
            let printer = Rc::clone(&self.printer);
            builder = builder.primitive(name, 1, move |args| {
                printer.println(&args[0].to_string());
                Ok(Value::Unit)
            });
        }

        for name in ["racine", "rc"] {
            builder = builder.primitive(name, 1, move |args| {
                let n = expect_number(name, &args[0])?;
                if n < 0.0 {
                    return Err(ProgramError::OutOfRange {
                        name: name.to_string(),
                        value: n,
                        limit: 0.0,
                    });
                }
                Ok(Value::Float(n.sqrt()))
            });
        }

        for (name, command) in TURTLE_PRIMITIVES {
            let turtle = Rc::clone(&self.turtle);
            builder = builder.primitive(name, 1, move |args| {
                let value = expect_number(name, &args[0])?;
                turtle.apply(name, command(value))?;
                Ok(Value::Unit)
            });
        }

        for name in ["q", "quit"] {
            let quit = Rc::clone(&self.quit);
            builder = builder.primitive(name, 0, move |_| {
                quit.set(true);
                Ok(Value::Unit)
            });
        }

        builder
    }
}
