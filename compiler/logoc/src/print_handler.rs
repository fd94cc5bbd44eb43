//! Print handler for the `p`/`print` primitive.
//!
//! Output goes to stdout for the binary and to a buffer for tests. Enum
//! dispatch, no trait objects.

use std::rc::Rc;

use parking_lot::Mutex;

/// Where printed lines go.
pub enum PrintHandler {
    Stdout,
    Buffer(Mutex<String>),
}

impl PrintHandler {
    pub fn buffer() -> Self {
        PrintHandler::Buffer(Mutex::new(String::new()))
    }

    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => println!("{msg}"),
            Self::Buffer(buffer) => {
                let mut buf = buffer.lock();
                buf.push_str(msg);
                buf.push('\n');
            }
        }
    }

    /// Everything captured so far; empty for stdout.
    pub fn output(&self) -> String {
        match self {
            Self::Stdout => String::new(),
            Self::Buffer(buffer) => buffer.lock().clone(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(buffer) = self {
            buffer.lock().clear();
        }
    }
}

/// Handle shared between the host primitives and the driver.
pub type SharedPrintHandler = Rc<PrintHandler>;

pub fn stdout_handler() -> SharedPrintHandler {
    Rc::new(PrintHandler::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Rc::new(PrintHandler::buffer())
}
