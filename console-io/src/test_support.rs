//! Test-only helpers for driving a [`Console`] from a script.

use std::io::Cursor;

use crate::console::Console;

/// Console reading from an in-memory script and writing to a buffer.
pub type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

/// Build a console whose input is `lines`, each terminated by a newline.
pub fn scripted_console(lines: &[&str]) -> ScriptedConsole {
    let mut script = String::new();
    for line in lines {
        script.push_str(line);
        script.push('\n');
    }
    Console::new(Cursor::new(script.into_bytes()), Vec::new())
}

/// Everything written to the console so far.
pub fn transcript(console: &ScriptedConsole) -> String {
    String::from_utf8_lossy(console.output()).into_owned()
}
