/*!
## Rust Terminal Module

This Rust module connects the concat runtime to an interactive
terminal: line editing and history from linefeed, CTRL-C delivered as
an interrupt, warnings and fatal errors in bold.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::mach::{Event, Runtime};
use ansi_term::Style;
use linefeed::{Interface, ReadResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    match main_loop(interrupted) {
        Ok(status) => std::process::exit(status),
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}

fn main_loop(interrupted: Arc<AtomicBool>) -> std::io::Result<i32> {
    let mut runtime = Runtime::default();
    let command = Interface::new("concat")?;
    loop {
        if interrupted.load(Ordering::SeqCst) {
            runtime.interrupt();
            interrupted.store(false, Ordering::SeqCst);
        };
        match runtime.execute(5000) {
            Event::Stopped => {
                let string = match command.read_line()? {
                    ReadResult::Input(string) => string,
                    ReadResult::Signal(_) | ReadResult::Eof => return Ok(0),
                };
                if runtime.enter(&string) {
                    command.add_history_unique(string);
                }
            }
            Event::Running => {}
            Event::Print(s) => {
                command.write_fmt(format_args!("{}", s))?;
            }
            Event::Warning(s) => {
                command.write_fmt(format_args!("{}\n", Style::new().bold().paint(s)))?;
            }
            Event::Error(error) => {
                command.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(format!("?{}", error))
                ))?;
                // Return rather than exit here so the interface drops
                // and restores the terminal state first.
                return Ok(1);
            }
        }
    }
}
