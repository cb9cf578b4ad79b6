//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use signup_form::form::{FormProps, FormValues, SignupForm};
use signup_form::ui::app::App;
use signup_form::ui::render::draw;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use tempfile::TempDir;

pub type Submissions = Rc<RefCell<Vec<FormValues>>>;

/// Build a form whose submit callback records every call.
pub fn recording_form(configure: impl FnOnce(FormProps) -> FormProps) -> (SignupForm, Submissions) {
    let submissions: Submissions = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&submissions);
    let props = configure(FormProps::new(move |values: FormValues| {
        sink.borrow_mut().push(values)
    }));
    (SignupForm::new(props), submissions)
}

/// Render `app` into an in-memory terminal and return its rows as text.
pub fn render_lines(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

/// Write `content` to a file inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
