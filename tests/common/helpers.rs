#![allow(dead_code)]

use console::strip_ansi_codes;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use spb::{ProgressBar, ProgressBarBuilder, StartTime, Toggle};

// Wide enough for every configuration used in the tests.
pub const TEST_COLUMNS: usize = 300;

// Written after every frame.
pub const LINE_END: &str = "  \u{8}";

/// Writer whose contents stay readable after the bar is dropped.
#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("Output should be UTF-8")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer that rejects every write.
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A small static bar with deterministic output: `[]` brackets, `#` arrows,
/// `-` spaces, ten columns, four steps and no timer.
pub fn create_test_builder() -> ProgressBarBuilder {
    ProgressBarBuilder::new()
        .start(0)
        .stop(4)
        .len_bar(10)
        .variant_arrow("#")
        .variant_space("-")
        .variant_brackets("[]")
        .percent(Toggle::Show)
        .timer(Toggle::Hide)
}

/// Build a bar writing into a `Vec<u8>`.
pub fn create_test_bar(builder: ProgressBarBuilder) -> ProgressBar<Vec<u8>> {
    builder
        .build_with_writer(TEST_COLUMNS, Vec::new(), StartTime::new())
        .expect("Test configuration should be valid")
}

/// Build a bar writing into a [`SharedBuffer`].
pub fn create_shared_bar(builder: ProgressBarBuilder) -> (ProgressBar<SharedBuffer>, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let bar = builder
        .build_with_writer(TEST_COLUMNS, buffer.clone(), StartTime::new())
        .expect("Test configuration should be valid");
    (bar, buffer)
}

/// Raw output of a bar writing into a `Vec<u8>`.
pub fn output(bar: &ProgressBar<Vec<u8>>) -> String {
    String::from_utf8(bar.get_ref().clone()).expect("Output should be UTF-8")
}

/// Visible text of every frame written so far, without colors or line ends.
pub fn frames(raw: &str) -> Vec<String> {
    strip_ansi_codes(raw)
        .split('\r')
        .skip(1)
        .map(|frame| match frame.find(LINE_END) {
            Some(end) => frame[..end].to_string(),
            None => frame.to_string(),
        })
        .collect()
}

/// Visible text of the most recent frame.
pub fn last_frame(raw: &str) -> String {
    frames(raw).pop().expect("At least one frame should have been written")
}
