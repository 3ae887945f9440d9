#![allow(dead_code)]

use static_dns_application::ports::RecordSource;
use static_dns_domain::DomainError;
use std::io::{self, BufRead, BufReader, Cursor, Read};

pub struct MockRecordSource {
    name: String,
    contents: Vec<u8>,
    open_error: Option<DomainError>,
    fail_after_contents: bool,
}

impl MockRecordSource {
    pub fn new(contents: &str) -> Self {
        Self::from_bytes(contents.as_bytes())
    }

    pub fn from_bytes(contents: &[u8]) -> Self {
        Self {
            name: "records.tsv".to_string(),
            contents: contents.to_vec(),
            open_error: None,
            fail_after_contents: false,
        }
    }

    pub fn failing_open(reason: &str) -> Self {
        let mut source = Self::new("");
        source.open_error = Some(DomainError::RecordFileOpen {
            path: source.name.clone(),
            reason: reason.to_string(),
        });
        source
    }

    /// Serves the contents, then returns an I/O error instead of EOF.
    pub fn failing_read(contents: &str) -> Self {
        let mut source = Self::new(contents);
        source.fail_after_contents = true;
        source
    }
}

impl RecordSource for MockRecordSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn open(&self) -> Result<Box<dyn BufRead + Send>, DomainError> {
        if let Some(err) = &self.open_error {
            return Err(err.clone());
        }

        let cursor = Cursor::new(self.contents.clone());
        if self.fail_after_contents {
            Ok(Box::new(BufReader::new(FailingReader { inner: cursor })))
        } else {
            Ok(Box::new(cursor))
        }
    }
}

struct FailingReader {
    inner: Cursor<Vec<u8>>,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.inner.read(buf)? {
            0 => Err(io::Error::new(io::ErrorKind::Other, "device went away")),
            n => Ok(n),
        }
    }
}
