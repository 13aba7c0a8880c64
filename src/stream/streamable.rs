// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io;

use tokio::io::{AsyncRead, AsyncReadExt};

/// A lazily-consumable byte sequence, convertible to and from a live byte
/// stream.
///
/// A streamable is created by one stage and consumed by exactly one
/// downstream stage — every consumer takes `self`, so re-reading is ruled
/// out by ownership. Wrapping a reader never buffers it; bytes are pulled
/// only as the eventual consumer demands them.
pub struct Streamable {
    reader: Box<dyn AsyncRead + Send + Unpin>,
}

impl Streamable {
    /// Wrap a live byte stream. The reader is consumed lazily.
    pub fn from_reader(reader: Box<dyn AsyncRead + Send + Unpin>) -> Self {
        Self { reader }
    }

    /// Wrap an already-materialized byte buffer
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::from_reader(Box::new(io::Cursor::new(bytes)))
    }

    /// Wrap a UTF-8 text value
    pub fn from_text(text: String) -> Self {
        Self::from_bytes(text.into_bytes())
    }

    /// An empty streamable
    pub fn empty() -> Self {
        Self::from_bytes(Vec::new())
    }

    /// Convert back into a live byte stream
    pub fn into_reader(self) -> Box<dyn AsyncRead + Send + Unpin> {
        self.reader
    }

    /// Drain the streamable into a byte buffer
    pub async fn into_bytes(mut self) -> io::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.reader.read_to_end(&mut buffer).await?;
        Ok(buffer)
    }

    /// Drain the streamable and decode it as UTF-8 text
    pub async fn into_text(self) -> io::Result<String> {
        let bytes = self.into_bytes().await?;
        String::from_utf8(bytes)
            .map_err(|source| io::Error::new(io::ErrorKind::InvalidData, source))
    }
}

impl std::fmt::Debug for Streamable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Streamable(..)")
    }
}
