use std::io;

use bytes::BytesMut;
use serde::Serialize;
use thiserror::Error;
use tokio_util::codec::Encoder;

use crate::{BinCodec, CodecError};

/// Writes one framed value per call to a blocking writer. Frames are
/// staged in an internal buffer first, so a failed encode leaves the
/// underlying writer untouched.
pub struct Writer<W: io::Write, T> {
    write: W,
    buf: BytesMut,
    codec: BinCodec<T>,
}

impl<W: io::Write, T> Writer<W, T>
where
    T: Serialize,
{
    #[inline]
    pub fn new(write: W) -> Writer<W, T> {
        Writer {
            write,
            buf: BytesMut::new(),
            codec: BinCodec::new(),
        }
    }

    pub fn write(&mut self, msg: &T) -> Result<(), WriteError> {
        self.buf.clear();
        self.codec.encode(msg, &mut self.buf)?;
        self.write.write_all(&self.buf)?;
        self.write.flush()?;
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Failed to encode message")]
    Encoding(#[from] CodecError),

    #[error("Write error")]
    Io(#[from] io::Error),
}
