use std::io;

use bytes::{Buf, BytesMut};
use serde::de::DeserializeOwned;
use tokio_util::codec::Decoder;

use crate::{BinCodec, CodecError};

const CHUNK_SIZE: usize = 1024 * 8;

/// Pulls framed values off a blocking reader. Unlike a BufReader the
/// internal buffer is consumed frame by frame through the codec. A
/// frame whose payload fails to decode is dropped whole, a broken
/// length prefix resynchronizes byte by byte. Neither ends iteration.
pub struct Reader<R: io::Read, T> {
    read: R,
    buf: BytesMut,
    codec: BinCodec<T>,
}

impl<R: io::Read, T> Reader<R, T> {
    #[inline]
    pub fn new(read: R) -> Reader<R, T> {
        Reader {
            read,
            buf: BytesMut::new(),
            codec: BinCodec::new(),
        }
    }

    /// Read more bytes to the internal buffer from the provided reader.
    #[inline]
    fn fill_buf(&mut self) -> io::Result<usize> {
        let mut chunk = [0u8; CHUNK_SIZE];
        let size = self.read.read(&mut chunk)?;
        self.buf.extend_from_slice(&chunk[..size]);
        Ok(size)
    }
}

impl<R: io::Read, T> Iterator for Reader<R, T>
where
    T: DeserializeOwned,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.codec.decode(&mut self.buf) {
                Ok(Some(msg)) => return Some(msg),
                Ok(None) => match self.fill_buf() {
                    Ok(0) | Err(_) => return None,
                    Ok(_) => {}
                },
                // Decode consumed the whole frame, the buffer already
                // sits on the next length prefix
                Err(CodecError::Bincode(e)) => {
                    log::debug!("dropping corrupt frame: {e}");
                }
                Err(e) => {
                    log::debug!("resynchronizing after: {e}");
                    if self.buf.has_remaining() {
                        self.buf.advance(1);
                    }
                }
            }
        }
    }
}
