use std::{io, marker::PhantomData};

use bincode::Options as _;
use bytes::{Buf, BufMut, BytesMut};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tokio_util::codec::{Decoder, Encoder};

/// Frame header: payload size as a big endian u32.
const HEADER: usize = 4;

/// Largest payload accepted on decode and produced on encode.
const MAX_FRAME: u32 = 64 * 1024 * 1024;

fn options() -> impl bincode::Options {
    bincode::options()
        .with_big_endian()
        .with_fixint_encoding()
        .with_limit(MAX_FRAME as u64)
}

/// Length prefixed bincode codec for any serde type. A frame is the
/// payload size followed by the payload itself, so a decoder can tell
/// an incomplete frame from a corrupt one.
pub struct BinCodec<T> {
    phantom: PhantomData<T>,
}

impl<T> BinCodec<T> {
    pub fn new() -> BinCodec<T> {
        BinCodec {
            phantom: PhantomData,
        }
    }
}

impl<T> Default for BinCodec<T> {
    fn default() -> Self {
        BinCodec::new()
    }
}

impl<T> Decoder for BinCodec<T>
where
    T: DeserializeOwned,
{
    type Item = T;

    type Error = CodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.len() < HEADER {
            return Ok(None);
        }

        let size = u32::from_be_bytes(src[..HEADER].try_into().unwrap());
        if size > MAX_FRAME {
            return Err(CodecError::FrameTooLarge(size as usize));
        }

        let size = size as usize;
        if src.len() < HEADER + size {
            src.reserve(HEADER + size - src.len());
            return Ok(None);
        }

        // The whole frame is consumed even when the payload fails to
        // decode, leaving the buffer aligned on the next length prefix.
        src.advance(HEADER);
        let payload = src.split_to(size);
        let item = options().deserialize(&payload[..])?;
        Ok(Some(item))
    }
}

impl<T> Encoder<&T> for BinCodec<T>
where
    T: Serialize,
{
    type Error = CodecError;

    fn encode(&mut self, item: &T, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let size = options().serialized_size(item)?;
        if size > MAX_FRAME as u64 {
            return Err(CodecError::FrameTooLarge(size as usize));
        }

        dst.reserve(HEADER + size as usize);
        dst.put_u32(size as u32);
        options().serialize_into(dst.writer(), item)?;
        Ok(())
    }
}

impl<T> Encoder<T> for BinCodec<T>
where
    T: Serialize,
{
    type Error = CodecError;

    fn encode(&mut self, item: T, dst: &mut BytesMut) -> Result<(), Self::Error> {
        Encoder::<&T>::encode(self, &item, dst)
    }
}

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Frame of {0} bytes exceeds the frame size limit")]
    FrameTooLarge(usize),

    #[error("Failed to encode or decode payload")]
    Bincode(#[from] Box<bincode::ErrorKind>),

    #[error("Io error")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Participant, Position};

    #[test]
    fn roundtrip() {
        let mut codec = BinCodec::<Participant>::new();
        let participant = Participant::new(42, "grace", Position::new(10.0, 20.0));

        let mut buf = BytesMut::new();
        codec.encode(&participant, &mut buf).unwrap();

        let decoded = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(decoded, participant);
        assert!(buf.is_empty());
    }

    #[test]
    fn incomplete_frame_decodes_to_none() {
        let mut codec = BinCodec::<Participant>::new();
        let participant = Participant::new(1, "ada", Position::default());

        let mut buf = BytesMut::new();
        codec.encode(&participant, &mut buf).unwrap();

        let rest = buf.split_off(buf.len() / 2);
        assert!(codec.decode(&mut buf).unwrap().is_none());

        buf.unsplit(rest);
        assert!(codec.decode(&mut buf).unwrap().is_some());
    }

    #[test]
    fn corrupt_payload_consumes_the_frame() {
        let mut codec = BinCodec::<Participant>::new();
        let participant = Participant::new(3, "edsger", Position::new(5.0, 6.0));

        let mut buf = BytesMut::new();
        codec.encode(&participant, &mut buf).unwrap();

        // Invalid color tag, right before the 16 position bytes
        let tag = buf.len() - 20;
        buf[tag] = 0xff;

        assert!(matches!(
            codec.decode(&mut buf),
            Err(CodecError::Bincode(_))
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn oversized_header_is_an_error() {
        let mut codec = BinCodec::<Participant>::new();
        let mut buf = BytesMut::from(&[0xff, 0xff, 0xff, 0xff][..]);
        assert!(matches!(
            codec.decode(&mut buf),
            Err(CodecError::FrameTooLarge(_))
        ));
    }
}
