// A participant is an identified actor pinned to a 2d position.
// Everything here is plain data: the shapes carry no behavior of their
// own and are meant to be embedded into whatever messages the
// surrounding system exchanges.

mod codec;
mod color;
mod participant;
mod position;
mod reader;
mod writer;

pub use codec::{BinCodec, CodecError};
pub use color::{Color, ColorError};
pub use participant::Participant;
pub use position::Position;
pub use reader::Reader;
pub use tokio_util::codec::{Decoder, Encoder};
pub use writer::{WriteError, Writer};
