pub mod buf;
pub mod io;
pub mod normalize;
pub mod traits;
pub mod u8;

pub use self::buf::{ensure_same_shape, GrayImageU8, ImageBuf, ImageF64, ImageI32};
pub use self::normalize::normalize_to_u8;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::ImageU8;
