mod byte_order;
mod cursor;
mod source;

pub use byte_order::ByteOrder;
pub use cursor::ByteCursor;
pub use source::{collect_image_paths, has_image_extension, read_image, DEFAULT_EXTENSIONS};
