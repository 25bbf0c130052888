mod fields;
mod record;

pub use fields::CurrentBook;
pub use record::{decode, encode, StoredRecord};
