mod category;
mod options;
mod value;

pub use category::{PluralCategory, UnknownCategory};
pub use options::FormatOptions;
pub use value::Value;
