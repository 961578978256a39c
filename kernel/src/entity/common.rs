mod date_range;

pub use self::date_range::*;
