use std::fmt::{Debug, Display};
pub struct ResizeError(pub String);

impl Display for ResizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for ResizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ResizeError").field(&self.0).finish()
    }
}

impl std::error::Error for ResizeError {}

#[macro_export]
macro_rules! im_err {
    ($($arg:tt)*) => {
        $crate::error::ResizeError(format!(
            "imgresize: {} @ {}:{}:{}",
            format_args!($($arg)*),
            file!(),
            line!(),
            column!()
        ))
    };
}

#[macro_export]
macro_rules! im_try {
    ($expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::im_err!("{}", err));
            }
        }
    };
}
