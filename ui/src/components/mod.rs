pub mod backends;
pub mod simple;

mod footer;

pub use backends::*;
pub use footer::Footer;
pub use simple::*;
