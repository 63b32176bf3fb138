mod dry_run;
mod kill;
mod r#trait;

pub use self::r#trait::{create_signaller, Signaller};
