mod login;
pub use login::Login;

mod collection;
pub use collection::Collection;
