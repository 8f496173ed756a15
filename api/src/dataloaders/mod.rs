mod user;
mod wallet;

pub use user::Loader as UserLoader;
pub use wallet::UserWalletsLoader;
