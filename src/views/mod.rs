pub mod chat;
pub mod landing;
pub mod shared;

pub use chat::ChatView;
pub use landing::LandingView;
