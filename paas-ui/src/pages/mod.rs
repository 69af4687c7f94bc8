pub mod home;
pub mod resource_page;

pub use home::Home;
pub use resource_page::ResourcePage;
