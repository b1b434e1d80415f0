pub mod catalogue;
pub mod driver;
pub mod error;
pub mod fetch;
pub mod html;
pub mod images;
pub mod logging;
pub mod models;
pub mod parser;
pub mod product;
pub mod vendors;
