pub mod alerts;
pub mod chat;
pub mod courses;
pub mod dispatch;
pub mod home;
pub mod market;
pub mod nav;
pub mod shared;
pub mod tools;
pub mod user;
pub mod wiki;
