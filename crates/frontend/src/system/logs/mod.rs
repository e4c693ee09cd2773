pub mod api;
pub mod forwarder;
pub mod pages;
pub mod pipeline;
pub mod viewer;
