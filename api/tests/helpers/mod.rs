pub mod app;
pub mod requests;

pub use app::{TestApp, make_test_app};
pub use requests::{get_json_body, send};
