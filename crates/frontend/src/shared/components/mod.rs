pub mod page_header;
pub mod session_qr;
pub mod table;
pub mod ui;

pub use page_header::PageHeader;
pub use session_qr::{qr_svg, SessionQr};
