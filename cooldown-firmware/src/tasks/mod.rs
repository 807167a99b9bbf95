//! Embassy async tasks
//!
//! Each task runs for the life of the firmware and touches the session
//! only through `crate::channels`.

pub mod clock;
pub mod render;
pub mod scan;

pub use clock::clock_task;
pub use render::render_task;
pub use scan::scan_task;
