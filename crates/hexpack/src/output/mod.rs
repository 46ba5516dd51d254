//! Report output.
//!
//! A report is plain text: a label line, then one `db` line per
//! [`Row`](crate::scan::Row) of the [`Sequence`](crate::scan::Sequence):
//!
//! ```text
//! LABEL
//! 	db 0x00,0x3f,...,0xff;
//! 	db 0x15,0x2a,...,0xc0;
//! ```
//!
//! The label is derived from the destination file name by
//! [`label_for_path`].

mod report;

pub use report::{label_for_path, render_report, save_report, write_report, LABEL_MAX_CHARS};
