//! Post-walk reconciliation of the extracted metadata.
//!
//! Runs once the token stream is exhausted: the captured JSON-LD node (if
//! there is exactly one) is merged into `main_content`, then the HTML
//! `<title>` is used as a last-resort title.

pub mod identity;
pub mod json_ld;

use crate::options::Options;
use crate::result::PageInfo;

pub use identity::merge_entity;
pub use json_ld::fill_from_json_ld;

/// Reconcile the sources gathered during the walk into `main_content`.
pub fn reconcile(info: &mut PageInfo, options: &Options) {
    if options.reconcile_json_ld && fill_from_json_ld(info) {
        log::debug!("reconciled main content with its JSON-LD node");
    }

    // <title> often carries the site name as well, so it only fills a gap.
    if info.main_content.title.is_none() {
        if let Some(title) = &info.html.title {
            info.main_content.title = Some(title.clone());
        }
    }
}
