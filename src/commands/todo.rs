//! Todo Endpoints
//!
//! Paths of the todo backend routes.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::models::TodoId;

pub const FETCH_ALL_PATH: &str = "/todo/fetch-all";

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn update_name_path(id: &TodoId) -> String {
    format!("/todo/update-name/{}", encode_segment(id))
}

pub fn toggle_completed_path(id: &TodoId) -> String {
    format!("/todo/toggle-completed/{}", encode_segment(id))
}

fn encode_segment(id: &TodoId) -> String {
    utf8_percent_encode(id.as_str(), PATH_SEGMENT).to_string()
}
