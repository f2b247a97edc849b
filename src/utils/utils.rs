// Start of file: src/utils/utils.rs

use axum::http::StatusCode;
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer};

/*
    * Convert any `Serialize` type into a two-space-indented JSON string.
*/
pub fn to_two_space_indented_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let mut writer: Vec<u8> = Vec::new();

    let formatter: PrettyFormatter<'_> = PrettyFormatter::with_indent(b"  ");

    let mut ser: Serializer<&mut Vec<u8>, PrettyFormatter<'_>> =
        Serializer::with_formatter(&mut writer, formatter);

    value.serialize(&mut ser)?;

    Ok(String::from_utf8(writer)?)
}

/*
    * Builds an error key from the status reason (e.g. 404 -> "NOT_FOUND").
*/
pub fn status_key(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_uppercase()
        .replace(' ', "_")
}


// End of file: src/utils/utils.rs
